//! Populates the three grids by visiting every dictionary entry once.
//!
//! Entries are visited in ascending [`WordId`] order (the order
//! [`Dict::iter`](types::Dict::iter) yields them in), which is what lets
//! [`PositionBucket::append_or_merge`](crate::grid::PositionBucket) get
//! away with a tail check instead of a binary search on insert.

use crate::grid::{EnglishGrid, KanaGrid, KanjiGrid};
use crate::scorer::score_entry;
use japanese::JapaneseExt;
use types::{Dict, Entry};

/// Builds all three grids from `dict` in one pass.
///
/// Scoring every entry is independent per-entry work; with the `parallel`
/// feature it runs across a rayon thread pool. Insertion itself stays
/// sequential and ascending-ordered, since `append_or_merge` depends on it.
pub fn build_grids(dict: &Dict) -> (EnglishGrid, KanaGrid, KanjiGrid) {
    let mut english = EnglishGrid::new();
    let mut kana = KanaGrid::new();
    let mut kanji = KanjiGrid::new();

    let scores = score_all(dict);

    for ((word_id, entry), score) in dict.iter().zip(scores) {
        insert_english(&mut english, entry, word_id, score);
        insert_kana(&mut kana, entry, word_id, score);
        insert_kanji(&mut kanji, entry, word_id, score);
    }

    log::info!("built grids from {} entries", dict.len());

    (english, kana, kanji)
}

#[cfg(feature = "parallel")]
fn score_all(dict: &Dict) -> Vec<u16> {
    use rayon::prelude::*;
    let entries: Vec<&Entry> = dict.iter().map(|(_, entry)| entry).collect();
    entries.par_iter().map(|entry| score_entry(entry)).collect()
}

#[cfg(not(feature = "parallel"))]
fn score_all(dict: &Dict) -> Vec<u16> {
    dict.iter().map(|(_, entry)| score_entry(entry)).collect()
}

fn insert_english(grid: &mut EnglishGrid, entry: &Entry, word_id: types::WordId, score: u16) {
    for (i, sense) in entry.senses.iter().enumerate() {
        for (j, gloss) in sense.glossary.iter().enumerate() {
            for (k, word) in parse_english_words(&gloss.content).into_iter().enumerate() {
                if word.is_empty() {
                    continue;
                }
                let hash = english_hash(i, j, k);
                for (p, letter) in word.chars().enumerate() {
                    grid.insert(letter, p, word_id, score, hash);
                }
            }
        }
    }
}

/// `(i+1)*2000 + (j+1)*100 + k`, truncated to 16 bits (spec's documented
/// overflow cap: `sense <= 32`, `gloss <= 19`, `word <= 99`).
fn english_hash(sense: usize, gloss: usize, word: usize) -> u16 {
    (((sense + 1) * 2000 + (gloss + 1) * 100 + word) & 0xFFFF) as u16
}

fn insert_kana(grid: &mut KanaGrid, entry: &Entry, word_id: types::WordId, score: u16) {
    for (r, reading) in entry.readings.iter().enumerate() {
        let mut pos = 0usize;
        for c in reading.reading.chars() {
            if c.is_kana() {
                grid.insert(c, pos, word_id, score, r as u16);
                pos += 1;
            }
        }
    }
}

fn insert_kanji(grid: &mut KanjiGrid, entry: &Entry, word_id: types::WordId, score: u16) {
    for (k, form) in entry.kanji.iter().enumerate() {
        let mut pos = 0usize;
        for c in form.expression.chars() {
            if c.is_kanji() {
                grid.insert(c, pos, word_id, score, k as u16);
                pos += 1;
            }
        }
    }
}

/// Strips `content` to `[a-zA-Z ]`, lowercases it, and splits on single
/// spaces. Shared with the query-time English tokenizer in `search` so
/// indexing and retrieval agree on what a "word" is.
pub fn parse_english_words(content: &str) -> Vec<String> {
    let stripped: String = content
        .chars()
        .filter(|c| c.is_ascii_alphabetic() || *c == ' ')
        .map(|c| c.to_ascii_lowercase())
        .collect();
    stripped.split(' ').map(|w| w.to_string()).collect()
}
