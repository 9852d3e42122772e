//! Static entry scoring: `Score(entry) = 500 + K(entry) + C(entry) + R(entry)`.
//!
//! This score is computed once per entry at build time and stored on every
//! posting for that entry; it never changes at query time.

use japanese::JapaneseExt;
use types::{Entry, KanjiElement, ReadingElement};

const BASE_SCORE: i64 = 500;

/// Sums the components in wider arithmetic, then reduces modulo `2^16` to
/// match the source's native `uint16` addition -- this design tolerates
/// wraparound in the static score rather than saturating it (spec.md §9,
/// "Score overflow"), so a large negative contribution wraps to a large
/// positive score instead of floor-clamping to 0.
pub fn score_entry(entry: &Entry) -> u16 {
    let total = BASE_SCORE + kanji_component(entry) + content_component(entry) + readings_component(entry);
    total.rem_euclid(1 << 16) as u16
}

fn kanji_component(entry: &Entry) -> i64 {
    let kanji = &entry.kanji;
    if kanji.is_empty() {
        return 0;
    }
    let len = kanji.len() as i64;
    let mut score = 10 * len;
    for (i, form) in kanji.iter().enumerate() {
        let weight = len - i as i64;
        score += weight * (kanji_first(form) + kanji_priority(form) - limited_kanji(form));
    }
    score
}

fn kanji_first(form: &KanjiElement) -> i64 {
    match form.expression.chars().next() {
        Some(c) if japanese::is_kanji(c) => 2,
        _ => 0,
    }
}

fn limited_kanji(form: &KanjiElement) -> i64 {
    match form.information.join("").as_str() {
        "search-only kanji form" => 1,
        "rarely-used kanji form" => 2,
        _ => 0,
    }
}

fn kanji_priority(form: &KanjiElement) -> i64 {
    form.priorities.iter().map(|tag| priority_weight(tag)).sum()
}

fn priority_weight(tag: &str) -> i64 {
    match tag {
        "news1" | "ichi1" | "gai1" | "spec1" => 5,
        "news2" | "ichi2" | "gai2" | "spec2" => 2,
        _ => parse_nf_rank(tag).map(|v| (50 - v) / 10).unwrap_or(0),
    }
}

/// Parses tags of the form `nf\d+`, returning the captured rank.
fn parse_nf_rank(tag: &str) -> Option<i64> {
    let digits = tag.strip_prefix("nf")?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

fn content_component(entry: &Entry) -> i64 {
    let sense_count = entry.senses.len() as i64;
    let mut total = 0i64;
    for sense in &entry.senses {
        let gloss_count = sense.glossary.len() as i64;
        for gloss in &sense.glossary {
            total += sense_count * gloss_count * gloss.content.chars().count() as i64;
        }
    }
    total / 10
}

fn readings_component(entry: &Entry) -> i64 {
    let mut score = 5 * entry.readings.len() as i64;
    for reading in &entry.readings {
        score += reading_component(reading);
    }
    score
}

fn reading_component(reading: &ReadingElement) -> i64 {
    let mut score = 0i64;
    if !reading.information.is_empty() {
        score += 2;
    }
    if !reading.restrictions.is_empty() {
        score -= 3;
    }
    if let Some(c) = reading.reading.chars().find(|c| c.is_hiragana() || c.is_katakana()) {
        score += if c.is_hiragana() { 2 } else { 1 };
    }
    score
}
