//! Dynamic, per-fingerprint scoring. Each lane decodes its postings'
//! fingerprints differently, takes the best-scoring fingerprint per entry,
//! then multiplies by the entry's static score.

use indexes::{Hash, Posting};
use types::{Dict, Entry, WordId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredEntry {
    pub word_id: WordId,
    pub score: i64,
}

pub fn rank_english(dict: &Dict, query_len: i64, postings: &[Posting]) -> Vec<ScoredEntry> {
    rank(dict, postings, |entry, h| english_dynamic(entry, query_len, h))
}

pub fn rank_kana(dict: &Dict, query_len: i64, postings: &[Posting]) -> Vec<ScoredEntry> {
    rank(dict, postings, |entry, h| reading_dynamic(entry, query_len, h))
}

pub fn rank_kanji(dict: &Dict, query_len: i64, postings: &[Posting]) -> Vec<ScoredEntry> {
    rank(dict, postings, |entry, h| kanji_dynamic(entry, query_len, h))
}

fn rank(dict: &Dict, postings: &[Posting], dynamic: impl Fn(&Entry, Hash) -> i64) -> Vec<ScoredEntry> {
    postings
        .iter()
        .filter_map(|posting| {
            let entry = dict.get(posting.word_id)?;
            let best = posting.hashes.iter().map(|&h| dynamic(entry, h)).max()?;
            Some(ScoredEntry {
                word_id: posting.word_id,
                score: best * posting.score as i64,
            })
        })
        .collect()
}

/// Decodes `h = sense*2000 + gloss*100 + content` (1-based sense/gloss,
/// 0-based content/word index) and scores against the matching gloss text.
///
/// `content` is the low base-100 digit; what's left after removing it is
/// `sense*20 + gloss` (2000/100 = 20, 100/100 = 1), so the sense/gloss
/// split divides by 20, not 100.
fn english_dynamic(entry: &Entry, query_len: i64, h: Hash) -> i64 {
    let mut rem = h as i64;
    let content = rem % 100;
    rem /= 100;
    let gloss = rem % 20;
    let sense = rem / 20;

    let content_length = entry
        .senses
        .get((sense - 1).max(0) as usize)
        .and_then(|s| s.glossary.get((gloss - 1).max(0) as usize))
        .map(|g| g.content.len() as i64)
        .unwrap_or(0);

    (2 - content) - 2 * (gloss - 1) - (sense - 1) + 10 - (content_length - query_len) * (content + 1)
}

fn reading_dynamic(entry: &Entry, query_len: i64, r: Hash) -> i64 {
    let r = r as i64;
    let length = entry
        .readings
        .get(r as usize)
        .map(|reading| reading.reading.len() as i64)
        .unwrap_or(0);
    (3 - r) * (10 - (length - query_len))
}

fn kanji_dynamic(entry: &Entry, query_len: i64, k: Hash) -> i64 {
    let k = k as i64;
    let length = entry
        .kanji
        .get(k as usize)
        .map(|form| form.expression.len() as i64)
        .unwrap_or(0);
    (3 - k) * (10 - (length - query_len))
}
