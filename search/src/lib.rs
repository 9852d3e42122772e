//! Query-time half of the engine: classify, tokenize, retrieve, rank.
//!
//! Grids and the dictionary are supplied by the caller rather than owned
//! here — this crate has no opinion on how they were built or persisted.

pub mod classify;
pub mod ranker;
pub mod retrieval;

pub use classify::Lane;
pub use ranker::ScoredEntry;

use indexes::{EnglishGrid, KanaGrid, KanjiGrid};
use types::Dict;

/// Runs a full query: classify the lane, tokenize, intersect postings
/// across the matching grid, rank dynamically against the static score,
/// and sort descending. Returns an empty list for an empty or
/// no-match query — query-time paths never fail.
pub fn search(dict: &Dict, english: &EnglishGrid, kana: &KanaGrid, kanji: &KanjiGrid, query: &str) -> Vec<ScoredEntry> {
    let lane = classify::classify(query);
    let tokens = classify::tokenize(lane, query);
    let query_len = query.len() as i64;

    let mut results = match lane {
        Lane::English => {
            let postings = retrieval::retrieve(&tokens, |c, p| english.lookup(c, p).to_vec());
            ranker::rank_english(dict, query_len, &postings)
        }
        Lane::Kana => {
            let postings = retrieval::retrieve(&tokens, |c, p| kana.lookup(c, p).to_vec());
            ranker::rank_kana(dict, query_len, &postings)
        }
        Lane::Kanji => {
            let postings = retrieval::retrieve(&tokens, |c, p| kanji.lookup(c, p).to_vec());
            ranker::rank_kanji(dict, query_len, &postings)
        }
    };

    results.sort_by(|a, b| b.score.cmp(&a.score));
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexes::build_grids;
    use types::{Entry, Gloss, KanjiElement, ReadingElement, Sense};

    fn sample_dict() -> Dict {
        Dict::from_entries(vec![
            Entry {
                kanji: vec![KanjiElement {
                    expression: "猫".to_string(),
                    ..Default::default()
                }],
                readings: vec![ReadingElement {
                    reading: "ねこ".to_string(),
                    ..Default::default()
                }],
                senses: vec![Sense {
                    glossary: vec![Gloss {
                        content: "cat".to_string(),
                    }],
                }],
            },
            Entry {
                kanji: vec![],
                readings: vec![],
                senses: vec![Sense {
                    glossary: vec![Gloss {
                        content: "cattle".to_string(),
                    }],
                }],
            },
        ])
    }

    #[test]
    fn empty_query_returns_no_results() {
        let dict = sample_dict();
        let (english, kana, kanji) = build_grids(&dict);
        assert!(search(&dict, &english, &kana, &kanji, "").is_empty());
    }

    #[test]
    fn punctuation_only_query_returns_no_results() {
        let dict = sample_dict();
        let (english, kana, kanji) = build_grids(&dict);
        assert!(search(&dict, &english, &kana, &kanji, "!!!").is_empty());
    }

    #[test]
    fn exact_word_outranks_entry_where_it_is_only_a_prefix() {
        let dict = sample_dict();
        let (english, kana, kanji) = build_grids(&dict);
        let results = search(&dict, &english, &kana, &kanji, "cat");
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].word_id, 0);
        assert_eq!(results[1].word_id, 1);
        assert!(results[0].score > results[1].score);
    }

    #[test]
    fn kanji_query_finds_matching_entry() {
        let dict = sample_dict();
        let (english, kana, kanji) = build_grids(&dict);
        let results = search(&dict, &english, &kana, &kanji, "猫");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].word_id, 0);
    }

    #[test]
    fn kana_query_finds_matching_entry() {
        let dict = sample_dict();
        let (english, kana, kanji) = build_grids(&dict);
        let results = search(&dict, &english, &kana, &kanji, "ねこ");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].word_id, 0);
    }
}
