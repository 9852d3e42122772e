//! Single-pass running intersection over a grid, driven by a tokenized
//! query. Owns no grid itself — callers supply a lookup closure so the
//! same algorithm serves the English, kana, and kanji lanes.

use indexes::{Hash, Posting};

/// Runs the retrieval algorithm over `tokens`, calling `lookup(ch, position)`
/// for every character of every token.
///
/// `w_index` only advances for tokens that contributed at least one
/// lookup — a token made entirely of characters outside the lane's script
/// is skipped for merge-semantics purposes, per the token-tokenizer
/// contract (stripped tokens can be empty strings).
pub fn retrieve<F>(tokens: &[String], lookup: F) -> Vec<Posting>
where
    F: Fn(char, usize) -> Vec<Posting>,
{
    let mut cur: Option<Vec<Posting>> = None;
    let mut w_index = 0usize;

    for token in tokens {
        let mut contributed = false;
        for (char_index, ch) in token.chars().enumerate() {
            let new = lookup(ch, char_index);
            cur = Some(match cur.take() {
                None => new,
                Some(old) if w_index == 0 => merge_same_word(&old, &new),
                Some(old) => merge_next_word(&old, &new),
            });
            contributed = true;
        }
        if contributed {
            w_index += 1;
        }
    }

    cur.unwrap_or_default()
}

/// Intersects on `word_id`, keeping only hashes present in both sides.
fn merge_same_word(old: &[Posting], new: &[Posting]) -> Vec<Posting> {
    merge(old, new, |hashes, h| hashes.binary_search(h).is_ok())
}

/// Intersects on `word_id`, keeping hashes present in `new` either exactly
/// or one below (the next-gloss-word adjacency trick from the English
/// fingerprint encoding).
fn merge_next_word(old: &[Posting], new: &[Posting]) -> Vec<Posting> {
    merge(old, new, |hashes, h| {
        hashes.binary_search(h).is_ok() || h.checked_add(1).map_or(false, |next| hashes.binary_search(&next).is_ok())
    })
}

fn merge(old: &[Posting], new: &[Posting], keep: impl Fn(&[Hash], &Hash) -> bool) -> Vec<Posting> {
    let mut result = Vec::new();
    for o in old {
        let Ok(i) = new.binary_search_by_key(&o.word_id, |p| p.word_id) else {
            continue;
        };
        let surviving: Vec<Hash> = o.hashes.iter().filter(|h| keep(&new[i].hashes, h)).copied().collect();
        if !surviving.is_empty() {
            result.push(Posting {
                word_id: o.word_id,
                score: o.score,
                hashes: surviving,
            });
        }
    }
    result
}
