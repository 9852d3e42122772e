//! The three script-specialized search grids.
//!
//! A [`Grid`] is a fixed-size array of [`CharacterAxis`]es, one per
//! character code in its script. Each axis is a growable list of
//! [`PositionBucket`]s indexed by zero-based character position within a
//! token; each bucket holds the [`Posting`]s for every entry that mentioned
//! that character at that position.

use serde::{Deserialize, Serialize};
use types::WordId;

/// 16-bit occurrence fingerprint. Script-specific encoding; see
/// `indexes::builder`.
pub type Hash = u16;

/// One entry's occurrences of a character at a single position.
///
/// Invariant: `hashes` is sorted ascending with no duplicates and is never
/// empty for a posting that exists in a bucket at all.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Posting {
    pub word_id: WordId,
    pub score: u16,
    pub hashes: Vec<Hash>,
}

/// Postings for one character at one position, sorted by `word_id`
/// ascending with at most one posting per `word_id`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PositionBucket {
    postings: Vec<Posting>,
}

impl PositionBucket {
    #[inline]
    pub fn postings(&self) -> &[Posting] {
        &self.postings
    }

    /// Appends `hash` to the bucket's last posting if it belongs to
    /// `word_id`, otherwise starts a fresh posting. Relying on ascending
    /// insertion order (guaranteed by the index builder iterating the
    /// dictionary once) keeps this a cheap tail check instead of a search.
    fn append_or_merge(&mut self, word_id: WordId, score: u16, hash: Hash) {
        if let Some(last) = self.postings.last_mut() {
            if last.word_id == word_id {
                last.hashes.push(hash);
                return;
            }
        }
        self.postings.push(Posting {
            word_id,
            score,
            hashes: vec![hash],
        });
    }
}

/// A growable ordered list of [`PositionBucket`]s for one character.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CharacterAxis {
    positions: Vec<PositionBucket>,
}

impl CharacterAxis {
    #[inline]
    pub fn postings_at(&self, position: usize) -> &[Posting] {
        self.positions
            .get(position)
            .map(PositionBucket::postings)
            .unwrap_or(&[])
    }

    fn insert(&mut self, position: usize, word_id: WordId, score: u16, hash: Hash) {
        if position >= self.positions.len() {
            self.positions.resize(position + 1, PositionBucket::default());
        }
        self.positions[position].append_or_merge(word_id, score, hash);
    }
}

/// A fixed-size array of [`CharacterAxis`]es indexed by a rebased character
/// code. Slot count and the rebasing function are the only things that
/// differ between [`EnglishGrid`], [`KanaGrid`] and [`KanjiGrid`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Grid {
    slots: Vec<CharacterAxis>,
}

impl Grid {
    fn new(slot_count: usize) -> Self {
        Self {
            slots: vec![CharacterAxis::default(); slot_count],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub(crate) fn insert(&mut self, slot: usize, position: usize, word_id: WordId, score: u16, hash: Hash) {
        debug_assert!(slot < self.slots.len(), "slot {slot} out of range");
        self.slots[slot].insert(position, word_id, score, hash);
    }

    /// Postings for `slot` at `position`, or an empty slice if either is out
    /// of range or unpopulated (spec's "character beyond any populated
    /// position" edge case).
    pub fn postings_at(&self, slot: usize, position: usize) -> &[Posting] {
        self.slots
            .get(slot)
            .map(|axis| axis.postings_at(position))
            .unwrap_or(&[])
    }
}

/// English grid: 26 slots, `index = lowercased letter - 'a'`.
pub const ENGLISH_SLOTS: usize = 26;

/// Kana grid: 96 slots. Hiragana (`0x3041..=0x3095`) rebases at `0x3040`;
/// katakana (`0x30A0..=0x30FF`) rebases at `0x30A0`. Both land in `0..96`.
/// See `DESIGN.md` for why this differs from a naive single-offset reading
/// of "rebased at 0x3040" for both scripts.
pub const KANA_SLOTS: usize = 96;

const HIRAGANA_BASE: u32 = 0x3040;
const KATAKANA_BASE: u32 = 0x30A0;

/// Regular CJK Unified Ideographs: `0x4E00..=0x9FAF`.
pub const KANJI_REGULAR_COUNT: usize = 0x9FAF - 0x4E00 + 1;
/// CJK Extension A (rare kanji): `0x3400..=0x4DBF`.
pub const KANJI_RARE_COUNT: usize = 0x4DBF - 0x3400 + 1;
/// Corrected slot count (spec's open question: the source's 27,503 is a
/// one-off under the true sum of the two ranges).
pub const KANJI_SLOTS: usize = KANJI_REGULAR_COUNT + KANJI_RARE_COUNT;

const KANJI_REGULAR_BASE: u32 = 0x4E00;
const KANJI_RARE_BASE: u32 = 0x3400;
const KANJI_RARE_OFFSET: usize = KANJI_REGULAR_COUNT;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnglishGrid(Grid);

impl EnglishGrid {
    pub fn new() -> Self {
        Self(Grid::new(ENGLISH_SLOTS))
    }

    /// Slot for an ASCII letter, assumed already lowercased.
    pub fn slot_of(letter: char) -> Option<usize> {
        let letter = letter as u32;
        (b'a' as u32..=b'z' as u32)
            .contains(&letter)
            .then(|| (letter - b'a' as u32) as usize)
    }

    pub(crate) fn insert(&mut self, letter: char, position: usize, word_id: WordId, score: u16, hash: Hash) {
        if let Some(slot) = Self::slot_of(letter) {
            self.0.insert(slot, position, word_id, score, hash);
        }
    }

    pub fn lookup(&self, letter: char, position: usize) -> &[Posting] {
        match Self::slot_of(letter) {
            Some(slot) => self.0.postings_at(slot, position),
            None => &[],
        }
    }
}

impl Default for EnglishGrid {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KanaGrid(Grid);

impl KanaGrid {
    pub fn new() -> Self {
        Self(Grid::new(KANA_SLOTS))
    }

    pub fn slot_of(c: char) -> Option<usize> {
        let code = c as u32;
        if japanese::is_hiragana(c) {
            Some((code - HIRAGANA_BASE) as usize)
        } else if japanese::is_katakana(c) {
            Some((code - KATAKANA_BASE) as usize)
        } else {
            None
        }
    }

    pub(crate) fn insert(&mut self, c: char, position: usize, word_id: WordId, score: u16, hash: Hash) {
        if let Some(slot) = Self::slot_of(c) {
            self.0.insert(slot, position, word_id, score, hash);
        }
    }

    pub fn lookup(&self, c: char, position: usize) -> &[Posting] {
        match Self::slot_of(c) {
            Some(slot) => self.0.postings_at(slot, position),
            None => &[],
        }
    }
}

impl Default for KanaGrid {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KanjiGrid(Grid);

impl KanjiGrid {
    pub fn new() -> Self {
        Self(Grid::new(KANJI_SLOTS))
    }

    pub fn slot_of(c: char) -> Option<usize> {
        let code = c as u32;
        if japanese::is_regular_kanji(c) {
            Some((code - KANJI_REGULAR_BASE) as usize)
        } else if japanese::is_rare_kanji(c) {
            Some((code - KANJI_RARE_BASE) as usize + KANJI_RARE_OFFSET)
        } else {
            None
        }
    }

    pub(crate) fn insert(&mut self, c: char, position: usize, word_id: WordId, score: u16, hash: Hash) {
        if let Some(slot) = Self::slot_of(c) {
            self.0.insert(slot, position, word_id, score, hash);
        }
    }

    pub fn lookup(&self, c: char, position: usize) -> &[Posting] {
        match Self::slot_of(c) {
            Some(slot) => self.0.postings_at(slot, position),
            None => &[],
        }
    }
}

impl Default for KanjiGrid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kanji_slot_count_is_corrected_sum() {
        assert_eq!(KANJI_SLOTS, 27504);
    }

    #[test]
    fn kana_slots_stay_in_bounds() {
        assert_eq!(KanaGrid::slot_of('ぁ').unwrap(), 1);
        assert_eq!(KanaGrid::slot_of('ア').unwrap(), 2);
        assert!(KanaGrid::slot_of('ね').unwrap() < KANA_SLOTS);
        assert!(KanaGrid::slot_of('ヾ').unwrap() < KANA_SLOTS);
    }

    #[test]
    fn kanji_regular_and_rare_land_in_disjoint_ranges() {
        let regular = KanjiGrid::slot_of('猫').unwrap();
        let rare = KanjiGrid::slot_of('㐀').unwrap();
        assert!(regular < KANJI_REGULAR_COUNT);
        assert!(rare >= KANJI_REGULAR_COUNT);
        assert!(rare < KANJI_SLOTS);
    }

    #[test]
    fn empty_bucket_reads_as_empty_slice() {
        let grid = EnglishGrid::new();
        assert!(grid.lookup('a', 0).is_empty());
        assert!(grid.lookup('a', 50).is_empty());
    }

    #[test]
    fn append_or_merge_keeps_ascending_word_ids_and_sorted_hashes() {
        let mut grid = EnglishGrid::new();
        grid.insert('c', 0, 0, 500, 10);
        grid.insert('c', 0, 0, 500, 20);
        grid.insert('c', 0, 1, 500, 5);

        let postings = grid.lookup('c', 0);
        assert_eq!(postings.len(), 1);
        assert_eq!(postings[0].word_id, 0);
        assert_eq!(postings[0].hashes, vec![10, 20]);

        let postings = grid.lookup('c', 1);
        assert_eq!(postings.len(), 2);
        assert_eq!(postings[0].word_id, 0);
        assert_eq!(postings[1].word_id, 1);
    }
}
