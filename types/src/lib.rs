//! The dictionary data model consumed by [`indexes`] and [`search`].
//!
//! Everything here is owned, plain data: an ordered collection of entries
//! indexed by a stable [`WordId`]. Parsing a JMdict export into this shape
//! is explicitly not this crate's job — see [`Dict::from_entries`] for the
//! primary constructor and the `jmdict-upstream` feature for an adapter
//! over the published `jmdict` crate.

#[cfg(feature = "jmdict-upstream")]
mod jmdict_adapter;

use serde::{Deserialize, Serialize};

/// Stable integer identifying one entry within a [`Dict`]. Entries keep the
/// index they were constructed with for the lifetime of the `Dict`.
pub type WordId = u32;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Dict {
    entries: Vec<Entry>,
}

impl Dict {
    /// Builds a [`Dict`] from entries already in memory, in the order they
    /// should receive their [`WordId`]s (the first entry becomes word 0).
    pub fn from_entries(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn get(&self, id: WordId) -> Option<&Entry> {
        self.entries.get(id as usize)
    }

    /// Iterates entries together with the [`WordId`] they'll be inserted
    /// under; the index builder relies on this being ascending.
    pub fn iter(&self) -> impl Iterator<Item = (WordId, &Entry)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, e)| (i as WordId, e))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Entry {
    pub kanji: Vec<KanjiElement>,
    pub readings: Vec<ReadingElement>,
    pub senses: Vec<Sense>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct KanjiElement {
    pub expression: String,
    /// Tags describing restricted usage, e.g. `"search-only kanji form"`.
    pub information: Vec<String>,
    /// Frequency/priority tags, e.g. `"news1"`, `"nf12"`.
    pub priorities: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ReadingElement {
    pub reading: String,
    pub information: Vec<String>,
    /// Kanji forms this reading is restricted to, if any.
    pub restrictions: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Sense {
    pub glossary: Vec<Gloss>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Gloss {
    pub content: String,
}
