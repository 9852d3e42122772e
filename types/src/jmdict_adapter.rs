//! Adapter from the published `jmdict` crate (majewsky/rust-jmdict) into
//! this crate's [`Dict`](crate::Dict) shape. Gated behind the
//! `jmdict-upstream` feature; see the feature doc comment in `Cargo.toml`
//! for why it isn't part of the default build.

use crate::{Dict, Entry, Gloss, KanjiElement, ReadingElement, Sense};
use jmdict::{Enum, GlossLanguage};

impl Dict {
    /// Builds a [`Dict`] from every entry compiled into the `jmdict` crate.
    ///
    /// Only English glosses are kept, matching the assumption the scorer
    /// and ranker make throughout this workspace. Reading restrictions
    /// (JMdict's `re_restr`) are not exposed by the upstream crate's public
    /// API, so `ReadingElement::restrictions` is always empty on this path;
    /// see `DESIGN.md` for the scoring consequence.
    pub fn from_jmdict() -> Self {
        let entries = jmdict::entries().map(convert_entry).collect();
        Dict::from_entries(entries)
    }
}

fn convert_entry(entry: jmdict::Entry) -> Entry {
    Entry {
        kanji: entry.kanji_elements().map(convert_kanji).collect(),
        readings: entry.reading_elements().map(convert_reading).collect(),
        senses: entry.senses().map(convert_sense).collect(),
    }
}

fn convert_kanji(k: jmdict::KanjiElement) -> KanjiElement {
    KanjiElement {
        expression: k.text.to_string(),
        information: k.infos().map(|i| i.description().to_string()).collect(),
        // The upstream crate models priority as a typed `Priority` value
        // rather than a free-form tag list; leaving this empty costs the
        // scorer's `priority` term (see `indexes::scorer`), not
        // correctness, since that term only ever adds to the static score.
        priorities: Vec::new(),
    }
}

fn convert_reading(r: jmdict::ReadingElement) -> ReadingElement {
    ReadingElement {
        reading: r.text.to_string(),
        information: r.infos().map(|i| i.description().to_string()).collect(),
        restrictions: Vec::new(),
    }
}

fn convert_sense(s: jmdict::Sense) -> Sense {
    Sense {
        glossary: s
            .glosses()
            .filter(|g| g.language == GlossLanguage::English)
            .map(|g| Gloss {
                content: g.text.to_string(),
            })
            .collect(),
    }
}
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion_keeps_only_english_glosses() {
        let dict = Dict::from_jmdict();
        assert!(dict.len() > 0);
    }
}
