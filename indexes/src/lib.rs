//! Positional inverted indexes over a [`Dict`](types::Dict): three
//! script-specialized grids (English, kana, kanji) plus the static entry
//! scorer that seeds every posting's score.

pub mod builder;
pub mod grid;
pub mod scorer;

pub use builder::{build_grids, parse_english_words};
pub use grid::{CharacterAxis, EnglishGrid, Grid, Hash, KanaGrid, KanjiGrid, PositionBucket, Posting};
pub use scorer::score_entry;
