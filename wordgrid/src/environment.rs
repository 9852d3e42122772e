//! The built, queryable state of the program: a dictionary plus its three
//! grids. Built once from a source corpus, then persisted as a single
//! snapshot file so later startups skip the build entirely.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use error::Error;
use indexes::{build_grids, EnglishGrid, KanaGrid, KanjiGrid};
use serde::{Deserialize, Serialize};
use types::Dict;

#[derive(Debug, Serialize, Deserialize)]
pub struct Environment {
    pub dict: Dict,
    pub english: EnglishGrid,
    pub kana: KanaGrid,
    pub kanji: KanjiGrid,
}

impl Environment {
    pub fn build(dict: Dict) -> Self {
        let (english, kana, kanji) = build_grids(&dict);
        Environment {
            dict,
            english,
            kana,
            kanji,
        }
    }

    /// Loads a previously written snapshot. A read failure is always fatal
    /// -- this never falls back to rebuilding, so a corrupt snapshot can't
    /// be silently papered over.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let file = File::open(path).map_err(|source| Error::SnapshotRead {
            path: path.to_path_buf(),
            source,
        })?;
        bincode::deserialize_from(file).map_err(|source| Error::SnapshotCorrupt {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn save(&self, path: &Path) -> Result<(), Error> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                let _ = std::fs::create_dir_all(parent);
            }
        }
        let file = File::create(path).map_err(|source| Error::SnapshotWrite {
            path: path.to_path_buf(),
            source,
        })?;
        bincode::serialize_into(BufWriter::new(file), self).map_err(|source| Error::SnapshotWrite {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::Other, source),
        })
    }

    /// Loads the snapshot at `snapshot_path` if present, otherwise builds a
    /// fresh environment from `dict` and writes the snapshot for next time.
    pub fn load_or_build(snapshot_path: &Path, dict: impl FnOnce() -> Result<Dict, Error>) -> Result<Self, Error> {
        if snapshot_path.exists() {
            log::info!("loading environment snapshot from {}", snapshot_path.display());
            return Self::load(snapshot_path);
        }

        log::info!("no snapshot found at {}, building environment", snapshot_path.display());
        let env = Self::build(dict()?);
        env.save(snapshot_path)?;
        log::info!("wrote environment snapshot to {}", snapshot_path.display());
        Ok(env)
    }
}
