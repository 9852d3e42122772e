//! Crate-wide error type.
//!
//! Query-time paths never fail: an empty query, a query with no matches, or
//! a query made up entirely of characters outside all three script classes
//! all produce an empty result list rather than an [`Error`]. Only
//! build-time and persistence failures are represented here.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("dictionary source corpus is missing or corrupt: {0}")]
    MissingCorpus(PathBuf),

    #[error("failed to read environment snapshot at {path}: {source}")]
    SnapshotRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("environment snapshot at {path} is corrupt: {source}")]
    SnapshotCorrupt {
        path: PathBuf,
        source: bincode::Error,
    },

    #[error("failed to write environment snapshot to {path}: {source}")]
    SnapshotWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages_are_non_empty() {
        let errs = vec![
            Error::MissingCorpus(PathBuf::from("dict/JMdict_e")),
            Error::SnapshotRead {
                path: PathBuf::from("env/envfile"),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "nope"),
            },
            Error::SnapshotWrite {
                path: PathBuf::from("env/envfile"),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope"),
            },
        ];
        for err in errs {
            assert!(!err.to_string().is_empty());
        }
    }
}
