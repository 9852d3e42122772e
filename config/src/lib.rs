//! TOML configuration, read once at startup with environment-variable
//! overrides. Grounded on the `Figment`+`lazy_static` pattern used
//! elsewhere in the pack, swapped to plain `toml` parsing and
//! `once_cell` for the global slot.

use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read { path: PathBuf, source: std::io::Error },

    #[error("failed to parse config file {path}: {source}")]
    Parse { path: PathBuf, source: toml::de::Error },

    #[error("invalid value for environment override {var}: {value}")]
    InvalidOverride { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DictionaryConfig {
    pub source_path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SnapshotConfig {
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchConfig {
    pub result_limit: usize,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub snapshot: SnapshotConfig,
    pub search: SearchConfig,
}

static CONFIG: OnceCell<Config> = OnceCell::new();

impl Config {
    /// Parses `path` as TOML, then applies any `JAPP_*` environment
    /// variable overrides (env always wins, read after the file).
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Config = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.apply_env_overrides()?;
        Ok(config)
    }

    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(value) = std::env::var("JAPP_DICTIONARY_SOURCE_PATH") {
            self.dictionary.source_path = PathBuf::from(value);
        }
        if let Ok(value) = std::env::var("JAPP_SNAPSHOT_PATH") {
            self.snapshot.path = PathBuf::from(value);
        }
        if let Ok(value) = std::env::var("JAPP_SEARCH_RESULT_LIMIT") {
            self.search.result_limit = value.parse().map_err(|_| ConfigError::InvalidOverride {
                var: "JAPP_SEARCH_RESULT_LIMIT",
                value,
            })?;
        }
        Ok(())
    }

    /// Stores `self` as the process-wide config. Fails (returns the value
    /// back) if a global has already been set — callers should call this
    /// exactly once at startup.
    pub fn install_global(self) -> Result<(), Config> {
        CONFIG.set(self)
    }

    /// The process-wide config installed via [`install_global`](Config::install_global).
    pub fn global() -> Option<&'static Config> {
        CONFIG.get()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            dictionary: DictionaryConfig {
                source_path: PathBuf::from("dict/JMdict_e"),
            },
            snapshot: SnapshotConfig {
                path: PathBuf::from("dict/environment.bin"),
            },
            search: SearchConfig { result_limit: 11 },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp_config(contents: &str) -> tempfile_path::TempPath {
        tempfile_path::TempPath::with_contents(contents)
    }

    mod tempfile_path {
        use std::path::{Path, PathBuf};

        /// Minimal scratch-file helper so tests don't need a dev-dependency
        /// just to write one TOML file to a temp path.
        pub struct TempPath(PathBuf);

        impl TempPath {
            pub fn with_contents(contents: &str) -> Self {
                let mut path = std::env::temp_dir();
                path.push(format!("japp-config-test-{}.toml", std::process::id()));
                std::fs::write(&path, contents).expect("write temp config");
                TempPath(path)
            }
        }

        impl AsRef<Path> for TempPath {
            fn as_ref(&self) -> &Path {
                &self.0
            }
        }

        impl Drop for TempPath {
            fn drop(&mut self) {
                let _ = std::fs::remove_file(&self.0);
            }
        }
    }

    const SAMPLE: &str = r#"
[dictionary]
source_path = "dict/JMdict_e"
[snapshot]
path = "dict/environment.bin"
[search]
result_limit = 11
"#;

    #[test]
    fn loads_well_formed_toml() {
        let path = write_temp_config(SAMPLE);
        let config = Config::load(path.as_ref()).unwrap();
        assert_eq!(config.search.result_limit, 11);
        assert_eq!(config.dictionary.source_path, PathBuf::from("dict/JMdict_e"));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = Config::load(Path::new("/nonexistent/path/config.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let path = write_temp_config("not valid toml {{{");
        let err = Config::load(path.as_ref()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn env_override_wins_over_file_value() {
        let path = write_temp_config(SAMPLE);
        std::env::set_var("JAPP_SEARCH_RESULT_LIMIT", "5");
        let config = Config::load(path.as_ref()).unwrap();
        std::env::remove_var("JAPP_SEARCH_RESULT_LIMIT");
        assert_eq!(config.search.result_limit, 5);
    }

    #[test]
    fn invalid_env_override_is_reported() {
        let path = write_temp_config(SAMPLE);
        std::env::set_var("JAPP_SEARCH_RESULT_LIMIT", "not-a-number");
        let err = Config::load(path.as_ref()).unwrap_err();
        std::env::remove_var("JAPP_SEARCH_RESULT_LIMIT");
        assert!(matches!(err, ConfigError::InvalidOverride { .. }));
    }
}
