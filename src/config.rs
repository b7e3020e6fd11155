//! # Configuration
//!
//! Settings for wiring a cart to a remote catalog and a snapshot directory, read from TOML.
//! Every section and field has a default, so an empty file is a valid configuration.
//!
//! ```toml
//! [catalog]
//! base_url = "http://localhost:3333"
//! timeout_secs = 5
//!
//! [storage]
//! dir = ".cart"
//!
//! [actor]
//! buffer_size = 32
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub catalog: CatalogSettings,
    pub storage: StorageSettings,
    pub actor: ActorSettings,
}

impl Settings {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    pub base_url: String,
    /// Per-request timeout. No timeout when absent.
    pub timeout_secs: Option<u64>,
}

impl CatalogSettings {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3333".to_string(),
            timeout_secs: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Directory holding the cart snapshot.
    pub dir: PathBuf,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(".cart"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ActorSettings {
    /// Mailbox capacity of the cart actor.
    pub buffer_size: usize,
}

impl Default for ActorSettings {
    fn default() -> Self {
        Self { buffer_size: 32 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_config_uses_defaults() {
        let settings = Settings::from_toml_str("").unwrap();
        assert_eq!(settings.catalog.base_url, "http://localhost:3333");
        assert_eq!(settings.catalog.timeout(), None);
        assert_eq!(settings.storage.dir, PathBuf::from(".cart"));
        assert_eq!(settings.actor.buffer_size, 32);
    }

    #[test]
    fn test_partial_sections_keep_other_defaults() {
        let settings = Settings::from_toml_str(
            r#"
            [catalog]
            timeout_secs = 3

            [actor]
            buffer_size = 4
            "#,
        )
        .unwrap();
        assert_eq!(settings.catalog.base_url, "http://localhost:3333");
        assert_eq!(settings.catalog.timeout(), Some(Duration::from_secs(3)));
        assert_eq!(settings.actor.buffer_size, 4);
    }

    #[test]
    fn test_wrong_type_is_parse_error() {
        let err = Settings::from_toml_str("[actor]\nbuffer_size = \"big\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[storage]\ndir = \"/var/lib/cart\"").unwrap();

        let settings = Settings::load(file.path()).unwrap();
        assert_eq!(settings.storage.dir, PathBuf::from("/var/lib/cart"));

        let missing = Settings::load(file.path().with_extension("missing"));
        assert!(matches!(missing, Err(ConfigError::Io { .. })));
    }
}
