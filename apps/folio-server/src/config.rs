//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

/// Where the post blob is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageConfig {
    /// Process-local map; everything is lost on restart.
    Memory,
    /// One file per key under `data_dir`.
    File { data_dir: PathBuf },
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub storage: StorageConfig,
    /// Seed file used instead of the bundled posts.
    pub seed_file: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("FOLIO_STORAGE must be `file` or `memory`, got `{0}`")]
    UnknownStorage(String),

    #[error("PORT must be a port number, got `{0}`")]
    InvalidPort(String),
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match var("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => 8080,
        };

        let storage = match var("FOLIO_STORAGE").as_deref() {
            None | Some("file") => StorageConfig::File {
                data_dir: var("FOLIO_DATA_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from("./data")),
            },
            Some("memory") => StorageConfig::Memory,
            Some(other) => return Err(ConfigError::UnknownStorage(other.to_string())),
        };

        Ok(Self {
            host: var("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port,
            storage,
            seed_file: var("FOLIO_SEED_FILE").map(PathBuf::from),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(
            config.storage,
            StorageConfig::File {
                data_dir: PathBuf::from("./data")
            }
        );
        assert_eq!(config.seed_file, None);
    }

    #[test]
    fn test_memory_storage() {
        let config = load(&[("FOLIO_STORAGE", "memory"), ("PORT", "9000")]).unwrap();
        assert_eq!(config.storage, StorageConfig::Memory);
        assert_eq!(config.port, 9000);
    }

    #[test]
    fn test_file_storage_dir_and_seed() {
        let config = load(&[
            ("FOLIO_DATA_DIR", "/var/lib/folio"),
            ("FOLIO_SEED_FILE", "/etc/folio/seed.json"),
        ])
        .unwrap();
        assert_eq!(
            config.storage,
            StorageConfig::File {
                data_dir: PathBuf::from("/var/lib/folio")
            }
        );
        assert_eq!(config.seed_file, Some(PathBuf::from("/etc/folio/seed.json")));
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            load(&[("FOLIO_STORAGE", "redis")]),
            Err(ConfigError::UnknownStorage(_))
        ));
        assert!(matches!(
            load(&[("PORT", "eighty")]),
            Err(ConfigError::InvalidPort(_))
        ));
    }
}
