//! Store discovery via the `PUNCH_CARD` environment variable.
//!
//! The punch ledger lives in a single SQLite file whose path is taken from
//! `$PUNCH_CARD`. An unset variable, an empty value, a missing file, and a
//! path that is not a regular file are four distinct error conditions so the
//! user always knows which part of the setup is wrong.

use crate::libs::error::{ConfigError, DB_ENV_VAR};
use std::env;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: PathBuf,
}

impl Config {
    /// Reads `$PUNCH_CARD` without touching the filesystem.
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw = env::var(DB_ENV_VAR).map_err(|_| ConfigError::EnvUnset)?;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::EnvEmpty);
        }
        Ok(Config {
            db_path: PathBuf::from(trimmed),
        })
    }

    /// Verifies the configured path names an existing regular file.
    pub fn resolved(&self) -> Result<&Path, ConfigError> {
        if !self.db_path.exists() {
            return Err(ConfigError::StoreMissing(self.db_path.clone()));
        }
        if !self.db_path.is_file() {
            return Err(ConfigError::NotAFile(self.db_path.clone()));
        }
        Ok(&self.db_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolved_rejects_missing_store() {
        let config = Config {
            db_path: PathBuf::from("/definitely/not/here.db"),
        };
        assert!(matches!(config.resolved(), Err(ConfigError::StoreMissing(_))));
    }

    #[test]
    fn resolved_rejects_directory() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            db_path: dir.path().to_path_buf(),
        };
        assert!(matches!(config.resolved(), Err(ConfigError::NotAFile(_))));
    }
}
