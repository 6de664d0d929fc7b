use std::path::PathBuf;

use once_cell::sync::OnceCell;
use serde::Deserialize;
use thiserror::Error;

static CONFIG: OnceCell<Config> = OnceCell::new();

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Prompt suffix printed after the working directory.
    pub prompt: String,
    /// Maximum number of tracked background jobs.
    pub job_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prompt: "$".into(),
            job_capacity: 100,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl Config {
    /// Loads `$MINISH_CONFIG` if set, else `minish.toml` from the cwd if it
    /// exists, else the defaults.
    pub fn load() -> Result<Config, ConfigError> {
        let path = match std::env::var_os("MINISH_CONFIG") {
            Some(path) => PathBuf::from(path),
            None => {
                let default = PathBuf::from("minish.toml");
                if !default.exists() {
                    return Ok(Config::default());
                }
                default
            }
        };

        let raw = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse { path, source })
    }
}

pub fn init(config: Config) {
    let _ = CONFIG.set(config);
}

pub fn get() -> &'static Config {
    CONFIG.get_or_init(Config::default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_all_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.prompt, "$");
        assert_eq!(config.job_capacity, 100);
    }

    #[test]
    fn fields_override_individually() {
        let config: Config = toml::from_str("prompt = \">\"\n").unwrap();
        assert_eq!(config.prompt, ">");
        assert_eq!(config.job_capacity, 100);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(toml::from_str::<Config>("historee = 5\n").is_err());
    }
}
