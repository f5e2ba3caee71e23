use std::{fs, path::Path};

use color_eyre::eyre::WrapErr;
use log::debug;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const CONFIG_DIR_NAME: &str = "unwide";

/// Batch settings, read from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Separates a record's identifier from its scramble. Only the first
    /// occurrence on a line counts.
    pub delimiter: char,
    /// Size of the worker pool for batch runs. Unset uses rayon's global pool.
    pub threads: Option<usize>,
    pub keep_blank_lines: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            delimiter: ',',
            threads: None,
            keep_blank_lines: false,
        }
    }
}

impl Config {
    /// Reads the config at `path` if one was given. Otherwise falls back to the
    /// user config directory, and to the defaults if nothing is there.
    pub fn load(path: Option<&Path>) -> color_eyre::Result<Config> {
        if let Some(path) = path {
            return Config::read(path);
        }

        match dirs::config_dir()
            .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .filter(|path| path.is_file())
        {
            Some(path) => Config::read(&path),
            None => {
                debug!(target: "config", "No config file found, using defaults");
                Ok(Config::default())
            }
        }
    }

    fn read(path: &Path) -> color_eyre::Result<Config> {
        let text = fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read config file {}", path.display()))?;

        let config = toml::from_str::<Config>(&text)
            .wrap_err_with(|| format!("Failed to parse config file {}", path.display()))?;

        debug!(target: "config", "Loaded {config:?} from {}", path.display());

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::Config;

    #[test]
    fn empty_file_is_default() {
        assert_eq!(toml::from_str::<Config>("").unwrap(), Config::default());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let config = toml::from_str::<Config>("delimiter = \"\\t\"\nthreads = 4").unwrap();

        assert_eq!(
            config,
            Config {
                delimiter: '\t',
                threads: Some(4),
                keep_blank_lines: false,
            }
        );
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(toml::from_str::<Config>("lines_per_file = 10000").is_err());
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let path = std::env::temp_dir().join("unwide-config-that-does-not-exist.toml");
        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    fn explicit_file_is_read() {
        let path = std::env::temp_dir().join(format!("unwide-config-{}.toml", std::process::id()));
        std::fs::write(&path, "keep_blank_lines = true\n").unwrap();

        let config = Config::load(Some(&path));
        std::fs::remove_file(&path).unwrap();

        assert!(config.unwrap().keep_blank_lines);
    }
}
