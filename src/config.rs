use std::{
    env,
    fs::read_to_string,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::error::LocksmithError;

const CONFIG_PATH_ENV: &str = "LOCKSMITH_CONFIG_PATH";
const DEFAULT_CONFIG_PATH: &str = "locksmith.toml";

fn default_output_path() -> PathBuf {
    PathBuf::from("generated_keys.csv")
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Where the generated csv file is written to.
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,
    /// Used as tracing filter if `RUST_LOG` isn't set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Seeds the random generator. Runs with the same seed produce the same keys.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_path: default_output_path(),
            log_level: default_log_level(),
            seed: None,
        }
    }
}

impl Config {
    /// Reads the config from `LOCKSMITH_CONFIG_PATH` or `locksmith.toml`.
    ///
    /// Without the environment variable a missing file just means defaults.
    /// If the variable points to a missing file that's an error.
    pub fn read_from_file() -> Result<Self, LocksmithError> {
        Self::read_from_env_value(env::var(CONFIG_PATH_ENV).ok(), Path::new(DEFAULT_CONFIG_PATH))
    }

    fn read_from_env_value(value: Option<String>, default: &Path) -> Result<Self, LocksmithError> {
        match value {
            Some(path) => Self::read_from(Path::new(&path)),
            None if default.exists() => Self::read_from(default),
            None => Ok(Self::default()),
        }
    }

    pub fn read_from(path: &Path) -> Result<Self, LocksmithError> {
        let toml_content = read_to_string(path).map_err(|source| LocksmithError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&toml_content).map_err(|source| LocksmithError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn parse(toml_content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_content)
    }
}
