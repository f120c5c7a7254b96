use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LocksmithError {
    /// Writing the output file failed (missing directory, permissions, disk full)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// The csv writer failed for a reason other than I/O
    #[error("CSV error: {0:?}")]
    Csv(csv::ErrorKind),
    /// The config file exists but couldn't be read
    #[error("Error while reading config file {path:?}: {source}")]
    ConfigRead { path: PathBuf, source: io::Error },
    /// The config file isn't valid TOML or has unknown values
    #[error("Error while parsing config file {path:?}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl From<csv::Error> for LocksmithError {
    fn from(value: csv::Error) -> Self {
        match value.into_kind() {
            csv::ErrorKind::Io(err) => Self::Io(err),
            kind => Self::Csv(kind),
        }
    }
}
