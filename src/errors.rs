use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Which sibling list of a cursor an operation touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Before,
    After,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Before => write!(f, "before focus"),
            Side::After => write!(f, "after focus"),
        }
    }
}

/// Caller supplied data that cannot form a valid cursor.
///
/// These are programming errors at construction boundaries. Navigation never
/// produces them: a relation that does not exist is `None`, not an error.
#[derive(Error, Debug)]
pub enum StructureError {
    #[error("cannot rebuild a cursor from an empty location chain")]
    EmptyLocationChain,

    #[error("sibling transform failed at index {index} ({side})")]
    SiblingTransform {
        side: Side,
        index: usize,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

pub type StructureResult<T> = Result<T, StructureError>;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid environment override: {0}")]
    Environment(#[from] config::ConfigError),

    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

pub type SettingsResult<T> = Result<T, SettingsError>;
