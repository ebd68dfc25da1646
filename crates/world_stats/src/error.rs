use math::positions::CodecError;
use std::path::PathBuf;
use thiserror::Error;

/// Why a map file could not be used as block storage
#[derive(Debug, Error)]
pub enum StorageFault {
    #[error("file does not exist")]
    Missing,
    #[error("not a regular file")]
    NotAFile,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),
}

/// A stored record that could not be turned into a map block position
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("record {record}: pos is {found}, expected an integer")]
    NotAnInteger { record: u64, found: String },
    #[error("record {record}: {source}")]
    Key {
        record: u64,
        #[source]
        source: CodecError,
    },
}

#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("map storage {} is unavailable: {source}", path.display())]
    StorageUnavailable {
        path: PathBuf,
        #[source]
        source: StorageFault,
    },
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error("world uses the {backend} backend, only sqlite3 maps can be analyzed")]
    UnsupportedBackend { backend: String },
    #[error("cannot read world metadata {}: {source}", path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AnalyzeError {
    pub(crate) fn unavailable(path: impl Into<PathBuf>, source: impl Into<StorageFault>) -> Self {
        Self::StorageUnavailable {
            path: path.into(),
            source: source.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
