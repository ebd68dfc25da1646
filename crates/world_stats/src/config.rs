//! Where a world lives on disk

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_MAP_FILE: &str = "map.sqlite";
pub const DEFAULT_WORLD_MT_FILE: &str = "world.mt";

/// The world directory and the names of the files read inside it.
/// The storage file name is independent of the directory so a map copied next to
/// an unrelated `world.mt` can still be pointed at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldConfig {
    #[serde(default = "default_world_path")]
    pub world_path: PathBuf,
    #[serde(default = "default_map_file")]
    pub map_file: String,
    #[serde(default = "default_world_mt_file")]
    pub world_mt_file: String,
}

fn default_world_path() -> PathBuf {
    PathBuf::from(".")
}

fn default_map_file() -> String {
    DEFAULT_MAP_FILE.to_string()
}

fn default_world_mt_file() -> String {
    DEFAULT_WORLD_MT_FILE.to_string()
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            world_path: default_world_path(),
            map_file: default_map_file(),
            world_mt_file: default_world_mt_file(),
        }
    }
}

impl WorldConfig {
    pub fn new(world_path: impl Into<PathBuf>) -> Self {
        Self {
            world_path: world_path.into(),
            ..Default::default()
        }
    }

    pub fn with_map_file(mut self, map_file: impl Into<String>) -> Self {
        self.map_file = map_file.into();
        self
    }

    pub fn map_path(&self) -> PathBuf {
        self.world_path.join(&self.map_file)
    }

    pub fn world_mt_path(&self) -> PathBuf {
        self.world_path.join(&self.world_mt_file)
    }

    /// Load a config from a JSON file, missing fields take their defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
