//! `world.mt` holds the world settings as `key = value` lines

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

/// The only map backend the analyzer can read
pub const SQLITE_BACKEND: &str = "sqlite3";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorldMeta {
    entries: BTreeMap<String, String>,
}

impl WorldMeta {
    pub fn parse(text: &str) -> Self {
        let entries = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter_map(|line| line.split_once('='))
            .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
            .filter(|(key, _)| !key.is_empty())
            .collect();
        Self { entries }
    }

    /// Read and parse the file, Ok(None) when it does not exist.
    /// Bytes that are not UTF-8 are replaced, a world name in a legacy encoding does not break parsing
    pub fn load(path: &Path) -> io::Result<Option<Self>> {
        match fs::read(path) {
            Ok(bytes) => Ok(Some(Self::parse(&String::from_utf8_lossy(&bytes)))),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn backend(&self) -> Option<&str> {
        self.get("backend")
    }

    pub fn game_id(&self) -> Option<&str> {
        self.get("gameid")
    }

    pub fn world_name(&self) -> Option<&str> {
        self.get("world_name")
    }

    /// A world without a backend entry is an old one, those always used sqlite3
    pub fn uses_sqlite(&self) -> bool {
        self.backend().map_or(true, |backend| backend == SQLITE_BACKEND)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    pub fn parse_key_values() {
        let meta = WorldMeta::parse(
            "gameid = minetest\n\
             backend=sqlite3\n\
             # a comment = ignored\n\
             \n\
             world_name =  My World \n\
             garbage line\n",
        );
        assert_eq!(meta.game_id(), Some("minetest"));
        assert_eq!(meta.backend(), Some("sqlite3"));
        assert_eq!(meta.world_name(), Some("My World"));
        assert_eq!(meta.get("# a comment"), None);
        assert!(meta.uses_sqlite());
    }

    #[test]
    pub fn backend_check() {
        assert!(WorldMeta::parse("").uses_sqlite());
        assert!(!WorldMeta::parse("backend = leveldb").uses_sqlite());
    }

    #[test]
    pub fn invalid_utf8_is_read_lossily() {
        let path = std::env::temp_dir().join(format!("world_stats_latin1_{}.mt", std::process::id()));
        fs::write(&path, b"world_name = Caf\xe9\nbackend = sqlite3\n").unwrap();
        let meta = WorldMeta::load(&path);
        fs::remove_file(&path).unwrap();

        let meta = meta.unwrap().unwrap();
        assert_eq!(meta.world_name(), Some("Caf\u{fffd}"));
        assert_eq!(meta.backend(), Some("sqlite3"));
    }

    #[test]
    pub fn missing_file_is_none() {
        let path = std::env::temp_dir().join("world_stats_no_such_world.mt");
        assert_eq!(WorldMeta::load(&path).unwrap(), None);
    }
}
