use crate::config::{WorldConfig, DEFAULT_MAP_FILE};
use crate::error::{AnalyzeError, DecodeError};
use crate::stats::{StatsAccumulator, WorldStats};
use crate::storage::MapStorage;
use crate::world_mt::WorldMeta;
use math::positions::decode_key;

/// Turns the map storage of one world into [`WorldStats`]
pub struct WorldAnalyzer {
    config: WorldConfig,
}

impl WorldAnalyzer {
    pub fn new(config: WorldConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    ///read `world.mt`, None when the world has none
    pub fn read_meta(&self) -> Result<Option<WorldMeta>, AnalyzeError> {
        let path = self.config.world_mt_path();
        WorldMeta::load(&path).map_err(|source| AnalyzeError::Metadata { path, source })
    }

    ///read `world.mt` for a scan: a file that cannot be read only costs the backend check
    fn meta_for_scan(&self) -> Option<WorldMeta> {
        match self.read_meta() {
            Ok(meta) => meta,
            Err(err) => {
                log::warn!("{err}, skipping the backend check");
                None
            }
        }
    }

    /// Scan every stored block once and summarize the world.
    ///
    /// Any record that does not decode aborts the scan, no partial stats are returned.
    /// The storage is only read, so calling this again on an unchanged world gives the same stats.
    pub fn analyze(&self) -> Result<WorldStats, AnalyzeError> {
        self.analyze_with_meta(self.meta_for_scan().as_ref())
    }

    /// Same as [`WorldAnalyzer::analyze`] with `world.mt` already read by the caller.
    ///
    /// The backend named by `meta` is only enforced for the default map file name, a renamed
    /// map is assumed to be a sqlite copy whatever the world settings say.
    pub fn analyze_with_meta(&self, meta: Option<&WorldMeta>) -> Result<WorldStats, AnalyzeError> {
        if let Some(meta) = meta.filter(|meta| !meta.uses_sqlite()) {
            let backend = meta.backend().unwrap_or_default().to_string();
            if self.config.map_file != DEFAULT_MAP_FILE {
                log::warn!("world.mt names the {backend} backend, reading {} as sqlite3 anyway", self.config.map_file);
            } else {
                return Err(AnalyzeError::UnsupportedBackend { backend });
            }
        }

        let mut storage = MapStorage::open(&self.config.map_path())?;
        log::info!("analyzing {}", storage.path().display());

        let mut accumulator = StatsAccumulator::new();
        let total_blocks = storage.for_each_key(|record, key| {
            let pos = decode_key(key).map_err(|source| DecodeError::Key { record, source })?;
            accumulator.add(pos);
            Ok(())
        })?;

        let stats = accumulator.finish(total_blocks, storage.size_bytes());
        log::info!(
            "scanned {} blocks in {} chunks, {} underground",
            stats.total_blocks(),
            stats.chunk_count(),
            stats.underground_blocks()
        );
        if let Some(bounds) = stats.chunk_bounds() {
            log::debug!("chunk bounds {} to {}", bounds.min(), bounds.max());
        }
        Ok(stats)
    }
}
