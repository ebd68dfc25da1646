use math::positions::{ChunkKey, MapBlockPos};
use math::rect::ChunkRect;
use std::collections::BTreeMap;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Summary of one scan of a world's map storage.
///
/// Built once per analysis and never changed afterwards, the reporting side only reads it.
#[derive(Debug, Clone, PartialEq)]
pub struct WorldStats {
    total_blocks: u64,
    underground_blocks: u64,
    generated_blocks: u64,
    map_size_bytes: u64,
    block_distribution: BTreeMap<ChunkKey, u64>,
}

impl WorldStats {
    /// Stats of a list of positions, as if each was one stored record
    pub fn from_positions(positions: impl IntoIterator<Item = MapBlockPos>, map_size_bytes: u64) -> Self {
        let mut accumulator = StatsAccumulator::new();
        for pos in positions {
            accumulator.add(pos);
        }
        let total_blocks = accumulator.scanned();
        accumulator.finish(total_blocks, map_size_bytes)
    }

    pub fn total_blocks(&self) -> u64 {
        self.total_blocks
    }

    /// Blocks with y < 0
    pub fn underground_blocks(&self) -> u64 {
        self.underground_blocks
    }

    pub fn surface_blocks(&self) -> u64 {
        self.total_blocks.saturating_sub(self.underground_blocks)
    }

    /// Always 0, the map storage keeps no trace of which blocks the map generator produced
    pub fn generated_blocks(&self) -> u64 {
        self.generated_blocks
    }

    pub fn map_size_bytes(&self) -> u64 {
        self.map_size_bytes
    }

    /// File size in binary megabytes
    pub fn map_size_mb(&self) -> f64 {
        self.map_size_bytes as f64 / BYTES_PER_MB
    }

    /// Number of stored blocks in each chunk column that has at least one
    pub fn block_distribution(&self) -> &BTreeMap<ChunkKey, u64> {
        &self.block_distribution
    }

    pub fn chunk_count(&self) -> usize {
        self.block_distribution.len()
    }

    /// Busiest chunk column, 0 for an empty world
    pub fn max_chunk_blocks(&self) -> u64 {
        self.block_distribution.values().copied().max().unwrap_or(0)
    }

    /// Rectangle of chunk columns covering every stored block, None for an empty world
    pub fn chunk_bounds(&self) -> Option<ChunkRect> {
        ChunkRect::bounding(self.block_distribution.keys().copied())
    }
}

/// Collects decoded positions one record at a time
#[derive(Debug, Default)]
pub struct StatsAccumulator {
    scanned: u64,
    underground_blocks: u64,
    block_distribution: BTreeMap<ChunkKey, u64>,
}

impl StatsAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, pos: MapBlockPos) {
        self.scanned += 1;
        if pos.y < 0 {
            self.underground_blocks += 1;
        }
        *self.block_distribution.entry(ChunkKey::from(pos)).or_insert(0) += 1;
    }

    /// Records seen so far
    pub fn scanned(&self) -> u64 {
        self.scanned
    }

    pub fn finish(self, total_blocks: u64, map_size_bytes: u64) -> WorldStats {
        WorldStats {
            total_blocks,
            underground_blocks: self.underground_blocks,
            generated_blocks: 0,
            map_size_bytes,
            block_distribution: self.block_distribution,
        }
    }
}
