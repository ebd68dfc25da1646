use crate::error::ReportError;
use crate::Reporter;
use serde::Serialize;
use std::io::Write;
use world_stats::WorldStats;

#[derive(Debug, Serialize)]
struct ChunkCount {
    x: i32,
    z: i32,
    count: u64,
}

#[derive(Debug, Serialize)]
struct ChunkBounds {
    min_x: i32,
    min_z: i32,
    max_x: i32,
    max_z: i32,
}

#[derive(Debug, Serialize)]
struct StatsDocument {
    total_blocks: u64,
    underground_blocks: u64,
    surface_blocks: u64,
    generated_blocks: u64,
    map_size_bytes: u64,
    map_size_mb: f64,
    chunk_bounds: Option<ChunkBounds>,
    //sorted by x then z
    block_distribution: Vec<ChunkCount>,
}

impl From<&WorldStats> for StatsDocument {
    fn from(stats: &WorldStats) -> Self {
        Self {
            total_blocks: stats.total_blocks(),
            underground_blocks: stats.underground_blocks(),
            surface_blocks: stats.surface_blocks(),
            generated_blocks: stats.generated_blocks(),
            map_size_bytes: stats.map_size_bytes(),
            map_size_mb: stats.map_size_mb(),
            chunk_bounds: stats.chunk_bounds().map(|rect| ChunkBounds {
                min_x: rect.min().x(),
                min_z: rect.min().z(),
                max_x: rect.max().x(),
                max_z: rect.max().z(),
            }),
            block_distribution: stats
                .block_distribution()
                .iter()
                .map(|(key, count)| ChunkCount {
                    x: key.x(),
                    z: key.z(),
                    count: *count,
                })
                .collect(),
        }
    }
}

/// Machine readable stats, pretty printed JSON
pub struct JsonReport<W: Write> {
    out: W,
}

impl<W: Write> JsonReport<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for JsonReport<W> {
    fn report(&mut self, stats: &WorldStats) -> Result<(), ReportError> {
        serde_json::to_writer_pretty(&mut self.out, &StatsDocument::from(stats))?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use math::positions::MapBlockPos;
    use serde_json::{json, Value};

    #[test]
    pub fn document_layout() {
        let stats = WorldStats::from_positions(
            [
                MapBlockPos::new(0, 0, 0),
                MapBlockPos::new(16, -1, 0),
                MapBlockPos::new(-17, 5, 0),
                MapBlockPos::new(-20, -5, 31),
            ],
            1024 * 1024,
        );
        let mut report = JsonReport::new(Vec::new());
        report.report(&stats).unwrap();
        let value: Value = serde_json::from_slice(&report.into_inner()).unwrap();

        assert_eq!(
            value,
            json!({
                "total_blocks": 4,
                "underground_blocks": 2,
                "surface_blocks": 2,
                "generated_blocks": 0,
                "map_size_bytes": 1048576,
                "map_size_mb": 1.0,
                "chunk_bounds": { "min_x": -2, "min_z": 0, "max_x": 1, "max_z": 1 },
                "block_distribution": [
                    { "x": -2, "z": 0, "count": 1 },
                    { "x": -2, "z": 1, "count": 1 },
                    { "x": 0, "z": 0, "count": 1 },
                    { "x": 1, "z": 0, "count": 1 }
                ]
            })
        );
    }

    #[test]
    pub fn empty_world_has_no_bounds() {
        let stats = WorldStats::from_positions(Vec::new(), 0);
        let mut report = JsonReport::new(Vec::new());
        report.report(&stats).unwrap();
        let value: Value = serde_json::from_slice(&report.into_inner()).unwrap();
        assert_eq!(value["chunk_bounds"], Value::Null);
        assert_eq!(value["block_distribution"], json!([]));
    }
}
