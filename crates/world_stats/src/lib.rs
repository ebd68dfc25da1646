#![doc = include_str!("../README.md")]
pub mod analyzer;
pub mod config;
pub mod error;
pub mod stats;
pub mod storage;
pub mod world_mt;

pub use analyzer::WorldAnalyzer;
pub use config::WorldConfig;
pub use error::{AnalyzeError, ConfigError, DecodeError, StorageFault};
pub use stats::{StatsAccumulator, WorldStats};
pub use world_mt::WorldMeta;
