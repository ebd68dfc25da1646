//! Everything that turns [`WorldStats`] into something a person reads.
//!
//! The analysis crates never depend on this one, a [`Reporter`] only ever sees the finished stats.

pub mod chart;
pub mod error;
pub mod json;
pub mod locale;
pub mod text;

pub use chart::ImageReport;
pub use error::ReportError;
pub use json::JsonReport;
pub use locale::Locale;
pub use text::TextReport;

use world_stats::WorldStats;

pub trait Reporter {
    fn report(&mut self, stats: &WorldStats) -> Result<(), ReportError>;
}
