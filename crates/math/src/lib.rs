pub mod consts;
pub mod positions;
pub mod rect;

pub use glam::{IVec2, IVec3};
