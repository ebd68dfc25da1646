use crate::consts::{CHUNK_SIZE, KEY_MAX_POSITIVE, KEY_RADIX, MAX_COORD, MIN_COORD};
use glam::{IVec2, IVec3};
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// A map block position, measured in map blocks, valid from -2048 to 2047 on every axis
pub type MapBlockPos = IVec3;

/// The integer form of a MapBlockPos, as stored in the `pos` column of a world database
pub type PackedKey = i64;

/// Smallest key the codec accepts, it is the encoding of (-2048, -2048, -2048)
pub const MIN_KEY: PackedKey = MIN_COORD as i64 * (1 + KEY_RADIX + KEY_RADIX * KEY_RADIX);
/// Every key below this fits in three digits
pub const KEY_LIMIT: PackedKey = KEY_RADIX * KEY_RADIX * KEY_RADIX;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("packed key {0} is outside [{}, {})", MIN_KEY, KEY_LIMIT)]
    KeyOutOfRange(PackedKey),
    #[error("position {0} does not fit in a packed key")]
    PositionOutOfRange(MapBlockPos),
}

fn unsigned_to_signed(digit: i64) -> i32 {
    debug_assert!((0..KEY_RADIX).contains(&digit));
    if digit < KEY_MAX_POSITIVE {
        digit as i32
    } else {
        (digit - KEY_RADIX) as i32
    }
}

/// Decode a packed key into a map block position.
///
/// The key is read as three base 4096 digits, x being the least significant one.
/// Each digit is made signed before it is removed from the key, so negative axes borrow
/// from the next digit. Keys written by the engine for negative z are negative themselves,
/// they decode like any other key.
///
/// Every key in `[MIN_KEY, KEY_LIMIT)` decodes to a position with all axes in `[-2048, 2047]`,
/// anything else is rejected.
pub fn decode_key(key: PackedKey) -> Result<MapBlockPos, CodecError> {
    if !(MIN_KEY..KEY_LIMIT).contains(&key) {
        return Err(CodecError::KeyOutOfRange(key));
    }

    let x = unsigned_to_signed(key.rem_euclid(KEY_RADIX));
    let key = (key - x as i64).div_euclid(KEY_RADIX);
    let y = unsigned_to_signed(key.rem_euclid(KEY_RADIX));
    let key = (key - y as i64).div_euclid(KEY_RADIX);
    let z = unsigned_to_signed(key.rem_euclid(KEY_RADIX));

    Ok(MapBlockPos::new(x, y, z))
}

/// Pack a map block position the way the engine stores it, inverse of [`decode_key`]
pub fn encode_key(pos: MapBlockPos) -> Result<PackedKey, CodecError> {
    let in_range = |axis: i32| (MIN_COORD..=MAX_COORD).contains(&axis);
    if !(in_range(pos.x) && in_range(pos.y) && in_range(pos.z)) {
        return Err(CodecError::PositionOutOfRange(pos));
    }
    Ok(pos.x as i64 + pos.y as i64 * KEY_RADIX + pos.z as i64 * KEY_RADIX * KEY_RADIX)
}

/// A horizontal column of CHUNK_SIZE x CHUNK_SIZE map blocks, `.0.x` is the x axis and `.0.y` the z axis.
/// Ordered by x then z, so it can key a sorted map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkKey(pub IVec2);

impl ChunkKey {
    pub fn new(x: i32, z: i32) -> Self {
        Self(IVec2::new(x, z))
    }

    pub fn x(&self) -> i32 {
        self.0.x
    }

    pub fn z(&self) -> i32 {
        self.0.y
    }
}

impl From<MapBlockPos> for ChunkKey {
    /// floor division, x = -1 belongs to the chunk -1
    fn from(pos: MapBlockPos) -> Self {
        Self::new(pos.x.div_euclid(CHUNK_SIZE), pos.z.div_euclid(CHUNK_SIZE))
    }
}

impl From<ChunkKey> for IVec2 {
    fn from(key: ChunkKey) -> Self {
        key.0
    }
}

impl PartialOrd<Self> for ChunkKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ChunkKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.x().cmp(&other.x()).then_with(|| self.z().cmp(&other.z()))
    }
}

impl Display for ChunkKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x(), self.z())
    }
}
