/// Number of values one axis digit of a packed key can take
pub const KEY_RADIX: i64 = 4096;
/// Digits at or above this value encode negative coordinates
pub const KEY_MAX_POSITIVE: i64 = KEY_RADIX / 2;

/// Smallest coordinate a packed key can hold on any axis
pub const MIN_COORD: i32 = -(KEY_MAX_POSITIVE as i32);
/// Biggest coordinate a packed key can hold on any axis
pub const MAX_COORD: i32 = KEY_MAX_POSITIVE as i32 - 1;

/// Side of a chunk column measured in map blocks, used to group blocks horizontally
pub const CHUNK_SIZE: i32 = 16;
