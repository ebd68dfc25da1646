use crate::positions::ChunkKey;
use glam::IVec2;

/// An inclusive rectangle of chunk columns, `min` and `max` are both inside it
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChunkRect {
    pub(crate) min: IVec2,
    pub(crate) max: IVec2,
}

impl ChunkRect {
    pub fn new(min: IVec2, max: IVec2) -> Self {
        debug_assert!(min.x <= max.x);
        debug_assert!(min.y <= max.y);
        Self { min, max }
    }

    pub fn safe_new(a: IVec2, b: IVec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    pub fn from_key(key: ChunkKey) -> Self {
        Self::new(key.0, key.0)
    }

    ///smallest rectangle holding every key, None when there is no key
    pub fn bounding(keys: impl IntoIterator<Item = ChunkKey>) -> Option<Self> {
        let mut keys = keys.into_iter();
        let first = Self::from_key(keys.next()?);
        Some(keys.fold(first, |rect, key| rect.including(key)))
    }

    ///grow the rectangle so it contains the key
    pub fn including(&self, key: ChunkKey) -> Self {
        Self {
            min: self.min.min(key.0),
            max: self.max.max(key.0),
        }
    }

    pub fn contains(&self, key: ChunkKey) -> bool {
        key.x() >= self.min.x && key.x() <= self.max.x && key.z() >= self.min.y && key.z() <= self.max.y
    }

    pub fn min(&self) -> ChunkKey {
        ChunkKey(self.min)
    }

    pub fn max(&self) -> ChunkKey {
        ChunkKey(self.max)
    }

    ///number of columns along x and z
    pub fn size(&self) -> IVec2 {
        self.max - self.min + IVec2::ONE
    }

    pub fn width(&self) -> u32 {
        self.size().x as u32
    }

    pub fn height(&self) -> u32 {
        self.size().y as u32
    }

    pub fn area(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }

    ///offset of the key from the min corner, None if the key is outside
    pub fn local(&self, key: ChunkKey) -> Option<(u32, u32)> {
        if !self.contains(key) {
            return None;
        }
        let offset = key.0 - self.min;
        Some((offset.x as u32, offset.y as u32))
    }
}
