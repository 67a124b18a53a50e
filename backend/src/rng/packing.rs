//! Half-word packing for 32-bit output
//!
//! One 64-bit draw yields two 32-bit values: the low half is returned
//! immediately, the high half is held here and served by the next 32-bit
//! call without advancing the engine.

/// Pending high half of the last 64-bit draw taken for 32-bit output.
///
/// Only the 32-bit accessor reads or writes this; 64-bit draws leave it alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct HalfWordCache {
    has_cached: bool,
    cached_value: u32,
}

impl HalfWordCache {
    /// Rebuild a cache from persisted fields.
    pub fn from_parts(has_cached: bool, cached_value: u32) -> Self {
        Self {
            has_cached,
            cached_value,
        }
    }

    /// Whether a high half is waiting to be returned.
    pub fn has_cached(&self) -> bool {
        self.has_cached
    }

    /// Stored value. Stale when [`has_cached`](Self::has_cached) is false.
    pub fn cached_value(&self) -> u32 {
        self.cached_value
    }

    /// Serve a 32-bit value, calling `draw` only when nothing is cached.
    ///
    /// # Example
    /// ```
    /// use bitgenerators_core::HalfWordCache;
    ///
    /// let mut cache = HalfWordCache::default();
    /// let word = 0x1122_3344_5566_7788u64;
    /// assert_eq!(cache.next_uint32(|| word), 0x5566_7788);
    /// assert_eq!(cache.next_uint32(|| unreachable!()), 0x1122_3344);
    /// ```
    #[inline]
    pub fn next_uint32(&mut self, draw: impl FnOnce() -> u64) -> u32 {
        if self.has_cached {
            self.has_cached = false;
            return self.cached_value;
        }
        let next = draw();
        self.has_cached = true;
        self.cached_value = (next >> 32) as u32;
        (next & 0xFFFF_FFFF) as u32
    }
}
