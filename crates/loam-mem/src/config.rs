//! Scratch-ring configuration parameters.

use loam_core::KIB;

/// Configuration for a thread's scratch ring.
///
/// Captured once at [`setup`](crate::scratch::setup) time; the ring never
/// resizes afterwards.
#[derive(Clone, Copy, Debug)]
pub struct ScratchConfig {
    /// Minimum total footprint of the ring in bytes.
    ///
    /// Divided evenly across the eight slots: each slot arena's minimum
    /// block size is `min_total_size / 8`, so a ring that stays within its
    /// budget never chains a second block per slot.
    pub min_total_size: u64,
}

impl ScratchConfig {
    /// Default ring footprint: 512 KiB, i.e. 64 KiB per slot.
    pub const DEFAULT_MIN_TOTAL_SIZE: u64 = 512 * KIB;

    /// Create a config with the given minimum total footprint.
    pub fn new(min_total_size: u64) -> Self {
        Self { min_total_size }
    }
}

impl Default for ScratchConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MIN_TOTAL_SIZE)
    }
}
