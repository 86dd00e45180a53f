//! Benchmark workloads and builders for the loam memory substrate.
//!
//! Provides the pieces the `mem_ops` bench shares: a persistent arena
//! builder and deterministic jittered size schedules, so the hot loops
//! measure allocator work rather than RNG calls.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

use loam_mem::{Arena, GeneralAllocator};

/// Build a heap-rooted arena with the given block-size floor.
pub fn bench_arena(min_block_size: u64) -> Arena {
    Arena::new(GeneralAllocator::shared(), min_block_size)
}

/// A deterministic schedule of `len` allocation sizes in `1..max`.
///
/// Pre-computing the jitter keeps RNG cost out of the measured loop while
/// still defeating constant-folding of the bump path.
pub fn size_schedule(seed: u64, len: usize, max: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.random_range(1..max)).collect()
}
