//! loam: a memory-management substrate for building foundational libraries.
//!
//! This is the top-level facade crate re-exporting the public API from the
//! loam sub-crates. For most users, adding `loam` as a single dependency
//! is sufficient.
//!
//! The substrate is three layers:
//!
//! - an allocator contract ([`Allocator`] + [`MemOp`]) that containers
//!   program against without knowing the concrete allocator;
//! - a [`GeneralAllocator`] (system heap) and an [`Arena`] (chained-block
//!   bump allocator with stack-discipline popping);
//! - a per-thread [`scratch`] ring handing out stack-scoped temporary
//!   allocators, with pinning to keep long-lived results out of the
//!   rotation.
//!
//! # Quick start
//!
//! ```rust
//! use loam::prelude::*;
//!
//! // Persistent data goes through an arena rooted at the system heap.
//! let mut arena = Arena::new(GeneralAllocator::shared(), 4 * KIB);
//! let head = arena.alloc(64, 0);
//! assert_eq!(arena.total_used(), BLOCK_HEADER + 64);
//!
//! // Transient work borrows a scratch allocator from the thread's ring;
//! // dropping it pops the backing arena to its acquisition mark.
//! {
//!     let mut tm = loam::scratch::acquire();
//!     let tmp = tm.alloc(256, 0);
//!     unsafe { tmp.as_ptr().write_bytes(0, 256) };
//! }
//!
//! // Stack-discipline reclamation.
//! unsafe { head.as_ptr().write_bytes(0xAB, 64) };
//! arena.pop_all();
//! assert_eq!(arena.total_used(), 0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub use loam_core::{
    padding_to_align, shared, Allocator, MemOp, OpKind, SharedAllocator, GIB, KIB, MAX_ALIGN, MIB,
};
pub use loam_mem::{Arena, GeneralAllocator, PinGuard, Scratch, ScratchConfig, BLOCK_HEADER};

/// Scratch-ring entry points: `setup`, `acquire`, `pin`.
pub mod scratch {
    pub use loam_mem::scratch::{acquire, pin, pinned_slots, setup, SLOT_COUNT};
}

/// The common imports, for glob use.
pub mod prelude {
    pub use loam_core::{Allocator, MemOp, OpKind, SharedAllocator, KIB, MAX_ALIGN, MIB};
    pub use loam_mem::{Arena, GeneralAllocator, ScratchConfig, BLOCK_HEADER};
}
