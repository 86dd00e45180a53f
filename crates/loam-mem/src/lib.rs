//! Concrete allocators for the loam memory substrate.
//!
//! Everything here implements the [`Allocator`](loam_core::Allocator)
//! contract from `loam-core`; callers reach an allocator only through that
//! trait and never depend on which concrete kind backs it.
//!
//! # Architecture
//!
//! ```text
//! GeneralAllocator            system heap adapter, the root allocator
//!     ▲ parent
//! Arena                       chained-block bump allocator
//!     ▲ ×8 slots
//! scratch ring (per thread)   rotating ring of arenas + pin mask
//!     └── Scratch / PinGuard  RAII scope guards
//! ```
//!
//! Containers allocate persistent data from an [`Arena`] (or the
//! [`GeneralAllocator`] directly); transient and recursive work borrows a
//! [`Scratch`] allocator from the thread's ring and releases it on scope
//! exit, popping the backing arena to its acquisition mark.
//!
//! # Unsafe code
//!
//! This is the one loam crate that contains `unsafe` memory operations:
//! the system-heap calls in [`general`], and the header writes, bump
//! arithmetic and byte copies in [`arena`]. Each block states the
//! invariant it relies on. The scratch ring itself is safe code that only
//! forwards through `dispatch`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod arena;
pub mod config;
pub mod general;
pub mod scratch;

// Public re-exports for the primary API surface.
pub use arena::{Arena, BLOCK_HEADER};
pub use config::ScratchConfig;
pub use general::GeneralAllocator;
pub use scratch::{acquire, pin, pinned_slots, setup, PinGuard, Scratch, SLOT_COUNT};
