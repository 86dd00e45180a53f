//! Core types and traits for the loam memory substrate.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! operation descriptor ([`MemOp`]), the [`Allocator`] dispatch contract
//! that every concrete allocator implements, and the alignment helpers
//! shared by all of them.
//!
//! The crate performs no memory operations of its own: the only `unsafe`
//! here is the forwarding through [`Allocator::dispatch`] in the derived
//! entry points. Concrete allocators live in `loam-mem`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod align;
pub mod op;
pub mod traits;

// Public re-exports for the primary API surface.
pub use align::{padding_to_align, GIB, KIB, MAX_ALIGN, MIB};
pub use op::{MemOp, OpKind};
pub use traits::{shared, Allocator, SharedAllocator};
