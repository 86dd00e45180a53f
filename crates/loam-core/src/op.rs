//! Memory operation descriptors.
//!
//! Every request to an allocator is a single tagged [`MemOp`] value handed
//! to [`Allocator::dispatch`](crate::Allocator::dispatch). Callers normally
//! build descriptors through the per-kind constructors here or, one level
//! up, through the derived entry points on the trait.

use std::fmt;
use std::ptr::NonNull;

use crate::align::MAX_ALIGN;

/// The kind of memory operation being requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpKind {
    /// Release a previous allocation. The only kind that yields no pointer.
    Free,
    /// Enlarge a previous allocation, preserving its first `old_size` bytes.
    /// With no `old_ptr` this behaves exactly like [`OpKind::Alloc`]; every
    /// allocator implementation must honor that equivalence.
    Grow,
    /// Obtain fresh memory.
    Alloc,
    /// Reduce a previous allocation, preserving its first `size` bytes.
    Shrink,
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Free => write!(f, "free"),
            Self::Grow => write!(f, "grow"),
            Self::Alloc => write!(f, "alloc"),
            Self::Shrink => write!(f, "shrink"),
        }
    }
}

/// A single allocator request.
///
/// Invariants (checked by debug assertions in the implementations):
/// `size > 0` for Alloc/Grow/Shrink; `align` is zero (meaning
/// [`MAX_ALIGN`]) or a power of two; `old_ptr` denotes a live allocation
/// of `old_size` bytes from the same allocator when present.
#[derive(Clone, Copy, Debug)]
pub struct MemOp {
    /// The requested operation.
    pub kind: OpKind,
    /// Whether bytes the caller has not yet written must come back zeroed.
    /// For Grow this applies to the newly added tail.
    pub zeroed: bool,
    /// Requested size in bytes.
    pub size: u64,
    /// Requested alignment in bytes; 0 means [`MAX_ALIGN`].
    pub align: u64,
    /// The existing allocation for Grow/Shrink/Free.
    pub old_ptr: Option<NonNull<u8>>,
    /// Size in bytes of the existing allocation.
    pub old_size: u64,
}

impl MemOp {
    /// Descriptor for a fresh allocation of `size` bytes.
    pub fn alloc(size: u64, align: u64) -> Self {
        Self {
            kind: OpKind::Alloc,
            zeroed: false,
            size,
            align,
            old_ptr: None,
            old_size: 0,
        }
    }

    /// Descriptor for a fresh zero-filled allocation of `size` bytes.
    pub fn alloc_zeroed(size: u64, align: u64) -> Self {
        Self {
            zeroed: true,
            ..Self::alloc(size, align)
        }
    }

    /// Descriptor growing `old_ptr` from `old_size` to `size` bytes.
    ///
    /// `old_ptr: None` makes this equivalent to [`MemOp::alloc`].
    pub fn grow(old_ptr: Option<NonNull<u8>>, old_size: u64, size: u64, align: u64) -> Self {
        Self {
            kind: OpKind::Grow,
            zeroed: false,
            size,
            align,
            old_ptr,
            old_size,
        }
    }

    /// Descriptor shrinking `old_ptr` from `old_size` to `size` bytes.
    pub fn shrink(old_ptr: Option<NonNull<u8>>, old_size: u64, size: u64, align: u64) -> Self {
        Self {
            kind: OpKind::Shrink,
            ..Self::grow(old_ptr, old_size, size, align)
        }
    }

    /// Descriptor releasing `old_ptr`, an allocation of `old_size` bytes.
    pub fn free(old_ptr: Option<NonNull<u8>>, old_size: u64) -> Self {
        Self {
            kind: OpKind::Free,
            zeroed: false,
            size: 0,
            align: 0,
            old_ptr,
            old_size,
        }
    }

    /// The alignment this request actually asks for: `align`, with 0
    /// standing in for [`MAX_ALIGN`].
    pub fn effective_align(&self) -> u64 {
        if self.align == 0 {
            MAX_ALIGN
        } else {
            self.align
        }
    }
}
