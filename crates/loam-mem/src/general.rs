//! The general allocator: a thin adapter over the system heap.
//!
//! [`GeneralAllocator`] translates operation descriptors into
//! `std::alloc` calls. It is the root of every allocator tree: arenas
//! draw their blocks from it (directly or through another arena), and
//! persistent data with no scope-bound lifetime is allocated from it
//! directly.

use std::alloc::{self, Layout};
use std::ptr::NonNull;

use loam_core::{shared, Allocator, MemOp, OpKind, SharedAllocator};

/// Adapter implementing the allocator contract on the system heap.
///
/// Stateless: every instance is interchangeable with every other. Memory
/// allocated through one instance may be released through another.
///
/// Requested alignments above the platform default are honored by
/// building the allocation's [`Layout`] with that alignment, which is why
/// Grow/Shrink/Free descriptors must carry the allocation's original
/// `align` when it exceeded [`MAX_ALIGN`](loam_core::MAX_ALIGN).
#[derive(Clone, Copy, Debug, Default)]
pub struct GeneralAllocator;

impl GeneralAllocator {
    /// Create a general allocator.
    pub fn new() -> Self {
        Self
    }

    /// A fresh [`SharedAllocator`] handle to the system heap, for use as
    /// an arena parent.
    pub fn shared() -> SharedAllocator {
        shared(Self)
    }
}

/// Build the layout for a request, treating any failure as fatal.
///
/// Layout construction only fails on a non-power-of-two alignment or a
/// size that overflows when padded, both unrecoverable by contract.
fn layout_of(size: u64, align: u64) -> Layout {
    let size = usize::try_from(size).expect("allocation size exceeds the address space");
    let align = usize::try_from(align).expect("alignment exceeds the address space");
    Layout::from_size_align(size, align).expect("invalid allocation layout")
}

impl GeneralAllocator {
    fn alloc_fresh(size: u64, align: u64, zeroed: bool) -> NonNull<u8> {
        // A zero-size layout is not allocatable; this check stays on in
        // release builds because the system heap makes it unsound, not
        // merely wrong.
        assert!(size > 0, "zero-size allocation");
        let layout = layout_of(size, align);
        // SAFETY: layout has nonzero size.
        let raw = unsafe {
            if zeroed {
                alloc::alloc_zeroed(layout)
            } else {
                alloc::alloc(layout)
            }
        };
        NonNull::new(raw).unwrap_or_else(|| alloc::handle_alloc_error(layout))
    }

    /// # Safety
    ///
    /// `old` must be a live system-heap allocation of `old_size` bytes at
    /// `align` alignment.
    unsafe fn realloc_region(
        old: NonNull<u8>,
        old_size: u64,
        size: u64,
        align: u64,
        zero_tail: bool,
    ) -> NonNull<u8> {
        assert!(size > 0, "zero-size reallocation");
        let old_layout = layout_of(old_size, align);
        let new_size = usize::try_from(size).expect("allocation size exceeds the address space");
        // SAFETY: caller guarantees `old` was allocated with `old_layout`;
        // `new_size` is nonzero.
        let raw = unsafe { alloc::realloc(old.as_ptr(), old_layout, new_size) };
        let ptr =
            NonNull::new(raw).unwrap_or_else(|| alloc::handle_alloc_error(layout_of(size, align)));
        if zero_tail && size > old_size {
            // SAFETY: the region now spans `size` bytes; only the newly
            // added tail is overwritten.
            unsafe {
                ptr.as_ptr()
                    .add(old_size as usize)
                    .write_bytes(0, (size - old_size) as usize);
            }
        }
        ptr
    }
}

impl Allocator for GeneralAllocator {
    unsafe fn dispatch(&mut self, op: MemOp) -> Option<NonNull<u8>> {
        let align = op.effective_align();
        match op.kind {
            OpKind::Alloc => Some(Self::alloc_fresh(op.size, align, op.zeroed)),
            OpKind::Grow => match op.old_ptr {
                // Grow from nothing is exactly an alloc.
                None => Some(Self::alloc_fresh(op.size, align, op.zeroed)),
                Some(old) => {
                    debug_assert!(op.size >= op.old_size, "grow must not reduce the allocation");
                    // SAFETY: forwarded caller obligation.
                    Some(unsafe {
                        Self::realloc_region(old, op.old_size, op.size, align, op.zeroed)
                    })
                }
            },
            OpKind::Shrink => match op.old_ptr {
                None => {
                    debug_assert!(false, "shrink without an existing allocation");
                    Some(Self::alloc_fresh(op.size, align, op.zeroed))
                }
                Some(old) => {
                    debug_assert!(op.size <= op.old_size, "shrink must not enlarge the allocation");
                    // SAFETY: forwarded caller obligation.
                    Some(unsafe { Self::realloc_region(old, op.old_size, op.size, align, false) })
                }
            },
            OpKind::Free => {
                if let Some(old) = op.old_ptr {
                    // SAFETY: caller guarantees a live allocation of
                    // `old_size` bytes at `align`.
                    unsafe { alloc::dealloc(old.as_ptr(), layout_of(op.old_size, align)) };
                }
                None
            }
        }
    }
}
