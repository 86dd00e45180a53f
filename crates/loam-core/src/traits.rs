//! The allocator dispatch contract.
//!
//! Every concrete allocator (general, arena, scratch) is reached through
//! the single entry point [`Allocator::dispatch`]; callers hold a reference
//! to the trait and never know which concrete kind backs it. The derived
//! entry points (`alloc`, `grow`, ...) build the descriptor and forward.
//!
//! Allocation never fails recoverably: exhaustion and size overflow abort
//! the process inside the implementation, so the derived entry points
//! return bare pointers rather than `Result`.

use std::cell::RefCell;
use std::mem;
use std::ptr::NonNull;
use std::rc::Rc;

use crate::op::MemOp;

/// A polymorphic allocator capability.
///
/// Implementations own whatever bookkeeping they need; the memory they hand
/// out is owned by the caller until it is passed back through `grow`,
/// `shrink`, or `free` on the same allocator.
///
/// # Dispatch contract
///
/// - **Alloc** ignores `old_ptr`/`old_size` and returns fresh memory of
///   `size` bytes, zero-filled when `zeroed` is set. Fatal if the backing
///   store cannot satisfy the request; a zero `size` is a contract
///   violation caught by debug assertions.
/// - **Grow** with `old_ptr: None` behaves exactly like Alloc. Otherwise
///   the result holds the first `old_size` bytes of the old region and is
///   at least `size` bytes long; implementations may move the allocation.
/// - **Shrink** is Grow's mirror with `size <= old_size`, preserving the
///   first `size` bytes.
/// - **Free** releases the region and returns `None`; it is the only kind
///   allowed to return `None`.
///
/// Allocations made with an `align` above [`MAX_ALIGN`](crate::MAX_ALIGN)
/// must carry that same `align` in every later Grow/Shrink/Free descriptor;
/// the general allocator needs it to reconstruct the allocation's layout.
pub trait Allocator {
    /// Single dispatch entry point for all memory operations.
    ///
    /// # Safety
    ///
    /// When `op.old_ptr` is present it must denote a live allocation of
    /// `op.old_size` bytes obtained from this allocator and not released
    /// since; after a Grow/Shrink/Free the old pointer must no longer be
    /// used (Grow/Shrink may move the region).
    unsafe fn dispatch(&mut self, op: MemOp) -> Option<NonNull<u8>>;

    /// The thread scratch-ring slot backing this allocator, if any.
    ///
    /// The ring's pinning machinery uses this to recognize its own arenas;
    /// every other allocator reports `None`.
    fn scratch_slot(&self) -> Option<u8> {
        None
    }

    /// Obtain `size` bytes at `align` (0 meaning the platform maximum).
    ///
    /// Aborts the process on exhaustion; `size` must be nonzero.
    fn alloc(&mut self, size: u64, align: u64) -> NonNull<u8> {
        // SAFETY: an Alloc descriptor carries no old pointer.
        unsafe { self.dispatch(MemOp::alloc(size, align)) }
            .expect("allocator returned no memory for an alloc request")
    }

    /// Like [`Allocator::alloc`], with the memory zero-filled.
    fn alloc_zeroed(&mut self, size: u64, align: u64) -> NonNull<u8> {
        // SAFETY: an Alloc descriptor carries no old pointer.
        unsafe { self.dispatch(MemOp::alloc_zeroed(size, align)) }
            .expect("allocator returned no memory for an alloc request")
    }

    /// Obtain memory sized and aligned for a single `T`.
    ///
    /// `T` must not be zero-sized. The memory is uninitialized.
    fn alloc_one<T>(&mut self) -> NonNull<T>
    where
        Self: Sized,
    {
        self.alloc(mem::size_of::<T>() as u64, mem::align_of::<T>() as u64)
            .cast()
    }

    /// Grow `old_ptr` from `old_size` to `size` bytes, preserving content.
    ///
    /// With `old_ptr: None` this is exactly [`Allocator::alloc`].
    ///
    /// # Safety
    ///
    /// Same as [`Allocator::dispatch`] for the old region; the old pointer
    /// is invalidated by the call.
    unsafe fn grow(
        &mut self,
        old_ptr: Option<NonNull<u8>>,
        old_size: u64,
        size: u64,
        align: u64,
    ) -> NonNull<u8> {
        // SAFETY: forwarded caller obligation.
        unsafe { self.dispatch(MemOp::grow(old_ptr, old_size, size, align)) }
            .expect("allocator returned no memory for a grow request")
    }

    /// Shrink `old_ptr` from `old_size` to `size` bytes, preserving the
    /// first `size` bytes.
    ///
    /// # Safety
    ///
    /// Same as [`Allocator::grow`].
    unsafe fn shrink(
        &mut self,
        old_ptr: Option<NonNull<u8>>,
        old_size: u64,
        size: u64,
        align: u64,
    ) -> NonNull<u8> {
        // SAFETY: forwarded caller obligation.
        unsafe { self.dispatch(MemOp::shrink(old_ptr, old_size, size, align)) }
            .expect("allocator returned no memory for a shrink request")
    }

    /// Release `old_ptr`, an allocation of `old_size` bytes.
    ///
    /// # Safety
    ///
    /// Same as [`Allocator::dispatch`]; the pointer must not be used again.
    unsafe fn free(&mut self, old_ptr: NonNull<u8>, old_size: u64) {
        // SAFETY: forwarded caller obligation.
        unsafe { self.dispatch(MemOp::free(Some(old_ptr), old_size)) };
    }
}

/// Shared handle to an allocator.
///
/// Arenas hold one of these to reach their parent, and several arenas may
/// share the same parent (the scratch ring's eight slots do). Allocators
/// are single-thread by contract; the `Rc`-based handle is `!Send`, which
/// turns that contract into a compile error.
pub type SharedAllocator = Rc<RefCell<dyn Allocator>>;

/// Wrap a concrete allocator into a [`SharedAllocator`] handle.
pub fn shared<A: Allocator + 'static>(allocator: A) -> SharedAllocator {
    Rc::new(RefCell::new(allocator))
}
