//! Thread-local scratch memory: a rotating ring of arenas with pinning.
//!
//! Each thread owns a ring of eight arenas. [`acquire`] hands out a
//! [`Scratch`] allocator backed by the next ring slot; dropping it pops
//! the backing arena to its acquisition mark, so scratch scopes nest like
//! a stack:
//!
//! ```
//! # use loam_core::Allocator;
//! fn build_report() -> usize {
//!     let mut tm = loam_mem::acquire(); // released at scope exit
//!     let bytes = tm.alloc(256, 0);
//!     // ... scribble into `bytes` ...
//!     bytes.as_ptr() as usize
//! }
//! # build_report();
//! ```
//!
//! # Fragmentation, rotation and pinning
//!
//! Every scratch allocator is backed by an arena, which is a stack. If two
//! live scratch scopes share one arena, the inner one's memory may not be
//! poppable because it is not entirely at the top; the backing arena then
//! carries slack until a wider pop covers it. Two mechanisms keep scopes
//! on disjoint arenas:
//!
//! - the ring rotates, so consecutive acquisitions use different slots and
//!   only the ninth concurrent scope revisits one;
//! - [`pin`] excludes a slot from rotation for as long as the pin guard
//!   lives, protecting a long-lived result arena from being handed out as
//!   scratch space by a nested call. With every slot pinned, acquisition
//!   falls back to reusing the current slot; the cost is fragmentation,
//!   not an error.
//!
//! The ring is strictly per-thread: guards are `!Send`, and each thread
//! that uses scratch memory gets (or explicitly [`setup`]s) its own ring.

use std::cell::RefCell;
use std::marker::PhantomData;
use std::ptr::NonNull;

use loam_core::{Allocator, MemOp, SharedAllocator};

use crate::arena::Arena;
use crate::config::ScratchConfig;
use crate::general::GeneralAllocator;

/// Number of arenas in each thread's scratch ring.
pub const SLOT_COUNT: usize = 8;

/// Per-thread ring state: eight arena slots, a rotating cursor, and a
/// bitmask of pinned slots.
struct ScratchRing {
    slot_idx: u8,
    pin_flags: u8,
    slots: [Arena; SLOT_COUNT],
}

impl ScratchRing {
    fn new(parent: SharedAllocator, config: &ScratchConfig) -> Self {
        let per_slot = config.min_total_size / SLOT_COUNT as u64;
        Self {
            slot_idx: 0,
            pin_flags: 0,
            slots: std::array::from_fn(|_| Arena::new(parent.clone(), per_slot)),
        }
    }

    /// Choose the slot for a new acquisition and record its mark.
    fn begin(&mut self) -> (u8, u64) {
        if self.pin_flags != u8::MAX {
            loop {
                self.slot_idx = (self.slot_idx + 1) % SLOT_COUNT as u8;
                if self.pin_flags & (1 << self.slot_idx) == 0 {
                    break;
                }
            }
        }
        // With all eight slots pinned the cursor stays put: reusing the
        // current slot costs fragmentation, not correctness.
        let slot = self.slot_idx;
        (slot, self.slots[slot as usize].total_used())
    }

    fn end(&mut self, slot: u8, mark: u64) {
        self.slots[slot as usize].pop_to(mark);
    }

    /// Set the pin bit for `slot` (if any), returning (prior, applied)
    /// mask states for the matching pop.
    fn pin_push(&mut self, slot: Option<u8>, exclusive: bool) -> (u8, u8) {
        let prior = self.pin_flags;
        if exclusive {
            self.pin_flags = 0;
        }
        if let Some(slot) = slot {
            self.pin_flags |= 1 << slot;
        }
        (prior, self.pin_flags)
    }

    fn pin_pop(&mut self, prior: u8) {
        self.pin_flags = prior;
    }
}

thread_local! {
    static RING: RefCell<Option<ScratchRing>> = const { RefCell::new(None) };
}

/// Run `f` against this thread's ring, creating it with defaults first if
/// it does not exist yet.
fn with_ring<R>(f: impl FnOnce(&mut ScratchRing) -> R) -> R {
    RING.with(|cell| {
        let mut slot = cell.borrow_mut();
        let ring = slot.get_or_insert_with(|| {
            ScratchRing::new(GeneralAllocator::shared(), &ScratchConfig::default())
        });
        f(ring)
    })
}

/// Initialize this thread's scratch ring.
///
/// Must run before the thread's first [`acquire`] (which otherwise
/// lazily initializes the ring from [`GeneralAllocator`] and
/// [`ScratchConfig::default`]).
///
/// # Panics
///
/// Panics if the ring already exists on this thread.
pub fn setup(parent: SharedAllocator, config: ScratchConfig) {
    RING.with(|cell| {
        let mut slot = cell.borrow_mut();
        assert!(
            slot.is_none(),
            "scratch ring already initialized on this thread"
        );
        *slot = Some(ScratchRing::new(parent, &config));
    });
}

/// Begin a scratch scope: advance the ring and hand out its next arena.
///
/// The returned allocator releases on drop by popping the backing arena
/// to the mark recorded here. Scopes must nest: a scratch allocator
/// acquired later must be dropped earlier. Cross-slot violations merely
/// fragment; same-slot violations corrupt the stack and are caught only
/// by debug assertions.
pub fn acquire() -> Scratch {
    let (slot, mark) = with_ring(ScratchRing::begin);
    Scratch {
        slot,
        mark,
        _single_thread: PhantomData,
    }
}

/// Pin the ring slot backing `allocator` for the lifetime of the guard.
///
/// While pinned, [`acquire`] skips the slot as long as any unpinned slot
/// remains. `exclusive` first clears every other pin, making this the
/// only protected slot. If `allocator` is not backed by this thread's
/// ring there is no slot to pin; the guard still restores the prior mask
/// (and `exclusive` still clears it meanwhile).
///
/// Pin scopes nest like scratch scopes; dropping guards out of order is a
/// contract violation caught by a debug assertion.
pub fn pin(allocator: &dyn Allocator, exclusive: bool) -> PinGuard {
    let slot = allocator.scratch_slot();
    let (prior, applied) = with_ring(|ring| ring.pin_push(slot, exclusive));
    PinGuard {
        prior,
        applied,
        _single_thread: PhantomData,
    }
}

/// The pin mask currently in force on this thread's ring.
///
/// Bit `n` set means slot `n` is excluded from rotation.
pub fn pinned_slots() -> u8 {
    with_ring(|ring| ring.pin_flags)
}

/// A scratch allocator borrowed from the thread's ring.
///
/// Created by [`acquire`]; implements [`Allocator`] by dispatching into
/// the backing ring arena. Dropping it pops that arena back to the mark
/// recorded at acquisition, giving exact stack-scoped deallocation.
#[must_use]
pub struct Scratch {
    slot: u8,
    mark: u64,
    /// Scratch handles never leave their ring's thread.
    _single_thread: PhantomData<*mut ()>,
}

impl Scratch {
    /// The ring slot backing this scratch scope.
    pub fn slot_index(&self) -> u8 {
        self.slot
    }

    /// The backing arena's used-byte count at acquisition time; the drop
    /// pops back to this.
    pub fn mark(&self) -> u64 {
        self.mark
    }

    /// The backing arena's current used-byte count.
    pub fn backing_used(&self) -> u64 {
        with_ring(|ring| ring.slots[self.slot as usize].total_used())
    }
}

impl Allocator for Scratch {
    unsafe fn dispatch(&mut self, op: MemOp) -> Option<NonNull<u8>> {
        with_ring(|ring| {
            // SAFETY: forwarded caller obligation; the backing arena is
            // the allocator that produced any old pointer handed through
            // this scratch scope.
            unsafe { ring.slots[self.slot as usize].dispatch(op) }
        })
    }

    fn scratch_slot(&self) -> Option<u8> {
        Some(self.slot)
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        // try_with: a guard dropped during thread teardown after the ring
        // is gone has nothing left to pop.
        let _ = RING.try_with(|cell| {
            if let Some(ring) = cell.borrow_mut().as_mut() {
                ring.end(self.slot, self.mark);
            }
        });
    }
}

/// Restores the ring's pin mask when dropped.
///
/// Returned by [`pin`]; holds the mask state from before the push and the
/// state the push produced, so out-of-order pops are detectable.
#[must_use]
pub struct PinGuard {
    prior: u8,
    applied: u8,
    /// Pin guards never leave their ring's thread.
    _single_thread: PhantomData<*mut ()>,
}

impl Drop for PinGuard {
    fn drop(&mut self) {
        let _ = RING.try_with(|cell| {
            if let Some(ring) = cell.borrow_mut().as_mut() {
                debug_assert!(
                    ring.pin_flags == self.applied,
                    "pin scopes must unwind in reverse order"
                );
                ring.pin_pop(self.prior);
            }
        });
    }
}
