//! The arena allocator: a chain of blocks treated as one bump stack.
//!
//! An [`Arena`] grabs a block of memory from its parent allocator and
//! satisfies requests by advancing a cursor. When the current block runs
//! out, a new block is allocated and linked to the previous one; the chain
//! is walked backwards by [`Arena::pop_to`], the only operation that
//! reliably returns arena space to the parent.
//!
//! ```text
//! parent ◄── block ◄── block ◄── block (current)
//!            [hdr|█████████]     [hdr|████░░░░░]
//!                                     ▲ cursor (block_used)
//! ```
//!
//! The first [`BLOCK_HEADER`] bytes of every block hold its header and
//! count toward used space, so byte offsets handed to `pop_to` include
//! header overhead.

use std::mem;
use std::ptr::{self, NonNull};

use loam_core::{padding_to_align, Allocator, MemOp, OpKind, SharedAllocator, MAX_ALIGN};

/// Bytes at the front of every block occupied by its header.
pub const BLOCK_HEADER: u64 = mem::size_of::<BlockHeader>() as u64;

/// Header embedded at the start of each block.
///
/// `prev` links to the block that was current when this one was created,
/// forming a singly linked LIFO chain owned by the arena.
#[repr(C)]
struct BlockHeader {
    prev: Option<NonNull<BlockHeader>>,
    capacity: u64,
}

/// A chained-block bump allocator.
///
/// Allocation advances a cursor; space is reclaimed in bulk by
/// [`Arena::pop_to`] / [`Arena::pop_all`] (stack discipline). Individual
/// Free/Shrink requests reclaim only when they hit the exact live top of
/// the current block; anything else becomes slack until the next pop.
/// Repeated alloc/free cycles that never hit the top therefore hold
/// arena space until a pop covers them.
///
/// Invariant: [`Arena::total_used`] always equals [`Arena::block_used`]
/// plus the full capacities of all previous blocks; a superseded block is
/// never partially used.
///
/// Arenas are single-owner and single-thread (`!Send`); sharing across
/// threads requires an external lock, which this crate does not provide.
pub struct Arena {
    parent: SharedAllocator,
    /// Current block; chain head. `None` until the first allocation.
    block: Option<NonNull<BlockHeader>>,
    /// Bytes used in the current block, including its header.
    block_used: u64,
    /// `block_used` plus the capacities of all previous blocks.
    total_used: u64,
    min_block_size: u64,
}

impl Arena {
    /// Create an empty arena drawing blocks from `parent`.
    ///
    /// No block is allocated until the first request; `min_block_size` is
    /// the floor for every block the arena creates (a single oversized
    /// request gets a dedicated larger block).
    pub fn new(parent: SharedAllocator, min_block_size: u64) -> Self {
        Self {
            parent,
            block: None,
            block_used: 0,
            total_used: 0,
            min_block_size,
        }
    }

    /// Bytes used across all blocks, including headers and slack.
    ///
    /// This is the offset space for [`Arena::pop_to`]: capture it before
    /// a batch of allocations, pop back to it afterwards.
    pub fn total_used(&self) -> u64 {
        self.total_used
    }

    /// Bytes used in the current block, including its header.
    pub fn block_used(&self) -> u64 {
        self.block_used
    }

    /// The block-size floor this arena was created with.
    pub fn min_block_size(&self) -> u64 {
        self.min_block_size
    }

    /// Number of blocks currently in the chain.
    pub fn block_count(&self) -> usize {
        let mut count = 0;
        let mut cursor = self.block;
        while let Some(block) = cursor {
            count += 1;
            // SAFETY: every block in the chain is a live allocation with
            // an initialized header.
            cursor = unsafe { block.as_ref().prev };
        }
        count
    }

    /// Total capacity held from the parent, across all blocks.
    pub fn memory_bytes(&self) -> u64 {
        let mut bytes = 0;
        let mut cursor = self.block;
        while let Some(block) = cursor {
            // SAFETY: as in `block_count`.
            let header = unsafe { block.as_ref() };
            bytes += header.capacity;
            cursor = header.prev;
        }
        bytes
    }

    fn block_capacity(&self) -> u64 {
        match self.block {
            // SAFETY: the current block is live with an initialized header.
            Some(block) => unsafe { block.as_ref().capacity },
            None => 0,
        }
    }

    /// Whether the current block can hold `size` more bytes at `align`.
    fn fits(&self, size: u64, align: u64) -> bool {
        let Some(block) = self.block else {
            return false;
        };
        let pad = padding_to_align(block.as_ptr() as u64 + self.block_used, align);
        self.block_used
            .checked_add(pad)
            .and_then(|used| used.checked_add(size))
            .is_some_and(|needed| needed <= self.block_capacity())
    }

    /// Allocate a new block from the parent and make it current.
    ///
    /// The old current block keeps whatever slack it had: once superseded
    /// it is accounted at full capacity.
    fn push_block(&mut self, size: u64, align: u64) {
        let needed = BLOCK_HEADER
            .checked_add(size)
            .and_then(|n| n.checked_add(align))
            .expect("arena block size overflow");
        let block_size = self.min_block_size.max(needed);
        let raw = self.parent.borrow_mut().alloc(block_size, MAX_ALIGN);
        let header = raw.cast::<BlockHeader>();
        // SAFETY: the block is at least BLOCK_HEADER bytes and the parent
        // returned it MAX_ALIGN-aligned, so the header fits at its front.
        unsafe {
            header.as_ptr().write(BlockHeader {
                prev: self.block,
                capacity: block_size,
            });
        }
        if self.block.is_some() {
            self.total_used += self.block_capacity() - self.block_used;
        }
        self.block = Some(header);
        self.block_used = BLOCK_HEADER;
        self.total_used = self
            .total_used
            .checked_add(BLOCK_HEADER)
            .expect("arena byte counter overflow");
    }

    fn alloc_in(&mut self, size: u64, align: u64, zeroed: bool) -> NonNull<u8> {
        debug_assert!(size > 0, "zero-size allocation");
        debug_assert!(align.is_power_of_two(), "alignment must be a power of two");

        if !self.fits(size, align) {
            self.push_block(size, align);
            debug_assert!(self.fits(size, align));
        }
        let block = self.block.expect("arena has a current block after push");
        let pad = padding_to_align(block.as_ptr() as u64 + self.block_used, align);
        let offset = self.block_used + pad;
        // SAFETY: `fits` guaranteed offset + size <= capacity, so the
        // pointer stays inside the block allocation.
        let ptr = unsafe { NonNull::new_unchecked(block.as_ptr().cast::<u8>().add(offset as usize)) };
        self.block_used = offset + size;
        self.total_used = self
            .total_used
            .checked_add(pad + size)
            .expect("arena byte counter overflow");
        if zeroed {
            // SAFETY: the region was just carved out of the block.
            unsafe { ptr::write_bytes(ptr.as_ptr(), 0, size as usize) };
        }
        ptr
    }

    /// Whether `old .. old + old_size` is exactly the live top of the
    /// current block.
    fn is_top(&self, old: NonNull<u8>, old_size: u64) -> bool {
        let Some(block) = self.block else {
            return false;
        };
        let base = block.as_ptr() as u64;
        let addr = old.as_ptr() as u64;
        addr >= base + BLOCK_HEADER && addr + old_size == base + self.block_used
    }

    fn grow_in(
        &mut self,
        old_ptr: Option<NonNull<u8>>,
        old_size: u64,
        size: u64,
        align: u64,
        zeroed: bool,
    ) -> NonNull<u8> {
        let Some(old) = old_ptr else {
            // Grow from nothing is exactly an alloc.
            return self.alloc_in(size, align, zeroed);
        };
        debug_assert!(size >= old_size, "grow must not reduce the allocation");
        debug_assert!(size > 0, "zero-size grow");

        if self.is_top(old, old_size) {
            let delta = size - old_size;
            let in_place = self
                .block_used
                .checked_add(delta)
                .is_some_and(|needed| needed <= self.block_capacity());
            if in_place {
                self.block_used += delta;
                self.total_used += delta;
                if zeroed && delta > 0 {
                    // SAFETY: the tail bytes were just added to the live
                    // region.
                    unsafe {
                        ptr::write_bytes(old.as_ptr().add(old_size as usize), 0, delta as usize)
                    };
                }
                return old;
            }
        }

        // Relocate. The old region stays behind as slack until the next
        // pop that covers it.
        let fresh = self.alloc_in(size, align, false);
        // SAFETY: both regions are live; `alloc_in` never returns memory
        // overlapping an existing allocation.
        unsafe {
            ptr::copy_nonoverlapping(old.as_ptr(), fresh.as_ptr(), old_size as usize);
            if zeroed && size > old_size {
                ptr::write_bytes(
                    fresh.as_ptr().add(old_size as usize),
                    0,
                    (size - old_size) as usize,
                );
            }
        }
        fresh
    }

    fn shrink_in(
        &mut self,
        old_ptr: Option<NonNull<u8>>,
        old_size: u64,
        size: u64,
        align: u64,
    ) -> NonNull<u8> {
        let Some(old) = old_ptr else {
            debug_assert!(false, "shrink without an existing allocation");
            return self.alloc_in(size, align, false);
        };
        debug_assert!(size > 0, "zero-size shrink");
        debug_assert!(size <= old_size, "shrink must not enlarge the allocation");

        if self.is_top(old, old_size) {
            let delta = old_size - size;
            self.block_used -= delta;
            self.total_used -= delta;
        }
        // Off the top the pointer is unchanged and the excess is slack.
        old
    }

    fn free_in(&mut self, old_ptr: Option<NonNull<u8>>, old_size: u64) {
        let Some(old) = old_ptr else {
            return;
        };
        if self.is_top(old, old_size) {
            self.block_used -= old_size;
            self.total_used -= old_size;
        }
        // Off-top frees are a no-op: arenas reclaim in bulk via pop_to.
    }

    /// Pop the arena back to `new_total` used bytes.
    ///
    /// Walks the chain from the current block backwards, returning to the
    /// parent every block whose bytes lie entirely at or above the target
    /// offset; the block containing the target becomes current again with
    /// its cursor reset to the remainder. `new_total` must be a value
    /// previously observed from [`Arena::total_used`]: popping to an
    /// offset above the live top, or into a block header, is a contract
    /// violation caught by debug assertions.
    ///
    /// O(number of blocks freed).
    pub fn pop_to(&mut self, new_total: u64) {
        debug_assert!(
            new_total <= self.total_used,
            "pop target above the live top"
        );
        loop {
            let Some(block) = self.block else {
                debug_assert!(new_total == 0, "pop target inside freed blocks");
                self.block_used = 0;
                self.total_used = 0;
                return;
            };
            let sum_prev = self.total_used - self.block_used;
            if new_total > sum_prev {
                // Target lands inside the current block.
                debug_assert!(
                    new_total >= sum_prev + BLOCK_HEADER,
                    "pop target inside a block header"
                );
                self.block_used = new_total - sum_prev;
                self.total_used = new_total;
                return;
            }
            // Every byte of the current block sits at or above the target:
            // give the whole block back.
            // SAFETY: the current block is live with an initialized header.
            let (prev, capacity) = {
                let header = unsafe { block.as_ref() };
                (header.prev, header.capacity)
            };
            // SAFETY: the block is a live parent allocation of `capacity`
            // bytes, allocated at MAX_ALIGN in `push_block`.
            unsafe { self.parent.borrow_mut().free(block.cast(), capacity) };
            self.block = prev;
            self.total_used = sum_prev;
            self.block_used = match prev {
                // A superseded block is always accounted at full capacity.
                Some(prev) => unsafe { prev.as_ref().capacity },
                None => 0,
            };
        }
    }

    /// Free every block back to the parent and reset to empty.
    pub fn pop_all(&mut self) {
        self.pop_to(0);
    }
}

impl Allocator for Arena {
    unsafe fn dispatch(&mut self, op: MemOp) -> Option<NonNull<u8>> {
        let align = op.effective_align();
        match op.kind {
            OpKind::Alloc => Some(self.alloc_in(op.size, align, op.zeroed)),
            OpKind::Grow => Some(self.grow_in(op.old_ptr, op.old_size, op.size, align, op.zeroed)),
            OpKind::Shrink => Some(self.shrink_in(op.old_ptr, op.old_size, op.size, align)),
            OpKind::Free => {
                self.free_in(op.old_ptr, op.old_size);
                None
            }
        }
    }
}

impl Drop for Arena {
    fn drop(&mut self) {
        self.pop_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::general::GeneralAllocator;
    use loam_core::shared;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Parent wrapper that tracks outstanding bytes, for leak checks.
    struct CountingParent {
        inner: GeneralAllocator,
        live: Rc<Cell<i64>>,
    }

    impl Allocator for CountingParent {
        unsafe fn dispatch(&mut self, op: MemOp) -> Option<NonNull<u8>> {
            match op.kind {
                OpKind::Alloc => self.live.set(self.live.get() + op.size as i64),
                OpKind::Free => self.live.set(self.live.get() - op.old_size as i64),
                OpKind::Grow | OpKind::Shrink => {
                    self.live
                        .set(self.live.get() + op.size as i64 - op.old_size as i64);
                }
            }
            unsafe { self.inner.dispatch(op) }
        }
    }

    fn counting_arena(min_block_size: u64) -> (Arena, Rc<Cell<i64>>) {
        let live = Rc::new(Cell::new(0));
        let parent = shared(CountingParent {
            inner: GeneralAllocator::new(),
            live: Rc::clone(&live),
        });
        (Arena::new(parent, min_block_size), live)
    }

    fn arena(min_block_size: u64) -> Arena {
        Arena::new(GeneralAllocator::shared(), min_block_size)
    }

    fn write_pattern(ptr: NonNull<u8>, len: usize) {
        for i in 0..len {
            // SAFETY: the test owns a live region of at least `len` bytes.
            unsafe { ptr.as_ptr().add(i).write((i % 251) as u8) };
        }
    }

    fn check_pattern(ptr: NonNull<u8>, len: usize) {
        for i in 0..len {
            // SAFETY: as above.
            let v = unsafe { ptr.as_ptr().add(i).read() };
            assert_eq!(v, (i % 251) as u8, "byte {i} corrupted");
        }
    }

    #[test]
    fn fresh_arena_is_empty() {
        let a = arena(4096);
        assert_eq!(a.total_used(), 0);
        assert_eq!(a.block_count(), 0);
        assert_eq!(a.memory_bytes(), 0);
    }

    #[test]
    fn first_alloc_counts_header_overhead() {
        let mut a = arena(4096);
        a.alloc(100, 0);
        assert_eq!(a.total_used(), BLOCK_HEADER + 100);
        assert_eq!(a.block_count(), 1);
    }

    #[test]
    fn sequential_allocs_are_disjoint_and_ordered() {
        let mut a = arena(4096);
        let p = a.alloc(100, 1);
        let q = a.alloc(200, 1);
        assert_eq!(q.as_ptr() as usize - p.as_ptr() as usize, 100);
        assert_eq!(a.total_used(), BLOCK_HEADER + 300);
    }

    #[test]
    fn alloc_honors_alignment() {
        let mut a = arena(4096);
        a.alloc(3, 1);
        let p = a.alloc(64, 64);
        assert_eq!(p.as_ptr() as usize % 64, 0);
    }

    #[test]
    fn zeroed_alloc_is_zero_filled() {
        let mut a = arena(4096);
        let p = a.alloc(64, 0);
        write_pattern(p, 64);
        a.pop_all();
        // Blocks come back from the heap dirty; the fill must be explicit.
        let q = a.alloc_zeroed(64, 0);
        for i in 0..64 {
            assert_eq!(unsafe { q.as_ptr().add(i).read() }, 0);
        }
    }

    #[test]
    fn oversized_request_gets_dedicated_block() {
        let mut a = arena(4096);
        a.alloc(5000, 0);
        assert_eq!(a.block_count(), 1);
        assert!(a.memory_bytes() >= 5000 + BLOCK_HEADER);
        // Block base is MAX_ALIGN-aligned and the header is one alignment
        // unit, so the default-aligned payload needs no padding.
        assert_eq!(a.total_used(), 5000 + BLOCK_HEADER);
    }

    #[test]
    fn exhausted_block_chains_a_new_one() {
        let mut a = arena(256);
        a.alloc(200, 1);
        assert_eq!(a.block_count(), 1);
        a.alloc(200, 1);
        assert_eq!(a.block_count(), 2);
        // The superseded block (capacity 256: the min floor held) is
        // charged in full; the current block carries header + 200.
        assert_eq!(a.block_used(), BLOCK_HEADER + 200);
        assert_eq!(a.total_used(), 256 + BLOCK_HEADER + 200);
    }

    #[test]
    fn pop_to_restores_cursor_and_reuses_bytes() {
        let mut a = arena(4096);
        a.alloc(100, 1);
        let mark = a.total_used();
        let p2 = a.alloc(200, 1);
        a.alloc(300, 1);
        a.pop_to(mark);
        assert_eq!(a.total_used(), mark);
        // The next allocation lands exactly where the popped one did.
        let q = a.alloc(200, 1);
        assert_eq!(q.as_ptr(), p2.as_ptr());
    }

    #[test]
    fn pop_to_frees_whole_blocks() {
        let mut a = arena(64);
        a.alloc(40, 1);
        let mark = a.total_used();
        a.alloc(40, 1);
        a.alloc(40, 1);
        assert_eq!(a.block_count(), 3);
        a.pop_to(mark);
        assert_eq!(a.block_count(), 1);
        assert_eq!(a.total_used(), mark);
    }

    #[test]
    fn pop_to_block_boundary_frees_the_block_above() {
        let mut a = arena(64);
        a.alloc(40, 1);
        a.alloc(40, 1);
        assert_eq!(a.block_count(), 2);
        // Popping to exactly the first block's capacity drops the second
        // block; the first counts as fully used.
        let first_capacity = a.total_used() - a.block_used();
        a.pop_to(first_capacity);
        assert_eq!(a.block_count(), 1);
        assert_eq!(a.total_used(), first_capacity);
        assert_eq!(a.block_used(), first_capacity);
    }

    #[test]
    fn pop_all_returns_every_block() {
        let (mut a, live) = counting_arena(64);
        a.alloc(40, 1);
        a.alloc(40, 1);
        a.alloc(40, 1);
        assert!(live.get() > 0);
        a.pop_all();
        assert_eq!(live.get(), 0);
        assert_eq!(a.total_used(), 0);
        assert_eq!(a.block_count(), 0);
        // The arena stays usable after a full pop.
        a.alloc(16, 1);
        assert_eq!(a.block_count(), 1);
    }

    #[test]
    fn drop_returns_every_block() {
        let (mut a, live) = counting_arena(256);
        a.alloc(100, 1);
        a.alloc(500, 1);
        assert!(live.get() > 0);
        drop(a);
        assert_eq!(live.get(), 0);
    }

    #[test]
    fn grow_at_top_extends_in_place() {
        let mut a = arena(4096);
        let p = a.alloc(100, 0);
        let before = a.total_used();
        let q = unsafe { a.grow(Some(p), 100, 150, 0) };
        assert_eq!(q.as_ptr(), p.as_ptr());
        assert_eq!(a.total_used(), before + 50);
    }

    #[test]
    fn grow_off_top_relocates_and_preserves_content() {
        let mut a = arena(4096);
        let p = a.alloc(64, 0);
        write_pattern(p, 64);
        a.alloc(16, 0); // push p off the top
        let q = unsafe { a.grow(Some(p), 64, 128, 0) };
        assert_ne!(q.as_ptr(), p.as_ptr());
        check_pattern(q, 64);
    }

    #[test]
    fn grow_at_top_without_room_relocates() {
        let mut a = arena(128);
        let p = a.alloc(64, 0);
        write_pattern(p, 64);
        let q = unsafe { a.grow(Some(p), 64, 4096, 0) };
        assert_ne!(q.as_ptr(), p.as_ptr());
        check_pattern(q, 64);
        assert_eq!(a.block_count(), 2);
    }

    #[test]
    fn grow_from_null_behaves_like_alloc() {
        let mut a = arena(4096);
        let mut b = arena(4096);
        let p = unsafe { a.grow(None, 0, 64, 0) };
        let q = b.alloc(64, 0);
        assert_eq!(a.total_used(), b.total_used());
        assert_eq!(
            p.as_ptr() as usize % MAX_ALIGN as usize,
            q.as_ptr() as usize % MAX_ALIGN as usize
        );
        // Zero-fill carries through the null-grow path.
        let z = unsafe {
            a.dispatch(MemOp {
                zeroed: true,
                ..MemOp::grow(None, 0, 64, 0)
            })
        }
        .unwrap();
        for i in 0..64 {
            assert_eq!(unsafe { z.as_ptr().add(i).read() }, 0);
        }
    }

    #[test]
    fn grow_zeroed_fills_the_new_tail_in_place() {
        let mut a = arena(4096);
        let p = a.alloc(16, 0);
        write_pattern(p, 16);
        let q = unsafe {
            a.dispatch(MemOp {
                zeroed: true,
                ..MemOp::grow(Some(p), 16, 64, 0)
            })
        }
        .unwrap();
        assert_eq!(q.as_ptr(), p.as_ptr());
        check_pattern(q, 16);
        for i in 16..64 {
            assert_eq!(unsafe { q.as_ptr().add(i).read() }, 0);
        }
    }

    #[test]
    fn shrink_at_top_returns_bytes() {
        let mut a = arena(4096);
        let p = a.alloc(100, 0);
        let before = a.total_used();
        let q = unsafe { a.shrink(Some(p), 100, 40, 0) };
        assert_eq!(q.as_ptr(), p.as_ptr());
        assert_eq!(a.total_used(), before - 60);
        // The reclaimed tail is immediately reusable.
        let r = a.alloc(60, 1);
        assert_eq!(r.as_ptr() as usize, p.as_ptr() as usize + 40);
    }

    #[test]
    fn shrink_off_top_leaves_slack() {
        let mut a = arena(4096);
        let p = a.alloc(100, 0);
        a.alloc(16, 0);
        let before = a.total_used();
        let q = unsafe { a.shrink(Some(p), 100, 40, 0) };
        assert_eq!(q.as_ptr(), p.as_ptr());
        assert_eq!(a.total_used(), before);
    }

    #[test]
    fn free_at_top_reclaims() {
        let mut a = arena(4096);
        let mark = {
            a.alloc(32, 0);
            a.total_used()
        };
        let p = a.alloc(64, 0);
        unsafe { a.free(p, 64) };
        assert_eq!(a.total_used(), mark);
        // Freed top bytes are reused by the next allocation.
        let q = a.alloc(64, 0);
        assert_eq!(q.as_ptr(), p.as_ptr());
    }

    #[test]
    fn free_off_top_is_a_no_op() {
        let mut a = arena(4096);
        let p = a.alloc(64, 0);
        a.alloc(16, 0);
        let before = a.total_used();
        unsafe { a.free(p, 64) };
        assert_eq!(a.total_used(), before);
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn accounting_matches_a_single_block_model(
                sizes in proptest::collection::vec(1u64..200, 1..20),
            ) {
                // One block large enough for everything, byte alignment:
                // no padding, so the total is exactly header + Σ sizes.
                let mut a = arena(64 * 1024);
                let mut expected = 0;
                for &size in &sizes {
                    a.alloc(size, 1);
                    expected += size;
                }
                prop_assert_eq!(a.total_used(), BLOCK_HEADER + expected);
                prop_assert_eq!(a.block_count(), 1);
            }

            #[test]
            fn pop_to_any_recorded_mark_restores_it(
                sizes in proptest::collection::vec(1u64..200, 2..20),
                pick in any::<proptest::sample::Index>(),
            ) {
                let mut a = arena(64 * 1024);
                let mut marks = vec![a.total_used()];
                for &size in &sizes {
                    a.alloc(size, 1);
                    marks.push(a.total_used());
                }
                let mark = marks[pick.index(marks.len())];
                a.pop_to(mark);
                prop_assert_eq!(a.total_used(), mark);
            }

            #[test]
            fn returned_pointers_are_aligned(
                requests in proptest::collection::vec((1u64..100, 0u32..7), 1..20),
            ) {
                let mut a = arena(4096);
                for &(size, shift) in &requests {
                    let align = 1u64 << shift;
                    let p = a.alloc(size, align);
                    prop_assert_eq!(p.as_ptr() as usize % align as usize, 0);
                }
            }

            #[test]
            fn alloc_only_grows_the_total(
                sizes in proptest::collection::vec(1u64..300, 1..30),
            ) {
                let mut a = arena(128);
                let mut last = 0;
                for &size in &sizes {
                    a.alloc(size, 1);
                    prop_assert!(a.total_used() > last);
                    last = a.total_used();
                }
            }
        }
    }
}
