//! Slot-level primitives shared by the containers in this crate.
//!
//! A container's storage is an array of [`MaybeUninit<T>`] slots. The
//! functions in this module move individual elements between slots, end their
//! lifetimes in place, and shift runs of occupied slots up or down by one
//! position. Higher-level containers are responsible for tracking which slots
//! are occupied; every function here relies on that bookkeeping being correct,
//! hence most of them are `unsafe`.

use core::mem::MaybeUninit;
use core::ptr;

/// The largest capacity any container in this crate supports.
///
/// Limiting capacities to 127 guarantees that element counts fit in a
/// [`SizeType`] and that every index can also be represented as an `i8`.
pub const CAPACITY_LIMIT: usize = 127;

/// The integer type used to store element counts.
pub type SizeType = u8;

struct CapacityCheck<const N: usize>;

impl<const N: usize> CapacityCheck<N> {
    const VALID: () = {
        assert!(N > 0, "attempt to create a container with a capacity less than 1");
        assert!(
            N <= CAPACITY_LIMIT,
            "attempt to create a container with a capacity greater than 127"
        );
    };
}

/// Fails the build if `N` is not in `1..=CAPACITY_LIMIT`.
///
/// The check is evaluated when a function calling this is instantiated with a
/// concrete `N`, so every constructor must call it.
#[inline(always)]
pub(crate) const fn assert_capacity<const N: usize>() {
    #[allow(clippy::let_unit_value)]
    let () = CapacityCheck::<N>::VALID;
}

/// Returns an array of `N` vacant slots.
#[inline(always)]
pub(crate) const fn uninit_slots<T, const N: usize>() -> [MaybeUninit<T>; N] {
    // An array of `MaybeUninit` requires no initialization.
    unsafe { MaybeUninit::<[MaybeUninit<T>; N]>::uninit().assume_init() }
}

/// Moves the element in slot `src` into slot `dst`, leaving `src` vacant.
///
/// Any value previously in `dst` is overwritten without being dropped.
///
/// # Safety
/// `src` must be occupied, `dst` must be vacant (or its value already moved
/// out), and the two must be distinct, in-bounds positions.
#[inline]
pub(crate) unsafe fn relocate<T>(slots: &mut [MaybeUninit<T>], dst: usize, src: usize) {
    debug_assert!(dst < slots.len() && src < slots.len());
    debug_assert_ne!(dst, src);
    let base = slots.as_mut_ptr().cast::<T>();
    ptr::copy_nonoverlapping(base.add(src), base.add(dst), 1);
}

/// Drops the element in slot `index` in place, leaving the slot vacant.
///
/// # Safety
/// `index` must be in bounds and the slot must be occupied.
#[inline]
pub(crate) unsafe fn destroy<T>(slots: &mut [MaybeUninit<T>], index: usize) {
    debug_assert!(index < slots.len());
    slots.as_mut_ptr().add(index).cast::<T>().drop_in_place();
}

/// Moves the elements in `at..len` one slot up, leaving slot `at` vacant.
///
/// Elements are moved highest index first, so no element is overwritten
/// before it has been relocated.
///
/// # Safety
/// Slots `at..len` must be occupied, slot `len` must be vacant, and
/// `at <= len < slots.len()` must hold.
pub(crate) unsafe fn shift_up<T>(slots: &mut [MaybeUninit<T>], at: usize, len: usize) {
    debug_assert!(at <= len && len < slots.len());
    let mut i = len;
    while i > at {
        relocate(slots, i, i - 1);
        i -= 1;
    }
}

/// Moves the elements in `at + 1..len` one slot down, closing the gap at `at`
/// and leaving slot `len - 1` vacant.
///
/// Elements are moved lowest index first.
///
/// # Safety
/// Slot `at` must be vacant, slots `at + 1..len` must be occupied, and
/// `at < len <= slots.len()` must hold.
pub(crate) unsafe fn shift_down<T>(slots: &mut [MaybeUninit<T>], at: usize, len: usize) {
    debug_assert!(at < len && len <= slots.len());
    for i in at..len - 1 {
        relocate(slots, i, i + 1);
    }
}
