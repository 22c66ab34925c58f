//! A fixed-size array wrapper sharing the query surface of [`Deque`](crate::Deque).

use crate::storage;

use core::ops::{Deref, DerefMut, Index, IndexMut};

/// An array of exactly `N` elements.
///
/// Every slot of an `Array` is always occupied, so it is never empty and
/// always full. `N` must be in `1..=127`, like for [`Deque`](crate::Deque);
/// see [`EmptyArray`](crate::EmptyArray) for the zero-element case.
///
/// # Examples
/// ```
/// let mut levels = coffer::Array::from([3u8, 1, 4, 1, 5]);
/// assert!(levels.is_full());
/// assert_eq!(levels.count(), 5);
/// assert_eq!(levels.index_of_last(&1), Some(3));
///
/// levels.fill(0);
/// assert_eq!(levels.as_slice(), &[0, 0, 0, 0, 0]);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Array<T, const N: usize> {
    items: [T; N],
}

impl<T, const N: usize> Array<T, N> {
    /// The number of elements in an array of this type.
    pub const CAPACITY: usize = N;

    /// Wraps `items`.
    #[inline]
    pub const fn new(items: [T; N]) -> Self {
        storage::assert_capacity::<N>();
        Array { items }
    }

    /// Unwraps the underlying array.
    #[inline]
    pub fn into_inner(self) -> [T; N] {
        self.items
    }

    /// Always returns `false`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Always returns `true`.
    #[inline]
    pub const fn is_full(&self) -> bool {
        true
    }

    /// Returns `N`.
    #[inline]
    pub const fn count(&self) -> usize {
        N
    }

    /// Returns `N`.
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// Returns `N`.
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns a raw pointer to the first element.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.items.as_ptr()
    }

    /// Returns an unsafe mutable pointer to the first element.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.items.as_mut_ptr()
    }

    /// Extracts a slice containing the entire array.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Extracts a mutable slice of the entire array.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }

    /// Returns a reference to the element at position `index` without
    /// bounds checking.
    ///
    /// # Safety
    /// `index` must be less than `N`.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < N);
        self.items.get_unchecked(index)
    }

    /// Returns a mutable reference to the element at position `index`
    /// without bounds checking.
    ///
    /// # Safety
    /// `index` must be less than `N`.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < N);
        self.items.get_unchecked_mut(index)
    }

    /// Returns a reference to the first element.
    #[inline]
    pub fn first(&self) -> &T {
        &self.items[0]
    }

    /// Returns a mutable reference to the first element.
    #[inline]
    pub fn first_mut(&mut self) -> &mut T {
        &mut self.items[0]
    }

    /// Returns a reference to the last element.
    #[inline]
    pub fn last(&self) -> &T {
        &self.items[N - 1]
    }

    /// Returns a mutable reference to the last element.
    #[inline]
    pub fn last_mut(&mut self) -> &mut T {
        &mut self.items[N - 1]
    }

    /// Overwrites every element with a clone of `value`.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.items.fill(value);
    }

    /// Returns `true` if the array contains an element equal to `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.items.contains(value)
    }

    /// Returns the position of the first element equal to `value`, or
    /// [`None`] if there is no such element.
    pub fn index_of_first(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.items.iter().position(|x| x == value)
    }

    /// Returns the position of the last element equal to `value`, or
    /// [`None`] if there is no such element.
    pub fn index_of_last(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.items.iter().rposition(|x| x == value)
    }

    /// Swaps two elements.
    ///
    /// # Panics
    /// Panics if either index is not below `N`.
    #[inline]
    #[track_caller]
    pub fn swap(&mut self, fst: usize, snd: usize) {
        self.items.swap(fst, snd);
    }
}

impl<T: Default, const N: usize> Default for Array<T, N> {
    fn default() -> Self {
        Self::new(core::array::from_fn(|_| T::default()))
    }
}

impl<T, const N: usize> From<[T; N]> for Array<T, N> {
    fn from(items: [T; N]) -> Self {
        Self::new(items)
    }
}

impl<T, const N: usize> Deref for Array<T, N> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<T, const N: usize> DerefMut for Array<T, N> {
    fn deref_mut(&mut self) -> &mut [T] {
        &mut self.items
    }
}

impl<T, const N: usize> AsRef<[T]> for Array<T, N> {
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}

impl<T, const N: usize> AsMut<[T]> for Array<T, N> {
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.items
    }
}

impl<T, const N: usize> Index<usize> for Array<T, N> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Array<T, N> {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.items[index]
    }
}
