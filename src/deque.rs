//! A contiguous double-ended sequence with constant capacity.
//!
//! [`Deque<T, N>`](Deque) stores up to `N` elements inline, always packed at
//! the start of its storage with no gaps. Appending to the back is O(1);
//! everything that has to make room at, or close a gap in, the front or middle
//! (prepending, removing the first element, inserting and removing at an
//! arbitrary position) shifts the elements behind that position by one slot
//! and is therefore O(n).
//!
//! Because the capacity is constant, operations that grow the deque may fail.
//! The boolean methods ([`append`](Deque::append), [`prepend`](Deque::prepend),
//! [`insert`](Deque::insert)) simply report failure and drop the rejected
//! value; the checked versions ([`try_append`](Deque::try_append),
//! [`try_prepend`](Deque::try_prepend), [`try_insert`](Deque::try_insert))
//! hand it back instead. No operation ever partially modifies the deque.
//!
//! Element access comes in three tiers: [`get`](Deque::get) and friends
//! return an [`Option`], indexing panics on out-of-range indices, and
//! [`get_unchecked`](Deque::get_unchecked) performs no bounds check at all.

use crate::storage::{self, SizeType};
use crate::{CapacityError, InsertError};

use core::fmt::{self, Debug, Formatter};
use core::hash::{Hash, Hasher};
use core::mem::MaybeUninit;
use core::ops::{Deref, DerefMut, Index, IndexMut};
use core::ptr;
use core::slice;

/// A contiguous double-ended sequence holding at most `N` elements.
///
/// `N` must be in `1..=127`; other capacities fail to compile. See
/// [`EmptyDeque`](crate::EmptyDeque) for the zero-capacity case.
///
/// See the [module-level documentation](crate::deque) for more.
///
/// # Examples
/// ```
/// let mut deque = coffer::Deque::<i32, 4>::new();
/// assert!(deque.append(1));
/// assert!(deque.append(2));
/// assert!(deque.prepend(0));
/// assert_eq!(deque, [0, 1, 2]);
///
/// assert!(deque.insert(1, 9));
/// assert_eq!(deque, [0, 9, 1, 2]);
/// assert!(deque.is_full());
/// assert!(!deque.append(5));
///
/// assert!(deque.remove_at(0));
/// assert_eq!(deque, [9, 1, 2]);
/// ```
pub struct Deque<T, const N: usize> {
    len: SizeType,
    slots: [MaybeUninit<T>; N],
}

#[cold]
#[inline(never)]
#[track_caller]
fn index_out_of_bounds(index: usize, len: usize) -> ! {
    panic!("index (is {}) should be < count (is {})", index, len)
}

impl<T, const N: usize> Deque<T, N> {
    /// The number of elements a deque of this type can hold.
    pub const CAPACITY: usize = N;

    /// Constructs a new, empty deque.
    ///
    /// # Examples
    /// ```
    /// static EVENTS: coffer::Deque<u16, 8> = coffer::Deque::new();
    /// assert!(EVENTS.is_empty());
    /// assert_eq!(EVENTS.capacity(), 8);
    /// ```
    #[inline]
    pub const fn new() -> Self {
        storage::assert_capacity::<N>();
        Deque {
            len: 0,
            slots: storage::uninit_slots(),
        }
    }

    /// Creates a deque holding clones of the elements of `source`, or
    /// [`CapacityError`] if there are more than `N` of them.
    ///
    /// # Examples
    /// ```
    /// let deque = coffer::Deque::<char, 3>::try_from_slice(&['a', 'b']).unwrap();
    /// assert_eq!(deque, ['a', 'b']);
    /// assert!(coffer::Deque::<char, 1>::try_from_slice(&['a', 'b']).is_err());
    /// ```
    pub fn try_from_slice(source: &[T]) -> crate::Result<Self>
    where
        T: Clone,
    {
        if source.len() > N {
            trace_rejected!("slice of {} elements exceeds capacity {}", source.len(), N);
            return Err(CapacityError::new());
        }

        let mut ret = Self::new();
        for (slot, item) in ret.slots.iter_mut().zip(source) {
            slot.write(item.clone());
            ret.len += 1;
        }
        Ok(ret)
    }

    /// Returns the number of elements the deque can hold.
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns the number of elements in the deque.
    #[inline]
    pub const fn count(&self) -> usize {
        self.len as usize
    }

    /// Returns the number of elements in the deque.
    ///
    /// Equivalent to [`count`](Deque::count).
    #[inline]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    fn set_len(&mut self, new_len: usize) {
        debug_assert!(new_len <= N);
        self.len = new_len as SizeType;
    }

    /// Returns `true` if the deque contains no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if the deque contains `N` elements.
    #[inline]
    pub const fn is_full(&self) -> bool {
        self.len as usize == N
    }

    /// Returns a raw pointer to the deque's storage.
    ///
    /// The first [`count`](Deque::count) elements behind the pointer are
    /// initialized; the contents of the remaining slots are unspecified.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.slots.as_ptr().cast()
    }

    /// Returns an unsafe mutable pointer to the deque's storage.
    ///
    /// The first [`count`](Deque::count) elements behind the pointer are
    /// initialized; the contents of the remaining slots are unspecified.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.slots.as_mut_ptr().cast()
    }

    /// Extracts a slice containing the entire deque.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.as_ptr(), self.count()) }
    }

    /// Extracts a mutable slice of the entire deque.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let len = self.count();
        unsafe { slice::from_raw_parts_mut(self.as_mut_ptr(), len) }
    }

    /// Returns a reference to the element at position `index`, or [`None`]
    /// if `index` is not below [`count`](Deque::count).
    ///
    /// # Examples
    /// ```
    /// let deque = coffer::Deque::<u8, 4>::try_from_slice(&[1, 2, 3]).unwrap();
    /// assert_eq!(deque.get(1), Some(&2));
    /// assert_eq!(deque.get(3), None);
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.count() {
            return None;
        }

        Some(unsafe { self.get_unchecked(index) })
    }

    /// Returns a mutable reference to the element at position `index`, or
    /// [`None`] if `index` is not below [`count`](Deque::count).
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.count() {
            return None;
        }

        Some(unsafe { self.get_unchecked_mut(index) })
    }

    /// Returns a reference to the element at position `index` without
    /// bounds checking.
    ///
    /// # Safety
    /// `index` must be less than [`count`](Deque::count). Calling this with an
    /// out-of-range index is undefined behavior, even if the result is unused.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.count());
        &*self.as_ptr().add(index)
    }

    /// Returns a mutable reference to the element at position `index`
    /// without bounds checking.
    ///
    /// # Safety
    /// `index` must be less than [`count`](Deque::count).
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.count());
        &mut *self.as_mut_ptr().add(index)
    }

    /// Returns a reference to the front element, or [`None`] if the deque is empty.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.get(0)
    }

    /// Returns a mutable reference to the front element, or [`None`] if the
    /// deque is empty.
    #[inline]
    pub fn first_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    /// Returns a reference to the back element, or [`None`] if the deque is empty.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        let index = self.count().checked_sub(1)?;
        self.get(index)
    }

    /// Returns a mutable reference to the back element, or [`None`] if the
    /// deque is empty.
    #[inline]
    pub fn last_mut(&mut self) -> Option<&mut T> {
        let index = self.count().checked_sub(1)?;
        self.get_mut(index)
    }

    /// Returns a reference to the front element without checking that the
    /// deque is non-empty.
    ///
    /// # Safety
    /// The deque must not be empty.
    #[inline]
    pub unsafe fn first_unchecked(&self) -> &T {
        self.get_unchecked(0)
    }

    /// Returns a reference to the back element without checking that the
    /// deque is non-empty.
    ///
    /// # Safety
    /// The deque must not be empty.
    #[inline]
    pub unsafe fn last_unchecked(&self) -> &T {
        self.get_unchecked(self.count().wrapping_sub(1))
    }

    /// Clears the deque, dropping all values.
    pub fn clear(&mut self) {
        let len = self.count();
        self.len = 0;
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.as_mut_ptr(), len));
        }
    }

    /// Overwrites every element currently in the deque with a clone of
    /// `value`. Vacant slots are left untouched, so the count is unchanged.
    ///
    /// # Examples
    /// ```
    /// let mut deque = coffer::Deque::<u8, 4>::try_from_slice(&[1, 2]).unwrap();
    /// deque.fill(7);
    /// assert_eq!(deque, [7, 7]);
    /// ```
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.as_mut_slice().fill(value);
    }

    /// Returns `true` if the deque contains an element equal to `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().contains(value)
    }

    /// Returns the position of the first element equal to `value`, or
    /// [`None`] if there is no such element.
    pub fn index_of_first(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.as_slice().iter().position(|x| x == value)
    }

    /// Returns the position of the last element equal to `value`, or
    /// [`None`] if there is no such element.
    ///
    /// # Examples
    /// ```
    /// let deque = coffer::Deque::<u8, 4>::try_from_slice(&[5, 1, 5, 2]).unwrap();
    /// assert_eq!(deque.index_of_last(&5), Some(2));
    /// assert_eq!(deque.index_of_last(&1), Some(1));
    /// assert_eq!(deque.index_of_last(&9), None);
    /// ```
    pub fn index_of_last(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.as_slice().iter().rposition(|x| x == value)
    }

    /// Appends an element to the back of the deque, returning `Err(value)` if
    /// it is already full.
    ///
    /// # Examples
    /// ```
    /// let mut deque = coffer::Deque::<u8, 2>::new();
    /// assert_eq!(deque.try_append(1), Ok(()));
    /// assert_eq!(deque.try_append(2), Ok(()));
    /// assert_eq!(deque.try_append(3), Err(3));
    /// ```
    #[inline]
    pub fn try_append(&mut self, value: T) -> Result<(), T> {
        if self.is_full() {
            trace_rejected!("append rejected: deque is full (capacity {})", N);
            return Err(value);
        }

        let len = self.count();
        self.slots[len].write(value);
        self.set_len(len + 1);
        Ok(())
    }

    /// Appends an element to the back of the deque.
    ///
    /// Returns `false` and drops `value` if the deque is already full. See
    /// [`try_append`](Deque::try_append) for a version that returns the value.
    #[inline]
    pub fn append(&mut self, value: T) -> bool {
        self.try_append(value).is_ok()
    }

    /// Prepends an element to the front of the deque, shifting all other
    /// elements back by one position. Returns `Err(value)` if the deque is
    /// already full.
    ///
    /// This is O(n) in the number of elements.
    pub fn try_prepend(&mut self, value: T) -> Result<(), T> {
        if self.is_full() {
            trace_rejected!("prepend rejected: deque is full (capacity {})", N);
            return Err(value);
        }

        let len = self.count();
        unsafe {
            storage::shift_up(&mut self.slots, 0, len);
        }
        self.slots[0].write(value);
        self.set_len(len + 1);
        Ok(())
    }

    /// Prepends an element to the front of the deque, shifting all other
    /// elements back by one position.
    ///
    /// Returns `false` and drops `value` if the deque is already full.
    pub fn prepend(&mut self, value: T) -> bool {
        self.try_prepend(value).is_ok()
    }

    /// Drops the back element. Does nothing if the deque is empty.
    #[inline]
    pub fn unappend(&mut self) {
        if let Some(len) = self.count().checked_sub(1) {
            self.set_len(len);
            unsafe {
                storage::destroy(&mut self.slots, len);
            }
        }
    }

    /// Drops the front element, shifting all other elements forward by one
    /// position. Does nothing if the deque is empty.
    pub fn unprepend(&mut self) {
        drop(self.pop_front());
    }

    /// Removes the back element and returns it, or [`None`] if the deque is empty.
    #[inline]
    pub fn pop_back(&mut self) -> Option<T> {
        let len = self.count().checked_sub(1)?;
        self.set_len(len);
        Some(unsafe { self.slots[len].assume_init_read() })
    }

    /// Removes the front element and returns it, or [`None`] if the deque is
    /// empty. All other elements are shifted forward by one position.
    ///
    /// # Examples
    /// ```
    /// let mut deque = coffer::Deque::<u8, 4>::try_from_slice(&[1, 2, 3]).unwrap();
    /// assert_eq!(deque.pop_front(), Some(1));
    /// assert_eq!(deque, [2, 3]);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        self.take_at(0)
    }

    /// Removes the element at position `index` and returns it, shifting all
    /// elements after it forward by one position. Returns [`None`] if `index`
    /// is not below [`count`](Deque::count).
    pub fn take_at(&mut self, index: usize) -> Option<T> {
        let len = self.count();
        if index >= len {
            trace_rejected!("removal index {} out of range (count {})", index, len);
            return None;
        }

        unsafe {
            let removed = self.slots[index].assume_init_read();
            storage::shift_down(&mut self.slots, index, len);
            self.set_len(len - 1);
            Some(removed)
        }
    }

    /// Removes and drops the element at position `index`, shifting all
    /// elements after it forward by one position.
    ///
    /// Returns `false` if `index` is not below [`count`](Deque::count).
    pub fn remove_at(&mut self, index: usize) -> bool {
        self.take_at(index).is_some()
    }

    /// Removes the first element equal to `value`, searching from the front.
    ///
    /// Returns `false` if there is no such element.
    ///
    /// # Examples
    /// ```
    /// let mut deque = coffer::Deque::<u8, 5>::try_from_slice(&[1, 2, 1, 3]).unwrap();
    /// assert!(deque.remove_first(&1));
    /// assert_eq!(deque, [2, 1, 3]);
    /// assert!(!deque.remove_first(&7));
    /// ```
    pub fn remove_first(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        match self.index_of_first(value) {
            Some(index) => self.remove_at(index),
            None => false,
        }
    }

    /// Removes the last element equal to `value`, searching from the back.
    ///
    /// Returns `false` if there is no such element.
    ///
    /// # Examples
    /// ```
    /// let mut deque = coffer::Deque::<u8, 5>::try_from_slice(&[1, 2, 1, 3]).unwrap();
    /// assert!(deque.remove_last(&1));
    /// assert_eq!(deque, [1, 2, 3]);
    /// ```
    pub fn remove_last(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        match self.index_of_last(value) {
            Some(index) => self.remove_at(index),
            None => false,
        }
    }

    /// Inserts an element at position `index`, shifting the element
    /// previously there and all elements after it back by one position.
    ///
    /// Insertion is only possible *within* the occupied range, so `index`
    /// must be less than [`count`](Deque::count); use
    /// [`try_append`](Deque::try_append) to add to the back. Returns the
    /// value inside an [`InsertError`] describing the reason if `index` is out
    /// of range or the deque is already full.
    ///
    /// # Examples
    /// ```
    /// use coffer::{Deque, ErrorKind};
    ///
    /// let mut deque = Deque::<u8, 3>::try_from_slice(&[1, 3]).unwrap();
    /// assert!(deque.try_insert(1, 2).is_ok());
    /// assert_eq!(deque, [1, 2, 3]);
    ///
    /// assert_eq!(deque.try_insert(0, 0).unwrap_err().kind(), ErrorKind::CapacityExceeded);
    /// deque.unappend();
    /// assert_eq!(deque.try_insert(2, 0).unwrap_err().kind(), ErrorKind::OutOfRange);
    /// ```
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), InsertError<T>> {
        let len = self.count();
        if index >= len {
            trace_rejected!("insertion index {} out of range (count {})", index, len);
            return Err(InsertError::OutOfRange(value));
        }

        if self.is_full() {
            trace_rejected!("insert rejected: deque is full (capacity {})", N);
            return Err(InsertError::CapacityExceeded(value));
        }

        unsafe {
            storage::shift_up(&mut self.slots, index, len);
        }
        self.slots[index].write(value);
        self.set_len(len + 1);
        Ok(())
    }

    /// Inserts an element at position `index`, shifting the element
    /// previously there and all elements after it back by one position.
    ///
    /// Returns `false` and drops `value` if `index` is not below
    /// [`count`](Deque::count) or the deque is already full.
    pub fn insert(&mut self, index: usize, value: T) -> bool {
        self.try_insert(index, value).is_ok()
    }

    /// Swaps two elements in the deque.
    ///
    /// # Panics
    /// Panics if either argument is not below [`count`](Deque::count).
    #[inline]
    #[track_caller]
    pub fn swap(&mut self, fst: usize, snd: usize) {
        let len = self.count();
        if fst >= len {
            index_out_of_bounds(fst, len);
        }
        if snd >= len {
            index_out_of_bounds(snd, len);
        }

        self.as_mut_slice().swap(fst, snd);
    }
}

impl<T, const N: usize> Default for Deque<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, const N: usize> Clone for Deque<T, N> {
    fn clone(&self) -> Self {
        let mut ret = Self::new();
        ret.clone_from(self);
        ret
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        for (slot, item) in self.slots.iter_mut().zip(source.as_slice()) {
            slot.write(item.clone());
            self.len += 1;
        }
    }
}

impl<T, const N: usize> Drop for Deque<T, N> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T, const N: usize> Deref for Deque<T, N> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, const N: usize> DerefMut for Deque<T, N> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, const N: usize> AsRef<[T]> for Deque<T, N> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, const N: usize> AsMut<[T]> for Deque<T, N> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, const N: usize> Index<usize> for Deque<T, N> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Some(item) => item,
            None => index_out_of_bounds(index, self.count()),
        }
    }
}

impl<T, const N: usize> IndexMut<usize> for Deque<T, N> {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.count();
        match self.get_mut(index) {
            Some(item) => item,
            None => index_out_of_bounds(index, len),
        }
    }
}

impl<T: Debug, const N: usize> Debug for Deque<T, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: Hash, const N: usize> Hash for Deque<T, N> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        Hash::hash(self.as_slice(), state);
    }
}

impl<A, B, const N: usize, const M: usize> PartialEq<Deque<B, M>> for Deque<A, N>
where
    A: PartialEq<B>,
{
    #[inline]
    fn eq(&self, other: &Deque<B, M>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, const N: usize> Eq for Deque<T, N> {}

impl<A, B, const N: usize> PartialEq<[B]> for Deque<A, N>
where
    A: PartialEq<B>,
{
    #[inline]
    fn eq(&self, other: &[B]) -> bool {
        self.as_slice() == other
    }
}

impl<A, B, const N: usize> PartialEq<&[B]> for Deque<A, N>
where
    A: PartialEq<B>,
{
    #[inline]
    fn eq(&self, other: &&[B]) -> bool {
        self.as_slice() == *other
    }
}

impl<A, B, const N: usize, const M: usize> PartialEq<[B; M]> for Deque<A, N>
where
    A: PartialEq<B>,
{
    #[inline]
    fn eq(&self, other: &[B; M]) -> bool {
        self.as_slice() == &other[..]
    }
}
