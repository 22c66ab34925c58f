//! The zero-capacity counterparts of [`Deque`](crate::Deque) and
//! [`Array`](crate::Array).

use crate::InsertError;

use core::fmt::{self, Debug, Formatter};
use core::marker::PhantomData;

/// A deque that can never hold an element.
///
/// `EmptyDeque<T>` mirrors the mutating and searching API of
/// [`Deque`](crate::Deque), with every operation completing in constant time:
/// it is simultaneously empty and full, every insertion fails, and every
/// removal or search comes up empty. Methods that would read an element, such
/// as `first`, `last`, `get_unchecked` or indexing, are not provided at all.
///
/// This is useful where a capacity is chosen by configuration and may be
/// zero, since [`Deque<T, 0>`](crate::Deque) does not compile.
///
/// # Examples
/// ```
/// let mut deque = coffer::EmptyDeque::<u32>::new();
/// assert!(deque.is_empty() && deque.is_full());
/// assert!(!deque.append(1));
/// assert_eq!(deque.try_prepend(2), Err(2));
/// assert_eq!(deque.count(), 0);
/// ```
pub struct EmptyDeque<T> {
    elem: PhantomData<T>,
}

impl<T> EmptyDeque<T> {
    /// The number of elements a deque of this type can hold.
    pub const CAPACITY: usize = 0;

    /// Constructs a new `EmptyDeque`.
    #[inline]
    pub const fn new() -> Self {
        EmptyDeque { elem: PhantomData }
    }

    /// Always returns `0`.
    #[inline]
    pub const fn capacity(&self) -> usize {
        0
    }

    /// Always returns `0`.
    #[inline]
    pub const fn count(&self) -> usize {
        0
    }

    /// Always returns `0`.
    #[inline]
    pub const fn len(&self) -> usize {
        0
    }

    /// Always returns `true`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        true
    }

    /// Always returns `true`.
    #[inline]
    pub const fn is_full(&self) -> bool {
        true
    }

    /// Returns an empty slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &[]
    }

    /// Returns an empty mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut []
    }

    /// Does nothing.
    #[inline]
    pub fn clear(&mut self) {}

    /// Drops `value`; there are no elements to overwrite.
    #[inline]
    pub fn fill(&mut self, value: T) {
        drop(value);
    }

    /// Always returns `false`.
    #[inline]
    pub fn contains(&self, _value: &T) -> bool {
        false
    }

    /// Always returns [`None`].
    #[inline]
    pub fn index_of_first(&self, _value: &T) -> Option<usize> {
        None
    }

    /// Always returns [`None`].
    #[inline]
    pub fn index_of_last(&self, _value: &T) -> Option<usize> {
        None
    }

    /// Always returns `Err(value)`.
    #[inline]
    pub fn try_append(&mut self, value: T) -> Result<(), T> {
        trace_rejected!("append rejected: deque has no capacity");
        Err(value)
    }

    /// Drops `value` and returns `false`.
    #[inline]
    pub fn append(&mut self, value: T) -> bool {
        self.try_append(value).is_ok()
    }

    /// Always returns `Err(value)`.
    #[inline]
    pub fn try_prepend(&mut self, value: T) -> Result<(), T> {
        trace_rejected!("prepend rejected: deque has no capacity");
        Err(value)
    }

    /// Drops `value` and returns `false`.
    #[inline]
    pub fn prepend(&mut self, value: T) -> bool {
        self.try_prepend(value).is_ok()
    }

    /// Does nothing.
    #[inline]
    pub fn unappend(&mut self) {}

    /// Does nothing.
    #[inline]
    pub fn unprepend(&mut self) {}

    /// Always returns [`None`].
    #[inline]
    pub fn pop_back(&mut self) -> Option<T> {
        None
    }

    /// Always returns [`None`].
    #[inline]
    pub fn pop_front(&mut self) -> Option<T> {
        None
    }

    /// Always returns [`None`].
    #[inline]
    pub fn take_at(&mut self, _index: usize) -> Option<T> {
        None
    }

    /// Always returns `false`.
    #[inline]
    pub fn remove_at(&mut self, _index: usize) -> bool {
        false
    }

    /// Always returns `false`.
    #[inline]
    pub fn remove_first(&mut self, _value: &T) -> bool {
        false
    }

    /// Always returns `false`.
    #[inline]
    pub fn remove_last(&mut self, _value: &T) -> bool {
        false
    }

    /// Always returns [`InsertError::OutOfRange`], as no index is below a
    /// count of zero.
    #[inline]
    pub fn try_insert(&mut self, _index: usize, value: T) -> Result<(), InsertError<T>> {
        trace_rejected!("insert rejected: deque has no capacity");
        Err(InsertError::OutOfRange(value))
    }

    /// Drops `value` and returns `false`.
    #[inline]
    pub fn insert(&mut self, index: usize, value: T) -> bool {
        self.try_insert(index, value).is_ok()
    }
}

impl<T> Default for EmptyDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for EmptyDeque<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> Copy for EmptyDeque<T> {}

impl<T> Debug for EmptyDeque<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("[]")
    }
}

impl<T> PartialEq for EmptyDeque<T> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<T> Eq for EmptyDeque<T> {}

/// An array of zero elements.
///
/// `EmptyArray<T>` provides the query surface of [`Array`](crate::Array) for
/// the case `N == 0`, which [`Array<T, 0>`](crate::Array) rejects at compile
/// time. Having no elements, it is both empty and full, and offers no element
/// accessors.
///
/// # Examples
/// ```
/// let mut array = coffer::EmptyArray::<u32>::new();
/// assert!(array.is_empty() && array.is_full());
/// array.fill(7);
/// assert_eq!(array.index_of_first(&7), None);
/// ```
pub struct EmptyArray<T> {
    elem: PhantomData<T>,
}

impl<T> EmptyArray<T> {
    /// The number of elements in an array of this type.
    pub const CAPACITY: usize = 0;

    /// Constructs a new `EmptyArray`.
    #[inline]
    pub const fn new() -> Self {
        EmptyArray { elem: PhantomData }
    }

    /// Always returns `true`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        true
    }

    /// Always returns `true`.
    #[inline]
    pub const fn is_full(&self) -> bool {
        true
    }

    /// Always returns `0`.
    #[inline]
    pub const fn count(&self) -> usize {
        0
    }

    /// Always returns `0`.
    #[inline]
    pub const fn len(&self) -> usize {
        0
    }

    /// Always returns `0`.
    #[inline]
    pub const fn capacity(&self) -> usize {
        0
    }

    /// Returns an empty slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &[]
    }

    /// Returns an empty mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut []
    }

    /// Does nothing.
    #[inline]
    pub fn clear(&mut self) {}

    /// Drops `value`; there are no elements to overwrite.
    #[inline]
    pub fn fill(&mut self, value: T) {
        drop(value);
    }

    /// Always returns `false`.
    #[inline]
    pub fn contains(&self, _value: &T) -> bool {
        false
    }

    /// Always returns [`None`].
    #[inline]
    pub fn index_of_first(&self, _value: &T) -> Option<usize> {
        None
    }

    /// Always returns [`None`].
    #[inline]
    pub fn index_of_last(&self, _value: &T) -> Option<usize> {
        None
    }
}

impl<T> Default for EmptyArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for EmptyArray<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> Copy for EmptyArray<T> {}

impl<T> Debug for EmptyArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("[]")
    }
}

impl<T> PartialEq for EmptyArray<T> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<T> Eq for EmptyArray<T> {}

impl<T> From<[T; 0]> for EmptyArray<T> {
    fn from(_items: [T; 0]) -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::DropCounter;
    use crate::ErrorKind;

    #[test]
    fn every_mutator_fails() {
        let mut deque = EmptyDeque::<i32>::new();
        assert!(deque.is_empty());
        assert!(deque.is_full());
        assert_eq!(deque.count(), 0);
        assert_eq!(deque.capacity(), 0);
        assert_eq!(EmptyDeque::<i32>::CAPACITY, 0);

        assert!(!deque.append(1));
        assert!(!deque.prepend(1));
        assert!(!deque.insert(0, 1));
        assert_eq!(deque.try_append(1), Err(1));
        assert_eq!(deque.try_prepend(2), Err(2));
        assert_eq!(
            deque.try_insert(0, 3).map_err(|e| e.kind()),
            Err(ErrorKind::OutOfRange)
        );

        deque.unappend();
        deque.unprepend();
        deque.clear();
        deque.fill(4);
        assert!(!deque.remove_first(&1));
        assert!(!deque.remove_last(&1));
        assert!(!deque.remove_at(0));
        assert_eq!(deque.pop_back(), None);
        assert_eq!(deque.pop_front(), None);
        assert_eq!(deque.take_at(0), None);

        assert!(!deque.contains(&1));
        assert_eq!(deque.index_of_first(&1), None);
        assert_eq!(deque.index_of_last(&1), None);
        assert!(deque.as_slice().is_empty());
        assert!(deque.as_mut_slice().is_empty());
    }

    #[test]
    fn rejected_values_are_dropped() {
        let drop_count = DropCounter::new();
        let mut deque = EmptyDeque::new();

        assert!(!deque.append(drop_count.new_droppable(1)));
        assert!(!deque.prepend(drop_count.new_droppable(2)));
        assert!(!deque.insert(0, drop_count.new_droppable(3)));
        deque.fill(drop_count.new_droppable(4));
        assert_eq!(drop_count.dropped(), 4);

        let back = deque.try_append(drop_count.new_droppable(5)).unwrap_err();
        assert_eq!(back.value, 5);
        assert_eq!(drop_count.dropped(), 4);
    }

    #[test]
    fn every_query_is_empty() {
        let mut array = EmptyArray::<char>::from([]);
        assert!(array.is_empty());
        assert!(array.is_full());
        assert_eq!(array.count(), 0);
        assert_eq!(array.len(), 0);
        assert_eq!(array.capacity(), 0);
        assert_eq!(EmptyArray::<char>::CAPACITY, 0);

        array.clear();
        array.fill('a');
        assert!(!array.contains(&'a'));
        assert_eq!(array.index_of_first(&'a'), None);
        assert_eq!(array.index_of_last(&'a'), None);
        assert!(array.as_slice().is_empty());
        assert!(array.as_mut_slice().is_empty());
        assert_eq!(array, EmptyArray::default());
    }

    #[test]
    fn filling_an_empty_array_drops_the_value() {
        let drop_count = DropCounter::new();
        let mut array = EmptyArray::new();
        array.fill(drop_count.new_droppable(()));
        assert_eq!(drop_count.dropped(), 1);
    }

    #[test]
    fn is_zero_sized() {
        assert_eq!(core::mem::size_of::<EmptyDeque<[u64; 16]>>(), 0);
        assert_eq!(core::mem::size_of::<EmptyArray<[u64; 16]>>(), 0);
    }
}
