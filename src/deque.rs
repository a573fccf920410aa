use core::fmt;
use core::iter::FusedIterator;

use crate::{
    grow::{Fixed, Grow},
    CapacityError,
};

/// Index bookkeeping for a double-ended queue stored in a buffer the deque doesn't own.
///
/// An `IndexDeque` tracks which slots of a circular buffer hold the logical head, the logical
/// tail and everything in between. Pushes and pops hand back *slot indices*; reading and writing
/// the slots is up to the caller. When a push finds the deque full, the [`Grow`] collaborator is
/// asked to resize the buffer (or refuse).
///
/// # Examples
///
/// ```
/// use index_deque::IndexDeque;
///
/// let mut slots = [0; 4];
/// let mut deque = IndexDeque::fixed(slots.len());
///
/// slots[deque.push_tail().unwrap()] = 1;
/// slots[deque.push_tail().unwrap()] = 2;
/// slots[deque.push_head().unwrap()] = 0;
/// assert_eq!(deque.len(), 3);
///
/// assert_eq!(slots[deque.pop_head().unwrap()], 0);
/// assert_eq!(slots[deque.pop_tail().unwrap()], 2);
/// assert_eq!(slots[deque.pop_head().unwrap()], 1);
/// assert_eq!(deque.pop_head(), None);
/// ```
#[derive(Clone)]
pub struct IndexDeque<G> {
    grow: G,

    /// Physical index of the logical head. Always `0..capacity` unless `capacity == 0`.
    pivot: usize,
    /// Number of occupied slots. Always `0..=capacity`.
    len: usize,
    capacity: usize,
}

impl<G> IndexDeque<G> {
    /// Constructs an empty deque over a buffer of `capacity` slots
    ///
    /// `capacity` must match the length of the caller's buffer.
    pub const fn new(capacity: usize, grow: G) -> Self {
        Self {
            grow,
            pivot: 0,
            len: 0,
            capacity,
        }
    }

    fn increment(&self, i: usize) -> usize {
        if i + 1 == self.capacity {
            0
        } else {
            i + 1
        }
    }

    fn decrement(&self, i: usize) -> usize {
        if i == 0 {
            self.capacity - 1
        } else {
            i - 1
        }
    }

    // NOTE callers guarantee `offset < capacity`
    fn to_physical_index(&self, offset: usize) -> usize {
        wrap_add(self.pivot, offset, self.capacity)
    }

    /// Returns the index of the logical first element, or `None` if the deque is empty.
    pub fn head(&self) -> Option<usize> {
        if self.len == 0 {
            None
        } else {
            Some(self.pivot)
        }
    }

    /// Returns the index of the logical last element, or `None` if the deque is empty.
    pub fn tail(&self) -> Option<usize> {
        if self.len == 0 {
            None
        } else {
            Some(self.to_physical_index(self.len - 1))
        }
    }

    /// Removes the logical first element and returns the index it occupied.
    ///
    /// The slot's contents are left as they are; clearing them is up to the caller.
    pub fn pop_head(&mut self) -> Option<usize> {
        let head = self.head()?;
        self.len -= 1;
        self.pivot = self.increment(head);
        Some(head)
    }

    /// Removes the logical last element and returns the index it occupied.
    pub fn pop_tail(&mut self) -> Option<usize> {
        let tail = self.tail()?;
        self.len -= 1;
        Some(tail)
    }

    /// Returns the buffer index of the `offset`-th element counting from the head.
    pub fn get(&self, offset: usize) -> Option<usize> {
        if offset < self.len {
            Some(self.to_physical_index(offset))
        } else {
            None
        }
    }

    /// Returns an iterator over the occupied indices, head to tail.
    pub fn indices(&self) -> Indices {
        Indices {
            next: self.pivot,
            remaining: self.len,
            capacity: self.capacity,
        }
    }

    /// Returns the number of occupied slots.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns whether the deque is empty.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns whether the next push will have to grow the buffer.
    pub const fn is_full(&self) -> bool {
        self.len == self.capacity
    }

    /// Returns the buffer length the deque currently assumes.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the physical index treated as the logical head.
    ///
    /// The pivot is kept while the deque is empty; it is only meaningful as a head when
    /// `len() > 0`.
    pub const fn pivot(&self) -> usize {
        self.pivot
    }

    /// Forgets every element. The capacity is kept and the grower is not called.
    pub fn clear(&mut self) {
        self.len = 0;
        self.pivot = 0;
    }

    /// Returns a copy of the bookkeeping state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            head: self.head(),
            tail: self.tail(),
            length: self.len,
            pivot: self.pivot,
            capacity: self.capacity,
        }
    }

    /// Returns a reference to the grower.
    pub fn grower(&self) -> &G {
        &self.grow
    }

    /// Returns a mutable reference to the grower.
    ///
    /// Resizing a buffer owned by the grower through this reference desynchronizes the deque.
    pub fn grower_mut(&mut self) -> &mut G {
        &mut self.grow
    }

    /// Consumes the deque, returning the grower.
    pub fn into_grower(self) -> G {
        self.grow
    }
}

impl IndexDeque<Fixed> {
    /// Constructs an empty deque over a buffer of `capacity` slots that never grows
    pub const fn fixed(capacity: usize) -> Self {
        Self::new(capacity, Fixed)
    }
}

impl<G> IndexDeque<G>
where
    G: Grow,
{
    /// Makes sure there's a free slot, growing the buffer if the deque is full.
    fn reserve(&mut self) -> Result<(), CapacityError> {
        if self.len < self.capacity {
            return Ok(());
        }

        let capacity = self.grow.grow(self.pivot).ok_or(CapacityError {
            capacity: self.capacity,
        })?;
        assert!(
            capacity > self.capacity,
            "bad growth capacity for IndexDeque: {} <= {}",
            capacity,
            self.capacity
        );

        // the grower moved the circular run to start at index 0
        self.capacity = capacity;
        self.pivot = 0;
        Ok(())
    }

    /// Reserves a slot in front of the head and returns its index.
    ///
    /// Returns an error, leaving the deque unchanged, if the deque is full and the grower
    /// refused to grow.
    ///
    /// # Panics
    ///
    /// Panics if the grower returns a capacity that isn't larger than the current one.
    pub fn push_head(&mut self) -> Result<usize, CapacityError> {
        self.reserve()?;
        self.len += 1;
        self.pivot = self.decrement(self.pivot);
        Ok(self.pivot)
    }

    /// Reserves a slot after the tail and returns its index.
    ///
    /// Returns an error, leaving the deque unchanged, if the deque is full and the grower
    /// refused to grow.
    ///
    /// # Panics
    ///
    /// Panics if the grower returns a capacity that isn't larger than the current one.
    pub fn push_tail(&mut self) -> Result<usize, CapacityError> {
        self.reserve()?;
        self.len += 1;
        Ok(self.to_physical_index(self.len - 1))
    }
}

impl<G> Default for IndexDeque<G>
where
    G: Default,
{
    fn default() -> Self {
        Self::new(0, G::default())
    }
}

impl<G> fmt::Debug for IndexDeque<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexDeque")
            .field("head", &self.head())
            .field("tail", &self.tail())
            .field("len", &self.len)
            .field("pivot", &self.pivot)
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}

/// Renders as `IndexDeque{head: <h>, tail: <t>, length: <l>, pivot: <p>}`, with `-1` standing
/// for a missing head or tail.
impl<G> fmt::Display for IndexDeque<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.snapshot(), f)
    }
}

/// The bookkeeping state of an [`IndexDeque`] at one point in time.
///
/// Returned by [`IndexDeque::snapshot`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    /// Index of the logical first element
    pub head: Option<usize>,
    /// Index of the logical last element
    pub tail: Option<usize>,
    /// Number of occupied slots
    pub length: usize,
    /// Physical index treated as the logical head
    pub pivot: usize,
    /// Buffer length the deque assumes
    pub capacity: usize,
}

/// `(index + offset) % capacity` without overflowing, for `index, offset < capacity`.
fn wrap_add(index: usize, offset: usize, capacity: usize) -> usize {
    if offset >= capacity - index {
        offset - (capacity - index)
    } else {
        index + offset
    }
}

pub(crate) fn sentinel(index: Option<usize>) -> isize {
    index.map_or(-1, |i| i as isize)
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "IndexDeque{{head: {}, tail: {}, length: {}, pivot: {}}}",
            sentinel(self.head),
            sentinel(self.tail),
            self.length,
            self.pivot
        )
    }
}

/// An iterator over the occupied indices of an [`IndexDeque`], head to tail.
///
/// This struct is created by calling [`IndexDeque::indices`].
#[derive(Clone, Debug)]
pub struct Indices {
    next: usize,
    remaining: usize,
    capacity: usize,
}

impl Iterator for Indices {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }

        let index = self.next;
        self.next = if index + 1 == self.capacity {
            0
        } else {
            index + 1
        };
        self.remaining -= 1;
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl DoubleEndedIterator for Indices {
    fn next_back(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        Some(wrap_add(self.next, self.remaining, self.capacity))
    }
}

impl ExactSizeIterator for Indices {}
impl FusedIterator for Indices {}

#[cfg(test)]
mod tests {
    use core::marker::PhantomData;
    use std::{format, string::ToString, vec::Vec};

    use static_assertions::{assert_impl_all, assert_not_impl_any};

    use super::{IndexDeque, Snapshot};
    use crate::grow::Fixed;

    // `Send`-ness follows the grower
    assert_impl_all!(IndexDeque<Fixed>: Send, Sync);
    assert_not_impl_any!(IndexDeque<PhantomData<*const ()>>: Send);

    /// Grows by `step` slots each time, recording the pivots it was handed.
    struct Steps {
        capacity: usize,
        step: usize,
        pivots: Vec<usize>,
    }

    impl crate::Grow for Steps {
        fn grow(&mut self, pivot: usize) -> Option<usize> {
            self.pivots.push(pivot);
            self.capacity += self.step;
            Some(self.capacity)
        }
    }

    #[test]
    fn empty() {
        let v = IndexDeque::fixed(4);
        assert!(v.is_empty());
        assert!(!v.is_full());
        assert_eq!(v.head(), None);
        assert_eq!(v.tail(), None);
        assert_eq!(v.len(), 0);
        assert_eq!(v.pivot(), 0);
        assert_eq!(v.capacity(), 4);
    }

    #[test]
    fn zero_capacity() {
        let mut v = IndexDeque::fixed(0);
        assert!(v.is_full());
        assert_eq!(v.tail(), None);
        assert!(v.push_tail().is_err());
        assert!(v.push_head().is_err());
        assert_eq!(v.pop_head(), None);
        assert_eq!(v.pop_tail(), None);
    }

    #[test]
    fn push_head_wraps() {
        let mut v = IndexDeque::fixed(3);

        assert_eq!(v.push_head(), Ok(2));
        assert_eq!(v.push_head(), Ok(1));
        assert_eq!(v.push_head(), Ok(0));
        assert_eq!(v.head(), Some(0));
        assert_eq!(v.tail(), Some(2));
        assert!(v.is_full());
    }

    #[test]
    fn push_tail() {
        let mut v = IndexDeque::fixed(3);

        assert_eq!(v.push_tail(), Ok(0));
        assert_eq!(v.push_tail(), Ok(1));
        assert_eq!(v.head(), Some(0));
        assert_eq!(v.tail(), Some(1));

        assert_eq!(v.pop_head(), Some(0));
        assert_eq!(v.push_tail(), Ok(2));
        assert_eq!(v.push_tail(), Ok(0));
        assert_eq!(v.head(), Some(1));
        assert_eq!(v.tail(), Some(0));
    }

    #[test]
    fn push_and_pop() {
        let mut v = IndexDeque::fixed(4);

        let a = v.push_tail().unwrap();
        let b = v.push_head().unwrap();
        let c = v.push_tail().unwrap();

        assert_eq!(v.head(), Some(b));
        assert_eq!(v.tail(), Some(c));

        assert_eq!(v.pop_tail(), Some(c));
        assert_eq!(v.pop_head(), Some(b));
        assert_eq!(v.head(), Some(a));
        assert_eq!(v.tail(), Some(a));
        assert_eq!(v.pop_tail(), Some(a));
        assert!(v.is_empty());
    }

    #[test]
    fn pop_head_wraps_pivot() {
        let mut v = IndexDeque::fixed(2);

        v.push_head().unwrap();
        assert_eq!(v.pivot(), 1);
        assert_eq!(v.pop_head(), Some(1));
        assert_eq!(v.pivot(), 0);
    }

    #[test]
    fn pop_empty() {
        let mut v = IndexDeque::fixed(2);
        v.push_tail().unwrap();
        v.pop_tail().unwrap();

        let before = v.snapshot();
        assert_eq!(v.pop_head(), None);
        assert_eq!(v.pop_tail(), None);
        assert_eq!(v.snapshot(), before);
    }

    #[test]
    fn full() {
        let mut v = IndexDeque::fixed(4);

        v.push_tail().unwrap();
        v.push_head().unwrap();
        v.push_tail().unwrap();
        v.push_tail().unwrap();

        let before = v.snapshot();
        assert_eq!(v.push_head().unwrap_err().capacity, 4);
        assert_eq!(v.push_tail().unwrap_err().capacity, 4);
        assert_eq!(v.snapshot(), before);
        assert!(v.is_full());
    }

    #[test]
    fn grow() {
        let mut v = IndexDeque::new(
            2,
            Steps {
                capacity: 2,
                step: 2,
                pivots: Vec::new(),
            },
        );

        v.push_head().unwrap();
        v.push_head().unwrap();
        assert_eq!(v.pivot(), 0);
        v.pop_head().unwrap();
        v.push_tail().unwrap();
        assert_eq!(v.pivot(), 1);
        assert!(v.grower().pivots.is_empty());

        // full: the grower sees the pivot, and the run now starts at 0
        assert_eq!(v.push_tail(), Ok(2));
        assert_eq!(v.grower().pivots, [1]);
        assert_eq!(v.capacity(), 4);
        assert_eq!(v.pivot(), 0);
        assert_eq!(v.head(), Some(0));
        assert_eq!(v.tail(), Some(2));

        assert_eq!(v.push_head(), Ok(3));
        assert!(v.is_full());
        assert_eq!(v.push_head(), Ok(5));
        assert_eq!(v.grower().pivots, [1, 3]);
        assert_eq!(v.len(), 5);
    }

    #[test]
    fn grower_called_only_when_full() {
        let mut calls = 0;
        let mut v = IndexDeque::new(1, |_pivot: usize| -> Option<usize> {
            calls += 1;
            None
        });

        v.push_tail().unwrap();
        assert!(v.push_tail().is_err());
        assert!(v.push_head().is_err());
        drop(v);

        assert_eq!(calls, 2);
    }

    #[test]
    #[should_panic(expected = "bad growth capacity for IndexDeque: 1 <= 2")]
    fn shrinking_grower_panics() {
        let mut v = IndexDeque::new(2, |_pivot: usize| -> Option<usize> { Some(1) });
        v.push_tail().unwrap();
        v.push_tail().unwrap();
        let _ = v.push_tail();
    }

    #[test]
    #[should_panic(expected = "bad growth capacity for IndexDeque: 0 <= 0")]
    fn stalled_grower_panics() {
        let mut v = IndexDeque::new(0, |_pivot: usize| -> Option<usize> { Some(0) });
        let _ = v.push_head();
    }

    #[test]
    fn huge_capacity_wraps() {
        let mut v = IndexDeque::fixed(usize::MAX);

        assert_eq!(v.push_head(), Ok(usize::MAX - 1));
        assert_eq!(v.push_tail(), Ok(0));
        assert_eq!(v.push_tail(), Ok(1));
        assert_eq!(v.head(), Some(usize::MAX - 1));
        assert_eq!(v.tail(), Some(1));
        assert_eq!(v.get(2), Some(1));
        assert_eq!(v.indices().collect::<Vec<_>>(), [usize::MAX - 1, 0, 1]);
        assert_eq!(v.indices().rev().collect::<Vec<_>>(), [1, 0, usize::MAX - 1]);

        assert_eq!(v.pop_tail(), Some(1));
        assert_eq!(v.pop_head(), Some(usize::MAX - 1));
        assert_eq!(v.pivot(), 0);
    }

    #[test]
    fn get() {
        let mut v = IndexDeque::fixed(4);
        v.push_tail().unwrap();
        v.push_tail().unwrap();
        v.push_head().unwrap();

        assert_eq!(v.get(0), Some(3));
        assert_eq!(v.get(1), Some(0));
        assert_eq!(v.get(2), Some(1));
        assert_eq!(v.get(3), None);
    }

    #[test]
    fn indices() {
        let mut v = IndexDeque::fixed(4);

        v.push_tail().unwrap();
        v.push_tail().unwrap();
        v.push_head().unwrap();
        v.push_head().unwrap();
        v.pop_tail().unwrap();

        let mut items = v.indices();
        assert_eq!(items.len(), 3);
        assert_eq!(items.next(), Some(2));
        assert_eq!(items.next(), Some(3));
        assert_eq!(items.next(), Some(0));
        assert_eq!(items.next(), None);
        assert_eq!(items.next(), None);

        assert_eq!(v.indices().rev().collect::<Vec<_>>(), [0, 3, 2]);

        let mut items = v.indices();
        assert_eq!(items.next_back(), Some(0));
        assert_eq!(items.next(), Some(2));
        assert_eq!(items.next_back(), Some(3));
        assert_eq!(items.next(), None);
    }

    #[test]
    fn clear() {
        let mut v = IndexDeque::fixed(3);
        v.push_head().unwrap();
        v.push_head().unwrap();

        v.clear();
        assert!(v.is_empty());
        assert_eq!(v.pivot(), 0);
        assert_eq!(v.capacity(), 3);
        assert_eq!(v.push_tail(), Ok(0));
    }

    #[test]
    fn snapshot() {
        let mut v = IndexDeque::fixed(3);
        v.push_head().unwrap();
        v.push_tail().unwrap();

        assert_eq!(
            v.snapshot(),
            Snapshot {
                head: Some(2),
                tail: Some(0),
                length: 2,
                pivot: 2,
                capacity: 3,
            }
        );
    }

    #[test]
    fn display() {
        let mut v = IndexDeque::fixed(3);
        assert_eq!(
            v.to_string(),
            "IndexDeque{head: -1, tail: -1, length: 0, pivot: 0}"
        );

        v.push_head().unwrap();
        v.push_tail().unwrap();
        assert_eq!(
            v.to_string(),
            "IndexDeque{head: 2, tail: 0, length: 2, pivot: 2}"
        );
    }

    #[test]
    fn debug() {
        let mut v = IndexDeque::fixed(2);
        v.push_tail().unwrap();

        assert_eq!(
            format!("{:?}", v),
            "IndexDeque { head: Some(0), tail: Some(0), len: 1, pivot: 0, capacity: 2, .. }"
        );
    }

    #[test]
    fn default() {
        let v: IndexDeque<Fixed> = IndexDeque::default();
        assert_eq!(v.capacity(), 0);
        assert!(v.is_empty());
    }
}
