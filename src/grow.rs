//! Growth collaborators for [`IndexDeque`](crate::IndexDeque)
//!
//! An [`IndexDeque`](crate::IndexDeque) never touches storage. When a push finds the deque full
//! it hands the current pivot to its [`Grow`] implementation, which owns the job of resizing the
//! backing buffer.

/// Grows the storage behind an [`IndexDeque`](crate::IndexDeque).
///
/// `grow` is called at most once per push, and only when the deque is full. An implementation
/// must either
///
/// - resize the backing buffer to a capacity strictly larger than the current one, move the
///   circular run that starts at `pivot` so that it starts at index `0`, and return the new
///   capacity, or
/// - leave the buffer untouched and return `None` to refuse the push.
///
/// Returning a capacity that doesn't make room is a bug in the implementation and makes the deque
/// panic.
///
/// Any `FnMut(usize) -> Option<usize>` closure is a `Grow`.
///
/// # Examples
///
/// ```
/// use index_deque::IndexDeque;
///
/// // refuse to grow past 8 slots without owning any storage
/// let mut capacity = 4;
/// let mut deque = IndexDeque::new(4, |_pivot: usize| -> Option<usize> {
///     if capacity == 8 {
///         None
///     } else {
///         capacity = 8;
///         Some(8)
///     }
/// });
///
/// for _ in 0..8 {
///     deque.push_tail().unwrap();
/// }
/// assert!(deque.push_tail().is_err());
/// ```
pub trait Grow {
    /// Grows the backing buffer, returning the new capacity or `None` to refuse
    fn grow(&mut self, pivot: usize) -> Option<usize>;
}

impl<F> Grow for F
where
    F: FnMut(usize) -> Option<usize>,
{
    fn grow(&mut self, pivot: usize) -> Option<usize> {
        self(pivot)
    }
}

/// A grower that always refuses, turning an [`IndexDeque`](crate::IndexDeque) into a fixed
/// capacity ring buffer index.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Fixed;

impl Grow for Fixed {
    fn grow(&mut self, _pivot: usize) -> Option<usize> {
        None
    }
}
