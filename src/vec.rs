//! A grower that owns its buffer as a `Vec<T>`
//!
//! ```
//! use index_deque::IndexDeque;
//!
//! let mut deque = IndexDeque::for_vec(Vec::new());
//!
//! let i = deque.push_tail().unwrap();
//! deque.grower_mut()[i] = "world";
//! let i = deque.push_head().unwrap();
//! deque.grower_mut()[i] = "hello";
//!
//! let words: Vec<_> = deque.indices().map(|i| deque.grower()[i]).collect();
//! assert_eq!(words, ["hello", "world"]);
//! ```

use alloc::vec::Vec;
use core::ops::{Deref, DerefMut};

use crate::{grow::Grow, IndexDeque};

/// Moves the circular run starting at `pivot` to the front of `buf`, then pads `buf` with
/// `T::default()` up to `len` slots.
///
/// This is the relayout every [`Grow`] implementation has to perform before reporting a new
/// capacity.
///
/// # Panics
///
/// Panics if `pivot > buf.len()`.
pub fn relocate<T>(buf: &mut Vec<T>, pivot: usize, len: usize)
where
    T: Default,
{
    if pivot != 0 {
        buf.rotate_left(pivot);
    }
    buf.resize_with(len, T::default);
}

/// A [`Grow`] implementation that owns the deque's storage.
///
/// Every growth roughly doubles the buffer (`0, 1, 3, 7, ...`), optionally up to a limit past
/// which pushes on a full deque are refused. Derefs to `[T]`, so the slots the deque hands out can
/// be indexed directly.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VecGrowth<T> {
    buf: Vec<T>,
    limit: Option<usize>,
}

impl<T> VecGrowth<T> {
    /// Wraps `buf`, growing without limit
    pub const fn new(buf: Vec<T>) -> Self {
        Self { buf, limit: None }
    }

    /// Wraps `buf`, refusing to grow past `limit` slots
    pub const fn with_limit(buf: Vec<T>, limit: usize) -> Self {
        Self {
            buf,
            limit: Some(limit),
        }
    }

    /// Returns the largest size the buffer may grow to, if any.
    pub const fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Extracts the slice containing every slot of the buffer.
    pub fn as_slice(&self) -> &[T] {
        &self.buf
    }

    /// Extracts the mutable slice containing every slot of the buffer.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.buf
    }

    /// Consumes the grower, returning the buffer.
    pub fn into_inner(self) -> Vec<T> {
        self.buf
    }
}

impl<T> Grow for VecGrowth<T>
where
    T: Default,
{
    fn grow(&mut self, pivot: usize) -> Option<usize> {
        let len = self.buf.len();
        let mut new_len = len.checked_mul(2)?.checked_add(1)?;
        if let Some(limit) = self.limit {
            if len >= limit {
                return None;
            }
            new_len = new_len.min(limit);
        }

        relocate(&mut self.buf, pivot, new_len);
        Some(new_len)
    }
}

impl<T> Deref for VecGrowth<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for VecGrowth<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> From<VecGrowth<T>> for IndexDeque<VecGrowth<T>> {
    /// Constructs an empty deque whose capacity is the length of the grower's buffer
    fn from(grow: VecGrowth<T>) -> Self {
        IndexDeque::new(grow.buf.len(), grow)
    }
}

impl<T> IndexDeque<VecGrowth<T>> {
    /// Constructs an empty deque over `buf`, growing it as needed
    ///
    /// Every slot of `buf` is considered free.
    pub fn for_vec(buf: Vec<T>) -> Self {
        VecGrowth::new(buf).into()
    }

    /// Constructs an empty deque over `buf`, growing it up to `limit` slots
    pub fn for_vec_with_limit(buf: Vec<T>, limit: usize) -> Self {
        VecGrowth::with_limit(buf, limit).into()
    }
}
