//! Index bookkeeping for double-ended queues whose storage belongs to someone else
//!
//! An [`IndexDeque`] keeps track of the head, the tail and the occupied range of a circular
//! buffer, and hands out *slot indices* from its push and pop operations. It never allocates,
//! reads or writes the buffer itself. When the buffer is full, a [`Grow`] collaborator is asked
//! to resize it; the same index logic therefore backs both fixed capacity ring buffers and
//! growable deques of any element type.
//!
//! # Examples
//!
//! ## Fixed capacity
//!
//! ```
//! use index_deque::IndexDeque;
//!
//! let mut slots = [0u8; 3];
//! let mut deque = IndexDeque::fixed(slots.len());
//!
//! for x in 1..=3 {
//!     slots[deque.push_tail().unwrap()] = x;
//! }
//! assert!(deque.push_tail().is_err()); // full
//!
//! assert_eq!(slots[deque.pop_head().unwrap()], 1);
//! ```
//!
//! ## Growing storage
//!
//! ```
//! use index_deque::IndexDeque;
//!
//! let mut deque = IndexDeque::for_vec(Vec::new());
//!
//! let i = deque.push_tail().unwrap();
//! deque.grower_mut()[i] = "hello";
//! let i = deque.push_tail().unwrap();
//! deque.grower_mut()[i] = "world";
//!
//! let head = deque.pop_head().unwrap();
//! assert_eq!(deque.grower()[head], "hello");
//! assert_eq!(deque.to_string(), "IndexDeque{head: 1, tail: 1, length: 1, pivot: 1}");
//! ```
//!
//! ## Custom growth
//!
//! Any `FnMut(usize) -> Option<usize>` closure can grow the buffer. It is handed the current
//! pivot, must move the circular run starting there to index 0, and returns the new capacity, or
//! `None` to refuse the push.
//!
//! ```
//! use index_deque::IndexDeque;
//!
//! let mut buf: Vec<char> = Vec::new();
//! let mut deque = IndexDeque::new(0, |pivot: usize| -> Option<usize> {
//!     buf.rotate_left(pivot);
//!     buf.resize(buf.len() * 2 + 1, ' ');
//!     Some(buf.len())
//! });
//!
//! deque.push_tail().unwrap();
//! deque.push_head().unwrap();
//! assert_eq!(deque.capacity(), 3);
//! ```
//!
//! # Optional features
//!
//! - `alloc` (default): [`VecGrowth`] and [`sorted_keys`]
//! - `serde`: `Serialize` for [`IndexDeque`], `Serialize` and `Deserialize` for [`Snapshot`]
//! - `ufmt`: `ufmt::uDisplay` for [`IndexDeque`] and [`Snapshot`]
//! - `defmt`: `defmt::Format` for [`IndexDeque`], [`Snapshot`] and [`CapacityError`]

#![cfg_attr(not(test), no_std)]
#![deny(missing_docs)]
#![deny(rust_2018_compatibility)]
#![deny(rust_2018_idioms)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub use deque::{IndexDeque, Indices, Snapshot};
pub use errors::CapacityError;
pub use grow::{Fixed, Grow};
#[cfg(feature = "alloc")]
pub use keys::sorted_keys;
#[cfg(feature = "alloc")]
pub use vec::{relocate, VecGrowth};

mod deque;
mod errors;
pub mod grow;
#[cfg(feature = "alloc")]
mod keys;
#[cfg(feature = "alloc")]
pub mod vec;

#[cfg(feature = "defmt")]
mod defmt;
#[cfg(feature = "serde")]
mod ser;
#[cfg(feature = "ufmt")]
mod ufmt;
