//! # Ring Deque
//!
//! A growable double-ended queue backed by a circular buffer.
//!
//! [`Deque<T>`] stores its elements in a single power-of-two sized buffer and tracks
//! the live window with `head`/`tail` cursors, so pushes and pops at either end are
//! amortized O(1) and index wrap-around is a bitmask rather than a modulus.
//!
//! ## Key Features
//!
//! * **Lazy allocation:** `Deque::new()` allocates nothing until the first push.
//! * **Doubling growth:** a push into a full buffer doubles it.
//! * **Quarter-full shrink:** a pop that leaves the buffer exactly one-quarter full
//!   halves it, never going below the deque's capacity floor.
//! * **Capacity floor:** at least [`MIN_CAPACITY`] slots, configurable per deque.
//! * **Cleared slots:** popped elements are moved out, never retained by the buffer.
//!
//! ## Capacity Constraints
//!
//! * Capacity is always `0` (unallocated) or a **power of two**.
//! * Every capacity hint is rounded **up** to the next power of two.
//! * The floor is at least **16** slots.
//!
//! ## Examples
//!
//! ### FIFO and LIFO
//!
//! ```rust
//! use ring_deque::Deque;
//!
//! let mut d: Deque<i32> = Deque::new();
//! d.push_back(1);
//! d.push_back(2);
//! d.push_back(3);
//!
//! assert_eq!(d.pop_front(), 1); // FIFO from the front
//! assert_eq!(d.pop_back(), 3);  // LIFO from the back
//! assert_eq!(d.len(), 1);
//! ```
//!
//! ### Growth and shrink
//!
//! ```rust
//! use ring_deque::Deque;
//!
//! let mut d: Deque<u64> = Deque::new();
//! assert_eq!(d.capacity(), 0);
//!
//! d.extend(0..17); // 17th element grows 16 -> 32
//! assert_eq!(d.capacity(), 32);
//!
//! while d.len() > 1 {
//!     d.pop_front();
//! }
//! assert_eq!(d.capacity(), 16); // shrunk at 8 live elements, floor holds
//! ```
//!
//! ### Empty access
//!
//! ```rust
//! use ring_deque::{Deque, DequeError};
//!
//! let mut d: Deque<String> = Deque::new();
//! assert_eq!(d.try_pop_front(), Err(DequeError::empty("pop_front")));
//! ```
//!
//! ## Feature flags
//!
//! * `tracing`: emit `debug`/`trace` events when the buffer is allocated or resized.
//! * `serde`: derive `Serialize`/`Deserialize` for [`DequeConfig`].

// --- Module Declarations ---

pub mod config;
pub mod deque;
pub mod error;

// --- Re-exports ---

pub use config::DequeConfig;
pub use deque::{AnyDeque, Deque, IntoIter, Iter};
pub use error::{DequeError, DequeResult};

/// Smallest capacity floor any deque uses.  Must be a power of two.
pub const MIN_CAPACITY: usize = 16;

const _: () = assert!(MIN_CAPACITY.is_power_of_two());
