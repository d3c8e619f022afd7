//! Construction parameters for [`Deque`](crate::Deque).
//!
//! `DequeConfig` carries the two capacity hints a deque is built from. With the
//! `serde` feature it can be embedded in an application's own config file:
//!
//! ```toml
//! [queue]
//! initial-capacity = 2048
//! min-capacity = 32
//! ```
//!
//! Loading that file is the application's job; this module only describes and
//! validates the values.

use core::fmt;

use crate::MIN_CAPACITY;
use crate::error::{DequeError, DequeResult};

/// Capacity hints for a [`Deque`](crate::Deque).
///
/// Both hints default to `0`:
/// - `initial_capacity == 0` leaves the backing buffer unallocated until the first push.
/// - `min_capacity` below [`MIN_CAPACITY`] is raised to it.
///
/// Every non-zero hint is rounded up to the next power of two.
///
/// # Examples
/// ```rust
/// use ring_deque::DequeConfig;
///
/// let cfg = DequeConfig::new().with_initial_capacity(100).with_min_capacity(20);
/// assert_eq!(cfg.effective_min_capacity(), Ok(32));
/// assert_eq!(cfg.effective_initial_capacity(), Ok(128));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "kebab-case"))]
pub struct DequeConfig {
    /// Slots to allocate up front; `0` means allocate lazily.
    pub initial_capacity: usize,
    /// Smallest capacity the deque shrinks to.
    pub min_capacity: usize,
}

impl DequeConfig {
    /// Both hints zero: lazy allocation, floor of [`MIN_CAPACITY`].
    pub const fn new() -> Self {
        Self {
            initial_capacity: 0,
            min_capacity: 0,
        }
    }

    /// Sets the initial capacity hint.
    pub const fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Sets the minimum capacity hint.
    pub const fn with_min_capacity(mut self, capacity: usize) -> Self {
        self.min_capacity = capacity;
        self
    }

    /// The shrink floor this config resolves to: the smallest power of two
    /// `>= max(MIN_CAPACITY, min_capacity)`.
    pub fn effective_min_capacity(&self) -> DequeResult<usize> {
        round_capacity(self.min_capacity, MIN_CAPACITY)
    }

    /// Slots allocated at construction, or `0` when allocation is deferred.
    pub fn effective_initial_capacity(&self) -> DequeResult<usize> {
        if self.initial_capacity == 0 {
            return Ok(0);
        }
        round_capacity(self.initial_capacity, self.effective_min_capacity()?)
    }

    /// Validates the config.
    ///
    /// Returns `Err` if either hint cannot be rounded to a power of two.
    pub fn validate(&self) -> DequeResult<()> {
        self.effective_min_capacity()?;
        self.effective_initial_capacity().map(|_| ())
    }
}

impl fmt::Display for DequeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DequeConfig(initial_capacity={}, min_capacity={})",
            self.initial_capacity, self.min_capacity
        )
    }
}

/// Rounds `max(hint, floor)` up to a power of two.
pub(crate) fn round_capacity(hint: usize, floor: usize) -> DequeResult<usize> {
    hint.max(floor)
        .checked_next_power_of_two()
        .ok_or(DequeError::CapacityOverflow { requested: hint })
}
