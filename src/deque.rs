//! Growable double-ended queue on a power-of-two ring buffer.
//!
//! # Layout
//! Elements live in a boxed slice of `Option<T>` slots.  The live window starts at
//! `head` and ends one before `tail`, wrapping past the end of the slice when needed.
//! Slots outside the window always hold `None`, so a popped element is never kept
//! alive by the buffer.
//!
//! # Resizing
//! - **Grow**: an insertion into a full buffer doubles it (or allocates the floor on
//!   first use).
//! - **Shrink**: a removal that leaves the buffer exactly one-quarter full halves it,
//!   unless it is already at the floor.
//!
//! Both move the live window to the start of a fresh buffer in logical order.  The
//! new buffer is reserved before any element moves, so a failed allocation leaves the
//! deque untouched.

use core::fmt;
use core::iter::{Chain, Flatten, FusedIterator};
use core::slice;
use std::collections::VecDeque;

use crate::config::DequeConfig;
use crate::error::{DequeError, DequeResult};

// ─── AnyDeque ─────────────────────────────────────────────────────────────────

/// An object-safe abstraction over double-ended queue types.
///
/// Implemented by both `VecDeque<T>` and [`Deque<T>`] so that code can operate on
/// a deque without knowing which one it holds.  Empty access is reported as `None`.
pub trait AnyDeque<T> {
    /// Returns the number of elements in the deque.
    fn len(&self) -> usize;
    /// Returns `true` if the deque contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Appends an element to the back.
    fn push_back(&mut self, item: T);
    /// Prepends an element to the front.
    fn push_front(&mut self, item: T);
    /// Removes and returns the element from the back, or `None` if empty.
    fn pop_back(&mut self) -> Option<T>;
    /// Removes and returns the element from the front, or `None` if empty.
    fn pop_front(&mut self) -> Option<T>;
    /// Removes all elements.
    fn clear(&mut self);
    /// Returns a shared reference to the front element, or `None` if empty.
    fn front(&self) -> Option<&T>;
    /// Returns a shared reference to the back element, or `None` if empty.
    fn back(&self) -> Option<&T>;
}

impl<T> AnyDeque<T> for VecDeque<T> {
    fn len(&self) -> usize {
        self.len()
    }
    fn push_back(&mut self, item: T) {
        self.push_back(item);
    }
    fn push_front(&mut self, item: T) {
        self.push_front(item);
    }
    fn pop_back(&mut self) -> Option<T> {
        self.pop_back()
    }
    fn pop_front(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn clear(&mut self) {
        self.clear();
    }
    fn front(&self) -> Option<&T> {
        self.front()
    }
    fn back(&self) -> Option<&T> {
        self.back()
    }
}

impl<T> AnyDeque<T> for Deque<T> {
    fn len(&self) -> usize {
        self.count
    }
    fn push_back(&mut self, item: T) {
        self.push_back(item);
    }
    fn push_front(&mut self, item: T) {
        self.push_front(item);
    }
    fn pop_back(&mut self) -> Option<T> {
        self.try_pop_back().ok()
    }
    fn pop_front(&mut self) -> Option<T> {
        self.try_pop_front().ok()
    }
    fn clear(&mut self) {
        self.clear();
    }
    fn front(&self) -> Option<&T> {
        self.get(0)
    }
    fn back(&self) -> Option<&T> {
        self.count.checked_sub(1).and_then(|last| self.get(last))
    }
}

// ─── Deque ────────────────────────────────────────────────────────────────────

/// A double-ended queue backed by a circular buffer that grows when full and
/// shrinks when one-quarter full.
///
/// # Capacity
/// The backing buffer length is always `0` (not yet allocated) or a power of two,
/// which lets `next`/`prev` wrap with a bitmask.  It never shrinks below the floor
/// chosen at construction ([`min_capacity`](Deque::min_capacity), at least
/// [`MIN_CAPACITY`](crate::MIN_CAPACITY)).
///
/// # Empty access
/// [`front`](Deque::front), [`back`](Deque::back), [`pop_front`](Deque::pop_front)
/// and [`pop_back`](Deque::pop_back) panic on an empty deque.  Each has a `try_`
/// counterpart returning [`DequeError::EmptyContainer`] instead.
///
/// # Examples
/// ```rust
/// use ring_deque::Deque;
///
/// let mut d: Deque<&str> = Deque::new();
/// assert_eq!(d.capacity(), 0);
///
/// d.push_back("a");
/// d.push_back("b");
/// assert_eq!(d.capacity(), 16);
/// assert_eq!(d.front(), &"a");
/// assert_eq!(d.back(), &"b");
///
/// assert_eq!(d.pop_back(), "b");
/// assert_eq!(d.pop_front(), "a");
/// assert!(d.try_pop_front().is_err());
/// ```
#[derive(Clone)]
pub struct Deque<T> {
    buf: Box<[Option<T>]>,
    head: usize,
    tail: usize,
    count: usize,
    min_cap: usize,
}

impl<T> Deque<T> {
    /// Creates an empty deque with the default floor and no allocation.
    pub fn new() -> Self {
        Self {
            buf: Box::default(),
            head: 0,
            tail: 0,
            count: 0,
            min_cap: crate::MIN_CAPACITY,
        }
    }

    /// Creates a deque with room for at least `capacity` elements.
    ///
    /// `0` defers allocation to the first push.
    ///
    /// # Panics
    /// If `capacity` cannot be rounded to a power of two or cannot be allocated.
    #[track_caller]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacities(capacity, 0)
    }

    /// Creates a deque with room for at least `capacity` elements that never
    /// shrinks below `min_capacity` slots.
    ///
    /// Both values are rounded up to powers of two; the floor is at least
    /// [`MIN_CAPACITY`](crate::MIN_CAPACITY).
    ///
    /// ```rust
    /// use ring_deque::Deque;
    ///
    /// let d: Deque<u32> = Deque::with_capacities(2000, 40);
    /// assert_eq!(d.capacity(), 2048);
    /// assert_eq!(d.min_capacity(), 64);
    ///
    /// let lazy: Deque<u32> = Deque::with_capacities(0, 64);
    /// assert_eq!(lazy.capacity(), 0);
    /// ```
    ///
    /// # Panics
    /// If either value cannot be rounded to a power of two, or the initial buffer
    /// cannot be allocated.
    #[track_caller]
    pub fn with_capacities(capacity: usize, min_capacity: usize) -> Self {
        match Self::try_with_capacities(capacity, min_capacity) {
            Ok(deque) => deque,
            Err(err) => panic!("{err}"),
        }
    }

    /// Fallible form of [`with_capacities`](Deque::with_capacities).
    pub fn try_with_capacities(capacity: usize, min_capacity: usize) -> DequeResult<Self> {
        Self::from_config(
            &DequeConfig::new()
                .with_initial_capacity(capacity)
                .with_min_capacity(min_capacity),
        )
    }

    /// Creates a deque from a [`DequeConfig`].
    pub fn from_config(config: &DequeConfig) -> DequeResult<Self> {
        let min_cap = config.effective_min_capacity()?;
        let initial = config.effective_initial_capacity()?;
        let buf = if initial > 0 {
            alloc_slots(initial)?
        } else {
            Box::default()
        };
        Ok(Self {
            buf,
            head: 0,
            tail: 0,
            count: 0,
            min_cap,
        })
    }

    /// Returns the number of live elements.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns `true` if the deque contains no elements.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns the length of the backing buffer, `0` while unallocated.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Capacity of a deque that may be absent; `None` reports `0`.
    pub fn capacity_of(deque: Option<&Self>) -> usize {
        deque.map_or(0, Self::capacity)
    }

    /// Returns the length of the backing buffer.
    ///
    /// Same value as [`capacity`](Deque::capacity); unlike [`len`](Deque::len) it
    /// does not count live elements.
    #[inline(always)]
    pub fn buffer_len(&self) -> usize {
        self.buf.len()
    }

    /// Returns the floor below which the buffer never shrinks.
    #[inline(always)]
    pub fn min_capacity(&self) -> usize {
        self.min_cap
    }

    /// Next physical slot, wrapping.  Only valid once the buffer is allocated.
    #[inline(always)]
    fn next(&self, idx: usize) -> usize {
        (idx + 1) & (self.buf.len() - 1)
    }

    /// Previous physical slot, wrapping.  Only valid once the buffer is allocated.
    #[inline(always)]
    fn prev(&self, idx: usize) -> usize {
        idx.wrapping_sub(1) & (self.buf.len() - 1)
    }

    /// Returns a shared reference to the element at logical `index`, or `None`.
    ///
    /// Logical index 0 is the front.
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.count {
            let real_idx = (self.head + index) & (self.buf.len() - 1);
            self.buf[real_idx].as_ref()
        } else {
            None
        }
    }

    /// Returns an exclusive reference to the element at logical `index`, or `None`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < self.count {
            let real_idx = (self.head + index) & (self.buf.len() - 1);
            self.buf[real_idx].as_mut()
        } else {
            None
        }
    }

    /// Returns the front element.
    ///
    /// # Panics
    /// If the deque is empty.
    #[track_caller]
    pub fn front(&self) -> &T {
        match self.try_front() {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }

    /// Returns the back element.
    ///
    /// # Panics
    /// If the deque is empty.
    #[track_caller]
    pub fn back(&self) -> &T {
        match self.try_back() {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }

    /// Returns the front element, or [`DequeError::EmptyContainer`].
    pub fn try_front(&self) -> DequeResult<&T> {
        self.get(0).ok_or(DequeError::empty("front"))
    }

    /// Returns the back element, or [`DequeError::EmptyContainer`].
    pub fn try_back(&self) -> DequeResult<&T> {
        self.count
            .checked_sub(1)
            .and_then(|last| self.get(last))
            .ok_or(DequeError::empty("back"))
    }

    /// Returns an exclusive reference to the front element, or `None` if empty.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    /// Returns an exclusive reference to the back element, or `None` if empty.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        let last = self.count.checked_sub(1)?;
        self.get_mut(last)
    }

    /// Appends `item` to the back.  Grows the buffer first if it is full.
    ///
    /// `push_back` followed by [`pop_front`](Deque::pop_front) is FIFO; followed by
    /// [`pop_back`](Deque::pop_back) it is LIFO.
    ///
    /// # Panics
    /// If the grown buffer cannot be allocated.
    #[track_caller]
    pub fn push_back(&mut self, item: T) {
        if let Err(err) = self.try_push_back(item) {
            panic!("{err}");
        }
    }

    /// Fallible form of [`push_back`](Deque::push_back).
    ///
    /// On error the deque is unchanged and `item` is dropped.
    pub fn try_push_back(&mut self, item: T) -> DequeResult<()> {
        self.grow_if_full()?;
        self.buf[self.tail] = Some(item);
        self.tail = self.next(self.tail);
        self.count += 1;
        Ok(())
    }

    /// Prepends `item` to the front.  Grows the buffer first if it is full.
    ///
    /// # Panics
    /// If the grown buffer cannot be allocated.
    #[track_caller]
    pub fn push_front(&mut self, item: T) {
        if let Err(err) = self.try_push_front(item) {
            panic!("{err}");
        }
    }

    /// Fallible form of [`push_front`](Deque::push_front).
    ///
    /// On error the deque is unchanged and `item` is dropped.
    pub fn try_push_front(&mut self, item: T) -> DequeResult<()> {
        self.grow_if_full()?;
        self.head = self.prev(self.head);
        self.buf[self.head] = Some(item);
        self.count += 1;
        Ok(())
    }

    /// Removes and returns the front element.
    ///
    /// May halve the buffer afterwards.  If that smaller buffer cannot be
    /// allocated the pop still succeeds and the current buffer is kept
    /// (logged at `warn` with the `tracing` feature).
    ///
    /// # Panics
    /// If the deque is empty.
    #[track_caller]
    pub fn pop_front(&mut self) -> T {
        match self.try_pop_front() {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }

    /// Removes and returns the back element.
    ///
    /// May halve the buffer afterwards.  If that smaller buffer cannot be
    /// allocated the pop still succeeds and the current buffer is kept
    /// (logged at `warn` with the `tracing` feature).
    ///
    /// # Panics
    /// If the deque is empty.
    #[track_caller]
    pub fn pop_back(&mut self) -> T {
        match self.try_pop_back() {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }

    /// Removes and returns the front element, or [`DequeError::EmptyContainer`].
    pub fn try_pop_front(&mut self) -> DequeResult<T> {
        if self.count == 0 {
            return Err(DequeError::empty("pop_front"));
        }
        let item = self.buf[self.head]
            .take()
            .ok_or(DequeError::empty("pop_front"))?;
        self.head = self.next(self.head);
        self.count -= 1;

        self.shrink_if_excess();
        Ok(item)
    }

    /// Removes and returns the back element, or [`DequeError::EmptyContainer`].
    pub fn try_pop_back(&mut self) -> DequeResult<T> {
        if self.count == 0 {
            return Err(DequeError::empty("pop_back"));
        }
        let last = self.prev(self.tail);
        let item = self.buf[last].take().ok_or(DequeError::empty("pop_back"))?;
        self.tail = last;
        self.count -= 1;

        self.shrink_if_excess();
        Ok(item)
    }

    /// Drops every element.  The buffer keeps its current size.
    pub fn clear(&mut self) {
        let (first, second) = self.window_mut();
        for slot in first.iter_mut().chain(second.iter_mut()) {
            *slot = None;
        }
        self.head = 0;
        self.tail = 0;
        self.count = 0;
    }

    /// Returns a front-to-back iterator over the elements.
    pub fn iter(&self) -> Iter<'_, T> {
        let (first, second) = self.window();
        Iter {
            inner: first.iter().chain(second.iter()).flatten(),
            remaining: self.count,
        }
    }

    /// The live window as up to two physical segments, in logical order.
    fn window(&self) -> (&[Option<T>], &[Option<T>]) {
        if self.count == 0 {
            (&[], &[])
        } else if self.head < self.tail {
            (&self.buf[self.head..self.tail], &[])
        } else {
            (&self.buf[self.head..], &self.buf[..self.tail])
        }
    }

    /// Mutable counterpart of [`window`](Deque::window).
    fn window_mut(&mut self) -> (&mut [Option<T>], &mut [Option<T>]) {
        if self.count == 0 {
            (&mut [], &mut [])
        } else if self.head < self.tail {
            (&mut self.buf[self.head..self.tail], &mut [])
        } else {
            let (wrapped, front) = self.buf.split_at_mut(self.head);
            (front, &mut wrapped[..self.tail])
        }
    }

    /// Makes room for one more element if the buffer is full.
    fn grow_if_full(&mut self) -> DequeResult<()> {
        if self.count != self.buf.len() {
            return Ok(());
        }
        if self.buf.is_empty() {
            self.buf = alloc_slots(self.min_cap)?;
            self.head = 0;
            self.tail = 0;
            #[cfg(feature = "tracing")]
            tracing::debug!(capacity = self.min_cap, "deque buffer allocated");
            return Ok(());
        }
        let doubled = self
            .count
            .checked_mul(2)
            .ok_or(DequeError::CapacityOverflow {
                requested: self.count,
            })?;
        self.resize(doubled)
    }

    /// Halves the buffer when it is exactly one-quarter full and above the floor.
    fn shrink_if_excess(&mut self) {
        if self.buf.len() > self.min_cap && (self.count << 2) == self.buf.len() {
            // A failed shrink leaves the current buffer in place.
            if let Err(_err) = self.resize(self.count << 1) {
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    capacity = self.buf.len(),
                    count = self.count,
                    error = %_err,
                    "deque shrink skipped"
                );
            }
        }
    }

    /// Moves the live window into a fresh buffer of `new_cap` slots, starting at
    /// index 0.  Used both to grow when full and to shrink when a quarter full.
    fn resize(&mut self, new_cap: usize) -> DequeResult<()> {
        let mut slots = alloc_slots(new_cap)?;
        #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
        let old_cap = self.buf.len();
        #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
        let wrapped = self.tail <= self.head;

        let (first, second) = self.window_mut();
        for (dst, src) in slots.iter_mut().zip(first.iter_mut().chain(second.iter_mut())) {
            *dst = src.take();
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(
            from = old_cap,
            to = new_cap,
            count = self.count,
            wrapped,
            "deque resized"
        );

        self.buf = slots;
        self.head = 0;
        self.tail = self.count;
        Ok(())
    }
}

/// Allocates `cap` empty slots, reporting failure instead of aborting.
fn alloc_slots<T>(cap: usize) -> DequeResult<Box<[Option<T>]>> {
    let mut slots = Vec::new();
    slots
        .try_reserve_exact(cap)
        .map_err(|_| DequeError::AllocationFailure { requested: cap })?;
    slots.resize_with(cap, || None);
    Ok(slots.into_boxed_slice())
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Deque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for Deque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.count == other.count && self.iter().eq(other.iter())
    }
}
impl<T: Eq> Eq for Deque<T> {}

impl<T> Extend<T> for Deque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for i in iter {
            self.push_back(i);
        }
    }
}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Self::new();
        deque.extend(iter);
        deque
    }
}

// ─── Iterators ────────────────────────────────────────────────────────────────

/// Borrowing iterator returned by [`Deque::iter`].
pub struct Iter<'a, T> {
    inner: Flatten<Chain<slice::Iter<'a, Option<T>>, slice::Iter<'a, Option<T>>>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let item = self.inner.next()?;
        self.remaining -= 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let item = self.inner.next_back()?;
        self.remaining -= 1;
        Some(item)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a Deque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// Owning iterator; pops from the front.
pub struct IntoIter<T> {
    deque: Deque<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.deque.try_pop_front().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.deque.len(), Some(self.deque.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.deque.try_pop_back().ok()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for Deque<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { deque: self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MIN_CAPACITY;

    fn assert_invariants<T>(d: &Deque<T>) {
        let cap = d.capacity();
        assert!(cap == 0 || cap.is_power_of_two(), "capacity {cap}");
        assert!(d.len() <= cap);
        if cap > 0 {
            assert!(cap >= d.min_capacity());
            assert!(d.head < cap && d.tail < cap);
            assert_eq!((d.head + d.count) & (cap - 1), d.tail);
        }
        let live = d.buf.iter().filter(|slot| slot.is_some()).count();
        assert_eq!(live, d.len(), "slots outside the window must be None");
    }

    // ─── construction ─────────────────────────────────────────────────────────
    #[test]
    fn test_deque_new_is_lazy() {
        let d: Deque<i32> = Deque::new();
        assert_eq!(d.capacity(), 0);
        assert_eq!(d.buffer_len(), 0);
        assert_eq!(d.min_capacity(), MIN_CAPACITY);
        assert!(d.is_empty());
        assert_invariants(&d);
    }

    #[test]
    fn test_deque_with_capacities_rounding() {
        let d: Deque<i32> = Deque::with_capacity(100);
        assert_eq!(d.capacity(), 128);
        assert_eq!(d.min_capacity(), 16);

        let d: Deque<i32> = Deque::with_capacities(10, 0);
        assert_eq!(d.capacity(), 16);

        let d: Deque<i32> = Deque::with_capacities(0, 50);
        assert_eq!(d.capacity(), 0);
        assert_eq!(d.min_capacity(), 64);

        let d: Deque<i32> = Deque::with_capacities(1000, 32);
        assert_eq!(d.capacity(), 1024);
        assert_eq!(d.min_capacity(), 32);
    }

    #[test]
    fn test_deque_try_with_capacities_overflow() {
        let err = Deque::<u8>::try_with_capacities(0, usize::MAX).unwrap_err();
        assert_eq!(err, DequeError::CapacityOverflow { requested: usize::MAX });
    }

    #[test]
    #[should_panic(expected = "overflows")]
    fn test_deque_with_capacity_overflow_panics() {
        let _d: Deque<u8> = Deque::with_capacity(usize::MAX);
    }

    #[test]
    fn test_deque_capacity_of_absent() {
        let d: Deque<i32> = Deque::with_capacity(1);
        assert_eq!(Deque::capacity_of(Some(&d)), 16);
        assert_eq!(Deque::<i32>::capacity_of(None), 0);
    }

    // ─── index arithmetic ─────────────────────────────────────────────────────
    #[test]
    fn test_deque_next_prev_wrap() {
        let d: Deque<i32> = Deque::with_capacity(16);
        assert_eq!(d.next(0), 1);
        assert_eq!(d.next(15), 0);
        assert_eq!(d.prev(0), 15);
        assert_eq!(d.prev(8), 7);
    }

    // ─── push / pop ───────────────────────────────────────────────────────────
    #[test]
    fn test_deque_first_push_allocates_floor() {
        let mut d: Deque<i32> = Deque::with_capacities(0, 40);
        d.push_back(1);
        assert_eq!(d.capacity(), 64);
        assert_invariants(&d);
    }

    #[test]
    fn test_deque_push_front_on_lazy_buffer() {
        let mut d: Deque<i32> = Deque::new();
        d.push_front(2);
        d.push_front(1);
        d.push_back(3);
        assert_eq!(d.capacity(), 16);
        assert_eq!(d.head, 14);
        assert_eq!(d.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_invariants(&d);
    }

    #[test]
    fn test_deque_pop_clears_slot() {
        let mut d: Deque<String> = Deque::new();
        d.push_back("a".to_string());
        d.push_back("b".to_string());
        d.push_back("c".to_string());

        let head = d.head;
        assert_eq!(d.pop_front(), "a");
        assert!(d.buf[head].is_none());

        let last = d.prev(d.tail);
        assert_eq!(d.pop_back(), "c");
        assert!(d.buf[last].is_none());
        assert_invariants(&d);
    }

    #[test]
    fn test_deque_try_ops_on_empty() {
        let mut d: Deque<i32> = Deque::new();
        assert_eq!(d.try_front(), Err(DequeError::empty("front")));
        assert_eq!(d.try_back(), Err(DequeError::empty("back")));
        assert_eq!(d.try_pop_front(), Err(DequeError::empty("pop_front")));
        assert_eq!(d.try_pop_back(), Err(DequeError::empty("pop_back")));
        assert_eq!(d.front_mut(), None);
        assert_eq!(d.back_mut(), None);
        assert_invariants(&d);
    }

    #[test]
    #[should_panic(expected = "deque: front() called on empty deque")]
    fn test_deque_front_empty_panics() {
        let d: Deque<i32> = Deque::new();
        d.front();
    }

    #[test]
    #[should_panic(expected = "deque: pop_back() called on empty deque")]
    fn test_deque_pop_back_empty_panics() {
        let mut d: Deque<i32> = Deque::with_capacity(32);
        d.pop_back();
    }

    // ─── resize ───────────────────────────────────────────────────────────────
    #[test]
    fn test_deque_resize_linearises_wrapped_window() {
        let mut d: Deque<i32> = Deque::new();
        for i in 0..12 {
            d.push_back(i);
        }
        for _ in 0..10 {
            d.pop_front();
        }
        // head at 10; fill to 16 so the window wraps
        for i in 12..26 {
            d.push_back(i);
        }
        assert_eq!(d.len(), 16);
        assert_eq!(d.head, 10);
        assert_eq!(d.tail, 10);

        d.push_back(26); // grow: [10..16) ++ [0..10) -> [0..16)
        assert_eq!(d.capacity(), 32);
        assert_eq!(d.head, 0);
        assert_eq!(d.tail, 17);
        assert_eq!(d.iter().copied().collect::<Vec<_>>(), (10..27).collect::<Vec<_>>());
        assert_invariants(&d);
    }

    #[test]
    fn test_deque_shrink_exact_quarter_only() {
        let mut d: Deque<i32> = (0..33).collect();
        assert_eq!(d.capacity(), 64);

        while d.len() > 17 {
            d.pop_front();
        }
        assert_eq!(d.capacity(), 64);

        d.pop_front(); // 16 live, 64 slots
        assert_eq!(d.capacity(), 32);
        assert_eq!(d.head, 0);
        assert_eq!(d.tail, 16);
        assert_invariants(&d);
    }

    #[test]
    fn test_deque_shrink_stops_at_floor() {
        let mut d: Deque<i32> = Deque::with_capacities(0, 32);
        d.extend(0..32);
        assert_eq!(d.capacity(), 32);
        while d.len() > 1 {
            d.pop_back();
            assert_eq!(d.capacity(), 32);
        }
    }

    // ─── clear / get ──────────────────────────────────────────────────────────
    #[test]
    fn test_deque_clear_keeps_buffer() {
        let mut d: Deque<i32> = (0..40).collect();
        d.clear();
        assert!(d.is_empty());
        assert_eq!(d.capacity(), 64);
        assert_invariants(&d);
        d.push_back(7);
        assert_eq!(d.pop_front(), 7);
    }

    #[test]
    fn test_deque_get_and_get_mut() {
        let mut d: Deque<i32> = Deque::new();
        d.push_back(20);
        d.push_front(10);
        d.push_back(30);
        assert_eq!(d.get(0), Some(&10));
        assert_eq!(d.get(2), Some(&30));
        assert_eq!(d.get(3), None);
        if let Some(x) = d.get_mut(1) {
            *x = 21;
        }
        if let Some(x) = d.back_mut() {
            *x += 1;
        }
        assert_eq!(d.iter().copied().collect::<Vec<_>>(), vec![10, 21, 31]);
    }

    // ─── traits ───────────────────────────────────────────────────────────────
    #[test]
    fn test_deque_traits_eq_clone_debug() {
        let d1: Deque<i32> = vec![1, 2, 3].into_iter().collect();
        let mut d2: Deque<i32> = Deque::with_capacity(64);
        d2.push_front(3);
        d2.push_front(2);
        d2.push_front(1);
        assert_eq!(d1, d2);

        let cloned = d2.clone();
        assert_eq!(cloned, d1);
        assert_eq!(cloned.capacity(), 64);

        assert_eq!(format!("{:?}", d1), "[1, 2, 3]");
    }

    #[test]
    fn test_deque_traits_iter_both_ends() {
        let d: Deque<i32> = (0..5).collect();
        let mut it = d.iter();
        assert_eq!(it.len(), 5);
        assert_eq!(it.next(), Some(&0));
        assert_eq!(it.next_back(), Some(&4));
        assert_eq!(it.len(), 3);
        assert_eq!(it.copied().collect::<Vec<_>>(), vec![1, 2, 3]);

        let rev: Vec<i32> = d.into_iter().rev().collect();
        assert_eq!(rev, vec![4, 3, 2, 1, 0]);
    }

    // ─── AnyDeque trait dispatch ──────────────────────────────────────────────
    #[test]
    fn test_deque_any_deque_trait() {
        fn exercise(any: &mut dyn AnyDeque<i32>) {
            assert!(any.is_empty());
            assert_eq!(any.pop_front(), None);
            any.push_back(10);
            any.push_front(5);
            assert_eq!(any.len(), 2);
            assert_eq!(any.front(), Some(&5));
            assert_eq!(any.back(), Some(&10));
            assert_eq!(any.pop_back(), Some(10));
            any.clear();
            assert!(any.is_empty());
            assert_eq!(any.back(), None);
        }

        exercise(&mut Deque::<i32>::new());
        exercise(&mut VecDeque::<i32>::new());
    }
}
