//! Append-only storage for boxed floats.
//!
//! Floats do not fit next to a 3-bit tag, so a float-kind [`Value`] carries
//! an index into a `FloatArena` instead of the number itself. The arena is
//! the only mutable state in the crate.

use std::fmt;

use log::{trace, warn};

use crate::{
    Value,
    policy::{TAG_BITS, ValueTag},
};

/// Slots available when no capacity is given.
pub const DEFAULT_ARENA_CAPACITY: usize = 64;

/// Returned by [`FloatArena::dereference`] when the index falls outside the
/// arena. Shares its surface value with [`MISMATCH_FLOAT`] but marks a
/// different condition: the tag was right, the index was not.
///
/// [`MISMATCH_FLOAT`]: crate::MISMATCH_FLOAT
pub const INVALID_DEREFERENCE: f64 = -1.0;

/// Allocation failure: the cursor reached capacity.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ArenaError {
    Exhausted,
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exhausted => write!(f, "float arena capacity exhausted"),
        }
    }
}

impl std::error::Error for ArenaError {}

/// Fixed-capacity, append-only boxed-float storage.
///
/// The cursor only grows; a written slot is never overwritten or freed.
/// One exclusive owner passes the arena by reference to every operation
/// that needs it. Wrap it in [`SharedArena`](crate::SharedArena) if it has
/// to cross threads.
#[derive(Debug)]
pub struct FloatArena {
    slots: Box<[f64]>,
    cursor: usize,
}

impl FloatArena {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![0.0; capacity].into_boxed_slice(),
            cursor: 0,
        }
    }

    pub fn with_default_capacity() -> Self {
        Self::new(DEFAULT_ARENA_CAPACITY)
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Slots written so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.cursor
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cursor == 0
    }

    /// Store `value` in the next free slot and return the float-tagged word
    /// referencing it.
    ///
    /// Index and tag are combined here, so the result is a finished
    /// [`Value`] with no second encoding step at the call site. Fails once
    /// the cursor reaches capacity; nothing already stored is disturbed.
    pub fn allocate(&mut self, value: f64) -> Result<Value, ArenaError> {
        if self.cursor >= self.slots.len() {
            warn!("float arena exhausted at {} slots", self.slots.len());
            return Err(ArenaError::Exhausted);
        }
        let index = self.cursor;
        self.slots[index] = value;
        self.cursor += 1;
        trace!("boxed {value} at slot {index}");
        Ok(Value::from_raw(
            ((index as u64) << TAG_BITS) | ValueTag::Float as u64,
        ))
    }

    /// Read back the float a word's payload points at.
    ///
    /// The index is checked against capacity, not the cursor: an in-range
    /// slot that was never written reads back as `0.0`. An index at or past
    /// capacity yields [`INVALID_DEREFERENCE`].
    pub fn dereference(&self, raw: u64) -> f64 {
        let index = (raw >> TAG_BITS) as usize;
        match self.slots.get(index) {
            Some(&value) => value,
            None => {
                warn!(
                    "dereference of slot {index} outside capacity {}",
                    self.slots.len()
                );
                INVALID_DEREFERENCE
            }
        }
    }
}
