//! Word-sized tagged scalar values.
//!
//! A [`Value`] packs one of three scalar kinds into a single 64-bit word.
//! The low bits carry the kind tag, the rest carry a kind-specific payload:
//!
//! - Fixnum: the integer's two's-complement bits, shifted above the tag.
//! - Boolean: one bit directly above the tag.
//! - Float: an index into a [`FloatArena`]; the word is a boxed reference,
//!   never the number itself.
//!
//! Typed access follows a default-on-mismatch contract: reading a word as
//! the wrong kind returns that kind's fixed fallback value instead of
//! failing. Wrong-kind access is a typed no-op, not an error.

use std::fmt;

use crate::{
    arena::{ArenaError, FloatArena},
    policy::{
        BooleanPolicy, FixnumPolicy, FloatPolicy, ImmediatePolicy, TAG_BITS, TAG_MASK, TagPolicy,
        ValueTag,
    },
};

/// Fallback for [`Value::as_fixnum`] on a non-fixnum word.
pub const MISMATCH_FIXNUM: i64 = -1;

/// Fallback for [`Value::as_float`] on a non-float word. Distinct from the
/// arena's [`INVALID_DEREFERENCE`](crate::INVALID_DEREFERENCE), which marks
/// a float word whose index is out of range; the two coincide in value.
pub const MISMATCH_FLOAT: f64 = -1.0;

/// Fallback for [`Value::as_boolean`] on a non-boolean word.
pub const MISMATCH_BOOLEAN: bool = false;

/// A single tagged word. Immutable once constructed; re-encode instead of
/// mutating.
#[repr(transparent)]
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct Value(u64);

impl Value {
    /// Wrap an already-encoded word.
    ///
    /// No validation happens here. A word whose payload is an out-of-range
    /// arena index stays representable and only surfaces at dereference
    /// time.
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> u64 {
        self.0
    }

    #[inline]
    pub fn from_fixnum(value: i64) -> Self {
        Self(FixnumPolicy::encode(value))
    }

    #[inline]
    pub fn from_boolean(value: bool) -> Self {
        Self(BooleanPolicy::encode(value))
    }

    /// Box `value` in `arena` and return the referencing word.
    ///
    /// The one fallible constructor: the arena is append-only and
    /// fixed-capacity, so exhaustion surfaces here as
    /// [`ArenaError::Exhausted`].
    pub fn from_float(value: f64, arena: &mut FloatArena) -> Result<Self, ArenaError> {
        arena.allocate(value)
    }

    #[inline]
    pub fn is_fixnum(self) -> bool {
        FixnumPolicy::matches(self.0)
    }

    #[inline]
    pub fn is_float(self) -> bool {
        FloatPolicy::matches(self.0)
    }

    #[inline]
    pub fn is_boolean(self) -> bool {
        BooleanPolicy::matches(self.0)
    }

    /// The kind named by the tag, or `None` for a bit pattern no
    /// constructor produces.
    ///
    /// Every new kind must add an arm here alongside its policy.
    pub fn kind(self) -> Option<ValueTag> {
        match self.0 & TAG_MASK {
            t if t == ValueTag::Fixnum as u64 => Some(ValueTag::Fixnum),
            t if t == ValueTag::Float as u64 => Some(ValueTag::Float),
            t if t == ValueTag::Boolean as u64 => Some(ValueTag::Boolean),
            _ => None,
        }
    }

    /// Decode as integer, or [`MISMATCH_FIXNUM`] when the tag is anything
    /// else.
    #[inline]
    pub fn as_fixnum(self) -> i64 {
        if self.is_fixnum() {
            FixnumPolicy::decode(self.0)
        } else {
            MISMATCH_FIXNUM
        }
    }

    /// Decode as boolean, or [`MISMATCH_BOOLEAN`] when the tag is anything
    /// else.
    #[inline]
    pub fn as_boolean(self) -> bool {
        if self.is_boolean() {
            BooleanPolicy::decode(self.0)
        } else {
            MISMATCH_BOOLEAN
        }
    }

    /// Resolve the boxed float through `arena`.
    ///
    /// Two fallbacks share the surface value `-1.0`: [`MISMATCH_FLOAT`]
    /// when the tag is not the float kind, and the arena's
    /// [`INVALID_DEREFERENCE`](crate::INVALID_DEREFERENCE) when the tag
    /// matches but the index is out of range.
    #[inline]
    pub fn as_float(self, arena: &FloatArena) -> f64 {
        if self.is_float() {
            arena.dereference(self.0)
        } else {
            MISMATCH_FLOAT
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::from_fixnum(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::from_boolean(value)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            Some(ValueTag::Fixnum) => write!(f, "Fixnum({})", FixnumPolicy::decode(self.0)),
            Some(ValueTag::Boolean) => write!(f, "Boolean({})", BooleanPolicy::decode(self.0)),
            Some(ValueTag::Float) => write!(f, "Float(#{})", self.0 >> TAG_BITS),
            None => write!(f, "Value(0x{:x})", self.0),
        }
    }
}
