//! Kind-driven addition over tagged words.

use log::trace;

use crate::{
    arena::{ArenaError, FloatArena},
    tagged::Value,
};

/// Add two tagged words.
///
/// Two fixnums stay in the fixnum domain: wrapping two's-complement
/// addition, re-encoded immediately, no arena traffic. Any other pairing
/// promotes both sides to float and boxes the sum, consuming one arena
/// slot; a full arena fails the whole addition.
///
/// A boolean operand rides the float path like every other non-fixnum, so
/// its typed float read yields the wrong-kind fallback `-1.0` and that is
/// what participates in the sum. `true`/`false` never reach the
/// arithmetic. Preserved deliberately; see DESIGN.md before changing it.
pub fn add(a: Value, b: Value, arena: &mut FloatArena) -> Result<Value, ArenaError> {
    if a.is_fixnum() && b.is_fixnum() {
        let sum = a.as_fixnum().wrapping_add(b.as_fixnum());
        return Ok(Value::from_fixnum(sum));
    }

    let fa = widen(a, arena);
    let fb = widen(b, arena);
    trace!("promoted add: {fa} + {fb}");
    Value::from_float(fa + fb, arena)
}

/// Promote one operand to float: fixnums decode then cast, everything else
/// takes the typed float read with its fallbacks.
fn widen(value: Value, arena: &FloatArena) -> f64 {
    if value.is_fixnum() {
        value.as_fixnum() as f64
    } else {
        value.as_float(arena)
    }
}

#[cfg(test)]
mod arith_tests {
    use super::*;
    use crate::arena::INVALID_DEREFERENCE;
    use crate::policy::{TAG_BITS, ValueTag};

    #[test]
    fn fixnum_addition_is_exact_and_uses_no_arena_slot() {
        let mut arena = FloatArena::new(4);

        let sum = add(Value::from_fixnum(10), Value::from_fixnum(5), &mut arena)
            .expect("fixnum addition never allocates");

        assert!(sum.is_fixnum());
        assert_eq!(sum.as_fixnum(), 15);
        assert!(arena.is_empty(), "fixnum path must not touch the arena");
    }

    #[test]
    fn fixnum_addition_handles_negatives() {
        let mut arena = FloatArena::new(1);
        let sum = add(Value::from_fixnum(-10), Value::from_fixnum(3), &mut arena)
            .expect("fixnum addition never allocates");
        assert_eq!(sum.as_fixnum(), -7);
    }

    #[test]
    fn mixed_addition_promotes_to_float() {
        let mut arena = FloatArena::new(4);
        let boxed = Value::from_float(20.5, &mut arena).expect("arena has room");

        let sum = add(Value::from_fixnum(10), boxed, &mut arena).expect("result slot available");

        assert!(sum.is_float());
        assert_eq!(sum.as_float(&arena), 30.5);
    }

    #[test]
    fn float_addition_boxes_the_sum_in_a_new_slot() {
        let mut arena = FloatArena::new(4);
        let a = Value::from_float(1.25, &mut arena).expect("arena has room");
        let b = Value::from_float(2.5, &mut arena).expect("arena has room");

        let sum = add(a, b, &mut arena).expect("result slot available");

        assert_eq!(sum.as_float(&arena), 3.75);
        assert_eq!(arena.len(), 3);
        // operands keep their original slots
        assert_eq!(a.as_float(&arena), 1.25);
        assert_eq!(b.as_float(&arena), 2.5);
    }

    #[test]
    fn boolean_operand_contributes_mismatch_default_not_its_bit() {
        let mut arena = FloatArena::new(4);

        let sum = add(Value::from_boolean(true), Value::from_fixnum(10), &mut arena)
            .expect("result slot available");

        // the boolean reads as the float fallback -1.0, so 10 + (-1.0)
        assert_eq!(sum.as_float(&arena), 9.0);
    }

    #[test]
    fn forged_float_operand_feeds_the_dereference_sentinel_into_the_sum() {
        let mut arena = FloatArena::new(4);
        let forged = Value::from_raw((50u64 << TAG_BITS) | ValueTag::Float as u64);

        let sum = add(forged, Value::from_fixnum(2), &mut arena).expect("result slot available");

        assert_eq!(sum.as_float(&arena), INVALID_DEREFERENCE + 2.0);
    }

    #[test]
    fn promoted_addition_fails_when_arena_is_full() {
        let mut arena = FloatArena::new(1);
        let boxed = Value::from_float(20.5, &mut arena).expect("first allocation fits");

        let result = add(Value::from_fixnum(10), boxed, &mut arena);

        assert_eq!(result, Err(ArenaError::Exhausted));
        // operand slot stays intact
        assert_eq!(boxed.as_float(&arena), 20.5);
    }
}
