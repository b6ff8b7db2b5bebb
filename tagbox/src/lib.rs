mod arena;
mod arith;
mod policy;
mod shared;
mod tagged;

pub use arena::{ArenaError, DEFAULT_ARENA_CAPACITY, FloatArena, INVALID_DEREFERENCE};
pub use arith::add;
pub use policy::{
    BooleanPolicy, FixnumPolicy, FloatPolicy, ImmediatePolicy, TAG_BITS, TAG_MASK, TagPolicy,
    ValueTag,
};
pub use shared::SharedArena;
pub use tagged::{MISMATCH_BOOLEAN, MISMATCH_FIXNUM, MISMATCH_FLOAT, Value};
