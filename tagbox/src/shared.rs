//! Exclusive-access wrapper for sharing one arena across threads.
//!
//! The core [`FloatArena`] assumes a single owner. Callers that must hand
//! one arena to several threads wrap it here; the lock is the boundary, the
//! arena itself stays lock-free.

use parking_lot::Mutex;

use crate::{
    arena::{ArenaError, FloatArena},
    tagged::Value,
};

/// A [`FloatArena`] behind a [`Mutex`].
///
/// Each operation holds the lock for its full duration. Use [`with`] for
/// multi-step sequences that must not interleave with other threads.
///
/// [`with`]: SharedArena::with
pub struct SharedArena {
    inner: Mutex<FloatArena>,
}

impl SharedArena {
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Mutex::new(FloatArena::new(capacity)),
        }
    }

    pub fn allocate(&self, value: f64) -> Result<Value, ArenaError> {
        self.inner.lock().allocate(value)
    }

    pub fn dereference(&self, raw: u64) -> f64 {
        self.inner.lock().dereference(raw)
    }

    /// Run `f` with exclusive access to the underlying arena.
    pub fn with<R>(&self, f: impl FnOnce(&mut FloatArena) -> R) -> R {
        f(&mut self.inner.lock())
    }
}

#[cfg(test)]
mod shared_tests {
    use std::sync::Arc;
    use std::thread;

    use super::*;

    #[test]
    fn concurrent_allocations_fill_the_arena_exactly() {
        const THREADS: usize = 4;
        const PER_THREAD: usize = 8;

        let arena = Arc::new(SharedArena::new(THREADS * PER_THREAD));

        let handles: Vec<_> = (0..THREADS)
            .map(|id| {
                let arena = Arc::clone(&arena);
                thread::spawn(move || {
                    (0..PER_THREAD)
                        .map(|i| {
                            let stored = (id * PER_THREAD + i) as f64;
                            let word = arena.allocate(stored).expect("arena sized to fit all");
                            (word, stored)
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        for handle in handles {
            for (word, stored) in handle.join().expect("allocator thread panicked") {
                assert_eq!(arena.dereference(word.raw()), stored);
            }
        }

        arena.with(|inner| {
            assert_eq!(inner.len(), THREADS * PER_THREAD);
            assert_eq!(inner.allocate(0.0), Err(ArenaError::Exhausted));
        });
    }

    #[test]
    fn with_gives_multi_step_exclusive_access() {
        let arena = SharedArena::new(2);

        let (a, b) = arena.with(|inner| {
            let a = inner.allocate(1.0).expect("arena has room");
            let b = inner.allocate(2.0).expect("arena has room");
            (a, b)
        });

        assert_eq!(arena.dereference(a.raw()), 1.0);
        assert_eq!(arena.dereference(b.raw()), 2.0);
    }
}
