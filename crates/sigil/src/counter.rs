//! Session counter: per-generator monotonically increasing entropy input.

use std::sync::atomic::{AtomicI64, Ordering};

/// Upper bound for the random counter seed.
///
/// ~22k generators must start near-simultaneously before two of them reach
/// 50% odds of colliding seeds; the bound is a calculated entropy/collision
/// tradeoff, not an arbitrary number.
pub const MAX_SESSION_COUNT: i64 = 476_782_367;

/// A capability yielding distinct, strictly increasing values per instance.
///
/// Alternative implementations (deterministic test doubles, distributed
/// counters) can be substituted through
/// [`GeneratorBuilder::counter`](crate::GeneratorBuilder::counter).
pub trait Counter: Send + Sync {
    /// Atomically adds one to the stored value and returns the new value.
    fn increment(&self) -> i64;
}

/// Default [`Counter`] backed by an atomic integer.
///
/// One instance is shared by every call on (and every clone of) a single
/// generator. The increment is lock-free, so concurrent `generate` calls
/// never serialize on shared generator state.
#[derive(Debug)]
pub struct SessionCounter {
    value: AtomicI64,
}

impl SessionCounter {
    /// Creates a counter that yields `initial + 1` on the first call.
    #[must_use]
    pub const fn new(initial: i64) -> Self {
        Self { value: AtomicI64::new(initial) }
    }
}

impl Counter for SessionCounter {
    fn increment(&self) -> i64 {
        self.value.fetch_add(1, Ordering::Relaxed) + 1
    }
}
