use sigil::prelude::*;
use std::sync::atomic::{AtomicI64, Ordering};

/// A source that always returns the same value; together with a fixed
/// counter and fingerprint it drives the generator deterministically.
#[derive(Debug, Clone, Copy)]
pub struct ConstSource(pub f64);

impl RandomSource for ConstSource {
    fn next_f64(&self) -> f64 {
        self.0
    }
}

/// A custom counter implementation exercising the capability seam.
#[derive(Debug, Default)]
pub struct StepCounter {
    value: AtomicI64,
}

impl Counter for StepCounter {
    fn increment(&self) -> i64 {
        self.value.fetch_add(1, Ordering::Relaxed) + 1
    }
}

/// Builds a generator at the requested length with default entropy.
///
/// # Panics
/// * If generator setup fails, the function will panic.
#[must_use]
pub fn setup_generator(length: usize) -> Generator {
    Generator::builder()
        .length(length)
        .expect("fixture length is valid")
        .build()
        .expect("Generator setup failed")
}
