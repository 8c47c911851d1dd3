//! Builder for configuring and constructing a [`Generator`].

use crate::counter::{Counter, MAX_SESSION_COUNT, SessionCounter};
use crate::engine::{Generator, GeneratorInner};
use crate::entropy::{OsRandom, RandomSource};
use crate::error::SigilError;
use crate::fingerprint::{create_fingerprint, environment_signature};
use crate::{DEFAULT_LENGTH, MAX_LENGTH, MIN_LENGTH};
use std::sync::Arc;
use tracing::debug;

/// A builder for configuring a [`Generator`].
///
/// Options are validated as they are applied, so when setters are chained
/// with `?` the first invalid option surfaces its error immediately and no
/// generator is produced. Unset options fall back to defaults at
/// [`GeneratorBuilder::build`].
///
/// # Example
/// ```rust
/// use sigil::prelude::*;
///
/// # fn main() -> Result<(), SigilError> {
/// let generator = Generator::builder()
///     .length(16)?
///     .fingerprint("node-7")
///     .build()?;
///
/// assert_eq!(generator.generate().len(), 16);
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct GeneratorBuilder {
    length: Option<usize>,
    random: Option<Box<dyn RandomSource>>,
    counter: Option<Box<dyn Counter>>,
    fingerprint: Option<String>,
}

impl std::fmt::Debug for GeneratorBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratorBuilder")
            .field("length", &self.length)
            .field("custom_random", &self.random.is_some())
            .field("custom_counter", &self.counter.is_some())
            .field("fingerprint", &self.fingerprint)
            .finish()
    }
}

impl GeneratorBuilder {
    /// Creates a new empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the identifier length.
    ///
    /// # Errors
    /// Returns [`SigilError::InvalidLength`] for lengths outside
    /// `[MIN_LENGTH, MAX_LENGTH]`.
    pub fn length(mut self, length: usize) -> Result<Self, SigilError> {
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
            return Err(SigilError::InvalidLength {
                message: format!(
                    "can only generate identifiers with a length between \
                     {MIN_LENGTH} and {MAX_LENGTH}"
                )
                .into(),
                context: Some(format!("got {length}").into()),
            });
        }
        self.length = Some(length);
        Ok(self)
    }

    /// Substitutes a custom randomness source.
    ///
    /// The source is sampled once at registration; a sample outside `[0, 1)`
    /// (including NaN) rejects the configuration. One clean sample cannot
    /// prove uniformity, so the contract beyond the range check stays with
    /// the implementer.
    ///
    /// # Errors
    /// Returns [`SigilError::InvalidRandomSource`] if the probe sample falls
    /// outside `[0, 1)`.
    pub fn random_source(
        mut self,
        source: impl RandomSource + 'static,
    ) -> Result<Self, SigilError> {
        let probe = source.next_f64();
        if !(0.0..1.0).contains(&probe) {
            return Err(SigilError::InvalidRandomSource {
                message: "the provided source must generate values in [0, 1)".into(),
                context: Some(format!("probe sample was {probe}").into()),
            });
        }
        self.random = Some(Box::new(source));
        Ok(self)
    }

    /// Substitutes a custom session counter.
    ///
    /// No validation is possible beyond the [`Counter`] type contract.
    #[must_use]
    pub fn counter(mut self, counter: impl Counter + 'static) -> Self {
        self.counter = Some(Box::new(counter));
        self
    }

    /// Sets a fixed fingerprint for this generator.
    ///
    /// Useful when the process already has a stable distributed identity;
    /// any string is accepted.
    #[must_use]
    pub fn fingerprint(mut self, fingerprint: impl Into<String>) -> Self {
        self.fingerprint = Some(fingerprint.into());
        self
    }

    /// Finalizes the generator.
    ///
    /// Unset options are filled in: [`OsRandom`] as the source, a
    /// [`SessionCounter`] seeded uniformly from `[0, MAX_SESSION_COUNT)`,
    /// the environment fingerprint, and [`DEFAULT_LENGTH`]. Entropy-seeded
    /// defaults always draw from the default secure source, never from a
    /// substituted one.
    ///
    /// # Errors
    /// None beyond those the setters already surfaced; construction stays on
    /// the same `Result` path as configuration.
    ///
    /// # Panics
    /// Panics if a default must be seeded and the OS entropy source is
    /// unavailable (see [`OsRandom`]).
    pub fn build(self) -> Result<Generator, SigilError> {
        let secure = OsRandom;

        let length = self.length.unwrap_or(DEFAULT_LENGTH);
        let counter = self.counter.unwrap_or_else(|| {
            let seed = (secure.next_f64() * MAX_SESSION_COUNT as f64).floor() as i64;
            Box::new(SessionCounter::new(seed))
        });
        let fingerprint = self
            .fingerprint
            .unwrap_or_else(|| create_fingerprint(&secure, &environment_signature()));
        let random = self.random.unwrap_or_else(|| Box::new(secure));

        debug!(length, "identifier generator initialized");

        Ok(Generator { inner: Arc::new(GeneratorInner { length, random, counter, fingerprint }) })
    }
}
