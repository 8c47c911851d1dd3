//! # Sigil
//!
//! Short, URL-safe, collision-resistant identifier generation for
//! distributed systems.
//!
//! Multiple independent processes can mint identifiers concurrently with no
//! coordination. Every identifier mixes the current time, a randomly seeded
//! per-instance session counter, fresh entropy, and a host/process
//! fingerprint through a 512-bit digest, re-encoded in lowercase base-36:
//!
//! ```text
//! [a-z][a-z0-9]...   total length 2..=32, default 24
//! ```
//!
//! The leading letter is drawn independently of the digest, so the shape
//! invariant holds for every output. Uniqueness is probabilistic, not
//! guaranteed: this is neither a UUID-compatible format nor a
//! sortable/monotonic scheme.
//!
//! ## Examples
//!
//! ### Zero configuration
//!
//! The shared default generator is initialized lazily and safely on the
//! first call:
//!
//! ```rust
//! let id = sigil::generate();
//!
//! assert_eq!(id.len(), sigil::DEFAULT_LENGTH);
//! assert!(sigil::is_sigil(&id));
//! ```
//!
//! ### Configured generator
//!
//! ```rust
//! use sigil::prelude::*;
//!
//! # fn main() -> Result<(), SigilError> {
//! let generator = Generator::builder()
//!     .length(10)?
//!     .fingerprint("host-42")
//!     .build()?;
//!
//! let id = generator.generate();
//! assert_eq!(id.len(), 10);
//! # Ok(())
//! # }
//! ```
//!
//! ## Concurrency
//!
//! One [`Generator`] serves many threads: the session counter is the only
//! mutable hot-path state and increments atomically, everything else is
//! immutable after construction. Clones are cheap and share the counter.
//!
//! ## Entropy
//!
//! The default randomness source draws from the operating system CSPRNG and
//! panics if that source is unavailable; it never degrades to a weaker one.
//! Deterministic test doubles can be substituted through the builder, which
//! validates that any substituted source stays in `[0, 1)`.

mod builder;
mod counter;
mod digest;
mod engine;
mod entropy;
mod error;
mod fingerprint;

pub use builder::GeneratorBuilder;
pub use counter::{Counter, MAX_SESSION_COUNT, SessionCounter};
pub use engine::{Generator, generate, is_sigil};
pub use entropy::{OsRandom, RandomSource};
pub use error::SigilError;

/// Identifier length when none is configured.
pub const DEFAULT_LENGTH: usize = 24;

/// Smallest legal identifier length.
pub const MIN_LENGTH: usize = 2;

/// Largest legal identifier length.
pub const MAX_LENGTH: usize = 32;

pub mod prelude {
    pub use crate::builder::GeneratorBuilder;
    pub use crate::counter::{Counter, SessionCounter};
    pub use crate::engine::{Generator, generate, is_sigil};
    pub use crate::entropy::{OsRandom, RandomSource};
    pub use crate::error::SigilError;
    pub use crate::{DEFAULT_LENGTH, MAX_LENGTH, MIN_LENGTH};
}
