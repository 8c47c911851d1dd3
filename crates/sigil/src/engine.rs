//! Generator core: mixes time, counter, entropy, and fingerprint into
//! identifiers, and hosts the process-wide default generator.

use crate::builder::GeneratorBuilder;
use crate::counter::Counter;
use crate::digest;
use crate::entropy::{RandomSource, create_entropy, random_letter};
use crate::{MAX_LENGTH, MIN_LENGTH};
use std::sync::{Arc, OnceLock};
use std::time::{SystemTime, UNIX_EPOCH};

/// The internal shared state of a [`Generator`] instance.
///
/// Everything here is immutable after construction except the counter,
/// which synchronizes itself; `generate` never takes a lock.
pub(crate) struct GeneratorInner {
    pub(crate) length: usize,
    pub(crate) random: Box<dyn RandomSource>,
    pub(crate) counter: Box<dyn Counter>,
    pub(crate) fingerprint: String,
}

/// A configured identifier generator.
///
/// `Generator` wraps its state in an [`Arc`], making it cheaply clonable and
/// safe to share across threads or asynchronous tasks. Clones share the
/// session counter, so every identifier minted through any clone consumes a
/// distinct counter value.
///
/// # Example
/// ```rust
/// use sigil::prelude::*;
///
/// # fn main() -> Result<(), SigilError> {
/// let generator = Generator::builder().length(16)?.build()?;
///
/// let id = generator.generate();
/// assert_eq!(id.len(), 16);
/// assert!(is_sigil(&id));
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Generator {
    pub(crate) inner: Arc<GeneratorInner>,
}

impl std::fmt::Debug for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Generator").field("length", &self.inner.length).finish()
    }
}

impl Generator {
    /// Returns a new [`GeneratorBuilder`] to configure a generator.
    #[must_use]
    pub fn builder() -> GeneratorBuilder {
        GeneratorBuilder::new()
    }

    /// Mints one identifier.
    ///
    /// The result is always exactly the configured length, starts with a
    /// lowercase letter drawn independently of the digest, and satisfies
    /// [`is_sigil`].
    #[must_use]
    pub fn generate(&self) -> String {
        self.generate_at(unix_millis())
    }

    /// Identifier length this generator was configured with.
    #[must_use]
    pub fn length(&self) -> usize {
        self.inner.length
    }

    pub(crate) fn generate_at(&self, time_ms: u64) -> String {
        let inner = &self.inner;

        let letter = random_letter(inner.random.as_ref());
        let time = digest::format_base36(time_ms);
        let count = digest::format_base36_signed(inner.counter.increment());
        let salt = create_entropy(inner.length, inner.random.as_ref());

        // time + entropy + counter + fingerprint, in exactly this order
        let mut input = String::with_capacity(
            time.len() + salt.len() + count.len() + inner.fingerprint.len(),
        );
        input.push_str(&time);
        input.push_str(&salt);
        input.push_str(&count);
        input.push_str(&inner.fingerprint);

        let mut suffix = digest::hash(&input);
        suffix.truncate(inner.length - 1);

        let mut id = String::with_capacity(inner.length);
        id.push(letter);
        id.push_str(&suffix);
        id
    }
}

fn unix_millis() -> u64 {
    SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_millis() as u64
}

static DEFAULT_GENERATOR: OnceLock<Generator> = OnceLock::new();

/// Mints an identifier from the shared default generator.
///
/// The default generator is constructed lazily exactly once, even under
/// concurrent first use; all callers share its session counter and
/// fingerprint thereafter.
#[must_use]
pub fn generate() -> String {
    DEFAULT_GENERATOR
        .get_or_init(|| {
            Generator::builder().build().expect("default generator configuration is valid")
        })
        .generate()
}

/// Checks whether `candidate` has the legal identifier shape.
///
/// True iff the candidate is a lowercase ASCII letter followed by lowercase
/// base-36 characters, with total length in `[MIN_LENGTH, MAX_LENGTH]`.
/// Stateless and side-effect-free.
#[must_use]
pub fn is_sigil(candidate: &str) -> bool {
    if !(MIN_LENGTH..=MAX_LENGTH).contains(&candidate.len()) {
        return false;
    }

    let mut chars = candidate.chars();
    let Some(first) = chars.next() else {
        return false;
    };

    first.is_ascii_lowercase()
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
}
