//! Randomness plumbing: the [`RandomSource`] capability, the default
//! OS-backed source, and the base-36 entropy encoder.

use getrandom::fill;

/// Mantissa width of an `f64`; the default source emits exactly this much
/// entropy per draw.
const F64_MANTISSA_BITS: u32 = 53;

/// Base-36 digit alphabet shared by the entropy encoder and digest mixer.
pub(crate) const BASE36_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

const LETTERS: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// A capability producing uniformly distributed `f64` values in `[0, 1)`.
///
/// The generator validates substituted sources by sampling once at
/// registration and rejecting out-of-range samples. Thread safety of a
/// custom source is the implementer's responsibility to document;
/// [`OsRandom`] is safe for concurrent use.
///
/// Any `Fn() -> f64 + Send + Sync` closure is a `RandomSource`:
///
/// ```rust
/// use sigil::Generator;
/// # fn main() -> Result<(), sigil::SigilError> {
/// let generator = Generator::builder().random_source(|| 0.5)?.build()?;
/// # Ok(())
/// # }
/// ```
pub trait RandomSource: Send + Sync {
    /// Returns the next uniformly distributed value in `[0, 1)`.
    fn next_f64(&self) -> f64;
}

impl<F> RandomSource for F
where
    F: Fn() -> f64 + Send + Sync,
{
    fn next_f64(&self) -> f64 {
        self()
    }
}

/// Default randomness source backed by the operating system CSPRNG.
///
/// Each draw takes a uniformly random integer in `[0, 2^53)` and scales it
/// into `[0, 1)`, preserving the full mantissa precision of an `f64`.
///
/// # Panics
/// Panics if the OS entropy source is unavailable. Falling back to a weaker
/// source would silently void the collision-resistance contract, so the
/// failure is fatal.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn next_f64(&self) -> f64 {
        let mut bytes = [0u8; 8];
        fill(&mut bytes).expect("System RNG unavailable for identifier entropy");
        let mantissa = u64::from_le_bytes(bytes) >> (64 - F64_MANTISSA_BITS);
        mantissa as f64 / (1u64 << F64_MANTISSA_BITS) as f64
    }
}

/// Builds a run of `length` random base-36 characters.
///
/// Each character is drawn as `floor(r * 36)`. The accumulator is pre-sized
/// so the loop never reallocates; a zero `length` yields an empty string.
pub(crate) fn create_entropy(length: usize, source: &dyn RandomSource) -> String {
    let mut entropy = String::with_capacity(length);
    while entropy.len() < length {
        let digit = (source.next_f64() * 36.0).floor() as usize;
        entropy.push(char::from(BASE36_ALPHABET[digit.min(35)]));
    }
    entropy
}

/// Picks the mandatory leading letter: `floor(r * 26)` into `a-z`.
pub(crate) fn random_letter(source: &dyn RandomSource) -> char {
    let index = (source.next_f64() * 26.0).floor() as usize;
    char::from(LETTERS[index.min(25)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn os_random_stays_in_unit_interval() {
        let source = OsRandom;
        for _ in 0..10_000 {
            let value = source.next_f64();
            assert!((0.0..1.0).contains(&value), "sample out of range: {value}");
        }
    }

    #[test]
    fn os_random_varies_between_draws() {
        let source = OsRandom;
        let first = source.next_f64();
        let distinct = (0..64).any(|_| source.next_f64() != first);
        assert!(distinct, "64 consecutive draws returned the same value");
    }

    #[test]
    fn entropy_has_requested_length_and_charset() {
        for length in [0, 1, 2, 16, 32] {
            let entropy = create_entropy(length, &OsRandom);
            assert_eq!(entropy.len(), length);
            assert!(entropy.bytes().all(|b| BASE36_ALPHABET.contains(&b)));
        }
    }

    #[test]
    fn constant_source_yields_constant_digits() {
        // floor(0.1 * 36) = 3
        let entropy = create_entropy(10, &|| 0.1);
        assert_eq!(entropy, "3333333333");
    }

    #[test]
    fn letter_covers_alphabet_bounds() {
        assert_eq!(random_letter(&|| 0.0), 'a');
        assert_eq!(random_letter(&|| 0.1), 'c');
        assert_eq!(random_letter(&|| 0.999_999), 'z');
    }
}
