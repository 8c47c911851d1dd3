//! Digest mixer: a 512-bit hash over the mixed input, re-rendered as a
//! base-36 integer.

use crate::entropy::BASE36_ALPHABET;
use sha2::{Digest, Sha512};

/// Hashes `input` and renders the 512-bit digest as a base-36 integer with
/// the leading digit stripped.
///
/// The stripped digit decouples the result from the most significant (and
/// least uniformly distributed) position of the big-integer rendering. The
/// result length tracks the digest's numeric magnitude; callers must only
/// ever consume a prefix, and the longest prefix consumed anywhere in this
/// crate (31 characters) sits well below the minimum realistic digest
/// length of ~97 characters.
pub(crate) fn hash(input: &str) -> String {
    let digest = Sha512::digest(input.as_bytes());
    let encoded = digest_to_base36(digest.as_ref());
    encoded.get(1..).unwrap_or_default().to_owned()
}

/// Renders a big-endian byte string as a base-36 integer, lowercase digits.
///
/// A 512-bit digest does not fit any machine word, so the conversion runs
/// schoolbook short division of the byte string by 36, collecting
/// remainders from least to most significant. `head` tracks the leading
/// zero bytes of the shrinking quotient so each pass touches less of the
/// buffer.
fn digest_to_base36(bytes: &[u8]) -> String {
    let mut scratch = bytes.to_vec();
    let mut digits = Vec::with_capacity(bytes.len() * 8 / 5 + 1);
    let mut head = 0;

    while head < scratch.len() {
        let mut remainder: u32 = 0;
        for byte in &mut scratch[head..] {
            let acc = (remainder << 8) | u32::from(*byte);
            *byte = (acc / 36) as u8;
            remainder = acc % 36;
        }
        digits.push(BASE36_ALPHABET[remainder as usize]);
        while head < scratch.len() && scratch[head] == 0 {
            head += 1;
        }
    }

    if digits.is_empty() {
        digits.push(BASE36_ALPHABET[0]);
    }
    digits.reverse();
    digits.into_iter().map(char::from).collect()
}

/// Formats `value` in lowercase base-36.
pub(crate) fn format_base36(value: u64) -> String {
    if value == 0 {
        return "0".to_owned();
    }
    // 36^13 > 2^64, so 13 digits always suffice.
    let mut digits = [0u8; 13];
    let mut cursor = digits.len();
    let mut rest = value;
    while rest > 0 {
        cursor -= 1;
        digits[cursor] = BASE36_ALPHABET[(rest % 36) as usize];
        rest /= 36;
    }
    digits[cursor..].iter().copied().map(char::from).collect()
}

/// Formats a signed value as an optional `-` sign plus base-36 magnitude.
///
/// The default session counter never runs negative, but a substituted
/// counter may; the encoding only feeds the hash input.
pub(crate) fn format_base36_signed(value: i64) -> String {
    if value < 0 {
        format!("-{}", format_base36(value.unsigned_abs()))
    } else {
        format_base36(value as u64)
    }
}
