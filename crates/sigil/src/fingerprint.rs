//! Host/process fingerprinting for collision resistance across
//! independently started generators.

use crate::MAX_LENGTH;
use crate::digest;
use crate::entropy::{RandomSource, create_entropy};
use std::env;

/// Derives the per-generator fingerprint.
///
/// 32 characters of fresh entropy are concatenated with the deterministic
/// environment signature (when non-empty) and hashed; the digest's leading
/// character is stripped so the fingerprint shape stays decorrelated from
/// the identifier's leading-letter convention. The result is deterministic
/// for a fixed entropy input and environment-name set; different generator
/// instances normally differ because the entropy differs.
pub(crate) fn create_fingerprint(source: &dyn RandomSource, env_signature: &str) -> String {
    let mut source_string = create_entropy(MAX_LENGTH, source);
    if !env_signature.is_empty() {
        source_string.push_str(env_signature);
    }

    let hashed = digest::hash(&source_string);
    hashed.get(1..).unwrap_or_default().to_owned()
}

/// Concatenates the sorted names of all environment variables.
///
/// Values are discarded: they routinely hold secrets. Names are sorted
/// lexicographically before concatenation so the signature is stable across
/// platforms and process-start enumeration orders. On minimal or
/// containerized hosts the name set may be small and regular; the entropy
/// half of the fingerprint carries the uniqueness either way.
pub(crate) fn environment_signature() -> String {
    let mut keys: Vec<String> =
        env::vars_os().map(|(key, _)| key.to_string_lossy().into_owned()).collect();
    keys.sort_unstable();
    keys.concat()
}
