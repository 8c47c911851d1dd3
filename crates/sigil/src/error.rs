//! # Generator Errors
//!
//! This module defines the [`SigilError`] enum returned by the generator
//! builder when a configuration option is invalid.

use std::borrow::Cow;

/// A specialized [`SigilError`] enum for configuration failures.
///
/// `generate` itself never errors: it is a pure computation over
/// already-validated configuration. An unavailable OS entropy source is a
/// fatal condition and panics instead of degrading (see
/// [`OsRandom`](crate::OsRandom)).
#[derive(Debug, thiserror::Error)]
pub enum SigilError {
    /// Requested identifier length is outside the supported range.
    #[error("Invalid length{}: {message}", format_context(.context))]
    InvalidLength { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A substituted randomness source produced a sample outside `[0, 1)`.
    #[error("Invalid randomness source{}: {message}", format_context(.context))]
    InvalidRandomSource { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}
