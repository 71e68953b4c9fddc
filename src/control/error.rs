//! Error types for the sum types.
//!
//! Variant dispatch is exhaustive at compile time, so the only invariant
//! failure left to report is [`Either::catch_and_flatten`] receiving a nested
//! `Left` it refuses to merge.
//!
//! [`Either::catch_and_flatten`]: super::Either::catch_and_flatten

/// Represents an operation that received an [`Either`](super::Either) of the
/// wrong variant.
///
/// This is a fatal condition: it is raised with [`std::panic::panic_any`] so
/// that it can be recovered by downcasting the panic payload, but it is never
/// returned as a value.
///
/// # Examples
///
/// ```rust
/// use effectus::control::IllegalVariantError;
///
/// let error = IllegalVariantError::new("catch_and_flatten");
/// assert_eq!(
///     format!("{}", error),
///     "IllegalVariantError: 'catch_and_flatten' produced an Either that was not of the expected variant"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IllegalVariantError {
    /// The name of the operation where the error occurred.
    pub operation: &'static str,
}

impl IllegalVariantError {
    /// Creates an error naming the failing operation.
    #[inline]
    pub const fn new(operation: &'static str) -> Self {
        Self { operation }
    }
}

impl std::fmt::Display for IllegalVariantError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "IllegalVariantError: '{}' produced an Either that was not of the expected variant",
            self.operation
        )
    }
}

impl std::error::Error for IllegalVariantError {}
