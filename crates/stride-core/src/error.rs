//! # Error Types
//!
//! Error enums for the Stride core crate. All errors use `thiserror` for
//! derive-based `Display` and `Error` implementations, and are returned
//! synchronously to the immediate caller — nothing here retries or recovers
//! internally.

use thiserror::Error;

/// Error during canonical serialization.
///
/// Both variants are "invalid input" failures: the value handed to the
/// canonicalization pipeline cannot be rendered as canonical JSON. There are
/// no retryable or partial-failure cases.
#[derive(Error, Debug)]
pub enum CanonicalizationError {
    /// Nesting deeper than [`MAX_CANONICAL_DEPTH`](crate::canonical::MAX_CANONICAL_DEPTH).
    /// Raised before recursion can exhaust the thread stack on hostile input.
    #[error("nesting depth {depth} exceeds canonicalization limit {limit}")]
    DepthExceeded {
        /// Depth at which traversal stopped.
        depth: usize,
        /// The configured limit.
        limit: usize,
    },

    /// A non-finite number (`NaN` or an infinity) was found in the value.
    /// JSON has no representation for these; they are rejected outright
    /// rather than degraded to `null`.
    #[error("non-finite number is not representable as canonical JSON: {0}")]
    NonFinite(f64),

    /// The value is not representable as canonical JSON for any other
    /// reason (maps with non-string keys, serializer rejection).
    #[error("value is not representable as canonical JSON: {0}")]
    Unrepresentable(#[from] serde_json::Error),
}

/// Validation failure when constructing a domain primitive.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// A string identifier was empty or whitespace-only.
    #[error("{kind} identifier must be non-empty")]
    EmptyIdentifier {
        /// Which identifier kind was being constructed.
        kind: &'static str,
    },

    /// A timestamp used an explicit offset instead of the `Z` suffix.
    #[error("timestamp must use Z suffix (UTC only), got: {0:?}")]
    NonUtcTimestamp(String),

    /// A timestamp string was not valid RFC 3339.
    #[error("invalid RFC 3339 timestamp {input:?}: {source}")]
    MalformedTimestamp {
        /// The rejected input.
        input: String,
        /// The underlying parse failure.
        #[source]
        source: chrono::ParseError,
    },
}
