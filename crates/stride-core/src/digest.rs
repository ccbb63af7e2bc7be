//! # Content Digest — Inputs-Hash Computation
//!
//! Defines `ContentDigest` and `DigestAlgorithm`, and the [`inputs_hash`]
//! entry point that turns a JSON payload into its content-addressed
//! fingerprint for idempotency and provenance tracking.
//!
//! ## Determinism Invariant
//!
//! `ContentDigest` can only be computed from `CanonicalBytes`, so every
//! digest in the system flows through the canonicalization pipeline. This is
//! enforced by the signature of [`sha256_digest`].

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};

use crate::canonical::CanonicalBytes;
use crate::error::CanonicalizationError;

/// The hash algorithm used to produce a content digest.
///
/// SHA-256 is the only algorithm in use; commitment structures still carry
/// the tag so stored digests remain self-describing if the algorithm ever
/// rotates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DigestAlgorithm {
    /// SHA-256 — standard content addressing.
    Sha256,
}

impl DigestAlgorithm {
    /// Returns the algorithm identifier string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sha256 => "sha256",
        }
    }
}

impl std::fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A content-addressed digest with its algorithm tag.
///
/// Produced exclusively from `CanonicalBytes` via [`sha256_digest`]. The
/// 32-byte digest and algorithm tag together form a self-describing content
/// identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentDigest {
    /// The hash algorithm that produced this digest.
    pub algorithm: DigestAlgorithm,
    /// The raw 32-byte digest value.
    pub bytes: [u8; 32],
}

impl ContentDigest {
    /// Create a new content digest from raw bytes and algorithm.
    ///
    /// Prefer [`sha256_digest`] for constructing digests from
    /// `CanonicalBytes`.
    pub fn new(algorithm: DigestAlgorithm, bytes: [u8; 32]) -> Self {
        Self { algorithm, bytes }
    }

    /// Render the digest as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        self.bytes.iter().map(|b| format!("{b:02x}")).collect()
    }
}

impl std::fmt::Display for ContentDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.algorithm, self.to_hex())
    }
}

/// Compute a SHA-256 content digest from canonical bytes.
///
/// Accepts only `&CanonicalBytes`, not raw `&[u8]`, so no code path can
/// hash bytes that skipped canonicalization.
pub fn sha256_digest(data: &CanonicalBytes) -> ContentDigest {
    let hash = Sha256::digest(data.as_bytes());
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&hash);
    ContentDigest::new(DigestAlgorithm::Sha256, bytes)
}

/// Compute a SHA-256 lowercase hex string from canonical bytes.
///
/// Convenience wrapper around [`sha256_digest`] for contexts that store the
/// digest as a string field (inputs hashes, provenance records).
pub fn sha256_hex(data: &CanonicalBytes) -> String {
    sha256_digest(data).to_hex()
}

/// Compute the inputs hash of a JSON payload.
///
/// The full pipeline: canonicalize (sorted keys, preserved array order),
/// serialize as RFC 8785 text, hash the UTF-8 bytes with SHA-256, render
/// lowercase hex. Pure and stateless — safe to call concurrently, and two
/// deep-equal payloads always produce the same digest no matter how their
/// objects were assembled.
///
/// # Errors
///
/// Returns [`CanonicalizationError`] if the payload nests deeper than the
/// canonicalization limit.
pub fn inputs_hash(payload: &Value) -> Result<String, CanonicalizationError> {
    let canonical = CanonicalBytes::from_value(payload)?;
    Ok(sha256_hex(&canonical))
}
