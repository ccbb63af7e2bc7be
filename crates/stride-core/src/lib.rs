//! # stride-core — Foundational Types for the Stride Athletics Stack
//!
//! The bedrock crate of the Stride stack: canonical JSON serialization and
//! the content-addressed "inputs hash" primitive used for idempotency and
//! provenance, plus the identifier and timestamp newtypes that travel
//! through hashed payloads. Every other crate in the workspace depends on
//! `stride-core`; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **One canonicalization path.** ALL digest computation flows through
//!    [`CanonicalBytes`]. No raw `serde_json::to_vec()` for digests. Ever.
//!    Two deep-equal payloads must hash identically no matter how their
//!    objects were built, and array order stays exactly as the caller wrote
//!    it.
//!
//! 2. **[`sha256_digest`] accepts only `&CanonicalBytes`.** Compile-time
//!    enforcement that every digest path flows through canonicalization.
//!
//! 3. **Newtype wrappers for domain primitives.** [`ProgramId`], [`TeamId`],
//!    [`AthleteId`] — no bare strings for identifiers.
//!
//! 4. **UTC-only timestamps.** [`Timestamp`] enforces UTC with `Z` suffix
//!    and seconds precision, so an instant has one canonical text form.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `stride-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod canonical;
pub mod digest;
pub mod error;
pub mod identity;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use canonical::{canonicalize, stable_stringify, CanonicalBytes, MAX_CANONICAL_DEPTH};
pub use digest::{inputs_hash, sha256_digest, sha256_hex, ContentDigest, DigestAlgorithm};
pub use error::{CanonicalizationError, ValidationError};
pub use identity::{AthleteId, ProgramId, TeamId};
pub use temporal::Timestamp;
