//! # stride-preview — Recruiting-Impact Dry-Run Preview
//!
//! Consumes the canonical inputs-hash pipeline from `stride-core` to run
//! the recruiting-impact dry run:
//!
//! - **Inputs** (`inputs.rs`): the typed bundle the preview fingerprints —
//!   program, team, horizon, roster-impact counts, runtime eligibility
//!   flags — in the camelCase wire shape shared with other services.
//!
//! - **Preview** (`preview.rs`): `run_dry_run` producing the inputs hash
//!   and the human-readable roster-impact plan.
//!
//! - **Provenance** (`provenance.rs`): audit records
//!   `{modelVersion, inputsHash, programId, generatedAt, notes}` emitted as
//!   structured `tracing` events.
//!
//! ## Crate Policy
//!
//! - Depends only on `stride-core` internally.
//! - Library-only: no HTTP, database, or CLI surface. Embedding
//!   applications own error mapping and the tracing subscriber.

pub mod inputs;
pub mod preview;
pub mod provenance;

pub use inputs::{DryRunInputs, Horizon, ImpactCounts};
pub use preview::{run_dry_run, DryRunPreview, PreviewError};
pub use provenance::ProvenanceRecord;
