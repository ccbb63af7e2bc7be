//! # Dry-Run Preview
//!
//! Runs the recruiting-impact dry run over an inputs bundle: fingerprints
//! the bundle and assembles the human-readable roster-impact plan returned
//! to the caller alongside the hash.

use serde::{Deserialize, Serialize};
use stride_core::{CanonicalizationError, Timestamp};
use thiserror::Error;

use crate::inputs::DryRunInputs;

/// Failure while producing a dry-run preview.
///
/// A hashing failure aborts the preview; there is no degraded
/// hash-less report.
#[derive(Error, Debug)]
pub enum PreviewError {
    /// The inputs bundle could not be fingerprinted.
    #[error("inputs hash failed: {0}")]
    Hash(#[from] CanonicalizationError),
}

/// The result of one dry run: the fingerprint of what went in, when it ran,
/// and the plan lines for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DryRunPreview {
    /// Content-addressed fingerprint of the inputs bundle.
    pub inputs_hash: String,
    /// When the preview was generated.
    pub generated_at: Timestamp,
    /// Human-readable roster-impact plan.
    pub plan: Vec<String>,
}

/// Run the dry-run preview over an inputs bundle.
///
/// Pure apart from reading the clock for `generated_at`: the same bundle
/// always produces the same `inputs_hash` and the same plan lines.
pub fn run_dry_run(inputs: &DryRunInputs) -> Result<DryRunPreview, PreviewError> {
    let inputs_hash = inputs.inputs_hash()?;

    let mut plan = Vec::with_capacity(3 + inputs.runtime.len());
    plan.push(format!(
        "{} {}: roster impact over horizon {}",
        inputs.program_id, inputs.team_id, inputs.horizon
    ));
    plan.push(format!("projected absences: {}", inputs.counts.absences));
    plan.push(format!("projected recruits: {}", inputs.counts.recruits));
    for (flag, active) in &inputs.runtime {
        plan.push(format!(
            "runtime flag {flag}: {}",
            if *active { "set" } else { "clear" }
        ));
    }

    Ok(DryRunPreview {
        inputs_hash,
        generated_at: Timestamp::now(),
        plan,
    })
}
