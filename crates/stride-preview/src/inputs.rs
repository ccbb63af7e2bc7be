//! # Dry-Run Inputs Bundle
//!
//! The typed payload the recruiting-impact dry run fingerprints: program,
//! team, horizon, projected roster-impact counts, and the runtime
//! eligibility flags in effect when the preview ran. The serialized shape
//! uses camelCase keys — the same wire shape the rest of the product speaks
//! — so the inputs hash agrees with hashes computed by other services over
//! the same bundle.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use stride_core::{
    sha256_hex, CanonicalBytes, CanonicalizationError, ProgramId, TeamId, ValidationError,
};

/// A planning horizon label (e.g. `"H1"` for the nearest season window).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Horizon(String);

impl Horizon {
    /// Construct a horizon label, rejecting empty input.
    pub fn new(label: impl Into<String>) -> Result<Self, ValidationError> {
        let label = label.into();
        if label.trim().is_empty() {
            return Err(ValidationError::EmptyIdentifier { kind: "horizon" });
        }
        Ok(Self(label))
    }

    /// Access the inner label.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Horizon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Projected roster-impact counts over the horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpactCounts {
    /// Expected athlete absences (injury, transfer out, graduation).
    pub absences: u32,
    /// Expected incoming recruits.
    pub recruits: u32,
}

/// The full inputs bundle for one dry-run preview.
///
/// Runtime eligibility flags are an ordered map so the bundle serializes
/// deterministically regardless of how the caller assembled it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DryRunInputs {
    /// Program the preview is scoped to.
    pub program_id: ProgramId,
    /// Team roster under evaluation.
    pub team_id: TeamId,
    /// Planning horizon.
    pub horizon: Horizon,
    /// Projected roster-impact counts.
    pub counts: ImpactCounts,
    /// Runtime eligibility flags in effect at preview time.
    pub runtime: BTreeMap<String, bool>,
}

impl DryRunInputs {
    /// Compute the content-addressed fingerprint of this bundle.
    ///
    /// Deep-equal bundles hash identically however their fields and flag
    /// maps were assembled; any changed value or reordered sequence yields
    /// a different digest.
    pub fn inputs_hash(&self) -> Result<String, CanonicalizationError> {
        let canonical = CanonicalBytes::new(self)?;
        Ok(sha256_hex(&canonical))
    }
}
