//! # Provenance Records
//!
//! Audit records tying a generated preview back to the exact inputs that
//! produced it. The record is emitted as a structured `tracing` event; the
//! embedding application decides where those events land (stdout, a log
//! shipper, a database sink).

use serde::{Deserialize, Serialize};
use stride_core::{ProgramId, Timestamp};

use crate::inputs::DryRunInputs;
use crate::preview::DryRunPreview;

/// One provenance entry for a generated dry-run preview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvenanceRecord {
    /// Version label of the model/rules that generated the preview.
    pub model_version: String,
    /// Fingerprint of the inputs bundle the preview was generated from.
    pub inputs_hash: String,
    /// Program the preview was scoped to.
    pub program_id: ProgramId,
    /// When the preview was generated.
    pub generated_at: Timestamp,
    /// Optional free-form operator notes.
    pub notes: Option<String>,
}

impl ProvenanceRecord {
    /// Build a provenance record for a preview and the bundle it came from.
    pub fn for_preview(
        model_version: impl Into<String>,
        inputs: &DryRunInputs,
        preview: &DryRunPreview,
        notes: Option<String>,
    ) -> Self {
        Self {
            model_version: model_version.into(),
            inputs_hash: preview.inputs_hash.clone(),
            program_id: inputs.program_id.clone(),
            generated_at: preview.generated_at,
            notes,
        }
    }

    /// Emit this record as a structured event on the `provenance` target.
    pub fn record(&self) {
        tracing::info!(
            target: "provenance",
            model_version = %self.model_version,
            inputs_hash = %self.inputs_hash,
            program_id = %self.program_id,
            generated_at = %self.generated_at,
            notes = self.notes.as_deref().unwrap_or(""),
            "dry-run preview generated"
        );
    }
}
