//! # Domain Identity Newtypes
//!
//! Newtype wrappers for the identifiers that travel through hashed payloads
//! and provenance records. You cannot pass a `TeamId` where a `ProgramId`
//! is expected, so an identifier swapped between namespaces is a compile
//! error rather than a wrong-but-valid hash.
//!
//! Program and team ids originate in the upstream roster database and are
//! opaque strings there, so they are validated string newtypes here rather
//! than UUIDs. Athlete ids are minted by this stack and use UUID v4.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

/// Identifier for an athletics program (a school's XC/track program).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProgramId(String);

/// Identifier for a team roster within a program.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(String);

/// Unique identifier for an athlete profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AthleteId(pub Uuid);

impl ProgramId {
    /// Construct a program id, rejecting empty or whitespace-only input.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::EmptyIdentifier { kind: "program" });
        }
        Ok(Self(id))
    }

    /// Access the inner identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TeamId {
    /// Construct a team id, rejecting empty or whitespace-only input.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::EmptyIdentifier { kind: "team" });
        }
        Ok(Self(id))
    }

    /// Access the inner identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AthleteId {
    /// Generate a new random athlete identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for AthleteId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ProgramId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "program:{}", self.0)
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "team:{}", self.0)
    }
}

impl std::fmt::Display for AthleteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "athlete:{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_program_id_accepts_nonempty() {
        let id = ProgramId::new("p1").unwrap();
        assert_eq!(id.as_str(), "p1");
        assert_eq!(id.to_string(), "program:p1");
    }

    #[test]
    fn test_program_id_rejects_empty() {
        assert!(ProgramId::new("").is_err());
        assert!(ProgramId::new("   ").is_err());
    }

    #[test]
    fn test_team_id_rejects_empty() {
        assert!(TeamId::new("").is_err());
    }

    #[test]
    fn test_ids_serialize_transparently() {
        let id = ProgramId::new("p1").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""p1""#);
        let back: ProgramId = serde_json::from_str(r#""p1""#).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_athlete_ids_unique() {
        assert_ne!(AthleteId::new(), AthleteId::new());
    }
}
