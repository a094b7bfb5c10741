//! Persisted editor record: `{ wall, objects, unit }`.
//!
//! Selection and drag state are session-only and never written. The host owns
//! where the JSON goes (browser storage under [`STORAGE_KEY`], a file, ...);
//! this module only encodes it and validates it on the way back in.
//!
//! [`STORAGE_KEY`]: crate::consts::STORAGE_KEY

#[cfg(test)]
#[path = "persist_test.rs"]
mod persist_test;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::doc::{Wall, WallObject, is_positive_length};
use crate::units::Unit;

/// Error returned by [`Snapshot::from_json`] and [`Snapshot::to_json`].
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("malformed snapshot: {0}")]
    Json(#[from] serde_json::Error),
    #[error("snapshot wall has invalid dimensions: {width} x {height}")]
    InvalidWall { width: f64, height: f64 },
    #[error("snapshot object {0} has invalid dimensions")]
    InvalidObject(Uuid),
    /// Two objects, or two nails, share an id.
    #[error("duplicate id in snapshot: {0}")]
    DuplicateId(Uuid),
}

/// Everything that survives a reload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub wall: Wall,
    #[serde(default)]
    pub objects: Vec<WallObject>,
    #[serde(default)]
    pub unit: Unit,
}

impl Snapshot {
    /// Encode as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`PersistError::Json`] if serialization fails (non-string map
    /// keys cannot occur here, so in practice this does not fail).
    pub fn to_json(&self) -> Result<String, PersistError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode and validate a JSON snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`PersistError::Json`] for malformed input,
    /// [`PersistError::InvalidWall`] / [`PersistError::InvalidObject`] for
    /// non-positive dimensions, and [`PersistError::DuplicateId`] when ids
    /// repeat.
    pub fn from_json(text: &str) -> Result<Self, PersistError> {
        let snapshot: Self = serde_json::from_str(text)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Check the invariants a loaded snapshot must satisfy.
    ///
    /// # Errors
    ///
    /// See [`Snapshot::from_json`].
    pub fn validate(&self) -> Result<(), PersistError> {
        if !self.wall.is_valid() {
            return Err(PersistError::InvalidWall { width: self.wall.width, height: self.wall.height });
        }

        let mut seen = HashSet::new();
        for obj in &self.objects {
            if !(is_positive_length(obj.width) && is_positive_length(obj.height)) {
                return Err(PersistError::InvalidObject(obj.id));
            }
            if !seen.insert(obj.id) {
                return Err(PersistError::DuplicateId(obj.id));
            }
            for nail in &obj.nails {
                if !seen.insert(nail.id) {
                    return Err(PersistError::DuplicateId(nail.id));
                }
            }
        }
        Ok(())
    }
}
