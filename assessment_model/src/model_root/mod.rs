//! The model root - one process-scoped aggregate of the whole assessment model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::competencies::{derive_uni_competencies, Competencies, UniCompetencies};
use crate::error::ModelResult;
use crate::observables::{allocate_observables, Observables};

/// Identifier for a model root instance, used to tag diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModelId(pub Uuid);

impl ModelId {
    /// Create a new random model ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a nil model ID.
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }
}

impl Default for ModelId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ModelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Observable names, hierarchical competencies and flat uni-competencies.
///
/// `observable_names` is advisory: nothing ties it to the names referenced
/// by the competency collections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelRoot {
    /// Instance identifier. Not part of the wire form.
    #[serde(skip)]
    pub id: ModelId,

    /// Observable names in use.
    #[serde(rename = "ObservableNames", default)]
    pub observable_names: Vec<String>,

    /// Competencies with their facets.
    #[serde(rename = "Competencies", default)]
    pub competencies: Competencies,

    /// Competencies mapped directly to observables.
    #[serde(rename = "UniCompetencies", default)]
    pub uni_competencies: UniCompetencies,
}

impl ModelRoot {
    /// Create an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a model from its JSON form. A fresh [`ModelId`] is assigned.
    pub fn from_json(json: &str) -> ModelResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Render the full model state as JSON.
    pub fn to_json(&self) -> ModelResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Render the full model state as indented JSON.
    pub fn to_json_pretty(&self) -> ModelResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Replace the flat collection with one derived from the competencies.
    pub fn rebuild_uni_competencies(&mut self) {
        self.uni_competencies = derive_uni_competencies(&self.competencies);
    }

    /// Allocate a value buffer of `capacity` slots for every observable name.
    pub fn allocate_observables(&self, capacity: usize) -> Observables {
        allocate_observables(self.observable_names.iter().map(String::as_str), capacity)
    }
}

impl PartialEq for ModelRoot {
    fn eq(&self, other: &Self) -> bool {
        self.observable_names == other.observable_names
            && self.competencies == other.competencies
            && self.uni_competencies == other.uni_competencies
    }
}
