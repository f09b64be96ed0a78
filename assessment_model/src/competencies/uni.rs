//! Uni-competencies - competencies mapped directly to observable names.

use serde::{Deserialize, Serialize};

use super::Competency;
use crate::collections::{Named, NamedArray, NamedCollection};
use crate::error::{ModelError, ModelResult};

/// A competency flattened to one list of observable names, with no facets.
///
/// The observable array carries the competency's name and has a fixed size.
/// Slots can be overwritten but the array itself cannot be replaced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "UniCompetencyRepr", into = "UniCompetencyRepr")]
pub struct UniCompetency {
    observable_names: NamedArray<String>,
}

impl UniCompetency {
    /// Create a uni-competency with `size` empty observable slots.
    pub fn new(name: impl Into<String>, size: usize) -> Self {
        Self {
            observable_names: NamedArray::new(name, size),
        }
    }

    /// Create a uni-competency from a signed slot count.
    pub fn try_new(name: impl Into<String>, size: i64) -> ModelResult<Self> {
        Ok(Self {
            observable_names: NamedArray::try_new(name, size)?,
        })
    }

    /// Create a uni-competency holding exactly `observables`.
    pub fn from_observables<I, S>(name: impl Into<String>, observables: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values = observables.into_iter().map(Into::into).collect();
        Self {
            observable_names: NamedArray::from_values(name, values),
        }
    }

    /// Flatten a hierarchical competency: facets in order, then slots in order.
    ///
    /// Observable names repeated across facets are kept.
    pub fn from_competency(competency: &Competency) -> Self {
        Self::from_observables(competency.name(), competency.observable_names())
    }

    /// The competency's name.
    pub fn name(&self) -> &str {
        self.observable_names.name()
    }

    /// The fixed-size array of observable names.
    pub fn observable_names(&self) -> &NamedArray<String> {
        &self.observable_names
    }

    /// Overwrite the observable name in slot `index`.
    pub fn set(&mut self, index: usize, observable: impl Into<String>) -> ModelResult<()> {
        self.observable_names.set(index, observable.into())
    }

    /// The observable names in stored order.
    pub fn names(&self) -> impl Iterator<Item = &str> + Clone + '_ {
        self.observable_names.names()
    }
}

impl Named for UniCompetency {
    fn name(&self) -> &str {
        self.observable_names.name()
    }
}

/// The flat competency collection consumed by evidence model builders.
pub type UniCompetencies = NamedCollection<UniCompetency>;

/// Derive the flat collection from the hierarchical one, preserving order.
pub fn derive_uni_competencies(competencies: &NamedCollection<Competency>) -> UniCompetencies {
    competencies.iter().map(UniCompetency::from_competency).collect()
}

#[derive(Clone, Serialize, Deserialize)]
struct UniCompetencyRepr {
    #[serde(rename = "CompetencyName")]
    name: String,

    #[serde(rename = "Observables")]
    observables: Vec<String>,
}

impl From<UniCompetencyRepr> for UniCompetency {
    fn from(repr: UniCompetencyRepr) -> Self {
        Self::from_observables(repr.name, repr.observables)
    }
}

impl From<UniCompetency> for UniCompetencyRepr {
    fn from(uni: UniCompetency) -> Self {
        Self {
            name: uni.name().to_string(),
            observables: uni.observable_names.as_slice().to_vec(),
        }
    }
}
