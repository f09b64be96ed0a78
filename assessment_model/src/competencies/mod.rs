//! Competency definitions - the hierarchical form of the assessment model.
//!
//! A competency is split into facets, and each facet lists the observables
//! that evidence it. [`UniCompetency`] is the flat form without facets.

mod uni;

pub use uni::*;

use serde::{Deserialize, Serialize};

use crate::collections::{Named, NamedArray, NamedCollection};

/// One facet of a competency: a fixed list of observable names.
pub type Facet = NamedArray<String>;

/// A named, ordered collection of facets.
///
/// Facet names are not required to be unique. Facets are owned by exactly
/// one competency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Competency {
    #[serde(rename = "CompetencyName")]
    name: String,

    #[serde(rename = "Facets")]
    pub facets: NamedCollection<Facet>,
}

impl Competency {
    /// Create a competency with no facets.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            facets: NamedCollection::new(),
        }
    }

    /// Add a facet, builder style.
    pub fn with_facet(mut self, facet: Facet) -> Self {
        self.facets.add(facet);
        self
    }

    /// The competency's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Every observable name across all facets, in facet then slot order.
    pub fn observable_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.facets.iter().flat_map(|facet| facet.names())
    }

    /// Total number of observable slots across all facets.
    pub fn observable_count(&self) -> usize {
        self.facets.iter().map(NamedArray::len).sum()
    }
}

impl Named for Competency {
    fn name(&self) -> &str {
        &self.name
    }
}

/// The hierarchical competency collection.
pub type Competencies = NamedCollection<Competency>;
