//! Evidence Model - flattens uni-competencies into the evidence table.
//!
//! The evidence model is built as follows:
//! 1. **Derive**: optionally rebuild uni-competencies from the facet hierarchy
//! 2. **Flatten**: copy each uni-competency's observable names into one row
//! 3. **Label**: project the competency names as row labels
//! 4. **Check**: report observable names missing from the model's name list
//!
//! Rows keep the stored order of names. Nothing is sorted or deduplicated.

mod notation;

pub use notation::*;

use assessment_model::{ModelRoot, UniCompetencies};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, warn};

use crate::error::EvidenceResult;

/// A ragged table of observable names, one row per competency.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EvidenceTable {
    rows: Vec<Vec<String>>,
}

impl EvidenceTable {
    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get a row by index.
    pub fn row(&self, index: usize) -> Option<&[String]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// All rows in competency order.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Consume the table, returning its rows.
    pub fn into_rows(self) -> Vec<Vec<String>> {
        self.rows
    }
}

impl From<Vec<Vec<String>>> for EvidenceTable {
    fn from(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }
}

/// Flatten uni-competencies into the evidence table.
///
/// Row `c` is a copy of `uni_competencies[c]`'s observable names.
pub fn flatten(uni_competencies: &UniCompetencies) -> EvidenceTable {
    uni_competencies
        .iter()
        .map(|uni| uni.observable_names().as_slice().to_vec())
        .collect::<Vec<_>>()
        .into()
}

/// Competency names in collection order, used as the table's row labels.
pub fn competency_names(uni_competencies: &UniCompetencies) -> Vec<String> {
    uni_competencies.names().map(str::to_owned).collect()
}

/// Observable names referenced by the model but absent from its name list.
///
/// Names are reported once, in order of first reference. Empty slots are
/// not references and are skipped.
pub fn unreferenced_observables(model: &ModelRoot) -> Vec<String> {
    let known: HashSet<&str> = model.observable_names.iter().map(String::as_str).collect();
    let mut seen = HashSet::new();

    let from_facets = model
        .competencies
        .iter()
        .flat_map(|competency| competency.observable_names());
    let from_unis = model
        .uni_competencies
        .iter()
        .flat_map(|uni| uni.names());

    from_facets
        .chain(from_unis)
        .filter(|name| !name.is_empty() && !known.contains(name))
        .filter(|name| seen.insert(*name))
        .map(str::to_owned)
        .collect()
}

/// Builds evidence models from assessment models.
pub struct EvidenceModelBuilder {
    config: NotationConfig,
}

impl EvidenceModelBuilder {
    /// Create a builder with the given notation configuration.
    pub fn new(config: NotationConfig) -> Self {
        Self { config }
    }

    /// Create a builder with the default notation.
    pub fn with_defaults() -> Self {
        Self::new(NotationConfig::default())
    }

    /// The notation used for rendering.
    pub fn config(&self) -> &NotationConfig {
        &self.config
    }

    /// Build the evidence model from the model's uni-competencies.
    ///
    /// Observable names missing from `model.observable_names` are logged and
    /// otherwise ignored.
    pub fn build(&self, model: &ModelRoot) -> EvidenceModel {
        for name in unreferenced_observables(model) {
            warn!(model = %model.id, observable = %name, "observable not listed in model");
        }

        let evidence = EvidenceModel {
            labels: competency_names(&model.uni_competencies),
            table: flatten(&model.uni_competencies),
        };

        debug!(
            model = %model.id,
            rows = evidence.table.len(),
            "evidence model flattened"
        );

        evidence
    }

    /// Rebuild the uni-competencies from the facet hierarchy, then build.
    pub fn build_from_hierarchy(&self, model: &mut ModelRoot) -> EvidenceModel {
        model.rebuild_uni_competencies();
        self.build(model)
    }

    /// Build and render the model in one step.
    pub fn render(&self, model: &ModelRoot) -> String {
        self.build(model).to_notation(&self.config)
    }
}

/// The flattened evidence model: row labels plus the evidence table.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EvidenceModel {
    /// Competency names, one per row.
    pub labels: Vec<String>,

    /// Observable names per competency.
    pub table: EvidenceTable,
}

impl EvidenceModel {
    /// Pair each label with its row.
    pub fn labelled_rows(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.table.rows().iter().map(Vec::as_slice))
    }

    /// Render the table in submodel notation.
    pub fn to_notation(&self, config: &NotationConfig) -> String {
        config.render(&self.table)
    }

    /// Render the model as JSON.
    pub fn to_json(&self) -> EvidenceResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assessment_model::{Competency, Facet, UniCompetency};

    fn skating_and_running() -> UniCompetencies {
        let mut unis = UniCompetencies::new();
        unis.add(UniCompetency::from_observables("Skating", ["Obs1", "Obs2"]));
        unis.add(UniCompetency::from_observables("Running", ["Obs3"]));
        unis
    }

    #[test]
    fn test_flatten_example() {
        let unis = skating_and_running();

        let table = flatten(&unis);
        assert_eq!(
            table.rows(),
            &[vec!["Obs1".to_string(), "Obs2".to_string()], vec!["Obs3".to_string()]]
        );
        assert_eq!(competency_names(&unis), vec!["Skating", "Running"]);
    }

    #[test]
    fn test_flatten_keeps_order_and_duplicates() {
        let mut unis = UniCompetencies::new();
        unis.add(UniCompetency::from_observables("Mixed", ["Zeta", "Alpha", "Zeta"]));

        let table = flatten(&unis);
        assert_eq!(table.row(0).unwrap(), &["Zeta", "Alpha", "Zeta"]);
    }

    #[test]
    fn test_flatten_is_idempotent() {
        let unis = skating_and_running();
        assert_eq!(flatten(&unis), flatten(&unis));
    }

    #[test]
    fn test_flatten_empty() {
        let table = flatten(&UniCompetencies::new());
        assert!(table.is_empty());
        assert!(table.row(0).is_none());
    }

    #[test]
    fn test_flatten_reflects_current_contents() {
        let mut unis = skating_and_running();
        let before = flatten(&unis);

        unis.get_mut(1).unwrap().set(0, "Obs9").unwrap();

        let after = flatten(&unis);
        assert_ne!(before, after);
        assert_eq!(after.row(1).unwrap(), &["Obs9"]);
    }

    #[test]
    fn test_unreferenced_observables() {
        let mut model = ModelRoot::new();
        model.observable_names = vec!["Obs1".into()];
        model.competencies.add(
            Competency::new("Skating")
                .with_facet(Facet::from_values("Speed", vec!["Obs1".into(), "Obs2".into()])),
        );
        model
            .uni_competencies
            .add(UniCompetency::from_observables("Running", ["Obs2", "Obs3", ""]));

        assert_eq!(unreferenced_observables(&model), vec!["Obs2", "Obs3"]);
    }

    #[test]
    fn test_builder_builds_labels_and_rows() {
        let mut model = ModelRoot::new();
        model.uni_competencies = skating_and_running();

        let evidence = EvidenceModelBuilder::with_defaults().build(&model);

        let rows: Vec<_> = evidence.labelled_rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].0, "Skating");
        assert_eq!(rows[1].1, &["Obs3".to_string()]);
    }

    #[test]
    fn test_build_from_hierarchy() {
        let mut model = ModelRoot::new();
        model.competencies.add(
            Competency::new("Persistence")
                .with_facet(Facet::from_values("Effort", vec!["Attempts".into()]))
                .with_facet(Facet::from_values("Time", vec!["Duration".into()])),
        );

        let evidence = EvidenceModelBuilder::with_defaults().build_from_hierarchy(&mut model);

        assert_eq!(evidence.labels, vec!["Persistence"]);
        assert_eq!(evidence.table.row(0).unwrap(), &["Attempts", "Duration"]);
        assert_eq!(model.uni_competencies.len(), 1);
    }

    #[test]
    fn test_render_default_notation() {
        let mut model = ModelRoot::new();
        model.uni_competencies = skating_and_running();

        let rendered = EvidenceModelBuilder::with_defaults().render(&model);
        assert_eq!(rendered, "Statistical Submodel = Obs1, Obs2 : Obs3");
    }

    #[test]
    fn test_to_json() {
        let mut model = ModelRoot::new();
        model.uni_competencies = skating_and_running();

        let json = EvidenceModelBuilder::with_defaults()
            .build(&model)
            .to_json()
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["labels"], serde_json::json!(["Skating", "Running"]));
        assert_eq!(value["table"], serde_json::json!([["Obs1", "Obs2"], ["Obs3"]]));
    }
}
