//! Submodel notation - the text form of an evidence table.
//!
//! Groups are separated by colons and names within a group by commas:
//! `Statistical Submodel = Obs1, Obs2 : Obs3`.

use serde::{Deserialize, Serialize};

use super::EvidenceTable;
use crate::error::EvidenceResult;

/// Configuration for rendering evidence tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotationConfig {
    /// Text before the assignment.
    pub header: String,

    /// Text between the header and the first group.
    pub assignment: String,

    /// Text between groups (one group per competency).
    pub group_separator: String,

    /// Text between observable names within a group.
    pub name_separator: String,
}

impl Default for NotationConfig {
    fn default() -> Self {
        Self {
            header: "Statistical Submodel".to_string(),
            assignment: " = ".to_string(),
            group_separator: " : ".to_string(),
            name_separator: ", ".to_string(),
        }
    }
}

impl NotationConfig {
    /// Parse a configuration from TOML. Missing keys keep their defaults.
    pub fn from_toml_str(source: &str) -> EvidenceResult<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Render only the groups, without header or assignment.
    pub fn render_groups(&self, table: &EvidenceTable) -> String {
        table
            .rows()
            .iter()
            .map(|row| row.join(self.name_separator.as_str()))
            .collect::<Vec<_>>()
            .join(self.group_separator.as_str())
    }

    /// Render the full submodel line.
    pub fn render(&self, table: &EvidenceTable) -> String {
        format!(
            "{}{}{}",
            self.header,
            self.assignment,
            self.render_groups(table)
        )
    }
}
