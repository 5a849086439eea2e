//! External collaborators: credentials and scenario fixture records

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::board::{Column, Project};
use crate::error::E2eResult;

/// Login credentials, injected explicitly rather than read from a global.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Load credentials from a JSON file.
    pub fn from_file(path: &Path) -> E2eResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// One expected card for a project/column pair.
///
/// Each record drives exactly one scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioFixture {
    pub column: Column,
    pub project_type: Project,
    pub text: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ScenarioFixture {
    /// Parse fixture records from a JSON array.
    pub fn from_json(json: &str) -> E2eResult<Vec<Self>> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load all fixture records from a JSON file.
    pub fn load_all(path: &Path) -> E2eResult<Vec<Self>> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Human-readable scenario name, used for logging and results.
    pub fn scenario_name(&self) -> String {
        format!(
            "{} / {} / {}",
            self.project_type.display_name(),
            self.column.display_name(),
            self.text
        )
    }
}
