//! Structured form of a BOM descriptor as produced by a `ModelProvider`.

use super::DependencyKey;
use crate::shared::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The effective model of a descriptor
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependency_management: Option<Vec<ModelDependency>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<Vec<ModelDependency>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, String>>,
}

impl Model {
    /// `group:artifact:version` of the descriptor itself
    pub fn coordinates(&self) -> String {
        format!("{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}

/// One dependency entry, either managed or direct
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelDependency {
    pub group_id: String,
    pub artifact_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub packaging: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classifier: Option<String>,
    #[serde(default)]
    pub optional: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclusions: Vec<ModelExclusion>,
}

impl ModelDependency {
    pub fn key(&self) -> Result<DependencyKey> {
        DependencyKey::new(self.group_id.as_str(), self.artifact_id.as_str())
    }
}

/// A module excluded from a dependency's transitive closure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelExclusion {
    pub group_id: String,
    pub artifact_id: String,
}

impl ModelExclusion {
    pub fn key(&self) -> Result<DependencyKey> {
        DependencyKey::new(self.group_id.as_str(), self.artifact_id.as_str())
    }
}
