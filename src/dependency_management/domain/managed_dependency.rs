use super::DependencyKey;
use serde::Serialize;
use std::collections::BTreeSet;

/// An explicitly declared managed dependency and its exclusions
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManagedDependency {
    #[serde(rename = "dependency")]
    key: DependencyKey,
    version: String,
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    exclusions: BTreeSet<DependencyKey>,
}

impl ManagedDependency {
    pub fn new(key: DependencyKey, version: String, exclusions: BTreeSet<DependencyKey>) -> Self {
        Self {
            key,
            version,
            exclusions,
        }
    }

    pub fn key(&self) -> &DependencyKey {
        &self.key
    }

    pub fn group_id(&self) -> &str {
        self.key.group()
    }

    pub fn artifact_id(&self) -> &str {
        self.key.name()
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn exclusions(&self) -> &BTreeSet<DependencyKey> {
        &self.exclusions
    }
}
