//! Dependency management report read model
//!
//! A denormalized snapshot of the managed versions visible globally and in
//! every scope, ready to be rendered by a `ReportFormatter`.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Main read model for the dependency management report
#[derive(Debug, Clone, Serialize)]
pub struct DependencyManagementReport {
    /// When the report was generated
    pub generated_at: DateTime<Utc>,
    /// Default dependency management for all scopes
    pub global: ManagementSection,
    /// One section per scope, ordered by scope name
    pub scopes: Vec<ManagementSection>,
}

/// Managed versions of one registry, as seen from its scope
#[derive(Debug, Clone, Serialize)]
pub struct ManagementSection {
    pub name: String,
    pub description: String,
    pub status: SectionStatus,
    /// Sorted by group, then name
    pub managed_versions: Vec<ManagedVersionView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "message")]
pub enum SectionStatus {
    /// The section manages versions of its own
    Managed,
    /// Nothing is managed at all
    NoDependencyManagement,
    /// The scope only sees global dependency management
    NoScopeSpecificManagement,
    /// Imported BOMs could not be resolved
    Failed(String),
}

/// View representation of one managed version
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManagedVersionView {
    pub group: String,
    pub name: String,
    pub version: String,
}

impl DependencyManagementReport {
    pub fn scope(&self, name: &str) -> Option<&ManagementSection> {
        self.scopes.iter().find(|section| section.name == name)
    }

    pub fn has_failures(&self) -> bool {
        std::iter::once(&self.global)
            .chain(&self.scopes)
            .any(|section| matches!(section.status, SectionStatus::Failed(_)))
    }
}
