use crate::application::read_models::DependencyManagementReport;
use crate::dependency_management::domain::{DependencyKey, ManagedDependency};
use crate::dependency_management::services::VersionDecision;
use serde::Serialize;

/// ResolveResponse - Response DTO from the resolution use case
#[derive(Debug, Clone, Serialize)]
pub struct ResolveResponse {
    pub report: DependencyManagementReport,
    /// One entry per scope, ordered by scope name
    pub scopes: Vec<ScopeResolution>,
}

impl ResolveResponse {
    pub fn scope(&self, name: &str) -> Option<&ScopeResolution> {
        self.scopes.iter().find(|scope| scope.scope == name)
    }

    /// Number of scopes whose imported BOMs failed to resolve
    pub fn failure_count(&self) -> usize {
        self.scopes.iter().filter(|scope| scope.error.is_some()).count()
    }
}

/// Outcome of resolving the dependencies requested in one scope
#[derive(Debug, Clone, Serialize)]
pub struct ScopeResolution {
    pub scope: String,
    /// The scope followed by every scope it extends
    pub hierarchy: Vec<String>,
    pub dependencies: Vec<ResolvedDependency>,
    /// Declarations made directly in the scope
    pub explicit_dependencies: Vec<ManagedDependency>,
    /// Coordinates of the BOMs imported directly into the scope
    pub imported_boms: Vec<String>,
    /// Set when dependency management for the scope could not be resolved
    pub error: Option<String>,
}

/// One requested dependency after dependency management was applied
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedDependency {
    pub dependency: DependencyKey,
    pub requested_version: Option<String>,
    pub version: Option<String>,
    pub decision: VersionDecision,
    pub exclusions: Vec<DependencyKey>,
}

impl ResolvedDependency {
    pub fn is_managed(&self) -> bool {
        matches!(self.decision, VersionDecision::Managed(_))
    }
}
