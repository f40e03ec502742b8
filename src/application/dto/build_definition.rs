use crate::dependency_management::domain::{
    DependencyKey, ImportRequest, LocalProjects, RequestedDependency, ScopeGraph,
};
use std::collections::BTreeMap;

/// BuildDefinition - everything the resolution use case needs to know about a build
///
/// Produced from the build description file; the engine never reads files itself.
#[derive(Debug, Clone, Default)]
pub struct BuildDefinition {
    /// Modules produced by the build itself
    pub local_projects: LocalProjects,
    /// `extends` relationships between scopes
    pub scope_graph: ScopeGraph,
    /// Dependency management that applies to every scope
    pub global: ManagementDefinition,
    /// Per-scope declarations, keyed by scope name
    pub scopes: BTreeMap<String, ScopeDefinition>,
    /// Whether fixed versions on declared dependencies become implicit managed versions
    pub overridden_by_dependencies: bool,
}

/// Declarations made in one scope
#[derive(Debug, Clone, Default)]
pub struct ScopeDefinition {
    pub management: ManagementDefinition,
    pub dependencies: Vec<RequestedDependency>,
}

/// BOM imports and explicit managed versions of one registry
#[derive(Debug, Clone, Default)]
pub struct ManagementDefinition {
    pub imports: Vec<ImportRequest>,
    pub dependencies: Vec<ExplicitDeclaration>,
}

/// An explicitly managed dependency and its exclusions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplicitDeclaration {
    pub key: DependencyKey,
    pub version: String,
    pub exclusions: Vec<DependencyKey>,
}

impl ExplicitDeclaration {
    pub fn new(key: DependencyKey, version: impl Into<String>, exclusions: Vec<DependencyKey>) -> Self {
        Self {
            key,
            version: version.into(),
            exclusions,
        }
    }
}
