use super::DependencyManagementContainer;
use crate::dependency_management::domain::{DependencyResolveDetails, LocalProjects, Scope};
use crate::dependency_management::policies::Versions;
use crate::shared::Result;
use serde::Serialize;

/// What the action did with one requested dependency
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "decision", content = "version")]
pub enum VersionDecision {
    /// The dependency is produced by the build itself
    LocalProject,
    /// The requested version is dynamic and is left to the resolver
    DynamicVersion,
    /// The managed version was applied
    Managed(String),
    /// Nothing manages the dependency
    Unmanaged,
}

/// Applies dependency management to the dependencies requested in one scope.
pub struct VersionResolutionAction<'a> {
    container: &'a DependencyManagementContainer,
    local_projects: &'a LocalProjects,
    scope: Option<&'a Scope>,
}

impl<'a> VersionResolutionAction<'a> {
    pub fn new(
        container: &'a DependencyManagementContainer,
        local_projects: &'a LocalProjects,
        scope: Option<&'a Scope>,
    ) -> Self {
        Self {
            container,
            local_projects,
            scope,
        }
    }

    /// Rewrites the requested version of `details` when a managed version applies
    ///
    /// # Errors
    /// Returns an error when a registry on the scope's hierarchy failed to
    /// resolve its imported BOMs
    pub fn execute(&self, details: &mut DependencyResolveDetails) -> Result<VersionDecision> {
        let requested = details.requested().clone();
        if self.local_projects.contains(requested.key()) {
            tracing::debug!("Dependency '{}' is a local project dependency", requested.key());
            return Ok(VersionDecision::LocalProject);
        }
        if requested.version().is_some_and(Versions::is_dynamic) {
            tracing::debug!("Dependency '{}' has a dynamic version", requested);
            return Ok(VersionDecision::DynamicVersion);
        }

        match self.container.managed_version(self.scope, requested.key())? {
            Some(version) => {
                if requested.version() != Some(version.as_str()) {
                    tracing::info!("Using version '{}' for dependency '{}'", version, requested);
                    details.use_version(version.as_str());
                }
                Ok(VersionDecision::Managed(version))
            }
            None => {
                tracing::debug!("No dependency management for dependency '{}'", requested);
                Ok(VersionDecision::Unmanaged)
            }
        }
    }
}
