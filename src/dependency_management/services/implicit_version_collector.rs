use super::DependencyManagementContainer;
use crate::dependency_management::domain::{RequestedDependency, Scope};
use crate::dependency_management::policies::Versions;

/// Records the fixed versions a scope declares on its dependencies as
/// implicit managed versions of that scope.
pub struct ImplicitVersionCollector;

impl ImplicitVersionCollector {
    /// Returns the number of versions recorded. Versionless and dynamic
    /// declarations are skipped.
    pub fn collect(
        container: &DependencyManagementContainer,
        scope: Option<&Scope>,
        declared: &[RequestedDependency],
    ) -> usize {
        let registry = container.registry_for(scope);
        let mut recorded = 0;
        for dependency in declared {
            let Some(version) = dependency.version() else {
                continue;
            };
            if Versions::is_dynamic(version) {
                continue;
            }
            registry.add_implicit_managed_version(dependency.key().clone(), version);
            recorded += 1;
        }
        tracing::debug!("Recorded {} implicit managed versions for {}", recorded, registry.owner());
        recorded
    }
}
