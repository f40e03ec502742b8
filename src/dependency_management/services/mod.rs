mod implicit_version_collector;
mod model_exclusion_collector;
mod resolution_container;
mod scope_registry;
#[cfg(test)]
pub(crate) mod test_support;
mod version_resolution_action;

pub use implicit_version_collector::ImplicitVersionCollector;
pub use model_exclusion_collector::ModelExclusionCollector;
pub use resolution_container::DependencyManagementContainer;
pub use scope_registry::{RegistryOwner, ScopeRegistry};
pub use version_resolution_action::{VersionDecision, VersionResolutionAction};
