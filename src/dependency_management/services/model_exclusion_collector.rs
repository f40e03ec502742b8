use crate::dependency_management::domain::{Exclusions, Model, ModelDependency};
use crate::shared::Result;

/// Scopes whose exclusions never reach a consumer of the descriptor
const IGNORED_SCOPES: [&str; 2] = ["provided", "test"];

/// ModelExclusionCollector service for extracting exclusions from a model
///
/// Both the model's dependency management and its direct dependencies are
/// considered. Entries that are optional, or whose scope is `provided` or
/// `test`, do not contribute.
pub struct ModelExclusionCollector;

impl ModelExclusionCollector {
    /// Collects the exclusions declared by `model`
    ///
    /// # Errors
    /// Returns an error if an entry or one of its exclusions has an id that
    /// cannot form a dependency key
    pub fn collect(model: &Model) -> Result<Exclusions> {
        let managed = model.dependency_management.iter().flatten();
        let direct = model.dependencies.iter().flatten();

        let mut exclusions = Exclusions::new();
        for dependency in managed.chain(direct) {
            if dependency.exclusions.is_empty() || Self::is_ignored(dependency) {
                continue;
            }
            let excluded = dependency
                .exclusions
                .iter()
                .map(|exclusion| exclusion.key())
                .collect::<Result<Vec<_>>>()?;
            exclusions.add(dependency.key()?, excluded);
        }
        Ok(exclusions)
    }

    fn is_ignored(dependency: &ModelDependency) -> bool {
        dependency.optional
            || dependency
                .scope
                .as_deref()
                .is_some_and(|scope| IGNORED_SCOPES.contains(&scope))
    }
}
