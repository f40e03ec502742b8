use super::DependencyKey;
use std::collections::{BTreeMap, BTreeSet};

/// Modules to exclude from the transitive closure of each dependency.
///
/// Merging is always additive: adding exclusions for a key that already has
/// some unions the two sets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Exclusions {
    by_dependency: BTreeMap<DependencyKey, BTreeSet<DependencyKey>>,
}

impl Exclusions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `exclusions` for `dependency`. An empty iterator records nothing.
    pub fn add<I>(&mut self, dependency: DependencyKey, exclusions: I)
    where
        I: IntoIterator<Item = DependencyKey>,
    {
        let mut exclusions = exclusions.into_iter().peekable();
        if exclusions.peek().is_none() {
            return;
        }
        self.by_dependency
            .entry(dependency)
            .or_default()
            .extend(exclusions);
    }

    pub fn add_all(&mut self, other: &Exclusions) {
        for (dependency, exclusions) in &other.by_dependency {
            self.add(dependency.clone(), exclusions.iter().cloned());
        }
    }

    pub fn exclusions_for_dependency(
        &self,
        dependency: &DependencyKey,
    ) -> Option<&BTreeSet<DependencyKey>> {
        self.by_dependency.get(dependency)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&DependencyKey, &BTreeSet<DependencyKey>)> {
        self.by_dependency.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.by_dependency.is_empty()
    }

    /// Number of dependencies that carry at least one exclusion
    pub fn len(&self) -> usize {
        self.by_dependency.len()
    }
}
