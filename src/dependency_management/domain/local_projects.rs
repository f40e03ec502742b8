use super::DependencyKey;
use std::collections::HashSet;

/// `group:name` of every module the current build produces itself
#[derive(Debug, Clone, Default)]
pub struct LocalProjects {
    keys: HashSet<DependencyKey>,
}

impl LocalProjects {
    pub fn new(keys: impl IntoIterator<Item = DependencyKey>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }

    pub fn contains(&self, key: &DependencyKey) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
