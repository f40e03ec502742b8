use crate::shared::error::DependencyManagementError;
use crate::shared::Result;
use std::collections::{BTreeMap, HashSet};

/// A named scope together with its hierarchy.
///
/// The hierarchy always starts with the scope itself, followed by every
/// scope it extends, directly or transitively.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Scope {
    hierarchy: Vec<String>,
}

impl Scope {
    /// A scope that extends nothing
    pub fn root(name: impl Into<String>) -> Self {
        Self {
            hierarchy: vec![name.into()],
        }
    }

    pub fn name(&self) -> &str {
        &self.hierarchy[0]
    }

    /// Self first, then ancestors. Lookups that stop at the first hit walk this way.
    pub fn self_to_root(&self) -> impl DoubleEndedIterator<Item = &str> {
        self.hierarchy.iter().map(String::as_str)
    }

    /// Most generic ancestor first, self last. Overlays that let the most
    /// specific scope win walk this way.
    pub fn root_to_self(&self) -> impl Iterator<Item = &str> {
        self.self_to_root().rev()
    }
}

/// The declared `extends` relationships between scopes of one build
#[derive(Debug, Clone, Default)]
pub struct ScopeGraph {
    extends: BTreeMap<String, Vec<String>>,
}

impl ScopeGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_scope(&mut self, name: impl Into<String>, extends: Vec<String>) {
        self.extends.insert(name.into(), extends);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.extends.contains_key(name)
    }

    /// Builds the [`Scope`] for `name`.
    ///
    /// A shared ancestor is moved behind every scope that reaches it, so the
    /// hierarchy of `test -> [compile, runtime]` with `runtime -> compile`
    /// is `[test, runtime, compile]`.
    pub fn scope(&self, name: &str) -> Result<Scope> {
        if !self.contains(name) {
            return Err(unknown_scope(name, None).into());
        }
        let mut visiting = HashSet::new();
        self.check_acyclic(name, &mut visiting)?;

        let mut hierarchy = vec![name.to_string()];
        self.collect_ancestors(name, &mut hierarchy);
        Ok(Scope { hierarchy })
    }

    /// Every declared scope, ordered by name
    pub fn scopes(&self) -> Result<Vec<Scope>> {
        self.extends.keys().map(|name| self.scope(name)).collect()
    }

    fn check_acyclic(&self, name: &str, visiting: &mut HashSet<String>) -> Result<()> {
        if !visiting.insert(name.to_string()) {
            return Err(DependencyManagementError::ConfigError {
                message: format!("scope '{}' extends itself through its hierarchy", name),
                hint: "Remove one of the 'extends' entries that form the cycle".to_string(),
            }
            .into());
        }
        for parent in self.parents(name) {
            if !self.contains(parent) {
                return Err(unknown_scope(parent, Some(name)).into());
            }
            self.check_acyclic(parent, visiting)?;
        }
        visiting.remove(name);
        Ok(())
    }

    fn collect_ancestors(&self, name: &str, hierarchy: &mut Vec<String>) {
        for parent in self.parents(name) {
            hierarchy.retain(|existing| existing != parent);
            hierarchy.push(parent.clone());
            self.collect_ancestors(parent, hierarchy);
        }
    }

    fn parents(&self, name: &str) -> &[String] {
        self.extends.get(name).map(Vec::as_slice).unwrap_or_default()
    }
}

fn unknown_scope(name: &str, referenced_by: Option<&str>) -> DependencyManagementError {
    let message = match referenced_by {
        Some(child) => format!("scope '{}' extends unknown scope '{}'", child, name),
        None => format!("unknown scope '{}'", name),
    };
    DependencyManagementError::ConfigError {
        message,
        hint: "Declare every scope under 'scopes' before extending it".to_string(),
    }
}
