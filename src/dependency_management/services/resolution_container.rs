use super::scope_registry::{RegistryOwner, ScopeRegistry};
use crate::dependency_management::domain::{
    DependencyKey, Exclusions, ImportRequest, ImportedBom, ManagedDependency, Scope,
};
use crate::ports::outbound::{ArtifactLocator, ModelProvider};
use crate::shared::Result;
use dashmap::DashMap;
use std::collections::BTreeMap;
use std::sync::Arc;

/// DependencyManagementContainer owns the global registry and one registry
/// per scope, and answers hierarchy-aware lookups across them.
///
/// Every lookup takes `Option<&Scope>`. `None` addresses the global registry only.
pub struct DependencyManagementContainer {
    global: Arc<ScopeRegistry>,
    scopes: DashMap<String, Arc<ScopeRegistry>>,
    artifact_locator: Arc<dyn ArtifactLocator>,
    model_provider: Arc<dyn ModelProvider>,
}

impl DependencyManagementContainer {
    pub fn new(
        artifact_locator: Arc<dyn ArtifactLocator>,
        model_provider: Arc<dyn ModelProvider>,
    ) -> Self {
        let global = Arc::new(ScopeRegistry::new(
            RegistryOwner::Global,
            Arc::clone(&artifact_locator),
            Arc::clone(&model_provider),
        ));
        Self {
            global,
            scopes: DashMap::new(),
            artifact_locator,
            model_provider,
        }
    }

    pub fn global(&self) -> Arc<ScopeRegistry> {
        Arc::clone(&self.global)
    }

    /// Returns the registry of `scope`, creating it on first reference
    pub fn registry_for(&self, scope: Option<&Scope>) -> Arc<ScopeRegistry> {
        match scope {
            None => self.global(),
            Some(scope) => self.registry_named(scope.name()),
        }
    }

    fn registry_named(&self, name: &str) -> Arc<ScopeRegistry> {
        if let Some(registry) = self.scopes.get(name) {
            return Arc::clone(registry.value());
        }
        let registry = self.scopes.entry(name.to_string()).or_insert_with(|| {
            tracing::debug!("Creating dependency management for scope '{}'", name);
            Arc::new(ScopeRegistry::new(
                RegistryOwner::Scope(name.to_string()),
                Arc::clone(&self.artifact_locator),
                Arc::clone(&self.model_provider),
            ))
        });
        Arc::clone(registry.value())
    }

    pub fn add_implicit_managed_version(
        &self,
        scope: Option<&Scope>,
        key: DependencyKey,
        version: impl Into<String>,
    ) {
        self.registry_for(scope)
            .add_implicit_managed_version(key, version);
    }

    pub fn add_explicit_managed_version<I>(
        &self,
        scope: Option<&Scope>,
        key: DependencyKey,
        version: impl Into<String>,
        exclusions: I,
    ) where
        I: IntoIterator<Item = DependencyKey>,
    {
        self.registry_for(scope)
            .add_explicit_managed_version(key, version, exclusions);
    }

    pub fn import_bom(&self, scope: Option<&Scope>, request: ImportRequest) {
        self.registry_for(scope).add_import_request(request);
    }

    /// The version managed for `key` in the most specific scope of the
    /// hierarchy that manages it, falling back to global
    pub fn managed_version(
        &self,
        scope: Option<&Scope>,
        key: &DependencyKey,
    ) -> Result<Option<String>> {
        if let Some(scope) = scope {
            for name in scope.self_to_root() {
                if let Some(version) = self.registry_named(name).managed_version(key)? {
                    tracing::debug!("Found managed version {} for {} in scope '{}'", version, key, name);
                    return Ok(Some(version));
                }
            }
        }
        let version = self.global.managed_version(key)?;
        if let Some(version) = &version {
            tracing::debug!("Found managed version {} for {} in global dependency management", version, key);
        }
        Ok(version)
    }

    /// Union of the exclusions of every registry along the hierarchy, and global
    pub fn exclusions(&self, scope: Option<&Scope>) -> Result<Exclusions> {
        let mut exclusions = Exclusions::new();
        if let Some(scope) = scope {
            for name in scope.self_to_root() {
                exclusions.add_all(&self.registry_named(name).exclusions()?);
            }
        }
        exclusions.add_all(&self.global.exclusions()?);
        Ok(exclusions)
    }

    /// Global properties overlaid by each scope from the root down to `scope`
    pub fn imported_properties_for_scope(
        &self,
        scope: Option<&Scope>,
    ) -> Result<BTreeMap<String, String>> {
        let mut properties = self.global.imported_properties()?;
        if let Some(scope) = scope {
            for name in scope.root_to_self() {
                properties.extend(self.registry_named(name).imported_properties()?);
            }
        }
        Ok(properties)
    }

    /// Managed versions visible in `scope`.
    ///
    /// Without `inherited` only the scope's own registry is read. With it,
    /// global is overlaid by each scope from the root down to `scope`.
    pub fn managed_versions_for_scope(
        &self,
        scope: Option<&Scope>,
        inherited: bool,
    ) -> Result<BTreeMap<DependencyKey, String>> {
        if !inherited {
            return self.registry_for(scope).managed_versions();
        }
        let mut versions = self.global.managed_versions()?;
        if let Some(scope) = scope {
            for name in scope.root_to_self() {
                versions.extend(self.registry_named(name).managed_versions()?);
            }
        }
        Ok(versions)
    }

    pub fn explicitly_managed_dependencies(&self, scope: Option<&Scope>) -> Vec<ManagedDependency> {
        self.registry_for(scope).explicitly_managed_dependencies()
    }

    pub fn imported_boms(&self, scope: Option<&Scope>) -> Result<Vec<ImportedBom>> {
        self.registry_for(scope).imported_boms()
    }
}
