use super::ModelExclusionCollector;
use crate::dependency_management::domain::{
    DependencyKey, Exclusions, ImportRequest, ImportTargets, ImportedBom, ManagedDependency, Model,
};
use crate::ports::outbound::{ArtifactLocator, ModelProvider};
use crate::shared::error::DependencyManagementError;
use crate::shared::Result;
use anyhow::Context;
use std::collections::{BTreeMap, HashMap};
use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};

/// Locks a mutex, recovering the data if a previous holder panicked.
/// Every critical section below leaves the data consistent before it can panic.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Who a registry belongs to
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RegistryOwner {
    Global,
    Scope(String),
}

impl fmt::Display for RegistryOwner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryOwner::Global => write!(f, "global dependency management"),
            RegistryOwner::Scope(name) => write!(f, "scope '{}'", name),
        }
    }
}

#[derive(Debug, Clone)]
enum ResolutionState {
    Open,
    Resolving,
    Resolved,
    Failed(DependencyManagementError),
}

#[derive(Debug, Default)]
struct RegistryData {
    versions: HashMap<DependencyKey, String>,
    explicit_versions: BTreeMap<DependencyKey, String>,
    explicit_exclusions: Exclusions,
    all_exclusions: Exclusions,
    imported_boms: Vec<ImportedBom>,
    imported_properties: BTreeMap<String, String>,
}

/// Everything one resolve pass produced, applied to the registry only
/// once every import succeeded
#[derive(Debug, Default)]
struct StagedImports {
    versions: HashMap<DependencyKey, String>,
    imported_boms: Vec<ImportedBom>,
    exclusions: Exclusions,
    properties: BTreeMap<String, String>,
}

impl StagedImports {
    fn absorb(&mut self, model: Model) -> Result<()> {
        if let Some(managed) = model.dependency_management.as_ref() {
            for dependency in managed {
                if let Some(version) = &dependency.version {
                    self.versions.insert(dependency.key()?, version.clone());
                }
            }
            self.exclusions
                .add_all(&ModelExclusionCollector::collect(&model)?);
            record_imported_bom(
                &mut self.imported_boms,
                ImportedBom {
                    coordinates: model.coordinates(),
                    managed_dependencies: managed.clone(),
                },
            );
        }
        if let Some(properties) = model.properties {
            self.properties.extend(properties);
        }
        Ok(())
    }
}

/// Turns a panic caught during resolution into an error carrying its message
fn panic_error(payload: &(dyn Any + Send)) -> anyhow::Error {
    let message = payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("no panic message");
    anyhow::anyhow!("resolution panicked: {}", message)
}

/// Keeps first-import order; importing the same BOM again replaces its entries in place
fn record_imported_bom(boms: &mut Vec<ImportedBom>, bom: ImportedBom) {
    match boms.iter_mut().find(|b| b.coordinates == bom.coordinates) {
        Some(existing) => *existing = bom,
        None => boms.push(bom),
    }
}

/// ScopeRegistry holds the dependency management of one scope (or of the
/// whole build, for the global registry).
///
/// Versions and exclusions may be written at any time. BOM imports are only
/// queued; they are resolved the first time anything that depends on them
/// is read, exactly once, even when several threads read concurrently.
/// Versions present before resolution always take precedence over versions
/// contributed by imported BOMs.
///
/// A failed resolution leaves the registry's data exactly as it was before
/// the attempt, and every later read reports the same failure.
pub struct ScopeRegistry {
    owner: RegistryOwner,
    data: Mutex<RegistryData>,
    import_targets: Mutex<ImportTargets>,
    state: Mutex<ResolutionState>,
    state_changed: Condvar,
    artifact_locator: Arc<dyn ArtifactLocator>,
    model_provider: Arc<dyn ModelProvider>,
}

impl ScopeRegistry {
    pub fn new(
        owner: RegistryOwner,
        artifact_locator: Arc<dyn ArtifactLocator>,
        model_provider: Arc<dyn ModelProvider>,
    ) -> Self {
        Self {
            owner,
            data: Mutex::new(RegistryData::default()),
            import_targets: Mutex::new(ImportTargets::default()),
            state: Mutex::new(ResolutionState::Open),
            state_changed: Condvar::new(),
            artifact_locator,
            model_provider,
        }
    }

    pub fn owner(&self) -> &RegistryOwner {
        &self.owner
    }

    /// Sets the managed version of `key`, replacing any previous one
    pub fn add_managed_version(&self, key: DependencyKey, version: impl Into<String>) {
        lock(&self.data).versions.insert(key, version.into());
    }

    /// Records a version observed on a dependency already pinned in this scope
    pub fn add_implicit_managed_version(&self, key: DependencyKey, version: impl Into<String>) {
        self.add_managed_version(key, version);
    }

    /// Records a version the user declared, together with its exclusions
    pub fn add_explicit_managed_version<I>(
        &self,
        key: DependencyKey,
        version: impl Into<String>,
        exclusions: I,
    ) where
        I: IntoIterator<Item = DependencyKey>,
    {
        let version = version.into();
        let exclusions: Vec<DependencyKey> = exclusions.into_iter().collect();

        // exclusions land before the version, under one lock
        let mut data = lock(&self.data);
        data.explicit_versions.insert(key.clone(), version.clone());
        data.explicit_exclusions
            .add(key.clone(), exclusions.iter().cloned());
        data.all_exclusions.add(key.clone(), exclusions);
        data.versions.insert(key, version);
    }

    /// Queues a BOM import. Imports queued once resolution has started are ignored.
    pub fn add_import_request(&self, request: ImportRequest) {
        let state = lock(&self.state);
        if !matches!(*state, ResolutionState::Open) {
            tracing::warn!(
                "Ignoring import of {} into {}: its imports have already been resolved",
                request.coordinates(),
                self.owner
            );
            return;
        }
        lock(&self.import_targets).push(request);
    }

    pub fn managed_version(&self, key: &DependencyKey) -> Result<Option<String>> {
        self.resolve_if_necessary()?;
        Ok(lock(&self.data).versions.get(key).cloned())
    }

    pub fn managed_versions(&self) -> Result<BTreeMap<DependencyKey, String>> {
        self.resolve_if_necessary()?;
        let data = lock(&self.data);
        Ok(data
            .versions
            .iter()
            .map(|(key, version)| (key.clone(), version.clone()))
            .collect())
    }

    /// Resolved BOMs in import order, with the entries each one manages
    pub fn imported_boms(&self) -> Result<Vec<ImportedBom>> {
        self.resolve_if_necessary()?;
        Ok(lock(&self.data).imported_boms.clone())
    }

    pub fn imported_properties(&self) -> Result<BTreeMap<String, String>> {
        self.resolve_if_necessary()?;
        Ok(lock(&self.data).imported_properties.clone())
    }

    /// Explicit exclusions plus those found in imported BOMs
    pub fn exclusions(&self) -> Result<Exclusions> {
        self.resolve_if_necessary()?;
        Ok(lock(&self.data).all_exclusions.clone())
    }

    /// Explicit declarations only. Never triggers resolution.
    pub fn explicitly_managed_dependencies(&self) -> Vec<ManagedDependency> {
        let data = lock(&self.data);
        data.explicit_versions
            .iter()
            .map(|(key, version)| {
                let exclusions = data
                    .explicit_exclusions
                    .exclusions_for_dependency(key)
                    .cloned()
                    .unwrap_or_default();
                ManagedDependency::new(key.clone(), version.clone(), exclusions)
            })
            .collect()
    }

    pub fn is_resolved(&self) -> bool {
        matches!(*lock(&self.state), ResolutionState::Resolved)
    }

    fn resolve_if_necessary(&self) -> Result<()> {
        let mut state = lock(&self.state);
        loop {
            match &*state {
                ResolutionState::Resolved => return Ok(()),
                ResolutionState::Failed(err) => return Err(err.clone().into()),
                ResolutionState::Resolving => {
                    state = self
                        .state_changed
                        .wait(state)
                        .unwrap_or_else(PoisonError::into_inner);
                }
                ResolutionState::Open => break,
            }
        }
        *state = ResolutionState::Resolving;
        let targets = lock(&self.import_targets).clone();
        drop(state);

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.resolve(&targets)))
            .unwrap_or_else(|payload| Err(panic_error(payload.as_ref())));

        let next = match outcome {
            Ok(staged) => {
                self.commit(staged);
                ResolutionState::Resolved
            }
            Err(err) => {
                let failure = DependencyManagementError::import_resolution(self.owner.to_string(), &err);
                tracing::error!("{:#}", err);
                ResolutionState::Failed(failure)
            }
        };

        let mut state = lock(&self.state);
        *state = next.clone();
        self.state_changed.notify_all();
        match next {
            ResolutionState::Failed(err) => Err(err.into()),
            _ => Ok(()),
        }
    }

    fn resolve(&self, targets: &ImportTargets) -> Result<StagedImports> {
        tracing::info!("Resolving {}", self.owner);
        let mut staged = StagedImports::default();
        if targets.is_empty() {
            return Ok(staged);
        }

        let locations = self
            .artifact_locator
            .locate(targets)
            .with_context(|| format!("Failed to locate imported BOMs for {}", self.owner))?;

        for request in targets.requests() {
            let coordinates = request.coordinates();
            let location = locations.get(coordinates).ok_or_else(|| {
                anyhow::anyhow!("BOM {} was not resolved to a descriptor", coordinates)
            })?;
            tracing::debug!("Processing '{}'", location.display());

            let model = self
                .model_provider
                .build_model(location, request.property_overrides())
                .with_context(|| format!("Failed to build the model of BOM {}", coordinates))?;
            staged.absorb(model)?;
        }
        Ok(staged)
    }

    fn commit(&self, staged: StagedImports) {
        let mut data = lock(&self.data);
        let existing = data.versions.clone();
        tracing::debug!("Preserving existing versions: {:?}", existing);

        data.versions.extend(staged.versions);
        data.versions.extend(existing);
        data.all_exclusions.add_all(&staged.exclusions);
        data.imported_properties.extend(staged.properties);
        for bom in staged.imported_boms {
            record_imported_bom(&mut data.imported_boms, bom);
        }
    }
}

impl fmt::Debug for ScopeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScopeRegistry")
            .field("owner", &self.owner)
            .field("state", &*lock(&self.state))
            .finish_non_exhaustive()
    }
}
