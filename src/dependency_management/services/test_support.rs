//! In-memory ports shared by the service tests

use crate::dependency_management::domain::{
    BomCoordinates, ImportRequest, ImportTargets, Model, ModelDependency, ModelExclusion,
};
use crate::ports::outbound::{ArtifactLocator, LocatedDescriptors, ModelProvider};
use crate::shared::Result;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

/// Builds descriptor models for [`StubRepository`]
pub struct ModelBuilder {
    model: Model,
}

/// Shorthand for [`ModelBuilder::bom`]
pub fn bom(coordinates: &str) -> ModelBuilder {
    ModelBuilder::bom(coordinates)
}

impl ModelBuilder {
    pub fn bom(coordinates: &str) -> Self {
        let coordinates: BomCoordinates = coordinates.parse().unwrap();
        Self {
            model: Model {
                group_id: coordinates.group().to_string(),
                artifact_id: coordinates.artifact().to_string(),
                version: coordinates.version().to_string(),
                dependency_management: Some(Vec::new()),
                dependencies: None,
                properties: None,
            },
        }
    }

    pub fn manages(self, key: &str, version: &str) -> Self {
        self.manages_excluding(key, version, &[])
    }

    pub fn manages_excluding(mut self, key: &str, version: &str, exclusions: &[&str]) -> Self {
        let dependency = dependency(key, Some(version), None, exclusions);
        self.model
            .dependency_management
            .get_or_insert_with(Vec::new)
            .push(dependency);
        self
    }

    pub fn depends_on_excluding(mut self, key: &str, scope: Option<&str>, exclusions: &[&str]) -> Self {
        let dependency = dependency(key, Some("1.0"), scope, exclusions);
        self.model
            .dependencies
            .get_or_insert_with(Vec::new)
            .push(dependency);
        self
    }

    pub fn without_management(mut self) -> Self {
        self.model.dependency_management = None;
        self
    }

    pub fn property(mut self, name: &str, value: &str) -> Self {
        self.model
            .properties
            .get_or_insert_with(BTreeMap::new)
            .insert(name.to_string(), value.to_string());
        self
    }

    pub fn build(self) -> Model {
        self.model
    }
}

fn dependency(key: &str, version: Option<&str>, scope: Option<&str>, exclusions: &[&str]) -> ModelDependency {
    let (group, artifact) = key.split_once(':').unwrap();
    ModelDependency {
        group_id: group.to_string(),
        artifact_id: artifact.to_string(),
        version: version.map(str::to_string),
        scope: scope.map(str::to_string),
        packaging: None,
        classifier: None,
        optional: false,
        exclusions: exclusions
            .iter()
            .map(|exclusion| {
                let (group, artifact) = exclusion.split_once(':').unwrap();
                ModelExclusion {
                    group_id: group.to_string(),
                    artifact_id: artifact.to_string(),
                }
            })
            .collect(),
    }
}

/// Serves models from memory. The descriptor location of a BOM is its coordinate string.
#[derive(Default)]
pub struct StubRepository {
    models: HashMap<String, Model>,
    failing: HashSet<String>,
    panicking: HashSet<String>,
    delay: Option<Duration>,
    locate_calls: AtomicUsize,
    build_calls: AtomicUsize,
}

impl StubRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_model(mut self, builder: ModelBuilder) -> Self {
        let model = builder.build();
        self.models.insert(model.coordinates(), model);
        self
    }

    pub fn failing_build(mut self, coordinates: &str) -> Self {
        self.failing.insert(coordinates.to_string());
        self
    }

    pub fn panicking_build(mut self, coordinates: &str) -> Self {
        self.panicking.insert(coordinates.to_string());
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn request(&self, coordinates: &str) -> ImportRequest {
        coordinates.parse::<BomCoordinates>().unwrap().into()
    }

    pub fn locate_calls(&self) -> usize {
        self.locate_calls.load(Ordering::SeqCst)
    }

    pub fn build_calls(&self) -> usize {
        self.build_calls.load(Ordering::SeqCst)
    }
}

impl ArtifactLocator for StubRepository {
    fn locate(&self, targets: &ImportTargets) -> Result<LocatedDescriptors> {
        self.locate_calls.fetch_add(1, Ordering::SeqCst);
        let mut located = LocatedDescriptors::new();
        for coordinates in targets.coordinates() {
            let name = coordinates.to_string();
            let known = self.models.contains_key(&name)
                || self.failing.contains(&name)
                || self.panicking.contains(&name);
            if !known {
                anyhow::bail!("BOM {} not found", name);
            }
            located.insert(coordinates.clone(), PathBuf::from(name));
        }
        Ok(located)
    }
}

impl ModelProvider for StubRepository {
    fn build_model(
        &self,
        location: &Path,
        _property_overrides: &BTreeMap<String, String>,
    ) -> Result<Model> {
        self.build_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            thread::sleep(delay);
        }
        let name = location.to_string_lossy().to_string();
        if self.panicking.contains(&name) {
            panic!("descriptor {} crashed the parser", name);
        }
        if self.failing.contains(&name) {
            anyhow::bail!("descriptor {} is malformed", name);
        }
        self.models
            .get(&name)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("no model at {}", name))
    }
}
