use dep_mgmt::prelude::*;
use dep_mgmt::dependency_management::domain::{ModelDependency, ModelExclusion};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Builds descriptor models for [`MockModelProvider`]
pub struct ModelBuilder {
    model: Model,
}

impl ModelBuilder {
    pub fn bom(coordinates: &str) -> Self {
        let parts: Vec<&str> = coordinates.split(':').collect();
        Self {
            model: Model {
                group_id: parts[0].to_string(),
                artifact_id: parts[1].to_string(),
                version: parts[2].to_string(),
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

/// Mock ModelProvider serving models from memory, counting calls
#[derive(Default, Clone)]
pub struct MockModelProvider {
    models: HashMap<String, Model>,
    calls: Arc<AtomicUsize>,
    overrides_seen: Arc<Mutex<Vec<BTreeMap<String, String>>>>,
}

impl MockModelProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_model(mut self, builder: ModelBuilder) -> Self {
        let model = builder.build();
        self.models.insert(model.coordinates(), model);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn overrides_seen(&self) -> Vec<BTreeMap<String, String>> {
        self.overrides_seen.lock().unwrap().clone()
    }
}

impl ModelProvider for MockModelProvider {
    fn build_model(
        &self,
        location: &Path,
        property_overrides: &BTreeMap<String, String>,
    ) -> Result<Model> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.overrides_seen
            .lock()
            .unwrap()
            .push(property_overrides.clone());

        let name = location.to_string_lossy().to_string();
        self.models
            .get(&name)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Descriptor {} is unreadable", name))
    }
}
