use dep_mgmt::prelude::*;
use dep_mgmt::ports::outbound::LocatedDescriptors;
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Mock ArtifactLocator that knows a fixed set of BOMs
///
/// The location of a known BOM is its coordinate string, which is what
/// [`super::MockModelProvider`] expects.
#[derive(Default, Clone)]
pub struct MockArtifactLocator {
    known: HashSet<String>,
    calls: Arc<AtomicUsize>,
    located: Arc<Mutex<Vec<Vec<String>>>>,
}

impl MockArtifactLocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bom(mut self, coordinates: &str) -> Self {
        self.known.insert(coordinates.to_string());
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The coordinates of every `locate` call, in call order
    pub fn located_batches(&self) -> Vec<Vec<String>> {
        self.located.lock().unwrap().clone()
    }
}

impl ArtifactLocator for MockArtifactLocator {
    fn locate(&self, targets: &ImportTargets) -> Result<LocatedDescriptors> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.located
            .lock()
            .unwrap()
            .push(targets.coordinates().map(ToString::to_string).collect());

        let mut located = LocatedDescriptors::new();
        for coordinates in targets.coordinates() {
            let name = coordinates.to_string();
            if !self.known.contains(&name) {
                anyhow::bail!("Could not find {}", name);
            }
            located.insert(coordinates.clone(), PathBuf::from(name));
        }
        Ok(located)
    }
}
