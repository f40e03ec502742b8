use super::{BomCoordinates, ModelDependency};
use serde::Serialize;
use std::collections::BTreeMap;

/// A request to import a BOM into a scope, with the property overrides
/// applied while building its effective model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRequest {
    coordinates: BomCoordinates,
    property_overrides: BTreeMap<String, String>,
}

impl ImportRequest {
    pub fn new(coordinates: BomCoordinates, property_overrides: BTreeMap<String, String>) -> Self {
        Self {
            coordinates,
            property_overrides,
        }
    }

    pub fn coordinates(&self) -> &BomCoordinates {
        &self.coordinates
    }

    pub fn property_overrides(&self) -> &BTreeMap<String, String> {
        &self.property_overrides
    }
}

impl From<BomCoordinates> for ImportRequest {
    fn from(coordinates: BomCoordinates) -> Self {
        Self::new(coordinates, BTreeMap::new())
    }
}

/// The detached holding area of one registry: the BOMs it must fetch,
/// in import order. Each registry's targets are located on their own,
/// never merged with another scope's.
#[derive(Debug, Clone, Default)]
pub struct ImportTargets {
    requests: Vec<ImportRequest>,
}

impl ImportTargets {
    pub fn push(&mut self, request: ImportRequest) {
        self.requests.push(request);
    }

    pub fn requests(&self) -> &[ImportRequest] {
        &self.requests
    }

    pub fn coordinates(&self) -> impl Iterator<Item = &BomCoordinates> {
        self.requests.iter().map(ImportRequest::coordinates)
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }
}

/// A resolved BOM and the managed entries it declared, kept for re-emission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportedBom {
    pub coordinates: String,
    pub managed_dependencies: Vec<ModelDependency>,
}
