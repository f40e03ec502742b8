use crate::dependency_management::domain::{BomCoordinates, ImportTargets, Model};
use crate::ports::outbound::{ArtifactLocator, LocatedDescriptors, ModelProvider};
use crate::shared::error::DependencyManagementError;
use crate::shared::security::{read_regular_file, MAX_FILE_SIZE};
use crate::shared::Result;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

/// How deeply properties may reference other properties
const MAX_INTERPOLATION_DEPTH: usize = 16;

/// Upper bound on the bytes produced while expanding one descriptor
const MAX_EXPANDED_BYTES: usize = MAX_FILE_SIZE as usize;

/// LocalBomRepository adapter serving BOM descriptors from a directory tree
///
/// Descriptors live at `<root>/<group>/<artifact>/<version>/<artifact>-<version>.toml`.
/// This adapter implements both the ArtifactLocator and ModelProvider ports.
#[derive(Debug, Clone)]
pub struct LocalBomRepository {
    root: PathBuf,
}

impl LocalBomRepository {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn descriptor_path(&self, coordinates: &BomCoordinates) -> PathBuf {
        self.root
            .join(coordinates.group())
            .join(coordinates.artifact())
            .join(coordinates.version())
            .join(format!(
                "{}-{}.toml",
                coordinates.artifact(),
                coordinates.version()
            ))
    }
}

impl ArtifactLocator for LocalBomRepository {
    fn locate(&self, targets: &ImportTargets) -> Result<LocatedDescriptors> {
        let mut located = LocatedDescriptors::new();
        for coordinates in targets.coordinates() {
            let path = self.descriptor_path(coordinates);
            if !path.exists() {
                return Err(DependencyManagementError::ArtifactNotFound {
                    coordinates: coordinates.to_string(),
                    searched: path,
                }
                .into());
            }
            tracing::debug!("Located {} at {}", coordinates, path.display());
            located.insert(coordinates.clone(), path);
        }
        Ok(located)
    }
}

impl ModelProvider for LocalBomRepository {
    fn build_model(
        &self,
        location: &Path,
        property_overrides: &BTreeMap<String, String>,
    ) -> Result<Model> {
        let content = read_regular_file(location, "BOM descriptor")?;
        let model: Model = toml::from_str(&content).map_err(|e| {
            DependencyManagementError::DescriptorParseError {
                path: location.to_path_buf(),
                details: e.to_string(),
            }
        })?;

        effective_model(model, property_overrides).map_err(|details| {
            DependencyManagementError::DescriptorParseError {
                path: location.to_path_buf(),
                details,
            }
            .into()
        })
    }
}

/// Applies `property_overrides` to the model's properties and replaces every
/// `${name}` placeholder in versions and property values
fn effective_model(
    mut model: Model,
    property_overrides: &BTreeMap<String, String>,
) -> std::result::Result<Model, String> {
    let mut properties = model.properties.take().unwrap_or_default();
    properties.extend(
        property_overrides
            .iter()
            .map(|(name, value)| (name.clone(), value.clone())),
    );

    let mut lookup = properties.clone();
    lookup.insert("project.groupId".to_string(), model.group_id.clone());
    lookup.insert("project.artifactId".to_string(), model.artifact_id.clone());
    lookup.insert("project.version".to_string(), model.version.clone());

    let mut interpolator = Interpolator::new(&lookup);
    let mut resolved = BTreeMap::new();
    for name in properties.keys() {
        resolved.insert(name.clone(), interpolator.property(name)?);
    }

    let entries = model
        .dependency_management
        .iter_mut()
        .flatten()
        .chain(model.dependencies.iter_mut().flatten());
    for entry in entries {
        if let Some(version) = entry.version.as_mut() {
            *version = interpolator.expand(version).map_err(|e| {
                format!("{} (version of {}:{})", e, entry.group_id, entry.artifact_id)
            })?;
        }
    }

    if !resolved.is_empty() {
        model.properties = Some(resolved);
    }
    Ok(model)
}

/// Expands `${name}` placeholders against one descriptor's properties.
///
/// Each property is expanded at most once. Every byte written into an
/// expansion counts against [`MAX_EXPANDED_BYTES`] for the whole descriptor.
struct Interpolator<'a> {
    properties: &'a BTreeMap<String, String>,
    resolved: HashMap<String, String>,
    in_progress: Vec<String>,
    produced: usize,
}

impl<'a> Interpolator<'a> {
    fn new(properties: &'a BTreeMap<String, String>) -> Self {
        Self {
            properties,
            resolved: HashMap::new(),
            in_progress: Vec::new(),
            produced: 0,
        }
    }

    fn property(&mut self, name: &str) -> std::result::Result<String, String> {
        if let Some(value) = self.resolved.get(name) {
            return Ok(value.clone());
        }
        if self.in_progress.iter().any(|pending| pending == name) {
            return Err(format!("Property reference cycle through '${{{}}}'", name));
        }
        if self.in_progress.len() >= MAX_INTERPOLATION_DEPTH {
            return Err(format!(
                "Property '${{{}}}' is nested more than {} levels deep",
                name, MAX_INTERPOLATION_DEPTH
            ));
        }
        let properties = self.properties;
        let raw = properties
            .get(name)
            .ok_or_else(|| format!("Unresolved property '${{{}}}'", name))?;

        self.in_progress.push(name.to_string());
        let value = self.expand(raw);
        self.in_progress.pop();

        let value = value?;
        self.resolved.insert(name.to_string(), value.clone());
        Ok(value)
    }

    fn expand(&mut self, value: &str) -> std::result::Result<String, String> {
        let mut output = String::with_capacity(value.len());
        let mut rest = value;
        while let Some(start) = rest.find("${") {
            self.append(&mut output, &rest[..start])?;
            let after = &rest[start + 2..];
            let end = after
                .find('}')
                .ok_or_else(|| format!("Unterminated placeholder in '{}'", value))?;
            let replacement = self.property(&after[..end])?;
            self.append(&mut output, &replacement)?;
            rest = &after[end + 1..];
        }
        self.append(&mut output, rest)?;
        Ok(output)
    }

    fn append(&mut self, output: &mut String, piece: &str) -> std::result::Result<(), String> {
        self.produced += piece.len();
        if self.produced > MAX_EXPANDED_BYTES {
            return Err(format!(
                "Expanded property values exceed {} bytes",
                MAX_EXPANDED_BYTES
            ));
        }
        output.push_str(piece);
        Ok(())
    }
}
