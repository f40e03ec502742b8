//! Build description file support for dep-mgmt.
//!
//! Provides YAML-based build descriptions through `dep-mgmt.config.yml` files,
//! including data structures, file loading, validation and conversion into
//! the application's [`BuildDefinition`].

use anyhow::Context;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use crate::application::dto::{
    BuildDefinition, ExplicitDeclaration, ManagementDefinition, ScopeDefinition,
};
use crate::dependency_management::domain::{
    BomCoordinates, DependencyKey, ImportRequest, LocalProjects, RequestedDependency, ScopeGraph,
};
use crate::shared::error::DependencyManagementError;
use crate::shared::security::read_regular_file;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "dep-mgmt.config.yml";

/// Top-level build description schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// `group:name` of every module the build produces
    #[serde(default)]
    pub projects: Vec<String>,
    pub overridden_by_dependencies: Option<bool>,
    #[serde(default)]
    pub dependency_management: ManagementSection,
    #[serde(default)]
    pub scopes: BTreeMap<String, ScopeSection>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// `dependency_management:` block, globally or inside a scope.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ManagementSection {
    #[serde(default)]
    pub imports: Vec<ImportEntry>,
    #[serde(default)]
    pub dependencies: Vec<DeclarationEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImportEntry {
    pub bom: String,
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
}

/// A managed dependency, either `g:a:v` or a map carrying exclusions.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum DeclarationEntry {
    Coordinates(String),
    Detailed {
        coordinates: String,
        #[serde(default)]
        exclusions: Vec<String>,
    },
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ScopeSection {
    #[serde(default)]
    pub extends: Vec<String>,
    #[serde(default)]
    pub dependency_management: ManagementSection,
    #[serde(default)]
    pub dependencies: Vec<String>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = read_regular_file(path, "build description").with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    warn_unknown_fields(&config);
    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}

impl ConfigFile {
    /// Validates the description and converts it into a [`BuildDefinition`]
    ///
    /// # Errors
    /// Returns an error if a coordinate is malformed, a scope extends an
    /// undeclared scope, or the `extends` relationships form a cycle
    pub fn into_build_definition(self) -> Result<BuildDefinition> {
        let local_projects = self
            .projects
            .iter()
            .enumerate()
            .map(|(i, project)| {
                project
                    .parse::<DependencyKey>()
                    .with_context(|| format!("Invalid config: projects[{}]", i))
            })
            .collect::<Result<Vec<_>>>()?;

        let mut scope_graph = ScopeGraph::new();
        for (name, section) in &self.scopes {
            scope_graph.add_scope(name.as_str(), section.extends.clone());
        }
        // surfaces unknown parents and cycles before anything is resolved
        scope_graph.scopes()?;

        let global = convert_management(&self.dependency_management, "dependency_management")?;

        let mut scopes = BTreeMap::new();
        for (name, section) in self.scopes {
            let location = format!("scopes.{}", name);
            let management = convert_management(
                &section.dependency_management,
                &format!("{}.dependency_management", location),
            )?;
            let dependencies = section
                .dependencies
                .iter()
                .enumerate()
                .map(|(i, dependency)| {
                    dependency
                        .parse::<RequestedDependency>()
                        .with_context(|| format!("Invalid config: {}.dependencies[{}]", location, i))
                })
                .collect::<Result<Vec<_>>>()?;
            scopes.insert(
                name,
                ScopeDefinition {
                    management,
                    dependencies,
                },
            );
        }

        Ok(BuildDefinition {
            local_projects: LocalProjects::new(local_projects),
            scope_graph,
            global,
            scopes,
            overridden_by_dependencies: self.overridden_by_dependencies.unwrap_or(true),
        })
    }
}

fn convert_management(section: &ManagementSection, location: &str) -> Result<ManagementDefinition> {
    let imports = section
        .imports
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let coordinates = entry
                .bom
                .parse::<BomCoordinates>()
                .with_context(|| format!("Invalid config: {}.imports[{}].bom", location, i))?;
            Ok(ImportRequest::new(coordinates, entry.properties.clone()))
        })
        .collect::<Result<Vec<_>>>()?;

    let dependencies = section
        .dependencies
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            convert_declaration(entry)
                .with_context(|| format!("Invalid config: {}.dependencies[{}]", location, i))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(ManagementDefinition {
        imports,
        dependencies,
    })
}

fn convert_declaration(entry: &DeclarationEntry) -> Result<ExplicitDeclaration> {
    let (coordinates, exclusions) = match entry {
        DeclarationEntry::Coordinates(coordinates) => (coordinates, &[][..]),
        DeclarationEntry::Detailed {
            coordinates,
            exclusions,
        } => (coordinates, exclusions.as_slice()),
    };

    let coordinates: BomCoordinates = coordinates.parse().map_err(|_| {
        DependencyManagementError::InvalidCoordinate {
            value: coordinates.clone(),
            reason: "managed dependencies need group:name:version".to_string(),
        }
    })?;
    let exclusions = exclusions
        .iter()
        .map(|exclusion| exclusion.parse::<DependencyKey>())
        .collect::<Result<Vec<_>>>()?;

    Ok(ExplicitDeclaration::new(
        coordinates.key().clone(),
        coordinates.version(),
        exclusions,
    ))
}
