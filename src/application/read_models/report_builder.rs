//! Builder for constructing the report from a populated container

use super::report_read_model::{
    DependencyManagementReport, ManagedVersionView, ManagementSection, SectionStatus,
};
use crate::dependency_management::domain::{DependencyKey, Scope};
use crate::dependency_management::services::DependencyManagementContainer;
use chrono::Utc;
use std::collections::BTreeMap;

/// Builds a [`DependencyManagementReport`] by querying the container.
///
/// Each scope section shows its inherited view: global versions overlaid by
/// every scope from the root of its hierarchy down to the scope itself.
pub struct DependencyManagementReportBuilder;

impl DependencyManagementReportBuilder {
    pub fn build(container: &DependencyManagementContainer, scopes: &[Scope]) -> DependencyManagementReport {
        let global_versions = container.managed_versions_for_scope(None, false);
        let global = match &global_versions {
            Ok(versions) => Self::section(
                "global",
                "Default dependency management for all configurations",
                Self::status(versions, None),
                versions,
            ),
            Err(err) => Self::failed_section(
                "global",
                "Default dependency management for all configurations",
                err,
            ),
        };

        let mut scopes: Vec<&Scope> = scopes.iter().collect();
        scopes.sort_by(|a, b| a.name().cmp(b.name()));

        let scope_sections = scopes
            .into_iter()
            .map(|scope| {
                let description = format!("Dependency management for the {} configuration", scope.name());
                match container.managed_versions_for_scope(Some(scope), true) {
                    Ok(versions) => {
                        let status = Self::status(&versions, global_versions.as_ref().ok());
                        Self::section(scope.name(), &description, status, &versions)
                    }
                    Err(err) => Self::failed_section(scope.name(), &description, &err),
                }
            })
            .collect();

        DependencyManagementReport {
            generated_at: Utc::now(),
            global,
            scopes: scope_sections,
        }
    }

    fn status(
        versions: &BTreeMap<DependencyKey, String>,
        global: Option<&BTreeMap<DependencyKey, String>>,
    ) -> SectionStatus {
        if versions.is_empty() {
            SectionStatus::NoDependencyManagement
        } else if global == Some(versions) {
            SectionStatus::NoScopeSpecificManagement
        } else {
            SectionStatus::Managed
        }
    }

    fn section(
        name: &str,
        description: &str,
        status: SectionStatus,
        versions: &BTreeMap<DependencyKey, String>,
    ) -> ManagementSection {
        let managed_versions = match status {
            SectionStatus::Managed => versions
                .iter()
                .map(|(key, version)| ManagedVersionView {
                    group: key.group().to_string(),
                    name: key.name().to_string(),
                    version: version.clone(),
                })
                .collect(),
            _ => Vec::new(),
        };
        ManagementSection {
            name: name.to_string(),
            description: description.to_string(),
            status,
            managed_versions,
        }
    }

    fn failed_section(name: &str, description: &str, err: &anyhow::Error) -> ManagementSection {
        ManagementSection {
            name: name.to_string(),
            description: description.to_string(),
            status: SectionStatus::Failed(err.to_string()),
            managed_versions: Vec::new(),
        }
    }
}
