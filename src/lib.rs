//! dep-mgmt - BOM-based dependency management for multi-scope builds
//!
//! This library computes, for every dependency requested in a scope of a
//! build, the single version to use and the transitive modules to exclude.
//! Versions come from explicit declarations, from versions already pinned by
//! the scope's dependencies and from imported bills of materials (BOMs).
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`dependency_management`): keys, exclusions, scopes,
//!   the per-scope registries and the hierarchy-aware container
//! - **Application Layer** (`application`): Use cases, DTOs and the report read model
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use dep_mgmt::prelude::*;
//! use std::sync::Arc;
//!
//! # fn main() -> Result<()> {
//! let repository = Arc::new(LocalBomRepository::new("boms".into()));
//! let container = DependencyManagementContainer::new(repository.clone(), repository);
//!
//! let compile = Scope::root("compile");
//! container.import_bom(Some(&compile), "io.spring.platform:platform-bom:1.1.1.RELEASE".parse::<BomCoordinates>()?.into());
//! container.add_explicit_managed_version(Some(&compile), "org.slf4j:slf4j-api".parse()?, "1.7.7", Vec::new());
//!
//! let version = container.managed_version(Some(&compile), &"org.slf4j:slf4j-api".parse()?)?;
//! assert_eq!(version.as_deref(), Some("1.7.7"));
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod dependency_management;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemWriter, LocalBomRepository, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonReportFormatter, TextReportFormatter};
    pub use crate::application::dto::{BuildDefinition, ResolveRequest, ResolveResponse};
    pub use crate::application::use_cases::ResolveDependenciesUseCase;
    pub use crate::dependency_management::domain::{
        BomCoordinates, DependencyKey, DependencyResolveDetails, Exclusions, ImportRequest,
        ImportTargets, LocalProjects, Model, RequestedDependency, Scope, ScopeGraph,
    };
    pub use crate::dependency_management::policies::Versions;
    pub use crate::dependency_management::services::{
        DependencyManagementContainer, ModelExclusionCollector, VersionDecision,
        VersionResolutionAction,
    };
    pub use crate::ports::outbound::{
        ArtifactLocator, ModelProvider, OutputPresenter, ProgressReporter, ReportFormatter,
    };
    pub use crate::shared::Result;
}
