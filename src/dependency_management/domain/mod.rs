pub mod dependency_key;
pub mod exclusions;
pub mod import_request;
pub mod local_projects;
pub mod managed_dependency;
pub mod model;
pub mod requested_dependency;
pub mod scope;

pub use dependency_key::{BomCoordinates, DependencyKey};
pub use exclusions::Exclusions;
pub use import_request::{ImportRequest, ImportTargets, ImportedBom};
pub use local_projects::LocalProjects;
pub use managed_dependency::ManagedDependency;
pub use model::{Model, ModelDependency, ModelExclusion};
pub use requested_dependency::{DependencyResolveDetails, RequestedDependency};
pub use scope::{Scope, ScopeGraph};
