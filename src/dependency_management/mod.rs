//! Dependency management domain: typed coordinates, exclusions, descriptor
//! models, scopes, and the services that resolve managed versions across a
//! scope hierarchy.

pub mod domain;
pub mod policies;
pub mod services;
