/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod build_definition;
mod output_format;
mod resolve_request;
mod resolve_response;

pub use build_definition::{
    BuildDefinition, ExplicitDeclaration, ManagementDefinition, ScopeDefinition,
};
pub use output_format::OutputFormat;
pub use resolve_request::ResolveRequest;
pub use resolve_response::{ResolveResponse, ResolvedDependency, ScopeResolution};
