use super::BuildDefinition;

/// ResolveRequest - Internal request DTO for the resolution use case
#[derive(Debug, Clone)]
pub struct ResolveRequest {
    pub build: BuildDefinition,
}

impl ResolveRequest {
    pub fn new(build: BuildDefinition) -> Self {
        Self { build }
    }
}
