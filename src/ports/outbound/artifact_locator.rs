use crate::dependency_management::domain::{BomCoordinates, ImportTargets};
use crate::shared::Result;
use std::collections::HashMap;
use std::path::PathBuf;

/// Descriptor location for each BOM that was located
pub type LocatedDescriptors = HashMap<BomCoordinates, PathBuf>;

/// ArtifactLocator port for finding BOM descriptors
///
/// This port abstracts the host build tool's own artifact resolution.
/// Every registry hands over its own [`ImportTargets`]; targets of
/// different scopes are never resolved together.
///
/// Implementations must be `Send + Sync`: scopes may be resolved from
/// several threads at once.
pub trait ArtifactLocator: Send + Sync {
    /// Resolves every BOM in `targets` to the location of its descriptor
    ///
    /// # Errors
    /// Returns an error if any BOM cannot be found or fetched. The error
    /// becomes the root cause of the registry's resolution failure.
    fn locate(&self, targets: &ImportTargets) -> Result<LocatedDescriptors>;
}
