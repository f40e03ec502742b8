use crate::dependency_management::domain::Model;
use crate::shared::Result;
use std::collections::BTreeMap;
use std::path::Path;

/// ModelProvider port for building the effective model of a BOM descriptor
///
/// Implementations must be `Send + Sync`: scopes may be resolved from
/// several threads at once.
pub trait ModelProvider: Send + Sync {
    /// Builds the effective model of the descriptor at `location`
    ///
    /// # Arguments
    /// * `location` - Where the descriptor was located
    /// * `property_overrides` - Properties that take precedence over the
    ///   descriptor's own while interpolating it
    ///
    /// # Errors
    /// Returns an error if the descriptor cannot be read or parsed, or if a
    /// property it references cannot be resolved
    fn build_model(
        &self,
        location: &Path,
        property_overrides: &BTreeMap<String, String>,
    ) -> Result<Model>;
}
