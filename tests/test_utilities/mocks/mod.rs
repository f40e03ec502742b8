/// Mock implementations for testing
mod mock_artifact_locator;
mod mock_model_provider;
mod mock_progress_reporter;

pub use mock_artifact_locator::MockArtifactLocator;
pub use mock_model_provider::{ModelBuilder, MockModelProvider};
pub use mock_progress_reporter::MockProgressReporter;
