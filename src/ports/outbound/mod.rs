/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces the resolution engine uses to reach
/// BOM repositories, descriptor parsing, the console and output sinks.
pub mod artifact_locator;
pub mod model_provider;
pub mod output_presenter;
pub mod progress_reporter;
pub mod report_formatter;

pub use artifact_locator::{ArtifactLocator, LocatedDescriptors};
pub use model_provider::ModelProvider;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use report_formatter::ReportFormatter;
