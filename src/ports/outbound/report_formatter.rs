use crate::application::read_models::DependencyManagementReport;
use crate::shared::Result;

/// ReportFormatter port for rendering the dependency management report
pub trait ReportFormatter {
    /// Renders the report
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, report: &DependencyManagementReport) -> Result<String>;
}
