use crate::application::read_models::{DependencyManagementReport, ManagementSection, SectionStatus};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use std::fmt::Write;

const RULE: &str = "------------------------------------------------------------";

/// TextReportFormatter adapter rendering the report as plain text
///
/// One block per section: a `name - description` header followed by the
/// managed versions indented by four spaces, or a one-line status.
pub struct TextReportFormatter;

impl TextReportFormatter {
    pub fn new() -> Self {
        Self
    }

    fn write_section(output: &mut String, section: &ManagementSection) -> Result<()> {
        writeln!(output, "{} - {}", section.name, section.description)?;
        match &section.status {
            SectionStatus::Managed => {
                for entry in &section.managed_versions {
                    writeln!(output, "    {}:{} {}", entry.group, entry.name, entry.version)?;
                }
            }
            SectionStatus::NoDependencyManagement => {
                writeln!(output, "No dependency management")?;
            }
            SectionStatus::NoScopeSpecificManagement => {
                writeln!(output, "No configuration-specific dependency management")?;
            }
            SectionStatus::Failed(message) => {
                writeln!(output, "❌ {}", message)?;
            }
        }
        writeln!(output)?;
        Ok(())
    }
}

impl Default for TextReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for TextReportFormatter {
    fn format(&self, report: &DependencyManagementReport) -> Result<String> {
        let mut output = String::new();
        writeln!(output)?;
        writeln!(output, "{}", RULE)?;
        writeln!(
            output,
            "Dependency management - generated {}",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(output, "{}", RULE)?;
        writeln!(output)?;

        Self::write_section(&mut output, &report.global)?;
        for section in &report.scopes {
            Self::write_section(&mut output, section)?;
        }
        Ok(output)
    }
}
