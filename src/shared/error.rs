use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - every scope resolved
    Success = 0,
    /// At least one scope failed to resolve its imported BOMs
    ResolutionFailed = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (config error, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ResolutionFailed => write!(f, "Resolution Failed (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for dependency management.
///
/// `Clone` is required because a registry whose BOM imports failed to
/// resolve hands the same error to every later reader.
#[derive(Debug, Clone, Error)]
pub enum DependencyManagementError {
    #[error("Invalid coordinate '{value}': {reason}\n\n💡 Hint: Coordinates take the form group:name (or group:name:version), and no part may be empty or contain ':' or whitespace")]
    InvalidCoordinate { value: String, reason: String },

    #[error("Failed to resolve imported BOMs for {scope}: {root_cause}")]
    ImportResolution { scope: String, root_cause: String },

    #[error("BOM artifact not found: {coordinates}\nSearched: {searched}\n\n💡 Hint: Check the --repository option and that the BOM version exists")]
    ArtifactNotFound { coordinates: String, searched: PathBuf },

    #[error("Failed to parse BOM descriptor: {path}\nDetails: {details}")]
    DescriptorParseError { path: PathBuf, details: String },

    #[error("Invalid build configuration: {message}\n\n💡 Hint: {hint}")]
    ConfigError { message: String, hint: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid project path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a valid project directory")]
    InvalidProjectPath { path: PathBuf, reason: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

impl DependencyManagementError {
    /// Wraps a resolution failure with the identity of the scope being resolved,
    /// keeping only the innermost cause's message.
    pub fn import_resolution(scope: impl Into<String>, err: &anyhow::Error) -> Self {
        DependencyManagementError::ImportResolution {
            scope: scope.into(),
            root_cause: err.root_cause().to_string(),
        }
    }
}
