mod cli;

use clap::Parser;
use cli::Args;
use dep_mgmt::adapters::outbound::console::StderrProgressReporter;
use dep_mgmt::adapters::outbound::filesystem::LocalBomRepository;
use dep_mgmt::application::dto::ResolveRequest;
use dep_mgmt::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use dep_mgmt::application::use_cases::ResolveDependenciesUseCase;
use dep_mgmt::config::{discover_config, load_config_from_path, CONFIG_FILENAME};
use dep_mgmt::shared::error::{DependencyManagementError, ExitCode};
use dep_mgmt::shared::Result;
use std::path::{Path, PathBuf};
use std::process;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    init_tracing(args.verbose);

    match run(args) {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn run(args: Args) -> Result<ExitCode> {
    let project_path = args.path.clone().unwrap_or_else(|| PathBuf::from("."));
    validate_project_path(&project_path)?;

    // Load the build description
    let config = match &args.config {
        Some(path) => load_config_from_path(path)?,
        None => discover_config(&project_path)?.ok_or_else(|| {
            DependencyManagementError::ConfigError {
                message: format!(
                    "No {} found in {}",
                    CONFIG_FILENAME,
                    project_path.display()
                ),
                hint: "Create a build description or pass one with --config".to_string(),
            }
        })?,
    };
    let build = config.into_build_definition()?;

    // Create adapters (Dependency Injection)
    let repository_root = args
        .repository
        .clone()
        .unwrap_or_else(|| project_path.join("boms"));
    let repository = LocalBomRepository::new(repository_root);
    let progress_reporter = StderrProgressReporter::new();

    let use_case = ResolveDependenciesUseCase::new(repository.clone(), repository, progress_reporter);
    let response = use_case.execute(ResolveRequest::new(build))?;

    eprintln!("{}", FormatterFactory::progress_message(args.format));
    let formatter = FormatterFactory::create(args.format);
    let formatted_output = formatter.format(&response.report)?;

    let presenter = PresenterFactory::create(PresenterType::from_output(args.output));
    presenter.present(&formatted_output)?;

    if response.failure_count() > 0 {
        Ok(ExitCode::ResolutionFailed)
    } else {
        Ok(ExitCode::Success)
    }
}

fn validate_project_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(DependencyManagementError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    let metadata = std::fs::symlink_metadata(path).map_err(|e| {
        DependencyManagementError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read path metadata: {}", e),
        }
    })?;

    if metadata.is_symlink() {
        return Err(DependencyManagementError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Security: Project path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(DependencyManagementError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}
