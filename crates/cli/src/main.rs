//! factory-finder - Inspect provider resolution from the command line.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Build finder settings and run the resolver over the standard sources.
//! - Format and display results as text or JSON.
//!
//! Does NOT handle:
//! - Resolution logic (see `crates/finder`).
//! - Constructing providers; only the selected type name is reported.
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide clap defaults.
//! - Logs go to stderr; stdout carries only command output.

mod args;
mod commands;
mod dispatch;
mod error;
mod formatters;

use std::path::Path;

use anyhow::Result;
use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use factory_finder::{FinderSettings, SettingsLoader};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = SettingsLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    // Deprecation warnings are shown unless RUST_LOG says otherwise
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let settings = match build_settings(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to build settings: {:#}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    let exit_code = match run_command(cli, &settings) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}

/// CLI values take precedence over environment variables.
///
/// Blank values are ignored so the environment and defaults still apply.
fn build_settings(cli: &Cli) -> Result<FinderSettings> {
    let mut loader = SettingsLoader::new();

    if let Some(home) = cli.home.as_ref().filter(|p| !is_blank_path(p)) {
        loader = loader.with_home(home.clone());
    }
    if let Some(name) = non_blank(cli.config_file.as_deref()) {
        loader = loader.with_config_file_name(name);
    }
    if let Some(paths) = cli.resource_path.as_ref().filter(|p| !p.is_empty()) {
        loader = loader.with_resource_roots(std::env::split_paths(paths).collect());
    }
    if let Some(root) = cli.modules_dir.as_ref().filter(|p| !is_blank_path(p)) {
        loader = loader.with_modules_root(root.clone());
    }
    if let Some(name) = non_blank(cli.module.as_deref()) {
        loader = loader.with_module_name(name);
    }

    Ok(loader.from_env()?.build()?)
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn is_blank_path(path: &Path) -> bool {
    path.to_string_lossy().trim().is_empty()
}
