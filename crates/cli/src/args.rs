//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not build finder settings (see `main()`).

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use factory_finder::constants::{
    ENV_CONFIG_FILE, ENV_HOME, ENV_MODULE, ENV_MODULES_DIR, ENV_RESOURCE_PATH,
};

#[derive(Parser)]
#[command(name = "factory-finder")]
#[command(about = "Inspect which factory implementation a contract resolves to", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  factory-finder resolve com.example.MessageFactory\n  factory-finder resolve com.example.MessageFactory --legacy-id OldFactory --default com.example.DefaultFactory\n  factory-finder --home /opt/platform paths\n  factory-finder -o json resolve com.example.MessageFactory --no-fallback\n"
)]
pub struct Cli {
    /// Platform home holding `conf/` and `lib/` (defaults to the platform config directory)
    #[arg(long, global = true, env = ENV_HOME, value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// Name of the well-known configuration file
    #[arg(long, global = true, env = ENV_CONFIG_FILE, value_name = "NAME")]
    pub config_file: Option<String>,

    /// Legacy resource roots, in platform path-list syntax
    #[arg(long, global = true, env = ENV_RESOURCE_PATH, value_name = "PATHS")]
    pub resource_path: Option<OsString>,

    /// Root directory of module discovery (disabled when unset)
    #[arg(long, global = true, env = ENV_MODULES_DIR, value_name = "DIR")]
    pub modules_dir: Option<PathBuf>,

    /// Module consulted by module discovery
    #[arg(long, global = true, env = ENV_MODULE, value_name = "NAME")]
    pub module: Option<String>,

    /// Output format (text, json)
    #[arg(short, long, global = true, default_value = "text")]
    pub output: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve the provider type a contract would use
    Resolve {
        /// Contract identifier (e.g., 'com.example.MessageFactory')
        contract: String,

        /// Deprecated identifier still honoured for backward compatibility
        #[arg(long, value_name = "ID")]
        legacy_id: Option<String>,

        /// Built-in implementation used when nothing is configured
        #[arg(long = "default", value_name = "NAME")]
        default_name: Option<String>,

        /// Report "not found" instead of falling back to the default
        #[arg(long)]
        no_fallback: bool,
    },

    /// Show the configuration locations the resolver would consult
    Paths,
}
