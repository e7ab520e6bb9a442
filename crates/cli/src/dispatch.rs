//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to appropriate command handlers.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Settings loading (see `main()`).

use anyhow::Result;
use factory_finder::FinderSettings;

use crate::args::{Cli, Commands};
use crate::commands;

/// Dispatch CLI commands to their respective handlers.
pub(crate) fn run_command(cli: Cli, settings: &FinderSettings) -> Result<()> {
    match cli.command {
        Commands::Resolve {
            contract,
            legacy_id,
            default_name,
            no_fallback,
        } => {
            let args = commands::resolve::ResolveArgs {
                contract,
                legacy_id,
                default_name,
                no_fallback,
            };
            commands::resolve::run(settings, args, &cli.output)?;
        }
        Commands::Paths => {
            commands::paths::run(settings, &cli.output)?;
        }
    }

    Ok(())
}
