//! Paths command implementation.

use anyhow::Result;
use factory_finder::FinderSettings;

use crate::formatters::{OutputFormat, PathStatus, PathsOutput, get_formatter};

pub fn run(settings: &FinderSettings, output_format: &str) -> Result<()> {
    let format = OutputFormat::from_str(output_format)?;

    // An undeterminable platform directory is reported, not fatal.
    let location = match settings.config_location() {
        Ok(location) => Some(location),
        Err(e) => {
            tracing::warn!(error = %e, "Configuration file location unavailable");
            None
        }
    };

    let output = PathsOutput {
        config_file: location
            .as_ref()
            .map(|l| PathStatus::probe(l.primary().to_path_buf())),
        legacy_config_file: location
            .as_ref()
            .and_then(|l| l.legacy())
            .map(|p| PathStatus::probe(p.to_path_buf())),
        resource_roots: settings
            .resource_roots
            .iter()
            .cloned()
            .map(PathStatus::probe)
            .collect(),
        modules_root: settings.modules_root.clone().map(PathStatus::probe),
        module_name: settings.module_name.clone(),
    };

    let formatter = get_formatter(format);
    print!("{}", formatter.format_paths(&output)?);

    Ok(())
}
