//! Output formatters for CLI commands.
//!
//! Provides two output formats: human-readable text and JSON.

use std::path::PathBuf;

use anyhow::Result;
use factory_finder::{ContractId, Source};
use serde::Serialize;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    /// Parse from string.
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => anyhow::bail!("Invalid output format: {}. Valid options: text, json", s),
        }
    }
}

/// Result of `resolve`.
#[derive(Debug, Clone, Serialize)]
pub struct ResolutionOutput {
    pub contract: ContractId,
    pub type_name: String,
    pub source: Source,
}

/// A candidate path and whether it exists.
#[derive(Debug, Clone, Serialize)]
pub struct PathStatus {
    pub path: PathBuf,
    pub exists: bool,
}

impl PathStatus {
    pub fn probe(path: PathBuf) -> Self {
        let exists = path.exists();
        Self { path, exists }
    }
}

/// Result of `paths`.
#[derive(Debug, Clone, Serialize)]
pub struct PathsOutput {
    pub config_file: Option<PathStatus>,
    pub legacy_config_file: Option<PathStatus>,
    pub resource_roots: Vec<PathStatus>,
    pub modules_root: Option<PathStatus>,
    pub module_name: String,
}

/// Formatter trait for different output types.
pub trait Formatter {
    fn format_resolution(&self, output: &ResolutionOutput) -> Result<String>;

    fn format_paths(&self, output: &PathsOutput) -> Result<String>;
}

pub struct TextFormatter;

fn describe(status: &PathStatus) -> String {
    let marker = if status.exists { "" } else { " (missing)" };
    format!("{}{}", status.path.display(), marker)
}

impl Formatter for TextFormatter {
    fn format_resolution(&self, output: &ResolutionOutput) -> Result<String> {
        Ok(format!(
            "{} (from {})\n",
            output.type_name,
            output.source.as_str()
        ))
    }

    fn format_paths(&self, output: &PathsOutput) -> Result<String> {
        let mut text = String::new();

        let config_file = output
            .config_file
            .as_ref()
            .map(describe)
            .unwrap_or_else(|| "unavailable".to_string());
        text.push_str(&format!("Config file:        {}\n", config_file));
        if let Some(legacy) = &output.legacy_config_file {
            text.push_str(&format!("Legacy config file: {}\n", describe(legacy)));
        }

        if output.resource_roots.is_empty() {
            text.push_str("Resource roots:     none\n");
        } else {
            text.push_str("Resource roots:\n");
            for root in &output.resource_roots {
                text.push_str(&format!("  {}\n", describe(root)));
            }
        }

        match &output.modules_root {
            Some(root) => {
                text.push_str(&format!("Modules root:       {}\n", describe(root)));
                text.push_str(&format!("Module:             {}\n", output.module_name));
            }
            None => text.push_str("Modules root:       disabled\n"),
        }

        Ok(text)
    }
}

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_resolution(&self, output: &ResolutionOutput) -> Result<String> {
        Ok(format!("{}\n", serde_json::to_string_pretty(output)?))
    }

    fn format_paths(&self, output: &PathsOutput) -> Result<String> {
        Ok(format!("{}\n", serde_json::to_string_pretty(output)?))
    }
}

/// Get a formatter for the specified format.
pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}
