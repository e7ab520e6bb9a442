//! Resolve command implementation.
//!
//! Runs the full resolution chain with the name-only instantiator, so the
//! selected type is reported without being constructed.

use std::sync::Arc;

use anyhow::{Context, Result};
use factory_finder::{FactoryRequest, FinderSettings, NameOnly, ProviderFinder, ProviderName};
use tracing::info;

use crate::error::NotConfigured;
use crate::formatters::{OutputFormat, ResolutionOutput, get_formatter};

pub struct ResolveArgs {
    pub contract: String,
    pub legacy_id: Option<String>,
    pub default_name: Option<String>,
    pub no_fallback: bool,
}

impl ResolveArgs {
    fn request(&self) -> FactoryRequest {
        let mut request =
            FactoryRequest::new(self.contract.as_str()).with_fallback(!self.no_fallback);
        if let Some(legacy_id) = &self.legacy_id {
            request = request.with_legacy_id(legacy_id.as_str());
        }
        if let Some(default_name) = &self.default_name {
            request = request.with_default(default_name.as_str());
        }
        request
    }
}

pub fn run(settings: &FinderSettings, args: ResolveArgs, output_format: &str) -> Result<()> {
    let format = OutputFormat::from_str(output_format)?;
    let request = args.request();

    info!(contract = %request.contract(), "Resolving provider");

    let finder: ProviderFinder<ProviderName> =
        ProviderFinder::from_settings(settings, Arc::new(NameOnly));
    let resolved = finder
        .find(&request)
        .with_context(|| format!("Failed to resolve provider for {}", request.contract()))?
        .ok_or_else(|| NotConfigured {
            contract: request.contract().clone(),
        })?;

    let output = ResolutionOutput {
        contract: request.contract().clone(),
        type_name: resolved.instance.as_str().to_string(),
        source: resolved.source,
    };

    let formatter = get_formatter(format);
    print!("{}", formatter.format_resolution(&output)?);

    Ok(())
}
