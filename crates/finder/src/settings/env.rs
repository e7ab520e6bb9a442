//! Environment variable parsing for finder settings.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Values already set through builder methods are left untouched.

use std::path::PathBuf;

use super::builder::SettingsLoader;
use super::error::SettingsError;
use crate::constants::{ENV_CONFIG_FILE, ENV_HOME, ENV_MODULE, ENV_MODULES_DIR, ENV_RESOURCE_PATH};
use crate::sources::env_var_or_none;

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut SettingsLoader) -> Result<(), SettingsError> {
    if loader.home().is_none()
        && let Some(home) = env_var_or_none(ENV_HOME)
    {
        loader.set_home(Some(PathBuf::from(home)));
    }
    if loader.config_file_name().is_none()
        && let Some(name) = env_var_or_none(ENV_CONFIG_FILE)
    {
        if name.contains(['/', '\\']) {
            return Err(SettingsError::InvalidValue {
                var: ENV_CONFIG_FILE.to_string(),
                message: "must be a file name, not a path".to_string(),
            });
        }
        loader.set_config_file_name(Some(name));
    }
    if loader.resource_roots().is_none()
        && let Some(paths) = env_var_or_none(ENV_RESOURCE_PATH)
    {
        let roots: Vec<PathBuf> = std::env::split_paths(&paths)
            .filter(|p| !p.as_os_str().is_empty())
            .collect();
        loader.set_resource_roots(Some(roots));
    }
    if loader.modules_root().is_none()
        && let Some(dir) = env_var_or_none(ENV_MODULES_DIR)
    {
        loader.set_modules_root(Some(PathBuf::from(dir)));
    }
    if loader.module_name().is_none()
        && let Some(module) = env_var_or_none(ENV_MODULE)
    {
        loader.set_module_name(Some(module));
    }
    Ok(())
}
