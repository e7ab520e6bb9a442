//! Centralized constants for the factory-finder workspace.
//!
//! This module contains default locations, resource prefixes and
//! environment variable names shared by the library and the CLI.

// =============================================================================
// Well-Known Configuration File
// =============================================================================

/// Default name of the well-known configuration file.
pub const DEFAULT_CONFIG_FILE_NAME: &str = "factories.properties";

/// Directory under the platform home holding the configuration file.
pub const CONFIG_SUBDIR: &str = "conf";

/// Older directory under the platform home, checked when the primary file is absent.
pub const LEGACY_CONFIG_SUBDIR: &str = "lib";

/// Application name used to derive platform configuration directories.
pub const APPLICATION_NAME: &str = "factory-finder";

// =============================================================================
// Resource Registries
// =============================================================================

/// Prefix under which registry resources are stored, relative to a resource root.
///
/// A resource for identifier `id` lives at `<root>/META-INF/services/<id>`.
pub const SERVICES_PREFIX: &str = "META-INF/services";

/// Default name of the module consulted by module discovery.
pub const DEFAULT_MODULE_NAME: &str = "factory-finder.impl";

// =============================================================================
// Environment Variables
// =============================================================================

/// Platform home directory containing `conf/` and `lib/`.
pub const ENV_HOME: &str = "FACTORY_FINDER_HOME";

/// Overrides the configuration file name.
pub const ENV_CONFIG_FILE: &str = "FACTORY_FINDER_CONFIG_FILE";

/// Path list of legacy resource roots, in platform `PATH` syntax.
pub const ENV_RESOURCE_PATH: &str = "FACTORY_FINDER_RESOURCE_PATH";

/// Root directory of the module discovery mechanism.
pub const ENV_MODULES_DIR: &str = "FACTORY_FINDER_MODULES_DIR";

/// Name of the module consulted by module discovery.
pub const ENV_MODULE: &str = "FACTORY_FINDER_MODULE";

/// Disables `.env` loading when set to `true` or `1`.
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";
