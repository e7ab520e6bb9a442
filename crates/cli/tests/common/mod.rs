//! Shared test utilities for factory-finder integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Provide a temporary platform layout (home, resource roots, modules).
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper will be hermetic by default.
//! - `FACTORY_FINDER_*` variables from the host never reach the child process.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

pub const CONTRACT: &str = "com.example.MessageFactory";

/// Returns a hermetic `factory-finder` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - Settings variables and `RUST_LOG` are cleared so host values don't leak in.
pub fn finder_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("factory-finder");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    clear_finder_env(&mut cmd);
    cmd
}

/// Remove every variable the binary reads from the child environment.
pub fn clear_finder_env(cmd: &mut Command) {
    for (key, _) in std::env::vars() {
        if key.starts_with("FACTORY_FINDER_") {
            cmd.env_remove(&key);
        }
    }
    cmd.env_remove("RUST_LOG").env_remove(CONTRACT);
}

/// Temporary home, resource root and modules root.
pub struct Layout {
    pub home: TempDir,
    pub resources: TempDir,
    pub modules: TempDir,
}

impl Layout {
    pub fn new() -> Self {
        Self {
            home: TempDir::new().unwrap(),
            resources: TempDir::new().unwrap(),
            modules: TempDir::new().unwrap(),
        }
    }

    pub fn home(&self) -> &Path {
        self.home.path()
    }

    /// Write `<home>/<subdir>/factories.properties`.
    pub fn write_config(&self, subdir: &str, contents: &str) -> PathBuf {
        let dir = self.home.path().join(subdir);
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("factories.properties");
        fs::write(&path, contents).unwrap();
        path
    }

    /// Write `<resources>/META-INF/services/<id>`.
    pub fn write_resource(&self, id: &str, contents: &str) {
        write_service_file(self.resources.path(), id, contents);
    }

    /// Write `<modules>/<module>/META-INF/services/<id>`.
    pub fn write_module_resource(&self, module: &str, id: &str, contents: &str) {
        write_service_file(&self.modules.path().join(module), id, contents);
    }

    /// A `factory-finder` command pointed at this layout.
    pub fn cmd(&self) -> Command {
        let mut cmd = finder_cmd();
        cmd.arg("--home")
            .arg(self.home.path())
            .arg("--resource-path")
            .arg(self.resources.path())
            .arg("--modules-dir")
            .arg(self.modules.path())
            .args(["--module", "impl"]);
        cmd
    }
}

fn write_service_file(root: &Path, id: &str, contents: &str) {
    let dir = root.join("META-INF").join("services");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(id), contents).unwrap();
}
