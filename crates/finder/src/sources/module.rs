//! Directory-backed module discovery.
//!
//! A modules root holds one directory per module; each module directory is a
//! resource root of its own and instantiates names through the instantiator
//! it was configured with.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::resources::read_first_line;
use crate::capability::{Instantiator, ModuleHandle, ModuleRegistry};
use crate::error::LookupError;

/// Module discovery over `<root>/<module name>/` directories.
pub struct DirectoryModules<T: ?Sized> {
    root: PathBuf,
    instantiator: Arc<dyn Instantiator<T>>,
}

impl<T: ?Sized> DirectoryModules<T> {
    pub fn new(root: impl Into<PathBuf>, instantiator: Arc<dyn Instantiator<T>>) -> Self {
        Self {
            root: root.into(),
            instantiator,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl<T: ?Sized> ModuleRegistry<T> for DirectoryModules<T> {
    fn load_module(&self, module: &str) -> Result<Option<Box<dyn ModuleHandle<T> + '_>>, LookupError> {
        if !self.root.is_dir() {
            return Ok(None);
        }

        let dir = self.root.join(module);
        if !dir.is_dir() {
            return Err(LookupError::ModuleUnavailable(format!(
                "module {module} not found under {}",
                self.root.display()
            )));
        }

        Ok(Some(Box::new(DirectoryModule {
            dir,
            instantiator: self.instantiator.as_ref(),
        })))
    }
}

impl<T: ?Sized> fmt::Debug for DirectoryModules<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectoryModules")
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}

struct DirectoryModule<'a, T: ?Sized> {
    dir: PathBuf,
    instantiator: &'a dyn Instantiator<T>,
}

impl<T: ?Sized> ModuleHandle<T> for DirectoryModule<'_, T> {
    fn resource(&self, name: &str) -> Result<Option<String>, LookupError> {
        read_first_line(&self.dir, name)
    }

    fn instantiator(&self) -> &dyn Instantiator<T> {
        self.instantiator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instantiate::{NameOnly, ProviderName};
    use crate::sources::resources::resource_name;
    use tempfile::TempDir;

    fn modules(root: &Path) -> DirectoryModules<ProviderName> {
        DirectoryModules::new(root, Arc::new(NameOnly))
    }

    #[test]
    fn test_missing_root_means_mechanism_absent() {
        let temp_dir = TempDir::new().unwrap();
        let registry = modules(&temp_dir.path().join("nope"));
        assert!(registry.load_module("impl").unwrap().is_none());
    }

    #[test]
    fn test_missing_module_is_unavailable() {
        let temp_dir = TempDir::new().unwrap();
        let registry = modules(temp_dir.path());
        assert!(matches!(
            registry.load_module("impl"),
            Err(LookupError::ModuleUnavailable(_))
        ));
    }

    #[test]
    fn test_module_resources_and_instantiation() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("impl").join(resource_name("a.B"));
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "com.example.ModuleImpl\n").unwrap();

        let registry = modules(temp_dir.path());
        let module = registry.load_module("impl").unwrap().unwrap();
        let name = module.resource(&resource_name("a.B")).unwrap().unwrap();
        assert_eq!(name, "com.example.ModuleImpl");

        let instance = module.instantiator().instantiate(&name, None).unwrap();
        assert_eq!(instance.as_str(), "com.example.ModuleImpl");
    }

    #[test]
    fn test_blank_resource_is_present_but_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("impl").join(resource_name("Old"));
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "\n").unwrap();

        let registry = modules(temp_dir.path());
        let module = registry.load_module("impl").unwrap().unwrap();
        assert_eq!(module.resource(&resource_name("Old")).unwrap(), Some(String::new()));
        assert_eq!(module.resource(&resource_name("New")).unwrap(), None);
    }
}
