//! Shared library loading
//!
//! Each path is loaded at most once per process and stays mapped until exit.
//! The applet SDK calls back into this process from its own threads, so the
//! code behind the resolved entry points must never be unmapped underneath it.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use libloading::Library;
use parking_lot::Mutex;
use tracing::{debug, info};

use crate::error::NativeError;
use crate::locate::{locate, SdkLibrary};

// Global registry of loaded libraries, keyed by resolved path
static LOADED: OnceLock<Mutex<HashMap<PathBuf, &'static Library>>> = OnceLock::new();

fn loaded() -> &'static Mutex<HashMap<PathBuf, &'static Library>> {
    LOADED.get_or_init(|| Mutex::new(HashMap::new()))
}

/// Handle to a loaded SDK library
#[derive(Debug, Clone)]
pub struct NativeLibrary {
    path: PathBuf,
    library: &'static Library,
}

impl NativeLibrary {
    /// Locate and load one of the SDK libraries
    pub fn load(library: SdkLibrary, explicit: Option<&Path>) -> Result<Self, NativeError> {
        let path = locate(library, explicit)?;
        Self::open(&path)
    }

    /// Load the library at `path`, reusing an earlier load of the same path
    pub fn open(path: &Path) -> Result<Self, NativeError> {
        let mut loaded = loaded().lock();
        if let Some(library) = loaded.get(path) {
            debug!("Reusing loaded library {}", path.display());
            return Ok(Self {
                path: path.to_path_buf(),
                library,
            });
        }

        // SAFETY: the SDK DLLs run no initialisation code with preconditions
        // beyond being loaded into a normal process.
        let library = unsafe { Library::new(path) }.map_err(|source| NativeError::Load {
            path: path.to_path_buf(),
            source,
        })?;
        let library: &'static Library = Box::leak(Box::new(library));
        loaded.insert(path.to_path_buf(), library);
        info!("Loaded {}", path.display());

        Ok(Self {
            path: path.to_path_buf(),
            library,
        })
    }

    /// Path the library was loaded from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Resolve an exported entry point, `None` if the library lacks it.
    ///
    /// # Safety
    /// `T` must be the exact function pointer type of the export.
    pub unsafe fn symbol<T: Copy>(&self, name: &str) -> Option<T> {
        match self.library.get::<T>(name.as_bytes()) {
            Ok(symbol) => Some(*symbol),
            Err(e) => {
                debug!("{} does not export {}: {}", self.path.display(), name, e);
                None
            }
        }
    }
}
