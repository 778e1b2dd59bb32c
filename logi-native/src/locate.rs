//! SDK library discovery
//!
//! Both SDKs install side by side under one family root:
//!
//! ```text
//! <install-root>/Logitech Gaming Software/SDK/<capability>/<arch>/<file>
//! ```
//!
//! The install root comes from `ProgramW6432` (the 64-bit Program Files, set
//! even for 32-bit processes on 64-bit Windows) and falls back to
//! `ProgramFiles`.

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::NativeError;

/// Vendor directory under the install root
pub const SDK_FAMILY_DIR: &str = "Logitech Gaming Software";

/// SDK directory under the vendor directory
pub const SDK_DIR: &str = "SDK";

/// Preferred install-root variable
pub const ENV_PROGRAM_W6432: &str = "ProgramW6432";

/// Fallback install-root variable
pub const ENV_PROGRAM_FILES: &str = "ProgramFiles";

/// Process architecture, selecting the library subdirectory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arch {
    X86,
    X64,
}

impl Arch {
    /// Architecture of the running process
    pub fn current() -> Self {
        if cfg!(target_pointer_width = "32") {
            Self::X86
        } else {
            Self::X64
        }
    }

    /// Directory name used by the SDK installer
    pub fn dir_name(&self) -> &'static str {
        match self {
            Self::X86 => "x86",
            Self::X64 => "x64",
        }
    }
}

/// One of the two vendor libraries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SdkLibrary {
    /// Illumination library
    Led,
    /// Applet library
    ArxControl,
}

impl SdkLibrary {
    /// Capability directory under `SDK/`
    pub fn capability_dir(&self) -> &'static str {
        match self {
            Self::Led => "LED",
            Self::ArxControl => "Arx Control",
        }
    }

    /// DLL file name
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Led => "LogitechLed.dll",
            Self::ArxControl => "LogitechGArxControl.dll",
        }
    }

    /// Path of the library relative to the install root
    pub fn subpath(&self, arch: Arch) -> PathBuf {
        [
            SDK_FAMILY_DIR,
            SDK_DIR,
            self.capability_dir(),
            arch.dir_name(),
            self.file_name(),
        ]
        .iter()
        .collect()
    }
}

impl fmt::Display for SdkLibrary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Led => write!(f, "LED SDK"),
            Self::ArxControl => write!(f, "Arx Control SDK"),
        }
    }
}

/// Resolve the install root from an environment lookup.
///
/// Empty values count as unset.
pub fn install_root<F>(env: F) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<OsString>,
{
    [ENV_PROGRAM_W6432, ENV_PROGRAM_FILES]
        .iter()
        .filter_map(|name| env(name))
        .find(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Locate `library` using the process environment and architecture.
///
/// An explicit path is returned unchanged; the loader reports it if it is
/// unusable.
pub fn locate(library: SdkLibrary, explicit: Option<&Path>) -> Result<PathBuf, NativeError> {
    locate_with(library, explicit, Arch::current(), |name| {
        std::env::var_os(name)
    })
}

/// Locate `library` with an injected architecture and environment lookup
pub fn locate_with<F>(
    library: SdkLibrary,
    explicit: Option<&Path>,
    arch: Arch,
    env: F,
) -> Result<PathBuf, NativeError>
where
    F: Fn(&str) -> Option<OsString>,
{
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    let root = install_root(env).ok_or(NativeError::InstallRootMissing { library })?;
    let path = root.join(library.subpath(arch));
    if path.exists() {
        Ok(path)
    } else {
        Err(NativeError::NotFound { library, path })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subpaths() {
        let led = SdkLibrary::Led.subpath(Arch::X64);
        assert!(led.ends_with("Logitech Gaming Software/SDK/LED/x64/LogitechLed.dll"));

        let arx = SdkLibrary::ArxControl.subpath(Arch::X86);
        assert!(arx.ends_with("Logitech Gaming Software/SDK/Arx Control/x86/LogitechGArxControl.dll"));
    }

    #[test]
    fn test_install_root_prefers_w6432() {
        let root = install_root(|name| match name {
            ENV_PROGRAM_W6432 => Some("C:/Program Files".into()),
            ENV_PROGRAM_FILES => Some("C:/Program Files (x86)".into()),
            _ => None,
        });
        assert_eq!(root, Some(PathBuf::from("C:/Program Files")));
    }

    #[test]
    fn test_install_root_empty_falls_back() {
        let root = install_root(|name| match name {
            ENV_PROGRAM_W6432 => Some(OsString::new()),
            ENV_PROGRAM_FILES => Some("D:/Apps".into()),
            _ => None,
        });
        assert_eq!(root, Some(PathBuf::from("D:/Apps")));
    }

    #[test]
    fn test_install_root_missing() {
        assert_eq!(install_root(|_| None), None);
    }

    #[test]
    fn test_explicit_path_wins() {
        let explicit = Path::new("/nowhere/LogitechLed.dll");
        let path = locate_with(SdkLibrary::Led, Some(explicit), Arch::X64, |_| None).unwrap();
        assert_eq!(path, explicit);
    }

    #[test]
    fn test_no_root_is_error() {
        let err = locate_with(SdkLibrary::ArxControl, None, Arch::X64, |_| None).unwrap_err();
        assert!(matches!(
            err,
            NativeError::InstallRootMissing {
                library: SdkLibrary::ArxControl
            }
        ));
    }

    #[test]
    fn test_arch_dir_names() {
        assert_eq!(Arch::X86.dir_name(), "x86");
        assert_eq!(Arch::X64.dir_name(), "x64");
    }
}
