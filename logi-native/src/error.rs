//! Native library error types

use std::path::PathBuf;
use thiserror::Error;

use crate::locate::SdkLibrary;

/// Errors that can occur while locating or loading an SDK library
#[derive(Error, Debug)]
pub enum NativeError {
    /// Neither `ProgramW6432` nor `ProgramFiles` is set
    #[error("No install root for {library}: ProgramW6432 and ProgramFiles are unset")]
    InstallRootMissing { library: SdkLibrary },

    /// The derived library path does not exist
    #[error("{library} library not found at {}", path.display())]
    NotFound { library: SdkLibrary, path: PathBuf },

    /// The OS loader rejected the library (missing file, wrong architecture, ...)
    #[error("Failed to load {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: libloading::Error,
    },
}
