//! Native library plumbing for the Logitech Gaming SDKs
//!
//! This crate owns everything both SDK bindings share:
//!
//! - Locating the vendor DLL from process bitness and the install-root
//!   environment convention (`locate`)
//! - Loading it once per process and resolving typed entry points
//!   (`NativeLibrary`)
//! - Marshaling Rust strings to and from NUL-terminated UTF-16 (`wide`)

pub mod error;
pub mod library;
pub mod locate;
pub mod wide;

pub use error::NativeError;
pub use library::NativeLibrary;
pub use locate::{install_root, locate, locate_with, Arch, SdkLibrary};
pub use wide::{WChar, WideCString};
