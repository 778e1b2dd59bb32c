//! Logitech Gaming SDK driver
//!
//! Re-exports the LED and Arx Control bindings and holds the configuration
//! shared by the `logi_driver` binary.

pub mod config;

pub use config::{AppletConfig, DriverConfig, DEFAULT_LOG_FILTER};

pub use logi_arx as arx;
pub use logi_led as led;
pub use logi_native as native;
