//! Command handlers for the CLI application.
//!
//! - `led`: LED SDK commands (set, flash, pulse, per-key, config options)
//! - `arx`: Arx Control applet demo
//! - `utility`: commands that need no SDK session (locate, keys, color, config)

pub mod arx;
pub mod led;
pub mod utility;

use std::io::BufRead;
use std::time::Duration;

use logi_driver::led::{Color, KeyName, LedSdk, TargetDevice};
use logi_driver::DriverConfig;

/// Result type for command handlers
pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Load the LED SDK, initialise it and run a closure with it.
/// Shuts the SDK down afterwards whatever the closure returned.
pub fn with_led_sdk<F>(config: &DriverConfig, f: F) -> CommandResult
where
    F: FnOnce(&LedSdk) -> CommandResult,
{
    let sdk = LedSdk::load(config.led_library.as_deref())?;
    if !sdk.init() {
        return Err("LogiLedInit failed (is Logitech Gaming Software running?)".into());
    }
    startup_delay(config);

    let result = f(&sdk);
    sdk.shutdown();
    result
}

/// The SDK drops calls made right after init
pub fn startup_delay(config: &DriverConfig) {
    if config.startup_delay_ms > 0 {
        std::thread::sleep(Duration::from_millis(config.startup_delay_ms));
    }
}

/// Block until the user presses Enter
pub fn wait_for_enter(prompt: &str) -> std::io::Result<()> {
    println!("{prompt}");
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(())
}

pub fn parse_color(s: &str) -> Result<Color, Box<dyn std::error::Error>> {
    Ok(s.parse::<Color>()?)
}

pub fn parse_key(s: &str) -> Result<KeyName, Box<dyn std::error::Error>> {
    KeyName::from_name(s)
        .ok_or_else(|| format!("unknown key '{s}' (see `logi_driver keys`)").into())
}

/// Combine `all`, `mono`, `rgb`, `perkey` into target flags
pub fn parse_target(names: &[String]) -> Result<TargetDevice, Box<dyn std::error::Error>> {
    let mut target = TargetDevice::empty();
    for name in names {
        target |= match name.trim().to_ascii_lowercase().as_str() {
            "all" => TargetDevice::ALL,
            "mono" | "monochrome" => TargetDevice::MONOCHROME,
            "rgb" => TargetDevice::RGB,
            "perkey" | "perkey-rgb" | "per-key" => TargetDevice::PERKEY_RGB,
            other => return Err(format!("unknown target device '{other}'").into()),
        };
    }
    Ok(target)
}
