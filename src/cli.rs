// CLI definitions using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "logi_driver")]
#[command(author, version, about = "Logitech Gaming LED and Arx Control SDK driver")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file (default: <config dir>/logi-driver/config.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Path to LogitechLed.dll, overriding the install search
    #[arg(long, global = true, value_name = "DLL")]
    pub led_library: Option<PathBuf>,

    /// Path to LogitechGArxControl.dll, overriding the install search
    #[arg(long, global = true, value_name = "DLL")]
    pub arx_library: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show where the SDK libraries are looked for and whether they load
    #[command(visible_alias = "where")]
    Locate,

    /// List key names accepted by per-key commands
    Keys {
        /// Only G-keys and badge/logo
        #[arg(long)]
        g_keys: bool,
    },

    /// Parse a color and show its channels, hex form and percentages
    Color {
        /// Name (red, cyan, ...) or hex (#rrggbb, #rrggbbaa)
        color: String,
    },

    /// Drive the LED SDK
    #[command(subcommand)]
    Led(LedCommands),

    /// Run an Arx Control applet
    #[command(subcommand)]
    Arx(ArxCommands),

    /// Manage the config file
    #[command(subcommand)]
    Config(ConfigCommands),
}

/// Which devices a lighting command targets
#[derive(clap::Args, Debug, Clone)]
pub struct TargetArgs {
    /// Device groups: all, mono, rgb, perkey (comma separated)
    #[arg(long, short, default_value = "all", value_delimiter = ',')]
    pub target: Vec<String>,
}

#[derive(Subcommand)]
pub enum LedCommands {
    /// Set every LED to one color
    #[command(visible_alias = "s")]
    Set {
        color: String,
        #[command(flatten)]
        target: TargetArgs,
    },

    /// Flash every LED
    Flash {
        color: String,
        /// Total duration in ms (0 = until stopped)
        #[arg(long, short, default_value = "0")]
        duration: i32,
        /// Flash interval in ms
        #[arg(long, short, default_value = "500")]
        interval: i32,
        #[command(flatten)]
        target: TargetArgs,
    },

    /// Pulse every LED
    Pulse {
        color: String,
        /// Total duration in ms (0 = until stopped)
        #[arg(long, short, default_value = "0")]
        duration: i32,
        /// Pulse interval in ms
        #[arg(long, short, default_value = "1000")]
        interval: i32,
        #[command(flatten)]
        target: TargetArgs,
    },

    /// Set one key (per-key RGB keyboards)
    Key {
        /// Key name, e.g. ESC, G_1, NUM_ENTER
        key: String,
        color: String,
    },

    /// Flash one key
    FlashKey {
        key: String,
        color: String,
        #[arg(long, short, default_value = "0")]
        duration: i32,
        #[arg(long, short, default_value = "500")]
        interval: i32,
    },

    /// Fade one key between two colors
    PulseKey {
        key: String,
        /// Start color
        start: String,
        /// Finish color (default: black)
        #[arg(default_value = "black")]
        finish: String,
        #[arg(long, short, default_value = "1000")]
        duration: i32,
        /// Repeat until stopped
        #[arg(long)]
        infinite: bool,
    },

    /// Stop running effects (on one key if given)
    Stop { key: Option<String> },

    /// Save the current lighting, then restore it on Enter
    Restore,

    /// Read a numeric config option from the gaming software
    OptionNumber {
        path: String,
        #[arg(default_value = "0")]
        default: f64,
        /// Label shown in the settings UI
        #[arg(long)]
        label: Option<String>,
    },

    /// Read a boolean config option
    OptionBool {
        path: String,
        #[arg(long)]
        default: bool,
        #[arg(long)]
        label: Option<String>,
    },

    /// Read a color config option
    OptionColor {
        path: String,
        #[arg(default_value = "white")]
        default: String,
        #[arg(long)]
        label: Option<String>,
    },

    /// Read a key-binding config option
    OptionKey {
        path: String,
        #[arg(default_value = "")]
        default: String,
        #[arg(long)]
        label: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum ArxCommands {
    /// Upload a small page and print events until Enter
    Demo {
        /// Update the page from a custom handler instead of only logging
        #[arg(long)]
        custom_handler: bool,
        /// Also print events received on a subscriber thread
        #[arg(long)]
        watch: bool,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Write a default config file (refuses to overwrite unless --force)
    Init {
        #[arg(long)]
        force: bool,
    },
    /// Print the effective config
    Show,
}
