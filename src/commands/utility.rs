//! Utility command handlers.

use std::path::Path;

use logi_driver::led::{Color, KeyName};
use logi_driver::native::{locate, Arch, NativeLibrary, SdkLibrary};
use logi_driver::DriverConfig;

use super::{parse_color, CommandResult};
use crate::cli::ConfigCommands;

/// Print where each SDK library resolves to and whether it loads
pub fn locate_libraries(config: &DriverConfig) -> CommandResult {
    println!("Architecture: {}", Arch::current().dir_name());
    let libraries = [
        (SdkLibrary::Led, config.led_library.as_deref()),
        (SdkLibrary::ArxControl, config.arx_library.as_deref()),
    ];
    for (library, explicit) in libraries {
        match locate(library, explicit) {
            Ok(path) => match NativeLibrary::open(&path) {
                Ok(_) => println!("{library}: {} (loaded)", path.display()),
                Err(e) => println!("{library}: {} ({e})", path.display()),
            },
            Err(e) => println!("{library}: {e}"),
        }
    }
    Ok(())
}

/// List key names with their SDK codes
pub fn keys(g_keys_only: bool) -> CommandResult {
    for key in KeyName::ALL
        .iter()
        .filter(|key| !g_keys_only || key.is_g_key())
    {
        println!("{:<16} 0x{:05x}", key.name(), key.code());
    }
    Ok(())
}

/// Show a color in every form the SDK uses
pub fn color(input: &str) -> CommandResult {
    let color: Color = parse_color(input)?;
    let percent = color.percent();
    println!("rgba    {}", color);
    println!("hex     {}", color.hex());
    println!("percent {} {} {}", percent.red, percent.green, percent.blue);
    Ok(())
}

pub fn config(command: ConfigCommands, path: &Path, effective: &DriverConfig) -> CommandResult {
    match command {
        ConfigCommands::Init { force } => {
            if path.exists() && !force {
                return Err(format!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                )
                .into());
            }
            DriverConfig::default().save(path)?;
            println!("Wrote {}", path.display());
        }
        ConfigCommands::Show => {
            println!("# {}", describe_source(path));
            print!("{}", toml::to_string_pretty(effective)?);
        }
    }
    Ok(())
}

fn describe_source(path: &Path) -> String {
    if path.exists() {
        path.display().to_string()
    } else {
        format!("{} (not present, defaults)", path.display())
    }
}
