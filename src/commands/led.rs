//! LED SDK command handlers.

use logi_driver::led::{LedSdk, RgbPercent};
use logi_driver::DriverConfig;
use tracing::info;

use super::{parse_color, parse_key, parse_target, wait_for_enter, with_led_sdk, CommandResult};
use crate::cli::{LedCommands, TargetArgs};

pub fn run(config: &DriverConfig, command: LedCommands) -> CommandResult {
    match command {
        LedCommands::Set { color, target } => {
            let color = parse_color(&color)?;
            with_led_sdk(config, |sdk| {
                apply_target(sdk, &target)?;
                report("set lighting", sdk.set_lighting(color));
                hold()
            })
        }
        LedCommands::Flash {
            color,
            duration,
            interval,
            target,
        } => {
            let color = parse_color(&color)?;
            with_led_sdk(config, |sdk| {
                apply_target(sdk, &target)?;
                report("flash", sdk.flash_lighting(color, duration, interval));
                hold()
            })
        }
        LedCommands::Pulse {
            color,
            duration,
            interval,
            target,
        } => {
            let color = parse_color(&color)?;
            with_led_sdk(config, |sdk| {
                apply_target(sdk, &target)?;
                report("pulse", sdk.pulse_lighting(color, duration, interval));
                hold()
            })
        }
        LedCommands::Key { key, color } => {
            let (key, color) = (parse_key(&key)?, parse_color(&color)?);
            with_led_sdk(config, |sdk| {
                report(
                    &format!("set {key}"),
                    sdk.set_lighting_for_key_with_key_name(key, color),
                );
                hold()
            })
        }
        LedCommands::FlashKey {
            key,
            color,
            duration,
            interval,
        } => {
            let (key, color) = (parse_key(&key)?, parse_color(&color)?);
            with_led_sdk(config, |sdk| {
                report(
                    &format!("flash {key}"),
                    sdk.flash_single_key(key, color, duration, interval),
                );
                hold()
            })
        }
        LedCommands::PulseKey {
            key,
            start,
            finish,
            duration,
            infinite,
        } => {
            let key = parse_key(&key)?;
            let (start, finish) = (parse_color(&start)?, parse_color(&finish)?);
            with_led_sdk(config, |sdk| {
                report(
                    &format!("pulse {key}"),
                    sdk.pulse_single_key(key, start, finish, duration, infinite),
                );
                hold()
            })
        }
        LedCommands::Stop { key } => {
            let key = key.as_deref().map(parse_key).transpose()?;
            with_led_sdk(config, |sdk| {
                match key {
                    Some(key) => report(&format!("stop {key}"), sdk.stop_effects_on_key(key)),
                    None => report("stop effects", sdk.stop_effects()),
                }
                Ok(())
            })
        }
        LedCommands::Restore => with_led_sdk(config, |sdk| {
            save_and_switch_off(sdk);
            wait_for_enter("Lighting saved and switched off. Press Enter to restore...")?;
            report("restore lighting", sdk.restore_lighting());
            Ok(())
        }),
        LedCommands::OptionNumber {
            path,
            default,
            label,
        } => with_led_sdk(config, |sdk| {
            set_label(sdk, &path, label.as_deref());
            print_option(&path, sdk.get_config_option_number(&path, default));
            Ok(())
        }),
        LedCommands::OptionBool {
            path,
            default,
            label,
        } => with_led_sdk(config, |sdk| {
            set_label(sdk, &path, label.as_deref());
            print_option(&path, sdk.get_config_option_bool(&path, default));
            Ok(())
        }),
        LedCommands::OptionColor {
            path,
            default,
            label,
        } => {
            let default = parse_color(&default)?;
            with_led_sdk(config, |sdk| {
                set_label(sdk, &path, label.as_deref());
                print_option(&path, sdk.get_config_option_color(&path, default));
                Ok(())
            })
        }
        LedCommands::OptionKey {
            path,
            default,
            label,
        } => with_led_sdk(config, |sdk| {
            set_label(sdk, &path, label.as_deref());
            print_option(&path, sdk.get_config_option_key_input(&path, &default));
            Ok(())
        }),
    }
}

fn apply_target(sdk: &LedSdk, target: &TargetArgs) -> CommandResult {
    let target = parse_target(&target.target)?;
    report(&format!("target {target:?}"), sdk.set_target_device(target));
    Ok(())
}

/// Save the current lighting, then turn everything off; `true` if both worked
fn save_and_switch_off(sdk: &LedSdk) -> bool {
    let saved = sdk.save_current_lighting();
    report("save lighting", saved);
    let off = sdk.set_lighting(RgbPercent::BLACK);
    report("switch off", off);
    saved && off
}

fn report(what: &str, ok: bool) {
    if ok {
        info!("{} ok", what);
    } else {
        eprintln!("{what}: SDK reported failure");
    }
}

/// Effects end with the SDK session, so keep it open until Enter
fn hold() -> CommandResult {
    wait_for_enter("Press Enter to exit...")?;
    Ok(())
}

fn set_label(sdk: &LedSdk, path: &str, label: Option<&str>) {
    if let Some(label) = label {
        report("set label", sdk.set_config_option_label(path, label));
    }
}

fn print_option<T: std::fmt::Display>(path: &str, value: Option<T>) {
    match value {
        Some(value) => println!("{path} = {value}"),
        None => eprintln!("{path}: not available"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_switch_off_failure_is_reported() {
        let sdk = LedSdk::unavailable();
        assert!(!save_and_switch_off(&sdk));
    }
}
