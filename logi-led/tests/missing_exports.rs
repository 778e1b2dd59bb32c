//! The native binding over a library that loads but exports none of the LED
//! SDK entry points: every wrapper reports failure instead of calling through.

#![cfg(any(target_os = "linux", target_os = "macos", windows))]

use std::path::Path;
use std::sync::Arc;

use logi_led::{Color, KeyName, LedBitmap, LedSdk, NativeLedApi, RgbPercent, TargetDevice};
use logi_native::NativeLibrary;

#[cfg(target_os = "linux")]
const SYSTEM_LIBRARY: &str = "libc.so.6";
#[cfg(target_os = "macos")]
const SYSTEM_LIBRARY: &str = "/usr/lib/libSystem.B.dylib";
#[cfg(windows)]
const SYSTEM_LIBRARY: &str = "kernel32.dll";

fn sdk_without_exports() -> LedSdk {
    let library = NativeLibrary::open(Path::new(SYSTEM_LIBRARY)).unwrap();
    LedSdk::with_api(Arc::new(NativeLedApi::new(library)))
}

#[test]
fn every_wrapper_reports_the_missing_export() {
    let sdk = sdk_without_exports();
    assert!(sdk.is_available());

    assert!(!sdk.init());
    assert!(!sdk.set_target_device(TargetDevice::ALL));
    assert!(!sdk.save_current_lighting());
    assert!(!sdk.set_lighting((100, 0, 0)));
    assert!(!sdk.flash_lighting(Color::RED, 0, 100));
    assert!(!sdk.pulse_lighting(Color::RED, 0, 100));
    assert!(!sdk.stop_effects());
    assert!(!sdk.set_lighting_from_bitmap(&LedBitmap::new()));
    assert!(!sdk.set_lighting_for_key_with_scan_code(0x01, (1, 2, 3)));
    assert!(!sdk.set_lighting_for_key_with_hid_code(0x29, (1, 2, 3)));
    assert!(!sdk.set_lighting_for_key_with_quartz_code(0x35, (1, 2, 3)));
    assert!(!sdk.set_lighting_for_key_with_key_name(KeyName::Esc, (1, 2, 3)));
    assert!(!sdk.save_lighting_for_key(KeyName::Esc));
    assert!(!sdk.restore_lighting_for_key(KeyName::Esc));
    assert!(!sdk.flash_single_key(KeyName::Esc, Color::BLUE, 0, 100));
    assert!(!sdk.pulse_single_key(KeyName::Esc, Color::BLUE, RgbPercent::BLACK, 100, false));
    assert!(!sdk.stop_effects_on_key(KeyName::Esc));
    assert!(!sdk.restore_lighting());
    assert_eq!(sdk.get_config_option_number("n", 1.0), None);
    assert_eq!(sdk.get_config_option_bool("b", true), None);
    assert_eq!(sdk.get_config_option_color("c", Color::WHITE), None);
    assert_eq!(sdk.get_config_option_key_input("k", "F1"), None);
    assert!(!sdk.set_config_option_label("n", "Number"));
    assert!(!sdk.shutdown());
}
