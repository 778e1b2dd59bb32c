//! Sessions over a library that cannot be loaded degrade to "unavailable".

use std::path::PathBuf;

use logi_driver::arx::ArxSession;
use logi_driver::led::{Color, KeyName, LedBitmap, LedSdk, RgbPercent, TargetDevice};
use logi_driver::native::NativeError;

fn bogus_library() -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("LogitechLed.dll");
    std::fs::write(&path, b"not a shared library").unwrap();
    (dir, path)
}

#[test]
fn load_reports_the_failure() {
    let (_dir, path) = bogus_library();
    assert!(matches!(
        LedSdk::load(Some(&path)),
        Err(NativeError::Load { .. })
    ));
    assert!(matches!(
        ArxSession::load(Some(&path)),
        Err(NativeError::Load { .. })
    ));
}

#[test]
fn led_wrappers_return_false() {
    let (_dir, path) = bogus_library();
    let sdk = LedSdk::load_or_unavailable(Some(&path));
    assert!(!sdk.is_available());

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

#[test]
fn arx_wrappers_return_false() {
    let (_dir, path) = bogus_library();
    let arx = ArxSession::load_or_unavailable(Some(&path));
    assert!(!arx.is_available());

    assert!(!arx.init("id", "name", None));
    assert!(!arx.bridge().is_registered());
    assert!(!arx.add_file_as("a.png", "a.png", Some("image/png")));
    assert!(!arx.add_content_as(b"abc", "a.bin", None));
    assert!(!arx.add_utf8_string_as("<p/>", "index.html", None));
    assert!(!arx.add_image_from_bitmap(&[0; 4], 1, 1, "p.png"));
    assert!(!arx.set_index("index.html"));
    assert!(!arx.set_tag_property_by_id("t", "style.color", "red"));
    assert!(!arx.set_tags_property_by_class("c", "style.color", "red"));
    assert!(!arx.set_tag_content_by_id("t", "x"));
    assert!(!arx.set_tags_content_by_class("c", "x"));
    assert_eq!(arx.get_last_error(), None);
    assert!(!arx.shutdown());
}

#[test]
fn red_in_every_form_is_the_same() {
    let forms = [
        Color::rgb(255, 0, 0),
        Color::named("red", 255).unwrap(),
        Color::from_hex("#ff0000").unwrap(),
        "FF0000".parse().unwrap(),
    ];
    for color in forms {
        assert_eq!(color, Color::RED);
        assert_eq!(color.percent(), RgbPercent::new(100, 0, 0));
    }
}
