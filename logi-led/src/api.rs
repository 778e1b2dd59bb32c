//! LED SDK entry points
//!
//! `LedApi` is the seam between the safe wrappers in [`crate::LedSdk`] and
//! the vendor DLL. Its methods take native-width arguments and map one-to-one
//! onto exports of `LogitechLed.dll`. [`NativeLedApi`] implements it over a
//! loaded library; tests substitute a recording implementation.

use std::os::raw::c_int;

use tracing::warn;

use logi_native::{NativeLibrary, WChar, WideCString};

use crate::device::BITMAP_SIZE;

/// Native LED SDK surface
pub trait LedApi: Send + Sync {
    fn init(&self) -> bool;
    fn set_target_device(&self, target_device: c_int) -> bool;
    fn save_current_lighting(&self) -> bool;
    fn restore_lighting(&self) -> bool;
    fn set_lighting(&self, red: c_int, green: c_int, blue: c_int) -> bool;
    fn flash_lighting(
        &self,
        red: c_int,
        green: c_int,
        blue: c_int,
        ms_duration: c_int,
        ms_interval: c_int,
    ) -> bool;
    fn pulse_lighting(
        &self,
        red: c_int,
        green: c_int,
        blue: c_int,
        ms_duration: c_int,
        ms_interval: c_int,
    ) -> bool;
    fn stop_effects(&self) -> bool;
    fn set_lighting_from_bitmap(&self, bitmap: &[u8; BITMAP_SIZE]) -> bool;
    fn set_lighting_for_key_with_scan_code(
        &self,
        key_code: c_int,
        red: c_int,
        green: c_int,
        blue: c_int,
    ) -> bool;
    fn set_lighting_for_key_with_hid_code(
        &self,
        key_code: c_int,
        red: c_int,
        green: c_int,
        blue: c_int,
    ) -> bool;
    fn set_lighting_for_key_with_quartz_code(
        &self,
        key_code: c_int,
        red: c_int,
        green: c_int,
        blue: c_int,
    ) -> bool;
    fn set_lighting_for_key_with_key_name(
        &self,
        key_name: c_int,
        red: c_int,
        green: c_int,
        blue: c_int,
    ) -> bool;
    fn save_lighting_for_key(&self, key_name: c_int) -> bool;
    fn restore_lighting_for_key(&self, key_name: c_int) -> bool;
    fn flash_single_key(
        &self,
        key_name: c_int,
        red: c_int,
        green: c_int,
        blue: c_int,
        ms_duration: c_int,
        ms_interval: c_int,
    ) -> bool;
    #[allow(clippy::too_many_arguments)]
    fn pulse_single_key(
        &self,
        key_name: c_int,
        start_red: c_int,
        start_green: c_int,
        start_blue: c_int,
        finish_red: c_int,
        finish_green: c_int,
        finish_blue: c_int,
        ms_duration: c_int,
        is_infinite: bool,
    ) -> bool;
    fn stop_effects_on_key(&self, key_name: c_int) -> bool;

    /// `value` carries the default in and the configured value out
    fn get_config_option_number(&self, config_path: &WideCString, value: &mut f64) -> bool;
    fn get_config_option_bool(&self, config_path: &WideCString, value: &mut bool) -> bool;
    fn get_config_option_color(
        &self,
        config_path: &WideCString,
        red: &mut c_int,
        green: &mut c_int,
        blue: &mut c_int,
    ) -> bool;
    /// `buffer` holds the NUL-terminated default and receives the value
    fn get_config_option_key_input(&self, config_path: &WideCString, buffer: &mut [WChar])
        -> bool;
    fn set_config_option_label(&self, config_path: &WideCString, label: &WideCString) -> bool;

    /// `true` once the (void) export has been called
    fn shutdown(&self) -> bool;
}

type FnVoid = unsafe extern "C" fn() -> bool;
type FnInt = unsafe extern "C" fn(c_int) -> bool;
type FnRgb = unsafe extern "C" fn(c_int, c_int, c_int) -> bool;
type FnRgbTiming = unsafe extern "C" fn(c_int, c_int, c_int, c_int, c_int) -> bool;
type FnBitmap = unsafe extern "C" fn(*const u8) -> bool;
type FnKeyRgb = unsafe extern "C" fn(c_int, c_int, c_int, c_int) -> bool;
type FnKeyRgbTiming = unsafe extern "C" fn(c_int, c_int, c_int, c_int, c_int, c_int) -> bool;
type FnKeyPulse = unsafe extern "C" fn(
    c_int,
    c_int,
    c_int,
    c_int,
    c_int,
    c_int,
    c_int,
    c_int,
    bool,
) -> bool;
type FnOptionNumber = unsafe extern "C" fn(*const WChar, *mut f64) -> bool;
type FnOptionBool = unsafe extern "C" fn(*const WChar, *mut bool) -> bool;
type FnOptionColor = unsafe extern "C" fn(*const WChar, *mut c_int, *mut c_int, *mut c_int) -> bool;
type FnOptionKeyInput = unsafe extern "C" fn(*const WChar, *mut WChar, c_int) -> bool;
type FnOptionLabel = unsafe extern "C" fn(*const WChar, *const WChar) -> bool;
type FnShutdown = unsafe extern "C" fn();

/// Entry points resolved from a loaded `LogitechLed.dll`
///
/// Exports missing from older SDK versions resolve to `None`; calling one
/// reports failure.
pub struct NativeLedApi {
    library: NativeLibrary,
    init: Option<FnVoid>,
    set_target_device: Option<FnInt>,
    save_current_lighting: Option<FnVoid>,
    restore_lighting: Option<FnVoid>,
    set_lighting: Option<FnRgb>,
    flash_lighting: Option<FnRgbTiming>,
    pulse_lighting: Option<FnRgbTiming>,
    stop_effects: Option<FnVoid>,
    set_lighting_from_bitmap: Option<FnBitmap>,
    set_lighting_for_key_with_scan_code: Option<FnKeyRgb>,
    set_lighting_for_key_with_hid_code: Option<FnKeyRgb>,
    set_lighting_for_key_with_quartz_code: Option<FnKeyRgb>,
    set_lighting_for_key_with_key_name: Option<FnKeyRgb>,
    save_lighting_for_key: Option<FnInt>,
    restore_lighting_for_key: Option<FnInt>,
    flash_single_key: Option<FnKeyRgbTiming>,
    pulse_single_key: Option<FnKeyPulse>,
    stop_effects_on_key: Option<FnInt>,
    get_config_option_number: Option<FnOptionNumber>,
    get_config_option_bool: Option<FnOptionBool>,
    get_config_option_color: Option<FnOptionColor>,
    get_config_option_key_input: Option<FnOptionKeyInput>,
    set_config_option_label: Option<FnOptionLabel>,
    shutdown: Option<FnShutdown>,
}

impl NativeLedApi {
    /// Resolve every entry point from `library`
    pub fn new(library: NativeLibrary) -> Self {
        // SAFETY: each type alias matches the prototype in LogitechLEDLib.h.
        unsafe {
            Self {
                init: library.symbol("LogiLedInit"),
                set_target_device: library.symbol("LogiLedSetTargetDevice"),
                save_current_lighting: library.symbol("LogiLedSaveCurrentLighting"),
                restore_lighting: library.symbol("LogiLedRestoreLighting"),
                set_lighting: library.symbol("LogiLedSetLighting"),
                flash_lighting: library.symbol("LogiLedFlashLighting"),
                pulse_lighting: library.symbol("LogiLedPulseLighting"),
                stop_effects: library.symbol("LogiLedStopEffects"),
                set_lighting_from_bitmap: library.symbol("LogiLedSetLightingFromBitmap"),
                set_lighting_for_key_with_scan_code: library
                    .symbol("LogiLedSetLightingForKeyWithScanCode"),
                set_lighting_for_key_with_hid_code: library
                    .symbol("LogiLedSetLightingForKeyWithHidCode"),
                set_lighting_for_key_with_quartz_code: library
                    .symbol("LogiLedSetLightingForKeyWithQuartzCode"),
                set_lighting_for_key_with_key_name: library
                    .symbol("LogiLedSetLightingForKeyWithKeyName"),
                save_lighting_for_key: library.symbol("LogiLedSaveLightingForKey"),
                restore_lighting_for_key: library.symbol("LogiLedRestoreLightingForKey"),
                flash_single_key: library.symbol("LogiLedFlashSingleKey"),
                pulse_single_key: library.symbol("LogiLedPulseSingleKey"),
                stop_effects_on_key: library.symbol("LogiLedStopEffectsOnKey"),
                get_config_option_number: library.symbol("LogiGetConfigOptionNumber"),
                get_config_option_bool: library.symbol("LogiGetConfigOptionBool"),
                get_config_option_color: library.symbol("LogiGetConfigOptionColor"),
                get_config_option_key_input: library.symbol("LogiGetConfigOptionKeyInput"),
                set_config_option_label: library.symbol("LogiSetConfigOptionLabel"),
                shutdown: library.symbol("LogiLedShutdown"),
                library,
            }
        }
    }

    /// Library the entry points came from
    pub fn library(&self) -> &NativeLibrary {
        &self.library
    }
}

/// Call a resolved entry point, or report failure if it is missing
macro_rules! call {
    ($self:ident . $entry:ident ( $($arg:expr),* )) => {
        match $self.$entry {
            // SAFETY: the pointer was resolved with its exact prototype and the
            // library stays loaded for the life of the process.
            Some(f) => unsafe { f($($arg),*) },
            None => {
                warn!("LED SDK entry point for {} is not exported", stringify!($entry));
                false
            }
        }
    };
}

impl LedApi for NativeLedApi {
    fn init(&self) -> bool {
        call!(self.init())
    }

    fn set_target_device(&self, target_device: c_int) -> bool {
        call!(self.set_target_device(target_device))
    }

    fn save_current_lighting(&self) -> bool {
        call!(self.save_current_lighting())
    }

    fn restore_lighting(&self) -> bool {
        call!(self.restore_lighting())
    }

    fn set_lighting(&self, red: c_int, green: c_int, blue: c_int) -> bool {
        call!(self.set_lighting(red, green, blue))
    }

    fn flash_lighting(
        &self,
        red: c_int,
        green: c_int,
        blue: c_int,
        ms_duration: c_int,
        ms_interval: c_int,
    ) -> bool {
        call!(self.flash_lighting(red, green, blue, ms_duration, ms_interval))
    }

    fn pulse_lighting(
        &self,
        red: c_int,
        green: c_int,
        blue: c_int,
        ms_duration: c_int,
        ms_interval: c_int,
    ) -> bool {
        call!(self.pulse_lighting(red, green, blue, ms_duration, ms_interval))
    }

    fn stop_effects(&self) -> bool {
        call!(self.stop_effects())
    }

    fn set_lighting_from_bitmap(&self, bitmap: &[u8; BITMAP_SIZE]) -> bool {
        call!(self.set_lighting_from_bitmap(bitmap.as_ptr()))
    }

    fn set_lighting_for_key_with_scan_code(
        &self,
        key_code: c_int,
        red: c_int,
        green: c_int,
        blue: c_int,
    ) -> bool {
        call!(self.set_lighting_for_key_with_scan_code(key_code, red, green, blue))
    }

    fn set_lighting_for_key_with_hid_code(
        &self,
        key_code: c_int,
        red: c_int,
        green: c_int,
        blue: c_int,
    ) -> bool {
        call!(self.set_lighting_for_key_with_hid_code(key_code, red, green, blue))
    }

    fn set_lighting_for_key_with_quartz_code(
        &self,
        key_code: c_int,
        red: c_int,
        green: c_int,
        blue: c_int,
    ) -> bool {
        call!(self.set_lighting_for_key_with_quartz_code(key_code, red, green, blue))
    }

    fn set_lighting_for_key_with_key_name(
        &self,
        key_name: c_int,
        red: c_int,
        green: c_int,
        blue: c_int,
    ) -> bool {
        call!(self.set_lighting_for_key_with_key_name(key_name, red, green, blue))
    }

    fn save_lighting_for_key(&self, key_name: c_int) -> bool {
        call!(self.save_lighting_for_key(key_name))
    }

    fn restore_lighting_for_key(&self, key_name: c_int) -> bool {
        call!(self.restore_lighting_for_key(key_name))
    }

    fn flash_single_key(
        &self,
        key_name: c_int,
        red: c_int,
        green: c_int,
        blue: c_int,
        ms_duration: c_int,
        ms_interval: c_int,
    ) -> bool {
        call!(self.flash_single_key(key_name, red, green, blue, ms_duration, ms_interval))
    }

    fn pulse_single_key(
        &self,
        key_name: c_int,
        start_red: c_int,
        start_green: c_int,
        start_blue: c_int,
        finish_red: c_int,
        finish_green: c_int,
        finish_blue: c_int,
        ms_duration: c_int,
        is_infinite: bool,
    ) -> bool {
        call!(self.pulse_single_key(
            key_name,
            start_red,
            start_green,
            start_blue,
            finish_red,
            finish_green,
            finish_blue,
            ms_duration,
            is_infinite
        ))
    }

    fn stop_effects_on_key(&self, key_name: c_int) -> bool {
        call!(self.stop_effects_on_key(key_name))
    }

    fn get_config_option_number(&self, config_path: &WideCString, value: &mut f64) -> bool {
        call!(self.get_config_option_number(config_path.as_ptr(), value as *mut f64))
    }

    fn get_config_option_bool(&self, config_path: &WideCString, value: &mut bool) -> bool {
        call!(self.get_config_option_bool(config_path.as_ptr(), value as *mut bool))
    }

    fn get_config_option_color(
        &self,
        config_path: &WideCString,
        red: &mut c_int,
        green: &mut c_int,
        blue: &mut c_int,
    ) -> bool {
        call!(self.get_config_option_color(
            config_path.as_ptr(),
            red as *mut c_int,
            green as *mut c_int,
            blue as *mut c_int
        ))
    }

    fn get_config_option_key_input(
        &self,
        config_path: &WideCString,
        buffer: &mut [WChar],
    ) -> bool {
        let Ok(buffer_size) = c_int::try_from(buffer.len()) else {
            warn!("Key input buffer of {} units is too large", buffer.len());
            return false;
        };
        call!(self.get_config_option_key_input(
            config_path.as_ptr(),
            buffer.as_mut_ptr(),
            buffer_size
        ))
    }

    fn set_config_option_label(&self, config_path: &WideCString, label: &WideCString) -> bool {
        call!(self.set_config_option_label(config_path.as_ptr(), label.as_ptr()))
    }

    fn shutdown(&self) -> bool {
        match self.shutdown {
            Some(f) => {
                // SAFETY: see `call!`
                unsafe { f() };
                true
            }
            None => {
                warn!("LED SDK entry point for shutdown is not exported");
                false
            }
        }
    }
}
