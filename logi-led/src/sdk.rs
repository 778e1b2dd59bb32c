//! Safe LED SDK session

use std::os::raw::c_int;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, trace, warn};

use logi_native::wide::{fill_buffer, from_buffer};
use logi_native::{NativeError, NativeLibrary, SdkLibrary, WChar, WideCString};

use crate::api::{LedApi, NativeLedApi};
use crate::bitmap::LedBitmap;
use crate::color::{Color, RgbPercent};
use crate::device::TargetDevice;
use crate::keys::KeyName;

/// Size of the in/out buffer for key-input config options (UTF-16 units)
pub const KEY_INPUT_BUFFER_LEN: usize = 128;

/// Default for a color config option: 0-100 percentages or a [`Color`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigColorDefault {
    Percent(RgbPercent),
    Color(Color),
}

impl ConfigColorDefault {
    fn to_color(self) -> Color {
        match self {
            Self::Percent(p) => Color::from_percent(p),
            Self::Color(c) => c,
        }
    }
}

impl From<Color> for ConfigColorDefault {
    fn from(color: Color) -> Self {
        Self::Color(color)
    }
}

impl From<RgbPercent> for ConfigColorDefault {
    fn from(percent: RgbPercent) -> Self {
        Self::Percent(percent)
    }
}

impl From<(i32, i32, i32)> for ConfigColorDefault {
    fn from(percent: (i32, i32, i32)) -> Self {
        Self::Percent(percent.into())
    }
}

/// Handle to the illumination SDK
///
/// Every method maps onto one SDK export and reports the SDK's success flag.
/// A session whose library could not be loaded is "unavailable": its methods
/// return `false` / `None` without calling anything.
///
/// Percentages are forwarded unchecked; the SDK expects 0-100.
#[derive(Clone)]
pub struct LedSdk {
    api: Option<Arc<dyn LedApi>>,
}

impl LedSdk {
    /// Locate and load `LogitechLed.dll`
    pub fn load(explicit: Option<&Path>) -> Result<Self, NativeError> {
        let library = NativeLibrary::load(SdkLibrary::Led, explicit)?;
        Ok(Self::with_api(Arc::new(NativeLedApi::new(library))))
    }

    /// Like [`LedSdk::load`], degrading to an unavailable session on failure
    pub fn load_or_unavailable(explicit: Option<&Path>) -> Self {
        match Self::load(explicit) {
            Ok(sdk) => sdk,
            Err(e) => {
                warn!("LED SDK unavailable: {}", e);
                Self::unavailable()
            }
        }
    }

    /// Session with no library behind it
    pub fn unavailable() -> Self {
        Self { api: None }
    }

    /// Session over any [`LedApi`] implementation
    pub fn with_api(api: Arc<dyn LedApi>) -> Self {
        Self { api: Some(api) }
    }

    pub fn is_available(&self) -> bool {
        self.api.is_some()
    }

    /// Run one entry point, or report failure without a library
    fn call<F>(&self, entry: &str, f: F) -> bool
    where
        F: FnOnce(&dyn LedApi) -> bool,
    {
        let Some(api) = self.api.as_deref() else {
            trace!("{}: LED SDK unavailable", entry);
            return false;
        };
        let ok = f(api);
        if !ok {
            debug!("{} reported failure", entry);
        }
        ok
    }

    // === Session ===

    /// Initialise the SDK for this process
    pub fn init(&self) -> bool {
        self.call("LogiLedInit", |api| api.init())
    }

    /// Shut the SDK down; lighting reverts to the user's profile
    pub fn shutdown(&self) -> bool {
        self.call("LogiLedShutdown", |api| api.shutdown())
    }

    /// Choose which device groups subsequent calls affect
    pub fn set_target_device(&self, target: TargetDevice) -> bool {
        self.call("LogiLedSetTargetDevice", |api| {
            api.set_target_device(target.bits())
        })
    }

    // === Whole-device lighting ===

    pub fn save_current_lighting(&self) -> bool {
        self.call("LogiLedSaveCurrentLighting", |api| {
            api.save_current_lighting()
        })
    }

    pub fn restore_lighting(&self) -> bool {
        self.call("LogiLedRestoreLighting", |api| api.restore_lighting())
    }

    pub fn set_lighting(&self, color: impl Into<RgbPercent>) -> bool {
        let p = color.into();
        self.call("LogiLedSetLighting", |api| {
            api.set_lighting(p.red, p.green, p.blue)
        })
    }

    /// Flash `color` every `interval_ms` for `duration_ms`
    /// ([`DURATION_INFINITE`](crate::DURATION_INFINITE) runs until stopped)
    pub fn flash_lighting(
        &self,
        color: impl Into<RgbPercent>,
        duration_ms: i32,
        interval_ms: i32,
    ) -> bool {
        let p = color.into();
        self.call("LogiLedFlashLighting", |api| {
            api.flash_lighting(p.red, p.green, p.blue, duration_ms, interval_ms)
        })
    }

    /// Pulse `color` every `interval_ms` for `duration_ms`
    pub fn pulse_lighting(
        &self,
        color: impl Into<RgbPercent>,
        duration_ms: i32,
        interval_ms: i32,
    ) -> bool {
        let p = color.into();
        self.call("LogiLedPulseLighting", |api| {
            api.pulse_lighting(p.red, p.green, p.blue, duration_ms, interval_ms)
        })
    }

    /// Stop flash and pulse effects on all keys
    pub fn stop_effects(&self) -> bool {
        self.call("LogiLedStopEffects", |api| api.stop_effects())
    }

    /// Per-key RGB devices only
    pub fn set_lighting_from_bitmap(&self, bitmap: &LedBitmap) -> bool {
        self.call("LogiLedSetLightingFromBitmap", |api| {
            api.set_lighting_from_bitmap(bitmap.as_bytes())
        })
    }

    // === Per-key lighting (per-key RGB devices only) ===

    pub fn set_lighting_for_key_with_scan_code(
        &self,
        key_code: i32,
        color: impl Into<RgbPercent>,
    ) -> bool {
        let p = color.into();
        self.call("LogiLedSetLightingForKeyWithScanCode", |api| {
            api.set_lighting_for_key_with_scan_code(key_code, p.red, p.green, p.blue)
        })
    }

    pub fn set_lighting_for_key_with_hid_code(
        &self,
        key_code: i32,
        color: impl Into<RgbPercent>,
    ) -> bool {
        let p = color.into();
        self.call("LogiLedSetLightingForKeyWithHidCode", |api| {
            api.set_lighting_for_key_with_hid_code(key_code, p.red, p.green, p.blue)
        })
    }

    /// macOS (Quartz) virtual key code
    pub fn set_lighting_for_key_with_quartz_code(
        &self,
        key_code: i32,
        color: impl Into<RgbPercent>,
    ) -> bool {
        let p = color.into();
        self.call("LogiLedSetLightingForKeyWithQuartzCode", |api| {
            api.set_lighting_for_key_with_quartz_code(key_code, p.red, p.green, p.blue)
        })
    }

    pub fn set_lighting_for_key_with_key_name(
        &self,
        key: KeyName,
        color: impl Into<RgbPercent>,
    ) -> bool {
        let p = color.into();
        self.call("LogiLedSetLightingForKeyWithKeyName", |api| {
            api.set_lighting_for_key_with_key_name(key.code(), p.red, p.green, p.blue)
        })
    }

    pub fn save_lighting_for_key(&self, key: KeyName) -> bool {
        self.call("LogiLedSaveLightingForKey", |api| {
            api.save_lighting_for_key(key.code())
        })
    }

    pub fn restore_lighting_for_key(&self, key: KeyName) -> bool {
        self.call("LogiLedRestoreLightingForKey", |api| {
            api.restore_lighting_for_key(key.code())
        })
    }

    pub fn flash_single_key(
        &self,
        key: KeyName,
        color: impl Into<RgbPercent>,
        duration_ms: i32,
        interval_ms: i32,
    ) -> bool {
        let p = color.into();
        self.call("LogiLedFlashSingleKey", |api| {
            api.flash_single_key(key.code(), p.red, p.green, p.blue, duration_ms, interval_ms)
        })
    }

    /// Fade `key` from `start` to `finish` over `duration_ms`, once or forever.
    ///
    /// Pass [`RgbPercent::BLACK`] as `finish` to fade out.
    pub fn pulse_single_key(
        &self,
        key: KeyName,
        start: impl Into<RgbPercent>,
        finish: impl Into<RgbPercent>,
        duration_ms: i32,
        infinite: bool,
    ) -> bool {
        let (s, f) = (start.into(), finish.into());
        self.call("LogiLedPulseSingleKey", |api| {
            api.pulse_single_key(
                key.code(),
                s.red,
                s.green,
                s.blue,
                f.red,
                f.green,
                f.blue,
                duration_ms,
                infinite,
            )
        })
    }

    pub fn stop_effects_on_key(&self, key: KeyName) -> bool {
        self.call("LogiLedStopEffectsOnKey", |api| {
            api.stop_effects_on_key(key.code())
        })
    }

    // === Configuration options ===
    //
    // Getters register `path` with the gaming software (which shows it in its
    // settings UI) and return the user's value, or `default` if unchanged.

    pub fn get_config_option_number(&self, path: &str, default: f64) -> Option<f64> {
        let path = WideCString::new(path);
        let mut value = default;
        self.call("LogiGetConfigOptionNumber", |api| {
            api.get_config_option_number(&path, &mut value)
        })
        .then_some(value)
    }

    pub fn get_config_option_bool(&self, path: &str, default: bool) -> Option<bool> {
        let path = WideCString::new(path);
        let mut value = default;
        self.call("LogiGetConfigOptionBool", |api| {
            api.get_config_option_bool(&path, &mut value)
        })
        .then_some(value)
    }

    /// The wire format is 0-255 per channel; a percentage default is scaled up
    pub fn get_config_option_color(
        &self,
        path: &str,
        default: impl Into<ConfigColorDefault>,
    ) -> Option<Color> {
        let path = WideCString::new(path);
        let default = default.into().to_color();
        let (mut red, mut green, mut blue) = (
            c_int::from(default.red()),
            c_int::from(default.green()),
            c_int::from(default.blue()),
        );
        self.call("LogiGetConfigOptionColor", |api| {
            api.get_config_option_color(&path, &mut red, &mut green, &mut blue)
        })
        .then(|| Color::rgb(to_channel(red), to_channel(green), to_channel(blue)))
    }

    /// Key binding option, e.g. `"F5"`
    pub fn get_config_option_key_input(&self, path: &str, default: &str) -> Option<String> {
        let path = WideCString::new(path);
        let mut buffer: [WChar; KEY_INPUT_BUFFER_LEN] = [0; KEY_INPUT_BUFFER_LEN];
        fill_buffer(&mut buffer, default);
        self.call("LogiGetConfigOptionKeyInput", |api| {
            api.get_config_option_key_input(&path, &mut buffer)
        })
        .then(|| from_buffer(&buffer))
    }

    /// Human-readable label shown for `path` in the settings UI
    pub fn set_config_option_label(&self, path: &str, label: &str) -> bool {
        let path = WideCString::new(path);
        let label = WideCString::new(label);
        self.call("LogiSetConfigOptionLabel", |api| {
            api.set_config_option_label(&path, &label)
        })
    }
}

impl std::fmt::Debug for LedSdk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LedSdk")
            .field("available", &self.is_available())
            .finish()
    }
}

fn to_channel(value: c_int) -> u8 {
    value.clamp(0, 255) as u8
}
