//! Safe bindings for the Logitech Gaming LED SDK
//!
//! [`LedSdk`] wraps `LogitechLed.dll` one method per export. Colors go in as
//! 0-100 percentages ([`RgbPercent`]); [`Color`] converts from the usual
//! 0-255, named and hex forms.
//!
//! ```no_run
//! use logi_led::{Color, KeyName, LedSdk};
//!
//! let sdk = LedSdk::load_or_unavailable(None);
//! sdk.init();
//! sdk.set_lighting((100, 0, 0));
//! sdk.set_lighting_for_key_with_key_name(KeyName::Esc, "#00ff00".parse::<Color>().unwrap());
//! sdk.shutdown();
//! ```

pub mod api;
pub mod bitmap;
pub mod color;
pub mod device;
pub mod keys;
pub mod sdk;

pub use api::{LedApi, NativeLedApi};
pub use bitmap::LedBitmap;
pub use color::{Color, ColorChannels, ColorError, RgbPercent};
pub use device::{
    TargetDevice, BITMAP_BYTES_PER_KEY, BITMAP_HEIGHT, BITMAP_SIZE, BITMAP_WIDTH,
    DURATION_INFINITE,
};
pub use keys::KeyName;
pub use sdk::{ConfigColorDefault, LedSdk, KEY_INPUT_BUFFER_LEN};
