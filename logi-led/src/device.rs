//! Device targeting and bitmap geometry constants

use bitflags::bitflags;

/// Width of the per-key bitmap in keys
pub const BITMAP_WIDTH: usize = 21;

/// Height of the per-key bitmap in keys
pub const BITMAP_HEIGHT: usize = 6;

/// Bytes per key (BGRA)
pub const BITMAP_BYTES_PER_KEY: usize = 4;

/// Total bitmap size in bytes
pub const BITMAP_SIZE: usize = BITMAP_WIDTH * BITMAP_HEIGHT * BITMAP_BYTES_PER_KEY;

/// Effect duration meaning "until stopped"
pub const DURATION_INFINITE: i32 = 0;

/// Bit ordinal of monochrome devices
pub const DEVICETYPE_MONOCHROME_ORD: u32 = 0;
/// Bit ordinal of zone RGB devices
pub const DEVICETYPE_RGB_ORD: u32 = 1;
/// Bit ordinal of per-key RGB devices
pub const DEVICETYPE_PERKEY_RGB_ORD: u32 = 2;

bitflags! {
    /// Device groups affected by subsequent lighting calls
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TargetDevice: i32 {
        /// Single-color backlit devices
        const MONOCHROME = 1 << DEVICETYPE_MONOCHROME_ORD;
        /// Devices with RGB zones
        const RGB = 1 << DEVICETYPE_RGB_ORD;
        /// Devices with individually addressable RGB keys
        const PERKEY_RGB = 1 << DEVICETYPE_PERKEY_RGB_ORD;
        /// Every device type
        const ALL = Self::MONOCHROME.bits() | Self::RGB.bits() | Self::PERKEY_RGB.bits();
    }
}
