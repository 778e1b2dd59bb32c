//! Color values for the lighting calls
//!
//! The SDK takes colors as 0-100 percentages per channel while everything
//! else (config files, hex strings, bitmaps) speaks 0-255. `Color` holds the
//! 0-255 form and converts on demand.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors from parsing a color string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Not a known color name and not `#rrggbb` / `#rrggbbaa`
    #[error("Invalid color '{0}': expected a color name, #rrggbb or #rrggbbaa")]
    InvalidHex(String),
}

/// Named colors accepted by [`Color::named`]
const NAMED_COLORS: &[(&str, &str)] = &[
    ("red", "#ff0000"),
    ("orange", "#ffa500"),
    ("yellow", "#ffff00"),
    ("green", "#00ff00"),
    ("cyan", "#00ffff"),
    ("blue", "#0000ff"),
    ("indigo", "#4b0082"),
    ("violet", "#ee82ee"),
    ("purple", "#800080"),
    ("magenta", "#ff00ff"),
    ("pink", "#ffc0cb"),
    ("white", "#ffffff"),
    ("black", "#000000"),
    ("gray", "#808080"),
    ("grey", "#808080"),
];

/// Red/green/blue as 0-100 percentages, the form the lighting entry points take.
///
/// Values are passed to the SDK as-is; keeping them in range is up to the
/// caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RgbPercent {
    pub red: i32,
    pub green: i32,
    pub blue: i32,
}

impl RgbPercent {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(100, 100, 100);

    pub const fn new(red: i32, green: i32, blue: i32) -> Self {
        Self { red, green, blue }
    }
}

impl From<(i32, i32, i32)> for RgbPercent {
    fn from((red, green, blue): (i32, i32, i32)) -> Self {
        Self { red, green, blue }
    }
}

impl From<Color> for RgbPercent {
    fn from(color: Color) -> Self {
        color.percent()
    }
}

impl From<&Color> for RgbPercent {
    fn from(color: &Color) -> Self {
        color.percent()
    }
}

/// Explicit channel values, for building a [`Color`] field by field
///
/// ```
/// use logi_led::{Color, ColorChannels};
///
/// let teal: Color = ColorChannels { green: 128, blue: 128, ..Default::default() }.into();
/// assert_eq!(teal.hex(), "#008080");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorChannels {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Default for ColorChannels {
    fn default() -> Self {
        Self {
            red: 0,
            green: 0,
            blue: 0,
            alpha: 255,
        }
    }
}

/// An RGBA color with 8-bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    red: u8,
    green: u8,
    blue: u8,
    alpha: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);

    /// Opaque color from red/green/blue
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba(red, green, blue, 255)
    }

    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Color from a name such as `"orange"`.
    ///
    /// Names that are not recognized are parsed as hex strings, so
    /// `Color::named("#112233", 255)` works too. An explicit alpha in an
    /// 8-digit hex string wins over `alpha`.
    pub fn named(name: &str, alpha: u8) -> Result<Self, ColorError> {
        let hex = lookup_name(name).unwrap_or(name);
        let color = Self::from_hex(hex)?;
        if hex_digits(hex).len() == 8 {
            Ok(color)
        } else {
            Ok(color.with_alpha(alpha))
        }
    }

    /// Parse `rrggbb` or `rrggbbaa`, with or without a leading `#`
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let digits = hex_digits(hex);
        let invalid = || ColorError::InvalidHex(hex.to_string());

        let well_formed =
            matches!(digits.len(), 6 | 8) && digits.bytes().all(|b| b.is_ascii_hexdigit());
        if !well_formed {
            return Err(invalid());
        }
        let channel =
            |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());

        let alpha = if digits.len() == 8 { channel(6)? } else { 255 };
        Ok(Self::rgba(channel(0)?, channel(2)?, channel(4)?, alpha))
    }

    /// Same color with a different alpha
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self { alpha, ..self }
    }

    pub fn red(&self) -> u8 {
        self.red
    }

    pub fn green(&self) -> u8 {
        self.green
    }

    pub fn blue(&self) -> u8 {
        self.blue
    }

    pub fn alpha(&self) -> u8 {
        self.alpha
    }

    /// Lowercase `#rrggbb` (alpha is not included)
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }

    /// Channels scaled to 0-100, truncating
    pub fn percent(&self) -> RgbPercent {
        RgbPercent::new(
            channel_to_percent(self.red),
            channel_to_percent(self.green),
            channel_to_percent(self.blue),
        )
    }

    /// Inverse of [`Color::percent`], rounding to the nearest channel value.
    ///
    /// Out-of-range percentages are clamped.
    pub fn from_percent(percent: RgbPercent) -> Self {
        Self::rgb(
            percent_to_channel(percent.red),
            percent_to_channel(percent.green),
            percent_to_channel(percent.blue),
        )
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<ColorChannels> for Color {
    fn from(c: ColorChannels) -> Self {
        Self::rgba(c.red, c.green, c.blue, c.alpha)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::rgb(red, green, blue)
    }
}

impl From<(u8, u8, u8, u8)> for Color {
    fn from((red, green, blue, alpha): (u8, u8, u8, u8)) -> Self {
        Self::rgba(red, green, blue, alpha)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    /// Color name or hex string
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::named(s.trim(), 255)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

fn lookup_name(name: &str) -> Option<&'static str> {
    NAMED_COLORS
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|&(_, hex)| hex)
}

fn hex_digits(hex: &str) -> &str {
    hex.strip_prefix('#').unwrap_or(hex)
}

fn channel_to_percent(value: u8) -> i32 {
    i32::from(value) * 100 / 255
}

fn percent_to_channel(percent: i32) -> u8 {
    let p = percent.clamp(0, 100);
    ((p * 255 + 50) / 100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_shapes_agree_on_red() {
        let shapes = [
            Color::rgb(255, 0, 0),
            Color::named("red", 255).unwrap(),
            Color::from_hex("#ff0000").unwrap(),
            Color::from(ColorChannels {
                red: 255,
                ..Default::default()
            }),
        ];
        for color in shapes {
            assert_eq!(color, Color::RED);
            assert_eq!(color.percent(), RgbPercent::new(100, 0, 0));
        }
    }

    #[test]
    fn test_green_from_hex() {
        let color = Color::from_hex("#00ff00").unwrap();
        assert_eq!((color.red(), color.green(), color.blue()), (0, 255, 0));
        assert_eq!(color.alpha(), 255);
        assert_eq!(color.percent(), RgbPercent::new(0, 100, 0));
        assert_eq!(color.hex(), "#00ff00");
    }

    #[test]
    fn test_percent_endpoints() {
        assert_eq!(channel_to_percent(0), 0);
        assert_eq!(channel_to_percent(128), 50);
        assert_eq!(channel_to_percent(255), 100);
    }

    #[test]
    fn test_percent_is_monotonic() {
        let mut previous = 0;
        for value in 0..=255u8 {
            let p = channel_to_percent(value);
            assert!(p >= previous, "{value} -> {p} < {previous}");
            assert!((0..=100).contains(&p));
            previous = p;
        }
    }

    #[test]
    fn test_hex_without_marker_and_uppercase() {
        assert_eq!(Color::from_hex("FFA500").unwrap(), Color::rgb(255, 165, 0));
        assert_eq!(Color::from_hex("#FFa500").unwrap().hex(), "#ffa500");
    }

    #[test]
    fn test_hex_with_alpha() {
        let color = Color::from_hex("#10203080").unwrap();
        assert_eq!(color, Color::rgba(0x10, 0x20, 0x30, 0x80));
        assert_eq!(color.hex(), "#102030");
    }

    #[test]
    fn test_named_alpha() {
        let color = Color::named("Blue", 64).unwrap();
        assert_eq!(color, Color::rgba(0, 0, 255, 64));
        // 8-digit hex keeps its own alpha
        assert_eq!(Color::named("#00000010", 200).unwrap().alpha(), 0x10);
    }

    #[test]
    fn test_unknown_name_is_treated_as_hex() {
        assert_eq!(Color::named("123456", 255).unwrap(), Color::rgb(0x12, 0x34, 0x56));
        assert_eq!(
            Color::named("chartreuse", 255),
            Err(ColorError::InvalidHex("chartreuse".into()))
        );
    }

    #[test]
    fn test_invalid_hex() {
        for bad in ["", "#", "#fff", "#gg0000", "#ff00001", "#ff00ééé", "+f0000"] {
            assert!(Color::from_hex(bad).is_err(), "{bad:?} should not parse");
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!(" white ".parse::<Color>().unwrap(), Color::WHITE);
        assert_eq!("#0000ff".parse::<Color>().unwrap(), Color::BLUE);
    }

    #[test]
    fn test_from_percent() {
        assert_eq!(Color::from_percent(RgbPercent::new(100, 0, 50)), Color::rgb(255, 0, 128));
        assert_eq!(Color::from_percent(RgbPercent::new(150, -5, 0)), Color::rgb(255, 0, 0));
    }

    #[test]
    fn test_percent_into() {
        let p: RgbPercent = Color::GREEN.into();
        assert_eq!(p, RgbPercent::new(0, 100, 0));
        let p: RgbPercent = (10, 20, 30).into();
        assert_eq!(p, RgbPercent::new(10, 20, 30));
    }
}
