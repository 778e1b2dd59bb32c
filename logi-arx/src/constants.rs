//! Arx Control constant catalog
//!
//! Raw values match `LogitechGArxControlLib.h`. Each enum converts from the
//! native integer; codes the SDK adds later come through as `Unknown`.

use std::fmt;

use thiserror::Error;

/// Maximum length of an event's text argument in UTF-16 units
pub const EVENT_ARG_LEN: usize = 120;

/// Applet screen orientation flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum Orientation {
    Portrait = 0x01,
    Landscape = 0x10,
}

impl Orientation {
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0x01 => Some(Self::Portrait),
            0x10 => Some(Self::Landscape),
            _ => None,
        }
    }
}

/// Kind of notification delivered to the applet callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArxEventType {
    /// Applet came to the foreground; value is an [`Orientation`]
    FocusActive,
    FocusInactive,
    /// Tag tapped; the argument carries the tag id
    TapOnTag,
    /// Value is an [`ArxDeviceType`]
    MobileDeviceArrival,
    MobileDeviceRemoval,
    Unknown(i32),
}

impl ArxEventType {
    pub fn from_code(code: i32) -> Self {
        match code {
            0x01 => Self::FocusActive,
            0x02 => Self::FocusInactive,
            0x04 => Self::TapOnTag,
            0x08 => Self::MobileDeviceArrival,
            0x10 => Self::MobileDeviceRemoval,
            other => Self::Unknown(other),
        }
    }

    pub fn code(self) -> i32 {
        match self {
            Self::FocusActive => 0x01,
            Self::FocusInactive => 0x02,
            Self::TapOnTag => 0x04,
            Self::MobileDeviceArrival => 0x08,
            Self::MobileDeviceRemoval => 0x10,
            Self::Unknown(code) => code,
        }
    }
}

impl fmt::Display for ArxEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FocusActive => write!(f, "focus active"),
            Self::FocusInactive => write!(f, "focus inactive"),
            Self::TapOnTag => write!(f, "tap on tag"),
            Self::MobileDeviceArrival => write!(f, "mobile device arrival"),
            Self::MobileDeviceRemoval => write!(f, "mobile device removal"),
            Self::Unknown(code) => write!(f, "unknown event 0x{:02x}", code),
        }
    }
}

/// Mobile device running the Arx Control app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ArxDeviceType {
    IPhone = 0x01,
    IPad = 0x02,
    AndroidSmall = 0x03,
    AndroidNormal = 0x04,
    AndroidLarge = 0x05,
    AndroidXLarge = 0x06,
    AndroidOther = 0x07,
}

impl ArxDeviceType {
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn from_code(code: i32) -> Option<Self> {
        Some(match code {
            0x01 => Self::IPhone,
            0x02 => Self::IPad,
            0x03 => Self::AndroidSmall,
            0x04 => Self::AndroidNormal,
            0x05 => Self::AndroidLarge,
            0x06 => Self::AndroidXLarge,
            0x07 => Self::AndroidOther,
            _ => return None,
        })
    }
}

/// Result of `LogiArxGetLastError`
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArxErrorCode {
    #[error("no error")]
    NoError,
    #[error("wrong parameter format")]
    WrongParameterFormat,
    #[error("null parameter not supported")]
    NullParameterNotSupported,
    #[error("wrong file path")]
    WrongFilePath,
    #[error("SDK not initialized")]
    SdkNotInitialized,
    #[error("SDK already initialized")]
    SdkAlreadyInitialized,
    #[error("connection with gaming software broken")]
    ConnectionWithGamingSoftwareBroken,
    #[error("error creating thread")]
    CreatingThread,
    #[error("error copying memory")]
    CopyingMemory,
    #[error("unknown error code {0}")]
    Unknown(i32),
}

impl ArxErrorCode {
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Self::NoError,
            1 => Self::WrongParameterFormat,
            2 => Self::NullParameterNotSupported,
            3 => Self::WrongFilePath,
            4 => Self::SdkNotInitialized,
            5 => Self::SdkAlreadyInitialized,
            6 => Self::ConnectionWithGamingSoftwareBroken,
            7 => Self::CreatingThread,
            8 => Self::CopyingMemory,
            other => Self::Unknown(other),
        }
    }

    pub fn code(self) -> i32 {
        match self {
            Self::NoError => 0,
            Self::WrongParameterFormat => 1,
            Self::NullParameterNotSupported => 2,
            Self::WrongFilePath => 3,
            Self::SdkNotInitialized => 4,
            Self::SdkAlreadyInitialized => 5,
            Self::ConnectionWithGamingSoftwareBroken => 6,
            Self::CreatingThread => 7,
            Self::CopyingMemory => 8,
            Self::Unknown(code) => code,
        }
    }

    pub fn is_error(self) -> bool {
        self != Self::NoError
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_codes() {
        for code in [0x01, 0x02, 0x04, 0x08, 0x10] {
            let event = ArxEventType::from_code(code);
            assert!(!matches!(event, ArxEventType::Unknown(_)));
            assert_eq!(event.code(), code);
        }
        assert_eq!(ArxEventType::from_code(0x20), ArxEventType::Unknown(0x20));
        assert_eq!(ArxEventType::Unknown(0x20).code(), 0x20);
    }

    #[test]
    fn test_orientation() {
        assert_eq!(Orientation::from_code(0x10), Some(Orientation::Landscape));
        assert_eq!(Orientation::Portrait.code(), 0x01);
        assert_eq!(Orientation::from_code(0x02), None);
    }

    #[test]
    fn test_device_types() {
        for code in 1..=7 {
            let device = ArxDeviceType::from_code(code).unwrap();
            assert_eq!(device.code(), code);
        }
        assert_eq!(ArxDeviceType::from_code(0), None);
        assert_eq!(ArxDeviceType::from_code(8), None);
    }

    #[test]
    fn test_error_codes() {
        for code in 0..=8 {
            assert_eq!(ArxErrorCode::from_code(code).code(), code);
        }
        assert!(!ArxErrorCode::NoError.is_error());
        assert!(ArxErrorCode::from_code(3).is_error());
        assert_eq!(ArxErrorCode::WrongFilePath.to_string(), "wrong file path");
        assert_eq!(ArxErrorCode::from_code(42), ArxErrorCode::Unknown(42));
    }
}
