//! Applet event notifications

use std::fmt;

use crate::constants::{ArxDeviceType, ArxEventType, Orientation};

/// One notification from the Arx Control software
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArxEvent {
    pub event_type: ArxEventType,
    pub value: i32,
    /// Text argument (tag id for taps); `None` when the SDK sent none
    pub arg: Option<String>,
}

impl ArxEvent {
    /// Build from raw callback arguments; an empty argument becomes `None`
    pub fn from_raw(event_type: i32, value: i32, arg: Option<String>) -> Self {
        Self {
            event_type: ArxEventType::from_code(event_type),
            value,
            arg: arg.filter(|s| !s.is_empty()),
        }
    }

    /// Device type carried by arrival and removal events
    pub fn device_type(&self) -> Option<ArxDeviceType> {
        match self.event_type {
            ArxEventType::MobileDeviceArrival | ArxEventType::MobileDeviceRemoval => {
                ArxDeviceType::from_code(self.value)
            }
            _ => None,
        }
    }

    /// Orientation carried by focus-active events
    pub fn orientation(&self) -> Option<Orientation> {
        match self.event_type {
            ArxEventType::FocusActive => Orientation::from_code(self.value),
            _ => None,
        }
    }

    /// Tag id of a tap event
    pub fn tag(&self) -> Option<&str> {
        match self.event_type {
            ArxEventType::TapOnTag => self.arg.as_deref(),
            _ => None,
        }
    }
}

impl fmt::Display for ArxEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (value={})", self.event_type, self.value)?;
        if let Some(arg) = &self.arg {
            write!(f, " \"{}\"", arg)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_arg_is_none() {
        let event = ArxEvent::from_raw(0x04, 0, Some(String::new()));
        assert_eq!(event.arg, None);
        assert_eq!(event.tag(), None);
    }

    #[test]
    fn test_tap_tag() {
        let event = ArxEvent::from_raw(0x04, 0, Some("splash".into()));
        assert_eq!(event.event_type, ArxEventType::TapOnTag);
        assert_eq!(event.tag(), Some("splash"));
        assert_eq!(event.to_string(), "tap on tag (value=0) \"splash\"");
    }

    #[test]
    fn test_payload_accessors() {
        let arrival = ArxEvent::from_raw(0x08, 0x03, None);
        assert_eq!(arrival.device_type(), Some(ArxDeviceType::AndroidSmall));
        assert_eq!(arrival.orientation(), None);

        let focus = ArxEvent::from_raw(0x01, 0x10, None);
        assert_eq!(focus.orientation(), Some(Orientation::Landscape));
        assert_eq!(focus.device_type(), None);
    }
}
