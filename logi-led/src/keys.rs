//! Key identifiers for per-key lighting
//!
//! `KeyName` values are the keyboard scan codes the LED SDK uses for its
//! key-name entry points. G-keys and the logo/badge zones use vendor codes
//! above the scan code range.

use std::fmt;

/// Physical key addressed by the per-key lighting calls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum KeyName {
    Esc = 0x01,
    F1 = 0x3b,
    F2 = 0x3c,
    F3 = 0x3d,
    F4 = 0x3e,
    F5 = 0x3f,
    F6 = 0x40,
    F7 = 0x41,
    F8 = 0x42,
    F9 = 0x43,
    F10 = 0x44,
    F11 = 0x57,
    F12 = 0x58,
    PrintScreen = 0x137,
    ScrollLock = 0x46,
    PauseBreak = 0x145,
    Tilde = 0x29,
    One = 0x02,
    Two = 0x03,
    Three = 0x04,
    Four = 0x05,
    Five = 0x06,
    Six = 0x07,
    Seven = 0x08,
    Eight = 0x09,
    Nine = 0x0a,
    Zero = 0x0b,
    Minus = 0x0c,
    Equals = 0x0d,
    Backspace = 0x0e,
    Insert = 0x152,
    Home = 0x147,
    PageUp = 0x149,
    NumLock = 0x45,
    NumSlash = 0x135,
    NumAsterisk = 0x37,
    NumMinus = 0x4a,
    Tab = 0x0f,
    Q = 0x10,
    W = 0x11,
    E = 0x12,
    R = 0x13,
    T = 0x14,
    Y = 0x15,
    U = 0x16,
    I = 0x17,
    O = 0x18,
    P = 0x19,
    OpenBracket = 0x1a,
    CloseBracket = 0x1b,
    Backslash = 0x2b,
    KeyboardDelete = 0x153,
    End = 0x14F,
    PageDown = 0x151,
    NumSeven = 0x47,
    NumEight = 0x48,
    NumNine = 0x49,
    NumPlus = 0x4e,
    CapsLock = 0x3a,
    A = 0x1e,
    S = 0x1f,
    D = 0x20,
    F = 0x21,
    G = 0x22,
    H = 0x23,
    J = 0x24,
    K = 0x25,
    L = 0x26,
    Semicolon = 0x27,
    Apostrophe = 0x28,
    Enter = 0x1c,
    NumFour = 0x4b,
    NumFive = 0x4c,
    NumSix = 0x4d,
    LeftShift = 0x2a,
    Z = 0x2c,
    X = 0x2d,
    C = 0x2e,
    V = 0x2f,
    B = 0x30,
    N = 0x31,
    M = 0x32,
    Comma = 0x33,
    Period = 0x34,
    ForwardSlash = 0x35,
    RightShift = 0x36,
    ArrowUp = 0x148,
    NumOne = 0x4f,
    NumTwo = 0x50,
    NumThree = 0x51,
    NumEnter = 0x11C,
    LeftControl = 0x1d,
    LeftWindows = 0x15B,
    LeftAlt = 0x38,
    Space = 0x39,
    RightAlt = 0x138,
    RightWindows = 0x15C,
    ApplicationSelect = 0x15D,
    RightControl = 0x11D,
    ArrowLeft = 0x14B,
    ArrowDown = 0x150,
    ArrowRight = 0x14D,
    NumZero = 0x52,
    NumPeriod = 0x53,
    G1 = 0xFFF1,
    G2 = 0xFFF2,
    G3 = 0xFFF3,
    G4 = 0xFFF4,
    G5 = 0xFFF5,
    G6 = 0xFFF6,
    G7 = 0xFFF7,
    G8 = 0xFFF8,
    G9 = 0xFFF9,
    GLogo = 0xFFFF1,
    GBadge = 0xFFFF2,
}

impl KeyName {
    /// Every key, in keyboard order
    pub const ALL: &'static [KeyName] = &[
        KeyName::Esc,
        KeyName::F1,
        KeyName::F2,
        KeyName::F3,
        KeyName::F4,
        KeyName::F5,
        KeyName::F6,
        KeyName::F7,
        KeyName::F8,
        KeyName::F9,
        KeyName::F10,
        KeyName::F11,
        KeyName::F12,
        KeyName::PrintScreen,
        KeyName::ScrollLock,
        KeyName::PauseBreak,
        KeyName::Tilde,
        KeyName::One,
        KeyName::Two,
        KeyName::Three,
        KeyName::Four,
        KeyName::Five,
        KeyName::Six,
        KeyName::Seven,
        KeyName::Eight,
        KeyName::Nine,
        KeyName::Zero,
        KeyName::Minus,
        KeyName::Equals,
        KeyName::Backspace,
        KeyName::Insert,
        KeyName::Home,
        KeyName::PageUp,
        KeyName::NumLock,
        KeyName::NumSlash,
        KeyName::NumAsterisk,
        KeyName::NumMinus,
        KeyName::Tab,
        KeyName::Q,
        KeyName::W,
        KeyName::E,
        KeyName::R,
        KeyName::T,
        KeyName::Y,
        KeyName::U,
        KeyName::I,
        KeyName::O,
        KeyName::P,
        KeyName::OpenBracket,
        KeyName::CloseBracket,
        KeyName::Backslash,
        KeyName::KeyboardDelete,
        KeyName::End,
        KeyName::PageDown,
        KeyName::NumSeven,
        KeyName::NumEight,
        KeyName::NumNine,
        KeyName::NumPlus,
        KeyName::CapsLock,
        KeyName::A,
        KeyName::S,
        KeyName::D,
        KeyName::F,
        KeyName::G,
        KeyName::H,
        KeyName::J,
        KeyName::K,
        KeyName::L,
        KeyName::Semicolon,
        KeyName::Apostrophe,
        KeyName::Enter,
        KeyName::NumFour,
        KeyName::NumFive,
        KeyName::NumSix,
        KeyName::LeftShift,
        KeyName::Z,
        KeyName::X,
        KeyName::C,
        KeyName::V,
        KeyName::B,
        KeyName::N,
        KeyName::M,
        KeyName::Comma,
        KeyName::Period,
        KeyName::ForwardSlash,
        KeyName::RightShift,
        KeyName::ArrowUp,
        KeyName::NumOne,
        KeyName::NumTwo,
        KeyName::NumThree,
        KeyName::NumEnter,
        KeyName::LeftControl,
        KeyName::LeftWindows,
        KeyName::LeftAlt,
        KeyName::Space,
        KeyName::RightAlt,
        KeyName::RightWindows,
        KeyName::ApplicationSelect,
        KeyName::RightControl,
        KeyName::ArrowLeft,
        KeyName::ArrowDown,
        KeyName::ArrowRight,
        KeyName::NumZero,
        KeyName::NumPeriod,
        KeyName::G1,
        KeyName::G2,
        KeyName::G3,
        KeyName::G4,
        KeyName::G5,
        KeyName::G6,
        KeyName::G7,
        KeyName::G8,
        KeyName::G9,
        KeyName::GLogo,
        KeyName::GBadge,
    ];

    /// Native code passed to the SDK
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Look up a key by its native code
    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.code() == code)
    }

    /// SDK constant name (e.g. `"NUM_ENTER"`)
    pub fn name(self) -> &'static str {
        match self {
            Self::Esc => "ESC",
            Self::F1 => "F1",
            Self::F2 => "F2",
            Self::F3 => "F3",
            Self::F4 => "F4",
            Self::F5 => "F5",
            Self::F6 => "F6",
            Self::F7 => "F7",
            Self::F8 => "F8",
            Self::F9 => "F9",
            Self::F10 => "F10",
            Self::F11 => "F11",
            Self::F12 => "F12",
            Self::PrintScreen => "PRINT_SCREEN",
            Self::ScrollLock => "SCROLL_LOCK",
            Self::PauseBreak => "PAUSE_BREAK",
            Self::Tilde => "TILDE",
            Self::One => "ONE",
            Self::Two => "TWO",
            Self::Three => "THREE",
            Self::Four => "FOUR",
            Self::Five => "FIVE",
            Self::Six => "SIX",
            Self::Seven => "SEVEN",
            Self::Eight => "EIGHT",
            Self::Nine => "NINE",
            Self::Zero => "ZERO",
            Self::Minus => "MINUS",
            Self::Equals => "EQUALS",
            Self::Backspace => "BACKSPACE",
            Self::Insert => "INSERT",
            Self::Home => "HOME",
            Self::PageUp => "PAGE_UP",
            Self::NumLock => "NUM_LOCK",
            Self::NumSlash => "NUM_SLASH",
            Self::NumAsterisk => "NUM_ASTERISK",
            Self::NumMinus => "NUM_MINUS",
            Self::Tab => "TAB",
            Self::Q => "Q",
            Self::W => "W",
            Self::E => "E",
            Self::R => "R",
            Self::T => "T",
            Self::Y => "Y",
            Self::U => "U",
            Self::I => "I",
            Self::O => "O",
            Self::P => "P",
            Self::OpenBracket => "OPEN_BRACKET",
            Self::CloseBracket => "CLOSE_BRACKET",
            Self::Backslash => "BACKSLASH",
            Self::KeyboardDelete => "KEYBOARD_DELETE",
            Self::End => "END",
            Self::PageDown => "PAGE_DOWN",
            Self::NumSeven => "NUM_SEVEN",
            Self::NumEight => "NUM_EIGHT",
            Self::NumNine => "NUM_NINE",
            Self::NumPlus => "NUM_PLUS",
            Self::CapsLock => "CAPS_LOCK",
            Self::A => "A",
            Self::S => "S",
            Self::D => "D",
            Self::F => "F",
            Self::G => "G",
            Self::H => "H",
            Self::J => "J",
            Self::K => "K",
            Self::L => "L",
            Self::Semicolon => "SEMICOLON",
            Self::Apostrophe => "APOSTROPHE",
            Self::Enter => "ENTER",
            Self::NumFour => "NUM_FOUR",
            Self::NumFive => "NUM_FIVE",
            Self::NumSix => "NUM_SIX",
            Self::LeftShift => "LEFT_SHIFT",
            Self::Z => "Z",
            Self::X => "X",
            Self::C => "C",
            Self::V => "V",
            Self::B => "B",
            Self::N => "N",
            Self::M => "M",
            Self::Comma => "COMMA",
            Self::Period => "PERIOD",
            Self::ForwardSlash => "FORWARD_SLASH",
            Self::RightShift => "RIGHT_SHIFT",
            Self::ArrowUp => "ARROW_UP",
            Self::NumOne => "NUM_ONE",
            Self::NumTwo => "NUM_TWO",
            Self::NumThree => "NUM_THREE",
            Self::NumEnter => "NUM_ENTER",
            Self::LeftControl => "LEFT_CONTROL",
            Self::LeftWindows => "LEFT_WINDOWS",
            Self::LeftAlt => "LEFT_ALT",
            Self::Space => "SPACE",
            Self::RightAlt => "RIGHT_ALT",
            Self::RightWindows => "RIGHT_WINDOWS",
            Self::ApplicationSelect => "APPLICATION_SELECT",
            Self::RightControl => "RIGHT_CONTROL",
            Self::ArrowLeft => "ARROW_LEFT",
            Self::ArrowDown => "ARROW_DOWN",
            Self::ArrowRight => "ARROW_RIGHT",
            Self::NumZero => "NUM_ZERO",
            Self::NumPeriod => "NUM_PERIOD",
            Self::G1 => "G_1",
            Self::G2 => "G_2",
            Self::G3 => "G_3",
            Self::G4 => "G_4",
            Self::G5 => "G_5",
            Self::G6 => "G_6",
            Self::G7 => "G_7",
            Self::G8 => "G_8",
            Self::G9 => "G_9",
            Self::GLogo => "G_LOGO",
            Self::GBadge => "G_BADGE",
        }
    }

    /// Parse a key name, ignoring case and treating `-` like `_`
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized = name.trim().replace('-', "_").to_ascii_uppercase();
        Self::ALL.iter().copied().find(|k| k.name() == normalized)
    }

    /// Whether this is one of the programmable G-keys or G zones
    pub fn is_g_key(self) -> bool {
        self.code() >= KeyName::G1.code()
    }
}

impl fmt::Display for KeyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
