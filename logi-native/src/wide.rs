//! UTF-16 string marshaling
//!
//! Both SDKs take `const wchar_t*` arguments. The libraries only exist for
//! Windows, where `wchar_t` is 16 bits wide.

use tracing::warn;

/// Native wide character (Windows `wchar_t`)
pub type WChar = u16;

/// Owned NUL-terminated UTF-16 string
///
/// Interior NULs end the string early, matching what the native side would
/// read anyway. The truncation is logged at warn level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WideCString {
    buf: Vec<WChar>,
}

impl WideCString {
    /// Encode a Rust string
    pub fn new(s: &str) -> Self {
        if let Some(at) = s.find('\0') {
            warn!("Wide string truncated at interior NUL (byte {} of {})", at, s.len());
        }
        let mut buf: Vec<WChar> = s.encode_utf16().take_while(|&c| c != 0).collect();
        buf.push(0);
        Self { buf }
    }

    /// The empty string (a lone terminator)
    pub fn empty() -> Self {
        Self { buf: vec![0] }
    }

    /// Pointer to the first code unit, valid while `self` lives
    pub fn as_ptr(&self) -> *const WChar {
        self.buf.as_ptr()
    }

    /// Code units without the terminator
    pub fn as_slice(&self) -> &[WChar] {
        &self.buf[..self.buf.len() - 1]
    }

    /// Number of code units without the terminator
    pub fn len(&self) -> usize {
        self.buf.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Decode back into a Rust string (lossy)
    pub fn to_string_lossy(&self) -> String {
        String::from_utf16_lossy(self.as_slice())
    }
}

impl From<&str> for WideCString {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl Default for WideCString {
    fn default() -> Self {
        Self::empty()
    }
}

/// Fill a fixed output buffer with `s`, truncating so a terminator always fits.
///
/// Used for in/out buffers where the native side overwrites a default value.
pub fn fill_buffer(buf: &mut [WChar], s: &str) {
    let Some(last) = buf.len().checked_sub(1) else {
        return;
    };
    let mut written = 0;
    for (slot, unit) in buf[..last].iter_mut().zip(s.encode_utf16().take_while(|&c| c != 0)) {
        *slot = unit;
        written += 1;
    }
    buf[written..].fill(0);
}

/// Decode a buffer up to its first NUL (or its end)
pub fn from_buffer(buf: &[WChar]) -> String {
    let end = buf.iter().position(|&c| c == 0).unwrap_or(buf.len());
    String::from_utf16_lossy(&buf[..end])
}

/// Decode a native string, reading at most `max_len` code units.
///
/// Returns `None` for a null pointer.
///
/// # Safety
/// `ptr` must be null or point to at least `max_len` readable code units, or to
/// a NUL-terminated string shorter than that.
pub unsafe fn read_bounded(ptr: *const WChar, max_len: usize) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    let mut len = 0;
    while len < max_len && *ptr.add(len) != 0 {
        len += 1;
    }
    let units = std::slice::from_raw_parts(ptr, len);
    Some(String::from_utf16_lossy(units))
}
