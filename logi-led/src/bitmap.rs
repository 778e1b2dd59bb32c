//! Whole-keyboard BGRA bitmap for `LogiLedSetLightingFromBitmap`
//!
//! The SDK maps a 21x6 grid onto the physical key layout. Each cell is four
//! bytes in B, G, R, A order (not RGBA).

use crate::color::Color;
use crate::device::{BITMAP_BYTES_PER_KEY, BITMAP_HEIGHT, BITMAP_SIZE, BITMAP_WIDTH};

/// Fixed-size per-key color grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedBitmap {
    data: [u8; BITMAP_SIZE],
}

impl LedBitmap {
    /// All keys off (black, transparent)
    pub fn new() -> Self {
        Self {
            data: [0; BITMAP_SIZE],
        }
    }

    /// Every key set to `color`
    pub fn filled(color: Color) -> Self {
        let mut bitmap = Self::new();
        bitmap.fill(color);
        bitmap
    }

    /// Wrap raw BGRA bytes
    pub fn from_bytes(data: [u8; BITMAP_SIZE]) -> Self {
        Self { data }
    }

    pub fn fill(&mut self, color: Color) {
        for cell in self.data.chunks_exact_mut(BITMAP_BYTES_PER_KEY) {
            cell.copy_from_slice(&bgra(color));
        }
    }

    /// Set one cell; out-of-grid coordinates are ignored and return `false`
    pub fn set(&mut self, column: usize, row: usize, color: Color) -> bool {
        match offset(column, row) {
            Some(at) => {
                self.data[at..at + BITMAP_BYTES_PER_KEY].copy_from_slice(&bgra(color));
                true
            }
            None => false,
        }
    }

    pub fn get(&self, column: usize, row: usize) -> Option<Color> {
        let at = offset(column, row)?;
        let [b, g, r, a] = [
            self.data[at],
            self.data[at + 1],
            self.data[at + 2],
            self.data[at + 3],
        ];
        Some(Color::rgba(r, g, b, a))
    }

    /// Raw BGRA bytes as handed to the SDK
    pub fn as_bytes(&self) -> &[u8; BITMAP_SIZE] {
        &self.data
    }
}

impl Default for LedBitmap {
    fn default() -> Self {
        Self::new()
    }
}

fn offset(column: usize, row: usize) -> Option<usize> {
    (column < BITMAP_WIDTH && row < BITMAP_HEIGHT)
        .then(|| (row * BITMAP_WIDTH + column) * BITMAP_BYTES_PER_KEY)
}

fn bgra(color: Color) -> [u8; 4] {
    [color.blue(), color.green(), color.red(), color.alpha()]
}
