//! Colour palettes
//!
//! The panel shows 64 colours, two bits per channel. `device_color` widens a
//! 24-bit colour to `ColorMode` after quantising it to that grid.

use embedded_graphics::pixelcolor::Rgb565;

use super::FACE_ROWS;
use crate::peripherals::display::ColorMode;

const LEVELS_5: [u8; 4] = [0, 10, 21, 31];
const LEVELS_6: [u8; 4] = [0, 21, 42, 63];

/// Quantise `0xRRGGBB` to the 64-colour grid
pub const fn device_color(rgb: u32) -> ColorMode {
    let r = ((rgb >> 22) & 0b11) as usize;
    let g = ((rgb >> 14) & 0b11) as usize;
    let b = ((rgb >> 6) & 0b11) as usize;
    Rgb565::new(LEVELS_5[r], LEVELS_6[g], LEVELS_5[b])
}

pub mod colors {
    use super::{device_color, ColorMode};

    pub const WHITE: ColorMode = device_color(0xFFFFFF);
    pub const BLACK: ColorMode = device_color(0x000000);
    pub const COBALT_BLUE: ColorMode = device_color(0x0055AA);
    pub const CELESTE: ColorMode = device_color(0xAAFFFF);
    pub const PICTON_BLUE: ColorMode = device_color(0x55AAFF);
    pub const DARK_CANDY_APPLE_RED: ColorMode = device_color(0xAA0000);
    pub const MELON: ColorMode = device_color(0xFFAAAA);
    pub const RAJAH: ColorMode = device_color(0xFFAA55);
}

/// Colours for one grid row
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowPalette {
    /// Glyph colour
    pub font: ColorMode,
    /// First background dither colour
    pub background1: ColorMode,
    /// Second background dither colour
    pub background2: ColorMode,
}

impl RowPalette {
    pub const fn new(font: ColorMode, background1: ColorMode, background2: ColorMode) -> Self {
        Self {
            font,
            background1,
            background2,
        }
    }

    /// Palette for the 2-bit background tile. Index 3 is unused by the
    /// asset and drawn as the mask.
    pub fn tile(&self, mask: ColorMode) -> [Option<ColorMode>; 4] {
        [
            Some(mask),
            Some(self.background1),
            Some(self.background2),
            Some(mask),
        ]
    }

    /// Palette for the 1-bit font sheet: clear, then the glyph colour
    pub fn glyph(&self) -> [Option<ColorMode>; 2] {
        [None, Some(self.font)]
    }
}

/// Palettes for every row plus the mask colour behind the grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub mask: ColorMode,
    pub rows: [RowPalette; FACE_ROWS],
}

impl Palette {
    pub fn row(&self, row: u8) -> Option<&RowPalette> {
        self.rows.get(row as usize)
    }
}

impl Default for Palette {
    fn default() -> Self {
        let blue = RowPalette::new(colors::COBALT_BLUE, colors::CELESTE, colors::PICTON_BLUE);
        let red = RowPalette::new(colors::DARK_CANDY_APPLE_RED, colors::MELON, colors::RAJAH);

        Self {
            mask: colors::WHITE,
            rows: [blue, red, blue, blue, blue],
        }
    }
}
