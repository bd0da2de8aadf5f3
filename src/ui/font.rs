//! Character map for the digit font sheet
//!
//! The sheet is `SHEET_COLUMNS` glyphs wide. Only ASCII 32..=95 has glyphs;
//! some punctuation is reused for symbols:
//!
//! - `#` heart
//! - `$` lightning bolt
//! - `*` degree sign

use embedded_graphics::{
    geometry::{Point, Size},
    primitives::Rectangle,
};

/// Glyphs per row of the font sheet
pub const SHEET_COLUMNS: u8 = 8;

/// First character with an entry in the map
const FIRST_CHAR: u8 = 32;

/// Blank glyph, used for spaces and anything unsupported
pub const FALLBACK_GLYPH: u8 = 0x0F;

/// Highest glyph index in the map
pub const LAST_GLYPH: u8 = 0x2F;

/// Glyph rows a font sheet has to provide
pub const SHEET_ROWS: u8 = LAST_GLYPH / SHEET_COLUMNS + 1;

const CHAR_MAP: [u8; 64] = [
    0x0F, 0x2D, 0x0F, 0x2B, 0x2C, 0x0C, 0x0F, 0x0F, //  !"#$%&'
    0x0F, 0x0F, 0x0D, 0x2E, 0x0F, 0x0E, 0x2F, 0x0B, // ()*+,-./
    0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, // 01234567
    0x08, 0x09, 0x0A, 0x0F, 0x0F, 0x0F, 0x0F, 0x2A, // 89:;<=>?
    0x1E, 0x10, 0x11, 0x12, 0x13, 0x14, 0x15, 0x16, // @ABCDEFG
    0x17, 0x18, 0x19, 0x1A, 0x1B, 0x1C, 0x1D, 0x1E, // HIJKLMNO
    0x1F, 0x20, 0x21, 0x22, 0x23, 0x24, 0x25, 0x26, // PQRSTUVW
    0x27, 0x28, 0x29, 0x0F, 0x0F, 0x0F, 0x0F, 0x2F, // XYZ[\]^_
];

/// Sprite index for `ch`
pub fn glyph_index(ch: u8) -> u8 {
    ch.checked_sub(FIRST_CHAR)
        .and_then(|offset| CHAR_MAP.get(offset as usize))
        .copied()
        .unwrap_or(FALLBACK_GLYPH)
}

/// Area of `glyph` inside a font sheet made of `cell`-sized sprites
pub fn sprite_rect(glyph: u8, cell: Size) -> Rectangle {
    let column = u32::from(glyph % SHEET_COLUMNS);
    let row = u32::from(glyph / SHEET_COLUMNS);
    Rectangle::new(
        Point::new((column * cell.width) as i32, (row * cell.height) as i32),
        cell,
    )
}
