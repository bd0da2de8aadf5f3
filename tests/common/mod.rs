//! Synthetic assets and a scripted host for integration tests.
//!
//! Every font sprite except the blank one carries a marker pixel at (1, 1)
//! and its glyph index in binary along y = 5, so a painted cell can be
//! decoded back into the glyph drawn there.

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use embedded_graphics::prelude::*;
use glyph_watchface::{
    ui::{
        font::{FALLBACK_GLYPH, LAST_GLYPH, SHEET_COLUMNS, SHEET_ROWS},
        renderer::cell_rect,
    },
    BatteryInfo, BitmapResource, ColorMode, Framebuffer, Host, Layout, ResourceId,
    ResourceProvider,
};

pub const CELL_W: u32 = 26;
pub const CELL_H: u32 = 31;
const INDEX_BITS: u32 = 6;

pub struct Assets {
    pub digit: Vec<u8>,
    pub font: Vec<u8>,
    pub font_width: u32,
}

impl Assets {
    pub fn new() -> Self {
        Self {
            digit: digit_tile(),
            font: font_sheet(SHEET_ROWS as u32),
            font_width: CELL_W * SHEET_COLUMNS as u32,
        }
    }

    /// Font sheet one glyph row short
    pub fn truncated_font() -> Self {
        Self {
            font: font_sheet(SHEET_ROWS as u32 - 1),
            ..Self::new()
        }
    }

    pub fn provider(&self) -> Provider<'_> {
        Provider(self)
    }
}

pub struct Provider<'a>(&'a Assets);

impl<'a> ResourceProvider<'a> for Provider<'a> {
    fn bitmap(&self, id: ResourceId) -> Option<BitmapResource<'a>> {
        Some(match id {
            ResourceId::DigitBackground => BitmapResource::new(CELL_W, &self.0.digit),
            ResourceId::FontSheet => BitmapResource::new(self.0.font_width, &self.0.font),
        })
    }
}

/// Palette index of the background tile at `x`, `y`: a mask-coloured border
/// around a checkerboard of the two dither colours.
pub fn tile_index(x: u32, y: u32) -> u8 {
    if x == 0 || y == 0 || x == CELL_W - 1 || y == CELL_H - 1 {
        0
    } else {
        1 + ((x + y) % 2) as u8
    }
}

fn digit_tile() -> Vec<u8> {
    let stride = ((CELL_W * 2 + 7) / 8) as usize;
    let mut data = vec![0u8; stride * CELL_H as usize];
    for y in 0..CELL_H {
        for x in 0..CELL_W {
            let byte = y as usize * stride + (x / 4) as usize;
            data[byte] |= tile_index(x, y) << (6 - 2 * (x % 4));
        }
    }
    data
}

fn font_sheet(rows: u32) -> Vec<u8> {
    let width = CELL_W * SHEET_COLUMNS as u32;
    let stride = ((width + 7) / 8) as usize;
    let mut data = vec![0u8; stride * (rows * CELL_H) as usize];
    let mut set = |x: u32, y: u32| {
        if y < rows * CELL_H {
            data[y as usize * stride + (x / 8) as usize] |= 0x80 >> (x % 8);
        }
    };

    for glyph in 0..=LAST_GLYPH {
        if glyph == FALLBACK_GLYPH {
            continue;
        }
        let cx = (glyph % SHEET_COLUMNS) as u32 * CELL_W;
        let cy = (glyph / SHEET_COLUMNS) as u32 * CELL_H;
        set(cx + 1, cy + 1);
        for bit in 0..INDEX_BITS {
            if glyph & (1 << bit) != 0 {
                set(cx + 2 + bit * 3, cy + 5);
            }
        }
    }
    data
}

/// Glyph drawn in the cell at `row`, `column`; `None` for a blank cell
pub fn glyph_at<const W: usize, const H: usize>(
    canvas: &Framebuffer<W, H>,
    row: u8,
    column: u8,
    font: ColorMode,
) -> Option<u8> {
    let origin = cell_rect(&Layout::default(), row, column).top_left;
    let inked = |x: u32, y: u32| canvas.pixel(origin + Point::new(x as i32, y as i32)) == Some(font);

    if !inked(1, 1) {
        return None;
    }
    Some(
        (0..INDEX_BITS)
            .filter(|bit| inked(2 + bit * 3, 5))
            .fold(0, |glyph, bit| glyph | 1 << bit),
    )
}

/// Glyphs expected for `text`, blanks as `None`
pub fn expected_glyphs(text: &str) -> Vec<Option<u8>> {
    text.bytes()
        .map(glyph_watchface::ui::font::glyph_index)
        .map(|glyph| (glyph != FALLBACK_GLYPH).then_some(glyph))
        .collect()
}

pub struct TestHost {
    pub now: NaiveDateTime,
    pub is_24h: bool,
    pub battery: BatteryInfo,
    pub dirty: usize,
}

impl TestHost {
    /// Saturday 17 October 2026, 13:05, 7% battery
    pub fn new() -> Self {
        Self {
            now: at(2026, 10, 17, 13, 5),
            is_24h: true,
            battery: BatteryInfo::new(7, false, false),
            dirty: 0,
        }
    }
}

pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

impl Host for TestHost {
    fn local_time(&self) -> NaiveDateTime {
        self.now
    }

    fn clock_is_24h_style(&self) -> bool {
        self.is_24h
    }

    fn battery_state(&self) -> BatteryInfo {
        self.battery
    }

    fn mark_dirty(&mut self) {
        self.dirty += 1;
    }
}
