//! UI definitions module

use core::fmt;

use embedded_graphics::draw_target::DrawTarget;

use crate::{
    peripherals::{battery::BatteryInfo, display::ColorMode},
    system::host::{Host, ResourceId, ResourceProvider},
};

pub mod font;
pub mod glyph_watchface;
pub mod palette;
pub mod renderer;

/// Grid rows
pub const FACE_ROWS: usize = 5;
/// Grid columns, also the length of a row's text
pub const FACE_COLUMNS: usize = 5;

/// Event interface the host wires its window, tick and battery callbacks to
pub trait WatchFace<'r> {
    /// Window load: acquire bitmaps and populate every row
    fn on_load<R, H>(&mut self, resources: &R, host: &mut H) -> Result<(), Error>
    where
        R: ResourceProvider<'r>,
        H: Host;

    /// Window unload: release bitmaps
    fn on_unload(&mut self) -> Result<(), Error>;

    /// Whole-minute tick
    fn on_minute_tick<H: Host>(&mut self, host: &mut H);

    /// Battery state change
    fn on_battery_change<H: Host>(&mut self, state: BatteryInfo, host: &mut H);

    /// Paint the whole face onto `surface`
    fn on_redraw<D>(&self, surface: &mut D) -> Result<(), Error>
    where
        D: DrawTarget<Color = ColorMode>;
}

/// Lifecycle of a watchface window
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FaceState {
    Uninitialized,
    Loaded,
    Unloaded,
}

impl fmt::Display for FaceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FaceState::Uninitialized => "uninitialized",
            FaceState::Loaded => "loaded",
            FaceState::Unloaded => "unloaded",
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The provider has no bitmap for this id
    ResourceMissing(ResourceId),
    /// Bitmap is empty or too small for the layout
    BitmapSize(ResourceId),
    /// Load or unload requested from the wrong state
    Lifecycle(FaceState),
    /// Redraw without loaded bitmaps
    NotLoaded,
    /// Row index past the bottom of the grid
    RowOutOfRange(u8),
    /// The render surface failed
    Draw,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ResourceMissing(id) => write!(f, "missing bitmap resource {}", id),
            Error::BitmapSize(id) => write!(f, "bitmap resource {} has the wrong size", id),
            Error::Lifecycle(state) => write!(f, "invalid transition while {}", state),
            Error::NotLoaded => f.write_str("watchface is not loaded"),
            Error::RowOutOfRange(row) => write!(f, "row {} is outside the grid", row),
            Error::Draw => f.write_str("render surface error"),
        }
    }
}

/// Byte stored for characters that have no glyph
const UNSUPPORTED: u8 = 0x7F;

/// Text of one grid row: exactly `FACE_COLUMNS` ASCII bytes.
///
/// Longer text is truncated, shorter text padded with spaces. Non-ASCII
/// characters are kept as a single unsupported byte so they render as the
/// blank glyph.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct RowText([u8; FACE_COLUMNS]);

impl RowText {
    pub const BLANK: Self = Self([b' '; FACE_COLUMNS]);

    pub fn new(text: &str) -> Self {
        let mut row = Self::BLANK;
        for (cell, ch) in row.0.iter_mut().zip(text.chars()) {
            *cell = if ch.is_ascii() { ch as u8 } else { UNSUPPORTED };
        }
        row
    }

    /// Replace the character in one cell; out-of-range cells are ignored.
    pub fn set(&mut self, column: usize, ch: u8) {
        if let Some(cell) = self.0.get_mut(column) {
            *cell = if ch.is_ascii() { ch } else { UNSUPPORTED };
        }
    }

    pub fn bytes(&self) -> &[u8; FACE_COLUMNS] {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        // Only ASCII is ever stored
        core::str::from_utf8(&self.0).unwrap_or("")
    }
}

impl Default for RowText {
    fn default() -> Self {
        Self::BLANK
    }
}

impl From<&str> for RowText {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl fmt::Debug for RowText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RowText({:?})", self.as_str())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for RowText {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{=str}", self.as_str())
    }
}
