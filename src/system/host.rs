//! Interfaces to the host platform
//!
//! The platform owns the event loop, the clock and the packaged bitmaps. A
//! host adapter implements these traits and forwards its callbacks to a
//! `WatchFace`.

use core::fmt;

use chrono::NaiveDateTime;

use crate::peripherals::battery::BatteryInfo;

/// Services the watchface needs from the platform
pub trait Host {
    /// Current local wall-clock time
    fn local_time(&self) -> NaiveDateTime;

    /// User preference for a 24 hour clock
    fn clock_is_24h_style(&self) -> bool;

    /// Current battery state, outside of change notifications
    fn battery_state(&self) -> BatteryInfo;

    /// Schedule a redraw of the watchface layer
    fn mark_dirty(&mut self);
}

/// Packaged bitmap assets
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ResourceId {
    /// Dithered cell background, 2 bits per pixel
    DigitBackground,
    /// Glyph sprites, 1 bit per pixel
    FontSheet,
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ResourceId::DigitBackground => "digit background",
            ResourceId::FontSheet => "font sheet",
        })
    }
}

/// Raw indexed bitmap: rows packed most significant bit first, each row
/// padded to a whole byte
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BitmapResource<'r> {
    pub width: u32,
    pub data: &'r [u8],
}

impl<'r> BitmapResource<'r> {
    pub const fn new(width: u32, data: &'r [u8]) -> Self {
        Self { width, data }
    }
}

/// Source of packaged bitmaps, borrowed for `'r`
pub trait ResourceProvider<'r> {
    fn bitmap(&self, id: ResourceId) -> Option<BitmapResource<'r>>;
}
