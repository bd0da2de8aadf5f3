//! Glyph grid watchface
//!
//! Draws battery, time, weekday, date and a fixed label as a 5x5 grid of
//! bitmap-font cells, each row in its own colours. The host platform owns the
//! event loop; it forwards window, tick and battery events to a
//! [`WatchFace`] and hands it a surface to paint on redraw.

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod peripherals;
pub mod system;
pub mod ui;

pub use peripherals::{
    battery::BatteryInfo,
    display::{ColorMode, DisplayCanvas, Framebuffer},
};
pub use system::{
    config::{DateOrder, FaceConfig, Language, Layout},
    host::{BitmapResource, Host, ResourceId, ResourceProvider},
};
pub use ui::{glyph_watchface::GlyphWatchface, Error, FaceState, RowText, WatchFace};
