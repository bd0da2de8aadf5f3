//! Watchface configuration

use embedded_graphics::geometry::{Point, Size};

use crate::ui::{palette::Palette, RowText};

/// Grid geometry on the screen
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    /// Top-left corner of the first cell
    pub offset: Point,
    /// Size of one cell, also the size of a font sprite
    pub cell: Size,
    /// Gap between neighbouring cells
    pub margin: u32,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            offset: Point::new(5, 5),
            cell: Size::new(26, 31),
            margin: 1,
        }
    }
}

/// Language of the weekday row
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Language {
    #[default]
    English,
    Italian,
}

/// Field order of the date row
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DateOrder {
    /// `DD/MM`
    #[default]
    DayMonth,
    /// `MM/DD`
    MonthDay,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaceConfig {
    pub layout: Layout,
    pub palette: Palette,
    pub language: Language,
    pub date_order: DateOrder,
    /// Fixed text of the bottom row
    pub label: RowText,
    /// Put a bolt in front of the battery percentage while charging
    pub show_charging: bool,
}

impl FaceConfig {
    /// Create new watchface configuration
    pub fn new() -> Self {
        Self {
            // 5x5 grid of 26x31 cells, 1px apart
            layout: Layout::default(),
            // White mask, red time row, blue everywhere else
            palette: Palette::default(),
            language: Language::English,
            date_order: DateOrder::DayMonth,
            // Heart followed by the signature
            label: RowText::new("#KNOF"),
            show_charging: false,
        }
    }
}

impl Default for FaceConfig {
    fn default() -> Self {
        Self::new()
    }
}
