//! Glyph renderer
//!
//! Each cell is a background tile with a font sprite composited on top. Both
//! bitmaps are indexed; `Palettized` swaps in the row's colours while drawing.

use core::marker::PhantomData;

use embedded_graphics::{
    image::{Image, ImageDrawableExt, ImageRaw},
    pixelcolor::{BinaryColor, Gray2, GrayColor},
    prelude::*,
    primitives::Rectangle,
};

use super::{
    font::{glyph_index, sprite_rect},
    palette::RowPalette,
    Error, RowText, FACE_ROWS,
};
use crate::{peripherals::display::ColorMode, system::config::Layout};

/// Indexed colour that selects a palette slot
pub trait PaletteIndex: PixelColor {
    fn palette_index(self) -> usize;
}

impl PaletteIndex for Gray2 {
    fn palette_index(self) -> usize {
        self.luma() as usize
    }
}

impl PaletteIndex for BinaryColor {
    fn palette_index(self) -> usize {
        self.is_on() as usize
    }
}

/// Draw target that maps indexed pixels through a palette onto `target`.
///
/// `None` slots are transparent and leave the target untouched.
pub struct Palettized<'a, D, S> {
    target: &'a mut D,
    palette: &'a [Option<ColorMode>],
    _source: PhantomData<S>,
}

impl<'a, D, S> Palettized<'a, D, S>
where
    D: DrawTarget<Color = ColorMode>,
    S: PaletteIndex,
{
    pub fn new(target: &'a mut D, palette: &'a [Option<ColorMode>]) -> Self {
        Self {
            target,
            palette,
            _source: PhantomData,
        }
    }
}

impl<D, S> Dimensions for Palettized<'_, D, S>
where
    D: DrawTarget<Color = ColorMode>,
{
    fn bounding_box(&self) -> Rectangle {
        self.target.bounding_box()
    }
}

impl<D, S> DrawTarget for Palettized<'_, D, S>
where
    D: DrawTarget<Color = ColorMode>,
    S: PaletteIndex,
{
    type Color = S;
    type Error = D::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let palette = self.palette;
        self.target.draw_iter(pixels.into_iter().filter_map(|Pixel(point, index)| {
            palette
                .get(index.palette_index())
                .copied()
                .flatten()
                .map(|color| Pixel(point, color))
        }))
    }
}

/// Bitmaps a loaded face draws from
pub struct Sheets<'r> {
    /// Background tile, cropped to one cell
    pub digit: ImageRaw<'r, Gray2>,
    /// Font sprites, `SHEET_COLUMNS` per row
    pub font: ImageRaw<'r, BinaryColor>,
}

/// Screen area of the cell at `row`, `column`
pub fn cell_rect(layout: &Layout, row: u8, column: u8) -> Rectangle {
    let step = layout.cell + Size::new(layout.margin, layout.margin);
    Rectangle::new(
        layout.offset
            + Point::new(
                (u32::from(column) * step.width) as i32,
                (u32::from(row) * step.height) as i32,
            ),
        layout.cell,
    )
}

/// Draw one row of the grid.
///
/// Every column gets the background tile in the row's dither colours, then
/// the character's sprite in the row's font colour on top.
pub fn draw_row<D>(
    surface: &mut D,
    sheets: &Sheets<'_>,
    layout: &Layout,
    palette: &RowPalette,
    mask: ColorMode,
    row: u8,
    text: &RowText,
) -> Result<(), Error>
where
    D: DrawTarget<Color = ColorMode>,
{
    if row as usize >= FACE_ROWS {
        return Err(Error::RowOutOfRange(row));
    }

    let tile_palette = palette.tile(mask);
    let glyph_palette = palette.glyph();
    let tile = sheets.digit.sub_image(&Rectangle::new(Point::zero(), layout.cell));

    for (column, &ch) in text.bytes().iter().enumerate() {
        let dest = cell_rect(layout, row, column as u8);
        let glyph = glyph_index(ch);

        Image::new(&tile, dest.top_left)
            .draw(&mut Palettized::<_, Gray2>::new(surface, &tile_palette))
            .map_err(|_| Error::Draw)?;

        let sprite = sheets.font.sub_image(&sprite_rect(glyph, layout.cell));
        Image::new(&sprite, dest.top_left)
            .draw(&mut Palettized::<_, BinaryColor>::new(surface, &glyph_palette))
            .map_err(|_| Error::Draw)?;
    }

    trace!("row {} drawn: {}", row, text.as_str());
    Ok(())
}
