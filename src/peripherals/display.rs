//! Render surface for the watchface
//!
//! The device draws straight into the host's layer; anything implementing
//! `DrawTarget<Color = ColorMode>` works. `Framebuffer` is an in-memory
//! surface for hosts that blit a finished frame and for tests.

use core::convert::Infallible;

use embedded_graphics::{
    pixelcolor::{Rgb565, RgbColor},
    prelude::*,
    primitives::Rectangle,
};

/// Pixel format of the render surface
pub type ColorMode = Rgb565;

pub const LCD_W: usize = 144;
pub const LCD_H: usize = 168;

/// Full-screen canvas
pub type DisplayCanvas = Framebuffer<LCD_W, LCD_H>;

/// Fixed-size pixel buffer, row-major
#[derive(Clone, PartialEq, Eq)]
pub struct Framebuffer<const W: usize, const H: usize> {
    pixels: [[ColorMode; W]; H],
}

impl<const W: usize, const H: usize> Framebuffer<W, H> {
    /// Create a black canvas
    pub const fn new() -> Self {
        Self {
            pixels: [[ColorMode::BLACK; W]; H],
        }
    }

    /// Colour at `point`, `None` when outside the canvas
    pub fn pixel(&self, point: Point) -> Option<ColorMode> {
        let (x, y) = Self::index(point)?;
        Some(self.pixels[y][x])
    }

    fn index(point: Point) -> Option<(usize, usize)> {
        let x = usize::try_from(point.x).ok()?;
        let y = usize::try_from(point.y).ok()?;
        (x < W && y < H).then_some((x, y))
    }
}

impl<const W: usize, const H: usize> Default for Framebuffer<W, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const W: usize, const H: usize> OriginDimensions for Framebuffer<W, H> {
    fn size(&self) -> Size {
        Size::new(W as u32, H as u32)
    }
}

impl<const W: usize, const H: usize> DrawTarget for Framebuffer<W, H> {
    type Color = ColorMode;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        // Out-of-bounds pixels are dropped, like on the panel
        for Pixel(point, color) in pixels {
            if let Some((x, y)) = Self::index(point) {
                self.pixels[y][x] = color;
            }
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        if let Some(bottom_right) = area.bottom_right() {
            let (x0, y0) = (area.top_left.x as usize, area.top_left.y as usize);
            let (x1, y1) = (bottom_right.x as usize, bottom_right.y as usize);
            for row in &mut self.pixels[y0..=y1] {
                row[x0..=x1].fill(color);
            }
        }
        Ok(())
    }
}
