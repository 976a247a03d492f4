use std::path::Path;

use image::{ImageFormat, Rgba, RgbaImage};

use crate::{color::Color, deposit::Deposit, error::SurveyError, formatter::labelled, grid::Grid};

/// Largest accepted pixels-per-tile.
pub const MAX_SCALE: u32 = 64;

/// Paints each deposit in its palette color, one square block per tile.
pub struct Encoder<'a> {
    width: usize,
    height: usize,
    deposits: &'a [Deposit],
}

impl<'a> Encoder<'a> {
    pub fn new(grid: &Grid, deposits: &'a [Deposit]) -> Self {
        Self {
            width: grid.width(),
            height: grid.height(),
            deposits,
        }
    }

    /// Image size in pixels, or `None` if it does not fit in `u32`.
    pub fn dimensions(&self, scale: u32) -> Option<(u32, u32)> {
        let scale = scale.max(1);
        let width = u32::try_from(self.width).ok()?.checked_mul(scale)?;
        let height = u32::try_from(self.height).ok()?.checked_mul(scale)?;
        Some((width, height))
    }

    pub fn encode(&self, scale: u32) -> Result<RgbaImage, SurveyError> {
        let (width, height) = self
            .dimensions(scale)
            .ok_or(SurveyError::ImageTooLarge {
                columns: self.width,
                rows: self.height,
                scale,
            })?;
        let scale = scale.max(1);
        let bg = to_rgba(Color::background());
        let mut img = RgbaImage::from_pixel(width, height, bg);

        // palette index follows the formatter's symbol order
        labelled(self.deposits)
            .enumerate()
            .for_each(|(i, (_, deposit))| {
                let px = to_rgba(Color::palette(i));
                // tiles lie inside the grid, so their pixel offsets fit in u32
                for tile in deposit {
                    let (x0, y0) = (tile.x as u32 * scale, tile.y as u32 * scale);
                    for dy in 0..scale {
                        for dx in 0..scale {
                            img.put_pixel(x0 + dx, y0 + dy, px);
                        }
                    }
                }
            });

        Ok(img)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P, scale: u32) -> Result<(), SurveyError> {
        self.encode(scale)?
            .save_with_format(path.as_ref(), ImageFormat::Png)?;
        Ok(())
    }
}

fn to_rgba(c: Color) -> Rgba<u8> {
    Rgba([c.r(), c.g(), c.b(), u8::MAX])
}
