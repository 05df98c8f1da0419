//! In-memory drawing surface.
//!
//! A [`Screen`] is an RGBA pixel grid whose origin is the bottom-left corner:
//! plotting `(x, y)` writes row `height - 1 - y`. Pixels outside the grid are
//! ignored, so wireframes may extend past the edges.

use crate::color::Rgba;
use crate::config::ScreenConfig;
use crate::error::{Error, Result};
use crate::render::PixelSink;

/// RGBA pixel surface with a bottom-left origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// RGBA bytes in row-major order, top row first.
    pixels: Vec<u8>,
}

impl Screen {
    /// Create a screen cleared to transparent black.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use wireframe_raster::screen::Screen;
    ///
    /// let screen = Screen::new(500, 500).unwrap();
    /// assert_eq!(screen.width(), 500);
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        let size = (width as usize) * (height as usize) * 4;
        Ok(Self { width, height, pixels: vec![0; size] })
    }

    /// Create a screen sized by `config`, cleared to its background color.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured dimension is zero.
    pub fn from_config(config: &ScreenConfig) -> Result<Self> {
        let mut screen = Self::new(config.width, config.height)?;
        screen.clear(config.background);
        Ok(screen)
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes, top row first.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Fill the whole screen with one color.
    pub fn clear(&mut self, color: Rgba) {
        let rgba = color.to_array();
        for chunk in self.pixels.chunks_exact_mut(4) {
            chunk.copy_from_slice(&rgba);
        }
    }

    /// Color at screen coordinate `(x, y)` (bottom-left origin).
    ///
    /// Returns `None` if the coordinates are off screen.
    #[must_use]
    pub fn get(&self, x: i32, y: i32) -> Option<Rgba> {
        let idx = self.index(x, y)?;
        let p = &self.pixels[idx..idx + 4];
        Some(Rgba::new(p[0], p[1], p[2], p[3]))
    }

    /// Number of pixels currently holding `color`.
    #[must_use]
    pub fn count(&self, color: Rgba) -> usize {
        let rgba = color.to_array();
        self.pixels.chunks_exact(4).filter(|p| *p == rgba).count()
    }

    /// Byte offset of `(x, y)`, flipping y so that row 0 is the bottom.
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let x = u32::try_from(x).ok().filter(|&x| x < self.width)?;
        let y = u32::try_from(y).ok().filter(|&y| y < self.height)?;
        let row = self.height - 1 - y;
        Some(((row as usize) * (self.width as usize) + x as usize) * 4)
    }
}

impl PixelSink for Screen {
    fn plot(&mut self, x: i32, y: i32, color: Rgba) {
        if let Some(idx) = self.index(x, y) {
            self.pixels[idx..idx + 4].copy_from_slice(&color.to_array());
        }
    }
}
