//! Pixel sinks: where rasterized pixels go.

use crate::color::Rgba;

/// Receiver of individual pixel plots.
///
/// The rasterizer calls [`plot`](Self::plot) once per pixel and never reads
/// anything back. Implementations decide what out-of-range coordinates mean.
pub trait PixelSink {
    /// Plot one pixel.
    fn plot(&mut self, x: i32, y: i32, color: Rgba);
}

impl<S: PixelSink + ?Sized> PixelSink for &mut S {
    fn plot(&mut self, x: i32, y: i32, color: Rgba) {
        (**self).plot(x, y, color);
    }
}

/// A sink that records every plot call in order.
///
/// Used to compare rasterized output exactly, duplicates included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PixelLog {
    plots: Vec<(i32, i32, Rgba)>,
}

impl PixelLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every recorded plot, in call order.
    #[must_use]
    pub fn plots(&self) -> &[(i32, i32, Rgba)] {
        &self.plots
    }

    /// Recorded coordinates, in call order.
    #[must_use]
    pub fn coords(&self) -> Vec<(i32, i32)> {
        self.plots.iter().map(|&(x, y, _)| (x, y)).collect()
    }

    /// Number of plot calls.
    #[must_use]
    pub fn len(&self) -> usize {
        self.plots.len()
    }

    /// Returns true if nothing was plotted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plots.is_empty()
    }

    /// Forget all recorded plots.
    pub fn clear(&mut self) {
        self.plots.clear();
    }
}

impl PixelSink for PixelLog {
    fn plot(&mut self, x: i32, y: i32, color: Rgba) {
        self.plots.push((x, y, color));
    }
}
