//! Line rasterization.
//!
//! Converts screen-space segments into the exact pixels an integer
//! incremental-error (midpoint / Bresenham) walk touches, and hands each pixel
//! to a [`PixelSink`].
//!
//! # Algorithms
//!
//! - **Bresenham's Line**: four explicit octant branches (1, 2, 7, 8); the other
//!   four are reached by ordering the endpoints left to right first.
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."

mod line;
mod sink;

pub use line::{draw_line, draw_lines, to_pixel, Drawable};
pub use sink::{PixelLog, PixelSink};
