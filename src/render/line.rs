//! Integer line rasterization.

use log::warn;

use super::sink::PixelSink;
use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::geometry::Edge;
use crate::point_buffer::PointBuffer;

/// Trait for things that can be rasterized into a [`PixelSink`].
pub trait Drawable {
    /// Draw this primitive.
    ///
    /// # Errors
    ///
    /// Returns an error if the primitive cannot be drawn as lines.
    fn draw(&self, sink: &mut dyn PixelSink, color: Rgba) -> Result<()>;
}

/// Convert a stored coordinate to a pixel coordinate.
///
/// Truncates toward zero (`2.9 -> 2`, `-2.9 -> -2`). Values beyond the `i32`
/// range saturate and NaN maps to 0.
#[must_use]
#[inline]
pub fn to_pixel(coord: f64) -> i32 {
    coord as i32
}

/// Draw a line from `(x0, y0)` to `(x1, y1)`, both endpoints included.
///
/// Endpoints are first ordered left to right, so both argument orders plot the
/// same pixels. The major axis advances one pixel per step; the minor axis
/// advances when the error term crosses zero (strictly). The loop stops one
/// step short of the major-axis end and `(x1, y1)` is plotted after it, so a
/// degenerate line plots its single pixel once.
pub fn draw_line<S: PixelSink + ?Sized>(
    sink: &mut S,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    color: Rgba,
) {
    let (x0, y0, x1, y1) = if x0 > x1 { (x1, y1, x0, y0) } else { (x0, y0, x1, y1) };
    let (x0, y0, x1, y1) = (i64::from(x0), i64::from(y0), i64::from(x1), i64::from(y1));

    let mut x = x0;
    let mut y = y0;
    let a = 2 * (y1 - y0);
    let b = -2 * (x1 - x0);

    // Coordinates stay between the two endpoints, so narrowing back is lossless.
    let mut plot = |x: i64, y: i64| sink.plot(x as i32, y as i32, color);

    if (x1 - x0).abs() >= (y1 - y0).abs() {
        if a > 0 {
            // octant 1
            let mut d = a + b / 2;
            while x < x1 {
                plot(x, y);
                if d > 0 {
                    y += 1;
                    d += b;
                }
                x += 1;
                d += a;
            }
        } else {
            // octant 8
            let mut d = a - b / 2;
            while x < x1 {
                plot(x, y);
                if d < 0 {
                    y -= 1;
                    d -= b;
                }
                x += 1;
                d += a;
            }
        }
    } else if a > 0 {
        // octant 2
        let mut d = a / 2 + b;
        while y < y1 {
            plot(x, y);
            if d < 0 {
                x += 1;
                d += a;
            }
            y += 1;
            d += b;
        }
    } else {
        // octant 7
        let mut d = a / 2 - b;
        while y > y1 {
            plot(x, y);
            if d > 0 {
                x += 1;
                d += a;
            }
            y -= 1;
            d -= b;
        }
    }

    plot(x1, y1);
}

/// Draw every edge of `points`: columns `(0, 1)`, `(2, 3)`, ...
///
/// Only x and y are used, converted with [`to_pixel`]. A trailing unpaired
/// point is skipped.
///
/// # Errors
///
/// Returns [`Error::NotEnoughPoints`] without plotting anything if the buffer
/// holds fewer than 2 points.
pub fn draw_lines<S: PixelSink + ?Sized>(
    sink: &mut S,
    points: &PointBuffer,
    color: Rgba,
) -> Result<()> {
    if points.len() < 2 {
        warn!("Need at least 2 points to draw a line! (buffer has {})", points.len());
        return Err(Error::NotEnoughPoints { len: points.len() });
    }

    for edge in points.edges() {
        draw_edge(sink, &edge, color);
    }
    Ok(())
}

fn draw_edge<S: PixelSink + ?Sized>(sink: &mut S, edge: &Edge, color: Rgba) {
    draw_line(
        sink,
        to_pixel(edge.start.x),
        to_pixel(edge.start.y),
        to_pixel(edge.end.x),
        to_pixel(edge.end.y),
        color,
    );
}

impl Drawable for Edge {
    fn draw(&self, sink: &mut dyn PixelSink, color: Rgba) -> Result<()> {
        draw_edge(sink, self, color);
        Ok(())
    }
}

impl Drawable for PointBuffer {
    fn draw(&self, sink: &mut dyn PixelSink, color: Rgba) -> Result<()> {
        draw_lines(sink, self, color)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point3;
    use crate::render::PixelLog;

    fn line(x0: i32, y0: i32, x1: i32, y1: i32) -> Vec<(i32, i32)> {
        let mut log = PixelLog::new();
        draw_line(&mut log, x0, y0, x1, y1, Rgba::BLACK);
        log.coords()
    }

    #[test]
    fn test_octant_1() {
        assert_eq!(line(0, 0, 5, 2), [(0, 0), (1, 0), (2, 1), (3, 1), (4, 2), (5, 2)]);
    }

    #[test]
    fn test_octant_8() {
        assert_eq!(line(0, 0, 5, -2), [(0, 0), (1, 0), (2, -1), (3, -1), (4, -2), (5, -2)]);
    }

    #[test]
    fn test_octant_2() {
        assert_eq!(line(0, 0, 2, 5), [(0, 0), (0, 1), (1, 2), (1, 3), (2, 4), (2, 5)]);
    }

    #[test]
    fn test_octant_7() {
        assert_eq!(line(0, 0, 2, -5), [(0, 0), (0, -1), (1, -2), (1, -3), (2, -4), (2, -5)]);
    }

    #[test]
    fn test_right_to_left_is_normalized() {
        assert_eq!(line(5, 2, 0, 0), line(0, 0, 5, 2));
        assert_eq!(line(2, -5, 0, 0), line(0, 0, 2, -5));
    }

    #[test]
    fn test_diagonals() {
        assert_eq!(line(0, 0, 3, 3), [(0, 0), (1, 1), (2, 2), (3, 3)]);
        assert_eq!(line(0, 0, 3, -3), [(0, 0), (1, -1), (2, -2), (3, -3)]);
    }

    #[test]
    fn test_horizontal_and_vertical() {
        assert_eq!(line(2, 7, 6, 7), [(2, 7), (3, 7), (4, 7), (5, 7), (6, 7)]);
        assert_eq!(line(4, 1, 4, 4), [(4, 1), (4, 2), (4, 3), (4, 4)]);
        assert_eq!(line(4, 4, 4, 1), [(4, 4), (4, 3), (4, 2), (4, 1)]);
    }

    #[test]
    fn test_degenerate_line_plots_once() {
        assert_eq!(line(5, 5, 5, 5), [(5, 5)]);
    }

    #[test]
    fn test_color_is_forwarded() {
        let mut log = PixelLog::new();
        draw_line(&mut log, 0, 0, 1, 0, Rgba::RED);
        assert!(log.plots().iter().all(|&(_, _, c)| c == Rgba::RED));
    }

    #[test]
    fn test_extreme_coordinates_do_not_overflow() {
        let mut log = PixelLog::new();
        draw_line(&mut log, i32::MAX - 2, i32::MIN, i32::MAX, i32::MIN + 1, Rgba::BLACK);
        assert_eq!(log.len(), 3);
        assert_eq!(log.coords().last(), Some(&(i32::MAX, i32::MIN + 1)));
    }

    #[test]
    fn test_to_pixel_truncates_toward_zero() {
        assert_eq!(to_pixel(2.9), 2);
        assert_eq!(to_pixel(-2.9), -2);
        assert_eq!(to_pixel(f64::NAN), 0);
        assert_eq!(to_pixel(1e20), i32::MAX);
    }

    #[test_log::test]
    fn test_draw_lines_needs_two_points() {
        let mut buffer = PointBuffer::new(1);
        buffer.append((5.0, 5.0, 0.0));
        let mut log = PixelLog::new();

        let result = draw_lines(&mut log, &buffer, Rgba::BLACK);

        assert!(matches!(result, Err(Error::NotEnoughPoints { len: 1 })));
        assert!(log.is_empty());
    }

    #[test]
    fn test_draw_lines_empty_buffer() {
        let mut log = PixelLog::new();
        assert!(draw_lines(&mut log, &PointBuffer::new(0), Rgba::BLACK).is_err());
        assert!(log.is_empty());
    }

    #[test]
    fn test_draw_lines_drops_odd_point() {
        let mut buffer = PointBuffer::new(0);
        buffer.append_edge((0.0, 0.0, 0.0), (3.0, 0.0, 0.0));
        buffer.append_edge((0.0, 10.0, 0.0), (0.0, 12.0, 0.0));
        buffer.append((50.0, 50.0, 0.0));

        let mut log = PixelLog::new();
        draw_lines(&mut log, &buffer, Rgba::BLACK).unwrap();

        assert_eq!(
            log.coords(),
            [(0, 0), (1, 0), (2, 0), (3, 0), (0, 10), (0, 11), (0, 12)]
        );
    }

    #[test]
    fn test_draw_lines_truncates_coordinates() {
        let mut buffer = PointBuffer::new(0);
        buffer.append_edge((0.9, 0.9, 0.0), (2.7, -0.5, 0.0));

        let mut log = PixelLog::new();
        draw_lines(&mut log, &buffer, Rgba::BLACK).unwrap();
        assert_eq!(log.coords(), [(0, 0), (1, 0), (2, 0)]);
    }

    #[test]
    fn test_drawable_edge_and_buffer() {
        let edge = Edge::new(Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 0.0, 9.0));
        let mut log = PixelLog::new();
        edge.draw(&mut log, Rgba::BLUE).unwrap();
        assert_eq!(log.coords(), [(0, 0), (1, 0), (2, 0)]);

        let empty = PointBuffer::new(0);
        assert!(empty.draw(&mut log, Rgba::BLUE).is_err());
    }
}

// ============================================================================
// Property-based tests with proptest
// ============================================================================
