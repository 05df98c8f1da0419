//! Turning point clouds into drawable edges.
//!
//! Line drawing consumes points two at a time, so a lone surface point would
//! never be drawn. Each point of a cloud is therefore written as a degenerate
//! edge from `(x, y, z)` to `(x + 1, y + 1, z + 1)`, which rasterizes as a
//! one- or two-pixel mark.

use crate::point_buffer::PointBuffer;

/// Offset applied to every coordinate of the second endpoint of a point mark.
pub const POINT_MARK_OFFSET: f64 = 1.0;

/// Append one point-mark edge to `edges` for every point of `points`.
pub fn add_point_cloud(edges: &mut PointBuffer, points: &PointBuffer) {
    for &point in points.points() {
        edges.append_edge(point, point.offset(POINT_MARK_OFFSET));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Edge, Point3};

    #[test]
    fn test_point_cloud_marks() {
        let mut cloud = PointBuffer::new(0);
        cloud.append((1.0, 2.0, 3.0));
        cloud.append((-4.5, 0.0, 2.0));

        let mut edges = PointBuffer::new(0);
        add_point_cloud(&mut edges, &cloud);

        let got: Vec<Edge> = edges.edges().collect();
        assert_eq!(
            got,
            [
                Edge::new(Point3::new(1.0, 2.0, 3.0), Point3::new(2.0, 3.0, 4.0)),
                Edge::new(Point3::new(-4.5, 0.0, 2.0), Point3::new(-3.5, 1.0, 3.0)),
            ]
        );
    }

    #[test]
    fn test_empty_cloud_adds_nothing() {
        let mut edges = PointBuffer::new(0);
        edges.append_edge(Point3::ORIGIN, Point3::ORIGIN);
        add_point_cloud(&mut edges, &PointBuffer::new(0));
        assert_eq!(edges.len(), 2);
    }
}
