//! Parametric shape generators.
//!
//! The `generate_*` functions return a fresh [`PointBuffer`] of surface points.
//! The `add_*` functions append edges to a caller-owned edges buffer. None of
//! them touch a drawing surface.
//!
//! Angular sampling uses `t = i / step` for `i` in `1..=step`: the `t = 0`
//! sample is never generated, `t = 1` always is. Sphere and torus grids keep
//! that seam; circles and curves start from the `t = 0` point explicitly so
//! the outline closes.
//!
//! A `step` of 0 produces no points and no edges.

use std::f64::consts::PI;

use crate::curve::{Curve, CurveKind};
use crate::edges::add_point_cloud;
use crate::geometry::Point3;
use crate::point_buffer::PointBuffer;

/// Parameter values `i / step` for `i` in `1..=step`.
fn samples(step: usize) -> impl Iterator<Item = f64> + Clone {
    (1..=step).map(move |i| i as f64 / step as f64)
}

/// Append the 12 edges of a rectangular prism.
///
/// `corner` is the upper-left-front point: width extends along +x, height
/// along -y and depth along -z.
pub fn add_box(edges: &mut PointBuffer, corner: Point3, w: f64, h: f64, d: f64) {
    let Point3 { x, y, z } = corner;
    let p = Point3::new;

    edges.append_edge(p(x, y, z), p(x + w, y, z));
    edges.append_edge(p(x, y, z), p(x, y - h, z));
    edges.append_edge(p(x, y, z), p(x, y, z - d));

    edges.append_edge(p(x + w, y, z), p(x + w, y - h, z));
    edges.append_edge(p(x + w, y, z), p(x + w, y, z - d));

    edges.append_edge(p(x, y - h, z), p(x, y - h, z - d));
    edges.append_edge(p(x, y - h, z), p(x + w, y - h, z));

    edges.append_edge(p(x + w, y - h, z - d), p(x + w, y - h, z));
    edges.append_edge(p(x + w, y - h, z - d), p(x + w, y, z - d));
    edges.append_edge(p(x + w, y - h, z - d), p(x, y - h, z - d));

    edges.append_edge(p(x + w, y, z - d), p(x, y, z - d));

    edges.append_edge(p(x, y, z - d), p(x, y - h, z - d));
}

/// Generate `step²` points on a sphere of radius `r` around `center`.
///
/// `phi` (rotation about the x axis) is the outer loop, `theta` (the
/// half-circle angle fraction) the inner one.
#[must_use]
pub fn generate_sphere(center: Point3, r: f64, step: usize) -> PointBuffer {
    let mut points = PointBuffer::new(step * step);

    for phi in samples(step) {
        for theta in samples(step) {
            let x = r * (PI * theta).cos() + center.x;
            let y = r * (PI * theta).sin() * (2.0 * PI * phi).cos() + center.y;
            let z = r * (PI * theta).sin() * (2.0 * PI * phi).sin() + center.z;
            points.append((x, y, z));
        }
    }

    points
}

/// Append a point-mark edge for every point of [`generate_sphere`].
pub fn add_sphere(edges: &mut PointBuffer, center: Point3, r: f64, step: usize) {
    let points = generate_sphere(center, r, step);
    add_point_cloud(edges, &points);
}

/// Generate `step²` points on a torus around `center`.
///
/// `r` is the tube radius and `big_r` the distance from the center to the
/// middle of the tube. The torus lies around the y axis.
#[must_use]
pub fn generate_torus(center: Point3, r: f64, big_r: f64, step: usize) -> PointBuffer {
    let mut points = PointBuffer::new(step * step);

    for phi in samples(step) {
        for theta in samples(step) {
            let ring = r * (2.0 * PI * theta).cos() + big_r;
            let x = (2.0 * PI * phi).cos() * ring + center.x;
            let y = r * (2.0 * PI * theta).sin() + center.y;
            let z = -(2.0 * PI * phi).sin() * ring + center.z;
            points.append((x, y, z));
        }
    }

    points
}

/// Append a point-mark edge for every point of [`generate_torus`].
pub fn add_torus(edges: &mut PointBuffer, center: Point3, r: f64, big_r: f64, step: usize) {
    let points = generate_torus(center, r, big_r, step);
    add_point_cloud(edges, &points);
}

/// Append a `step`-sided polygon approximating a circle in the plane `z = center.z`.
///
/// The first edge runs from `(cx + r, cy)` to the sample at `t = 1 / step`;
/// the last one ends back at `t = 1`.
pub fn add_circle(edges: &mut PointBuffer, center: Point3, r: f64, step: usize) {
    let mut prev = Point3::new(r + center.x, center.y, center.z);

    for t in samples(step) {
        let next = Point3::new(
            r * (2.0 * PI * t).cos() + center.x,
            r * (2.0 * PI * t).sin() + center.y,
            center.z,
        );
        edges.append_edge(prev, next);
        prev = next;
    }
}

/// Append `step` edges approximating a cubic curve.
///
/// Coefficients are resolved once from `geometry` for the chosen family; see
/// [`crate::curve`] for how the four points are read. The polyline starts at
/// `geometry[0]`.
pub fn add_curve(edges: &mut PointBuffer, geometry: [Point3; 4], step: usize, kind: CurveKind) {
    let curve = Curve::new(geometry, kind);
    let mut prev = geometry[0];

    for t in samples(step) {
        let next = curve.point_at(t);
        edges.append_edge(prev, next);
        prev = next;
    }
}
