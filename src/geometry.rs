//! Homogeneous points and edges.
//!
//! A [`Point3`] is stored as `(x, y, z)` with an implicit `w = 1`. An [`Edge`]
//! is a pair of points; inside a [`PointBuffer`](crate::point_buffer::PointBuffer)
//! it is not stored as such, only as two adjacent columns `(2k, 2k + 1)`.

use std::fmt;

/// A 3D point in homogeneous coordinates with implicit `w = 1`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3 {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Z coordinate.
    pub z: f64,
}

impl Point3 {
    /// Origin point (0, 0, 0).
    pub const ORIGIN: Self = Self::new(0.0, 0.0, 0.0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Homogeneous coordinate, always `1`.
    #[must_use]
    pub const fn w(self) -> f64 {
        1.0
    }

    /// The point as a homogeneous column `[x, y, z, 1]`.
    #[must_use]
    pub const fn to_homogeneous(self) -> [f64; 4] {
        [self.x, self.y, self.z, 1.0]
    }

    /// Translate every coordinate by the same amount.
    #[must_use]
    pub fn offset(self, delta: f64) -> Self {
        Self::new(self.x + delta, self.y + delta, self.z + delta)
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

impl From<(f64, f64, f64)> for Point3 {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}

impl fmt::Display for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// A segment between two points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Edge {
    /// Start point.
    pub start: Point3,
    /// End point.
    pub end: Point3,
}

impl Edge {
    /// Create a new edge.
    #[must_use]
    pub const fn new(start: Point3, end: Point3) -> Self {
        Self { start, end }
    }

    /// Length of the edge.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }
}
