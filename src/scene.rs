//! Frame-level edge accumulation.
//!
//! A [`Scene`] owns one edges buffer that collects every shape added during a
//! frame. [`Scene::render`] draws it once and empties it for the next frame.
//!
//! ```
//! use wireframe_raster::prelude::*;
//!
//! let mut scene = Scene::new()
//!     .add_box(Point3::new(100.0, 400.0, 0.0), 200.0, 200.0, 200.0)
//!     .add_circle(Point3::new(250.0, 250.0, 0.0), 100.0);
//!
//! let mut screen = Screen::new(500, 500).unwrap();
//! scene.render(&mut screen, Rgba::BLACK).unwrap();
//! assert!(scene.is_empty());
//! ```

use log::trace;

use crate::color::Rgba;
use crate::config::ShapeConfig;
use crate::curve::CurveKind;
use crate::error::Result;
use crate::geometry::Point3;
use crate::point_buffer::{PointBuffer, MAX_GROWTH};
use crate::render::{draw_lines, PixelSink};
use crate::shapes;

/// Accumulates the edges of one frame.
#[derive(Debug, Clone)]
pub struct Scene {
    edges: PointBuffer,
    shapes: ShapeConfig,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// Create an empty scene with default sampling steps.
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(&ShapeConfig::default())
    }

    /// Create an empty scene using the steps and growth block of `config`.
    ///
    /// The growth block is capped at [`MAX_GROWTH`].
    #[must_use]
    pub fn from_config(config: &ShapeConfig) -> Self {
        let growth = config.growth.min(MAX_GROWTH);
        Self { edges: PointBuffer::with_growth(0, growth), shapes: config.clone() }
    }

    /// Add a box; see [`shapes::add_box`].
    #[must_use]
    pub fn add_box(mut self, corner: Point3, w: f64, h: f64, d: f64) -> Self {
        shapes::add_box(&mut self.edges, corner, w, h, d);
        self
    }

    /// Add a sphere sampled with the configured sphere step.
    #[must_use]
    pub fn add_sphere(mut self, center: Point3, r: f64) -> Self {
        shapes::add_sphere(&mut self.edges, center, r, self.shapes.sphere_step);
        self
    }

    /// Add a torus sampled with the configured torus step.
    #[must_use]
    pub fn add_torus(mut self, center: Point3, r: f64, big_r: f64) -> Self {
        shapes::add_torus(&mut self.edges, center, r, big_r, self.shapes.torus_step);
        self
    }

    /// Add a circle with the configured number of segments.
    #[must_use]
    pub fn add_circle(mut self, center: Point3, r: f64) -> Self {
        shapes::add_circle(&mut self.edges, center, r, self.shapes.circle_step);
        self
    }

    /// Add a cubic curve with the configured number of segments.
    #[must_use]
    pub fn add_curve(mut self, geometry: [Point3; 4], kind: CurveKind) -> Self {
        shapes::add_curve(&mut self.edges, geometry, self.shapes.curve_step, kind);
        self
    }

    /// Add a single edge.
    #[must_use]
    pub fn add_edge(mut self, start: Point3, end: Point3) -> Self {
        self.edges.append_edge(start, end);
        self
    }

    /// Append the contents of an already built edges buffer.
    #[must_use]
    pub fn add_edges(mut self, edges: &PointBuffer) -> Self {
        self.edges.extend_from(edges);
        self
    }

    /// Edges accumulated so far.
    #[must_use]
    pub fn edges(&self) -> &PointBuffer {
        &self.edges
    }

    /// Returns true if no edge is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Draw every pending edge into `sink`, then clear the scene.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotEnoughPoints`](crate::error::Error::NotEnoughPoints)
    /// if fewer than 2 points are pending. The scene is cleared either way.
    pub fn render<S: PixelSink + ?Sized>(&mut self, sink: &mut S, color: Rgba) -> Result<()> {
        trace!("rendering scene with {} points", self.edges.len());
        let result = draw_lines(sink, &self.edges, color);
        self.clear();
        result
    }

    /// Discard pending edges, keeping the buffer's capacity.
    pub fn clear(&mut self) {
        self.edges.clear();
    }
}
