//! # wireframe-raster
//!
//! Primitive generation and line rasterization for a small 3D wireframe engine.
//!
//! Shapes (boxes, spheres, tori, circles, Hermite and Bezier curves) are
//! sampled into a [`PointBuffer`](point_buffer::PointBuffer) of edges. Each
//! edge is then walked by an integer Bresenham rasterizer that reports every
//! pixel to a [`PixelSink`](render::PixelSink).
//!
//! Points are expected to be in screen space already: only x and y reach the
//! rasterizer, truncated toward zero.
//!
//! ## Quick Start
//!
//! ```rust
//! use wireframe_raster::prelude::*;
//!
//! let mut edges = PointBuffer::new(0);
//! add_box(&mut edges, Point3::new(50.0, 450.0, 0.0), 100.0, 100.0, 100.0);
//! add_circle(&mut edges, Point3::new(250.0, 250.0, 0.0), 80.0, 100);
//!
//! let mut screen = Screen::new(500, 500)?;
//! draw_lines(&mut screen, &edges, Rgba::BLACK)?;
//! # Ok::<(), wireframe_raster::Error>(())
//! ```
//!
//! ## References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Foley, J. D., et al. (1990). *Computer Graphics: Principles and Practice*, ch. 11
//!   (Hermite and Bezier cubic curves).

#![warn(missing_docs)]
// Allow unwrap() in tests only
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]

// ============================================================================
// Core Modules
// ============================================================================

/// Pixel color type.
pub mod color;

/// Homogeneous points and edges.
pub mod geometry;

/// Growable point storage.
pub mod point_buffer;

/// Hermite and Bezier curve coefficients.
pub mod curve;

// ============================================================================
// Shape Modules
// ============================================================================

/// Box, sphere, torus, circle and curve generators.
pub mod shapes;

/// Point-cloud to edge conversion.
pub mod edges;

/// Per-frame edge accumulation.
pub mod scene;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Line rasterization and pixel sinks.
pub mod render;

/// In-memory drawing surface.
pub mod screen;

/// YAML configuration.
pub mod config;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for wireframe-raster operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```rust
/// use wireframe_raster::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::Rgba;
    pub use crate::config::RenderConfig;
    pub use crate::curve::CurveKind;
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{Edge, Point3};
    pub use crate::point_buffer::PointBuffer;
    pub use crate::render::{draw_line, draw_lines, Drawable, PixelLog, PixelSink};
    pub use crate::scene::Scene;
    pub use crate::screen::Screen;
    pub use crate::shapes::{
        add_box, add_circle, add_curve, add_sphere, add_torus, generate_sphere, generate_torus,
    };
}
