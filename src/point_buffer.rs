//! Growable store of homogeneous points.
//!
//! A [`PointBuffer`] is the currency between the shape generators and the
//! rasterizer. It tracks a logical length (the number of points written) apart
//! from its capacity (the number of columns reserved). Appending to a full
//! buffer grows the capacity by a fixed block and keeps every earlier point in
//! place and in order.
//!
//! Buffers meant for line drawing hold edges as adjacent column pairs
//! `(0, 1)`, `(2, 3)`, ... which is what [`PointBuffer::append_edge`] writes
//! and what [`PointBuffer::edges`] reads back.
//!
//! # Example
//!
//! ```
//! use wireframe_raster::point_buffer::PointBuffer;
//!
//! let mut buffer = PointBuffer::new(1);
//! buffer.append_edge((0.0, 0.0, 0.0), (10.0, 5.0, 0.0));
//! assert_eq!(buffer.len(), 2);
//! assert_eq!(buffer.capacity(), 101);
//! assert_eq!(buffer.edges().count(), 1);
//! ```

use std::fmt;

use log::debug;

use crate::error::Result;
use crate::geometry::{Edge, Point3};

/// Number of columns added each time a full buffer grows.
pub const DEFAULT_GROWTH: usize = 100;

/// Largest growth block accepted from configuration.
pub const MAX_GROWTH: usize = 1 << 20;

/// Ordered, auto-growing collection of homogeneous 3D points.
#[derive(Debug, Clone, PartialEq)]
pub struct PointBuffer {
    /// Written points; `points.len()` is the logical length.
    points: Vec<Point3>,
    /// Reserved columns. Invariant: `points.len() <= cols`.
    cols: usize,
    /// Columns added when appending to a full buffer.
    growth: usize,
}

impl Default for PointBuffer {
    fn default() -> Self {
        Self::new(0)
    }
}

impl PointBuffer {
    /// Create an empty buffer with room for `cols` points.
    #[must_use]
    pub fn new(cols: usize) -> Self {
        Self::with_growth(cols, DEFAULT_GROWTH)
    }

    /// Create an empty buffer with room for `cols` points that grows by
    /// `growth` columns at a time (at least 1).
    #[must_use]
    pub fn with_growth(cols: usize, growth: usize) -> Self {
        Self { points: Vec::with_capacity(cols), cols, growth: growth.max(1) }
    }

    /// Logical length: the number of points written.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if no point has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of columns reserved.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.cols
    }

    /// Columns added on each automatic growth.
    #[must_use]
    pub fn growth(&self) -> usize {
        self.growth
    }

    /// Point at column `index`, if it has been written.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Point3> {
        self.points.get(index).copied()
    }

    /// All written points, in insertion order.
    #[must_use]
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Iterate over the column pairs `(0, 1)`, `(2, 3)`, ... as edges.
    ///
    /// A trailing unpaired point is not yielded.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.points.chunks_exact(2).map(|pair| Edge::new(pair[0], pair[1]))
    }

    /// Reserve columns so that the capacity becomes `new_cols`.
    ///
    /// Requests at or below the current capacity leave the buffer unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Allocation`](crate::error::Error::Allocation) if the memory
    /// cannot be obtained. The buffer is left unmodified in that case.
    pub fn grow(&mut self, new_cols: usize) -> Result<()> {
        if new_cols <= self.cols {
            return Ok(());
        }
        self.points.try_reserve_exact(new_cols - self.points.len())?;
        debug!("point buffer grown from {} to {} columns", self.cols, new_cols);
        self.cols = new_cols;
        Ok(())
    }

    /// Append `(x, y, z, 1)` at the next column, growing first if full.
    ///
    /// An allocation failure while growing aborts the process. Use
    /// [`try_append`](Self::try_append) to handle it instead.
    pub fn append(&mut self, point: impl Into<Point3>) {
        if self.points.len() == self.cols {
            let new_cols = self.next_cols();
            self.points.reserve_exact(new_cols - self.points.len());
            debug!("point buffer grown from {} to {} columns", self.cols, new_cols);
            self.cols = new_cols;
        }
        self.points.push(point.into());
    }

    /// Fallible version of [`append`](Self::append).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Allocation`](crate::error::Error::Allocation) if growing
    /// fails; nothing is written then.
    pub fn try_append(&mut self, point: impl Into<Point3>) -> Result<()> {
        if self.points.len() == self.cols {
            self.grow(self.next_cols())?;
        }
        self.points.push(point.into());
        Ok(())
    }

    // Saturates so an oversized block surfaces as a reservation failure.
    fn next_cols(&self) -> usize {
        self.cols.saturating_add(self.growth)
    }

    /// Append the two endpoints of an edge at consecutive columns.
    pub fn append_edge(&mut self, start: impl Into<Point3>, end: impl Into<Point3>) {
        self.append(start);
        self.append(end);
    }

    /// Append every point of `other`, in order.
    pub fn extend_from(&mut self, other: &Self) {
        for &point in other.points() {
            self.append(point);
        }
    }

    /// Reset the logical length to zero, keeping the capacity.
    pub fn clear(&mut self) {
        self.points.clear();
    }
}

/// Prints the buffer as a 4-row matrix: x, y, z and w, one column per point.
impl fmt::Display for PointBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..4 {
            for (col, point) in self.points.iter().enumerate() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{:.2}", point.to_homogeneous()[row])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}


// ============================================================================
// Property-based tests with proptest
// ============================================================================
