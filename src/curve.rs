//! Cubic curve coefficients for the Hermite and Bezier families.
//!
//! Each axis of a curve is a cubic `f(t) = a·t³ + b·t² + c·t + d`. The four
//! coefficients come from multiplying the family's basis matrix by the four
//! geometry values of that axis:
//!
//! - **Hermite**: `(P0, P1, R0, R1)`, endpoints followed by their tangents.
//! - **Bezier**: `(P0, P1, P2, P3)`, the four control points.
//!
//! Both families start at `P0` for `t = 0`.

use crate::geometry::Point3;

/// Curve family selecting the basis matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveKind {
    /// Cubic Hermite: endpoints and tangents.
    Hermite,
    /// Cubic Bezier: four control points.
    Bezier,
}

const HERMITE_BASIS: [[f64; 4]; 4] = [
    [2.0, -2.0, 1.0, 1.0],
    [-3.0, 3.0, -2.0, -1.0],
    [0.0, 0.0, 1.0, 0.0],
    [1.0, 0.0, 0.0, 0.0],
];

const BEZIER_BASIS: [[f64; 4]; 4] = [
    [-1.0, 3.0, -3.0, 1.0],
    [3.0, -6.0, 3.0, 0.0],
    [-3.0, 3.0, 0.0, 0.0],
    [1.0, 0.0, 0.0, 0.0],
];

impl CurveKind {
    /// The 4×4 matrix mapping geometry values to cubic coefficients.
    #[must_use]
    pub const fn basis(self) -> &'static [[f64; 4]; 4] {
        match self {
            Self::Hermite => &HERMITE_BASIS,
            Self::Bezier => &BEZIER_BASIS,
        }
    }
}

/// Coefficients of `a·t³ + b·t² + c·t + d` for one axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CurveCoefs {
    /// Cubic coefficient.
    pub a: f64,
    /// Quadratic coefficient.
    pub b: f64,
    /// Linear coefficient.
    pub c: f64,
    /// Constant term.
    pub d: f64,
}

impl CurveCoefs {
    /// Evaluate the polynomial at `t`.
    #[must_use]
    pub fn eval(&self, t: f64) -> f64 {
        self.a * t * t * t + self.b * t * t + self.c * t + self.d
    }
}

/// Derive one axis' cubic coefficients from its four geometry values.
#[must_use]
pub fn generate_curve_coefs(p0: f64, p1: f64, p2: f64, p3: f64, kind: CurveKind) -> CurveCoefs {
    let geometry = [p0, p1, p2, p3];
    let basis = *kind.basis();
    let [a, b, c, d] =
        basis.map(|row| row.iter().zip(geometry).fold(0.0, |acc, (m, g)| acc + m * g));
    CurveCoefs { a, b, c, d }
}

/// A cubic space curve with coefficients resolved for every axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Curve {
    x: CurveCoefs,
    y: CurveCoefs,
    z: CurveCoefs,
}

impl Curve {
    /// Resolve the per-axis coefficients of a curve from four geometry points.
    #[must_use]
    pub fn new(geometry: [Point3; 4], kind: CurveKind) -> Self {
        let [p0, p1, p2, p3] = geometry;
        Self {
            x: generate_curve_coefs(p0.x, p1.x, p2.x, p3.x, kind),
            y: generate_curve_coefs(p0.y, p1.y, p2.y, p3.y, kind),
            z: generate_curve_coefs(p0.z, p1.z, p2.z, p3.z, kind),
        }
    }

    /// Point on the curve at parameter `t`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point3 {
        Point3::new(self.x.eval(t), self.y.eval(t), self.z.eval(t))
    }
}
