//! Parametric curve evaluation.
//!
//! A [`Curve`] owns an ordered sequence of 2D control points and one of three
//! evaluation strategies ([`CurveKind`]). Sampling produces a lazy iterator of
//! points with the parameter swept linearly across the family's domain,
//! inclusive of both ends:
//!
//! | Family | Domain | Basis |
//! |--------|--------|-------|
//! | Bézier | `[0, 1]` | Bernstein, degree `n-1` |
//! | Lagrange | `[0, n-1]` | Lagrange over integer abscissas |
//! | B-spline | `[0, n]` | Cox–de Boor, uniform knots, degree 2 |
//!
//! The strategy is a closed enum picked once at construction; every family
//! shares the same evaluation skeleton (build the basis-weight row for `t`,
//! combine with the control points).
//!
//! # Example
//!
//! ```
//! use sliver::curve::{Curve, CurveKind};
//! use nalgebra::Point2;
//!
//! let curve = Curve::new(
//!     CurveKind::Bezier,
//!     vec![
//!         Point2::new(0.0, 0.0),
//!         Point2::new(1.0, 2.0),
//!         Point2::new(2.0, 0.0),
//!     ],
//! )
//! .unwrap();
//!
//! let points: Vec<_> = curve.sample(3).unwrap().collect();
//! assert_eq!(points[1], Point2::new(1.0, 1.0));
//! ```

mod basis;

pub use basis::BSPLINE_DEGREE;

use nalgebra::{Point2, Vector2};

use crate::error::{GeomError, Result};

/// The curve families a [`Curve`] can evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveKind {
    /// Bézier curve of degree `n-1` (Bernstein basis).
    Bezier,
    /// Lagrange interpolation through all control points.
    Lagrange,
    /// Uniform quadratic B-spline (Cox–de Boor basis).
    BSpline,
}

/// A parametric curve over an owned control-point sequence.
///
/// The control points are read-only input: sampling never mutates them, and
/// independent curves share no state, so they may be evaluated from multiple
/// threads freely.
#[derive(Debug, Clone)]
pub struct Curve {
    kind: CurveKind,
    control_points: Vec<Point2<f64>>,
}

impl Curve {
    /// Create a curve from a strategy and at least two control points.
    pub fn new(kind: CurveKind, control_points: Vec<Point2<f64>>) -> Result<Self> {
        if control_points.len() < 2 {
            return Err(GeomError::invalid_param(
                "control_points",
                control_points.len(),
                "a curve needs at least two control points",
            ));
        }
        Ok(Self {
            kind,
            control_points,
        })
    }

    /// The evaluation strategy.
    pub fn kind(&self) -> CurveKind {
        self.kind
    }

    /// The control points.
    pub fn control_points(&self) -> &[Point2<f64>] {
        &self.control_points
    }

    /// Upper end of the parameter domain (the lower end is always 0).
    pub fn domain_end(&self) -> f64 {
        let n = self.control_points.len();
        match self.kind {
            CurveKind::Bezier => 1.0,
            CurveKind::Lagrange => (n - 1) as f64,
            CurveKind::BSpline => n as f64,
        }
    }

    /// Evaluate the curve at parameter `t`.
    pub fn point_at(&self, t: f64) -> Point2<f64> {
        let weights = match self.kind {
            CurveKind::Bezier => basis::bernstein(self.control_points.len(), t),
            CurveKind::Lagrange => basis::lagrange(self.control_points.len(), t),
            CurveKind::BSpline => basis::bspline(self.control_points.len(), t),
        };

        let mut acc = Vector2::zeros();
        for (weight, point) in weights.iter().zip(&self.control_points) {
            acc += *weight * point.coords;
        }
        Point2::from(acc)
    }

    /// Sample `count` points with `t` swept linearly across the domain,
    /// both ends inclusive.
    ///
    /// The returned iterator is lazy: each point is evaluated on demand, and
    /// the curve can be re-sampled any number of times. `count` must be at
    /// least 2 so both domain ends are hit.
    pub fn sample(&self, count: usize) -> Result<CurvePoints<'_>> {
        if count < 2 {
            return Err(GeomError::invalid_param(
                "count",
                count,
                "sampling needs at least two points",
            ));
        }
        Ok(CurvePoints {
            curve: self,
            count,
            next: 0,
        })
    }
}

/// Lazy iterator over evenly-spaced curve samples.
///
/// Created by [`Curve::sample`]. Yields exactly the requested number of
/// points.
#[derive(Debug, Clone)]
pub struct CurvePoints<'a> {
    curve: &'a Curve,
    count: usize,
    next: usize,
}

impl Iterator for CurvePoints<'_> {
    type Item = Point2<f64>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.count {
            return None;
        }
        let t = self.next as f64 / (self.count - 1) as f64 * self.curve.domain_end();
        self.next += 1;
        Some(self.curve.point_at(t))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CurvePoints<'_> {}
