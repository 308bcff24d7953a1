//! Wrapper for [BezierCurve] with simple interface
//!
//! The emblem only ever uses quadratic and cubic curves, so both are stored on the stack.
//! [`SimpleCurve::samples`] turns a curve into the integer polyline used for filling and stroking.

use crate::nbezier::OBezierCurve;
use crate::BezierCurve;
use nalgebra::dimension::Const;
use nalgebra::{Matrix2x3, Matrix2x4, Vector2};
use std::iter::FusedIterator;

/// Number of points a curve is sampled into unless stated otherwise.
pub const DEFAULT_PRECISION: usize = 1000;

/// Bezier Curve of degree 2 or 3 stored on the stack.
pub enum SimpleCurve {
    /// Stack allocated quadratic curve
    Quadratic(OBezierCurve<f64, Const<2>, Const<3>>),

    /// Stack allocated cubic curve
    Cubic(OBezierCurve<f64, Const<2>, Const<4>>),
}

impl SimpleCurve {
    /// Construct a curve from 3 or 4 control points.
    ///
    /// Returns `None` for any other number of points.
    pub fn from_points(points: &[Vector2<f64>]) -> Option<Self> {
        match points {
            [a, b, c] => Some(Matrix2x3::from_columns(&[*a, *b, *c]).into()),
            [a, b, c, d] => Some(Matrix2x4::from_columns(&[*a, *b, *c, *d]).into()),
            _ => None,
        }
    }

    /// Get the curves degree
    pub fn degree(&self) -> usize {
        match self {
            SimpleCurve::Quadratic(curve) => curve.degree(),
            SimpleCurve::Cubic(curve) => curve.degree(),
        }
    }

    /// Get the point on the curve at position `t` using the bernstein basis.
    pub fn evaluate(&self, t: f64) -> Vector2<f64> {
        match self {
            SimpleCurve::Quadratic(curve) => curve.bernstein_eval(t),
            SimpleCurve::Cubic(curve) => curve.bernstein_eval(t),
        }
    }

    /// Sample `count` points at uniformly spaced `t` covering `[0, 1]` inclusive.
    ///
    /// Coordinates are truncated towards zero. The returned iterator is lazy and can be
    /// cloned to restart it or reversed to walk the curve backwards.
    ///
    /// ```
    /// # use nalgebra::Vector2;
    /// # use fanglogo::SimpleCurve;
    /// let curve = SimpleCurve::from_points(&[
    ///     Vector2::new(0.0, 0.0),
    ///     Vector2::new(5.0, 10.0),
    ///     Vector2::new(10.0, 0.0),
    /// ]).unwrap();
    /// let points: Vec<_> = curve.samples(3).collect();
    /// assert_eq!(points, vec![Vector2::new(0, 0), Vector2::new(5, 5), Vector2::new(10, 0)]);
    /// ```
    pub fn samples(&self, count: usize) -> Samples<'_> {
        Samples {
            curve: self,
            count,
            front: 0,
            back: count,
        }
    }
}

impl From<OBezierCurve<f64, Const<2>, Const<3>>> for SimpleCurve {
    /// Wrap a quadratic curve into a simple one
    fn from(curve: OBezierCurve<f64, Const<2>, Const<3>>) -> Self {
        SimpleCurve::Quadratic(curve)
    }
}
impl From<OBezierCurve<f64, Const<2>, Const<4>>> for SimpleCurve {
    /// Wrap a cubic curve into a simple one
    fn from(curve: OBezierCurve<f64, Const<2>, Const<4>>) -> Self {
        SimpleCurve::Cubic(curve)
    }
}
impl From<Matrix2x3<f64>> for SimpleCurve {
    fn from(matrix: Matrix2x3<f64>) -> Self {
        BezierCurve(matrix).into()
    }
}
impl From<Matrix2x4<f64>> for SimpleCurve {
    fn from(matrix: Matrix2x4<f64>) -> Self {
        BezierCurve(matrix).into()
    }
}

/// Lazily evaluated integer points along a [`SimpleCurve`].
///
/// Created by [`SimpleCurve::samples`].
#[derive(Clone)]
pub struct Samples<'c> {
    curve: &'c SimpleCurve,
    count: usize,
    front: usize,
    back: usize,
}

impl Samples<'_> {
    fn point(&self, index: usize) -> Vector2<i32> {
        // linspace(0, 1, count): a single sample sits at t = 0
        let t = if self.count > 1 {
            index as f64 / (self.count - 1) as f64
        } else {
            0.0
        };
        self.curve.evaluate(t).map(|x| x as i32)
    }
}

impl Iterator for Samples<'_> {
    type Item = Vector2<i32>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let point = self.point(self.front);
        self.front += 1;
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.front = self.front.saturating_add(n).min(self.back);
        self.next()
    }
}

impl DoubleEndedIterator for Samples<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.point(self.back))
    }
}

impl ExactSizeIterator for Samples<'_> {}
impl FusedIterator for Samples<'_> {}
