//! A wrapper around [`nalgebra::Matrix`] interpreting it as a bezier curve.

use nalgebra::allocator::Allocator;
use nalgebra::dimension::{Const, Dim, U1};
use nalgebra::{convert, DefaultAllocator, Matrix, OVector, Owned, RealField, Storage};
use num::integer::binomial;

/// Wrapper around [`nalgebra::Matrix`] interpreting it as a bezier curve.
///
/// The curve's control points are stored as the matrix' columns.
pub struct BezierCurve<T, R, C, S>(pub Matrix<T, R, C, S>);

/// Wrapper around [`nalgebra::OMatrix`] interpreting it as a bezier curve.
pub type OBezierCurve<T, R, C> = BezierCurve<T, R, C, Owned<T, R, C>>;

impl<T: RealField, R: Dim, C: Dim, S: Storage<T, R, C>> BezierCurve<T, R, C, S> {
    /// Get the curves degree
    ///
    /// For example a cubic curve has degree 3 and 4 control points
    pub fn degree(&self) -> usize {
        self.0.ncols() - 1
    }
}

impl<T: RealField, R: Dim, C: Dim, S: Storage<T, R, C>> BezierCurve<T, R, C, S>
where
    DefaultAllocator: Allocator<T, R, U1>,
{
    /// Get the point on the curve at position `t` by summing the bernstein basis.
    ///
    /// Computes `Σ C(n, i) (1 - t)^(n - i) t^i P_i` where `n` is the curve's degree.
    /// At `t = 0` and `t = 1` the result is exactly the first and last control point.
    /// This method assumes `t` to between 0 and 1 but doesn't check it.
    pub fn bernstein_eval(&self, t: T) -> OVector<T, R> {
        let (rows, _) = self.0.shape_generic();
        let n = self.degree();
        let t_inv = T::one() - t.clone();

        let mut point = Matrix::zeros_generic(rows, Const::<1>);
        for (i, column) in self.0.column_iter().enumerate() {
            let coeff: T = convert(binomial(n, i) as f64);
            let weight = coeff * t_inv.clone().powi((n - i) as i32) * t.clone().powi(i as i32);
            point += column * weight;
        }
        point
    }
}

impl<T: RealField, R: Dim, C: Dim, S: Storage<T, R, C>> BezierCurve<T, R, C, S>
where
    // Column arithemtic required in each step
    DefaultAllocator: Allocator<T, R, U1>,

    // Buffer to store intermediate steps in
    DefaultAllocator: Allocator<T, R, C>,
{
    /// Get the point on the curve at position `t`.
    ///
    /// This method uses de castlejau's algorithm. It yields the same points as
    /// [`bernstein_eval`] up to rounding.
    ///
    /// [`bernstein_eval`]: BezierCurve::bernstein_eval
    pub fn castlejau_eval(&self, t: T) -> OVector<T, R> {
        let t_inv = T::one() - t.clone();
        let ncols = self.0.ncols();

        let mut points = (&mut self.0.clone_owned(), &mut self.0.clone_owned());
        for step in 0..ncols {
            let (input, output) = points;
            for i in 1..(ncols - step) {
                let column = &input.column(i - 1) * t_inv.clone() + &input.column(i) * t.clone();
                output.set_column(i - 1, &column);
            }
            points = (output, input);
        }

        points.1.column(0).clone_owned()
    }
}
