//! The capability a minimizer needs from the function it minimizes.

use ndarray::prelude::*;

use crate::error::{Error, Result};
use crate::point::Point;

/// A scalar function of a fixed number of real variables.
///
/// `calculate` should be a pure function of its input: every minimizer in
/// this crate re-evaluates vertices freely and assumes equal inputs give
/// equal outputs.
pub trait Objective {
    /// Number of variables the function accepts. Must be at least one.
    fn dimension(&self) -> usize;

    /// Evaluates the function, failing with `Error::DimensionMismatch` when
    /// `point` has the wrong dimension.
    fn calculate(&self, point: &Point) -> Result<f64>;
}

impl<'a, T: Objective + ?Sized> Objective for &'a T {
    fn dimension(&self) -> usize {
        (**self).dimension()
    }

    fn calculate(&self, point: &Point) -> Result<f64> {
        (**self).calculate(point)
    }
}

/// Adapts a closure over an `ArrayView1<f64>` into an `Objective`.
///
/// ```
/// # extern crate ndarray;
/// # extern crate simplex_optimize;
/// # use ndarray::prelude::*;
/// # use simplex_optimize::{FnObjective, Objective, Point};
/// let paraboloid = FnObjective::new(2, |x: ArrayView1<f64>| x[0].powi(2) + x[1].powi(2));
/// assert_eq!(paraboloid.calculate(&Point::new(vec![1.0, 2.0])).unwrap(), 5.0);
/// assert!(paraboloid.calculate(&Point::new(vec![1.0])).is_err());
/// ```
pub struct FnObjective<F: Fn(ArrayView1<f64>) -> f64> {
    dimension: usize,
    func: F,
}

impl<F: Fn(ArrayView1<f64>) -> f64> FnObjective<F> {
    pub fn new(dimension: usize, func: F) -> Self {
        FnObjective { dimension, func }
    }
}

impl<F: Fn(ArrayView1<f64>) -> f64> Objective for FnObjective<F> {
    fn dimension(&self) -> usize {
        self.dimension
    }

    fn calculate(&self, point: &Point) -> Result<f64> {
        Error::check_dimension(self.dimension, point.dimension())?;
        Ok((self.func)(point.view()))
    }
}
