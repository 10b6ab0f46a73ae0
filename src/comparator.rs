//! Ordering of points by the value an objective function assigns them.

use std::cmp::Ordering;

use crate::error::Result;
use crate::objective::Objective;
use crate::point::Point;

/// Orders points ascending by `function(point)`.
///
/// Values are recomputed on every comparison. Callers that sort many points
/// should evaluate once per point and order the values with
/// [`ValueComparator::compare_values`], which is what `Simplex::sorted` does.
pub struct ValueComparator<'a, F: Objective + ?Sized> {
    function: &'a F,
}

impl<'a, F: Objective + ?Sized> ValueComparator<'a, F> {
    pub fn new(function: &'a F) -> Self {
        ValueComparator { function }
    }

    pub fn function(&self) -> &'a F {
        self.function
    }

    pub fn value(&self, point: &Point) -> Result<f64> {
        self.function.calculate(point)
    }

    pub fn compare(&self, x: &Point, y: &Point) -> Result<Ordering> {
        Ok(Self::compare_values(self.value(x)?, self.value(y)?))
    }

    /// Total preorder on function values: the usual order on numbers, with
    /// every NaN equal to every other NaN and greater than any number.
    pub fn compare_values(a: f64, b: f64) -> Ordering {
        match a.partial_cmp(&b) {
            Some(ordering) => ordering,
            None => a.is_nan().cmp(&b.is_nan()),
        }
    }
}
