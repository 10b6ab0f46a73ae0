use std::cell::Cell;

use crate::error::Result;
use crate::objective::Objective;
use crate::point::Point;

/// Counts how often the wrapped function is evaluated.
pub struct WrappedFunction<'a, F: Objective + ?Sized> {
    pub num: Cell<usize>,
    pub func: &'a F,
}

impl<'a, F: Objective + ?Sized> WrappedFunction<'a, F> {
    pub fn new(func: &'a F) -> Self {
        WrappedFunction {
            num: Cell::new(0),
            func,
        }
    }

    pub fn evaluations(&self) -> usize {
        self.num.get()
    }
}

impl<'a, F: Objective + ?Sized> Objective for WrappedFunction<'a, F> {
    fn dimension(&self) -> usize {
        self.func.dimension()
    }

    fn calculate(&self, point: &Point) -> Result<f64> {
        self.num.set(self.num.get() + 1);
        self.func.calculate(point)
    }
}
