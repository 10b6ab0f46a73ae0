//! Standard objective functions with known minima, used by the tests and the
//! demo driver.

use crate::error::{Error, Result};
use crate::objective::Objective;
use crate::point::Point;

/// `(1 - x)^2 + 100 (y - x^2)^2`, minimum 0 at `(1, 1)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rosenbrock;

impl Objective for Rosenbrock {
    fn dimension(&self) -> usize {
        2
    }

    fn calculate(&self, p: &Point) -> Result<f64> {
        Error::check_dimension(2, p.dimension())?;
        Ok((1.0 - p[0]).powi(2) + 100.0 * (p[1] - p[0].powi(2)).powi(2))
    }
}

/// `(x^2 + y - 11)^2 + (x + y^2 - 7)^2`, four minima of value 0, one of them
/// at `(3, 2)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Himmelblau;

impl Objective for Himmelblau {
    fn dimension(&self) -> usize {
        2
    }

    fn calculate(&self, p: &Point) -> Result<f64> {
        Error::check_dimension(2, p.dimension())?;
        Ok((p[0].powi(2) + p[1] - 11.0).powi(2) + (p[0] + p[1].powi(2) - 7.0).powi(2))
    }
}

/// `5 sin(2x) + x^2`. Global minimum near `x = -0.7`, local one near `x = 2`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SineParabola;

impl Objective for SineParabola {
    fn dimension(&self) -> usize {
        1
    }

    fn calculate(&self, p: &Point) -> Result<f64> {
        Error::check_dimension(1, p.dimension())?;
        Ok(5.0 * (2.0 * p[0]).sin() + p[0].powi(2))
    }
}

/// Sum of squares in any number of dimensions, minimum 0 at the origin.
#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    pub dimension: usize,
}

impl Objective for Sphere {
    fn dimension(&self) -> usize {
        self.dimension
    }

    fn calculate(&self, p: &Point) -> Result<f64> {
        Error::check_dimension(self.dimension, p.dimension())?;
        Ok(p.iter().map(|x| x * x).sum())
    }
}
