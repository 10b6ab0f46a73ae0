//! This module provides the base framework for the minimizers in this crate: the
//! base trait and the return type.
use std::time::Duration;

use crate::error::Result;
use crate::objective::Objective;
use crate::point::Point;

/// How a run ended. Both are normal terminations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// The accuracy criterion was met.
    Converged,
    /// The iteration cap was reached first.
    IterationLimitReached,
}

/// A minimization result, storing various details of the run and the final result.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimResult {
    /// The runtime of the minimization according to the system clock.
    pub runtime: Duration,
    /// The number of function evaluations performed.
    pub f_evals: usize,
    /// The number of iterations run.
    pub iterations: usize,
    /// The final parameter values.
    pub minimum: Point,
    /// The function value at the found minimum.
    pub minimum_value: f64,
    pub status: RunStatus,
}

/// A general minimizer trait.
pub trait Minimizer {
    /// Minimizes the value returned by `function` by exploring the parameter space,
    /// starting from `initial_point` or from an implementation-chosen default.
    fn minimize<F>(&self, function: &F, initial_point: Option<&Point>) -> Result<OptimResult>
    where
        F: Objective + ?Sized;
}
