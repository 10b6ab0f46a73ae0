//! Derivative-free minimization of scalar functions of several real
//! variables with the Nelder-Mead simplex method.
//!
//! The pieces, leaf first:
//!
//! * [`Point`]: fixed-dimension vector arithmetic.
//! * [`Objective`]: the function being minimized.
//! * [`ValueComparator`]: orders points by function value.
//! * [`Simplex`]: the `dimension + 1` vertices a run works on.
//! * [`NelderMead`]: the minimizer itself.
//!
//! ```
//! # extern crate simplex_optimize;
//! use simplex_optimize::test_functions::Himmelblau;
//! use simplex_optimize::{NelderMead, Objective, Point};
//!
//! let minimizer = NelderMead::default();
//! let res = minimizer.run(&Himmelblau, Some(&Point::new(vec![-3.0, -3.0]))).unwrap();
//! assert!(Himmelblau.calculate(&res).unwrap() < 1e-3);
//! ```

extern crate derive_builder;
extern crate ndarray;
extern crate thiserror;
extern crate tracing;

#[cfg(test)]
extern crate float_cmp;
#[cfg(test)]
extern crate proptest;

pub mod comparator;
pub mod error;
pub mod minimizer;
pub mod nelder_mead;
pub mod objective;
pub mod point;
pub mod simplex;
pub mod test_functions;
mod utils;

pub use crate::comparator::ValueComparator;
pub use crate::error::{Error, Result};
pub use crate::minimizer::{Minimizer, OptimResult, RunStatus};
pub use crate::nelder_mead::{IterationState, NelderMead, NelderMeadBuilder, Observer};
pub use crate::objective::{FnObjective, Objective};
pub use crate::point::Point;
pub use crate::simplex::{InitialSteps, Simplex};
