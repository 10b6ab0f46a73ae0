//! The Nelder-Mead simplex method.
//!
//! Every iteration ranks the `n + 1` vertices of the simplex by function
//! value and tries to replace the worst one by reflecting it through the
//! centroid of the others, then by expanding or contracting that
//! reflection. When no candidate improves on the worst vertex, the whole
//! simplex shrinks halfway towards the best vertex.
//!
//! # Use case
//!
//! The Nelder-Mead algorithm does not require a gradient or a hessian.
//! As a tradeoff it typically requires a lot of function evaluations to
//! find a minimum, and it only ever finds a local one.
//!
//! # Examples
//!
//! ```
//! # extern crate ndarray;
//! # extern crate simplex_optimize;
//! # use ndarray::prelude::*;
//! # use simplex_optimize::{FnObjective, NelderMeadBuilder, Point};
//! let function = FnObjective::new(2, |x: ArrayView1<f64>| {
//!     (1.0 - x[0]).powi(2) + 100.0 * (x[1] - x[0].powi(2)).powi(2)
//! });
//! let minimizer = NelderMeadBuilder::default()
//!     .max_iterations(500usize)
//!     .accuracy(1e-6)
//!     .build()
//!     .unwrap();
//! let res = minimizer.run(&function, Some(&Point::new(vec![5.0, 5.0]))).unwrap();
//! println!("res: {}", res);
//! ```

use std::time::Instant;

use derive_builder::Builder;
use tracing::{debug, trace};

use crate::comparator::ValueComparator;
use crate::error::{Error, Result};
use crate::minimizer::{Minimizer, OptimResult, RunStatus};
use crate::objective::Objective;
use crate::point::Point;
use crate::simplex::{InitialSteps, Simplex};
use crate::utils::WrappedFunction;

pub const DEFAULT_REFLECTION: f64 = 1.0;
pub const DEFAULT_CONTRACTION: f64 = 0.5;
pub const DEFAULT_EXPANSION: f64 = 2.0;
pub const DEFAULT_MAX_ITERATIONS: usize = 100;
pub const DEFAULT_ACCURACY: f64 = 1e-3;

#[derive(Builder, Debug, Clone, PartialEq)]
#[builder(build_fn(validate = "Self::validate", error = "Error"))]
/// A minimizer for a scalar function of one or more variables using the Nelder-Mead algorithm.
pub struct NelderMead {
    /// Reflection coefficient ρ. Must be positive.
    #[builder(default = "DEFAULT_REFLECTION")]
    pub reflection: f64,

    /// Contraction coefficient σ. Must be positive.
    #[builder(default = "DEFAULT_CONTRACTION")]
    pub contraction: f64,

    /// Expansion coefficient χ. Must be positive.
    #[builder(default = "DEFAULT_EXPANSION")]
    pub expansion: f64,

    /// The maximum number of iterations. Reaching it ends the run normally.
    #[builder(default = "DEFAULT_MAX_ITERATIONS")]
    pub max_iterations: usize,

    /// The run has converged once the root mean square deviation of the
    /// vertices from their centroid is at most this, along every axis.
    #[builder(default = "DEFAULT_ACCURACY")]
    pub accuracy: f64,

    /// Offsets that build the initial simplex around the start point.
    #[builder(default)]
    pub initial_steps: InitialSteps,
}

fn check_coefficient(name: &str, value: f64) -> Result<()> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(Error::invalid(format!(
            "{} coefficient must be > 0, got {}",
            name, value
        )))
    }
}

fn check_accuracy(accuracy: f64) -> Result<()> {
    if accuracy >= 0.0 {
        Ok(())
    } else {
        Err(Error::invalid(format!(
            "accuracy must be >= 0, got {}",
            accuracy
        )))
    }
}

impl NelderMeadBuilder {
    fn validate(&self) -> Result<()> {
        if let Some(v) = self.reflection {
            check_coefficient("reflection", v)?;
        }
        if let Some(v) = self.contraction {
            check_coefficient("contraction", v)?;
        }
        if let Some(v) = self.expansion {
            check_coefficient("expansion", v)?;
        }
        if let Some(accuracy) = self.accuracy {
            check_accuracy(accuracy)?;
        }
        if let Some(ref steps) = self.initial_steps {
            steps.validate()?;
        }
        Ok(())
    }
}

impl Default for NelderMead {
    fn default() -> Self {
        NelderMead {
            reflection: DEFAULT_REFLECTION,
            contraction: DEFAULT_CONTRACTION,
            expansion: DEFAULT_EXPANSION,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            accuracy: DEFAULT_ACCURACY,
            initial_steps: InitialSteps::default(),
        }
    }
}

/// What an [`Observer`] sees of a run: the ranked simplex at the start of an
/// iteration, before anything in it is replaced.
#[derive(Debug)]
pub struct IterationState<'a> {
    /// One-based number of the iteration about to run.
    pub iteration: usize,
    /// The simplex sorted ascending by function value.
    pub simplex: &'a Simplex,
    /// Lowest valued vertex, `simplex[0]`.
    pub best: &'a Point,
    /// Function value at `best`.
    pub best_value: f64,
    /// Second highest valued vertex, `simplex[n - 1]`. Coincides with
    /// `best` in one dimension.
    pub good: &'a Point,
    /// Function value at `good`.
    pub good_value: f64,
    /// Highest valued vertex, `simplex[n]`, the one this iteration tries
    /// to replace.
    pub worst: &'a Point,
    /// Function value at `worst`; a contraction must beat it to be kept.
    pub worst_value: f64,
}

/// The change an iteration made to the simplex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Expand,
    Reflect,
    Contract,
    Shrink,
}

/// Read-only hook called once per iteration. It cannot influence the run.
pub trait Observer {
    fn observe(&mut self, state: &IterationState);
}

impl<T> Observer for T
where
    T: FnMut(&IterationState),
{
    fn observe(&mut self, state: &IterationState) {
        self(state)
    }
}

impl NelderMead {
    /// Validates the three coefficients and keeps every other setting at
    /// its default.
    pub fn new(reflection: f64, contraction: f64, expansion: f64) -> Result<Self> {
        NelderMeadBuilder::default()
            .reflection(reflection)
            .contraction(contraction)
            .expansion(expansion)
            .build()
    }

    /// Checks the settings the builder checks. Fields are public, so a run
    /// re-checks them before it starts.
    pub fn validate(&self) -> Result<()> {
        check_coefficient("reflection", self.reflection)?;
        check_coefficient("contraction", self.contraction)?;
        check_coefficient("expansion", self.expansion)?;
        check_accuracy(self.accuracy)?;
        self.initial_steps.validate()
    }

    /// Searches for a local minimum of `function`, starting from
    /// `initial_point` or from the origin, and returns the best vertex found.
    pub fn run<F>(&self, function: &F, initial_point: Option<&Point>) -> Result<Point>
    where
        F: Objective + ?Sized,
    {
        self.minimize(function, initial_point).map(|res| res.minimum)
    }

    /// Same as [`NelderMead::run`], reporting every iteration to `observer`.
    pub fn run_observed<F>(
        &self,
        function: &F,
        initial_point: Option<&Point>,
        observer: &mut dyn Observer,
    ) -> Result<Point>
    where
        F: Objective + ?Sized,
    {
        self.minimize_observed(function, initial_point, observer)
            .map(|res| res.minimum)
    }

    /// Same as [`Minimizer::minimize`], reporting every iteration to `observer`.
    pub fn minimize_observed<F>(
        &self,
        function: &F,
        initial_point: Option<&Point>,
        observer: &mut dyn Observer,
    ) -> Result<OptimResult>
    where
        F: Objective + ?Sized,
    {
        self.minimize_simplex(function, initial_point, Some(observer))
    }

    fn minimize_simplex<F>(
        &self,
        function: &F,
        initial_point: Option<&Point>,
        mut observer: Option<&mut dyn Observer>,
    ) -> Result<OptimResult>
    where
        F: Objective + ?Sized,
    {
        let started = Instant::now();
        self.validate()?;
        let n = function.dimension();
        if n == 0 {
            return Err(Error::invalid("function dimension must be at least 1"));
        }
        if let Some(p) = initial_point {
            Error::check_dimension(n, p.dimension())?;
        }

        let func = WrappedFunction::new(function);
        let comparator = ValueComparator::new(&func);
        let mut simplex = Simplex::new(n, initial_point, &self.initial_steps)?;

        debug!(
            dimension = n,
            max_iterations = self.max_iterations,
            accuracy = self.accuracy,
            "starting Nelder-Mead"
        );

        let mut iterations = 0;
        while iterations < self.max_iterations && !self.accuracy_reached(&simplex) {
            iterations += 1;

            simplex = simplex.sorted(&comparator)?;
            let best_value = comparator.value(&simplex[0])?;
            let good_value = comparator.value(&simplex[n - 1])?;
            let worst_value = comparator.value(&simplex[n])?;

            if let Some(observer) = observer.as_mut() {
                observer.observe(&IterationState {
                    iteration: iterations,
                    simplex: &simplex,
                    best: &simplex[0],
                    best_value,
                    good: &simplex[n - 1],
                    good_value,
                    worst: &simplex[n],
                    worst_value,
                });
            }

            let step = self.transform(
                &mut simplex,
                &comparator,
                best_value,
                good_value,
                worst_value,
            )?;
            trace!(iteration = iterations, ?step, "transformed simplex");
        }

        let status = if self.accuracy_reached(&simplex) {
            RunStatus::Converged
        } else {
            RunStatus::IterationLimitReached
        };

        let minimum = simplex.sorted(&comparator)?.into_vertices().swap_remove(0);
        let minimum_value = comparator.value(&minimum)?;

        debug!(
            iterations,
            f_evals = func.evaluations(),
            value = minimum_value,
            ?status,
            "finished Nelder-Mead"
        );

        Ok(OptimResult {
            runtime: started.elapsed(),
            f_evals: func.evaluations(),
            iterations,
            minimum,
            minimum_value,
            status,
        })
    }

    /// Replaces the worst vertex of a simplex sorted ascending, or shrinks
    /// the whole simplex towards its best vertex. The values are those of
    /// the best, good and worst vertices at the time of sorting.
    fn transform<F>(
        &self,
        simplex: &mut Simplex,
        comparator: &ValueComparator<F>,
        best_value: f64,
        good_value: f64,
        worst_value: f64,
    ) -> Result<Step>
    where
        F: Objective + ?Sized,
    {
        let n = simplex.dimension();

        // the worst vertex is the last slot and never joins the centroid
        let centroid = simplex.centroid(Some(n));
        let reflected = self.reflect(&centroid, &simplex[n]);
        let reflected_value = comparator.value(&reflected)?;

        if reflected_value < best_value {
            let expanded = self.expand(&centroid, &reflected);
            if comparator.value(&expanded)? < reflected_value {
                simplex.replace(n, expanded)?;
                return Ok(Step::Expand);
            }
            simplex.replace(n, reflected)?;
            return Ok(Step::Reflect);
        }

        if reflected_value < good_value {
            simplex.replace(n, reflected)?;
            return Ok(Step::Reflect);
        }

        // Contract towards the reflection if it beat the worst vertex,
        // otherwise towards the worst vertex itself. Either way the
        // contraction has to beat the worst value ranked above.
        let contracted = if reflected_value < worst_value {
            let contracted = self.contract(&centroid, &reflected);
            simplex.replace(n, reflected)?;
            contracted
        } else {
            self.contract(&centroid, &simplex[n])
        };

        if comparator.value(&contracted)? < worst_value {
            simplex.replace(n, contracted)?;
            Ok(Step::Contract)
        } else {
            *simplex = simplex.compressed(0)?;
            Ok(Step::Shrink)
        }
    }

    #[inline]
    fn reflect(&self, centroid: &Point, worst: &Point) -> Point {
        &(centroid * (1.0 + self.reflection)) - &(worst * self.reflection)
    }

    #[inline]
    fn expand(&self, centroid: &Point, reflected: &Point) -> Point {
        &(centroid * (1.0 - self.expansion)) + &(reflected * self.expansion)
    }

    #[inline]
    fn contract(&self, centroid: &Point, base: &Point) -> Point {
        &(centroid * (1.0 - self.contraction)) + &(base * self.contraction)
    }

    /// True once every coordinate's root mean square deviation from the
    /// centroid is within `accuracy`.
    #[inline]
    fn accuracy_reached(&self, simplex: &Simplex) -> bool {
        simplex
            .dispersion()
            .iter()
            .all(|d| d.abs().sqrt() <= self.accuracy)
    }
}

impl Minimizer for NelderMead {
    fn minimize<F>(&self, function: &F, initial_point: Option<&Point>) -> Result<OptimResult>
    where
        F: Objective + ?Sized,
    {
        self.minimize_simplex(function, initial_point, None)
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::objective::FnObjective;
    use crate::test_functions::{Himmelblau, Rosenbrock, SineParabola, Sphere};
    use float_cmp::ApproxEq;
    use ndarray::prelude::*;

    fn p(coords: &[f64]) -> Point {
        Point::new(coords.to_vec())
    }

    fn value_at<F: Objective>(f: &F, x: &Point) -> f64 {
        f.calculate(x).unwrap()
    }

    #[test]
    fn defaults() {
        let nm = NelderMeadBuilder::default().build().unwrap();
        assert_eq!(nm, NelderMead::default());
        assert_eq!(nm.reflection, 1.0);
        assert_eq!(nm.contraction, 0.5);
        assert_eq!(nm.expansion, 2.0);
        assert_eq!(nm.max_iterations, 100);
        assert_eq!(nm.accuracy, 0.001);
        assert_eq!(NelderMead::new(1.0, 0.5, 2.0), Ok(nm));
    }

    #[test]
    fn incorrect_coefficients() {
        let invalid = |res: Result<NelderMead>| matches!(res, Err(Error::InvalidArgument(_)));
        assert!(invalid(NelderMead::new(-5.0, 0.5, 2.0)));
        assert!(invalid(NelderMead::new(1.0, 0.0, 2.0)));
        assert!(invalid(NelderMead::new(1.0, 0.5, -2.0)));
        assert!(invalid(NelderMead::new(f64::NAN, 0.5, 2.0)));
        assert!(invalid(NelderMeadBuilder::default().accuracy(-1.0).build()));
        assert!(invalid(
            NelderMeadBuilder::default()
                .initial_steps(InitialSteps { large: 0.1, small: 0.1 })
                .build()
        ));
    }

    #[test]
    fn incorrect_run_parameters() {
        let nm = NelderMead::default();
        assert_eq!(
            nm.run(&Rosenbrock, Some(&p(&[1.0, 2.0, 3.0]))),
            Err(Error::DimensionMismatch { expected: 2, found: 3 })
        );

        let empty = FnObjective::new(0, |_: ArrayView1<f64>| 0.0);
        assert!(matches!(nm.run(&empty, None), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn rosenbrock() {
        let nm = NelderMead::default();
        let expected = value_at(&Rosenbrock, &p(&[1.0, 1.0]));

        let res = nm.run(&Rosenbrock, Some(&p(&[5.0, 5.0]))).unwrap();
        println!("res: {}", res);
        assert!(value_at(&Rosenbrock, &res) - expected < 0.001);

        let res = nm.run(&Rosenbrock, None).unwrap();
        assert!(value_at(&Rosenbrock, &res) - expected < 0.001);
    }

    #[test]
    fn himmelblau() {
        let nm = NelderMead::default();
        let expected = value_at(&Himmelblau, &p(&[3.0, 2.0]));

        for start in &[Some(p(&[-3.0, -3.0])), Some(p(&[-5.0, 10.0])), None] {
            let res = nm.run(&Himmelblau, start.as_ref()).unwrap();
            println!("res: {}", res);
            assert!(value_at(&Himmelblau, &res) - expected < 0.001);
        }
    }

    #[test]
    fn one_dimension() {
        let nm = NelderMead::default();
        let res = nm.minimize(&SineParabola, None).unwrap();
        assert_eq!(res.status, RunStatus::Converged);
        assert!(res.minimum[0].approx_eq(&-0.713, 1e-2, 10));
        assert!(res.minimum_value < -4.438);

        // a start beyond the local minimum stays there
        let res = nm.run(&SineParabola, Some(&p(&[3.0]))).unwrap();
        assert!(res[0].approx_eq(&2.135, 1e-2, 10));
    }

    #[test]
    fn sphere_report() {
        let nm = NelderMead::default();
        let sphere = Sphere { dimension: 3 };
        let res = nm.minimize(&sphere, Some(&p(&[1.0, 2.0, 3.0]))).unwrap();

        assert_eq!(res.status, RunStatus::Converged);
        assert!(res.iterations > 0 && res.iterations <= 100);
        assert!(res.f_evals > 3 * res.iterations);
        assert!(res.minimum_value < 1e-4);
        assert_eq!(res.minimum_value, value_at(&sphere, &res.minimum));
        for x in res.minimum.iter() {
            assert!(x.abs() < 1e-2);
        }
    }

    #[test]
    fn closure_objective() {
        let function = FnObjective::new(2, |x: ArrayView1<f64>| {
            (x[0] - 0.2).powi(2) + (x[1] + 1.5).powi(2)
        });
        let nm = NelderMeadBuilder::default()
            .max_iterations(500usize)
            .accuracy(1e-7)
            .build()
            .unwrap();
        let res = nm.run(&function, Some(&p(&[3.0, -8.3]))).unwrap();
        assert!(res[0].approx_eq(&0.2, 1e-4, 10));
        assert!(res[1].approx_eq(&-1.5, 1e-4, 10));
    }

    #[test]
    fn iteration_cap() {
        let nm = NelderMeadBuilder::default()
            .max_iterations(5usize)
            .accuracy(0.0)
            .build()
            .unwrap();
        let mut seen = Vec::new();
        let mut observer = |state: &IterationState<'_>| seen.push(state.iteration);
        let res = nm
            .minimize_observed(&Rosenbrock, Some(&p(&[5.0, 5.0])), &mut observer)
            .unwrap();

        assert_eq!(seen, vec![1, 2, 3, 4, 5]);
        assert_eq!(res.iterations, 5);
        assert_eq!(res.status, RunStatus::IterationLimitReached);
    }

    #[test]
    fn no_iterations() {
        let nm = NelderMeadBuilder::default()
            .max_iterations(0usize)
            .build()
            .unwrap();
        let mut calls = 0;
        let mut observer = |_: &IterationState<'_>| calls += 1;
        let res = nm
            .minimize_observed(&Rosenbrock, Some(&p(&[1.0, 1.0])), &mut observer)
            .unwrap();

        assert_eq!(calls, 0);
        assert_eq!(res.iterations, 0);
        // the start point is already the best vertex of the initial simplex
        assert_eq!(res.minimum, p(&[1.0, 1.0]));
    }

    #[test]
    fn converged_before_first_iteration() {
        let nm = NelderMeadBuilder::default().accuracy(10.0).build().unwrap();
        let res = nm.minimize(&Rosenbrock, Some(&p(&[5.0, 5.0]))).unwrap();
        assert_eq!(res.iterations, 0);
        assert_eq!(res.status, RunStatus::Converged);
    }

    #[test]
    fn observer_sees_ranked_simplex() {
        let nm = NelderMead::default();
        let mut iterations = 0;
        let mut observer = |state: &IterationState<'_>| {
            iterations += 1;
            assert_eq!(state.simplex.len(), 3);
            assert!(state.best_value <= state.good_value);
            assert!(state.good_value <= state.worst_value);
            assert_eq!(state.best, &state.simplex[0]);
            assert_eq!(state.good, &state.simplex[1]);
            assert_eq!(state.worst, &state.simplex[2]);
        };
        nm.run_observed(&Himmelblau, Some(&p(&[-3.0, -3.0])), &mut observer)
            .unwrap();
        assert!(iterations > 0 && iterations <= 100);
    }

    #[test]
    fn repeated_runs_agree() {
        let nm = NelderMead::default();
        let start = p(&[5.0, 5.0]);
        let first = nm.run(&Rosenbrock, Some(&start)).unwrap();
        let second = nm.run(&Rosenbrock, Some(&start)).unwrap();
        assert_eq!(first, second);
        assert_eq!(start, p(&[5.0, 5.0]));
    }

    #[test]
    fn transformations() {
        let nm = NelderMead::default();
        let centroid = p(&[1.0, 1.0]);
        let worst = p(&[3.0, 0.0]);

        let reflected = nm.reflect(&centroid, &worst);
        assert_eq!(reflected, p(&[-1.0, 2.0]));
        assert_eq!(nm.expand(&centroid, &reflected), p(&[-3.0, 3.0]));
        assert_eq!(nm.contract(&centroid, &worst), p(&[2.0, 0.5]));
    }

    #[test]
    fn settings_checked_at_run() {
        let nm = NelderMead {
            reflection: -1.0,
            contraction: 0.0,
            expansion: -2.0,
            accuracy: -1.0,
            ..NelderMead::default()
        };
        assert!(matches!(nm.validate(), Err(Error::InvalidArgument(_))));
        assert!(matches!(
            nm.run(&Rosenbrock, Some(&p(&[5.0, 5.0]))),
            Err(Error::InvalidArgument(_))
        ));

        let nm = NelderMead {
            initial_steps: InitialSteps { large: 0.2, small: 0.2 },
            ..NelderMead::default()
        };
        assert!(matches!(
            nm.minimize(&Rosenbrock, None),
            Err(Error::InvalidArgument(_))
        ));
        assert_eq!(NelderMead::default().validate(), Ok(()));
    }

    fn paraboloid(x: ArrayView1<f64>) -> f64 {
        x[0] * x[0] + x[1] * x[1]
    }

    // zero on the circle of radius 2
    fn ring(x: ArrayView1<f64>) -> f64 {
        (x[0] * x[0] + x[1] * x[1] - 4.0).powi(2)
    }

    /// Runs a single step of the default method on a simplex that is
    /// already ranked.
    fn step_once(function: fn(ArrayView1<f64>) -> f64, vertices: &[[f64; 2]; 3]) -> (Step, Simplex) {
        let function = FnObjective::new(2, function);
        let comparator = ValueComparator::new(&function);
        let mut simplex = Simplex::from_vertices(vertices.iter().map(|v| p(v)).collect()).unwrap();
        let values: Vec<f64> = simplex.iter().map(|v| comparator.value(v).unwrap()).collect();
        assert!(values[0] <= values[1] && values[1] <= values[2]);

        let step = NelderMead::default()
            .transform(&mut simplex, &comparator, values[0], values[1], values[2])
            .unwrap();
        (step, simplex)
    }

    #[test]
    fn expansion_replaces_worst() {
        // reflection (-1.5, -1) beats the best, expansion (-1.25, -0.5) beats it again
        let (step, simplex) = step_once(paraboloid, &[[-2.0, -1.0], [-1.5, -2.0], [-2.0, -2.0]]);
        assert_eq!(step, Step::Expand);
        assert_eq!(simplex[2], p(&[-1.25, -0.5]));
        assert_eq!(simplex[0], p(&[-2.0, -1.0]));
        assert_eq!(simplex[1], p(&[-1.5, -2.0]));
    }

    #[test]
    fn failed_expansion_keeps_reflection() {
        // expansion (-1.25, -2.5) is worse than the reflection (-1.5, -1)
        let (step, simplex) = step_once(paraboloid, &[[-2.0, -1.0], [-1.5, 2.0], [-2.0, 2.0]]);
        assert_eq!(step, Step::Reflect);
        assert_eq!(simplex[2], p(&[-1.5, -1.0]));
    }

    #[test]
    fn reflection_tying_best_is_accepted() {
        // f(2, 0.5) == f(-2, -0.5) == 4.25
        let (step, simplex) = step_once(paraboloid, &[[-2.0, -0.5], [2.0, -1.0], [-2.0, -2.0]]);
        assert_eq!(step, Step::Reflect);
        assert_eq!(simplex[2], p(&[2.0, 0.5]));
    }

    #[test]
    fn contraction_towards_reflection() {
        // f(good) < f(r) = 9 < f(worst) = 12.25; the contraction halfway to
        // r is worse than r but still beats the recorded worst value
        let (step, simplex) = step_once(ring, &[[-2.0, -1.5], [0.5, 1.0], [-0.5, -0.5]]);
        assert_eq!(step, Step::Contract);
        assert_eq!(simplex[2], p(&[-0.875, -0.125]));
        assert_eq!(simplex[0], p(&[-2.0, -1.5]));
        assert_eq!(simplex[1], p(&[0.5, 1.0]));
    }

    #[test]
    fn shrink_after_installing_reflection() {
        // r = (-1.5, -0.5) ties the good value and is installed; its
        // contraction does not beat the worst value, so the simplex shrinks
        let (step, simplex) = step_once(ring, &[[-2.0, -1.0], [-0.5, 1.5], [-1.0, 1.0]]);
        assert_eq!(step, Step::Shrink);
        assert_eq!(simplex.len(), 3);
        assert_eq!(simplex[0], p(&[-2.0, -1.0]));
        assert_eq!(simplex[1], p(&[-1.25, 0.25]));
        assert_eq!(simplex[2], p(&[-1.75, -0.75]));
    }

    #[test]
    fn contraction_towards_worst() {
        // the reflection (-6, -0.5) is worse than everything
        let (step, simplex) = step_once(paraboloid, &[[-2.0, -1.0], [-2.0, -1.5], [2.0, -2.0]]);
        assert_eq!(step, Step::Contract);
        assert_eq!(simplex[2], p(&[0.0, -1.625]));
    }

    #[test]
    fn shrink_towards_best() {
        let (step, simplex) = step_once(ring, &[[-2.0, -1.5], [-1.0, -0.5], [0.0, 1.0]]);
        assert_eq!(step, Step::Shrink);
        assert_eq!(simplex[0], p(&[-2.0, -1.5]));
        assert_eq!(simplex[1], p(&[-1.5, -1.0]));
        assert_eq!(simplex[2], p(&[-1.0, -0.25]));
    }
}
