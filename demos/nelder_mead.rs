extern crate simplex_optimize;
extern crate tracing_subscriber;

use simplex_optimize::test_functions::{Himmelblau, Rosenbrock};
use simplex_optimize::{IterationState, NelderMead, Objective, Point};
use tracing_subscriber::EnvFilter;

fn print_iteration(state: &IterationState<'_>) {
    println!("Iteration {}", state.iteration);
    println!("  best:  {} -> {}", state.best, state.best_value);
    println!("  good:  {} -> {}", state.good, state.good_value);
    println!("  worst: {} -> {}", state.worst, state.worst_value);
}

fn report<F: Objective>(name: &str, nm: &NelderMead, f: &F, start: Point) -> simplex_optimize::Result<()> {
    println!("{}\n", name);
    let res = nm.minimize_observed(f, Some(&start), &mut print_iteration)?;
    println!(
        "\nminimum {} -> {} ({:?} after {} iterations, {} evaluations)\n",
        res.minimum, res.minimum_value, res.status, res.iterations, res.f_evals
    );
    Ok(())
}

fn main() -> simplex_optimize::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let nm = NelderMead::default();
    report("Rosenbrock", &nm, &Rosenbrock, Point::new(vec![5.0, 5.0]))?;
    report("Himmelblau", &nm, &Himmelblau, Point::new(vec![-3.0, -3.0]))?;
    Ok(())
}
