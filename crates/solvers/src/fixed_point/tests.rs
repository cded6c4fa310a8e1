use approx::assert_relative_eq;
use iterlab_core::{Action, Config as BaseConfig, Record as _, Status, Termination, Value, from_fn};

use super::{Config, ConfigError, Error, Record, iterate, iterate_unobserved};

fn config(tolerance: f64, max_iters: usize) -> Config {
    Config::from(BaseConfig::new(tolerance, max_iters).expect("valid config"))
}

#[test]
fn converges_to_root_of_quadratic() {
    let f = from_fn(|x: f64| x * x - 4.0);
    let solution = iterate_unobserved(&f, 2.5, &config(1e-4, 100)).expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.approximation, 2.0, epsilon = 1e-3);
    assert_eq!(solution.iteration_function, "x - 0.1*(f(x))");
    assert!(solution.trace.ends_within_tolerance());
}

#[test]
fn first_iterate_is_literal_and_later_ones_are_derived() {
    let f = from_fn(|x: f64| x * x - 4.0);
    let solution = iterate_unobserved(&f, 2.5, &config(1e-4, 3)).unwrap();
    let records = solution.trace.as_slice();

    assert_eq!(records[0].pi, Value::Literal(2.5));
    assert_relative_eq!(records[0].gpi.get(), 2.275);
    assert!(records[1].pi.annotation().is_some());

    for pair in records.windows(2) {
        assert_eq!(pair[1].pi.get(), pair[0].gpi.get());
    }
}

#[test]
fn diff_is_exact_step_size() {
    let f = from_fn(|x: f64| x.cos() - x);
    let solution = iterate_unobserved(&f, 0.0, &config(1e-8, 50)).unwrap();

    for record in &solution.trace {
        assert_eq!(record.metric(), (record.gpi.get() - record.pi.get()).abs());
    }
}

#[test]
fn divergent_map_reaches_iteration_limit() {
    // g'(x) = 1 - 0.1·f'(x) = 1.5 everywhere, so the iterates run away.
    let f = from_fn(|x: f64| -5.0 * x + 1.0);
    let solution = iterate_unobserved(&f, 1.0, &config(1e-6, 20)).unwrap();

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters(), 20);
    assert!(solution.trace.iter().all(|r| !r.within_tolerance));
}

#[test]
fn first_within_stops_on_first_small_step() {
    let base = BaseConfig::new(1e-4, 100)
        .unwrap()
        .with_termination(Termination::FirstWithin)
        .unwrap();
    let f = from_fn(|x: f64| x * x - 4.0);
    let solution = iterate_unobserved(&f, 2.5, &Config::from(base)).unwrap();

    let within = solution.trace.iter().filter(|r| r.within_tolerance).count();
    assert_eq!(within, 1);
    assert_eq!(solution.approximation, solution.trace.last().unwrap().pi.get());
}

#[test]
fn custom_damping_changes_map() {
    let base = BaseConfig::new(1e-10, 100).unwrap();
    let f = from_fn(|x: f64| x * x - 4.0);
    let solution = iterate_unobserved(&f, 2.5, &Config::new(base, 0.25).unwrap()).unwrap();

    // g'(2) = 1 - 0.25·4 = 0, so convergence is quadratic.
    assert_eq!(solution.status, Status::Converged);
    assert!(solution.iters() < 15);
    assert_eq!(solution.iteration_function, "x - 0.25*(f(x))");
}

#[test]
fn rejects_invalid_damping() {
    assert_eq!(
        Config::new(BaseConfig::default(), 0.0),
        Err(ConfigError::Damping(0.0))
    );
    assert!(matches!(
        Config::new(BaseConfig::default(), -0.5),
        Err(ConfigError::Damping(d)) if d == -0.5
    ));
    assert!(Config::new(BaseConfig::default(), f64::NAN).is_err());
}

#[test]
fn rejects_non_finite_initial_guess() {
    let f = from_fn(|x: f64| x);
    let err = iterate_unobserved(&f, f64::INFINITY, &Config::default()).unwrap_err();
    assert!(matches!(err, Error::NonFiniteBound { .. }));
}

#[test]
fn observer_can_stop_early() {
    let observer = |record: &Record| (record.index == 3).then_some(Action::StopEarly);
    let f = from_fn(|x: f64| x * x - 4.0);

    let solution = iterate(&f, 2.5, &Config::default(), observer).unwrap();

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters(), 4);
    assert_eq!(solution.approximation, solution.trace.last().unwrap().gpi.get());
}

#[test]
fn overflow_keeps_partial_trace() {
    let f = from_fn(|x: f64| -x * x * x);
    let err = iterate_unobserved(&f, 1e60, &Config::default()).unwrap_err();

    assert!(matches!(err, Error::Evaluation { .. }));
    assert!(err.trace().is_some());
}

#[test]
fn repeated_runs_are_identical() {
    let f = from_fn(|x: f64| x * x - 4.0);
    let first = iterate_unobserved(&f, 2.5, &Config::default()).unwrap();
    let second = iterate_unobserved(&f, 2.5, &Config::default()).unwrap();

    assert_eq!(first, second);
}
