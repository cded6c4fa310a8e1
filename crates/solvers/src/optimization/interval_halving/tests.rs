use approx::assert_relative_eq;
use iterlab_core::{Action, Record as _, Status, Termination, from_fn};

use super::{Config, Error, Record, Rule, minimize, minimize_unobserved};

fn config(tolerance: f64, max_iters: usize) -> Config {
    Config::new(iterlab_core::Config::new(tolerance, max_iters).expect("valid config"))
}

#[test]
fn minimizes_shifted_parabola() {
    let f = from_fn(|x| (x - 2.0) * (x - 2.0));
    let solution = minimize_unobserved(&f, [0.0, 5.0], &config(1e-6, 100)).expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.approximation, 2.0, epsilon = 1e-5);

    // |b-a| = 5·2⁻ⁱ first drops below 1e-6 at i = 23; the fifth such record is i = 27.
    assert_eq!(solution.iters(), 28);
    assert!(solution.trace.ends_within_tolerance());
}

#[test]
fn first_within_stops_on_first_small_interval() {
    let base = iterlab_core::Config::new(1e-6, 100)
        .unwrap()
        .with_termination(Termination::FirstWithin)
        .unwrap();
    let f = from_fn(|x| (x - 2.0) * (x - 2.0));

    let solution = minimize_unobserved(&f, [0.0, 5.0], &Config::new(base)).unwrap();

    assert_eq!(solution.iters(), 24);
    assert_eq!(solution.status, Status::Converged);
}

#[test]
fn width_halves_every_iteration() {
    let f = from_fn(|x: f64| (x + 0.3).powi(2));
    let solution = minimize_unobserved(&f, [-2.0, 2.0], &config(1e-3, 20)).unwrap();

    for pair in solution.trace.as_slice().windows(2) {
        assert_relative_eq!(pair[1].metric(), 0.5 * pair[0].metric(), max_relative = 1e-12);
    }
}

#[test]
fn records_all_three_samples() {
    let f = from_fn(|x| x * x);
    let solution = minimize_unobserved(&f, [-1.0, 3.0], &config(1e-3, 3)).unwrap();

    let first = solution.trace.get(0).unwrap();
    assert_relative_eq!(first.fa.get(), 1.0);
    assert_relative_eq!(first.fb.get(), 9.0);
    assert_relative_eq!(first.c.get(), 1.0);
    assert_relative_eq!(first.fc.get(), 1.0);
    assert_relative_eq!(first.width.get(), 4.0);
}

#[test]
fn iteration_limit_returns_final_midpoint() {
    let f = from_fn(|x| (x - 2.0) * (x - 2.0));
    let solution = minimize_unobserved(&f, [0.0, 4.0], &config(1e-9, 2)).unwrap();

    // [0, 4] → f(0) = f(4), keep [2, 4] → f(2) < f(4), keep [2, 3].
    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters(), 2);
    assert_relative_eq!(solution.approximation, 2.5);
}

#[test]
fn quarter_points_find_asymmetric_minimum() {
    // f'(x) = 4x³ - 3 vanishes at x = ∛0.75.
    let f = from_fn(|x: f64| x.powi(4) - 3.0 * x);
    let config = config(1e-8, 200).with_rule(Rule::QuarterPoints);

    let solution = minimize_unobserved(&f, [0.0, 2.0], &config).unwrap();

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.approximation, 0.75_f64.cbrt(), epsilon = 1e-7);
}

#[test]
fn repeated_runs_are_identical() {
    let f = from_fn(|x: f64| x.cosh() - x);
    let config = config(1e-5, 100);

    let first = minimize_unobserved(&f, [-1.0, 2.0], &config).unwrap();
    let second = minimize_unobserved(&f, [-1.0, 2.0], &config).unwrap();

    assert_eq!(first, second);
}

#[test]
fn observer_can_stop_iteration() {
    let f = from_fn(|x| x * x);
    let observer = |record: &Record| (record.index == 4).then_some(Action::StopEarly);

    let solution = minimize(&f, [-3.0, 5.0], &config(1e-9, 100), observer).unwrap();

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters(), 5);
}

#[test]
fn failure_keeps_partial_trace() {
    // Iteration 0 keeps [0, 2.5]; iteration 1 samples c = 1.25.
    let f = from_fn(|x: f64| {
        if (1.2..=1.3).contains(&x) {
            f64::NAN
        } else {
            (x - 2.0) * (x - 2.0)
        }
    });

    let err = minimize_unobserved(&f, [0.0, 5.0], &config(1e-6, 100)).expect_err("should fail");

    assert!(matches!(err, Error::Evaluation { .. }));
    assert_eq!(err.trace().map(|t| t.len()), Some(1));
}
