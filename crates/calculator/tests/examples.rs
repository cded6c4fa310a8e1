//! End-to-end runs from function text to report and export.

use approx::assert_relative_eq;
use iterlab::{Error, Method, Outcome, Run, Session, calculate};
use iterlab_core::{Config, Record, Status};
use iterlab_export::Mode;
use iterlab_expr::Expression;
use iterlab_solvers::equation::bisection;

fn session(function: &str, method: Method, a: f64, b: f64) -> Session {
    Session {
        function: function.to_owned(),
        method,
        a,
        b,
        tolerance: 1e-4,
        ..Session::default()
    }
}

#[test]
fn bisection_finds_root_of_quadratic() {
    let report = calculate(&session("x^2 - 4", Method::RootFinding, 1.0, 3.0)).unwrap();

    assert_eq!(report.method, Method::RootFinding);
    assert_eq!(report.status, Status::Converged);
    assert!(matches!(report.outcome, Outcome::Root { .. }));
    assert_relative_eq!(report.outcome.value(), 2.0, epsilon = 1e-4);
    assert_eq!(report.derivative.as_deref(), Some("2 * x"));

    let Run::Bisection(trace) = &report.run else {
        panic!("expected a bisection trace");
    };
    assert!(trace.ends_within_tolerance());
    for (i, record) in trace.iter().enumerate() {
        assert_eq!(record.index(), i);
    }
}

#[test]
fn bisection_runs_out_of_iterations_at_tight_tolerance() {
    let session = Session {
        tolerance: 1e-9,
        max_iters: 10,
        ..session("x^2 - 4", Method::RootFinding, 1.0, 3.0)
    };
    let report = calculate(&session).unwrap();

    assert_eq!(report.status, Status::MaxIters);
    assert_eq!(report.iters(), 10);

    let Run::Bisection(trace) = &report.run else {
        panic!("expected a bisection trace");
    };
    assert!(!trace.last().unwrap().within_tolerance);
}

#[test]
fn golden_section_minimizes_parabola() {
    let report = calculate(&session("(x-2)^2", Method::GoldenSection, 0.0, 5.0)).unwrap();

    assert_eq!(report.status, Status::Converged);
    assert_relative_eq!(report.outcome.value(), 2.0, epsilon = 1e-4);

    let Outcome::Minimizer { fx: Some(fx), .. } = report.outcome else {
        panic!("expected a minimizer with a function value");
    };
    assert!(fx < 1e-8);
}

#[test]
fn fixed_point_converges_to_two() {
    let report = calculate(&session("x^2 - 4", Method::FixedPoint, 2.5, 0.0)).unwrap();

    assert_eq!(report.status, Status::Converged);
    assert_relative_eq!(report.outcome.value(), 2.0, epsilon = 1e-3);
    assert_eq!(report.iteration_function.as_deref(), Some("x - 0.1*(x^2 - 4)"));

    let Run::FixedPoint(trace) = &report.run else {
        panic!("expected a fixed-point trace");
    };
    for record in trace {
        assert_eq!(record.metric(), (record.gpi.get() - record.pi.get()).abs());
    }
}

#[test]
fn bisection_rejects_interval_without_sign_change() {
    let f = Expression::parse("x^2 + 1").unwrap();
    let config = Config::new(1e-4, 100).unwrap();

    let err = bisection::find_root_unobserved(&f, [-1.0, 1.0], &config).unwrap_err();

    let (fa, fb) = match err {
        bisection::Error::InvalidInterval { fa, fb, .. } => (fa, fb),
        other => panic!("expected an invalid interval, got {other:?}"),
    };
    assert_relative_eq!(fa, 2.0);
    assert_relative_eq!(fb, 2.0);
}

#[test]
fn root_finding_falls_back_to_minimization() {
    let report = calculate(&session("x^2 + 1", Method::RootFinding, -1.0, 1.0)).unwrap();

    assert!(report.fell_back());
    assert_eq!(report.method, Method::IntervalHalving);
    assert!(matches!(report.outcome, Outcome::Minimizer { .. }));
    assert!(report.to_string().contains("Optimization (Bisection Method)"));
}

#[test]
fn evaluation_failure_is_reported() {
    // The second iteration samples a' < 0.
    let err = calculate(&session("log(x)", Method::GoldenSection, -1.0, 3.0)).unwrap_err();
    assert!(matches!(err, Error::Solve { method: Method::GoldenSection, .. }));
}

#[test]
fn repeated_calculations_are_identical() {
    let session = Session::default();
    assert_eq!(calculate(&session).unwrap(), calculate(&session).unwrap());
}

#[test]
fn summary_uses_four_decimals() {
    let report = calculate(&Session::default()).unwrap();
    let summary = report.to_string();

    assert!(summary.contains("Method: Optimization (Bisection Method)"));
    assert!(summary.contains("Minimizer (x): 1.6094"));
    assert!(summary.contains("Derivative f'(x): -8 * e ^ (1 - x) + 7 / x"));
    assert!(summary.contains("Conclusion: Using the Optimization (Bisection Method)"));
}

#[test]
fn export_writes_formulas() {
    let report = calculate(&session("x^2 - 4", Method::RootFinding, 1.0, 3.0)).unwrap();

    let values = report.sheet(Mode::Values).to_csv_string().unwrap();
    let formulas = report.sheet(Mode::Formulas).to_csv_string().unwrap();

    assert!(values.starts_with("Iter,a,b,c,f(c),|b-a|,Within Tol\n"));
    assert!(values.contains("0,1,3,2,0,2,TRUE"));
    assert!(formulas.contains("0,1,3,=(B2+C2)/2,0,=ABS(C2-B2),TRUE"));
}
