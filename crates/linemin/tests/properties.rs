use approx::assert_relative_eq;

use linemin::{
    Catalog, Error, Function, Method, Objective, Record, Settings, Start, Status, build_derivatives,
    build_function, derivative, run_search, sample,
    solvers::fibonacci,
};

#[test]
fn analytic_and_numeric_derivatives_agree() {
    for entry in Catalog::ALL {
        let f = Function::Catalog(entry);
        let (df, _) = build_derivatives(&f);
        let [lo, hi] = entry.domain();

        for i in 0..=20 {
            let x = lo + f64::from(i) * (hi - lo) / 20.0;
            assert_relative_eq!(df.value(x), derivative::first(&f, x), epsilon = 1e-4);
        }
    }
}

#[test]
fn golden_and_fibonacci_reach_parabola_minimum() {
    let f = build_function("parabola").unwrap();
    let settings = Settings::new(1e-3, 60).unwrap();

    for method in [Method::Golden, Method::Fibonacci] {
        let solution = run_search(method, &f, Start::Bracket([0.0, 5.0]), &settings).unwrap();

        assert_eq!(solution.status, Status::Converged);
        assert!(solution.iters <= 60);
        assert_relative_eq!(solution.x, 2.0, epsilon = 1e-3);
        assert_relative_eq!(solution.fx, 1.0, epsilon = 1e-3);
    }
}

#[test]
fn fibonacci_reports_max_iters_when_capped() {
    let f = build_function("parabola").unwrap();
    let settings = Settings::new(1e-3, 5).unwrap();

    let solution =
        run_search(Method::Fibonacci, &f, Start::Bracket([0.0, 5.0]), &settings).unwrap();

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 4);
}

#[test]
fn bisection_returns_stationary_endpoint() {
    let f = build_function("quadratic").unwrap();

    let solution = run_search(
        Method::Bisection,
        &f,
        Start::Bracket([2.0, 5.0]),
        &Settings::default(),
    )
    .unwrap();

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.x, 2.0);
    assert_eq!(solution.iters, 0);
}

#[test]
fn newton_converges_on_parabola_in_two_passes() {
    let f = build_function("parabola").unwrap();

    let solution = run_search(Method::Newton, &f, Start::Point(0.0), &Settings::default()).unwrap();

    assert_eq!(solution.status, Status::Converged);
    assert!((1..=2).contains(&solution.iters));
    assert_relative_eq!(solution.x, 2.0, epsilon = 1e-9);
}

#[test]
fn newton_converges_with_numeric_derivatives() {
    let f = build_function("(x-2)^2 + 1").unwrap();

    let solution = run_search(Method::Newton, &f, Start::Point(0.0), &Settings::default()).unwrap();

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, 2.0, epsilon = 1e-4);
}

#[test]
fn newton_stalls_on_linear_objective() {
    // The numeric second derivative of 3x at 0 is exactly zero.
    let f = build_function("3*x").unwrap();

    let solution = run_search(Method::Newton, &f, Start::Point(0.0), &Settings::default()).unwrap();

    assert_eq!(solution.status, Status::Stalled);
    assert_eq!(solution.iters, 1);
    assert_eq!(solution.x, 0.0);
    match solution.trace.last() {
        Some(Record::Newton(record)) => assert_eq!(record.step, None),
        other => panic!("unexpected record {other:?}"),
    }
}

#[test]
fn bisection_finds_quadratic_stationary_point() {
    let f = build_function("x^2 - 4*x + 3").unwrap();

    let solution = run_search(
        Method::Bisection,
        &f,
        Start::Bracket([-2.0, 5.0]),
        &Settings::default(),
    )
    .unwrap();

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, 2.0, epsilon = 1e-5);
}

#[test]
fn quartic_minimum_from_catalog_defaults() {
    let f = Function::Catalog(Catalog::Quartic);
    let settings = Settings::default();

    for method in Method::ALL {
        let solution = run_search(method, &f, Catalog::Quartic.start_for(method), &settings).unwrap();
        assert_relative_eq!(solution.x, 2.25, epsilon = 1e-4);
    }
}

#[test]
fn searches_are_deterministic() {
    let f = build_function("x^4 - 3*x^3 + 2").unwrap();
    let settings = Settings::default();

    for method in Method::ALL {
        let start = Catalog::Quartic.start_for(method);
        let first = run_search(method, &f, start, &settings).unwrap();
        let second = run_search(method, &f, start, &settings).unwrap();
        assert_eq!(first, second, "{method}");
    }
}

#[test]
fn iteration_cap_is_not_an_error() {
    let f = build_function("parabola").unwrap();
    let settings = Settings::new(1e-12, 3).unwrap();

    for method in [Method::Golden, Method::Dichotomous, Method::Sequential] {
        let solution = run_search(method, &f, Start::Bracket([0.0, 5.0]), &settings).unwrap();

        assert_eq!(solution.status, Status::MaxIters);
        assert_eq!(solution.iters, 3);

        // The estimate is the midpoint of the final bracket, which lies
        // inside the bracket of the last record.
        let last = solution.trace.last().and_then(Record::bracket).unwrap();
        assert!(last.left() < solution.x && solution.x < last.right());
    }
}

#[test]
fn fibonacci_sequence_recurrence() {
    let fib = fibonacci::sequence(20);

    assert_eq!(fib[0], 1.0);
    assert_eq!(fib[1], 1.0);
    assert_eq!(fib[20], fib[19] + fib[18]);
}

#[test]
fn builds_functions_and_rejects_bad_input() {
    let f = build_function("x^2 - 4*x + 3").unwrap();
    assert_eq!(f.value(1.0), 0.0);

    assert!(matches!(
        build_function("bad$chars"),
        Err(Error::InvalidExpression(_))
    ));
}

#[test]
fn sampler_covers_bounds() {
    let f = build_function("x^2 - 4*x + 3").unwrap();

    let points = sample(&f, [-2.0, 5.0]);

    assert_eq!(points.len(), 301);
    assert!(points.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
    assert!(points.windows(2).all(|w| w[0].x < w[1].x));
    assert_relative_eq!(points[0].x, -2.0);
    assert_relative_eq!(points[300].x, 5.0, epsilon = 1e-12);
}

#[test]
fn sampler_skips_undefined_values() {
    let f = build_function("log(x)").unwrap();

    let points = sample(&f, [-1.0, 1.0]);

    assert!(!points.is_empty());
    assert!(points.iter().all(|p| p.x > 0.0 && p.y.is_finite()));
}
