use std::cell::RefCell;

use approx::assert_relative_eq;

use sweep_core::Objective;

use crate::optimization::{refine, scan};

use super::{Domain, DomainError, Error, Mode, Options, Solution, dispatch, optimize};

fn parabola(x: f64) -> f64 {
    -x.powi(2) + 4.0 * x
}

#[test]
fn discrete_parabola_scenario() {
    let domain: Domain = "-10..=10".parse().unwrap();

    let (x, fx) = optimize(parabola, &domain, "discrete", &Options::default()).unwrap();

    assert_relative_eq!(x, 2.0);
    assert_relative_eq!(fx, 4.0);
}

#[test]
fn continuous_parabola_scenario() {
    let domain = Domain::Interval([0.0, 4.0]);
    let options = Options::default().step(0.1).refine(true).rounds(3);

    let (x, fx) = optimize(parabola, &domain, "continuous", &options).unwrap();

    assert_relative_eq!(x, 2.0, epsilon = 1e-9);
    assert_relative_eq!(fx, 4.0, epsilon = 1e-9);
}

#[test]
fn agrees_with_direct_calls() {
    let f = |x: f64| (x * 0.7).cos() * x;
    let points = vec![-3.0, -1.0, 0.5, 2.0, 4.5];

    let dispatched = optimize(
        f,
        &Domain::Points(points.clone()),
        "discrete",
        &Options::default().maximize(false),
    )
    .unwrap();
    assert_eq!(dispatched, scan::discrete_optimize(f, points, false).unwrap());

    let options = Options::default().step(0.2).refine(true).rounds(4);
    let dispatched = optimize(f, &Domain::Interval([-3.0, 5.0]), "continuous", &options).unwrap();
    assert_eq!(
        dispatched,
        refine::continuous_optimize(f, -3.0, 5.0, 0.2, true, true, 4).unwrap()
    );
}

#[test]
fn unknown_mode_is_invalid_argument() {
    let domain = Domain::Points(vec![1.0, 2.0, 3.0]);

    let err = optimize(parabola, &domain, "bogus", &Options::default()).unwrap_err();

    assert!(matches!(err, Error::InvalidMode { ref mode } if mode == "bogus"));
    assert!(err.is_invalid_argument());
}

#[test]
fn unparsable_domain_is_malformed() {
    let err: Error = "not-a-tuple".parse::<Domain>().unwrap_err().into();

    assert!(matches!(err, Error::MalformedDomain(_)));
    assert!(err.is_invalid_argument());
}

#[test]
fn continuous_mode_rejects_points() {
    for points in [vec![], vec![0.0, 4.0], vec![0.0, 1.0, 2.0]] {
        let len = points.len();
        let err = optimize(
            parabola,
            &Domain::Points(points),
            "continuous",
            &Options::default(),
        )
        .unwrap_err();

        assert!(matches!(
            err,
            Error::MalformedDomain(DomainError::NotAnInterval { len: l }) if l == len
        ));
        assert!(err.is_invalid_argument());
    }
}

#[test]
fn continuous_mode_rejects_inverted_interval() {
    let err = optimize(
        parabola,
        &Domain::Interval([4.0, 0.0]),
        "continuous",
        &Options::default(),
    )
    .unwrap_err();

    assert!(matches!(
        err,
        Error::MalformedDomain(DomainError::InvertedInterval { .. })
    ));
}

#[test]
fn continuous_mode_validates_options() {
    let domain = Domain::Interval([0.0, 4.0]);

    let err = optimize(parabola, &domain, "continuous", &Options::default().step(0.0))
        .unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidConfig(refine::ConfigError::Step)
    ));
    assert!(err.is_invalid_argument());

    let err = optimize(parabola, &domain, "continuous", &Options::default().rounds(0))
        .unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidConfig(refine::ConfigError::Rounds)
    ));
}

#[test]
fn discrete_mode_ignores_continuous_options() {
    let domain = Domain::Points(vec![0.0, 1.0, 2.0, 3.0]);
    let options = Options::default().step(-1.0).rounds(0);

    let (x, _) = optimize(parabola, &domain, "discrete", &options).unwrap();

    assert_relative_eq!(x, 2.0);
}

#[test]
fn discrete_mode_scans_interval_bounds() {
    let visited = RefCell::new(Vec::new());
    let objective = Objective::new(|x: f64| {
        visited.borrow_mut().push(x);
        parabola(x)
    });

    let solution = dispatch(
        &objective,
        &objective,
        &Domain::Interval([0.0, 4.0]),
        Mode::Discrete,
        &Options::default(),
    )
    .unwrap();

    // f(0) = f(4) = 0, so the first bound wins the tie.
    assert!(matches!(solution, Solution::Discrete(_)));
    assert_eq!(*visited.borrow(), vec![0.0, 4.0]);
    assert_eq!(solution.pair(), (0.0, 0.0));
    assert_eq!(solution.evaluations(), 2);
}

#[test]
fn search_failures_are_not_invalid_arguments() {
    let empty = optimize(parabola, &Domain::Points(vec![]), "discrete", &Options::default())
        .unwrap_err();
    assert!(matches!(empty, Error::Scan(scan::Error::NoCandidates)));
    assert!(!empty.is_invalid_argument());

    let nan = optimize(
        |_| f64::NAN,
        &Domain::Interval([0.0, 1.0]),
        "continuous",
        &Options::default(),
    )
    .unwrap_err();
    assert!(matches!(nan, Error::Refine(refine::Error::Scan { round: 1, .. })));
    assert!(!nan.is_invalid_argument());
}

#[test]
fn continuous_solution_carries_refiner_details() {
    let objective = Objective::new(parabola);
    let options = Options::default().refine(true).rounds(2);

    let solution = dispatch(
        &objective,
        &objective,
        &Domain::Interval([0.0, 4.0]),
        Mode::Continuous,
        &options,
    )
    .unwrap();

    let Solution::Continuous(inner) = &solution else {
        panic!("expected a continuous solution");
    };
    assert_eq!(inner.rounds, 2);
    assert_eq!(solution.evaluations(), 41 + 5);
    assert_relative_eq!(solution.snapshot().output, solution.objective());
}

#[cfg(feature = "serde")]
#[test]
fn json_options_drive_a_search() {
    let options: Options =
        serde_json::from_str(r#"{ "delta_x": 0.1, "refinement": true, "iterations": 3 }"#)
            .unwrap();

    let (x, fx) = optimize(parabola, &Domain::Interval([0.0, 4.0]), "continuous", &options)
        .unwrap();

    assert_relative_eq!(x, 2.0, epsilon = 1e-9);
    assert_relative_eq!(fx, 4.0, epsilon = 1e-9);
}
