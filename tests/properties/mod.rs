//! Behavior of the solver on small, handcrafted problems.
use approx::assert_abs_diff_eq;

use dense_simplex::algorithm::{LinearProgramSolver, OptimizationResult};
use dense_simplex::algorithm::brute_force::BruteForce;
use dense_simplex::algorithm::two_phase::{SimplexEngine, SolverConfig};
use dense_simplex::algorithm::two_phase::observer::{Phase, Statistics};
use dense_simplex::data::linear_program::standard_form::StandardForm;
use dense_simplex::error::{SolveError, ValidationError};
use dense_simplex::solve;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn optimum(problem: &StandardForm<f64>) -> Vec<f64> {
    match SimplexEngine::default().solve(problem) {
        Ok(OptimizationResult::FiniteOptimum(x)) => x.into_inner(),
        other => panic!("{:?}", other),
    }
}

/// Problems with a finite optimum.
fn bounded_problems() -> Vec<StandardForm<f64>> {
    vec![
        // Slack basis is optimal
        StandardForm::new(
            vec![1f64, 1f64, 0f64],
            vec![vec![1f64, 1f64, 1f64]],
            vec![3f64],
        ).unwrap(),
        // Negative constraint value
        StandardForm::new(
            vec![2f64, 3f64, 0f64, 0f64],
            vec![
                vec![-1f64, -1f64, 1f64, 0f64],
                vec![1f64, -1f64, 0f64, 1f64],
            ],
            vec![-2f64, 1f64],
        ).unwrap(),
        // Equality constraints only, no slack variables
        StandardForm::new(
            vec![1f64, 2f64, 3f64, 1f64],
            vec![
                vec![1f64, 1f64, 1f64, 1f64],
                vec![1f64, -1f64, 2f64, 0f64],
            ],
            vec![4f64, 1f64],
        ).unwrap(),
        // Fractional solution
        StandardForm::new(
            vec![-3f64, -5f64, 0f64, 0f64, 0f64],
            vec![
                vec![1f64, 0f64, 1f64, 0f64, 0f64],
                vec![0f64, 2f64, 0f64, 1f64, 0f64],
                vec![3f64, 2f64, 0f64, 0f64, 1f64],
            ],
            vec![4f64, 12f64, 18f64],
        ).unwrap(),
    ]
}

/// Beale's example, which cycles with the most negative relative cost rule and the lowest
/// position ratio test.
fn beale() -> StandardForm<f64> {
    StandardForm::new(
        vec![0f64, 0f64, 0f64, -0.75f64, 20f64, -0.5f64, 6f64],
        vec![
            vec![1f64, 0f64, 0f64, 0.25f64, -8f64, -1f64, 9f64],
            vec![0f64, 1f64, 0f64, 0.5f64, -12f64, -0.5f64, 3f64],
            vec![0f64, 0f64, 1f64, 0f64, 0f64, 1f64, 0f64],
        ],
        vec![0f64, 0f64, 1f64],
    ).unwrap()
}

#[test]
fn infeasible() {
    init();
    assert_eq!(
        solve(vec![1f64, 1f64], vec![vec![1f64, 1f64]], vec![-1f64]),
        Ok(OptimizationResult::Infeasible),
    );
}

#[test]
fn unbounded() {
    init();
    assert_eq!(
        solve(vec![-1f64, 0f64], vec![vec![1f64, -1f64]], vec![0f64]),
        Ok(OptimizationResult::Unbounded),
    );
}

#[test]
fn agrees_with_brute_force() {
    init();
    for problem in bounded_problems() {
        let x = optimum(&problem);
        assert!(problem.residual(&x) < 1e-9);
        assert!(problem.is_feasible(&x, 1e-9));

        match BruteForce::default().solve(&problem) {
            Ok(OptimizationResult::FiniteOptimum(y)) => {
                assert_abs_diff_eq!(problem.objective_value(&x), problem.objective_value(&y), epsilon = 1e-9);
            },
            other => panic!("{:?}", other),
        }
    }
}

#[test]
fn known_optimum() {
    // Classic example from Hillier and Lieberman, maximize 3 x0 + 5 x1
    let problem = &bounded_problems()[3];
    let x = optimum(problem);
    assert_abs_diff_eq!(x[0], 2f64, epsilon = 1e-9);
    assert_abs_diff_eq!(x[1], 6f64, epsilon = 1e-9);
    assert_abs_diff_eq!(problem.objective_value(&x), -36f64, epsilon = 1e-9);
}

#[test]
fn deterministic() {
    for problem in bounded_problems() {
        assert_eq!(optimum(&problem), optimum(&problem));
    }
}

#[test]
fn redundant_row() {
    init();
    let problem = &bounded_problems()[2];
    let mut constraints = problem.constraints().rows().cloned().collect::<Vec<_>>();
    let mut b = problem.b().data.clone();
    constraints.push(constraints[0].clone());
    b.push(b[0]);
    let duplicated = StandardForm::new(problem.cost().data.clone(), constraints, b).unwrap();

    let mut engine = SimplexEngine::with_observer(SolverConfig::default(), Statistics::default());
    let x = match engine.solve(&duplicated) {
        Ok(OptimizationResult::FiniteOptimum(x)) => x,
        other => panic!("{:?}", other),
    };
    assert_abs_diff_eq!(duplicated.objective_value(&x), problem.objective_value(&optimum(problem)), epsilon = 1e-9);
    assert_eq!(engine.observer().rows_removed, 1);
}

#[test]
fn inconsistent_rows() {
    init();
    assert_eq!(
        solve(
            vec![1f64, 1f64, 1f64],
            vec![vec![1f64, 2f64, 3f64], vec![2f64, 4f64, 6f64]],
            vec![1f64, 3f64],
        ),
        Ok(OptimizationResult::Infeasible),
    );
}

#[test]
fn degenerate_terminates() {
    init();
    let problem = beale();
    let mut engine = SimplexEngine::with_observer(SolverConfig::default(), Statistics::default());
    let x = match engine.solve(&problem) {
        Ok(OptimizationResult::FiniteOptimum(x)) => x,
        other => panic!("{:?}", other),
    };

    assert_abs_diff_eq!(problem.objective_value(&x), -1.25f64, epsilon = 1e-9);
    let statistics = engine.into_observer();
    assert!(statistics.total_pivots() < 50);
    assert!(statistics.degenerate_solutions[Phase::One] + statistics.degenerate_solutions[Phase::Two] > 0);
}

#[test]
fn iteration_limit() {
    let config = SolverConfig::default().with_iteration_limit(0);
    assert_eq!(
        SimplexEngine::with_observer(config, ()).solve(&beale()),
        Err(SolveError::NonConvergence { iterations: 0 }),
    );

    // The limit is shared by both phases
    let mut engine = SimplexEngine::with_observer(SolverConfig::default(), Statistics::default());
    assert!(engine.solve(&beale()).is_ok());
    let needed = engine.observer().total_pivots();
    let config = SolverConfig::default().with_iteration_limit(needed);
    assert!(SimplexEngine::with_observer(config, ()).solve(&beale()).is_ok());
    let config = SolverConfig::default().with_iteration_limit(needed - 1);
    assert_eq!(
        SimplexEngine::with_observer(config, ()).solve(&beale()),
        Err(SolveError::NonConvergence { iterations: needed - 1 }),
    );
}

#[test]
fn validation() {
    assert_eq!(
        solve(vec![1f64, 1f64], vec![vec![1f64, 1f64], vec![1f64]], vec![1f64, 1f64]),
        Err(SolveError::Validation(ValidationError::RowLength { row: 1, expected: 2, actual: 1 })),
    );
    assert_eq!(
        solve(vec![1f64, 1f64], vec![vec![1f64, 1f64]], vec![1f64, 1f64]),
        Err(SolveError::Validation(ValidationError::ConstraintValueCount { nr_rows: 1, nr_constraint_values: 2 })),
    );
    assert!(matches!(
        solve(vec![1f64, f64::NAN], vec![vec![1f64, 1f64]], vec![1f64]),
        Err(SolveError::Validation(ValidationError::NotFinite { .. })),
    ));
}

#[test]
fn small_coefficients() {
    init();
    match solve(vec![1f64, 1f64], vec![vec![1e-10f64, 1e-10f64]], vec![1f64]) {
        Ok(OptimizationResult::FiniteOptimum(x)) => {
            assert_abs_diff_eq!(x[0], 1e10f64, epsilon = 1e-2);
            assert_eq!(x[1], 0f64);
        },
        other => panic!("{:?}", other),
    }
    match solve(vec![1f64, 1f64], vec![vec![1e-10f64, 1e-10f64]], vec![1e-10f64]) {
        Ok(OptimizationResult::FiniteOptimum(x)) => assert_abs_diff_eq!(x[0], 1f64, epsilon = 1e-9),
        other => panic!("{:?}", other),
    }
    assert_eq!(
        solve(vec![1f64, 1f64], vec![vec![1e-10f64, 1e-10f64]], vec![-1e-10f64]),
        Ok(OptimizationResult::Infeasible),
    );
}

#[test]
fn uniformly_scaled() {
    init();
    for problem in bounded_problems() {
        let expected = problem.objective_value(&optimum(&problem));
        for factor in [1e-10f64, 1e10f64] {
            let constraints = problem.constraints().rows()
                .map(|row| row.iter().map(|v| v * factor).collect::<Vec<_>>())
                .collect();
            let b = problem.b().iter().map(|v| v * factor).collect();
            let scaled = StandardForm::new(problem.cost().data.clone(), constraints, b).unwrap();

            let x = optimum(&scaled);
            assert!(problem.is_feasible(&x, 1e-9));
            assert_abs_diff_eq!(problem.objective_value(&x), expected, epsilon = 1e-9);
        }
    }
}

#[test]
fn single_precision() {
    match solve(vec![-1f32, -1f32, 0f32, 0f32], vec![
        vec![1f32, 2f32, 1f32, 0f32],
        vec![3f32, 1f32, 0f32, 1f32],
    ], vec![4f32, 6f32]) {
        Ok(OptimizationResult::FiniteOptimum(x)) => {
            assert_abs_diff_eq!(x[0] + x[1], 14f32 / 5f32, epsilon = 1e-5);
        },
        other => panic!("{:?}", other),
    }
}
