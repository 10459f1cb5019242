//! Strong and weak duality between a problem and the problem built by `primal_to_dual`.
use approx::assert_abs_diff_eq;

use dense_simplex::algorithm::OptimizationResult;
use dense_simplex::algorithm::two_phase::SimplexEngine;
use dense_simplex::data::linear_program::dual::primal_to_dual;
use dense_simplex::data::linear_program::network::max_flow::MaxFlow;
use dense_simplex::data::linear_program::standard_form::StandardForm;

fn solve(problem: &StandardForm<f64>) -> OptimizationResult<f64> {
    SimplexEngine::default().solve(problem).unwrap()
}

fn optimal_value(problem: &StandardForm<f64>) -> f64 {
    match solve(problem) {
        OptimizationResult::FiniteOptimum(x) => problem.objective_value(&x),
        other => panic!("{:?}", other),
    }
}

#[test]
fn strong_duality() {
    let problems = vec![
        StandardForm::new(
            vec![-1f64, -1f64, 0f64, 0f64],
            vec![vec![1f64, 2f64, 1f64, 0f64], vec![3f64, 1f64, 0f64, 1f64]],
            vec![4f64, 6f64],
        ).unwrap(),
        StandardForm::new(
            vec![0f64, -2f64, -3f64, 0f64, 0f64],
            vec![vec![1f64, 1f64, 1f64, 1f64, 0f64], vec![0f64, 1f64, 2f64, 0f64, 1f64]],
            vec![4f64, 6f64],
        ).unwrap(),
        StandardForm::new(
            vec![1f64, 2f64, 3f64, 1f64],
            vec![vec![1f64, 1f64, 1f64, 1f64], vec![1f64, -1f64, 2f64, 0f64]],
            vec![4f64, 1f64],
        ).unwrap(),
    ];

    for primal in problems {
        let dual = primal_to_dual(&primal);
        assert_abs_diff_eq!(optimal_value(&dual), -optimal_value(&primal), epsilon = 1e-9);
    }
}

#[test]
fn max_flow_min_cut() {
    let network = MaxFlow::new(vec![
        vec![0f64, 3f64, 2f64, 0f64],
        vec![0f64, 0f64, 1f64, 2f64],
        vec![0f64, 0f64, 0f64, 3f64],
        vec![0f64, 0f64, 0f64, 0f64],
    ], 0, 3).unwrap();
    let primal = network.standard_form();

    // Maximum flow 5 is bounded by the cut around the source
    assert_abs_diff_eq!(optimal_value(&primal), -5f64, epsilon = 1e-9);
    assert_abs_diff_eq!(optimal_value(&primal_to_dual(&primal)), 5f64, epsilon = 1e-9);
}

#[test]
fn infeasible_primal() {
    let primal = StandardForm::new(vec![1f64, 1f64], vec![vec![1f64, 1f64]], vec![-1f64]).unwrap();
    assert_eq!(solve(&primal), OptimizationResult::Infeasible);
    assert_eq!(solve(&primal_to_dual(&primal)), OptimizationResult::Unbounded);
}

#[test]
fn unbounded_primal() {
    let primal = StandardForm::new(vec![-1f64, 0f64], vec![vec![1f64, -1f64]], vec![0f64]).unwrap();
    assert_eq!(solve(&primal), OptimizationResult::Unbounded);
    assert_eq!(solve(&primal_to_dual(&primal)), OptimizationResult::Infeasible);
}
