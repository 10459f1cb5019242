//! Maximum flow problems, converted to linear programs and solved with the Simplex method.
//!
//! The expected values were computed with a combinatorial maximum flow algorithm.
use approx::assert_abs_diff_eq;

use dense_simplex::algorithm::OptimizationResult;
use dense_simplex::algorithm::two_phase::SimplexEngine;
use dense_simplex::data::linear_program::network::max_flow::{MaxFlow, network_flow_to_std_lp};

fn to_float(capacities: Vec<Vec<i32>>) -> Vec<Vec<f64>> {
    capacities.into_iter()
        .map(|row| row.into_iter().map(f64::from).collect())
        .collect()
}

fn small() -> Vec<Vec<f64>> {
    to_float(vec![
        vec![0, 16, 13,  0,  0,  0],
        vec![0,  0, 10, 12,  0,  0],
        vec![0,  4,  0,  0, 14,  0],
        vec![0,  0,  9,  0,  0, 20],
        vec![0,  0,  0,  7,  0,  7],
        vec![0,  0,  0,  0,  0,  0],
    ])
}

fn large() -> Vec<Vec<f64>> {
    to_float(vec![
        vec![0, 11, 15, 10, 0,  0, 0,  0,  0,  0, 0,  0],
        vec![0,  0,  0,  0, 0, 18, 4,  0,  0,  0, 0,  0],
        vec![0,  3,  8,  5, 0,  0, 0,  0,  0,  0, 0,  0],
        vec![0,  0,  0,  0, 6,  0, 0,  3, 11,  0, 0,  0],
        vec![0,  0,  0,  4, 0,  0, 0, 17,  6,  0, 0,  0],
        vec![0,  0,  0,  0, 3, 16, 0,  0,  0, 13, 0,  0],
        vec![0, 12,  0,  0, 4,  0, 0,  0,  0,  0, 0, 21],
        vec![0,  0,  0,  0, 0,  0, 0,  0,  4,  9, 4,  3],
        vec![0,  0,  0,  0, 0,  0, 0,  4,  0,  0, 5,  4],
        vec![0,  0,  0,  0, 0,  0, 0,  0,  0,  0, 7,  9],
        vec![0,  0,  0,  0, 0,  0, 0,  0,  2,  0, 0, 15],
        vec![0,  0,  0,  0, 0,  0, 0,  0,  0,  0, 0,  0],
    ])
}

/// Solve, check that the flow is feasible for the network, and return its value.
fn solve(capacities: Vec<Vec<f64>>, s: usize, t: usize) -> f64 {
    let network = MaxFlow::new(capacities.clone(), s, t).unwrap();
    let problem = network.standard_form();

    let x = match SimplexEngine::default().solve(&problem) {
        Ok(OptimizationResult::FiniteOptimum(x)) => x,
        other => panic!("{:?}", other),
    };
    assert!(problem.is_feasible(&x, 1e-9));

    let mut net_outflow = vec![0f64; capacities.len()];
    for (from, to, flow) in network.edge_flows(&x) {
        assert!(flow >= -1e-9);
        assert!(flow <= capacities[from][to] + 1e-9);
        net_outflow[from] += flow;
        net_outflow[to] -= flow;
    }
    for (vertex, &net) in net_outflow.iter().enumerate() {
        if vertex != s && vertex != t {
            assert_abs_diff_eq!(net, 0f64, epsilon = 1e-9);
        }
    }

    let value = -problem.objective_value(&x);
    assert_abs_diff_eq!(network.flow_value(&x), value, epsilon = 1e-9);
    value
}

#[test]
fn small_network() {
    assert_abs_diff_eq!(solve(small(), 0, 5), 26f64, epsilon = 1e-9);
}

#[test]
fn small_network_textbook_capacities() {
    // With capacity 4 on the arc 4 -> 5, as in Introduction to Algorithms
    let mut capacities = small();
    capacities[4][5] = 4f64;
    assert_abs_diff_eq!(solve(capacities, 0, 5), 23f64, epsilon = 1e-9);
}

#[test]
fn large_network() {
    // Contains a self loop at vertex 2
    assert_abs_diff_eq!(solve(large(), 0, 11), 29f64, epsilon = 1e-9);
}

#[test]
fn reversed_terminals() {
    // No arc enters vertex 0, so no flow can reach it
    assert_abs_diff_eq!(solve(small(), 5, 0), 0f64, epsilon = 1e-9);
}

#[test]
fn edge_mapping() {
    let (problem, id_to_edge) = network_flow_to_std_lp(small(), 0, 5).unwrap();

    assert_eq!(id_to_edge.len(), 10);
    assert_eq!(id_to_edge[&0], (0, 1));
    assert_eq!(id_to_edge[&9], (4, 5));
    assert_eq!(problem.cost().len(), 2 * 10);
    assert_eq!(problem.b().len(), 10 + 4);
    for (&id, &(from, to)) in &id_to_edge {
        assert_eq!(problem.b()[id], small()[from][to]);
    }
}
