use std::collections::BTreeMap;
use std::error::Error;

use clap::{Parser, ValueEnum};

use dense_simplex::algorithm::{LinearProgramSolver, OptimizationResult};
use dense_simplex::algorithm::brute_force::BruteForce;
use dense_simplex::algorithm::two_phase::{SimplexEngine, SolverConfig};
use dense_simplex::algorithm::two_phase::strategy::pivot_rule::{FirstProfitable, SteepestDescentAlongVariable};
use dense_simplex::data::linear_program::network::max_flow::network_flow_to_std_lp;
use dense_simplex::data::linear_program::standard_form::StandardForm;

/// Which of the built in networks to solve.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
enum Graph {
    /// Six vertices, nine arcs.
    Small,
    /// Twelve vertices, thirty seven arcs.
    Large,
    /// Both networks.
    All,
}

/// How to solve the linear programs.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
enum Method {
    /// Two phase Simplex method, entering the first improving column.
    FirstProfitable,
    /// Two phase Simplex method, entering the column with the most negative relative cost.
    SteepestDescent,
    /// Try all bases.
    BruteForce,
}

/// Solves maximum flow problems as linear programs with the two phase Simplex method.
#[derive(Parser)]
#[command(version)]
struct Opts {
    /// Network to solve
    #[arg(short, long, value_enum, default_value = "all")]
    graph: Graph,

    /// Solution method
    #[arg(short, long, value_enum, default_value = "first-profitable")]
    method: Method,

    /// Maximum number of basis changes
    #[arg(short, long)]
    iteration_limit: Option<usize>,

    /// Values not larger than this are considered zero
    #[arg(short, long, default_value = "1e-9")]
    tolerance: f64,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let opts: Opts = Opts::parse();

    if matches!(opts.graph, Graph::Small | Graph::All) {
        println!("\nTest #1");
        solve_max_flow(&opts, small(), 0, 5)?;
    }
    if matches!(opts.graph, Graph::Large | Graph::All) {
        println!("\nTest #2");
        solve_max_flow(&opts, large(), 0, 11)?;
    }

    Ok(())
}

fn solve_max_flow(opts: &Opts, capacities: Vec<Vec<f64>>, s: usize, t: usize) -> Result<(), Box<dyn Error>> {
    let (problem, id_to_edge) = network_flow_to_std_lp(capacities.clone(), s, t)?;

    match solve(opts, &problem)? {
        OptimizationResult::FiniteOptimum(x) => {
            let objective = problem.objective_value(&x);
            println!("Optimal objective value \t= {}", objective);
            println!("Max flow from s -> t \t\t= {}", -objective);
            println!("Optimal edge flows: \n");
            print_flows(&x, &id_to_edge, &capacities);
        },
        OptimizationResult::Infeasible => println!("Problem is not feasible."),
        OptimizationResult::Unbounded => println!("Problem is unbounded."),
    }

    Ok(())
}

fn solve(opts: &Opts, problem: &StandardForm<f64>) -> Result<OptimizationResult<f64>, Box<dyn Error>> {
    let mut config = SolverConfig::default().with_tolerance(opts.tolerance);
    if let Some(limit) = opts.iteration_limit {
        config = config.with_iteration_limit(limit);
    }

    let result = match opts.method {
        Method::FirstProfitable => SimplexEngine::new(config).solve_with_rule::<FirstProfitable>(problem)?,
        Method::SteepestDescent => SimplexEngine::new(config).solve_with_rule::<SteepestDescentAlongVariable>(problem)?,
        Method::BruteForce => BruteForce::new(opts.tolerance).solve(problem)?,
    };

    Ok(result)
}

fn print_flows(x: &[f64], id_to_edge: &BTreeMap<usize, (usize, usize)>, capacities: &[Vec<f64>]) {
    for (&id, &(from, to)) in id_to_edge {
        println!("Edge ({:2}, {:2}) = {:6.2} / {:2}", from, to, x[id], capacities[from][to]);
    }
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

fn to_float(capacities: Vec<Vec<i32>>) -> Vec<Vec<f64>> {
    capacities.into_iter()
        .map(|row| row.into_iter().map(f64::from).collect())
        .collect()
}
