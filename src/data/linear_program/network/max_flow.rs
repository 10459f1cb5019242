//! # Maximum Flow Problem
//!
//! A maximum flow problem on a directed network, given as a square matrix of arc capacities, is
//! written as a linear program in standard form. Every arc gets a flow variable and a slack
//! variable; flow variables come first:
//!
//! ```text
//!                       | flows (one per arc) | slacks (one per arc) |
//! capacity rows         |          I          |          I           | = capacity
//! conservation rows     |   out - in per v    |          0           | = 0
//! ```
//!
//! There is a conservation row for every vertex other than the source and sink. Minimizing the
//! cost, which is minus one for the arcs leaving the source, maximizes the flow out of the source.
use std::collections::BTreeMap;

use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_algebra::vector::DenseVector;
use crate::data::linear_program::standard_form::StandardForm;
use crate::data::number_types::traits::Scalar;
use crate::error::ValidationError;

/// Maximum flow problem.
#[derive(Debug, Clone, PartialEq)]
pub struct MaxFlow<F> {
    /// Capacity of the arc from the row vertex to the column vertex, zero if there is no arc.
    capacities: Vec<Vec<F>>,
    /// Arcs `(from, to)` in row major order of the capacity matrix, indexed by arc id.
    arcs: Vec<(usize, usize)>,

    /// Source
    s: usize,
    /// Sink
    t: usize,
}

impl<F: Scalar> MaxFlow<F> {
    /// Create a new maximum flow problem.
    ///
    /// # Arguments
    ///
    /// * `capacities`: Square matrix, `capacities[i][j]` is the capacity of arc `i -> j`. A zero
    /// means that there is no arc.
    /// * `s`: Source vertex.
    /// * `t`: Sink vertex.
    pub fn new(capacities: Vec<Vec<F>>, s: usize, t: usize) -> Result<Self, ValidationError> {
        let nr_vertices = capacities.len();
        if let Some((row, values)) = capacities.iter().enumerate()
            .find(|(_, values)| values.len() != nr_vertices) {
            return Err(ValidationError::NotSquare { nr_rows: nr_vertices, row, length: values.len() });
        }
        for vertex in [s, t] {
            if vertex >= nr_vertices {
                return Err(ValidationError::Terminal { vertex, nr_vertices });
            }
        }
        if s == t {
            return Err(ValidationError::SourceIsSink(s));
        }

        let mut arcs = Vec::new();
        for (from, row) in capacities.iter().enumerate() {
            for (to, &capacity) in row.iter().enumerate() {
                if !capacity.is_finite() {
                    return Err(ValidationError::NotFinite { location: format!("capacity of arc ({}, {})", from, to) });
                }
                if capacity < F::zero() {
                    return Err(ValidationError::NegativeCapacity { from, to });
                }
                if capacity > F::zero() {
                    arcs.push((from, to));
                }
            }
        }

        Ok(Self { capacities, arcs, s, t })
    }

    /// Number of vertices in the network.
    pub fn nr_vertices(&self) -> usize {
        self.capacities.len()
    }

    /// Number of arcs in the network, arcs with capacity zero are not counted.
    pub fn nr_edges(&self) -> usize {
        self.arcs.len()
    }

    /// Mapping from arc id, which is also the index of the arc's flow variable, to the arc.
    pub fn id_to_edge(&self) -> BTreeMap<usize, (usize, usize)> {
        self.arcs.iter().copied().enumerate().collect()
    }

    /// Write the problem as a linear program in standard form.
    pub fn standard_form(&self) -> StandardForm<F> {
        let nr_edges = self.nr_edges();
        let nr_columns = 2 * nr_edges;
        let conservation_vertices = (0..self.nr_vertices())
            .filter(|&v| v != self.s && v != self.t)
            .collect::<Vec<_>>();
        let nr_rows = nr_edges + conservation_vertices.len();

        let cost = (0..nr_columns)
            .map(|j| {
                if j < nr_edges && self.arcs[j].0 == self.s { -F::one() } else { F::zero() }
            })
            .collect();

        let mut constraints = DenseMatrix::zeros(nr_rows, nr_columns);
        let mut b = DenseVector::zeros(nr_rows);
        for (id, &(from, to)) in self.arcs.iter().enumerate() {
            constraints.set(id, id, F::one());
            constraints.set(id, nr_edges + id, F::one());
            b[id] = self.capacities[from][to];
        }
        for (offset, &vertex) in conservation_vertices.iter().enumerate() {
            let row = nr_edges + offset;
            for (id, &(from, to)) in self.arcs.iter().enumerate() {
                // A self loop leaves and enters the vertex and doesn't contribute
                if from == to {
                    continue;
                }
                if from == vertex {
                    constraints.set(row, id, F::one());
                } else if to == vertex {
                    constraints.set(row, id, -F::one());
                }
            }
        }

        StandardForm::from_parts(DenseVector::new(cost), constraints, b)
    }

    /// Total flow leaving the source for a solution of the standard form problem.
    pub fn flow_value(&self, x: &[F]) -> F {
        debug_assert_eq!(x.len(), 2 * self.nr_edges());

        self.arcs.iter().zip(x)
            .filter(|((from, _), _)| *from == self.s)
            .map(|(_, &flow)| flow)
            .sum()
    }

    /// Flow on each arc, `(from, to, flow)`, for a solution of the standard form problem.
    pub fn edge_flows<'a>(&'a self, x: &'a [F]) -> impl Iterator<Item = (usize, usize, F)> + 'a {
        debug_assert_eq!(x.len(), 2 * self.nr_edges());

        self.arcs.iter().zip(x).map(|(&(from, to), &flow)| (from, to, flow))
    }
}

/// Convert a maximum flow problem into a linear program in standard form.
///
/// # Arguments
///
/// * `capacities`: Square matrix of arc capacities, zero means no arc.
/// * `s`: Source vertex.
/// * `t`: Sink vertex.
///
/// # Return value
///
/// The linear program and a mapping from flow variable index to arc.
pub fn network_flow_to_std_lp<F: Scalar>(
    capacities: Vec<Vec<F>>,
    s: usize,
    t: usize,
) -> Result<(StandardForm<F>, BTreeMap<usize, (usize, usize)>), ValidationError> {
    let problem = MaxFlow::new(capacities, s, t)?;
    Ok((problem.standard_form(), problem.id_to_edge()))
}

#[cfg(test)]
mod test {
    use approx::assert_abs_diff_eq;

    use crate::algorithm::OptimizationResult;
    use crate::algorithm::two_phase::SimplexEngine;
    use crate::data::linear_program::network::max_flow::{MaxFlow, network_flow_to_std_lp};
    use crate::error::ValidationError;

    #[test]
    fn test_1() {
        // Example from Papadimitriou's Combinatorial Optimization.
        let problem = MaxFlow::new(vec![
            // Directed; from is on the left, to is on top
            //   s     a     b     t
            vec![0f64, 2f64, 1f64, 0f64], // s
            vec![0f64, 0f64, 1f64, 1f64], // a
            vec![0f64, 0f64, 0f64, 2f64], // b
            vec![0f64, 0f64, 0f64, 0f64], // t
        ], 0, 3).unwrap();
        let lp = problem.standard_form();
        assert_eq!(lp.constraints().nr_rows(), 5 + 2);
        assert_eq!(lp.constraints().nr_columns(), 10);

        match SimplexEngine::default().solve(&lp).unwrap() {
            OptimizationResult::FiniteOptimum(x) => {
                assert_abs_diff_eq!(problem.flow_value(&x), 3f64, epsilon = 1e-9);
                assert_abs_diff_eq!(lp.objective_value(&x), -3f64, epsilon = 1e-9);
            },
            other => panic!("{:?}", other),
        }
    }

    #[test]
    fn structure() {
        let (lp, id_to_edge) = network_flow_to_std_lp(vec![
            vec![0f64, 3f64, 0f64],
            vec![0f64, 1f64, 4f64],
            vec![0f64, 0f64, 0f64],
        ], 0, 2).unwrap();

        assert_eq!(id_to_edge.into_iter().collect::<Vec<_>>(), vec![(0, (0, 1)), (1, (1, 1)), (2, (1, 2))]);
        assert_eq!(lp.cost().data, vec![-1f64, 0f64, 0f64, 0f64, 0f64, 0f64]);
        assert_eq!(lp.b().data, vec![3f64, 1f64, 4f64, 0f64]);
        // Capacity rows
        assert_eq!(lp.constraints().row(1), &[0f64, 1f64, 0f64, 0f64, 1f64, 0f64]);
        // Conservation at vertex 1, the self loop doesn't contribute
        assert_eq!(lp.constraints().row(3), &[-1f64, 0f64, 1f64, 0f64, 0f64, 0f64]);
    }

    #[test]
    fn vertex_without_outgoing_arcs() {
        let (lp, _) = network_flow_to_std_lp(vec![
            vec![0f64, 1f64, 1f64],
            vec![0f64, 0f64, 0f64],
            vec![0f64, 0f64, 0f64],
        ], 0, 2).unwrap();
        assert_eq!(lp.constraints().row(2), &[-1f64, 0f64, 0f64, 0f64]);
    }

    #[test]
    fn invalid() {
        assert_eq!(
            MaxFlow::new(vec![vec![0f64, 1f64], vec![0f64]], 0, 1),
            Err(ValidationError::NotSquare { nr_rows: 2, row: 1, length: 1 }),
        );
        assert_eq!(
            MaxFlow::new(vec![vec![0f64, -1f64], vec![0f64, 0f64]], 0, 1),
            Err(ValidationError::NegativeCapacity { from: 0, to: 1 }),
        );
        assert_eq!(
            MaxFlow::new(vec![vec![0f64, 1f64], vec![0f64, 0f64]], 0, 2),
            Err(ValidationError::Terminal { vertex: 2, nr_vertices: 2 }),
        );
        assert_eq!(
            MaxFlow::new(vec![vec![0f64, 1f64], vec![0f64, 0f64]], 1, 1),
            Err(ValidationError::SourceIsSink(1)),
        );
    }
}
