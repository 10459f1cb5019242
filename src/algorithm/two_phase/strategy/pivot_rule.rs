//! # Pivot rules
//!
//! Strategies for moving from basis to basis.
use crate::algorithm::two_phase::matrix_provider::MatrixProvider;
use crate::algorithm::two_phase::tableau::{BasicSolution, Tableau};

/// Deciding how to pivot.
///
/// During the Simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule describes that behavior.
///
/// Once the column has been selected for a primal pivot, a row needs to be found. This decision
/// is made independent of the strategy, see `Tableau::select_primal_pivot_row`.
pub trait PivotRule {
    /// Create a new instance.
    fn new() -> Self;

    /// Column selection rule for the primal Simplex method.
    ///
    /// # Arguments
    ///
    /// * `tableau`: Tableau with the current basis.
    /// * `solution`: Values derived from that basis.
    ///
    /// # Return value
    ///
    /// Column index and relative cost of a nonbasic variable with a negative relative cost, see
    /// `Tableau::profitable_relative_cost`, or `None` if there is no such variable and the basis
    /// is optimal.
    fn select_primal_pivot_column<MP: MatrixProvider>(
        &mut self,
        tableau: &Tableau<MP>,
        solution: &BasicSolution<MP::F>,
    ) -> Option<(usize, MP::F)>;
}

/// Simply pivot on the first column, which has a negative relative cost.
///
/// Columns are considered in increasing index order. Together with the ratio test picking the
/// lowest basis position on ties, and the basis being kept sorted, this is Bland's rule, such
/// that the method can't cycle.
pub struct FirstProfitable;
impl PivotRule for FirstProfitable {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column<MP: MatrixProvider>(
        &mut self,
        tableau: &Tableau<MP>,
        solution: &BasicSolution<MP::F>,
    ) -> Option<(usize, MP::F)> {
        (0..tableau.nr_columns())
            .filter(|&column| !tableau.is_in_basis(column))
            .find_map(|column| tableau.profitable_relative_cost(column, solution).map(|cost| (column, cost)))
    }
}

/// Simply pivot on the column, which has the most negative relative cost.
///
/// The lowest column index is chosen on ties. Doesn't protect against cycling.
pub struct SteepestDescentAlongVariable;
impl PivotRule for SteepestDescentAlongVariable {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column<MP: MatrixProvider>(
        &mut self,
        tableau: &Tableau<MP>,
        solution: &BasicSolution<MP::F>,
    ) -> Option<(usize, MP::F)> {
        let mut smallest: Option<(usize, MP::F)> = None;
        for (j, cost) in (0..tableau.nr_columns())
            .filter(|&column| !tableau.is_in_basis(column))
            .filter_map(|column| tableau.profitable_relative_cost(column, solution).map(|cost| (column, cost))) {
            match smallest.as_mut() {
                Some((existing_j, existing_cost)) => if cost < *existing_cost {
                    *existing_j = j;
                    *existing_cost = cost;
                },
                None => smallest = Some((j, cost)),
            }
        }

        smallest
    }
}
