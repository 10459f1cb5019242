//! # Error reporting
//!
//! Infeasibility and unboundedness are not errors; they are ordinary outcomes of an
//! optimization and are represented by `OptimizationResult`. The types in this module describe
//! malformed input and violated internal invariants.
use std::error::Error;
use std::fmt;
use std::fmt::Display;

/// A `ValidationError` is created when the input describing a problem is malformed.
///
/// It is a defect of the caller; solving the same input again will fail in the same way.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ValidationError {
    /// The number of constraint values differs from the number of constraint rows.
    ConstraintValueCount {
        /// Number of rows of the constraint matrix.
        nr_rows: usize,
        /// Length of the constraint value vector.
        nr_constraint_values: usize,
    },
    /// A constraint row doesn't have one coefficient per variable.
    RowLength {
        /// Index of the offending row.
        row: usize,
        /// Number of variables, the length of the cost vector.
        expected: usize,
        /// Length of the offending row.
        actual: usize,
    },
    /// A cost, coefficient or constraint value is NaN or infinite.
    NotFinite {
        /// Where the value was found, for the end user.
        location: String,
    },
    /// A capacity matrix is not square.
    NotSquare {
        /// Number of rows (vertices).
        nr_rows: usize,
        /// Index of the first row of a different length.
        row: usize,
        /// Length of that row.
        length: usize,
    },
    /// An arc has a negative capacity.
    NegativeCapacity {
        /// Vertex the arc leaves.
        from: usize,
        /// Vertex the arc enters.
        to: usize,
    },
    /// The source or sink isn't a vertex of the network.
    Terminal {
        /// The offending vertex index.
        vertex: usize,
        /// Number of vertices in the network.
        nr_vertices: usize,
    },
    /// Source and sink coincide.
    SourceIsSink(usize),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ValidationError::ConstraintValueCount { nr_rows, nr_constraint_values } => write!(
                f, "constraint matrix has {} rows, but {} constraint values were given",
                nr_rows, nr_constraint_values,
            ),
            ValidationError::RowLength { row, expected, actual } => write!(
                f, "row {} of the constraint matrix has length {}, expected {}", row, actual, expected,
            ),
            ValidationError::NotFinite { location } => write!(f, "value is not finite: {}", location),
            ValidationError::NotSquare { nr_rows, row, length } => write!(
                f, "capacity matrix is not square: {} rows, but row {} has length {}",
                nr_rows, row, length,
            ),
            ValidationError::NegativeCapacity { from, to } => write!(
                f, "arc ({}, {}) has a negative capacity", from, to,
            ),
            ValidationError::Terminal { vertex, nr_vertices } => write!(
                f, "terminal {} is not a vertex of a network with {} vertices", vertex, nr_vertices,
            ),
            ValidationError::SourceIsSink(vertex) => write!(
                f, "source and sink are both vertex {}", vertex,
            ),
        }
    }
}

impl Error for ValidationError {}

/// A `SolveError` aborts a solve without a result.
///
/// Except for `Validation` and `NonConvergence`, the variants describe internal invariant
/// violations that can't occur when the constraint matrix has full row rank.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum SolveError {
    /// The problem description is malformed.
    Validation(ValidationError),
    /// The matrix selected by the basis indices could not be inverted.
    SingularBasis {
        /// The (sorted) basis column indices.
        basis: Vec<usize>,
    },
    /// Artificial variables could not be driven out of the basis after the first phase.
    DegenerateBasis {
        /// Number of linearly independent columns that were found.
        found: usize,
        /// Number of columns needed, the number of rows.
        needed: usize,
    },
    /// The auxiliary problem of the first phase was found to be unbounded, even though its
    /// cost is bounded below by zero.
    UnboundedAuxiliary,
    /// The iteration limit was exceeded.
    NonConvergence {
        /// Number of pivots performed before giving up.
        iterations: usize,
    },
}

impl Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SolveError::Validation(error) => error.fmt(f),
            SolveError::SingularBasis { basis } => write!(f, "basis {:?} is singular", basis),
            SolveError::DegenerateBasis { found, needed } => write!(
                f, "only {} of {} linearly independent basis columns could be found", found, needed,
            ),
            SolveError::UnboundedAuxiliary => f.write_str("artificial cost can not be unbounded"),
            SolveError::NonConvergence { iterations } => write!(
                f, "no convergence after {} iterations", iterations,
            ),
        }
    }
}

impl Error for SolveError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SolveError::Validation(error) => Some(error),
            _ => None,
        }
    }
}

impl From<ValidationError> for SolveError {
    fn from(error: ValidationError) -> Self {
        SolveError::Validation(error)
    }
}
