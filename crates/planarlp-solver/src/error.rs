use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Problem has no constraints")]
    NoConstraints,
    #[error("Problem has no variables")]
    NoVariables,
    #[error("Constraint {index} has {found} fields, expected {expected} (coefficients plus right-hand side)")]
    RowLengthMismatch {
        index: usize,
        expected: usize,
        found: usize,
    },
    #[error("Objective is unbounded: pivot column {column} has no positive entry")]
    Unbounded { column: usize },
    #[error("Pivoting did not converge within {0} iterations")]
    IterationLimit(usize),
    #[error("Integer refinement needs exactly 2 variables and at least 2 constraints, got {variables} and {constraints}")]
    NotTwoVariable {
        variables: usize,
        constraints: usize,
    },
    #[error("No feasible integer point in the search region")]
    Infeasible,
}
