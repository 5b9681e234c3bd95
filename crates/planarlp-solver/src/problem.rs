use crate::error::SolverError;
use crate::refine::IntegerProgram;

/// A maximization problem in the form `A x <= b`, `x >= 0`
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LpProblem {
    /// Constraint rows: one coefficient per variable, then the RHS bound
    pub constraints: Vec<Vec<f64>>,
    /// Objective coefficients, one per variable
    pub objective: Vec<f64>,
}

impl LpProblem {
    pub fn new(constraints: Vec<Vec<f64>>, objective: Vec<f64>) -> Result<Self, SolverError> {
        let problem = Self {
            constraints,
            objective,
        };
        problem.validate()?;
        Ok(problem)
    }

    /// Check the problem shape: at least one constraint and one variable,
    /// every row exactly one field longer than the objective.
    ///
    /// The fields are public (and deserializable), so the solver re-checks
    /// this before building a tableau.
    pub fn validate(&self) -> Result<(), SolverError> {
        if self.constraints.is_empty() {
            return Err(SolverError::NoConstraints);
        }
        if self.objective.is_empty() {
            return Err(SolverError::NoVariables);
        }
        let expected = self.objective.len() + 1;
        for (index, row) in self.constraints.iter().enumerate() {
            if row.len() != expected {
                return Err(SolverError::RowLengthMismatch {
                    index,
                    expected,
                    found: row.len(),
                });
            }
        }
        Ok(())
    }

    pub fn num_variables(&self) -> usize {
        self.objective.len()
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// Truncate the first two constraints and objective coefficients into the
    /// small integer program used by the refinement search.
    ///
    /// Only defined for exactly 2 variables and at least 2 constraints; the
    /// grid search is specialized to that case.
    pub fn integer_program(&self) -> Result<IntegerProgram, SolverError> {
        self.validate()?;
        if self.num_variables() != 2 || self.num_constraints() < 2 {
            return Err(SolverError::NotTwoVariable {
                variables: self.num_variables(),
                constraints: self.num_constraints(),
            });
        }
        let a = [
            [self.constraints[0][0] as i64, self.constraints[0][1] as i64],
            [self.constraints[1][0] as i64, self.constraints[1][1] as i64],
        ];
        let b = [self.constraints[0][2] as i64, self.constraints[1][2] as i64];
        let c = [self.objective[0] as i64, self.objective[1] as i64];
        Ok(IntegerProgram { a, b, c })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_constraints() {
        let result = LpProblem::new(vec![], vec![1.0, 2.0]);
        assert_eq!(result.unwrap_err(), SolverError::NoConstraints);
    }

    #[test]
    fn test_rejects_empty_objective() {
        let result = LpProblem::new(vec![vec![1.0]], vec![]);
        assert_eq!(result.unwrap_err(), SolverError::NoVariables);
    }

    #[test]
    fn test_rejects_ragged_rows() {
        let result = LpProblem::new(
            vec![vec![1.0, 1.0, 4.0], vec![1.0, 3.0]],
            vec![3.0, 2.0],
        );
        assert_eq!(
            result.unwrap_err(),
            SolverError::RowLengthMismatch {
                index: 1,
                expected: 3,
                found: 2,
            }
        );
    }

    #[test]
    fn test_integer_program_truncates() {
        let problem = LpProblem::new(
            vec![vec![2.0, 1.5, 5.9], vec![1.0, 3.0, 6.0]],
            vec![4.0, 3.7],
        )
        .unwrap();

        let program = problem.integer_program().unwrap();
        assert_eq!(program.a, [[2, 1], [1, 3]]);
        assert_eq!(program.b, [5, 6]);
        assert_eq!(program.c, [4, 3]);
    }

    #[test]
    fn test_integer_program_needs_two_variables() {
        let problem = LpProblem::new(
            vec![vec![1.0, 1.0, 1.0, 4.0], vec![1.0, 3.0, 0.0, 6.0]],
            vec![3.0, 2.0, 1.0],
        )
        .unwrap();

        assert_eq!(
            problem.integer_program().unwrap_err(),
            SolverError::NotTwoVariable {
                variables: 3,
                constraints: 2,
            }
        );
    }
}
