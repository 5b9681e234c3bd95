use crate::error::SolverError;
use crate::solution::IntegerSolution;

/// Two-variable integer program truncated from the first two constraint
/// rows of an [`LpProblem`](crate::LpProblem): a 2x2 coefficient matrix,
/// the two RHS bounds, and the two objective coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegerProgram {
    pub a: [[i64; 2]; 2],
    pub b: [i64; 2],
    pub c: [i64; 2],
}

impl IntegerProgram {
    /// Evaluate the objective `c0*x + c1*y` at a point.
    pub fn objective_value(&self, x: i64, y: i64) -> i64 {
        self.c[0] * x + self.c[1] * y
    }

    fn is_feasible(&self, x: i64, y: i64) -> bool {
        (0..2).all(|i| self.a[i][0] * x + self.a[i][1] * y <= self.b[i])
    }

    /// Exhaustive scan of the grid `0..=b0` by `0..=b1` for the feasible
    /// point with the largest objective value.
    ///
    /// Only a strictly greater value replaces the incumbent, so ties go to
    /// the smallest `x`, then the smallest `y`. An empty feasible set is an
    /// [`Infeasible`](SolverError::Infeasible) error.
    pub fn search(&self) -> Result<IntegerSolution, SolverError> {
        let mut best: Option<IntegerSolution> = None;

        for x in 0..=self.b[0] {
            for y in 0..=self.b[1] {
                if !self.is_feasible(x, y) {
                    continue;
                }
                let objective_value = self.objective_value(x, y);
                let improves = match best {
                    Some(incumbent) => objective_value > incumbent.objective_value,
                    None => true,
                };
                if improves {
                    best = Some(IntegerSolution {
                        x,
                        y,
                        objective_value,
                    });
                }
            }
        }

        best.ok_or(SolverError::Infeasible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_finds_integer_optimum() {
        // Maximize 4x + 3y with 2x + y <= 5, x + 3y <= 6.
        // The LP optimum is fractional (1.8, 1.4); the best lattice point
        // is (2, 1) with value 11.
        let program = IntegerProgram {
            a: [[2, 1], [1, 3]],
            b: [5, 6],
            c: [4, 3],
        };

        let solution = program.search().unwrap();
        assert_eq!(solution.x, 2);
        assert_eq!(solution.y, 1);
        assert_eq!(solution.objective_value, 11);
    }

    #[test]
    fn test_zero_bounds_give_origin() {
        // Both RHS values zero: (0, 0) is the only candidate and must be
        // reported as a real solution, not an error.
        let program = IntegerProgram {
            a: [[1, 1], [1, 3]],
            b: [0, 0],
            c: [3, 2],
        };

        let solution = program.search().unwrap();
        assert_eq!(
            solution,
            IntegerSolution {
                x: 0,
                y: 0,
                objective_value: 0,
            }
        );
    }

    #[test]
    fn test_empty_region_is_infeasible() {
        // Negative bound empties the x range before any point is visited
        let program = IntegerProgram {
            a: [[1, 0], [0, 1]],
            b: [-1, 3],
            c: [1, 1],
        };

        assert_eq!(program.search().unwrap_err(), SolverError::Infeasible);
    }

    #[test]
    fn test_ties_keep_first_point() {
        // Zero objective: every feasible point ties, the scan keeps (0, 0)
        let program = IntegerProgram {
            a: [[1, 0], [0, 1]],
            b: [3, 3],
            c: [0, 0],
        };

        let solution = program.search().unwrap();
        assert_eq!((solution.x, solution.y), (0, 0));
    }

    #[test]
    fn test_objective_value_is_pure() {
        let program = IntegerProgram {
            a: [[2, 1], [1, 3]],
            b: [5, 6],
            c: [4, 3],
        };
        assert_eq!(program.objective_value(2, 1), 11);
        assert_eq!(program.objective_value(0, 0), 0);
    }
}
