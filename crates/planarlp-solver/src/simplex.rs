use crate::error::SolverError;
use crate::problem::LpProblem;
use crate::solution::Relaxation;

/// Primal simplex solver for `A x <= b` maximization problems
pub struct Solver {
    /// Maximum pivots before giving up
    max_iterations: usize,
    /// Tolerance for the integrality test
    tolerance: f64,
}

impl Default for Solver {
    fn default() -> Self {
        Self {
            max_iterations: 10000,
            tolerance: 1e-6,
        }
    }
}

impl Solver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_iterations(mut self, max: usize) -> Self {
        self.max_iterations = max;
        self
    }

    pub fn with_tolerance(mut self, tol: f64) -> Self {
        self.tolerance = tol;
        self
    }

    /// Solve the LP relaxation to optimality.
    ///
    /// Returns the basic value of each constraint row, read positionally
    /// from the tableau's RHS column.
    pub fn solve(&self, problem: &LpProblem) -> Result<Relaxation, SolverError> {
        problem.validate()?;
        let mut tableau = Tableau::build(problem);

        for _ in 0..self.max_iterations {
            if tableau.is_optimal() {
                return Ok(tableau.extract());
            }
            let pivot_col = tableau.find_pivot_column();
            let pivot_row = tableau
                .find_pivot_row(pivot_col)
                .ok_or(SolverError::Unbounded { column: pivot_col })?;
            tableau.pivot(pivot_row, pivot_col);
        }

        Err(SolverError::IterationLimit(self.max_iterations))
    }

    /// Solve and test whether every basic value is integral.
    pub fn has_integer_solution(&self, problem: &LpProblem) -> Result<bool, SolverError> {
        Ok(self.solve(problem)?.is_integral(self.tolerance))
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }
}

/// Working matrix for one solve call: `m + 1` rows by `n + m + 1` columns,
/// holding the constraint coefficients, a slack identity block, the RHS
/// column, and the negated-objective reduced-cost row.
struct Tableau {
    data: Vec<Vec<f64>>,
    n_constraints: usize,
}

impl Tableau {
    /// Expects a validated problem.
    fn build(problem: &LpProblem) -> Self {
        let m = problem.num_constraints();
        let n = problem.num_variables();
        let mut data = vec![vec![0.0; n + m + 1]; m + 1];

        for (i, row) in problem.constraints.iter().enumerate() {
            for j in 0..n {
                data[i][j] = row[j];
            }
            data[i][n + i] = 1.0; // one slack per `<=` constraint
            data[i][n + m] = row[n];
        }

        for (j, &coef) in problem.objective.iter().enumerate() {
            data[m][j] = -coef;
        }

        Self {
            data,
            n_constraints: m,
        }
    }

    /// Optimal when no reduced cost is negative. Scans every column but the
    /// RHS, slack columns included.
    fn is_optimal(&self) -> bool {
        let obj_row = &self.data[self.n_constraints];
        obj_row[..obj_row.len() - 1].iter().all(|&cost| cost >= 0.0)
    }

    /// Column with the most negative reduced cost; ties go to the smallest
    /// index. Column 0 is the initial incumbent, so comparisons start at 1.
    fn find_pivot_column(&self) -> usize {
        let obj_row = &self.data[self.n_constraints];
        let mut pivot_col = 0;
        for j in 1..obj_row.len() - 1 {
            if obj_row[j] < obj_row[pivot_col] {
                pivot_col = j;
            }
        }
        pivot_col
    }

    /// Row minimizing RHS / entry over rows with a strictly positive entry
    /// in the pivot column; ties go to the smallest index. `None` means the
    /// objective is unbounded along this column.
    fn find_pivot_row(&self, col: usize) -> Option<usize> {
        let rhs_col = self.data[0].len() - 1;
        let mut min_ratio = f64::INFINITY;
        let mut min_row = None;

        for i in 0..self.n_constraints {
            let entry = self.data[i][col];
            if entry > 0.0 {
                let ratio = self.data[i][rhs_col] / entry;
                if ratio < min_ratio {
                    min_ratio = ratio;
                    min_row = Some(i);
                }
            }
        }

        min_row
    }

    /// Gauss-Jordan step: normalize the pivot row, then zero the pivot
    /// column in every other row.
    fn pivot(&mut self, row: usize, col: usize) {
        let n_cols = self.data[0].len();

        let pivot_val = self.data[row][col];
        for j in 0..n_cols {
            self.data[row][j] /= pivot_val;
        }

        for i in 0..self.data.len() {
            if i != row {
                let factor = self.data[i][col];
                for j in 0..n_cols {
                    self.data[i][j] -= factor * self.data[row][j];
                }
            }
        }
    }

    fn extract(&self) -> Relaxation {
        let rhs_col = self.data[0].len() - 1;
        let values = (0..self.n_constraints)
            .map(|i| self.data[i][rhs_col])
            .collect();
        Relaxation {
            values,
            objective_value: self.data[self.n_constraints][rhs_col],
        }
    }
}
