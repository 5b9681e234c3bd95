mod error;
mod problem;
mod refine;
mod simplex;
mod solution;

pub use error::SolverError;
pub use problem::LpProblem;
pub use refine::IntegerProgram;
pub use simplex::Solver;
pub use solution::{IntegerSolution, Outcome, Relaxation};

/// Solve the LP relaxation and, when it is fractional, fall back to the
/// bounded grid search over the two-variable integer program.
///
/// The relaxation is solved once and its result reused for the integrality
/// test and the integral outcome.
pub fn optimize(problem: &LpProblem) -> Result<Outcome, SolverError> {
    let solver = Solver::new();
    let relaxation = solver.solve(problem)?;
    if relaxation.is_integral(solver.tolerance()) {
        return Ok(Outcome::Integral(relaxation));
    }
    let refined = problem.integer_program()?.search()?;
    Ok(Outcome::Refined(refined))
}
