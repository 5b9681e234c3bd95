/// Continuous optimum of one simplex solve.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Relaxation {
    /// Basic value of each constraint row, read from the tableau's RHS
    /// column after convergence. Entry `i` is whatever variable ended up
    /// basic in row `i`, not necessarily decision variable `i`.
    pub values: Vec<f64>,
    /// Objective value at the optimum
    pub objective_value: f64,
}

impl Relaxation {
    /// True when every basic value is within `tolerance` of an integer.
    pub fn is_integral(&self, tolerance: f64) -> bool {
        self.values
            .iter()
            .all(|value| (value - value.round()).abs() <= tolerance)
    }
}

/// Best feasible point found by the integer refinement search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct IntegerSolution {
    pub x: i64,
    pub y: i64,
    pub objective_value: i64,
}

/// Result of the full solve pipeline.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Outcome {
    /// The relaxation was already integral; no refinement needed
    Integral(Relaxation),
    /// The relaxation was fractional; the grid search found this optimum
    Refined(IntegerSolution),
}
