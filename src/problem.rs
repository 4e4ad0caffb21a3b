//! Optimization problems.

use crate::{
  error::BoxError,
  score::{Score, Scores},
};

/// A many-objective optimization problem with `N` objectives to minimize.
///
/// A problem knows how to create a new candidate solution and how to compute
/// its objective values. Evaluation may fail, in which case the optimizer
/// stops and reports the error as the source of
/// [`Error::Evaluation`](crate::error::Error::Evaluation).
///
/// Constrained problems also override
/// [`constraint_violation`](Problem::constraint_violation).
///
/// # Examples
/// ```
/// # use mombi::{error::BoxError, problem::Problem, score::Scores};
/// struct Schaffer;
///
/// impl Problem<f64, 2> for Schaffer {
///   fn create_solution(&self) -> f64 {
///     0.0
///   }
///
///   fn evaluate(&self, x: &f64) -> Result<Scores<2>, BoxError> {
///     Ok([x.powi(2), (x - 2.0).powi(2)])
///   }
/// }
/// assert_eq!(Schaffer.number_of_objectives(), 2);
/// assert_eq!(Schaffer.constraint_violation(&1.0), 0.0);
/// ```
///
/// Constraints `g(x) >= 0` contribute the amount by which they are violated:
/// ```
/// # use mombi::{error::BoxError, problem::Problem, score::{Score, Scores}};
/// struct Binh2;
///
/// impl Problem<[f64; 2], 2> for Binh2 {
///   fn create_solution(&self) -> [f64; 2] {
///     [0.0, 0.0]
///   }
///
///   fn evaluate(&self, &[x, y]: &[f64; 2]) -> Result<Scores<2>, BoxError> {
///     Ok([4.0 * x * x + 4.0 * y * y, (x - 5.0).powi(2) + (y - 5.0).powi(2)])
///   }
///
///   fn constraint_violation(&self, &[x, y]: &[f64; 2]) -> Score {
///     let g1 = 25.0 - (x - 5.0).powi(2) - y * y;
///     let g2 = (x - 8.0).powi(2) + (y + 3.0).powi(2) - 7.7;
///     -g1.min(0.0) - g2.min(0.0)
///   }
/// }
/// assert_eq!(Binh2.constraint_violation(&[0.0, 0.0]), 0.0);
/// assert_eq!(Binh2.constraint_violation(&[10.0, 5.0]), 25.0);
/// ```
pub trait Problem<S, const N: usize> {
  /// Creates a new, not yet evaluated, solution.
  fn create_solution(&self) -> S;

  /// Computes objective values of given solution.
  fn evaluate(&self, solution: &S) -> Result<Scores<N>, BoxError>;

  /// Returns the overall constraint violation of given solution. Zero means
  /// the solution is feasible, a positive value tells how far it is from
  /// being feasible, for example the sum of amounts by which each constraint
  /// is violated. Negative, NaN or infinite values are reported as
  /// [`Error::InvalidConstraintViolation`](crate::error::Error::InvalidConstraintViolation).
  ///
  /// Feasible solutions are always preferred to infeasible ones, see
  /// [`constrained_non_dominated_fronts`](crate::ranking::constrained_non_dominated_fronts).
  /// By default every solution is feasible.
  fn constraint_violation(&self, _solution: &S) -> Score {
    0.0
  }

  /// Returns the number of objectives.
  fn number_of_objectives(&self) -> usize {
    N
  }
}
