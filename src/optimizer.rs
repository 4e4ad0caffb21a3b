//! Abstract optimizer.

pub mod mombi;

use crate::{error::Error, population::Population};

/// Represents an abstract optimizer.
pub trait Optimizer<S, const N: usize>: Sized {
  /// Runs `Optimizer` until the termination condition is met, then returns
  /// the last found population together with its scores.
  fn optimize(self) -> Result<Population<S, N>, Error>;
}
