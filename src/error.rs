//! Errors reported by optimizers and utility functions.

use crate::score::Score;

/// An error type that collaborators, such as problems and evaluators, report
/// their failures with. It is carried unchanged inside [`Error::Evaluation`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur while running an optimizer or evaluating utilities.
#[derive(Debug, thiserror::Error)]
pub enum Error {
  /// Evaluation of a population failed. The original error is available via
  /// [`source()`](std::error::Error::source).
  #[error("evaluation failed: {0}")]
  Evaluation(#[source] BoxError),
  /// An evaluator returned a different number of scores than the number of
  /// solutions it was given.
  #[error("evaluator returned {actual} scores for {expected} solutions")]
  ScoreCount {
    /// Number of evaluated solutions.
    expected: usize,
    /// Number of returned scores.
    actual: usize,
  },
  /// An evaluator returned a NaN or infinite objective value.
  #[error(
    "solution {solution} has a non-finite score {score} for objective \
     {objective}"
  )]
  NonFiniteScore {
    /// Index of the offending solution in the evaluated batch.
    solution: usize,
    /// Index of the offending objective.
    objective: usize,
    /// The offending value.
    score: Score,
  },
  /// A problem reported a constraint violation that is negative, NaN or
  /// infinite.
  #[error(
    "solution {solution} has an invalid constraint violation {violation}"
  )]
  InvalidConstraintViolation {
    /// Index of the offending solution in the evaluated batch.
    solution: usize,
    /// The offending value.
    violation: Score,
  },
  /// A replacement produced a population of unexpected size.
  #[error("replacement produced {actual} solutions, expected {expected}")]
  PopulationSize {
    /// Configured population size.
    expected: usize,
    /// Size of the produced population.
    actual: usize,
  },
  /// Weight vector index is out of range.
  #[error("weight vector index {index} is out of range for {len} vectors")]
  InvalidIndex {
    /// Requested index.
    index: usize,
    /// Number of weight vectors.
    len: usize,
  },
  /// A weight vector has a component that is not strictly positive.
  #[error(
    "weight vector {vector} has a non-positive weight {weight} for objective \
     {objective}"
  )]
  NonPositiveWeight {
    /// Index of the offending weight vector.
    vector: usize,
    /// Index of the offending objective.
    objective: usize,
    /// The offending value.
    weight: Score,
  },
  /// A weight vector set without vectors.
  #[error("weight vector set is empty")]
  EmptyWeightVectorSet,
}
