//! Population evaluation strategies.
//!
//! An [`Evaluator`] computes scores for a whole population by delegating to
//! [`Problem::evaluate`]. The order of returned scores always matches the
//! order of given solutions.

use rayon::prelude::*;

use crate::{error::BoxError, problem::Problem, score::Scores};

/// Evaluates all solutions of a population against a problem.
///
/// Implemented by [`SequentialEvaluator`], [`ParallelEachEvaluator`],
/// [`ParallelBatchEvaluator`] and by closures of type
/// `Fn(&[S], &P) -> Result<Vec<Scores<N>>, BoxError>`.
///
/// **Note that you always can implement this trait instead of using closures.**
pub trait Evaluator<S, P, const N: usize> {
  /// Returns scores of each given solution.
  ///
  /// Must return exactly one score per solution, otherwise the optimizer
  /// fails with [`Error::ScoreCount`](crate::error::Error::ScoreCount).
  fn evaluate(
    &self,
    solutions: &[S],
    problem: &P,
  ) -> Result<Vec<Scores<N>>, BoxError>;
}

impl<S, P, const N: usize, F> Evaluator<S, P, N> for F
where
  F: Fn(&[S], &P) -> Result<Vec<Scores<N>>, BoxError>,
{
  fn evaluate(
    &self,
    solutions: &[S],
    problem: &P,
  ) -> Result<Vec<Scores<N>>, BoxError> {
    self(solutions, problem)
  }
}

/// Evaluates solutions one by one, no parallelization involved.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct SequentialEvaluator;

impl<S, P, const N: usize> Evaluator<S, P, N> for SequentialEvaluator
where
  P: Problem<S, N>,
{
  fn evaluate(
    &self,
    solutions: &[S],
    problem: &P,
  ) -> Result<Vec<Scores<N>>, BoxError> {
    solutions.iter().map(|s| problem.evaluate(s)).collect()
  }
}

/// Evaluates **each** solution in parallel.
///
/// **Parallelization is implemented with [rayon]. As a result, for simple
/// problems, parallelization may only decrease performance because of
/// additional overhead introduced. Benchmark if in doubt.**
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct ParallelEachEvaluator;

impl<S, P, const N: usize> Evaluator<S, P, N> for ParallelEachEvaluator
where
  S: Sync,
  P: Problem<S, N> + Sync,
{
  fn evaluate(
    &self,
    solutions: &[S],
    problem: &P,
  ) -> Result<Vec<Scores<N>>, BoxError> {
    solutions.par_iter().map(|s| problem.evaluate(s)).collect()
  }
}

/// Evaluates **batches** of solutions in parallel. The evaluator splits the
/// work equally for each available thread.
///
/// **Parallelization is implemented with [rayon]. As a result, for simple
/// problems, parallelization may only decrease performance because of
/// additional overhead introduced. Benchmark if in doubt.**
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct ParallelBatchEvaluator;

impl<S, P, const N: usize> Evaluator<S, P, N> for ParallelBatchEvaluator
where
  S: Sync,
  P: Problem<S, N> + Sync,
{
  fn evaluate(
    &self,
    solutions: &[S],
    problem: &P,
  ) -> Result<Vec<Scores<N>>, BoxError> {
    let chunk_size = (solutions.len() / rayon::current_num_threads()).max(1);
    let batches = solutions
      .par_chunks(chunk_size)
      .map(|chunk| {
        chunk
          .iter()
          .map(|s| problem.evaluate(s))
          .collect::<Result<Vec<_>, _>>()
      })
      .collect::<Result<Vec<_>, _>>()?;
    Ok(batches.into_iter().flatten().collect())
  }
}
