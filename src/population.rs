//! Evaluated populations of solutions.

use crate::score::{Score, Scores};

/// An insertion-ordered population of solutions together with their scores
/// and overall constraint violations. The `i`-th score and the `i`-th
/// violation always belong to the `i`-th solution.
#[derive(Clone, PartialEq, Debug)]
pub struct Population<S, const N: usize> {
  solutions: Vec<S>,
  scores: Vec<Scores<N>>,
  violations: Vec<Score>,
}

impl<S, const N: usize> Population<S, N> {
  /// Creates a population of feasible solutions from solutions and their
  /// respective scores.
  ///
  /// # Panics
  ///
  /// Panics if the number of solutions differs from the number of scores.
  pub fn new(solutions: Vec<S>, scores: Vec<Scores<N>>) -> Self {
    let violations = vec![0.0; solutions.len()];
    Self::with_violations(solutions, scores, violations)
  }

  /// Creates a population from solutions, their respective scores and
  /// overall constraint violations.
  ///
  /// # Panics
  ///
  /// Panics if the number of solutions differs from the number of scores or
  /// from the number of violations.
  pub fn with_violations(
    solutions: Vec<S>,
    scores: Vec<Scores<N>>,
    violations: Vec<Score>,
  ) -> Self {
    assert_eq!(
      solutions.len(),
      scores.len(),
      "number of solutions must match number of scores"
    );
    assert_eq!(
      solutions.len(),
      violations.len(),
      "number of solutions must match number of violations"
    );
    Self {
      solutions,
      scores,
      violations,
    }
  }

  /// Returns the number of solutions.
  pub fn len(&self) -> usize {
    self.solutions.len()
  }

  /// Returns `true` if there are no solutions.
  pub fn is_empty(&self) -> bool {
    self.solutions.is_empty()
  }

  /// Returns a slice of solutions.
  pub fn solutions(&self) -> &[S] {
    &self.solutions
  }

  /// Returns a slice of scores.
  pub fn scores(&self) -> &[Scores<N>] {
    &self.scores
  }

  /// Returns a slice of overall constraint violations, zero for feasible
  /// solutions.
  pub fn violations(&self) -> &[Score] {
    &self.violations
  }

  /// Returns `true` if the solution at `index` violates no constraints.
  ///
  /// # Panics
  ///
  /// Panics if `index` is out of bounds.
  pub fn is_feasible(&self, index: usize) -> bool {
    self.violations[index] <= 0.0
  }

  /// Iterates over pairs of solutions and their scores.
  pub fn iter(&self) -> impl Iterator<Item = (&S, &Scores<N>)> {
    self.solutions.iter().zip(&self.scores)
  }

  /// Moves solutions and scores out of the population.
  pub fn into_parts(self) -> (Vec<S>, Vec<Scores<N>>) {
    (self.solutions, self.scores)
  }

  /// Appends all solutions of `other` to this population.
  pub fn merge(&mut self, mut other: Self) {
    self.solutions.append(&mut other.solutions);
    self.scores.append(&mut other.scores);
    self.violations.append(&mut other.violations);
  }

  /// Builds a new population out of solutions at given indices, preserving
  /// the order of `indices`.
  ///
  /// # Panics
  ///
  /// Panics if an index is out of bounds or occurs more than once.
  pub fn pick(self, indices: &[usize]) -> Self {
    let mut some_solutions: Vec<_> =
      self.solutions.into_iter().map(Some).collect();
    let solutions = indices
      .iter()
      .map(|&idx| some_solutions[idx].take().expect("index picked twice"))
      .collect();
    let scores = indices.iter().map(|&idx| self.scores[idx]).collect();
    let violations = indices.iter().map(|&idx| self.violations[idx]).collect();
    Self {
      solutions,
      scores,
      violations,
    }
  }
}
