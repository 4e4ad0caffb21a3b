//! Ideal and nadir points of the explored objective space.

use crate::{
  score::{Score, Scores},
  utility::Normalizer,
};

/// Per-objective running best (ideal point) and worst (nadir point) values
/// seen across all evaluated solutions.
///
/// The ideal point starts at `+inf` and the nadir point at `-inf`. Both are
/// only ever tightened, so once at least one solution has been observed
/// `ideal[i] <= nadir[i]` holds for every objective.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ObjectiveBounds<const N: usize> {
  ideal: Scores<N>,
  nadir: Scores<N>,
}

impl<const N: usize> ObjectiveBounds<N> {
  /// Creates bounds that haven't observed any solution yet.
  pub fn new() -> Self {
    Self {
      ideal: [Score::INFINITY; N],
      nadir: [Score::NEG_INFINITY; N],
    }
  }

  /// Returns the ideal point.
  pub fn ideal(&self) -> &Scores<N> {
    &self.ideal
  }

  /// Returns the nadir point.
  pub fn nadir(&self) -> &Scores<N> {
    &self.nadir
  }

  /// Returns `true` if at least one solution has been observed.
  pub fn is_observed(&self) -> bool {
    self.ideal.iter().zip(&self.nadir).all(|(i, n)| i <= n)
  }

  /// Tightens both points with scores of a single solution.
  pub fn update(&mut self, scores: &Scores<N>) {
    for (o_idx, &score) in scores.iter().enumerate() {
      self.ideal[o_idx] = self.ideal[o_idx].min(score);
      self.nadir[o_idx] = self.nadir[o_idx].max(score);
    }
  }

  /// Tightens both points with scores of each given solution.
  pub fn update_all<'a>(
    &mut self,
    scores: impl IntoIterator<Item = &'a Scores<N>>,
  ) {
    scores.into_iter().for_each(|sc| self.update(sc));
  }

  /// Returns a [`Normalizer`] mapping the ideal point to `0` and the nadir
  /// point to `1`.
  pub fn normalizer(&self) -> Normalizer<N> {
    Normalizer::new(self.ideal, self.nadir)
  }
}

impl<const N: usize> Default for ObjectiveBounds<N> {
  fn default() -> Self {
    Self::new()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_unobserved_bounds() {
    let bounds = ObjectiveBounds::<3>::new();
    assert_eq!(bounds.ideal(), &[Score::INFINITY; 3]);
    assert_eq!(bounds.nadir(), &[Score::NEG_INFINITY; 3]);
    assert!(!bounds.is_observed());
  }

  #[test]
  fn test_bounds_update() {
    let mut bounds = ObjectiveBounds::new();
    bounds.update(&[1.0, 5.0]);
    bounds.update(&[3.0, 2.0]);
    assert_eq!(bounds.ideal(), &[1.0, 2.0]);
    assert_eq!(bounds.nadir(), &[3.0, 5.0]);
    assert!(bounds.is_observed());
  }

  #[test]
  fn test_bounds_update_order_independent() {
    let mut forward = ObjectiveBounds::new();
    forward.update_all(&[[1.0, 5.0], [3.0, 2.0]]);
    let mut backward = ObjectiveBounds::new();
    backward.update_all(&[[3.0, 2.0], [1.0, 5.0]]);
    assert_eq!(forward, backward);
    assert_eq!(forward.ideal(), &[1.0, 2.0]);
    assert_eq!(forward.nadir(), &[3.0, 5.0]);
  }

  #[test]
  fn test_bounds_are_monotone() {
    let mut bounds = ObjectiveBounds::new();
    bounds.update(&[0.0, 10.0]);
    bounds.update(&[5.0, 5.0]);
    assert_eq!(bounds.ideal(), &[0.0, 5.0]);
    assert_eq!(bounds.nadir(), &[5.0, 10.0]);
  }

  #[test]
  fn test_bounds_normalizer() {
    let mut bounds = ObjectiveBounds::new();
    bounds.update_all(&[[0.0, 2.0], [10.0, 2.0]]);
    let normalizer = bounds.normalizer();
    assert_eq!(normalizer.normalize(5.0, 0), 0.5);
    // degenerate objective passes through
    assert_eq!(normalizer.normalize(7.0, 1), 7.0);
  }
}
