//! Scalarizing utility functions.
//!
//! A utility function turns an objective vector into a single value relative
//! to one of several weight vectors, each describing a direction in objective
//! space. The smaller the utility, the better a solution is aligned with that
//! direction. [`AsfUtilityFunctionSet`] implements the Achievement Scalarizing
//! Function:
//!
//! `u(f, w) = max_i |f_i - z_i| / w_i`
//!
//! where `z` is a reference point and `f` is an optionally normalized
//! objective vector.

use crate::{
  error::Error,
  score::{Score, Scores},
};

/// Maps objective values onto `[0, 1]` given per-objective minimum and maximum
/// values.
///
/// Objectives with zero range are degenerate and their values pass through
/// unchanged.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Normalizer<const N: usize> {
  min: Scores<N>,
  max: Scores<N>,
}

impl<const N: usize> Normalizer<N> {
  /// Creates a normalizer from per-objective minimums and maximums.
  pub fn new(min: Scores<N>, max: Scores<N>) -> Self {
    Self { min, max }
  }

  /// Normalizes a value of objective `index`.
  ///
  /// # Panics
  ///
  /// Panics if `index >= N`.
  pub fn normalize(&self, value: Score, index: usize) -> Score {
    let diff = self.max[index] - self.min[index];
    if diff == 0.0 {
      value
    } else {
      (value - self.min[index]) / diff
    }
  }

  /// Normalizes each value of an objective vector.
  pub fn normalize_all(&self, scores: &Scores<N>) -> Scores<N> {
    std::array::from_fn(|i| self.normalize(scores[i], i))
  }
}

/// An immutable ordered set of weight vectors with strictly positive
/// components.
#[derive(Clone, PartialEq, Debug)]
pub struct WeightVectorSet<const N: usize> {
  vectors: Vec<Scores<N>>,
}

impl<const N: usize> WeightVectorSet<N> {
  /// Creates a set from already loaded weight vectors.
  ///
  /// Returns an error if there are no vectors or if any weight isn't strictly
  /// positive, since a zero weight would make utilities divide by zero.
  pub fn new(vectors: Vec<Scores<N>>) -> Result<Self, Error> {
    if vectors.is_empty() {
      return Err(Error::EmptyWeightVectorSet);
    }
    for (v_idx, vector) in vectors.iter().enumerate() {
      if let Some((o_idx, &weight)) =
        vector.iter().enumerate().find(|(_, w)| !(**w > 0.0))
      {
        return Err(Error::NonPositiveWeight {
          vector: v_idx,
          objective: o_idx,
          weight,
        });
      }
    }
    Ok(Self { vectors })
  }

  /// Returns the number of weight vectors.
  pub fn len(&self) -> usize {
    self.vectors.len()
  }

  /// Returns `true` if the set has no weight vectors.
  pub fn is_empty(&self) -> bool {
    self.vectors.is_empty()
  }

  /// Returns the weight vector at `index`, if any.
  pub fn get(&self, index: usize) -> Option<&Scores<N>> {
    self.vectors.get(index)
  }

  /// Iterates over weight vectors in order.
  pub fn iter(&self) -> impl Iterator<Item = &Scores<N>> {
    self.vectors.iter()
  }
}

/// A set of scalar utility functions, one per weight vector.
pub trait UtilityFunctionSet<const N: usize> {
  /// Returns the number of utility functions in the set.
  fn len(&self) -> usize;

  /// Returns `true` if the set has no utility functions.
  fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Returns utility of an objective vector with respect to the weight vector
  /// at `index`. Smaller is better.
  ///
  /// Fails with [`Error::InvalidIndex`] if `index >= self.len()`.
  fn evaluate(&self, scores: &Scores<N>, index: usize) -> Result<Score, Error>;
}

/// Achievement Scalarizing Function utilities built on a [`WeightVectorSet`],
/// a reference point and an optional [`Normalizer`].
#[derive(Clone, PartialEq, Debug)]
pub struct AsfUtilityFunctionSet<const N: usize> {
  weights: WeightVectorSet<N>,
  reference_point: Scores<N>,
  normalizer: Option<Normalizer<N>>,
}

impl<const N: usize> AsfUtilityFunctionSet<N> {
  /// Creates a set without a normalizer, so raw objective values are used.
  pub fn new(weights: WeightVectorSet<N>, reference_point: Scores<N>) -> Self {
    Self {
      weights,
      reference_point,
      normalizer: None,
    }
  }

  /// Attaches a normalizer that is applied to objective values before they
  /// are compared against the reference point.
  pub fn set_normalizer(&mut self, normalizer: Normalizer<N>) {
    self.normalizer = Some(normalizer);
  }

  /// Returns the attached normalizer, if any.
  pub fn normalizer(&self) -> Option<&Normalizer<N>> {
    self.normalizer.as_ref()
  }

  /// Returns the reference point.
  pub fn reference_point(&self) -> &Scores<N> {
    &self.reference_point
  }

  /// Returns the weight vectors.
  pub fn weights(&self) -> &WeightVectorSet<N> {
    &self.weights
  }
}

impl<const N: usize> UtilityFunctionSet<N> for AsfUtilityFunctionSet<N> {
  fn len(&self) -> usize {
    self.weights.len()
  }

  fn evaluate(&self, scores: &Scores<N>, index: usize) -> Result<Score, Error> {
    let weights = self.weights.get(index).ok_or(Error::InvalidIndex {
      index,
      len: self.weights.len(),
    })?;
    let values = match &self.normalizer {
      Some(normalizer) => normalizer.normalize_all(scores),
      None => *scores,
    };
    Ok(
      values
        .iter()
        .zip(&self.reference_point)
        .zip(weights)
        .map(|((v, z), w)| (v - z).abs() / w)
        .fold(Score::NEG_INFINITY, Score::max),
    )
  }
}
