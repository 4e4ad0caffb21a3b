//! Replacement strategies deciding which solutions survive a generation.

use log::trace;
use rand::prelude::*;

use crate::{
  bounds::ObjectiveBounds,
  error::Error,
  niching::{associate, niche_select},
  population::Population,
  ranking::{constrained_non_dominated_fronts, utility_ranking},
  reference_point::ReferencePoint,
  utility::AsfUtilityFunctionSet,
};

/// Builds the next population out of the current population and its freshly
/// evaluated offsprings.
///
/// The optimizer expects the returned population to have as many solutions as
/// `current` and reports [`Error::PopulationSize`] otherwise. `bounds` already
/// include every score of both populations.
///
/// # Examples
/// Any `FnMut` closure with a matching signature is a `Replacement`.
/// ```
/// # use mombi::{
/// #   bounds::ObjectiveBounds, error::Error, population::Population,
/// #   replacement::Replacement,
/// # };
/// // keeps the current population forever
/// let mut keep = |current: Population<char, 1>,
///                 _: Population<char, 1>,
///                 _: &ObjectiveBounds<1>|
///  -> Result<Population<char, 1>, Error> { Ok(current) };
/// let current = Population::new(vec!['a'], vec![[1.0]]);
/// let offspring = Population::new(vec!['b'], vec![[0.0]]);
/// let next = keep
///   .replace(current, offspring, &ObjectiveBounds::new())
///   .unwrap();
/// assert_eq!(next.solutions(), &['a']);
/// ```
pub trait Replacement<S, const N: usize> {
  /// Returns the population of the next generation.
  fn replace(
    &mut self,
    current: Population<S, N>,
    offspring: Population<S, N>,
    bounds: &ObjectiveBounds<N>,
  ) -> Result<Population<S, N>, Error>;
}

impl<S, const N: usize, F> Replacement<S, N> for F
where
  F: FnMut(
    Population<S, N>,
    Population<S, N>,
    &ObjectiveBounds<N>,
  ) -> Result<Population<S, N>, Error>,
{
  fn replace(
    &mut self,
    current: Population<S, N>,
    offspring: Population<S, N>,
    bounds: &ObjectiveBounds<N>,
  ) -> Result<Population<S, N>, Error> {
    self(current, offspring, bounds)
  }
}

/// Generational replacement: offsprings replace the whole current population.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct OffspringReplacement;

impl<S, const N: usize> Replacement<S, N> for OffspringReplacement {
  fn replace(
    &mut self,
    _: Population<S, N>,
    offspring: Population<S, N>,
    _: &ObjectiveBounds<N>,
  ) -> Result<Population<S, N>, Error> {
    Ok(offspring)
  }
}

/// Keeps the best solutions of both populations according to their ASF
/// utility ranks, see [`utility_ranking`].
///
/// Before each ranking the utilities are normalized by the current ideal and
/// nadir points. Ties in rank are resolved by the smaller utility. Solutions
/// with smaller constraint violations always go first, so ranks only order
/// solutions that are equally feasible.
#[derive(Clone, PartialEq, Debug)]
pub struct UtilityReplacement<const N: usize> {
  utilities: AsfUtilityFunctionSet<N>,
}

impl<const N: usize> UtilityReplacement<N> {
  /// Creates a replacement ranking solutions with given utilities.
  pub fn new(utilities: AsfUtilityFunctionSet<N>) -> Self {
    Self { utilities }
  }

  /// Returns the utilities, normalized by the bounds of the last replacement.
  pub fn utilities(&self) -> &AsfUtilityFunctionSet<N> {
    &self.utilities
  }
}

impl<S, const N: usize> Replacement<S, N> for UtilityReplacement<N> {
  fn replace(
    &mut self,
    mut current: Population<S, N>,
    offspring: Population<S, N>,
    bounds: &ObjectiveBounds<N>,
  ) -> Result<Population<S, N>, Error> {
    let size = current.len();
    current.merge(offspring);
    self.utilities.set_normalizer(bounds.normalizer());
    let ranks = utility_ranking(current.scores(), &self.utilities)?;
    let violations = current.violations();

    let mut indices: Vec<_> = (0..current.len()).collect();
    indices.sort_by(|&a, &b| {
      violations[a]
        .total_cmp(&violations[b])
        .then(ranks[a].0.cmp(&ranks[b].0))
        .then(ranks[a].1.total_cmp(&ranks[b].1))
    });
    indices.truncate(size);
    Ok(current.pick(&indices))
  }
}

/// Keeps whole non-dominated fronts of both populations while they fit and
/// fills the rest from the first front that doesn't fit by niching on
/// reference points, NSGA-III style.
///
/// Fronts are sorted by constrained dominance, see
/// [`constrained_non_dominated_fronts`], so feasible solutions survive before
/// infeasible ones.
#[derive(Clone, Debug)]
pub struct NichingReplacement<const N: usize> {
  points: Vec<ReferencePoint<N>>,
  rng: StdRng,
}

impl<const N: usize> NichingReplacement<N> {
  /// Creates a replacement niching on given reference points, usually made by
  /// [`ReferencePoint::generate`].
  ///
  /// # Panics
  ///
  /// Panics if `points` is empty.
  pub fn new(points: Vec<ReferencePoint<N>>) -> Self {
    Self::with_rng(points, StdRng::from_entropy())
  }

  /// Same as [`NichingReplacement::new`] but with a seeded random number
  /// generator, so that runs can be reproduced.
  ///
  /// # Panics
  ///
  /// Panics if `points` is empty.
  pub fn with_seed(points: Vec<ReferencePoint<N>>, seed: u64) -> Self {
    Self::with_rng(points, StdRng::seed_from_u64(seed))
  }

  fn with_rng(points: Vec<ReferencePoint<N>>, rng: StdRng) -> Self {
    assert!(!points.is_empty(), "reference points cannot be empty");
    Self { points, rng }
  }

  /// Returns the reference points with bookkeeping of the last niching pass.
  pub fn reference_points(&self) -> &[ReferencePoint<N>] {
    &self.points
  }
}

impl<S, const N: usize> Replacement<S, N> for NichingReplacement<N> {
  fn replace(
    &mut self,
    mut current: Population<S, N>,
    offspring: Population<S, N>,
    bounds: &ObjectiveBounds<N>,
  ) -> Result<Population<S, N>, Error> {
    let size = current.len();
    current.merge(offspring);

    let mut survivors = Vec::with_capacity(size);
    let mut last_front = Vec::new();
    let fronts =
      constrained_non_dominated_fronts(current.scores(), current.violations());
    for mut front in fronts {
      if survivors.len() + front.len() <= size {
        survivors.append(&mut front);
      } else {
        last_front = front;
        break;
      }
    }

    if survivors.len() < size {
      trace!(
        "niching {} of {} solutions of the last front",
        size - survivors.len(),
        last_front.len()
      );
      associate(
        &mut self.points,
        current.scores(),
        &survivors,
        &last_front,
        &bounds.normalizer(),
      );
      let mut chosen =
        niche_select(&mut self.points, size - survivors.len(), &mut self.rng);
      survivors.append(&mut chosen);
    }
    Ok(current.pick(&survivors))
  }
}
