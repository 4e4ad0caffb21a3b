//! Per-generation hooks.

use log::info;

use crate::{bounds::ObjectiveBounds, population::Population};

/// Runs once after the initial population is evaluated and once after every
/// replacement, seeing the population of that generation and the ideal and
/// nadir points observed so far.
///
/// Any `FnMut` closure with a matching signature is a `GenerationHook`:
/// ```
/// # use mombi::{
/// #   bounds::ObjectiveBounds, hook::GenerationHook, population::Population,
/// # };
/// let mut generations = 0;
/// let mut hook = |_: &Population<f64, 2>, _: &ObjectiveBounds<2>| {
///   generations += 1;
/// };
/// hook.compute(&Population::new(vec![], vec![]), &ObjectiveBounds::new());
/// assert_eq!(generations, 1);
/// ```
pub trait GenerationHook<S, const N: usize> {
  /// Observes the current generation.
  fn compute(
    &mut self,
    population: &Population<S, N>,
    bounds: &ObjectiveBounds<N>,
  );
}

impl<S, const N: usize, F> GenerationHook<S, N> for F
where
  F: FnMut(&Population<S, N>, &ObjectiveBounds<N>),
{
  fn compute(
    &mut self,
    population: &Population<S, N>,
    bounds: &ObjectiveBounds<N>,
  ) {
    self(population, bounds)
  }
}

/// Does nothing.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct NoHook;

impl<S, const N: usize> GenerationHook<S, N> for NoHook {
  fn compute(&mut self, _: &Population<S, N>, _: &ObjectiveBounds<N>) {}
}

/// Logs the generation number and the ideal and nadir points at `info` level.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct LogProgress {
  generation: usize,
}

impl LogProgress {
  /// Returns the number of generations seen so far.
  pub fn generations(&self) -> usize {
    self.generation
  }
}

impl<S, const N: usize> GenerationHook<S, N> for LogProgress {
  fn compute(
    &mut self,
    population: &Population<S, N>,
    bounds: &ObjectiveBounds<N>,
  ) {
    self.generation += 1;
    info!(
      "generation {}: {} solutions, ideal {:?}, nadir {:?}",
      self.generation,
      population.len(),
      bounds.ideal(),
      bounds.nadir()
    );
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  type Solution = u8;

  fn population() -> Population<Solution, 2> {
    Population::new(vec![0, 1], vec![[1.0, 2.0], [2.0, 1.0]])
  }

  fn call_twice<H: GenerationHook<Solution, 2>>(hook: &mut H) {
    let population = population();
    let mut bounds = ObjectiveBounds::new();
    bounds.update_all(population.scores());
    hook.compute(&population, &bounds);
    hook.compute(&population, &bounds);
  }

  #[test]
  fn test_hook_from_closure() {
    let mut seen = Vec::new();
    let mut hook =
      |population: &Population<Solution, 2>, bounds: &ObjectiveBounds<2>| {
        seen.push((population.len(), *bounds.ideal()));
      };
    call_twice(&mut hook);
    assert_eq!(seen, vec![(2, [1.0, 1.0]); 2]);
  }

  #[test]
  fn test_no_hook() {
    call_twice(&mut NoHook);
  }

  #[test]
  fn test_log_progress_counts_generations() {
    let mut hook = LogProgress::default();
    call_twice(&mut hook);
    assert_eq!(hook.generations(), 2);
  }
}
