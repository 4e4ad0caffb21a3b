//! Selection operators and utilities.

use std::cmp::Ordering;

use rand::prelude::*;

use crate::{population::Population, score::constrained_dominance};

/// An operator that draws a single parent from the population. The optimizer
/// applies it as many times as the population size to fill the mating pool,
/// so drawing the same solution more than once is fine.
///
/// Due to the fact that [closure lifetime binders] are still unimplemented,
/// `Selection`s in closure form are a pain to work with. In practice, you can
/// only implement them using a `fn` function with a lifetime parameter:
/// ```
/// # use mombi::population::Population;
/// // always selects the first solution
/// fn selection<'a>(population: &'a Population<f64, 3>) -> &'a f64 {
///   &population.solutions()[0]
/// }
/// ```
///
/// To save you the trouble, this crate provides [`RandomSelection`] and
/// [`TournamentSelection`].
///
/// **Note that you probably want to implement this trait instead of using closures.**
///
/// [closure lifetime binders]: https://rust-lang.github.io/rfcs/3216-closure-lifetime-binder.html
pub trait Selection<S, const N: usize> {
  /// Returns a reference to the selected solution.
  fn select<'a>(&self, population: &'a Population<S, N>) -> &'a S;
}

impl<S, const N: usize, F> Selection<S, N> for F
where
  F: for<'a> Fn(&'a Population<S, N>) -> &'a S,
{
  fn select<'a>(&self, population: &'a Population<S, N>) -> &'a S {
    self(population)
  }
}

/// Selects a uniformly random solution.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct RandomSelection;

impl<S, const N: usize> Selection<S, N> for RandomSelection {
  fn select<'a>(&self, population: &'a Population<S, N>) -> &'a S {
    population
      .solutions()
      .choose(&mut rand::thread_rng())
      .expect("cannot select from an empty population")
  }
}

/// Draws `n` distinct random solutions and selects one that isn't dominated by
/// any other contestant. If several contestants are mutually non-dominated,
/// the first drawn one wins.
///
/// Contestants are compared by constrained dominance, so a feasible solution
/// beats any infeasible one and of two infeasible solutions the one with the
/// smaller constraint violation wins.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct TournamentSelection(pub usize);

impl Default for TournamentSelection {
  /// Binary tournament.
  fn default() -> Self {
    Self(2)
  }
}

impl<S, const N: usize> Selection<S, N> for TournamentSelection {
  fn select<'a>(&self, population: &'a Population<S, N>) -> &'a S {
    let size = self.0.max(1).min(population.len());
    let (scores, violations) = (population.scores(), population.violations());
    let mut rng = rand::thread_rng();
    let winner = rand::seq::index::sample(&mut rng, population.len(), size)
      .into_iter()
      .reduce(|best, idx| {
        match constrained_dominance(
          (scores[idx].as_slice(), violations[idx]),
          (scores[best].as_slice(), violations[best]),
        ) {
          Ordering::Less => idx,
          _ => best,
        }
      })
      .expect("cannot select from an empty population");
    &population.solutions()[winner]
  }
}
