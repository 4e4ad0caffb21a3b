//! Recombination operators and utilities.

/// An operator that creates two offsprings from a pair of parents. The
/// optimizer consumes the mating pool in consecutive pairs, so each pair of
/// selected parents produces exactly two offsprings.
///
/// # Examples
/// Any closure that takes two references to solutions and returns a pair of
/// solutions is a `Crossover`.
/// ```
/// # use mombi::recombination::Crossover;
/// let c = |a: &f64, b: &f64| ((a + b) / 2.0, (a - b).abs());
/// assert_eq!(c.crossover([&1.0, &3.0]), [2.0, 2.0]);
/// ```
///
/// **Note that you always can implement this trait instead of using closures.**
pub trait Crossover<S> {
  /// Takes references to two parents and returns two created offsprings.
  fn crossover(&self, parents: [&S; 2]) -> [S; 2];
}

impl<S, F> Crossover<S> for F
where
  F: Fn(&S, &S) -> (S, S),
{
  fn crossover(&self, [a, b]: [&S; 2]) -> [S; 2] {
    let (m, n) = self(a, b);
    [m, n]
  }
}
