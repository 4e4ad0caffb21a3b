//! Mutation operators and utilities.

/// An operator that mutates a single solution in place. The optimizer applies
/// it to each offspring independently right after crossover.
///
/// # Examples
/// ```
/// # use mombi::mutation::Mutation;
/// let m = |f: &mut f64| *f *= 2.0;
/// let mut x = 1.5;
/// m.mutate(&mut x);
/// assert_eq!(x, 3.0);
/// ```
///
/// **Note that you always can implement this trait instead of using closures.**
pub trait Mutation<S> {
  /// Mutates given solution.
  fn mutate(&self, solution: &mut S);
}

impl<S, F> Mutation<S> for F
where
  F: Fn(&mut S),
{
  fn mutate(&self, solution: &mut S) {
    self(solution)
  }
}
