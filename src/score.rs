//! Type aliases for a more convenient representation of objective values used
//! throughout the library.

use std::cmp::Ordering;

/// An alias for a single objective value.
///
/// Every objective is minimized. If you want to maximize something, negate it
/// in your [`Problem`](crate::problem::Problem) implementation.
pub type Score = f64;

/// An alias for an array of `N` values of `Score` type, one per objective.
pub type Scores<const N: usize> = [Score; N];

/// Describes pareto dominance for arrays of `Score`s.
pub(crate) trait ParetoDominance {
  /// Returns `Less` if `self` dominates `other`, `Greater` if `other`
  /// dominates `self`, otherwise `Equal`. `self` dominates `other` if no
  /// `self` value is greater than the respective `other` value and at least
  /// one of them is smaller. A NaN value is incomparable, so arrays holding
  /// one never dominate each other.
  fn dominance(&self, other: &Self) -> Ordering;
}

impl ParetoDominance for [Score] {
  fn dominance(&self, other: &Self) -> Ordering {
    let mut ord = Ordering::Equal;
    for (a, b) in self.iter().zip(other) {
      let Some(next_ord) = a.partial_cmp(b) else {
        return Ordering::Equal;
      };
      match (ord, next_ord) {
        (Ordering::Equal, next_ord) => ord = next_ord,
        (Ordering::Greater, Ordering::Less)
        | (Ordering::Less, Ordering::Greater) => return Ordering::Equal,
        _ => {}
      }
    }
    ord
  }
}

/// Constrained dominance of two solutions given their scores and overall
/// constraint violations, see
/// [`Problem::constraint_violation`](crate::problem::Problem::constraint_violation).
///
/// A feasible solution, the one with zero violation, dominates every
/// infeasible one. Of two infeasible solutions the one with the smaller
/// violation dominates. Two feasible solutions are compared by pareto
/// dominance of their scores.
pub(crate) fn constrained_dominance(
  (scores, violation): (&[Score], Score),
  (other_scores, other_violation): (&[Score], Score),
) -> Ordering {
  match (violation > 0.0, other_violation > 0.0) {
    (false, false) => scores.dominance(other_scores),
    (false, true) => Ordering::Less,
    (true, false) => Ordering::Greater,
    (true, true) => violation.total_cmp(&other_violation),
  }
}

#[cfg(test)]
mod tests {
  use std::cmp::Ordering;

  use super::*;

  #[test]
  fn test_pareto_dominance() {
    assert_eq!([1.0, 2.0, 3.0].dominance(&[1.0, 2.0, 3.0]), Ordering::Equal);
    assert_eq!([1.0, 2.0, 3.0].dominance(&[3.0, 2.0, 1.0]), Ordering::Equal);
    assert_eq!(
      [-1.0, 2.0, -3.0].dominance(&[-1.0, 2.0, -3.0]),
      Ordering::Equal
    );

    assert_eq!(
      [10.0, 2.0, 3.0].dominance(&[1.0, 2.0, 3.0]),
      Ordering::Greater
    );
    assert_eq!(
      [1.0, 2.0, 30.0].dominance(&[1.0, 2.0, 3.0]),
      Ordering::Greater
    );
    assert_eq!(
      [-1.0, 2.0, -3.0].dominance(&[-2.0, 1.0, -3.0]),
      Ordering::Greater
    );

    assert_eq!([1.0, 2.0, 3.0].dominance(&[10.0, 2.0, 3.0]), Ordering::Less);
    assert_eq!([1.0, 2.0, 3.0].dominance(&[1.0, 20.0, 3.0]), Ordering::Less);
    // negative values are simply smaller, not further from zero
    assert_eq!(
      [-5.0, 2.0, 3.0].dominance(&[1.0, 2.0, 3.0]),
      Ordering::Less
    );

    assert_eq!([1.0; 0].dominance(&[0.0; 0]), Ordering::Equal);
  }

  #[test]
  fn test_nan_is_incomparable() {
    assert_eq!([Score::NAN, 0.0].dominance(&[1.0, 1.0]), Ordering::Equal);
    assert_eq!([0.0, 0.0].dominance(&[1.0, Score::NAN]), Ordering::Equal);
    assert_eq!([0.0, 0.0].dominance(&[Score::NAN, 1.0]), Ordering::Equal);
  }

  #[test]
  fn test_constrained_dominance() {
    let good: &[Score] = &[1.0, 1.0];
    let bad: &[Score] = &[2.0, 2.0];
    // both feasible, plain pareto dominance
    assert_eq!(constrained_dominance((good, 0.0), (bad, 0.0)), Ordering::Less);
    // feasibility beats better scores
    assert_eq!(
      constrained_dominance((good, 0.5), (bad, 0.0)),
      Ordering::Greater
    );
    assert_eq!(constrained_dominance((bad, 0.0), (good, 0.5)), Ordering::Less);
    // both infeasible, smaller violation wins regardless of scores
    assert_eq!(constrained_dominance((bad, 0.1), (good, 0.2)), Ordering::Less);
    assert_eq!(
      constrained_dominance((good, 0.3), (bad, 0.2)),
      Ordering::Greater
    );
    assert_eq!(
      constrained_dominance((good, 0.2), (bad, 0.2)),
      Ordering::Equal
    );
  }
}
