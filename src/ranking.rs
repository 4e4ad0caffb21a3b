//! Rankings of evaluated populations.

use std::cmp::Ordering;

use crate::{
  error::Error,
  reference_point::SolutionIndex,
  score::{constrained_dominance, ParetoDominance, Score, Scores},
  utility::UtilityFunctionSet,
};

// number of solution's dominators
type DominanceCounter = usize;
// dominated by each solution solutions' indices
type DominanceList = Vec<SolutionIndex>;
// indices of solutions of a front
type Front = Vec<SolutionIndex>;

/// Sorts solutions into non-dominated fronts.
///
/// The first front holds indices of solutions no other solution dominates,
/// each following front holds solutions dominated only by solutions of
/// previous fronts. Every index of `scores` appears in exactly one front, and
/// indices inside a front are in ascending order. Scores holding a NaN never
/// dominate nor are dominated.
pub fn non_dominated_fronts<const N: usize>(
  scores: &[Scores<N>],
) -> Vec<Front> {
  sort_fronts(scores.len(), |p_idx, q_idx| {
    scores[p_idx].dominance(&scores[q_idx])
  })
}

/// Same as [`non_dominated_fronts`], but solutions are compared by
/// constrained dominance: a feasible solution, the one with zero `violations`
/// entry, dominates every infeasible one, and of two infeasible solutions the
/// one with the smaller violation dominates. So all feasible solutions come in
/// fronts before any infeasible one.
///
/// # Panics
///
/// Panics if the number of scores differs from the number of violations.
pub fn constrained_non_dominated_fronts<const N: usize>(
  scores: &[Scores<N>],
  violations: &[Score],
) -> Vec<Front> {
  assert_eq!(
    scores.len(),
    violations.len(),
    "number of scores must match number of violations"
  );
  sort_fronts(scores.len(), |p_idx, q_idx| {
    constrained_dominance(
      (scores[p_idx].as_slice(), violations[p_idx]),
      (scores[q_idx].as_slice(), violations[q_idx]),
    )
  })
}

/// Peels fronts off `len` solutions, `dominance(p, q)` returning `Less` when
/// `p` dominates `q`.
fn sort_fronts(
  len: usize,
  dominance: impl Fn(SolutionIndex, SolutionIndex) -> Ordering,
) -> Vec<Front> {
  let mut dominance_lists: Vec<DominanceList> = vec![Vec::new(); len];
  let mut dominance_counters: Vec<DominanceCounter> = vec![0; len];

  // for each unique pair of solutions `p` and `q`...
  for p_idx in 0..len {
    for q_idx in p_idx + 1..len {
      match dominance(p_idx, q_idx) {
        // `p` dominates `q`
        Ordering::Less => {
          dominance_lists[p_idx].push(q_idx);
          dominance_counters[q_idx] += 1;
        }
        // `q` dominates `p`
        Ordering::Greater => {
          dominance_lists[q_idx].push(p_idx);
          dominance_counters[p_idx] += 1;
        }
        Ordering::Equal => {}
      }
    }
  }

  let mut fronts = Vec::new();
  let mut front: Front = (0..len)
    .filter(|&idx| dominance_counters[idx] == 0)
    .collect();
  while !front.is_empty() {
    let mut next_front = Vec::new();
    for &p_idx in &front {
      for &q_idx in &dominance_lists[p_idx] {
        dominance_counters[q_idx] -= 1;
        // no more solutions dominate `q`
        if dominance_counters[q_idx] == 0 {
          next_front.push(q_idx);
        }
      }
    }
    next_front.sort_unstable();
    fronts.push(std::mem::replace(&mut front, next_front));
  }
  fronts
}

/// Ranks solutions by their utilities, R2-style.
///
/// For every utility function solutions are ordered by utility, and a
/// solution gets the position it takes in that order, starting from 0. Each
/// solution is then described by its best position over all utility
/// functions and its smallest utility. Returns one `(rank, utility)` pair per
/// solution in the order of `scores`; smaller is better for both.
pub fn utility_ranking<const N: usize, U: UtilityFunctionSet<N>>(
  scores: &[Scores<N>],
  utilities: &U,
) -> Result<Vec<(usize, Score)>, Error> {
  let mut ranks = vec![(usize::MAX, Score::INFINITY); scores.len()];
  let mut values = Vec::with_capacity(scores.len());
  for u_idx in 0..utilities.len() {
    values.clear();
    for (idx, s) in scores.iter().enumerate() {
      values.push((idx, utilities.evaluate(s, u_idx)?));
    }
    values.sort_by(|a, b| a.1.total_cmp(&b.1));
    for (position, &(idx, utility)) in values.iter().enumerate() {
      let (rank, best) = &mut ranks[idx];
      *rank = (*rank).min(position);
      *best = best.min(utility);
    }
  }
  Ok(ranks)
}
