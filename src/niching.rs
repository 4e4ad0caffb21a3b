//! Association of solutions with reference points and niching selection.
//!
//! A niching pass has two steps. [`associate`] resets the bookkeeping of every
//! reference point and attaches each solution to its nearest point, either as
//! a committed member or as a candidate. Then [`niche_select`] repeatedly picks
//! candidates of the least crowded points until enough solutions are chosen.

use log::trace;
use rand::prelude::*;

use crate::{
  reference_point::{ReferencePoint, SolutionIndex},
  score::{Score, Scores},
  utility::Normalizer,
};

/// Returns the distance between `point` and the line going through the origin
/// in `direction`. A zero direction is infinitely far from everything.
pub fn perpendicular_distance(point: &[Score], direction: &[Score]) -> f64 {
  let dot: f64 = point.iter().zip(direction).map(|(p, d)| p * d).sum();
  let norm_sq: f64 = direction.iter().map(|d| d * d).sum();
  if norm_sq == 0.0 {
    return f64::INFINITY;
  }
  let scale = dot / norm_sq;
  point
    .iter()
    .zip(direction)
    .map(|(p, d)| (p - scale * d).powi(2))
    .sum::<f64>()
    .sqrt()
}

/// Returns the index of the reference point closest to `normalized` and the
/// distance to it. The first point wins ties.
fn nearest<const N: usize>(
  points: &[ReferencePoint<N>],
  normalized: &Scores<N>,
) -> Option<(usize, f64)> {
  points
    .iter()
    .map(|rp| perpendicular_distance(normalized, rp.position()))
    .enumerate()
    .min_by(|a, b| a.1.total_cmp(&b.1))
}

/// Starts a new niching pass.
///
/// Clears every reference point, then normalizes scores of each solution in
/// `committed` and counts it as a member of its nearest point, and registers
/// each solution in `candidates` as a potential member of its nearest point
/// together with the distance.
///
/// Indices refer to `scores`, which is usually the score slice of the
/// population being niched.
pub fn associate<const N: usize>(
  points: &mut [ReferencePoint<N>],
  scores: &[Scores<N>],
  committed: &[SolutionIndex],
  candidates: &[SolutionIndex],
  normalizer: &Normalizer<N>,
) {
  points.iter_mut().for_each(ReferencePoint::clear);
  for &idx in committed {
    let normalized = normalizer.normalize_all(&scores[idx]);
    if let Some((rp_idx, _)) = nearest(points, &normalized) {
      points[rp_idx].add_member();
    }
  }
  for &idx in candidates {
    let normalized = normalizer.normalize_all(&scores[idx]);
    if let Some((rp_idx, distance)) = nearest(points, &normalized) {
      points[rp_idx].add_potential_member(idx, distance);
    }
  }
}

/// Selects up to `count` candidates, preferring reference points with the
/// fewest members.
///
/// Each step picks a random point among those with the fewest members that
/// still have candidates. A point without members takes its closest
/// candidate, otherwise a random one. The winner is committed to the point and
/// withdrawn from every other point, so no solution is selected twice.
/// Returns fewer than `count` indices if candidates run out.
pub fn niche_select<const N: usize, R: Rng + ?Sized>(
  points: &mut [ReferencePoint<N>],
  count: usize,
  rng: &mut R,
) -> Vec<SolutionIndex> {
  let mut selected = Vec::with_capacity(count);
  while selected.len() < count {
    let Some(min_count) = points
      .iter()
      .filter(|rp| rp.has_potential_member())
      .map(ReferencePoint::member_count)
      .min()
    else {
      break;
    };
    let least_crowded: Vec<usize> = points
      .iter()
      .enumerate()
      .filter(|(_, rp)| {
        rp.has_potential_member() && rp.member_count() == min_count
      })
      .map(|(rp_idx, _)| rp_idx)
      .collect();
    let Some(&rp_idx) = least_crowded.choose(rng) else {
      break;
    };

    let point = &mut points[rp_idx];
    let winner = if point.member_count() == 0 {
      point.find_closest_member()
    } else {
      point.random_member(rng)
    };
    let Some(winner) = winner else {
      break;
    };
    point.add_member();
    trace!("solution {winner} joins reference point {rp_idx}");

    points
      .iter_mut()
      .for_each(|rp| rp.remove_potential_member(winner));
    selected.push(winner);
  }
  selected
}
