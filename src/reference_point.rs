//! Reference points for structured niching in many-objective optimization.
//!
//! A set of reference points is a lattice on the unit simplex of the
//! normalized objective space. Each point keeps per-pass bookkeeping: how many
//! solutions were already committed to it and which candidates, identified by
//! their index in the population being niched, are still waiting for a
//! decision.

use rand::Rng;

use crate::score::{Score, Scores};

/// Index of a solution in the population that is being niched.
pub type SolutionIndex = usize;

/// A position on the unit simplex plus niching bookkeeping of a single pass.
#[derive(Clone, PartialEq, Debug)]
pub struct ReferencePoint<const N: usize> {
  position: Scores<N>,
  member_count: usize,
  potential_members: Vec<(SolutionIndex, f64)>,
}

impl<const N: usize> ReferencePoint<N> {
  /// Creates a reference point at given position with empty bookkeeping.
  pub fn new(position: Scores<N>) -> Self {
    Self {
      position,
      member_count: 0,
      potential_members: Vec::new(),
    }
  }

  /// Generates the simplex lattice of `N` objectives where each coordinate is
  /// a multiple of `1 / divisions` and coordinates of each point sum to 1.
  ///
  /// Produces exactly `C(divisions + N - 1, N - 1)` points in a deterministic
  /// order. Yields nothing if `N == 0`.
  ///
  /// # Panics
  ///
  /// Panics if `divisions` is 0.
  pub fn generate(divisions: usize) -> Vec<Self> {
    assert!(divisions > 0, "number of divisions must be positive");
    let mut points = Vec::new();
    if N > 0 {
      let mut position = [0.0; N];
      Self::generate_recursive(
        &mut points,
        &mut position,
        divisions,
        divisions,
        0,
      );
    }
    points
  }

  fn generate_recursive(
    points: &mut Vec<Self>,
    position: &mut Scores<N>,
    left: usize,
    total: usize,
    element: usize,
  ) {
    if element + 1 == N {
      position[element] = left as Score / total as Score;
      points.push(Self::new(*position));
    } else {
      for i in 0..=left {
        position[element] = i as Score / total as Score;
        Self::generate_recursive(
          points,
          position,
          left - i,
          total,
          element + 1,
        );
      }
    }
  }

  /// Generates one lattice per given number of divisions. The first lattice
  /// lies on the boundary of the simplex, each following one is shrunk
  /// halfway towards the simplex centroid. Lattices are concatenated in order.
  ///
  /// # Panics
  ///
  /// Panics if any number of divisions is 0.
  pub fn generate_layers(divisions: &[usize]) -> Vec<Self> {
    divisions
      .iter()
      .enumerate()
      .flat_map(|(layer, &d)| {
        Self::generate(d).into_iter().map(move |mut point| {
          if layer > 0 {
            let centroid = 1.0 / N as Score;
            point
              .position
              .iter_mut()
              .for_each(|p| *p = 0.5 * *p + 0.5 * centroid);
          }
          point
        })
      })
      .collect()
  }

  /// Returns the position of this point.
  pub fn position(&self) -> &Scores<N> {
    &self.position
  }

  /// Returns the number of solutions committed to this point.
  pub fn member_count(&self) -> usize {
    self.member_count
  }

  /// Returns `true` if there are candidates waiting for a decision.
  pub fn has_potential_member(&self) -> bool {
    !self.potential_members.is_empty()
  }

  /// Resets the bookkeeping. Must be called before each niching pass.
  pub fn clear(&mut self) {
    self.member_count = 0;
    self.potential_members.clear();
  }

  /// Commits one more solution to this point.
  pub fn add_member(&mut self) {
    self.member_count += 1;
  }

  /// Registers a candidate with its distance to this point.
  pub fn add_potential_member(&mut self, index: SolutionIndex, distance: f64) {
    self.potential_members.push((index, distance));
  }

  /// Returns the candidate closest to this point. The first one wins ties.
  pub fn find_closest_member(&self) -> Option<SolutionIndex> {
    self
      .potential_members
      .iter()
      .min_by(|a, b| a.1.total_cmp(&b.1))
      .map(|&(index, _)| index)
  }

  /// Returns a uniformly random candidate. With a single candidate, returns it
  /// without touching `rng`.
  pub fn random_member<R: Rng + ?Sized>(
    &self,
    rng: &mut R,
  ) -> Option<SolutionIndex> {
    match self.potential_members.len() {
      0 => None,
      1 => Some(self.potential_members[0].0),
      len => Some(self.potential_members[rng.gen_range(0..len)].0),
    }
  }

  /// Removes every entry of given candidate.
  pub fn remove_potential_member(&mut self, index: SolutionIndex) {
    self.potential_members.retain(|&(i, _)| i != index);
  }
}
