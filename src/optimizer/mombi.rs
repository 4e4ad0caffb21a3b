//! Generational many-objective optimizer of MOMBI family.

use std::marker::PhantomData;

use itertools::Itertools;
use log::{debug, info};
use typed_builder::TypedBuilder;

use super::Optimizer;
use crate::{
  bounds::ObjectiveBounds,
  error::Error,
  evaluation::Evaluator,
  hook::GenerationHook,
  mutation::Mutation,
  population::Population,
  problem::Problem,
  recombination::Crossover,
  replacement::Replacement,
  score::Score,
  selection::Selection,
};

/// A generational optimizer that keeps track of the ideal and nadir points of
/// every solution it has evaluated and leaves survival decisions to a
/// [`Replacement`].
///
/// One run goes as follows:
/// 1. `population_size` solutions are created and evaluated;
/// 2. the hook runs, this is the first iteration;
/// 3. while fewer than `max_iterations` iterations passed, a mating pool of
///    `population_size` parents is selected, each consecutive pair of parents
///    is crossed over into two offsprings, offsprings are mutated and
///    evaluated, the replacement builds the next population, then the hook
///    runs;
/// 4. the last population is evaluated once more and returned.
///
/// Each evaluation also asks the problem for the constraint violation of every
/// solution, see [`Problem::constraint_violation`]. Scores of infeasible
/// solutions still tighten the bounds. A NaN or infinite score stops the run
/// with [`Error::NonFiniteScore`].
///
/// # Examples
/// ```
/// use mombi::{
///   error::BoxError,
///   evaluation::SequentialEvaluator,
///   hook::NoHook,
///   optimizer::{mombi::Mombi, Optimizer},
///   problem::Problem,
///   reference_point::ReferencePoint,
///   replacement::NichingReplacement,
///   score::Scores,
///   selection::TournamentSelection,
/// };
///
/// struct Line;
///
/// impl Problem<f64, 2> for Line {
///   fn create_solution(&self) -> f64 {
///     rand::random()
///   }
///
///   fn evaluate(&self, x: &f64) -> Result<Scores<2>, BoxError> {
///     Ok([*x, 1.0 - *x])
///   }
/// }
///
/// let population = Mombi::builder()
///   .problem(Line)
///   .population_size(10)
///   .max_iterations(5)
///   .evaluator(SequentialEvaluator)
///   .selection(TournamentSelection::default())
///   .crossover(|a: &f64, b: &f64| ((a + b) / 2.0, (a - b).abs()))
///   .mutation(|x: &mut f64| *x = x.clamp(0.0, 1.0))
///   .replacement(NichingReplacement::new(ReferencePoint::generate(9)))
///   .hook(NoHook)
///   .build()
///   .optimize()
///   .unwrap();
/// assert_eq!(population.len(), 10);
/// ```
#[derive(TypedBuilder, Debug)]
pub struct Mombi<S, P, E, Sel, Crs, Mut, Rep, H, const N: usize> {
  problem: P,
  #[builder(setter(
    transform = |n: usize| {
      (n > 0 && n % 2 == 0)
        .then_some(n)
        .unwrap_or_else(|| panic!("population size must be even and positive"))
    },
    doc = "
The population size setter. Parents are paired, so the size must be even.

# Panics

Panics if `population_size` is 0 or odd.",
  ))]
  population_size: usize,
  #[builder(setter(
    transform = |n: usize| {
      (n > 0)
        .then_some(n)
        .unwrap_or_else(|| panic!("max iterations must be positive"))
    },
    doc = "
The iteration limit setter. Evaluation of the initial population counts as the
first iteration.

# Panics

Panics if `max_iterations` is 0.",
  ))]
  max_iterations: usize,
  evaluator: E,
  selection: Sel,
  crossover: Crs,
  mutation: Mut,
  replacement: Rep,
  hook: H,
  #[builder(setter(skip), default)]
  bounds: ObjectiveBounds<N>,
  #[builder(setter(skip), default)]
  _solution: PhantomData<S>,
}

impl<S, P, E, Sel, Crs, Mut, Rep, H, const N: usize>
  Mombi<S, P, E, Sel, Crs, Mut, Rep, H, N>
where
  P: Problem<S, N>,
  E: Evaluator<S, P, N>,
  Sel: Selection<S, N>,
  Crs: Crossover<S>,
  Mut: Mutation<S>,
{
  /// Evaluates solutions and their constraint violations, then tightens the
  /// bounds with their scores. Bounds are left untouched if any score isn't
  /// finite.
  fn evaluate(
    &mut self,
    solutions: Vec<S>,
  ) -> Result<Population<S, N>, Error> {
    let scores = self
      .evaluator
      .evaluate(&solutions, &self.problem)
      .map_err(Error::Evaluation)?;
    if scores.len() != solutions.len() {
      return Err(Error::ScoreCount {
        expected: solutions.len(),
        actual: scores.len(),
      });
    }
    for (s_idx, s) in scores.iter().enumerate() {
      if let Some(o_idx) = s.iter().position(|score| !score.is_finite()) {
        return Err(Error::NonFiniteScore {
          solution: s_idx,
          objective: o_idx,
          score: s[o_idx],
        });
      }
    }

    let violations: Vec<Score> = solutions
      .iter()
      .map(|solution| self.problem.constraint_violation(solution))
      .collect();
    if let Some((s_idx, &violation)) = violations
      .iter()
      .enumerate()
      .find(|(_, v)| !(0.0..Score::INFINITY).contains(*v))
    {
      return Err(Error::InvalidConstraintViolation {
        solution: s_idx,
        violation,
      });
    }

    self.bounds.update_all(&scores);
    Ok(Population::with_violations(solutions, scores, violations))
  }

  /// Selects a mating pool and turns it into mutated offsprings.
  fn reproduce(&self, population: &Population<S, N>) -> Vec<S> {
    (0..self.population_size)
      .map(|_| self.selection.select(population))
      .tuples()
      .flat_map(|(a, b)| self.crossover.crossover([a, b]))
      .map(|mut offspring| {
        self.mutation.mutate(&mut offspring);
        offspring
      })
      .collect()
  }
}

impl<S, P, E, Sel, Crs, Mut, Rep, H, const N: usize> Optimizer<S, N>
  for Mombi<S, P, E, Sel, Crs, Mut, Rep, H, N>
where
  P: Problem<S, N>,
  E: Evaluator<S, P, N>,
  Sel: Selection<S, N>,
  Crs: Crossover<S>,
  Mut: Mutation<S>,
  Rep: Replacement<S, N>,
  H: GenerationHook<S, N>,
{
  fn optimize(mut self) -> Result<Population<S, N>, Error> {
    info!(
      "optimizing {} objectives with {} solutions for {} iterations",
      self.problem.number_of_objectives(),
      self.population_size,
      self.max_iterations
    );

    let solutions = (0..self.population_size)
      .map(|_| self.problem.create_solution())
      .collect();
    let mut population = self.evaluate(solutions)?;
    let mut iterations = 1;
    self.hook.compute(&population, &self.bounds);

    while iterations < self.max_iterations {
      let offspring = self.reproduce(&population);
      let offspring = self.evaluate(offspring)?;
      population =
        self.replacement.replace(population, offspring, &self.bounds)?;
      if population.len() != self.population_size {
        return Err(Error::PopulationSize {
          expected: self.population_size,
          actual: population.len(),
        });
      }
      iterations += 1;
      debug!(
        "iteration {iterations}: ideal {:?}, nadir {:?}",
        self.bounds.ideal(),
        self.bounds.nadir()
      );
      self.hook.compute(&population, &self.bounds);
    }

    let (solutions, _) = population.into_parts();
    let population = self.evaluate(solutions)?;
    info!(
      "finished after {iterations} iterations, ideal {:?}, nadir {:?}",
      self.bounds.ideal(),
      self.bounds.nadir()
    );
    Ok(population)
  }
}

#[cfg(test)]
mod tests {
  use std::{
    cell::{Cell, RefCell},
    error::Error as _,
  };

  use super::*;
  use crate::{
    error::BoxError,
    evaluation::{ParallelBatchEvaluator, SequentialEvaluator},
    hook::NoHook,
    reference_point::ReferencePoint,
    replacement::{NichingReplacement, OffspringReplacement, UtilityReplacement},
    score::Scores,
    selection::{RandomSelection, TournamentSelection},
    utility::{AsfUtilityFunctionSet, WeightVectorSet},
  };

  type Solution = f64;

  struct Line;

  impl Problem<Solution, 2> for Line {
    fn create_solution(&self) -> Solution {
      rand::random()
    }

    fn evaluate(&self, x: &Solution) -> Result<Scores<2>, BoxError> {
      Ok([*x, 1.0 - *x])
    }
  }

  // `Line` feasible where the constraint holds
  struct ConstrainedLine(fn(&Solution) -> Score);

  impl Problem<Solution, 2> for ConstrainedLine {
    fn create_solution(&self) -> Solution {
      Line.create_solution()
    }

    fn evaluate(&self, x: &Solution) -> Result<Scores<2>, BoxError> {
      Line.evaluate(x)
    }

    fn constraint_violation(&self, x: &Solution) -> Score {
      (self.0)(x)
    }
  }

  fn optimize<E, Sel, Rep, H>(
    population_size: usize,
    max_iterations: usize,
    evaluator: E,
    selection: Sel,
    replacement: Rep,
    hook: H,
  ) -> Result<Population<Solution, 2>, Error>
  where
    E: Evaluator<Solution, Line, 2>,
    Sel: Selection<Solution, 2>,
    Rep: Replacement<Solution, 2>,
    H: GenerationHook<Solution, 2>,
  {
    optimize_problem(
      Line,
      population_size,
      max_iterations,
      evaluator,
      selection,
      replacement,
      hook,
    )
  }

  fn optimize_problem<P, E, Sel, Rep, H>(
    problem: P,
    population_size: usize,
    max_iterations: usize,
    evaluator: E,
    selection: Sel,
    replacement: Rep,
    hook: H,
  ) -> Result<Population<Solution, 2>, Error>
  where
    P: Problem<Solution, 2>,
    E: Evaluator<Solution, P, 2>,
    Sel: Selection<Solution, 2>,
    Rep: Replacement<Solution, 2>,
    H: GenerationHook<Solution, 2>,
  {
    Mombi::builder()
      .problem(problem)
      .population_size(population_size)
      .max_iterations(max_iterations)
      .evaluator(evaluator)
      .selection(selection)
      .crossover(|a: &Solution, b: &Solution| ((a + b) / 2.0, a.max(*b)))
      .mutation(|x: &mut Solution| *x = x.clamp(0.0, 1.0))
      .replacement(replacement)
      .hook(hook)
      .build()
      .optimize()
  }

  #[test]
  fn test_generation_count() {
    let hook_calls = Cell::new(0);
    let replacements = Cell::new(0);
    let evaluations = Cell::new(0);
    let last_offspring = RefCell::new(Vec::new());

    let evaluator = |solutions: &[Solution],
                     problem: &Line|
     -> Result<Vec<Scores<2>>, BoxError> {
      evaluations.set(evaluations.get() + solutions.len());
      SequentialEvaluator.evaluate(solutions, problem)
    };
    let replacement = |_: Population<Solution, 2>,
                       offspring: Population<Solution, 2>,
                       _: &ObjectiveBounds<2>|
     -> Result<Population<Solution, 2>, Error> {
      replacements.set(replacements.get() + 1);
      *last_offspring.borrow_mut() = offspring.solutions().to_vec();
      Ok(offspring)
    };
    let hook = |population: &Population<Solution, 2>,
                bounds: &ObjectiveBounds<2>| {
      hook_calls.set(hook_calls.get() + 1);
      assert_eq!(population.len(), 4);
      for scores in population.scores() {
        assert!((0..2).all(|i| bounds.ideal()[i] <= scores[i]));
        assert!((0..2).all(|i| bounds.nadir()[i] >= scores[i]));
      }
    };

    let population =
      optimize(4, 3, evaluator, RandomSelection, replacement, hook).unwrap();

    assert_eq!(hook_calls.get(), 3);
    assert_eq!(replacements.get(), 2);
    // initial population, two generations of offsprings, final evaluation
    assert_eq!(evaluations.get(), 4 * 4);
    assert_eq!(population.len(), 4);
    // the last offsprings, evaluated once more
    assert_eq!(population.solutions(), last_offspring.borrow().as_slice());
    for (x, scores) in population.iter() {
      assert_eq!(scores, &[*x, 1.0 - *x]);
    }
  }

  #[test]
  fn test_single_iteration() {
    let mut replacements = 0;
    let replacement = |current: Population<Solution, 2>,
                       _: Population<Solution, 2>,
                       _: &ObjectiveBounds<2>|
     -> Result<Population<Solution, 2>, Error> {
      replacements += 1;
      Ok(current)
    };
    let population = optimize(
      2,
      1,
      SequentialEvaluator,
      RandomSelection,
      replacement,
      NoHook,
    )
    .unwrap();
    assert_eq!(population.len(), 2);
    assert_eq!(replacements, 0);
  }

  #[test]
  #[should_panic(expected = "population size must be even and positive")]
  fn test_odd_population_size() {
    let _ = optimize(
      3,
      1,
      SequentialEvaluator,
      RandomSelection,
      OffspringReplacement,
      NoHook,
    );
  }

  #[test]
  #[should_panic(expected = "max iterations must be positive")]
  fn test_zero_iterations() {
    let _ = optimize(
      2,
      0,
      SequentialEvaluator,
      RandomSelection,
      OffspringReplacement,
      NoHook,
    );
  }

  #[test]
  fn test_evaluation_failure() {
    let evaluator = |_: &[Solution],
                     _: &Line|
     -> Result<Vec<Scores<2>>, BoxError> {
      Err("cannot evaluate".into())
    };
    let err = optimize(
      4,
      3,
      evaluator,
      RandomSelection,
      OffspringReplacement,
      NoHook,
    )
    .unwrap_err();
    assert!(matches!(err, Error::Evaluation(_)));
    assert_eq!(err.source().unwrap().to_string(), "cannot evaluate");
  }

  #[test]
  fn test_wrong_score_count() {
    let evaluator = |_: &[Solution],
                     _: &Line|
     -> Result<Vec<Scores<2>>, BoxError> { Ok(vec![[0.0, 0.0]]) };
    let err = optimize(
      4,
      3,
      evaluator,
      RandomSelection,
      OffspringReplacement,
      NoHook,
    )
    .unwrap_err();
    assert!(matches!(
      err,
      Error::ScoreCount {
        expected: 4,
        actual: 1
      }
    ));
  }

  #[test]
  fn test_non_finite_score() {
    for bad in [Score::NAN, Score::INFINITY, Score::NEG_INFINITY] {
      // offsprings of the first generation get a broken score
      let evaluations = Cell::new(0);
      let evaluator = |solutions: &[Solution],
                       problem: &Line|
       -> Result<Vec<Scores<2>>, BoxError> {
        evaluations.set(evaluations.get() + 1);
        let mut scores = SequentialEvaluator.evaluate(solutions, problem)?;
        if evaluations.get() == 2 {
          scores[1][0] = bad;
        }
        Ok(scores)
      };
      let err = optimize(
        8,
        3,
        evaluator,
        TournamentSelection::default(),
        NichingReplacement::with_seed(ReferencePoint::generate(4), 1),
        NoHook,
      )
      .unwrap_err();
      assert!(matches!(
        err,
        Error::NonFiniteScore {
          solution: 1,
          objective: 0,
          ..
        }
      ));
      assert_eq!(evaluations.get(), 2);
    }
  }

  #[test]
  fn test_non_finite_score_keeps_bounds() {
    let evaluator = |solutions: &[Solution],
                     _: &Line|
     -> Result<Vec<Scores<2>>, BoxError> {
      Ok(solutions.iter().map(|_| [Score::NAN, 1.0]).collect())
    };
    let mut mombi = Mombi::builder()
      .problem(Line)
      .population_size(2)
      .max_iterations(1)
      .evaluator(evaluator)
      .selection(RandomSelection)
      .crossover(|a: &Solution, b: &Solution| (*a, *b))
      .mutation(|_: &mut Solution| {})
      .replacement(OffspringReplacement)
      .hook(NoHook)
      .build();
    assert!(mombi.evaluate(vec![0.0, 1.0]).is_err());
    assert!(!mombi.bounds.is_observed());
  }

  #[test]
  fn test_invalid_constraint_violation() {
    let violations: [fn(&Solution) -> Score; 3] =
      [|_| -1.0, |_| Score::NAN, |_| Score::INFINITY];
    for violation in violations {
      let err = optimize_problem(
        ConstrainedLine(violation),
        4,
        3,
        SequentialEvaluator,
        RandomSelection,
        OffspringReplacement,
        NoHook,
      )
      .unwrap_err();
      assert!(matches!(
        err,
        Error::InvalidConstraintViolation { solution: 0, .. }
      ));
    }
  }

  #[test]
  fn test_constrained_run() {
    let violation = |x: &Solution| (0.5 - x).max(0.0);
    let mut feasible_counts = vec![];
    let hook = |population: &Population<Solution, 2>,
                _: &ObjectiveBounds<2>| {
      feasible_counts.push(
        (0..population.len())
          .filter(|&idx| population.is_feasible(idx))
          .count(),
      );
    };
    let population = optimize_problem(
      ConstrainedLine(violation),
      20,
      10,
      SequentialEvaluator,
      TournamentSelection::default(),
      NichingReplacement::with_seed(ReferencePoint::generate(19), 5),
      hook,
    )
    .unwrap();

    assert_eq!(population.len(), 20);
    for (x, &v) in population.solutions().iter().zip(population.violations()) {
      assert_eq!(v, violation(x));
    }
    // survivors are never traded for infeasible solutions
    assert_eq!(feasible_counts.len(), 10);
    assert!(feasible_counts.windows(2).all(|w| w[0] <= w[1]));
  }

  #[test]
  fn test_wrong_population_size() {
    let replacement = |current: Population<Solution, 2>,
                       _: Population<Solution, 2>,
                       _: &ObjectiveBounds<2>|
     -> Result<Population<Solution, 2>, Error> {
      Ok(current.pick(&[0]))
    };
    let err = optimize(
      4,
      3,
      SequentialEvaluator,
      RandomSelection,
      replacement,
      NoHook,
    )
    .unwrap_err();
    assert!(matches!(
      err,
      Error::PopulationSize {
        expected: 4,
        actual: 1
      }
    ));
  }

  #[test]
  fn test_niching_run() {
    let population = optimize(
      20,
      10,
      ParallelBatchEvaluator,
      TournamentSelection::default(),
      NichingReplacement::with_seed(ReferencePoint::generate(19), 3),
      NoHook,
    )
    .unwrap();
    assert_eq!(population.len(), 20);
    assert!(population
      .iter()
      .all(|(x, scores)| (0.0..=1.0).contains(x) && scores[0] == *x));
  }

  #[test]
  fn test_utility_run() {
    let weights =
      WeightVectorSet::new(vec![[0.9, 0.1], [0.5, 0.5], [0.1, 0.9]]).unwrap();
    let replacement =
      UtilityReplacement::new(AsfUtilityFunctionSet::new(weights, [0.0, 0.0]));
    let population = optimize(
      6,
      5,
      SequentialEvaluator,
      TournamentSelection::default(),
      replacement,
      NoHook,
    )
    .unwrap();
    assert_eq!(population.len(), 6);
  }
}
