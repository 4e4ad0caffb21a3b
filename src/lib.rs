//! **MOMBI** is a many-objective evolutionary optimization core. It evolves a
//! population of solutions toward the Pareto front of problems with three or
//! more objectives, where plain Pareto dominance stops telling solutions
//! apart. Instead, solutions are told apart by how well they approach a set of
//! directions in objective space, expressed either as weight vectors of
//! scalarizing utilities or as reference points on the unit simplex.
//!
//! Here's a [quick start example](#example) for the impatient.
//!
//! # Building blocks
//!
//! - A [`Problem`] creates random solutions and evaluates them, returning one
//!   [`Score`] per objective. Every objective is minimized. A constrained
//!   problem also reports how much a solution violates its constraints, and
//!   feasible solutions are then preferred in selection and replacement.
//! - An [`Evaluator`] evaluates whole populations, sequentially or in parallel.
//! - A [`Selection`], a [`Crossover`] and a [`Mutation`] produce offsprings.
//! - A [`Replacement`] decides which solutions survive a generation.
//! - A [`GenerationHook`] observes each generation.
//! - [`Mombi`] is an [`Optimizer`] that runs the generational loop over these
//!   collaborators, tracking the ideal and nadir points of everything it has
//!   evaluated in [`ObjectiveBounds`].
//!
//! Every collaborator trait is implemented for closures of a matching
//! signature, so small operators don't need a type of their own. Consult the
//! *Implementors* section of each trait to see which closures implement it.
//!
//! # Utilities and reference points
//!
//! The [`utility`] module provides the Achievement Scalarizing Function
//! [`AsfUtilityFunctionSet`]: for a weight vector `w` and a reference point
//! `z` the utility of an objective vector `f` is `max_i |f_i - z_i| / w_i`,
//! optionally computed on values mapped onto `[0, 1]` by a [`Normalizer`]. The
//! [`UtilityReplacement`] ranks solutions with these utilities.
//!
//! The [`reference_point`] and [`niching`] modules provide structured
//! reference points on the unit simplex and the niching protocol that spreads
//! survivors over them. The [`NichingReplacement`] uses them to break ties
//! between solutions of the same non-dominated front.
//!
//! # Parallelization
//!
//! The loop itself is sequential. Evaluation, usually the expensive part, can
//! be parallelized with [`ParallelEachEvaluator`] or
//! [`ParallelBatchEvaluator`], in which case both the problem and solutions
//! must implement `Sync`. For simple problems the overhead introduced by
//! parallelization usually only decreases performance. Benchmark, if in doubt.
//!
//! # Logging
//!
//! The crate logs through the [`log`](https://docs.rs/log) facade: run summary
//! at `info` level, bounds of each generation at `debug` level and niching
//! decisions at `trace` level. Install any logger to see them.
//!
//! # Example
//!
//! Here's the *DTLZ1*-like linear problem with three objectives solved with
//! niching on reference points.
//! ```no_run
//! use mombi::{
//!   error::BoxError,
//!   evaluation::ParallelBatchEvaluator,
//!   hook::LogProgress,
//!   optimizer::{mombi::Mombi, Optimizer},
//!   problem::Problem,
//!   reference_point::ReferencePoint,
//!   replacement::NichingReplacement,
//!   score::Scores,
//!   selection::TournamentSelection,
//! };
//! use rand::Rng;
//!
//! // a solution is a point of the unit square
//! struct Plane;
//!
//! impl Problem<[f64; 2], 3> for Plane {
//!   fn create_solution(&self) -> [f64; 2] {
//!     rand::thread_rng().gen()
//!   }
//!
//!   fn evaluate(&self, &[x, y]: &[f64; 2]) -> Result<Scores<3>, BoxError> {
//!     Ok([x * y, x * (1.0 - y), 1.0 - x])
//!   }
//! }
//!
//! // a blend of parents' coordinates
//! let crossover = |a: &[f64; 2], b: &[f64; 2]| {
//!   let r: f64 = rand::thread_rng().gen();
//!   let blend = |p: f64, q: f64| p + r * (q - p);
//!   let p = [blend(a[0], b[0]), blend(a[1], b[1])];
//!   let q = [blend(b[0], a[0]), blend(b[1], a[1])];
//!   (p, q)
//! };
//! // a small random step that stays inside the unit square
//! let mutation = |s: &mut [f64; 2]| {
//!   let mut rng = rand::thread_rng();
//!   s.iter_mut()
//!     .for_each(|v| *v = (*v + rng.gen_range(-0.05..0.05)).clamp(0.0, 1.0));
//! };
//! // a convenient builder with compile time verification from `typed-builder`
//! let population = Mombi::builder()
//!   .problem(Plane)
//!   .population_size(92)
//!   .max_iterations(200)
//!   .evaluator(ParallelBatchEvaluator)
//!   .selection(TournamentSelection::default())
//!   .crossover(crossover)
//!   .mutation(mutation)
//!   .replacement(NichingReplacement::new(ReferencePoint::generate(12)))
//!   .hook(LogProgress::default())
//!   .build()
//!   .optimize()
//!   .unwrap();
//! ```
//!
//! A complete example solving *DTLZ2* lives in the *demos* folder in the root
//! of the project.
//!
//! [`Problem`]: crate::problem::Problem
//! [`Score`]: crate::score::Score
//! [`Evaluator`]: crate::evaluation::Evaluator
//! [`ParallelEachEvaluator`]: crate::evaluation::ParallelEachEvaluator
//! [`ParallelBatchEvaluator`]: crate::evaluation::ParallelBatchEvaluator
//! [`Selection`]: crate::selection::Selection
//! [`Crossover`]: crate::recombination::Crossover
//! [`Mutation`]: crate::mutation::Mutation
//! [`Replacement`]: crate::replacement::Replacement
//! [`UtilityReplacement`]: crate::replacement::UtilityReplacement
//! [`NichingReplacement`]: crate::replacement::NichingReplacement
//! [`GenerationHook`]: crate::hook::GenerationHook
//! [`Mombi`]: crate::optimizer::mombi::Mombi
//! [`Optimizer`]: crate::optimizer::Optimizer
//! [`ObjectiveBounds`]: crate::bounds::ObjectiveBounds
//! [`AsfUtilityFunctionSet`]: crate::utility::AsfUtilityFunctionSet
//! [`Normalizer`]: crate::utility::Normalizer

#![warn(missing_docs)]

pub mod bounds;
pub mod error;
pub mod evaluation;
pub mod hook;
pub mod mutation;
pub mod niching;
pub mod optimizer;
pub mod population;
pub mod problem;
pub mod ranking;
pub mod recombination;
pub mod reference_point;
pub mod replacement;
pub mod score;
pub mod selection;
pub mod utility;
