//! DTLZ2 problem with 3 objectives solved with niching on reference points.

use std::{f64::consts::FRAC_PI_2, fs::File, io::Write, path::Path};

use mombi::{
  bounds::ObjectiveBounds,
  error::BoxError,
  evaluation::ParallelEachEvaluator,
  optimizer::{mombi::Mombi, Optimizer},
  population::Population,
  problem::Problem,
  reference_point::ReferencePoint,
  replacement::NichingReplacement,
  score::Scores,
  selection::TournamentSelection,
};
use rand::{seq::IteratorRandom, Rng};
use rand_distr::{Distribution, Normal};

// number of decision variables: `M - 1` position variables plus 10 distance
// variables
const VARIABLES: usize = 3 - 1 + 10;

type Solution = [f64; VARIABLES];

struct Dtlz2;

impl Problem<Solution, 3> for Dtlz2 {
  fn create_solution(&self) -> Solution {
    let mut rng = rand::thread_rng();
    std::array::from_fn(|_| rng.gen_range(0.0..=1.0))
  }

  fn evaluate(&self, x: &Solution) -> Result<Scores<3>, BoxError> {
    if x.iter().any(|v| !(0.0..=1.0).contains(v)) {
      return Err(format!("{x:?} is out of the unit hypercube").into());
    }
    let g: f64 = x[2..].iter().map(|v| (v - 0.5).powi(2)).sum();
    let (a, b) = (x[0] * FRAC_PI_2, x[1] * FRAC_PI_2);
    Ok([
      (1.0 + g) * a.cos() * b.cos(),
      (1.0 + g) * a.cos() * b.sin(),
      (1.0 + g) * a.sin(),
    ])
  }
}

fn main() {
  // SBX crossover for a pair of values in the unit interval
  let sbx = |a: f64, b: f64| -> (f64, f64) {
    let n = 15.0;
    let r: f64 = rand::thread_rng().gen_range(0.0..1.0);
    let beta = if r <= 0.5 {
      (2.0 * r).powf(1.0 / (n + 1.0))
    } else {
      (1.0 / (2.0 * (1.0 - r))).powf(1.0 / (n + 1.0))
    };
    let p = 0.5 * ((a + b) - beta * (b - a));
    let q = 0.5 * ((a + b) + beta * (b - a));
    (p.clamp(0.0, 1.0), q.clamp(0.0, 1.0))
  };
  // ...which is applied to each pair of variables
  let crossover = |x: &Solution, y: &Solution| -> (Solution, Solution) {
    let (mut p, mut q) = (*x, *y);
    for i in 0..VARIABLES {
      (p[i], q[i]) = sbx(x[i], y[i]);
    }
    (p, q)
  };

  // gaussian mutation of one variable on average
  let normal = Normal::new(0.0, 0.1).unwrap();
  let mutation = |x: &mut Solution| {
    let mut rng = rand::thread_rng();
    for v in x.iter_mut() {
      if rng.gen_bool(1.0 / VARIABLES as f64) {
        *v = (*v + normal.sample(&mut rng)).clamp(0.0, 1.0);
      }
    }
  };

  // prints the ideal point every 100 generations
  let mut generation = 0;
  let hook = |_: &Population<Solution, 3>, bounds: &ObjectiveBounds<3>| {
    generation += 1;
    if generation % 100 == 0 {
      println!("generation {generation}: ideal {:.4?}", bounds.ideal());
    }
  };

  // 91 reference points for 92 solutions
  let reference_points = ReferencePoint::generate(12);
  let optimizer = Mombi::builder()
    .problem(Dtlz2)
    .population_size(92)
    .max_iterations(400)
    // the problem will be evaluated concurrently for each solution
    .evaluator(ParallelEachEvaluator)
    .selection(TournamentSelection::default())
    .crossover(crossover)
    .mutation(mutation)
    .replacement(NichingReplacement::new(reference_points))
    .hook(hook)
    .build();

  let population = optimizer.optimize().unwrap();

  // Pareto optimal solutions of DTLZ2 lie on the unit sphere
  let distance = population
    .scores()
    .iter()
    .map(|f| (f.iter().map(|v| v * v).sum::<f64>().sqrt() - 1.0).abs())
    .sum::<f64>()
    / population.len() as f64;
  println!("mean distance to the Pareto front: {distance:.6}");

  // write scores to file in demos/dtlz2.csv
  let _ = File::create(Path::new(file!()).with_file_name("dtlz2.csv"))
    .unwrap()
    .write_all(
      population
        .scores()
        .iter()
        .map(|[a, b, c]| format!("{a} {b} {c}"))
        .collect::<Vec<_>>()
        .join("\n")
        .as_bytes(),
    );

  // print 10 random solutions' scores
  for f in population
    .scores()
    .iter()
    .choose_multiple(&mut rand::thread_rng(), 10)
  {
    println!("{f:.4?}");
  }
  println!("  ...  ");
}
