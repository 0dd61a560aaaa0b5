//! A generational genetic algorithm with elitism.

use std::marker::PhantomData;

use log::{debug, info, warn};
use rand::Rng;
use rayon::prelude::*;
use typed_builder::TypedBuilder;

use super::{Champion, Optimizer};
use crate::{
  individual::Individual,
  score::{rank, Score},
  selection::Selector,
  termination::Terminator,
};

/// A generational genetic algorithm.
///
/// Each generation the population is evaluated in parallel and ranked. The
/// `elitism` best individuals survive unchanged; the rest of the population is
/// replaced by offspring. Every offspring is a clone of a selected parent that
/// is crossed over with a second selected parent with chance `crossover_rate`
/// and then mutated with chance `mutation_rate`.
///
/// All randomness, including the creation of the initial population, is drawn
/// from `rng` on the calling thread, so a seeded `rng` replays a run exactly.
///
/// # Examples
/// ```
/// # use glyphga::{
/// #   charset::CharsetPolicy,
/// #   genome::GenomeFactory,
/// #   optimizer::{genetic_algorithm::GeneticAlgorithm, Optimizer},
/// #   selection::TournamentSelector,
/// #   termination::GenerationTerminator,
/// # };
/// # use image::GrayImage;
/// # use rand::{rngs::StdRng, SeedableRng};
/// let factory = GenomeFactory::new(GrayImage::new(64, 32), CharsetPolicy::Binary);
/// let ga = GeneticAlgorithm::builder()
///   .factory(|rng: &mut StdRng| factory.generate(rng))
///   .population_size(20)
///   .selector(TournamentSelector(3))
///   .terminator(GenerationTerminator(10))
///   .rng(StdRng::seed_from_u64(42))
///   .build();
/// let champion = ga.optimize().unwrap();
/// assert_eq!(champion.individual.dimensions(), (4, 4));
/// ```
#[derive(TypedBuilder, Debug)]
pub struct GeneticAlgorithm<I, Fac, Sel, Ter, R> {
  /// Creates the individuals of the initial population.
  factory: Fac,
  #[builder(
    default = 150,
    setter(
      transform = |n: usize| {
        assert!(n > 0, "population size must be positive");
        n
      },
      doc = "
Number of individuals in each generation. Defaults to `150`.

# Panics

Panics if the size is zero.",
    )
  )]
  population_size: usize,
  /// Picks parents for offspring.
  selector: Sel,
  /// Decides when to stop.
  terminator: Ter,
  #[builder(
    default = 0.7,
    setter(
      transform = |p: f64| {
        assert!((0.0..=1.0).contains(&p), "crossover rate must be in [0, 1]");
        p
      },
      doc = "
Chance of an offspring being crossed over with a second parent. Defaults to
`0.7`.

# Panics

Panics if the rate is not within `[0, 1]`.",
    )
  )]
  crossover_rate: f64,
  #[builder(
    default = 0.5,
    setter(
      transform = |p: f64| {
        assert!((0.0..=1.0).contains(&p), "mutation rate must be in [0, 1]");
        p
      },
      doc = "
Chance of an offspring being mutated. Defaults to `0.5`.

# Panics

Panics if the rate is not within `[0, 1]`.",
    )
  )]
  mutation_rate: f64,
  /// Number of best individuals carried over unchanged into the next
  /// generation. Defaults to `1`.
  #[builder(default = 1)]
  elitism: usize,
  /// The source of all randomness of the run.
  rng: R,
  #[builder(setter(skip), default)]
  _individual: PhantomData<I>,
}

impl<I, Fac, Sel, Ter, R> GeneticAlgorithm<I, Fac, Sel, Ter, R>
where
  I: Individual,
  Sel: Selector<I>,
  R: Rng,
{
  /// Creates `count` offspring from selected parents.
  fn breed(
    &mut self,
    population: &[I],
    scores: &[Score],
    count: usize,
  ) -> Vec<I> {
    let parents =
      self.selector.select(population, scores, count * 2, &mut self.rng);
    parents
      .chunks_exact(2)
      .map(|pair| {
        let mut child = pair[0].clone();
        if self.rng.gen_bool(self.crossover_rate) {
          child.crossover(pair[1], &mut self.rng);
        }
        if self.rng.gen_bool(self.mutation_rate) {
          child.mutate(&mut self.rng);
        }
        child
      })
      .collect()
  }
}

/// Evaluates every individual, in parallel.
fn evaluate_all<I: Individual>(
  population: &[I],
) -> Result<Vec<Score>, I::Error> {
  population.par_iter().map(I::evaluate).collect()
}

impl<I, Fac, Sel, Ter, R> Optimizer<I>
  for GeneticAlgorithm<I, Fac, Sel, Ter, R>
where
  I: Individual,
  Fac: FnMut(&mut R) -> I,
  Sel: Selector<I>,
  Ter: Terminator<I>,
  R: Rng,
{
  fn optimize_with<P>(
    mut self,
    mut progress: P,
  ) -> Result<Champion<I>, I::Error>
  where
    P: FnMut(usize, &Champion<I>),
  {
    let population: Vec<I> = (0..self.population_size)
      .map(|_| (self.factory)(&mut self.rng))
      .collect();
    let scores = evaluate_all(&population)?;
    let (mut population, mut scores) = rank(population, scores);

    // the population size is positive, so there is a first individual
    let mut champion = Champion {
      individual: population[0].clone(),
      score: scores[0],
      generation: 0,
    };
    let mut generation = 0;

    loop {
      match (population.first(), scores.first()) {
        (Some(best), Some(&score)) if score < champion.score => {
          champion = Champion {
            individual: best.clone(),
            score,
            generation,
          };
        }
        (None, _) => {
          warn!("population died out in generation {generation}");
          break;
        }
        _ => {}
      }
      debug!(
        "generation {generation}: best score {}, all-time best {}",
        scores[0], champion.score
      );
      progress(generation, &champion);

      if self.terminator.terminate(&population, &scores) {
        break;
      }

      let elite = self.elitism.min(population.len());
      let mut offspring =
        self.breed(&population, &scores, self.population_size - elite);
      let offspring_scores = evaluate_all(&offspring)?;

      population.truncate(elite);
      scores.truncate(elite);
      population.append(&mut offspring);
      scores.extend(offspring_scores);
      (population, scores) = rank(population, scores);
      generation += 1;
    }

    info!(
      "stopped after {generation} generations, best score {} (generation {})",
      champion.score, champion.generation
    );
    Ok(champion)
  }
}
