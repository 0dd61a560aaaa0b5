//! **glyphga** approximates a grayscale image with a grid of monospaced
//! characters, searched for by a genetic algorithm.
//!
//! Here's a [quick start example](#example) for the impatient.
//!
//! The crate is split into a small core that knows about images and text,
//! and a generic optimizer that only knows about [`Individual`]s.
//!
//! # Core
//!
//! - [`draw_line`] renders one line of text with a fixed 8x16 bitmap font,
//!   white over whatever the destination holds
//! - [`compare`] scores two rasters of equal bounds: the floored square root
//!   of their summed squared pixel differences, `0` meaning identical
//! - [`CharsetPolicy`] decides which characters may appear in a genome: any
//!   printable ASCII character, or just `#` and space
//! - [`Genome`] is a grid of characters sharing a read-only reference to its
//!   goal image. Genomes are created by a [`GenomeFactory`], so every genome
//!   of a run has the same dimensions
//!
//! # Optimizers
//!
//! An **optimizer** drives a population of [`Individual`]s through the GA
//! loop, calling into each individual to
//! 1. **Evaluate** it, obtaining a fitness score. The lower, the better
//! 2. **Crossover** it with another individual, copying some of the other
//!    individual's genes
//! 3. **Mutate** it
//! 4. **Clone** it, seeding offspring
//!
//! Optimizers own the random source and hand it to every operation, so a run
//! with a seeded source is reproducible. Individuals never store randomness
//! and share nothing mutable, which lets optimizers evaluate them in
//! parallel.
//!
//! This crate ships one optimizer, the generational [`GeneticAlgorithm`],
//! configured with a [`Selector`] picking parents and a [`Terminator`]
//! deciding when to stop. Both operators are implemented by closures, but
//! [`TournamentSelector`] and [`GenerationTerminator`] cover the usual case.
//!
//! # Example
//!
//! ```no_run
//! use glyphga::{
//!   io,
//!   optimizer::Optimizer,
//!   CharsetPolicy,
//!   GenerationTerminator,
//!   GeneticAlgorithm,
//!   GenomeFactory,
//!   TournamentSelector,
//! };
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let goal = io::load_goal("image.png").unwrap();
//! let factory = GenomeFactory::new(goal, CharsetPolicy::Printable);
//! let ga = GeneticAlgorithm::builder()
//!   .factory(|rng: &mut StdRng| factory.generate(rng))
//!   .population_size(150)
//!   .selector(TournamentSelector(3))
//!   .terminator(GenerationTerminator(250))
//!   .rng(StdRng::seed_from_u64(42))
//!   .build();
//! let best = ga
//!   .optimize_with(|generation, best| {
//!     println!("{generation}: {}\n{}", best.score, best.individual)
//!   })
//!   .unwrap();
//! io::save(&best.individual.render(), "best.png").unwrap();
//! ```
//!
//! [`draw_line`]: crate::glyph::draw_line
//! [`compare`]: crate::fitness::compare
//! [`CharsetPolicy`]: crate::charset::CharsetPolicy
//! [`Genome`]: crate::genome::Genome
//! [`GenomeFactory`]: crate::genome::GenomeFactory
//! [`Individual`]: crate::individual::Individual
//! [`GeneticAlgorithm`]: crate::optimizer::genetic_algorithm::GeneticAlgorithm
//! [`Selector`]: crate::selection::Selector
//! [`Terminator`]: crate::termination::Terminator
//! [`TournamentSelector`]: crate::selection::TournamentSelector
//! [`GenerationTerminator`]: crate::termination::GenerationTerminator

#![warn(missing_docs)]

pub mod charset;
pub mod config;
pub mod fitness;
pub mod genome;
pub mod glyph;
pub mod individual;
pub mod io;
pub mod optimizer;
pub mod score;
pub mod selection;
pub mod termination;

pub use charset::CharsetPolicy;
pub use config::Config;
pub use fitness::{compare, CompareError};
pub use genome::{Genome, GenomeFactory};
pub use individual::Individual;
pub use optimizer::{
  genetic_algorithm::GeneticAlgorithm,
  Champion,
  Optimizer,
};
pub use score::Score;
pub use selection::{BestSelector, TournamentSelector};
pub use termination::{GenerationTerminator, ScoreTerminator};
