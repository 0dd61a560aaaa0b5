use std::{
  io::{stdout, Write},
  process::ExitCode,
};

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use glyphga::{
  io,
  Champion,
  Config,
  GenerationTerminator,
  GeneticAlgorithm,
  Genome,
  GenomeFactory,
  Optimizer,
  TournamentSelector,
};
use log::{error, info};
use rand::rngs::StdRng;

/// Contestants per tournament when picking parents.
const TOURNAMENT_SIZE: usize = 3;

fn main() -> ExitCode {
  let config = match Config::try_parse() {
    Ok(config) => config,
    Err(err) => {
      let _ = err.print();
      // help and version requests are not failures
      return if err.use_stderr() {
        ExitCode::FAILURE
      } else {
        ExitCode::SUCCESS
      };
    }
  };
  env_logger::Builder::from_env(Env::default().default_filter_or("info"))
    .init();

  match run(&config) {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      error!("{err:#}");
      ExitCode::FAILURE
    }
  }
}

fn run(config: &Config) -> Result<()> {
  let goal = io::load_goal(&config.file)?;
  info!(
    "loaded {} ({}x{})",
    config.file.display(),
    goal.width(),
    goal.height()
  );
  io::save(&goal, &config.gray_output)?;
  info!("grayscale goal written to {}", config.gray_output.display());

  let factory = GenomeFactory::new(goal, config.charset());
  let (rows, columns) = factory.dimensions();
  info!(
    "evolving {rows}x{columns} characters of {:?} with {} genomes",
    config.charset(),
    config.population
  );

  let champion = GeneticAlgorithm::builder()
    .factory(|rng: &mut StdRng| factory.generate(rng))
    .population_size(config.population)
    .selector(TournamentSelector(TOURNAMENT_SIZE))
    .terminator(GenerationTerminator(config.generations))
    .rng(config.rng())
    .build()
    .optimize_with(display_progress)
    .context("failed to evaluate a genome")?;

  io::save(&champion.individual.render(), &config.best_output)?;
  info!(
    "best genome (score {}) written to {}",
    champion.score,
    config.best_output.display()
  );
  Ok(())
}

/// Redraws the terminal with the best genome so far.
fn display_progress(generation: usize, best: &Champion<Genome>) {
  let mut out = stdout().lock();
  // clear the screen and move the cursor to the top left corner
  let _ = write!(
    out,
    "\x1b[2J\x1b[1;1H{}\nGeneration   {generation}\nBest fitness {}\n",
    best.individual, best.score
  );
  let _ = out.flush();
}
