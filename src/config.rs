//! Run configuration.

use std::path::PathBuf;

use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};

use crate::charset::CharsetPolicy;

/// Everything a run needs to know, parsed once from the command line and
/// passed down from there.
#[derive(Parser, Clone, PartialEq, Eq, Debug)]
#[command(
  name = "glyphga",
  version,
  about = "Approximates an image with text using a genetic algorithm",
  long_about = "Reads an image and evolves a grid of monospaced characters \
                that looks as much like it as possible. The grayscale goal \
                is written to --gray-output on startup, the best rendering \
                found to --best-output on completion."
)]
pub struct Config {
  /// Path to the input .png image
  #[arg(short, long, default_value = "./image.png")]
  pub file: PathBuf,

  /// Uses '#' and ' ' instead of any printable character
  #[arg(short, long)]
  pub simple: bool,

  /// Number of genomes in each generation
  #[arg(short, long, default_value_t = 150, value_parser = positive)]
  pub population: usize,

  /// Number of generations to run
  #[arg(short, long, default_value_t = 250)]
  pub generations: usize,

  /// Seed for a reproducible run; random when absent
  #[arg(long)]
  pub seed: Option<u64>,

  /// Where the grayscale goal image is written
  #[arg(long, default_value = "gray.png")]
  pub gray_output: PathBuf,

  /// Where the rendering of the best genome is written
  #[arg(long, default_value = "best.png")]
  pub best_output: PathBuf,
}

impl Config {
  /// Returns the charset policy selected by `--simple`.
  pub fn charset(&self) -> CharsetPolicy {
    if self.simple {
      CharsetPolicy::Binary
    } else {
      CharsetPolicy::Printable
    }
  }

  /// Returns the random source of the run, seeded with `--seed` if given.
  pub fn rng(&self) -> StdRng {
    match self.seed {
      Some(seed) => StdRng::seed_from_u64(seed),
      None => StdRng::from_entropy(),
    }
  }
}

fn positive(arg: &str) -> Result<usize, String> {
  match arg.parse() {
    Ok(0) => Err("must be at least 1".to_owned()),
    Ok(n) => Ok(n),
    Err(err) => Err(format!("{err}")),
  }
}
