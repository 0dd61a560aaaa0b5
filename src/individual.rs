//! The contract between candidate solutions and the optimizer.

use std::{error::Error, fmt::Display};

use rand::Rng;

use crate::score::Score;

/// A candidate solution driven by an optimizer.
///
/// An optimizer ranks individuals with [`evaluate`](Individual::evaluate),
/// breeds new ones with [`Clone::clone`], [`crossover`](Individual::crossover)
/// and [`mutate`](Individual::mutate), and reports progress with their
/// [`Display`] text.
///
/// Randomness is always passed in by the caller, never stored inside an
/// individual, so that replaying a seeded source reproduces a run exactly.
///
/// Individuals must be `Send + Sync`: an optimizer may evaluate *different*
/// individuals concurrently. A single individual is never mutated from two
/// places at once.
pub trait Individual: Clone + Display + Send + Sync {
  /// The error [`evaluate`](Individual::evaluate) may fail with.
  type Error: Error + Send + Sync + 'static;

  /// Returns the fitness score of this individual. The closer to 0, the
  /// better.
  fn evaluate(&self) -> Result<Score, Self::Error>;

  /// Randomly modifies this individual in place.
  fn mutate<R: Rng + ?Sized>(&mut self, rng: &mut R);

  /// Randomly copies genes of `donor` into this individual. `donor` is left
  /// unchanged.
  fn crossover<R: Rng + ?Sized>(&mut self, donor: &Self, rng: &mut R);
}
