//! Optimizers driving populations of [`Individual`]s.

pub mod genetic_algorithm;

use crate::{individual::Individual, score::Score};

/// The best individual an optimizer has seen so far, the so-called hall of
/// fame.
#[derive(Clone, Debug)]
pub struct Champion<I> {
  /// A copy of the best individual.
  pub individual: I,
  /// Its fitness score.
  pub score: Score,
  /// The generation it was found in.
  pub generation: usize,
}

/// Represents an abstract optimizer.
pub trait Optimizer<I: Individual>: Sized {
  /// Runs `Optimizer` until the termination condition is met, calling
  /// `progress` once per generation with the generation number and the best
  /// individual found so far. Returns that best individual.
  ///
  /// # Errors
  ///
  /// Stops at and returns the first error raised by
  /// [`Individual::evaluate`].
  fn optimize_with<P>(self, progress: P) -> Result<Champion<I>, I::Error>
  where
    P: FnMut(usize, &Champion<I>);

  /// Runs `Optimizer` until the termination condition is met, then returns
  /// the best individual it has found.
  ///
  /// # Errors
  ///
  /// Stops at and returns the first error raised by
  /// [`Individual::evaluate`].
  fn optimize(self) -> Result<Champion<I>, I::Error> {
    self.optimize_with(|_, _| {})
  }
}
