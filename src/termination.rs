//! Termination operators.

use crate::score::Score;

/// An operator that decides whether the optimizer should stop.
///
/// It is consulted once per generation, after the population has been
/// evaluated and ranked: `scores` is sorted ascending and `solutions[0]` is
/// the best solution of the generation.
///
/// # Examples
/// ```
/// # use glyphga::score::Score;
/// // stops as soon as a perfect solution shows up
/// let t = |_: &[char], scores: &[Score]| scores.first() == Some(&0);
/// ```
///
/// **Note that you always can implement this trait instead of using closures.**
pub trait Terminator<S> {
  /// If returns `true`, the algorithm is terminated.
  fn terminate(&mut self, solutions: &[S], scores: &[Score]) -> bool;
}

impl<S, F> Terminator<S> for F
where
  F: FnMut(&[S], &[Score]) -> bool,
{
  fn terminate(&mut self, solutions: &[S], scores: &[Score]) -> bool {
    self(solutions, scores)
  }
}

/// A `Terminator` that terminates the algorithm as soon as a certain number of
/// generations have passed.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct GenerationTerminator(pub usize);

impl<S> Terminator<S> for GenerationTerminator {
  fn terminate(&mut self, _: &[S], _: &[Score]) -> bool {
    match self.0 {
      0 => true,
      _ => {
        self.0 -= 1;
        false
      }
    }
  }
}

/// A `Terminator` that terminates the algorithm once any solution scores at
/// or below the target.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ScoreTerminator(pub Score);

impl<S> Terminator<S> for ScoreTerminator {
  fn terminate(&mut self, _: &[S], scores: &[Score]) -> bool {
    scores.iter().any(|&score| score <= self.0)
  }
}
