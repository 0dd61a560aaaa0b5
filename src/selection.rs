//! Parent selection operators.

use rand::{seq::SliceRandom, RngCore};

use crate::score::Score;

/// An operator that picks parents for the next generation of solutions.
///
/// Solutions arrive ranked: `scores` is sorted ascending, so `solutions[0]` is
/// the best one. A selector returns `count` references to parents; the same
/// solution may be picked several times.
///
/// Randomness comes from the optimizer's source so seeded runs replay exactly.
///
/// # Examples
/// ```
/// # use glyphga::score::Score;
/// # use rand::RngCore;
/// // always picks the best solution
/// fn selector<'a>(
///   solutions: &'a [char],
///   _: &[Score],
///   count: usize,
///   _: &mut dyn RngCore,
/// ) -> Vec<&'a char> {
///   solutions.iter().take(1).cycle().take(count).collect()
/// }
/// ```
///
/// **Note that you probably want to implement this trait instead of using
/// closures**, closures that return borrowed solutions need an explicit
/// lifetime, which only `fn` items can provide.
pub trait Selector<S> {
  /// Takes ranked solutions and their scores and returns `count` references to
  /// selected parents.
  fn select<'a>(
    &self,
    solutions: &'a [S],
    scores: &[Score],
    count: usize,
    rng: &mut dyn RngCore,
  ) -> Vec<&'a S>;
}

impl<S, F> Selector<S> for F
where
  F: for<'a> Fn(&'a [S], &[Score], usize, &mut dyn RngCore) -> Vec<&'a S>,
{
  fn select<'a>(
    &self,
    solutions: &'a [S],
    scores: &[Score],
    count: usize,
    rng: &mut dyn RngCore,
  ) -> Vec<&'a S> {
    self(solutions, scores, count, rng)
  }
}

/// Picks parents uniformly among the `n` best solutions.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct BestSelector(pub usize);

impl<S> Selector<S> for BestSelector {
  fn select<'a>(
    &self,
    solutions: &'a [S],
    _: &[Score],
    count: usize,
    rng: &mut dyn RngCore,
  ) -> Vec<&'a S> {
    let best = &solutions[..self.0.min(solutions.len())];
    (0..count).filter_map(|_| best.choose(rng)).collect()
  }
}

/// Runs a tournament of `k` randomly drawn solutions for every parent; the
/// solution with the lowest score wins.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct TournamentSelector(pub usize);

impl<S> Selector<S> for TournamentSelector {
  fn select<'a>(
    &self,
    solutions: &'a [S],
    scores: &[Score],
    count: usize,
    rng: &mut dyn RngCore,
  ) -> Vec<&'a S> {
    let contestants: Vec<usize> = (0..solutions.len()).collect();
    (0..count)
      .filter_map(|_| {
        (0..self.0.max(1))
          .filter_map(|_| contestants.choose(rng).copied())
          .min_by_key(|&idx| scores[idx])
          .map(|idx| &solutions[idx])
      })
      .collect()
  }
}
