//! Fitness score type and ranking helpers.

/// A fitness score: the dissimilarity between a candidate and its goal.
///
/// The target value of a score, which it converges at, is `0`. The lower the
/// score, the closer the candidate is to the goal.
pub type Score = u64;

/// Sorts solutions and their scores together, best (lowest) score first.
/// Solutions with equal scores keep their relative order.
pub(crate) fn rank<S>(
  solutions: Vec<S>,
  scores: Vec<Score>,
) -> (Vec<S>, Vec<Score>) {
  debug_assert_eq!(
    solutions.len(),
    scores.len(),
    "number of solutions must match number of scores"
  );
  let mut ranked: Vec<_> = solutions.into_iter().zip(scores).collect();
  ranked.sort_by_key(|(_, score)| *score);
  ranked.into_iter().unzip()
}
