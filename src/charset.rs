//! Character set policies.

use std::ops::RangeInclusive;

use rand::{distributions::Distribution, Rng};

/// Space, `0x20`.
pub const SPACE: u8 = b' ';

/// The block character, `#` (`0x23`).
pub const BLOCK: u8 = b'#';

/// Printable ASCII, `0x20` to `0x7E`.
pub const PRINTABLE: RangeInclusive<u8> = 0x20..=0x7E;

/// Decides which character codes may appear in a genome's cells.
///
/// A policy is a [`Distribution`] of character codes, so it can be sampled
/// with [`Rng::sample`].
///
/// # Examples
/// ```
/// # use glyphga::charset::CharsetPolicy;
/// # use rand::{rngs::StdRng, Rng, SeedableRng};
/// let mut rng = StdRng::seed_from_u64(0);
/// let code = rng.sample(CharsetPolicy::Binary);
/// assert!(code == b' ' || code == b'#');
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum CharsetPolicy {
  /// Any printable ASCII character, uniformly.
  #[default]
  Printable,
  /// [`SPACE`] or [`BLOCK`] with equal chance.
  Binary,
}

impl CharsetPolicy {
  /// Returns `true` if `code` can be produced by this policy.
  pub fn contains(self, code: u8) -> bool {
    match self {
      CharsetPolicy::Printable => PRINTABLE.contains(&code),
      CharsetPolicy::Binary => code == SPACE || code == BLOCK,
    }
  }
}

impl Distribution<u8> for CharsetPolicy {
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u8 {
    match self {
      CharsetPolicy::Printable => rng.gen_range(PRINTABLE),
      CharsetPolicy::Binary => {
        if rng.gen_bool(0.5) {
          SPACE
        } else {
          BLOCK
        }
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use std::collections::HashSet;

  use rand::prelude::*;

  use super::*;

  const DRAWS: usize = 5000;

  fn sample_codes(policy: CharsetPolicy, seed: u64) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    policy.sample_iter(&mut rng).take(DRAWS).collect()
  }

  #[test]
  fn test_printable_domain() {
    let codes = sample_codes(CharsetPolicy::Printable, 1);
    assert!(codes.iter().all(|c| (0x20..=0x7E).contains(c)));
    // 5000 uniform draws over 95 values hit every one of them
    let distinct: HashSet<_> = codes.into_iter().collect();
    assert_eq!(distinct.len(), 95);
  }

  #[test]
  fn test_binary_domain() {
    let codes = sample_codes(CharsetPolicy::Binary, 2);
    assert!(codes.iter().all(|&c| c == 0x20 || c == 0x23));
    let blocks = codes.iter().filter(|&&c| c == BLOCK).count();
    assert!((DRAWS * 2 / 5..DRAWS * 3 / 5).contains(&blocks));
  }

  #[test]
  fn test_contains() {
    assert!(CharsetPolicy::Printable.contains(b' '));
    assert!(CharsetPolicy::Printable.contains(b'~'));
    assert!(!CharsetPolicy::Printable.contains(0x1F));
    assert!(!CharsetPolicy::Printable.contains(0x7F));
    assert!(CharsetPolicy::Binary.contains(SPACE));
    assert!(CharsetPolicy::Binary.contains(BLOCK));
    assert!(!CharsetPolicy::Binary.contains(b'A'));
  }

  #[test]
  fn test_seeded_draws_replay() {
    for policy in [CharsetPolicy::Printable, CharsetPolicy::Binary] {
      assert_eq!(sample_codes(policy, 99), sample_codes(policy, 99));
    }
  }
}
