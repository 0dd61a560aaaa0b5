//! Character grid genomes.
//!
//! A [`Genome`] is a fixed size grid of character codes together with a shared
//! reference to the goal image it tries to resemble. Genomes are created by a
//! [`GenomeFactory`] bound to a goal image and a [`CharsetPolicy`]; every
//! genome of a factory has the same grid dimensions, which is what makes
//! [`crossover`](Individual::crossover) between any two of them valid.

use std::{fmt, sync::Arc};

use image::GrayImage;
use itertools::Itertools;
use rand::Rng;

use crate::{
  charset::CharsetPolicy,
  fitness::{compare, CompareError},
  glyph::draw_line,
  individual::Individual,
  score::Score,
};

/// Chance of each cell being redrawn by [`Individual::mutate`].
pub const MUTATION_PROBABILITY: f64 = 0.5;

/// Chance of each cell being copied from the donor by
/// [`Individual::crossover`].
pub const CROSSOVER_PROBABILITY: f64 = 0.5;

/// Goal width covered by one grid row.
const WIDTH_PER_ROW: u32 = 16;
/// Goal height covered by one grid column.
const HEIGHT_PER_COLUMN: u32 = 8;

/// Creates randomized [`Genome`]s for a goal image.
///
/// # Examples
/// ```
/// # use glyphga::{charset::CharsetPolicy, genome::GenomeFactory};
/// # use image::GrayImage;
/// # use rand::{rngs::StdRng, SeedableRng};
/// let factory = GenomeFactory::new(GrayImage::new(128, 64), CharsetPolicy::Binary);
/// assert_eq!(factory.dimensions(), (8, 8));
///
/// let genome = factory.generate(&mut StdRng::seed_from_u64(1));
/// assert_eq!(genome.dimensions(), factory.dimensions());
/// ```
#[derive(Clone, Debug)]
pub struct GenomeFactory {
  goal: Arc<GrayImage>,
  charset: CharsetPolicy,
  rows: usize,
  columns: usize,
}

impl GenomeFactory {
  /// Creates a factory for `goal`. Grid dimensions are derived from the goal's
  /// bounds once: the row count follows the goal's width (one row per 16
  /// pixels) and the column count follows its height (one column per 8
  /// pixels).
  pub fn new(goal: impl Into<Arc<GrayImage>>, charset: CharsetPolicy) -> Self {
    let goal = goal.into();
    let (width, height) = goal.dimensions();
    Self {
      rows: (width / WIDTH_PER_ROW) as usize,
      columns: (height / HEIGHT_PER_COLUMN) as usize,
      goal,
      charset,
    }
  }

  /// Returns `(rows, columns)` of the genomes this factory creates.
  pub fn dimensions(&self) -> (usize, usize) {
    (self.rows, self.columns)
  }

  /// Returns the goal image shared by every created genome.
  pub fn goal(&self) -> &Arc<GrayImage> {
    &self.goal
  }

  /// Creates a genome whose every cell is drawn independently from the
  /// charset policy, row by row.
  pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Genome {
    let grid = (0..self.rows)
      .map(|_| (0..self.columns).map(|_| rng.sample(self.charset)).collect())
      .collect();
    Genome {
      grid,
      goal: Arc::clone(&self.goal),
      charset: self.charset,
    }
  }
}

/// A grid of character codes approximating a goal image.
///
/// Cloning a genome deep copies its grid, while the goal image stays shared.
#[derive(Clone, Debug)]
pub struct Genome {
  grid: Vec<Vec<u8>>,
  goal: Arc<GrayImage>,
  charset: CharsetPolicy,
}

impl Genome {
  /// Returns `(rows, columns)` of the grid.
  pub fn dimensions(&self) -> (usize, usize) {
    (self.grid.len(), self.grid.first().map_or(0, Vec::len))
  }

  /// Returns the charset policy of this genome.
  pub fn charset(&self) -> CharsetPolicy {
    self.charset
  }

  /// Returns the goal image.
  pub fn goal(&self) -> &GrayImage {
    &self.goal
  }

  /// Returns the rows of the grid.
  pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
    self.grid.iter().map(Vec::as_slice)
  }

  /// Returns the code at `row` and `column`, if any.
  pub fn get(&self, row: usize, column: usize) -> Option<u8> {
    self.grid.get(row)?.get(column).copied()
  }

  /// Overwrites the code at `row` and `column`.
  ///
  /// # Panics
  ///
  /// Panics if the position is out of the grid or if the charset policy can't
  /// produce `code`.
  pub fn set(&mut self, row: usize, column: usize, code: u8) {
    assert!(
      self.charset.contains(code),
      "code {code:#04x} is not allowed by {:?}",
      self.charset
    );
    self.grid[row][column] = code;
  }

  /// Draws the grid into a new raster of the goal's size, one text line per
  /// row.
  pub fn render(&self) -> GrayImage {
    let (width, height) = self.goal.dimensions();
    let mut canvas = GrayImage::new(width, height);
    for (line, row) in (0..).zip(&self.grid) {
      draw_line(row, line, &mut canvas);
    }
    canvas
  }
}

impl Individual for Genome {
  type Error = CompareError;

  /// Compares the rendered grid with the goal image.
  ///
  /// A [`CompareError`] here means the genome was built inconsistently: the
  /// rendered raster always has the goal's bounds.
  fn evaluate(&self) -> Result<Score, CompareError> {
    compare(&self.render(), &self.goal)
  }

  fn mutate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
    for cell in self.grid.iter_mut().flatten() {
      if rng.gen_bool(MUTATION_PROBABILITY) {
        *cell = rng.sample(self.charset);
      }
    }
  }

  fn crossover<R: Rng + ?Sized>(&mut self, donor: &Self, rng: &mut R) {
    debug_assert_eq!(
      self.dimensions(),
      donor.dimensions(),
      "genomes must have equal dimensions"
    );
    let donor_cells = donor.grid.iter().flatten();
    for (cell, &gene) in self.grid.iter_mut().flatten().zip(donor_cells) {
      if rng.gen_bool(CROSSOVER_PROBABILITY) {
        *cell = gene;
      }
    }
  }
}

impl fmt::Display for Genome {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let text = self
      .rows()
      .map(|row| row.iter().copied().map(char::from).collect::<String>())
      .join("\n");
    f.write_str(&text)
  }
}

#[cfg(test)]
mod tests {
  use rand::prelude::*;

  use super::*;
  use crate::charset::{BLOCK, SPACE};

  const SEED: u64 = 99;

  fn hashes(width: u32, height: u32, lines: u32) -> GrayImage {
    let mut goal = GrayImage::new(width, height);
    for line in 0..lines {
      draw_line("#".repeat(64), line, &mut goal);
    }
    goal
  }

  fn seeded() -> StdRng {
    StdRng::seed_from_u64(SEED)
  }

  #[test]
  fn test_dimensions() {
    let factory =
      GenomeFactory::new(GrayImage::new(512, 256), CharsetPolicy::Printable);
    assert_eq!(factory.dimensions(), (32, 32));
    assert_eq!(factory.generate(&mut seeded()).dimensions(), (32, 32));

    let factory =
      GenomeFactory::new(GrayImage::new(64, 128), CharsetPolicy::Printable);
    assert_eq!(factory.dimensions(), (4, 16));

    let factory =
      GenomeFactory::new(GrayImage::new(15, 7), CharsetPolicy::Binary);
    assert_eq!(factory.dimensions(), (0, 0));
    let genome = factory.generate(&mut seeded());
    assert_eq!(genome.to_string(), "");
    assert_eq!(genome.render().dimensions(), (15, 7));
  }

  #[test]
  fn test_cells_follow_charset() {
    let goal = Arc::new(GrayImage::new(256, 256));
    let mut rng = seeded();
    for charset in [CharsetPolicy::Printable, CharsetPolicy::Binary] {
      let factory = GenomeFactory::new(Arc::clone(&goal), charset);
      let mut genome = factory.generate(&mut rng);
      for _ in 0..5 {
        genome.mutate(&mut rng);
        let other = factory.generate(&mut rng);
        genome.crossover(&other, &mut rng);
        assert!(genome.rows().flatten().all(|&c| charset.contains(c)));
      }
    }
  }

  #[test]
  fn test_same_seed_same_genome() {
    let factory = GenomeFactory::new(hashes(128, 128, 4), CharsetPolicy::Binary);
    let a = factory.generate(&mut seeded());
    let b = factory.generate(&mut seeded());
    assert_eq!(a.to_string(), b.to_string());
  }

  #[test]
  fn test_crossover_of_equal_genomes() {
    let factory = GenomeFactory::new(hashes(128, 128, 4), CharsetPolicy::Binary);
    let mut a = factory.generate(&mut seeded());
    let b = factory.generate(&mut seeded());

    let score_a = a.evaluate().unwrap();
    let score_b = b.evaluate().unwrap();
    assert_eq!(score_a, score_b);

    a.crossover(&b, &mut seeded());
    assert_eq!(a.evaluate().unwrap(), score_a);
  }

  #[test]
  fn test_crossover_is_one_directional() {
    let factory =
      GenomeFactory::new(GrayImage::new(128, 128), CharsetPolicy::Printable);
    let mut rng = seeded();
    let mut recipient = factory.generate(&mut rng);
    let donor = factory.generate(&mut rng);
    let recipient_before = recipient.clone();
    let donor_text = donor.to_string();

    recipient.crossover(&donor, &mut rng);

    assert_eq!(donor.to_string(), donor_text);
    let (rows, columns) = recipient.dimensions();
    let mut from_donor = 0;
    for row in 0..rows {
      for column in 0..columns {
        let cell = recipient.get(row, column);
        assert!(
          cell == donor.get(row, column)
            || cell == recipient_before.get(row, column)
        );
        if cell != recipient_before.get(row, column) {
          from_donor += 1;
        }
      }
    }
    assert!(from_donor > 0);
  }

  #[test]
  fn test_clone_is_independent() {
    let factory =
      GenomeFactory::new(GrayImage::new(128, 128), CharsetPolicy::Binary);
    let mut original = factory.generate(&mut seeded());
    original.set(0, 0, SPACE);

    let mut copy = original.clone();
    assert_eq!(compare(&original.render(), &copy.render()), Ok(0));

    copy.set(0, 0, BLOCK);
    assert_ne!(compare(&original.render(), &copy.render()), Ok(0));
    assert_eq!(original.get(0, 0), Some(SPACE));
    assert_ne!(original.evaluate().unwrap(), copy.evaluate().unwrap());
  }

  #[test]
  fn test_clone_shares_goal() {
    let factory =
      GenomeFactory::new(GrayImage::new(64, 64), CharsetPolicy::Binary);
    let original = factory.generate(&mut seeded());
    let copy = original.clone();
    assert!(Arc::ptr_eq(&original.goal, &copy.goal));
    assert!(Arc::ptr_eq(&original.goal, factory.goal()));
  }

  #[test]
  fn test_mutate_replays_with_seed() {
    let factory =
      GenomeFactory::new(GrayImage::new(256, 128), CharsetPolicy::Printable);
    let mut a = factory.generate(&mut seeded());
    let mut b = a.clone();
    a.mutate(&mut StdRng::seed_from_u64(5));
    b.mutate(&mut StdRng::seed_from_u64(5));
    assert_eq!(a.to_string(), b.to_string());
  }

  #[test]
  fn test_mutate_changes_about_half() {
    let factory =
      GenomeFactory::new(GrayImage::new(512, 512), CharsetPolicy::Printable);
    let mut rng = seeded();
    let before = factory.generate(&mut rng);
    let mut after = before.clone();
    after.mutate(&mut rng);

    let changed = before
      .rows()
      .flatten()
      .zip(after.rows().flatten())
      .filter(|(a, b)| a != b)
      .count();
    // 2048 cells, each redrawn with chance 1/2 and kept by the redraw
    // with chance 1/95
    assert!((800..1200).contains(&changed), "{changed} cells changed");
  }

  #[test]
  fn test_render_is_idempotent() {
    let factory =
      GenomeFactory::new(GrayImage::new(160, 96), CharsetPolicy::Printable);
    let genome = factory.generate(&mut seeded());
    let first = genome.render();
    assert_eq!(first, genome.render());
    assert_eq!(first.dimensions(), (160, 96));
  }

  #[test]
  fn test_render_draws_rows_as_lines() {
    let factory =
      GenomeFactory::new(GrayImage::new(32, 32), CharsetPolicy::Binary);
    let mut genome = factory.generate(&mut seeded());
    assert_eq!(genome.dimensions(), (2, 4));
    for row in 0..2 {
      for column in 0..4 {
        genome.set(row, column, SPACE);
      }
    }
    assert!(genome.render().pixels().all(|p| p.0[0] == 0));

    genome.set(1, 1, BLOCK);
    let mut expected = GrayImage::new(32, 32);
    draw_line("    ", 0, &mut expected);
    draw_line(" #  ", 1, &mut expected);
    assert!(expected.pixels().any(|p| p.0[0] > 0));
    assert_eq!(genome.render(), expected);
  }

  #[test]
  fn test_perfect_score() {
    let blank =
      GenomeFactory::new(GrayImage::new(64, 32), CharsetPolicy::Binary);
    let source = blank.generate(&mut seeded());

    // same seed, same dimensions: the genome reproduces its own rendering
    let factory = GenomeFactory::new(source.render(), CharsetPolicy::Binary);
    let genome = factory.generate(&mut seeded());
    assert_eq!(genome.to_string(), source.to_string());
    assert_eq!(genome.evaluate(), Ok(0));
  }

  #[test]
  fn test_to_text() {
    let factory =
      GenomeFactory::new(GrayImage::new(48, 16), CharsetPolicy::Binary);
    let mut genome = factory.generate(&mut seeded());
    assert_eq!(genome.dimensions(), (3, 2));
    for (row, pattern) in ["# ", " #", "##"].iter().enumerate() {
      for (column, code) in pattern.bytes().enumerate() {
        genome.set(row, column, code);
      }
    }
    assert_eq!(genome.to_string(), "# \n #\n##");
  }

  #[test]
  #[should_panic]
  fn test_set_rejects_foreign_codes() {
    let factory =
      GenomeFactory::new(GrayImage::new(32, 32), CharsetPolicy::Binary);
    factory.generate(&mut seeded()).set(0, 0, b'A');
  }
}
