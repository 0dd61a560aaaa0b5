//! Monospaced bitmap text rendering.
//!
//! Glyphs come from the public domain 8x8 font shipped by [`font8x8`]. Each
//! glyph is stretched to an 8x16 cell: even rows repeat the font rows and odd
//! rows carry the average of their two neighbours, so glyph edges end up with
//! partial coverage. Text is drawn in white *over* whatever the destination
//! already holds, with the coverage acting as alpha.

use std::sync::OnceLock;

use font8x8::{UnicodeFonts, BASIC_FONTS};
use image::GrayImage;

/// Width of a glyph cell in pixels.
pub const CELL_WIDTH: u32 = 8;

/// Height of a glyph cell in pixels.
pub const CELL_HEIGHT: u32 = 16;

const FONT_ROWS: usize = 8;
const GLYPH_COUNT: usize = 128;
const FULL: u16 = u8::MAX as u16;

/// Per pixel coverage of a glyph cell. `255` is fully covered.
type Coverage = [[u8; CELL_WIDTH as usize]; CELL_HEIGHT as usize];

fn glyphs() -> &'static [Option<Coverage>; GLYPH_COUNT] {
  static GLYPHS: OnceLock<[Option<Coverage>; GLYPH_COUNT]> = OnceLock::new();
  GLYPHS.get_or_init(|| {
    std::array::from_fn(|code| {
      // `code` is below 128, so the conversion is lossless
      let ch = char::from(code as u8);
      BASIC_FONTS
        .get(ch)
        .map(|bitmap| stretch(&bitmap))
        .filter(|coverage| coverage.iter().flatten().any(|&c| c > 0))
    })
  })
}

/// Stretches an 8x8 bitmap into an 8x16 coverage mask.
fn stretch(bitmap: &[u8; FONT_ROWS]) -> Coverage {
  // font8x8 stores the leftmost pixel in the least significant bit
  let ink = |row: usize, col: usize| -> u16 {
    bitmap.get(row).map_or(0, |bits| u16::from((bits >> col) & 1)) * FULL
  };
  let mut coverage = [[0; CELL_WIDTH as usize]; CELL_HEIGHT as usize];
  for (y, line) in coverage.iter_mut().enumerate() {
    let row = y / 2;
    for (x, pixel) in line.iter_mut().enumerate() {
      let value = if y % 2 == 0 {
        ink(row, x)
      } else {
        (ink(row, x) + ink(row + 1, x) + 1) / 2
      };
      *pixel = value as u8;
    }
  }
  coverage
}

/// Composites white over `background` with the given coverage.
fn over(background: u8, coverage: u8) -> u8 {
  let background = u16::from(background);
  let lit = (FULL - background) * u16::from(coverage) / FULL;
  (background + lit) as u8
}

/// Draws `text` as a single line of glyphs into `dest`.
///
/// The line starts at column 0 and its glyph cells occupy the pixel rows
/// `line * CELL_HEIGHT .. (line + 1) * CELL_HEIGHT`, so consecutive lines stack
/// downwards without a gap. Every byte of `text` advances the pen by
/// [`CELL_WIDTH`]; bytes without a glyph (spaces, control codes and anything
/// above `0x7F`) leave the destination untouched.
///
/// Nothing wraps. Callers are expected to keep
/// `text.len() * CELL_WIDTH <= dest.width()` and
/// `(line + 1) * CELL_HEIGHT <= dest.height()`; pixels falling outside `dest`
/// are dropped.
///
/// # Examples
/// ```
/// # use glyphga::glyph::{draw_line, CELL_HEIGHT};
/// # use image::GrayImage;
/// let mut canvas = GrayImage::new(32, 32);
/// draw_line("####", 0, &mut canvas);
/// // the second line is still blank
/// assert!((CELL_HEIGHT..32).all(|y| canvas.get_pixel(0, y).0[0] == 0));
/// ```
pub fn draw_line(text: impl AsRef<[u8]>, line: u32, dest: &mut GrayImage) {
  let (width, height) = dest.dimensions();
  let top = line.saturating_mul(CELL_HEIGHT);
  for (i, &code) in text.as_ref().iter().enumerate() {
    let Some(glyph) = glyphs().get(usize::from(code)).and_then(Option::as_ref)
    else {
      continue;
    };
    let left = u32::try_from(i)
      .unwrap_or(u32::MAX)
      .saturating_mul(CELL_WIDTH);
    if left >= width {
      break;
    }
    for (dy, row) in (0..).zip(glyph) {
      let y = top.saturating_add(dy);
      if y >= height {
        break;
      }
      for (dx, &coverage) in (0..).zip(row) {
        let x = left + dx;
        if coverage == 0 || x >= width {
          continue;
        }
        let pixel = dest.get_pixel_mut(x, y);
        pixel.0[0] = over(pixel.0[0], coverage);
      }
    }
  }
}
