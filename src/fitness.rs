//! Pixel difference metric between grayscale rasters.

use image::GrayImage;
use thiserror::Error;

use crate::score::Score;

/// An error returned by [`compare`].
#[derive(Error, Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum CompareError {
  /// The rasters have different bounds. Nothing is resized or truncated.
  #[error("image bounds not equal: {left:?}, {right:?}")]
  DimensionMismatch {
    /// `(width, height)` of the left raster.
    left: (u32, u32),
    /// `(width, height)` of the right raster.
    right: (u32, u32),
  },
}

/// Returns the dissimilarity of two rasters: the floored square root of the
/// sum of squared per pixel intensity differences.
///
/// The result is symmetric and `0` if and only if the rasters are identical.
///
/// # Errors
///
/// Returns [`CompareError::DimensionMismatch`] if the bounds differ.
///
/// # Examples
/// ```
/// # use glyphga::fitness::compare;
/// # use image::{GrayImage, Luma};
/// let black = GrayImage::new(2, 2);
/// let gray = GrayImage::from_pixel(2, 2, Luma([3]));
/// assert_eq!(compare(&black, &gray), Ok(6)); // sqrt(4 * 3^2)
/// assert!(compare(&black, &GrayImage::new(2, 3)).is_err());
/// ```
pub fn compare(a: &GrayImage, b: &GrayImage) -> Result<Score, CompareError> {
  if a.dimensions() != b.dimensions() {
    return Err(CompareError::DimensionMismatch {
      left: a.dimensions(),
      right: b.dimensions(),
    });
  }
  let sum: u64 = a
    .pixels()
    .zip(b.pixels())
    .map(|(p, q)| squared_difference(p.0[0], q.0[0]))
    .sum();
  Ok(sum.isqrt())
}

fn squared_difference(a: u8, b: u8) -> u64 {
  let d = i64::from(a) - i64::from(b);
  d.unsigned_abs().pow(2)
}
