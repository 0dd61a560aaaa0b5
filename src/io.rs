//! Reading and writing images.

use std::path::Path;

use anyhow::{Context, Result};
use image::GrayImage;

/// Reads the image at `path` and converts it to 8-bit grayscale, preserving
/// luma.
///
/// # Errors
///
/// Fails if the file can't be read or decoded.
pub fn load_goal(path: impl AsRef<Path>) -> Result<GrayImage> {
  let path = path.as_ref();
  let image = image::open(path)
    .with_context(|| format!("failed to read image {}", path.display()))?;
  Ok(image.to_luma8())
}

/// Writes `image` to `path`. The format follows the file extension.
///
/// # Errors
///
/// Fails if the file can't be encoded or written.
pub fn save(image: &GrayImage, path: impl AsRef<Path>) -> Result<()> {
  let path = path.as_ref();
  image
    .save(path)
    .with_context(|| format!("failed to write image {}", path.display()))
}
