#![forbid(unsafe_code)]

//! Provides the heap-allocated [`PixelBuffer`] type.
//!
//! The buffer holds one flat `Vec` of pixels, and the width and height give a
//! row-major 2D view over that same data. Changing the width (or height) only
//! changes how the flat data is viewed, it never moves a pixel.

use alloc::{string::String, vec::Vec};
use core::fmt;

use crate::{ImagerError, Pixel};

/// Converts a `(row, col)` position within a given `width` 2D space into a
/// linear index.
///
/// This is how [`PixelBuffer`] converts 2D coordinates into index values
/// within its pixel vector. If you'd like to use the exact same function for
/// some reason, you can.
#[inline]
#[must_use]
pub const fn row_col_to_index(row: u32, col: u32, width: u32) -> usize {
  (row as usize) * (width as usize) + (col as usize)
}

/// An owned RGB image that can be addressed as a flat list or as a grid.
///
/// Invariant: `width * height == len()`, and a dimension is only 0 when there
/// are no pixels at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PixelBuffer {
  width: u32,
  height: u32,
  pixels: Vec<Pixel>,
}
impl PixelBuffer {
  /// Makes a buffer from a pixel list and a width.
  ///
  /// The vector is moved in, not copied. The height is computed from the
  /// width and the number of pixels.
  ///
  /// ## Failure
  /// * [`ImagerError::InvalidDimension`] if `width` doesn't evenly divide the
  ///   number of pixels. The width must be 0 exactly when the list is empty.
  #[inline]
  pub fn new(pixels: Vec<Pixel>, width: u32) -> Result<Self, ImagerError> {
    let height = dimension_partner(pixels.len(), width)?;
    Ok(Self { width, height, pixels })
  }

  /// A buffer with no pixels, 0 by 0.
  #[inline]
  #[must_use]
  pub const fn empty() -> Self {
    Self { width: 0, height: 0, pixels: Vec::new() }
  }

  /// Makes a buffer from packed `[r, g, b, r, g, b, ...]` bytes.
  ///
  /// ## Failure
  /// * [`ImagerError::InvalidPixel`] if the byte count isn't a multiple of 3.
  /// * Otherwise, same as [`PixelBuffer::new`].
  pub fn from_rgb_bytes(bytes: &[u8], width: u32) -> Result<Self, ImagerError> {
    let pixels: &[Pixel] =
      bytemuck::try_cast_slice(bytes).map_err(|_| ImagerError::InvalidPixel)?;
    Self::new(pixels.to_vec(), width)
  }

  /// Views the pixel data as packed `[r, g, b, ...]` bytes.
  #[inline]
  #[must_use]
  pub fn as_rgb_bytes(&self) -> &[u8] {
    bytemuck::cast_slice(&self.pixels)
  }

  /// Number of pixels in the image.
  #[inline]
  #[must_use]
  pub fn len(&self) -> usize {
    self.pixels.len()
  }

  /// If the image has no pixels.
  #[inline]
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.pixels.is_empty()
  }

  /// The number of columns.
  #[inline]
  #[must_use]
  pub const fn width(&self) -> u32 {
    self.width
  }

  /// The number of rows.
  #[inline]
  #[must_use]
  pub const fn height(&self) -> u32 {
    self.height
  }

  /// Reshapes the image to the given width, recomputing the height.
  ///
  /// No pixel is moved, only the grid view over the flat data changes.
  ///
  /// ## Failure
  /// * [`ImagerError::InvalidDimension`] if `width` doesn't evenly divide the
  ///   number of pixels, or if exactly one of `width` and the pixel count is
  ///   0. The buffer is unchanged on failure.
  #[inline]
  pub fn set_width(&mut self, width: u32) -> Result<(), ImagerError> {
    self.height = dimension_partner(self.pixels.len(), width)?;
    self.width = width;
    Ok(())
  }

  /// Reshapes the image to the given height, recomputing the width.
  ///
  /// ## Failure
  /// * Same as [`PixelBuffer::set_width`].
  #[inline]
  pub fn set_height(&mut self, height: u32) -> Result<(), ImagerError> {
    self.width = dimension_partner(self.pixels.len(), height)?;
    self.height = height;
    Ok(())
  }

  /// The pixel at a flat position.
  #[inline]
  pub fn get(&self, pos: usize) -> Result<Pixel, ImagerError> {
    self.pixels.get(pos).copied().ok_or(ImagerError::IndexOutOfBounds)
  }

  /// Overwrites the pixel at a flat position.
  #[inline]
  pub fn set(&mut self, pos: usize, pixel: Pixel) -> Result<(), ImagerError> {
    let slot = self.pixels.get_mut(pos).ok_or(ImagerError::IndexOutOfBounds)?;
    *slot = pixel;
    Ok(())
  }

  /// The pixel at `(row, col)`.
  #[inline]
  pub fn get_pixel(&self, row: u32, col: u32) -> Result<Pixel, ImagerError> {
    let i = self.grid_index(row, col)?;
    Ok(self.pixels[i])
  }

  /// Overwrites the pixel at `(row, col)`.
  #[inline]
  pub fn set_pixel(&mut self, row: u32, col: u32, pixel: Pixel) -> Result<(), ImagerError> {
    let i = self.grid_index(row, col)?;
    self.pixels[i] = pixel;
    Ok(())
  }

  /// Exchanges the pixels at `(row1, col1)` and `(row2, col2)`.
  ///
  /// Both positions are checked before anything is written.
  #[inline]
  pub fn swap_pixels(
    &mut self, row1: u32, col1: u32, row2: u32, col2: u32,
  ) -> Result<(), ImagerError> {
    let a = self.grid_index(row1, col1)?;
    let b = self.grid_index(row2, col2)?;
    self.pixels.swap(a, b);
    Ok(())
  }

  /// A new buffer with its own copy of the pixel data and the same shape.
  #[inline]
  #[must_use]
  pub fn copy(&self) -> Self {
    self.clone()
  }

  /// A copy of the flat pixel data.
  #[inline]
  #[must_use]
  pub fn data(&self) -> Vec<Pixel> {
    self.pixels.clone()
  }

  /// Borrows the flat pixel data.
  #[inline]
  #[must_use]
  pub fn pixels(&self) -> &[Pixel] {
    &self.pixels
  }

  /// Mutably borrows the flat pixel data.
  ///
  /// The length can't change through a slice, so the shape stays valid.
  #[inline]
  #[must_use]
  pub fn pixels_mut(&mut self) -> &mut [Pixel] {
    &mut self.pixels
  }

  /// Gives the pixel vector back, for handing to an encoder.
  #[inline]
  #[must_use]
  pub fn into_pixels(self) -> Vec<Pixel> {
    self.pixels
  }

  /// Iterates the rows, top to bottom.
  #[inline]
  pub fn rows(&self) -> impl Iterator<Item = &[Pixel]> + '_ {
    // chunks_exact panics on 0, and a 0-width image has no rows anyway.
    self.pixels.chunks_exact(self.width.max(1) as usize)
  }

  /// Renders the image as nested rows, one row per line.
  ///
  /// ```text
  /// [[(255, 0, 0), (0, 255, 0)],
  /// [(0, 0, 255), (0, 0, 0)]]
  /// ```
  #[must_use]
  pub fn to_display_string(&self) -> String {
    alloc::format!("{self}")
  }

  #[inline]
  fn grid_index(&self, row: u32, col: u32) -> Result<usize, ImagerError> {
    if row < self.height && col < self.width {
      Ok(row_col_to_index(row, col, self.width))
    } else {
      Err(ImagerError::IndexOutOfBounds)
    }
  }
}

impl fmt::Display for PixelBuffer {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("[")?;
    for (r, row) in self.rows().enumerate() {
      if r != 0 {
        f.write_str(",\n")?;
      }
      f.write_str("[")?;
      for (c, pixel) in row.iter().enumerate() {
        if c != 0 {
          f.write_str(", ")?;
        }
        write!(f, "{pixel}")?;
      }
      f.write_str("]")?;
    }
    f.write_str("]")
  }
}

/// Given one dimension, gives the other one for `len` pixels.
#[inline]
fn dimension_partner(len: usize, dim: u32) -> Result<u32, ImagerError> {
  if dim == 0 || len == 0 {
    return if dim == 0 && len == 0 { Ok(0) } else { Err(ImagerError::InvalidDimension) };
  }
  let dim = dim as usize;
  if len % dim != 0 {
    return Err(ImagerError::InvalidDimension);
  }
  u32::try_from(len / dim).map_err(|_| ImagerError::InvalidDimension)
}
