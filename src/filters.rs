//! Whole-image filters.
//!
//! Each filter edits the buffer in place. The geometric ones that need to
//! read pixels they've already overwritten take a [`PixelBuffer::copy`]
//! first and read from that.

use crate::{ImagerError, Pixel, PixelBuffer};

/// Color of the bars drawn by [`jail`].
pub const JAIL_COLOR: Pixel = Pixel::RED;

/// Replaces each channel with its complement, `255 - c`.
pub fn invert(buffer: &mut PixelBuffer) {
  log::trace!("invert");
  for p in buffer.pixels_mut() {
    *p = Pixel::new(255 - p.r, 255 - p.g, 255 - p.b);
  }
}

/// Swaps rows and columns: the new width is the old height.
pub fn transpose(buffer: &mut PixelBuffer) -> Result<(), ImagerError> {
  log::trace!("transpose");
  let original = buffer.copy();
  buffer.set_width(original.height())?;
  for row in 0..buffer.height() {
    for col in 0..buffer.width() {
      buffer.set_pixel(row, col, original.get_pixel(col, row)?)?;
    }
  }
  Ok(())
}

/// Mirrors the image left to right.
pub fn reflect_horizontal(buffer: &mut PixelBuffer) -> Result<(), ImagerError> {
  log::trace!("reflect_horizontal");
  let width = buffer.width();
  for h in 0..width / 2 {
    for row in 0..buffer.height() {
      buffer.swap_pixels(row, h, row, width - 1 - h)?;
    }
  }
  Ok(())
}

/// Mirrors the image top to bottom.
pub fn reflect_vertical(buffer: &mut PixelBuffer) -> Result<(), ImagerError> {
  log::trace!("reflect_vertical");
  let height = buffer.height();
  for v in 0..height / 2 {
    for col in 0..buffer.width() {
      buffer.swap_pixels(v, col, height - 1 - v, col)?;
    }
  }
  Ok(())
}

/// Turns the image 90 degrees clockwise.
pub fn rotate_right(buffer: &mut PixelBuffer) -> Result<(), ImagerError> {
  log::trace!("rotate_right");
  let original = buffer.copy();
  buffer.set_width(original.height())?;
  for row in 0..buffer.height() {
    for col in 0..buffer.width() {
      let p = original.get_pixel(original.height() - col - 1, row)?;
      buffer.set_pixel(row, col, p)?;
    }
  }
  Ok(())
}

/// Turns the image 90 degrees counter-clockwise.
pub fn rotate_left(buffer: &mut PixelBuffer) -> Result<(), ImagerError> {
  log::trace!("rotate_left");
  let original = buffer.copy();
  buffer.set_width(original.height())?;
  for row in 0..buffer.height() {
    for col in 0..buffer.width() {
      let p = original.get_pixel(col, original.width() - row - 1)?;
      buffer.set_pixel(row, col, p)?;
    }
  }
  Ok(())
}

/// Removes all color, using each pixel's [brightness](Pixel::brightness).
///
/// * Greyscale: every channel becomes the brightness.
/// * Sepia: red is the brightness, green `0.6` of it, and blue `0.4` of it.
///
/// Fractions are truncated.
pub fn monochromify(buffer: &mut PixelBuffer, sepia: bool) {
  log::trace!("monochromify(sepia: {sepia})");
  for p in buffer.pixels_mut() {
    let y = p.brightness();
    *p = if sepia {
      Pixel::new(y as u8, (0.6 * y) as u8, (0.4 * y) as u8)
    } else {
      Pixel::new(y as u8, y as u8, y as u8)
    };
  }
}

/// Draws jail bars over the image.
///
/// * 3 pixel tall bars across the top and bottom.
/// * 4 pixel wide bars down the left and right edges.
/// * `(width - 8) / 50` more 4 pixel bars in between, with all the vertical
///   bars spaced as evenly as possible.
///
/// Bars are clipped to the image.
pub fn jail(buffer: &mut PixelBuffer) -> Result<(), ImagerError> {
  log::trace!("jail");
  let (width, height) = (buffer.width(), buffer.height());
  draw_h_bar(buffer, 0)?;
  draw_h_bar(buffer, height.saturating_sub(3))?;

  let interior = width.saturating_sub(8) / 50;
  let spacing = f64::from(width.saturating_sub(4)) / f64::from(interior + 1);
  for i in 0..=interior + 1 {
    // spacing is never negative, so adding 0.5 then truncating rounds
    let col = (f64::from(i) * spacing + 0.5) as u32;
    draw_v_bar(buffer, col)?;
  }
  Ok(())
}

/// Darkens toward the corners, like an old lens.
///
/// Each pixel is scaled by `1 - (d / hfd)^2`, where `d` is its distance from
/// the center and `hfd` is the distance from the center to a corner.
pub fn vignette(buffer: &mut PixelBuffer) -> Result<(), ImagerError> {
  log::trace!("vignette");
  let center_row = f64::from(buffer.height()) / 2.0;
  let center_col = f64::from(buffer.width()) / 2.0;
  let half_diagonal_sq = center_row * center_row + center_col * center_col;
  if half_diagonal_sq == 0.0 {
    return Ok(());
  }
  for row in 0..buffer.height() {
    for col in 0..buffer.width() {
      let dr = f64::from(row) - center_row;
      let dc = f64::from(col) - center_col;
      let factor = 1.0 - (dr * dr + dc * dc) / half_diagonal_sq;
      let p = buffer.get_pixel(row, col)?;
      let scale = |c: u8| (f64::from(c) * factor) as u8;
      buffer.set_pixel(row, col, Pixel::new(scale(p.r), scale(p.g), scale(p.b)))?;
    }
  }
  Ok(())
}

/// Averages each `step` by `step` block into a single color.
///
/// Blocks start at the top left. Blocks at the right and bottom edges are
/// clipped to the image and average only the pixels they cover.
///
/// ## Failure
/// * [`ImagerError::InvalidStep`] if `step` is 0.
pub fn pixellate(buffer: &mut PixelBuffer, step: u32) -> Result<(), ImagerError> {
  log::trace!("pixellate(step: {step})");
  if step == 0 {
    return Err(ImagerError::InvalidStep);
  }
  let (width, height) = (buffer.width(), buffer.height());
  for top in (0..height).step_by(step as usize) {
    for left in (0..width).step_by(step as usize) {
      let bottom = height.min(top.saturating_add(step));
      let right = width.min(left.saturating_add(step));

      let mut sum = [0_u64; 3];
      for row in top..bottom {
        for col in left..right {
          let p = buffer.get_pixel(row, col)?;
          for (s, c) in sum.iter_mut().zip(p.channels()) {
            *s += u64::from(c);
          }
        }
      }
      let count = u64::from(bottom - top) * u64::from(right - left);
      let [r, g, b] = sum.map(|s| (s / count) as u8);
      let average = Pixel::new(r, g, b);

      for row in top..bottom {
        for col in left..right {
          buffer.set_pixel(row, col, average)?;
        }
      }
    }
  }
  Ok(())
}

/// Fills 3 rows starting at `row`, clipped to the image.
fn draw_h_bar(buffer: &mut PixelBuffer, row: u32) -> Result<(), ImagerError> {
  for r in row..buffer.height().min(row.saturating_add(3)) {
    for col in 0..buffer.width() {
      buffer.set_pixel(r, col, JAIL_COLOR)?;
    }
  }
  Ok(())
}

/// Fills 4 columns starting at `col`, clipped to the image.
fn draw_v_bar(buffer: &mut PixelBuffer, col: u32) -> Result<(), ImagerError> {
  for row in 0..buffer.height() {
    for c in col..buffer.width().min(col.saturating_add(4)) {
      buffer.set_pixel(row, c, JAIL_COLOR)?;
    }
  }
  Ok(())
}
