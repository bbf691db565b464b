//! Module for the pixel value type.

use core::fmt;

use bytemuck::{Pod, Zeroable};
use pixel_formats::{r8g8b8_Srgb, r8g8b8a8_Srgb};

use crate::ImagerError;

/// Red/Green/Blue, u8 per channel.
///
/// Being `Pod`, a slice of pixels can be viewed directly as packed RGB bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Zeroable, Pod)]
#[repr(C)]
#[allow(missing_docs)]
pub struct Pixel {
  pub r: u8,
  pub g: u8,
  pub b: u8,
}
impl Pixel {
  /// Pure black.
  pub const BLACK: Self = Self::new(0, 0, 0);
  /// Pure red.
  pub const RED: Self = Self::new(255, 0, 0);

  /// Makes a pixel from its three channels.
  #[inline]
  #[must_use]
  pub const fn new(r: u8, g: u8, b: u8) -> Self {
    Self { r, g, b }
  }

  /// The channels in red, green, blue order.
  #[inline]
  #[must_use]
  pub const fn channels(self) -> [u8; 3] {
    [self.r, self.g, self.b]
  }

  /// Overall brightness, weighted `0.3 * r + 0.6 * g + 0.1 * b`.
  #[inline]
  #[must_use]
  pub fn brightness(self) -> f64 {
    0.3 * f64::from(self.r) + 0.6 * f64::from(self.g) + 0.1 * f64::from(self.b)
  }
}

impl fmt::Display for Pixel {
  /// Formats as a tuple: `(r, g, b)`.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "({}, {}, {})", self.r, self.g, self.b)
  }
}

impl From<(u8, u8, u8)> for Pixel {
  #[inline]
  fn from((r, g, b): (u8, u8, u8)) -> Self {
    Self { r, g, b }
  }
}
impl From<Pixel> for (u8, u8, u8) {
  #[inline]
  fn from(Pixel { r, g, b }: Pixel) -> Self {
    (r, g, b)
  }
}
impl From<[u8; 3]> for Pixel {
  #[inline]
  fn from([r, g, b]: [u8; 3]) -> Self {
    Self { r, g, b }
  }
}
impl From<r8g8b8_Srgb> for Pixel {
  #[inline]
  fn from(r8g8b8_Srgb { r, g, b }: r8g8b8_Srgb) -> Self {
    Self { r, g, b }
  }
}
impl From<Pixel> for r8g8b8_Srgb {
  #[inline]
  fn from(Pixel { r, g, b }: Pixel) -> Self {
    r8g8b8_Srgb { r, g, b }
  }
}
/// Drops the alpha channel.
impl From<r8g8b8a8_Srgb> for Pixel {
  #[inline]
  fn from(r8g8b8a8_Srgb { r, g, b, .. }: r8g8b8a8_Srgb) -> Self {
    Self { r, g, b }
  }
}

/// Checks that each channel is in `0..=255`.
impl TryFrom<[i32; 3]> for Pixel {
  type Error = ImagerError;
  #[inline]
  fn try_from([r, g, b]: [i32; 3]) -> Result<Self, Self::Error> {
    Ok(Self { r: u8::try_from(r)?, g: u8::try_from(g)?, b: u8::try_from(b)? })
  }
}
/// Checks for exactly three channels, each in `0..=255`.
impl TryFrom<&[i32]> for Pixel {
  type Error = ImagerError;
  #[inline]
  fn try_from(channels: &[i32]) -> Result<Self, Self::Error> {
    match channels {
      &[r, g, b] => Self::try_from([r, g, b]),
      _ => Err(ImagerError::InvalidPixel),
    }
  }
}
