use core::{fmt, num::TryFromIntError};

/// An error from the `imager` crate.
///
/// Accessor errors are programmer errors: the buffer methods check their
/// arguments and fail immediately rather than clamping or wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImagerError {
  /// A flat position, row, or column was outside the buffer.
  IndexOutOfBounds,

  /// A pixel had the wrong number of channels, or a channel outside `0..=255`.
  InvalidPixel,

  /// A width or height doesn't evenly divide the number of pixels.
  ///
  /// A dimension of 0 is only allowed for an empty buffer.
  InvalidDimension,

  /// A filter was given a step size of 0.
  InvalidStep,

  /// The edit history only holds the original image.
  NothingToUndo,
}
impl fmt::Display for ImagerError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::IndexOutOfBounds => write!(f, "position is outside the image"),
      Self::InvalidPixel => write!(f, "pixel must be three channels in 0..=255"),
      Self::InvalidDimension => write!(f, "dimension does not evenly divide the pixel count"),
      Self::InvalidStep => write!(f, "step must be greater than 0"),
      Self::NothingToUndo => write!(f, "no edits to undo"),
    }
  }
}
impl core::error::Error for ImagerError {}

impl From<TryFromIntError> for ImagerError {
  #[inline]
  fn from(_: TryFromIntError) -> Self {
    Self::InvalidPixel
  }
}
