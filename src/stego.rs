//! Hides text in the low decimal digit of each color channel.
//!
//! Every pixel carries one value in `0..=999`, written as three decimal
//! digits: the hundreds digit in the red channel's ones place, the tens digit
//! in green, and the ones digit in blue. A message is framed like this:
//!
//! ```text
//! [6 pixels ] START_MARKER
//! [N pixels ] UTF-8 bytes of the message, one byte per pixel
//! [3 pixels ] END_MARKER
//! ```
//!
//! Channels only change in their ones digit, so each channel moves by at most
//! 9, or by at most 10 when the new value would go over 255.

use alloc::{string::String, vec::Vec};

use crate::{ImagerError, Pixel, PixelBuffer};

/// Values hidden in pixels `0..6` before any message.
pub const START_MARKER: [u8; 6] = [17, 28, 33, 43, 54, 113];

/// Values hidden in the 3 pixels right after the message bytes.
pub const END_MARKER: [u8; 3] = [14, 213, 33];

/// Pixels used by the markers around a message.
pub const MARKER_OVERHEAD: usize = START_MARKER.len() + END_MARKER.len();

/// Longest message, in UTF-8 bytes, that [`encode`] will accept.
pub const MAX_MESSAGE_BYTES: usize = 999_999;

/// Hides `value` in the ones digits of the pixel at `pos`.
///
/// ## Failure
/// * [`ImagerError::IndexOutOfBounds`] if `pos` isn't in the buffer.
pub fn encode_pixel(buffer: &mut PixelBuffer, pos: usize, value: u8) -> Result<(), ImagerError> {
  let Pixel { r, g, b } = buffer.get(pos)?;
  let digits = [value / 100, (value / 10) % 10, value % 10];
  let pixel = Pixel {
    r: replace_ones_digit(r, digits[0]),
    g: replace_ones_digit(g, digits[1]),
    b: replace_ones_digit(b, digits[2]),
  };
  buffer.set(pos, pixel)
}

/// Reads the value hidden in the ones digits of the pixel at `pos`.
///
/// The result is in `0..=999`. Only values up to 255 are ever written by
/// [`encode_pixel`], anything larger means the pixel holds no payload.
///
/// ## Failure
/// * [`ImagerError::IndexOutOfBounds`] if `pos` isn't in the buffer.
#[inline]
pub fn decode_pixel(buffer: &PixelBuffer, pos: usize) -> Result<u16, ImagerError> {
  let Pixel { r, g, b } = buffer.get(pos)?;
  Ok(u16::from(r % 10) * 100 + u16::from(g % 10) * 10 + u16::from(b % 10))
}

/// Number of UTF-8 bytes that [`encode`] can fit in the buffer.
#[inline]
#[must_use]
pub fn capacity(buffer: &PixelBuffer) -> usize {
  // `encode` requires strictly more pixels than it writes.
  buffer.len().saturating_sub(MARKER_OVERHEAD + 1).min(MAX_MESSAGE_BYTES)
}

/// Hides `text` in the buffer, returning if it fit.
///
/// The message needs its byte count plus [`MARKER_OVERHEAD`] pixels, and the
/// buffer must have strictly more pixels than that. When the message is too
/// long the buffer is left untouched.
pub fn encode(buffer: &mut PixelBuffer, text: &str) -> bool {
  let bytes = text.as_bytes();
  if bytes.len() > MAX_MESSAGE_BYTES {
    log::debug!("message of {} bytes is over the {MAX_MESSAGE_BYTES} byte limit", bytes.len());
    return false;
  }
  let required = MARKER_OVERHEAD + bytes.len();
  if buffer.len() <= required {
    log::debug!("image has {} pixels, message needs more than {required}", buffer.len());
    return false;
  }
  match write_frame(buffer, bytes) {
    Ok(()) => {
      log::trace!("hid {} bytes", bytes.len());
      true
    }
    Err(e) => {
      log::debug!("encode failed: {e}");
      false
    }
  }
}

/// Recovers a message hidden by [`encode`].
///
/// Gives `None` if the start marker is missing, a partial end marker runs off
/// the end of the buffer, a payload value isn't a byte, or the bytes aren't
/// UTF-8. A start marker with no end marker anywhere after it is read as an
/// empty message.
pub fn decode(buffer: &PixelBuffer) -> Option<String> {
  for (pos, &expected) in START_MARKER.iter().enumerate() {
    if decode_pixel(buffer, pos).ok()? != u16::from(expected) {
      log::trace!("no start marker");
      return None;
    }
  }

  let end = match find_end_marker(buffer) {
    Ok(Some(end)) => end,
    Ok(None) => {
      log::debug!("start marker found, but no end marker");
      0
    }
    Err(e) => {
      log::debug!("end marker scan failed: {e}");
      return None;
    }
  };

  let mut bytes = Vec::with_capacity(end.saturating_sub(START_MARKER.len()));
  for pos in START_MARKER.len()..end {
    let value = decode_pixel(buffer, pos).ok()?;
    bytes.push(u8::try_from(value).ok()?);
  }

  match String::from_utf8(bytes) {
    Ok(text) => Some(text),
    Err(e) => {
      log::debug!("hidden bytes are not UTF-8: {e}");
      None
    }
  }
}

/// Writes the start marker, the payload, then the end marker.
fn write_frame(buffer: &mut PixelBuffer, bytes: &[u8]) -> Result<(), ImagerError> {
  let values = START_MARKER.iter().chain(bytes).chain(END_MARKER.iter());
  for (pos, &value) in values.enumerate() {
    encode_pixel(buffer, pos, value)?;
  }
  Ok(())
}

/// First position where the three end marker values start, if any.
///
/// The scan starts at 0, so it also passes over the start marker. Only the
/// pixels after a matching value are read, so a partial match running off the
/// end of the buffer is an error.
fn find_end_marker(buffer: &PixelBuffer) -> Result<Option<usize>, ImagerError> {
  let [a, b, c] = END_MARKER.map(u16::from);
  for x in 0..buffer.len() {
    if decode_pixel(buffer, x)? == a
      && decode_pixel(buffer, x + 1)? == b
      && decode_pixel(buffer, x + 2)? == c
    {
      return Ok(Some(x));
    }
  }
  Ok(None)
}

/// Swaps in a new ones digit, stepping down by 10 if that passes 255.
#[inline]
#[must_use]
const fn replace_ones_digit(channel: u8, digit: u8) -> u8 {
  let n = (channel - channel % 10) as u16 + digit as u16;
  if n > 255 {
    (n - 10) as u8
  } else {
    n as u8
  }
}
