//! Undo support for image edits.
//!
//! Filters and the steganography functions take a `&mut PixelBuffer`. To make
//! an edit undoable, call [`History::increment`] first and then edit
//! [`ImageEditor::current_mut`].

use alloc::vec::Vec;

use crate::{ImagerError, PixelBuffer};

/// Maximum number of images kept in a [`History`], including the original.
pub const MAX_HISTORY: usize = 100;

/// Anything that can hand out the image currently being edited.
pub trait ImageEditor {
  /// The image that edits should read.
  fn current(&self) -> &PixelBuffer;

  /// The image that edits should write.
  fn current_mut(&mut self) -> &mut PixelBuffer;
}

/// A bare buffer is its own current image, with no undo.
impl ImageEditor for PixelBuffer {
  #[inline]
  fn current(&self) -> &PixelBuffer {
    self
  }
  #[inline]
  fn current_mut(&mut self) -> &mut PixelBuffer {
    self
  }
}

/// An edit history: the original image plus a stack of edited versions.
///
/// The original is never modified and is never dropped from the history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
  original: PixelBuffer,
  edits: Vec<PixelBuffer>,
}
impl History {
  /// Starts a history for the image.
  ///
  /// The current image starts as a copy of the original.
  #[inline]
  #[must_use]
  pub fn new(original: PixelBuffer) -> Self {
    let current = original.copy();
    Self { original, edits: alloc::vec![current] }
  }

  /// The image the history was started with.
  #[inline]
  #[must_use]
  pub fn original(&self) -> &PixelBuffer {
    &self.original
  }

  /// Number of images held, counting the starting copy.
  #[inline]
  #[must_use]
  pub fn len(&self) -> usize {
    self.edits.len()
  }

  /// Pairs with [`History::len`]. A history always holds its starting copy,
  /// so this is always `false`.
  #[inline]
  #[must_use]
  pub const fn is_empty(&self) -> bool {
    false
  }

  /// Pushes a copy of the current image, so that the next edit can be undone.
  ///
  /// If this would go over [`MAX_HISTORY`], the oldest edit is forgotten.
  pub fn increment(&mut self) {
    let next = self.current().copy();
    self.edits.push(next);
    if self.edits.len() > MAX_HISTORY {
      // index 0 is the starting copy, which keeps undo back to the original
      self.edits.remove(1);
    }
    log::trace!("history depth {}", self.edits.len());
  }

  /// Throws away the most recent edit.
  ///
  /// ## Failure
  /// * [`ImagerError::NothingToUndo`] if only the starting copy is left.
  pub fn undo(&mut self) -> Result<(), ImagerError> {
    if self.edits.len() < 2 {
      return Err(ImagerError::NothingToUndo);
    }
    self.edits.pop();
    Ok(())
  }

  /// Throws away every edit, going back to a fresh copy of the original.
  pub fn clear(&mut self) {
    self.edits.clear();
    self.edits.push(self.original.copy());
  }
}
impl ImageEditor for History {
  #[inline]
  fn current(&self) -> &PixelBuffer {
    // `edits` always holds at least the starting copy.
    &self.edits[self.edits.len() - 1]
  }
  #[inline]
  fn current_mut(&mut self) -> &mut PixelBuffer {
    let last = self.edits.len() - 1;
    &mut self.edits[last]
  }
}
