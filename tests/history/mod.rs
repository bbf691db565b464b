use imager::{filters, stego, History, ImageEditor, ImagerError, PixelBuffer, MAX_HISTORY};

#[test]
fn test_History_starts_at_original() {
  let original = super::rand_image(4, 3);
  let history = History::new(original.clone());
  assert_eq!(history.len(), 1);
  assert!(!history.is_empty());
  assert_eq!(history.current(), &original);
  assert_eq!(history.original(), &original);
}

#[test]
fn test_History_undo_restores_previous() {
  let original = super::rand_image(4, 3);
  let mut history = History::new(original.clone());

  history.increment();
  filters::invert(history.current_mut());
  let inverted = history.current().clone();
  assert_ne!(&inverted, &original);

  history.increment();
  filters::transpose(history.current_mut()).unwrap();
  assert_eq!((history.current().width(), history.current().height()), (3, 4));
  assert_eq!(history.len(), 3);

  history.undo().unwrap();
  assert_eq!(history.current(), &inverted);
  history.undo().unwrap();
  assert_eq!(history.current(), &original);
  assert_eq!(history.undo(), Err(ImagerError::NothingToUndo));
}

#[test]
fn test_History_edits_never_touch_original() {
  let original = super::rand_image(8, 8);
  let mut history = History::new(original.clone());
  filters::invert(history.current_mut());
  assert_eq!(history.original(), &original);

  history.clear();
  assert_eq!(history.len(), 1);
  assert_eq!(history.current(), &original);
}

#[test]
fn test_History_is_capped() {
  let mut history = History::new(PixelBuffer::empty());
  for _ in 0..MAX_HISTORY + 25 {
    history.increment();
  }
  assert_eq!(history.len(), MAX_HISTORY);
  for _ in 1..MAX_HISTORY {
    history.undo().unwrap();
  }
  assert_eq!(history.undo(), Err(ImagerError::NothingToUndo));
  assert!(!history.is_empty());
}

#[test]
fn test_History_with_hidden_message() {
  let mut history = History::new(super::rand_image(10, 10));
  history.increment();
  assert!(stego::encode(history.current_mut(), "undo me"));
  assert_eq!(stego::decode(history.current()).as_deref(), Some("undo me"));
  history.undo().unwrap();
  assert_eq!(stego::decode(history.current()), None);
}

#[test]
fn test_PixelBuffer_is_its_own_editor() {
  fn darken<E: ImageEditor>(editor: &mut E) {
    filters::monochromify(editor.current_mut(), true);
  }
  let mut image = super::rand_image(3, 3);
  darken(&mut image);
  assert!(image.pixels().iter().all(|p| p.r >= p.g && p.g >= p.b));
}
