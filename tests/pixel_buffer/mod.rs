use imager::{row_col_to_index, ImagerError, Pixel, PixelBuffer};

fn sample_pixels() -> Vec<Pixel> {
  vec![
    Pixel::new(255, 0, 0),
    Pixel::new(0, 255, 0),
    Pixel::new(0, 0, 255),
    Pixel::new(0, 0, 0),
    Pixel::new(128, 0, 0),
    Pixel::new(0, 128, 0),
  ]
}

#[test]
fn test_PixelBuffer_new_computes_height() {
  let image = PixelBuffer::new(sample_pixels(), 2).unwrap();
  assert_eq!(image.len(), 6);
  assert_eq!(image.width(), 2);
  assert_eq!(image.height(), 3);

  let image = PixelBuffer::new(sample_pixels(), 6).unwrap();
  assert_eq!(image.height(), 1);
}

#[test]
fn test_PixelBuffer_new_rejects_bad_width() {
  assert_eq!(PixelBuffer::new(sample_pixels(), 4), Err(ImagerError::InvalidDimension));
  assert_eq!(PixelBuffer::new(sample_pixels(), 0), Err(ImagerError::InvalidDimension));
  assert_eq!(PixelBuffer::new(Vec::new(), 2), Err(ImagerError::InvalidDimension));
  let empty = PixelBuffer::new(Vec::new(), 0).unwrap();
  assert!(empty.is_empty());
  assert_eq!((empty.width(), empty.height()), (0, 0));
}

#[test]
fn test_PixelBuffer_grid_matches_row_major_data() {
  for (width, height) in [(1, 1), (3, 5), (7, 2), (16, 16)] {
    let image = super::rand_image(width, height);
    let data = image.data();
    for row in 0..height {
      for col in 0..width {
        let i = row_col_to_index(row, col, width);
        assert_eq!(image.get_pixel(row, col).unwrap(), data[i]);
        assert_eq!(image.get(i).unwrap(), data[i]);
      }
    }
  }
}

#[test]
fn test_PixelBuffer_flat_access_bounds() {
  let mut image = PixelBuffer::new(sample_pixels(), 3).unwrap();
  assert_eq!(image.get(5).unwrap(), Pixel::new(0, 128, 0));
  assert_eq!(image.get(6), Err(ImagerError::IndexOutOfBounds));
  assert_eq!(image.set(6, Pixel::BLACK), Err(ImagerError::IndexOutOfBounds));
  image.set(0, Pixel::new(1, 2, 3)).unwrap();
  assert_eq!(image.get(0).unwrap(), Pixel::new(1, 2, 3));
}

#[test]
fn test_PixelBuffer_grid_access_bounds() {
  let mut image = PixelBuffer::new(sample_pixels(), 2).unwrap();
  assert_eq!(image.get_pixel(2, 1).unwrap(), Pixel::new(0, 128, 0));
  // (0, 2) would be flat index 2, but col 2 isn't in a 2 wide image
  assert_eq!(image.get_pixel(0, 2), Err(ImagerError::IndexOutOfBounds));
  assert_eq!(image.get_pixel(3, 0), Err(ImagerError::IndexOutOfBounds));
  assert_eq!(image.set_pixel(3, 0, Pixel::BLACK), Err(ImagerError::IndexOutOfBounds));

  image.set_pixel(1, 0, Pixel::new(9, 9, 9)).unwrap();
  assert_eq!(image.get(2).unwrap(), Pixel::new(9, 9, 9));
}

#[test]
fn test_PixelBuffer_reshape_is_lossless() {
  let mut image = super::rand_image(6, 4);
  let before = image.data();

  image.set_width(8).unwrap();
  assert_eq!((image.width(), image.height()), (8, 3));
  assert_eq!(image.data(), before);

  image.set_height(4).unwrap();
  assert_eq!((image.width(), image.height()), (6, 4));
  assert_eq!(image.data(), before);
}

#[test]
fn test_PixelBuffer_reshape_rejects_bad_dimensions() {
  let mut image = PixelBuffer::new(sample_pixels(), 2).unwrap();
  assert_eq!(image.set_width(4), Err(ImagerError::InvalidDimension));
  assert_eq!(image.set_height(5), Err(ImagerError::InvalidDimension));
  assert_eq!(image.set_width(0), Err(ImagerError::InvalidDimension));
  assert_eq!(image.set_height(0), Err(ImagerError::InvalidDimension));
  // failures leave the shape alone
  assert_eq!((image.width(), image.height()), (2, 3));

  let mut empty = PixelBuffer::empty();
  empty.set_width(0).unwrap();
  empty.set_height(0).unwrap();
  assert_eq!(empty.set_width(3), Err(ImagerError::InvalidDimension));
  assert_eq!((empty.width(), empty.height()), (0, 0));
}

#[test]
fn test_PixelBuffer_swap_pixels() {
  let mut image = PixelBuffer::new(sample_pixels(), 2).unwrap();
  image.swap_pixels(0, 0, 2, 1).unwrap();
  assert_eq!(image.get_pixel(0, 0).unwrap(), Pixel::new(0, 128, 0));
  assert_eq!(image.get_pixel(2, 1).unwrap(), Pixel::new(255, 0, 0));

  let before = image.data();
  assert_eq!(image.swap_pixels(0, 0, 0, 2), Err(ImagerError::IndexOutOfBounds));
  assert_eq!(image.data(), before);
}

#[test]
fn test_PixelBuffer_copy_is_independent() {
  let original = PixelBuffer::new(sample_pixels(), 2).unwrap();
  let mut copy = original.copy();
  assert_eq!(copy, original);

  let x = Pixel::new(7, 7, 7);
  copy.set(0, x).unwrap();
  copy.set_width(3).unwrap();
  assert_ne!(original.get(0).unwrap(), x);
  assert_eq!(original.width(), 2);
}

#[test]
fn test_PixelBuffer_display_string() {
  let image = PixelBuffer::new(sample_pixels(), 2).unwrap();
  assert_eq!(
    image.to_display_string(),
    "[[(255, 0, 0), (0, 255, 0)],\n[(0, 0, 255), (0, 0, 0)],\n[(128, 0, 0), (0, 128, 0)]]"
  );

  let one_row = PixelBuffer::new(vec![Pixel::new(1, 2, 3), Pixel::new(4, 5, 6)], 2).unwrap();
  assert_eq!(one_row.to_string(), "[[(1, 2, 3), (4, 5, 6)]]");

  assert_eq!(PixelBuffer::empty().to_display_string(), "[]");
}

#[test]
fn test_PixelBuffer_rgb_bytes() {
  let bytes = super::rand_bytes(4 * 3 * 3);
  let image = PixelBuffer::from_rgb_bytes(&bytes, 4).unwrap();
  assert_eq!(image.height(), 3);
  assert_eq!(image.as_rgb_bytes(), bytes.as_slice());
  assert_eq!(image.get(1).unwrap(), Pixel::new(bytes[3], bytes[4], bytes[5]));

  assert_eq!(PixelBuffer::from_rgb_bytes(&bytes[..5], 1), Err(ImagerError::InvalidPixel));
  assert_eq!(PixelBuffer::from_rgb_bytes(&bytes[..7], 1), Err(ImagerError::InvalidPixel));
  assert_eq!(PixelBuffer::from_rgb_bytes(&bytes, 5), Err(ImagerError::InvalidDimension));

  // the new buffer owns its pixels, and reads back in channel order
  let packed = [1_u8, 2, 3, 4, 5, 6];
  let image = PixelBuffer::from_rgb_bytes(&packed, 2).unwrap();
  assert_eq!(image.data(), vec![Pixel::new(1, 2, 3), Pixel::new(4, 5, 6)]);
  assert_eq!(image.as_rgb_bytes(), &packed);
  assert!(PixelBuffer::from_rgb_bytes(&[0_u8; 0], 0).unwrap().is_empty());
}

#[test]
fn test_PixelBuffer_into_pixels_returns_the_data() {
  let image = PixelBuffer::new(sample_pixels(), 3).unwrap();
  assert_eq!(image.into_pixels(), sample_pixels());
}

#[test]
fn test_Pixel_checked_conversion() {
  assert_eq!(Pixel::try_from([1_i32, 2, 3]), Ok(Pixel::new(1, 2, 3)));
  assert_eq!(Pixel::try_from([0_i32, 255, 256]), Err(ImagerError::InvalidPixel));
  assert_eq!(Pixel::try_from([-1_i32, 0, 0]), Err(ImagerError::InvalidPixel));
  assert_eq!(Pixel::try_from(&[1_i32, 2][..]), Err(ImagerError::InvalidPixel));
  assert_eq!(Pixel::try_from(&[1_i32, 2, 3, 4][..]), Err(ImagerError::InvalidPixel));
  assert_eq!(Pixel::try_from(&[10_i32, 20, 30][..]), Ok(Pixel::new(10, 20, 30)));
  assert_eq!(Pixel::new(255, 0, 128).to_string(), "(255, 0, 128)");
}

#[test]
fn test_Pixel_pixel_formats_interop() {
  use pixel_formats::{r8g8b8_Srgb, r8g8b8a8_Srgb};
  let p = Pixel::from(r8g8b8a8_Srgb { r: 1, g: 2, b: 3, a: 4 });
  assert_eq!(p, Pixel::new(1, 2, 3));
  let q: r8g8b8_Srgb = p.into();
  assert_eq!((q.r, q.g, q.b), (1, 2, 3));
}
