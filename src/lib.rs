#![no_std]
#![cfg_attr(docs_rs, feature(doc_cfg))]
#![warn(missing_docs)]

//! A crate for editing RGB images in memory.
//!
//! * [`PixelBuffer`] holds the pixels, and lets you treat them as a flat list
//!   or as a grid of rows and columns.
//! * [`filters`] has the whole-image edits (invert, rotate, sepia, and so on).
//! * [`stego`] hides a text message in the low decimal digits of the color
//!   channels, and gets it back out.
//! * [`History`] keeps the edit history so that edits can be undone.
//!
//! Loading and saving image files is left to other crates. A decoder's pixels
//! go in through [`PixelBuffer::new`] or [`PixelBuffer::from_rgb_bytes`], and
//! come back out with [`PixelBuffer::into_pixels`] or
//! [`PixelBuffer::as_rgb_bytes`].
//!
//! ```
//! use imager::{stego, Pixel, PixelBuffer};
//!
//! let mut image = PixelBuffer::new(vec![Pixel::BLACK; 20], 5).unwrap();
//! assert!(stego::encode(&mut image, "Hi"));
//! assert_eq!(stego::decode(&image).as_deref(), Some("Hi"));
//! ```

#[cfg(feature = "alloc")]
extern crate alloc;

mod error;
pub use error::*;

pub mod pixels;
pub use pixels::*;

#[cfg(feature = "alloc")]
#[cfg_attr(docs_rs, doc(cfg(feature = "alloc")))]
mod pixel_buffer;
#[cfg(feature = "alloc")]
pub use pixel_buffer::*;

#[cfg(feature = "alloc")]
#[cfg_attr(docs_rs, doc(cfg(feature = "alloc")))]
mod history;
#[cfg(feature = "alloc")]
pub use history::*;

#[cfg(feature = "alloc")]
#[cfg_attr(docs_rs, doc(cfg(feature = "alloc")))]
pub mod filters;

#[cfg(feature = "alloc")]
#[cfg_attr(docs_rs, doc(cfg(feature = "alloc")))]
pub mod stego;
