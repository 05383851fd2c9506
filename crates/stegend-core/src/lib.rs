//! # Stegend Core API
//!
//! Hides a text message in the least significant bits of an RGBA pixel buffer and unveils it
//! again. The message is framed by the delimiter `$$STEGEND$$`, there is no length header.
//!
//! The pure codec lives in [`codec`], working on a [`PixelBuffer`]. The [`api`] module wraps it
//! for PNG files.
//!
//! # Usage Examples
//!
//! ## Hide a message in a pixel buffer
//!
//! ```rust
//! use stegend_core::{codec, PixelBuffer};
//!
//! let carrier = PixelBuffer::new(2, 1, vec![10, 20, 30, 255, 40, 50, 60, 255])
//!     .expect("2x1 pixels take 8 bytes");
//! assert_eq!(codec::capacity(&carrier), 6);
//! assert!(codec::encode(&carrier, "too long").is_err());
//! ```
//!
//! ## Hide a message inside an image file
//!
//! ```rust
//! use stegend_core::{media, PixelBuffer};
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//! let carrier = temp_dir.path().join("carrier.png");
//! let secret = temp_dir.path().join("image-with-a-message-inside.png");
//! media::save_png(&PixelBuffer::from_fn(32, 32, |x, y| [x as u8, y as u8, 0, 255]), &carrier)
//!     .expect("Failed to write carrier image");
//!
//! stegend_core::api::hide::prepare()
//!     .with_message("Hello, World!")
//!     .with_image(&carrier)
//!     .with_output(&secret)
//!     .execute()
//!     .expect("Failed to hide message in image");
//!
//! let message = stegend_core::api::unveil::prepare()
//!     .from_secret_file(&secret)
//!     .execute()
//!     .expect("Failed to unveil message from image");
//! assert_eq!(message, "Hello, World!");
//! ```

#![warn(clippy::redundant_else)]

pub mod bit_iterator;
pub use bit_iterator::BitIterator;

pub mod api;
pub mod codec;
pub mod error;
pub mod lsb;
pub mod media;
pub mod pixel_buffer;
pub mod result;
pub mod text;

pub use crate::codec::{capacity, decode, encode, DELIMITER};
pub use crate::error::StegendError;
pub use crate::pixel_buffer::PixelBuffer;
pub use crate::result::Result;
pub use crate::text::{bits_to_text, text_to_bits, BitStream};
