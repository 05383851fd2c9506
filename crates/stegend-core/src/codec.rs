//! The LSB text codec.
//!
//! A message is framed by appending [`DELIMITER`], serialized to bits and hidden in the
//! least significant bit of the red, green and blue channel of every pixel in row-major
//! order. Alpha stays untouched. Decoding collects the same bits until the delimiter shows up.
//!
//! If a message contains the delimiter itself, decoding stops at its first occurrence and the
//! message comes back truncated.

use std::io::{BufReader, ErrorKind, Read, Write};

use log::debug;

use crate::error::StegendError;
use crate::lsb::{LsbReader, LsbWriter};
use crate::pixel_buffer::{PixelBuffer, USABLE_CHANNELS_PER_PIXEL};
use crate::result::Result;
use crate::text::{bytes_to_text, text_to_bytes};

/// end of message marker, must be identical for hide and unveil
pub const DELIMITER: &str = "$$STEGEND$$";

/// number of payload bits a buffer can carry
pub fn capacity(buffer: &PixelBuffer) -> usize {
    buffer.pixel_count() * USABLE_CHANNELS_PER_PIXEL
}

/// number of single-byte characters that fit into a buffer next to the delimiter
pub fn max_message_len(buffer: &PixelBuffer) -> usize {
    (capacity(buffer) >> 3).saturating_sub(DELIMITER.len())
}

/// Hides `message` in a copy of `buffer`.
///
/// ```rust
/// use stegend_core::{codec, PixelBuffer};
///
/// let carrier = PixelBuffer::from_fn(10, 10, |x, y| [x as u8, y as u8, 42, 255]);
/// let secret = codec::encode(&carrier, "Hi").expect("Hi fits into 10x10 pixels");
///
/// assert_eq!(codec::decode(&secret).as_deref(), Some("Hi"));
/// ```
pub fn encode(buffer: &PixelBuffer, message: &str) -> Result<PixelBuffer> {
    let mut payload = text_to_bytes(message)?;
    payload.extend_from_slice(DELIMITER.as_bytes());

    let required = payload.len() << 3;
    let available = capacity(buffer);
    debug!("hiding {required} bits in a carrier of {available} bits");
    if required > available {
        return Err(StegendError::Capacity {
            required,
            available,
        });
    }

    let mut secret = buffer.clone();
    LsbWriter::new(secret.usable_channels_mut())
        .write_all(&payload)
        .map_err(|e| match e.kind() {
            ErrorKind::WriteZero => StegendError::Capacity {
                required,
                available,
            },
            _ => StegendError::IoError(e),
        })?;

    Ok(secret)
}

/// Unveils a message hidden by [`encode`].
///
/// Returns `None` if no delimiter is found, which is different from `Some("")`, the
/// result of an empty message.
pub fn decode(buffer: &PixelBuffer) -> Option<String> {
    let delimiter = DELIMITER.as_bytes();
    let mut unveiled = Vec::with_capacity(capacity(buffer) >> 3);

    let bytes = BufReader::new(LsbReader::new(buffer.usable_channels())).bytes();
    for byte in bytes.map_while(|b| b.ok()) {
        unveiled.push(byte);
        if unveiled.ends_with(delimiter) {
            unveiled.truncate(unveiled.len() - delimiter.len());
            debug!("delimiter found after {} bytes", unveiled.len());

            return Some(bytes_to_text(&unveiled));
        }
    }
    debug!("no delimiter found in {} bytes", unveiled.len());

    None
}
