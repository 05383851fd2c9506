use std::path::Path;

use crate::media::load_png;
use crate::{codec, PixelBuffer, Result};

/// How much a carrier can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capacity {
    /// payload bits, the delimiter included
    pub bits: usize,
    /// complete payload bytes, the delimiter included
    pub bytes: usize,
    /// characters left for the message after the delimiter
    pub max_message_len: usize,
}

impl From<&PixelBuffer> for Capacity {
    fn from(buffer: &PixelBuffer) -> Self {
        let bits = codec::capacity(buffer);
        Self {
            bits,
            bytes: bits >> 3,
            max_message_len: codec::max_message_len(buffer),
        }
    }
}

pub fn of_file(image: impl AsRef<Path>) -> Result<Capacity> {
    Ok(Capacity::from(&load_png(image.as_ref())?))
}
