//! Serialization of single-byte text into bits and back.
//!
//! Every character occupies exactly one byte, so only U+0000..=U+00FF (Latin-1) can be
//! represented. Anything above is rejected instead of being silently mangled.

use crate::error::StegendError;
use crate::result::Result;
use crate::BitIterator;

/// An ordered sequence of bits, most significant bit of every byte first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitStream {
    bits: Vec<bool>,
}

impl BitStream {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            bits: BitIterator::new(bytes).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.bits
    }

    /// packs complete groups of 8 bits into bytes, a trailing shorter group is dropped
    pub fn to_bytes(&self) -> Vec<u8> {
        self.bits
            .chunks_exact(8)
            .map(|group| group.iter().fold(0u8, |byte, &bit| (byte << 1) | u8::from(bit)))
            .collect()
    }
}

impl FromIterator<bool> for BitStream {
    fn from_iter<T: IntoIterator<Item = bool>>(iter: T) -> Self {
        Self {
            bits: iter.into_iter().collect(),
        }
    }
}

/// 8 bits per character, most significant bit first, no separators
pub fn text_to_bits(text: &str) -> Result<BitStream> {
    Ok(BitStream::from_bytes(&text_to_bytes(text)?))
}

/// the inverse of [`text_to_bits`], a trailing group of less than 8 bits is ignored
pub fn bits_to_text(bits: &BitStream) -> String {
    bytes_to_text(&bits.to_bytes())
}

/// maps every character to the byte of the same code point
pub fn text_to_bytes(text: &str) -> Result<Vec<u8>> {
    text.chars()
        .enumerate()
        .map(|(position, character)| {
            u8::try_from(character)
                .map_err(|_| StegendError::UnsupportedCharacter { character, position })
        })
        .collect()
}

/// maps every byte to the character of the same code point
pub fn bytes_to_text(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}
