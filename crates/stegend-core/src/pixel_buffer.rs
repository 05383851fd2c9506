use crate::error::StegendError;
use crate::lsb::{UsableChannels, UsableChannelsMut};
use crate::result::Result;

/// bytes per pixel: red, green, blue, alpha
pub const CHANNELS_PER_PIXEL: usize = 4;

/// color channels per pixel that carry payload bits, alpha is never touched
pub const USABLE_CHANNELS_PER_PIXEL: usize = 3;

/// A decoded RGBA raster, 8 bits per channel, row-major.
///
/// The length of the underlying bytes always equals `width * height * 4`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// takes ownership of raw RGBA bytes, fails if they do not fit the dimensions
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|pixels| pixels.checked_mul(CHANNELS_PER_PIXEL));
        if expected != Some(data.len()) {
            return Err(StegendError::InvalidBuffer {
                width,
                height,
                len: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// builds a buffer by calling `f(x, y)` for every pixel
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> [u8; CHANNELS_PER_PIXEL],
    {
        let mut data = Vec::with_capacity(width as usize * height as usize * CHANNELS_PER_PIXEL);
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&f(x, y));
            }
        }

        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn pixel_count(&self) -> usize {
        self.data.len() / CHANNELS_PER_PIXEL
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// the red, green and blue bytes of all pixels in row-major order
    pub fn usable_channels(&self) -> UsableChannels<'_> {
        UsableChannels::new(&self.data)
    }

    pub(crate) fn usable_channels_mut(&mut self) -> UsableChannelsMut<'_> {
        UsableChannelsMut::new(&mut self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_matching_dimensions() {
        let buffer = PixelBuffer::new(2, 3, vec![0; 24]).expect("2x3 needs 24 bytes");
        assert_eq!(buffer.dimensions(), (2, 3));
        assert_eq!(buffer.pixel_count(), 6);
    }

    #[test]
    fn should_reject_mismatching_dimensions() {
        match PixelBuffer::new(2, 2, vec![0; 15]) {
            Err(StegendError::InvalidBuffer { width, height, len }) => {
                assert_eq!((width, height, len), (2, 2, 15));
            }
            other => panic!("expected InvalidBuffer, got {other:?}"),
        }
    }

    #[test]
    fn should_reject_overflowing_dimensions() {
        assert!(PixelBuffer::new(u32::MAX, u32::MAX, vec![]).is_err());
    }

    #[test]
    fn should_lay_out_pixels_row_major() {
        let buffer = PixelBuffer::from_fn(2, 2, |x, y| {
            let i = (x + 2 * y) as u8;
            [i, i, i, 255]
        });
        assert_eq!(
            buffer.as_bytes(),
            &[0, 0, 0, 255, 1, 1, 1, 255, 2, 2, 2, 255, 3, 3, 3, 255]
        );
    }
}
