use std::iter::Take;
use std::slice::{ChunksExact, ChunksExactMut, Iter, IterMut};

use crate::pixel_buffer::{CHANNELS_PER_PIXEL, USABLE_CHANNELS_PER_PIXEL};

/// Read only access to the red, green and blue bytes of RGBA pixels, alpha is skipped
pub struct UsableChannels<'a> {
    pixels: ChunksExact<'a, u8>,
    colors: Take<Iter<'a, u8>>,
}

impl<'a> UsableChannels<'a> {
    pub fn new(rgba: &'a [u8]) -> Self {
        Self {
            pixels: rgba.chunks_exact(CHANNELS_PER_PIXEL),
            colors: (&[]).iter().take(0),
        }
    }
}

impl<'a> Iterator for UsableChannels<'a> {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        self.colors
            .next()
            .or_else(|| {
                let pixel = self.pixels.next()?;
                self.colors = pixel.iter().take(USABLE_CHANNELS_PER_PIXEL);
                self.colors.next()
            })
            .copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.colors.len() + self.pixels.len() * USABLE_CHANNELS_PER_PIXEL;
        (n, Some(n))
    }
}

impl ExactSizeIterator for UsableChannels<'_> {}

/// Mutable access to the red, green and blue bytes of RGBA pixels, alpha is skipped
pub struct UsableChannelsMut<'a> {
    pixels: ChunksExactMut<'a, u8>,
    colors: Take<IterMut<'a, u8>>,
}

impl<'a> UsableChannelsMut<'a> {
    pub fn new(rgba: &'a mut [u8]) -> Self {
        Self {
            pixels: rgba.chunks_exact_mut(CHANNELS_PER_PIXEL),
            colors: (&mut []).iter_mut().take(0),
        }
    }
}

impl<'a> Iterator for UsableChannelsMut<'a> {
    type Item = &'a mut u8;

    fn next(&mut self) -> Option<Self::Item> {
        self.colors.next().or_else(|| {
            let pixel = self.pixels.next()?;
            self.colors = pixel.iter_mut().take(USABLE_CHANNELS_PER_PIXEL);
            self.colors.next()
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.colors.len() + self.pixels.len() * USABLE_CHANNELS_PER_PIXEL;
        (n, Some(n))
    }
}

impl ExactSizeIterator for UsableChannelsMut<'_> {}
