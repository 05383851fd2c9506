use std::io::{Read, Result};

use bitstream_io::{BigEndian, BitWrite, BitWriter};

use super::UnveilBit;

/// Reassembles bytes, most significant bit first, from the LSBs of a carrier.
///
/// A trailing group of less than 8 primitives is dropped.
pub struct LsbReader<I> {
    carrier: I,
}

impl<I> LsbReader<I> {
    pub fn new(carrier: I) -> Self {
        Self { carrier }
    }
}

impl<I, P> Read for LsbReader<I>
where
    I: Iterator<Item = P>,
    P: UnveilBit,
{
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        let wanted = buf.len() << 3;
        let mut bit_buffer = BitWriter::endian(&mut *buf, BigEndian);

        let mut bits_read = 0;
        for primitive in self.carrier.by_ref().take(wanted) {
            bit_buffer.write_bit(primitive.unveil_bit())?;
            bits_read += 1;
        }

        Ok(bits_read >> 3)
    }
}
