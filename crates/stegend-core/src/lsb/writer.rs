use std::io::{Cursor, Result, Write};

use bitstream_io::{BigEndian, BitRead, BitReader};

use super::HideBit;

/// Hides every written byte, most significant bit first, in the LSBs of a carrier.
///
/// Bytes are only written as a whole: if the carrier has less than 8 primitives left
/// the byte is refused and [`Write::write_all`] fails with `ErrorKind::WriteZero`.
pub struct LsbWriter<I> {
    carrier: I,
}

impl<I> LsbWriter<I> {
    pub fn new(carrier: I) -> Self {
        Self { carrier }
    }
}

impl<I, P> Write for LsbWriter<I>
where
    I: ExactSizeIterator<Item = P>,
    P: HideBit,
{
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        let bytes_to_write = buf.len().min(self.carrier.len() >> 3);
        let mut bits = BitReader::endian(Cursor::new(&buf[..bytes_to_write]), BigEndian);

        for primitive in self.carrier.by_ref().take(bytes_to_write << 3) {
            primitive.hide_bit(bits.read_bit()?);
        }

        Ok(bytes_to_write)
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}
