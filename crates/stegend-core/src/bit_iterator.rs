use std::io::{ErrorKind, Read};
use std::slice;

/// Iterates over the bits of everything a reader yields, most significant bit first.
///
/// ```rust
/// use stegend_core::BitIterator;
///
/// // 'H' = 0b0100_1000
/// let bits: Vec<bool> = BitIterator::new(&b"H"[..]).collect();
/// assert_eq!(bits, [false, true, false, false, true, false, false, false]);
/// ```
pub struct BitIterator<R> {
    i: u32,
    reader: R,
    byte: Option<u8>,
}

impl<R> BitIterator<R> {
    pub fn new(reader: R) -> Self {
        BitIterator {
            i: 0,
            reader,
            byte: None,
        }
    }
}

impl<R> Iterator for BitIterator<R>
where
    R: Read,
{
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        let bit = self.i % 8;
        if bit == 0 {
            self.byte = loop {
                let mut b = 0;
                match self.reader.read(slice::from_mut(&mut b)) {
                    Ok(0) => break None,
                    Ok(..) => break Some(b),
                    Err(ref e) if e.kind() == ErrorKind::Interrupted => continue,
                    Err(_) => break None,
                }
            };
        }
        let b = self.byte?;
        self.i += 1;

        Some((b >> (7 - bit)) & 1 == 1)
    }
}
