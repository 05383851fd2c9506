mod channels;
mod reader;
mod writer;

pub use channels::{UsableChannels, UsableChannelsMut};
pub use reader::LsbReader;
pub use writer::LsbWriter;

/// stores one bit of information in a carrier primitive
pub trait HideBit {
    fn hide_bit(self, bit: bool);
}

/// reads back the bit stored by [`HideBit`]
pub trait UnveilBit {
    fn unveil_bit(self) -> bool;
}

impl HideBit for &mut u8 {
    #[inline(always)]
    fn hide_bit(self, bit: bool) {
        *self = (*self & 0xFE) | u8::from(bit);
    }
}

impl UnveilBit for u8 {
    #[inline(always)]
    fn unveil_bit(self) -> bool {
        self & 1 == 1
    }
}
