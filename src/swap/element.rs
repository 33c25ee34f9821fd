// src/swap/element.rs
use byteorder::{BigEndian, LittleEndian, ByteOrder as _};
use bytemuck::Pod;

use crate::types::ElementWidth;

mod sealed {
    pub trait Sealed {}
    impl Sealed for [u8; 2] {}
    impl Sealed for [u8; 4] {}
    impl Sealed for [u8; 8] {}
}

/// One fixed-width element as it sits in memory.
///
/// Elements are byte arrays rather than integers so that slices of them have
/// an alignment of one and can start at any address.
pub trait Element: Pod + sealed::Sealed {
    const WIDTH: ElementWidth;

    /// Elements packed into one 64-bit word
    const PER_WORD: usize = 8 / Self::WIDTH as usize;

    /// Byte-reversed copy, composed from single-byte reads and writes
    fn swapped(self) -> Self;

    /// Reverse the bytes of every element lane inside a 64-bit word
    fn swap_word(word: u64) -> u64;
}

impl Element for [u8; 2] {
    const WIDTH: ElementWidth = ElementWidth::Two;

    #[inline]
    fn swapped(self) -> Self {
        let mut out = [0u8; 2];
        LittleEndian::write_u16(&mut out, BigEndian::read_u16(&self));
        out
    }

    #[inline]
    fn swap_word(word: u64) -> u64 {
        ((word & 0x00ff_00ff_00ff_00ff) << 8) | ((word >> 8) & 0x00ff_00ff_00ff_00ff)
    }
}

impl Element for [u8; 4] {
    const WIDTH: ElementWidth = ElementWidth::Four;

    #[inline]
    fn swapped(self) -> Self {
        let mut out = [0u8; 4];
        LittleEndian::write_u32(&mut out, BigEndian::read_u32(&self));
        out
    }

    #[inline]
    fn swap_word(word: u64) -> u64 {
        // full reversal also exchanges the two lanes; put them back
        word.swap_bytes().rotate_left(32)
    }
}

impl Element for [u8; 8] {
    const WIDTH: ElementWidth = ElementWidth::Eight;

    #[inline]
    fn swapped(self) -> Self {
        let mut out = [0u8; 8];
        LittleEndian::write_u64(&mut out, BigEndian::read_u64(&self));
        out
    }

    #[inline]
    fn swap_word(word: u64) -> u64 {
        word.swap_bytes()
    }
}
