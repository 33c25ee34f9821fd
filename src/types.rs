// src/types.rs
use byteorder::{BigEndian, LittleEndian, ByteOrder as _};
use bytemuck::Pod;
use std::fmt;

use crate::error::{MemoryError, Result};

/// Width of one swappable element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ElementWidth {
    Two = 2,
    Four = 4,
    Eight = 8,
}

impl ElementWidth {
    pub const ALL: [ElementWidth; 3] = [ElementWidth::Two, ElementWidth::Four, ElementWidth::Eight];

    /// Number of bytes in one element
    pub fn bytes(&self) -> usize {
        *self as usize
    }

    pub fn from_bytes(value: usize) -> Result<Self> {
        match value {
            2 => Ok(ElementWidth::Two),
            4 => Ok(ElementWidth::Four),
            8 => Ok(ElementWidth::Eight),
            other => Err(MemoryError::InvalidWidth(other)),
        }
    }

    /// Java-side name of the element type swapped at this width
    pub fn name(&self) -> &'static str {
        match self {
            ElementWidth::Two => "short",
            ElementWidth::Four => "int",
            ElementWidth::Eight => "long",
        }
    }
}

impl fmt::Display for ElementWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} bytes)", self.name(), self.bytes())
    }
}

/// Byte order of values stored in memory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    Big,
    Little,
}

impl ByteOrder {
    /// Byte order of the target this crate was compiled for
    pub const fn native() -> Self {
        if cfg!(target_endian = "big") {
            ByteOrder::Big
        } else {
            ByteOrder::Little
        }
    }

    /// True when values in this order must be swapped to be read natively
    pub fn needs_swap(&self) -> bool {
        *self != Self::native()
    }

    pub fn reversed(&self) -> Self {
        match self {
            ByteOrder::Big => ByteOrder::Little,
            ByteOrder::Little => ByteOrder::Big,
        }
    }
}

impl Default for ByteOrder {
    fn default() -> Self {
        Self::native()
    }
}

/// Which code path the swap routines may take.
///
/// Both strategies produce byte-identical output; `ByteSerial` exists so the
/// word path can be checked against it and for targets where the caller wants
/// to avoid wide loads entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SwapStrategy {
    /// Word-at-a-time over the aligned middle when both buffers sit at the same
    /// offset within a word; byte-serial for the head, the tail and mismatched buffers
    #[default]
    Auto,
    /// Always compose each element from single-byte accesses
    ByteSerial,
}

/// Fixed-width values that can be peeked and poked at arbitrary byte offsets
pub trait Scalar: Pod + Default {
    const WIDTH: usize = std::mem::size_of::<Self>();

    /// Decode from the first `WIDTH` bytes of `bytes`
    fn read_from(bytes: &[u8], order: ByteOrder) -> Self;

    /// Encode into the first `WIDTH` bytes of `bytes`
    fn write_to(self, bytes: &mut [u8], order: ByteOrder);
}

impl Scalar for u8 {
    fn read_from(bytes: &[u8], _order: ByteOrder) -> Self {
        bytes[0]
    }

    fn write_to(self, bytes: &mut [u8], _order: ByteOrder) {
        bytes[0] = self;
    }
}

impl Scalar for i8 {
    fn read_from(bytes: &[u8], _order: ByteOrder) -> Self {
        bytes[0] as i8
    }

    fn write_to(self, bytes: &mut [u8], _order: ByteOrder) {
        bytes[0] = self as u8;
    }
}

macro_rules! impl_scalar {
    ($ty:ty, $read:ident, $write:ident) => {
        impl Scalar for $ty {
            fn read_from(bytes: &[u8], order: ByteOrder) -> Self {
                match order {
                    ByteOrder::Big => BigEndian::$read(bytes),
                    ByteOrder::Little => LittleEndian::$read(bytes),
                }
            }

            fn write_to(self, bytes: &mut [u8], order: ByteOrder) {
                match order {
                    ByteOrder::Big => BigEndian::$write(bytes, self),
                    ByteOrder::Little => LittleEndian::$write(bytes, self),
                }
            }
        }
    };
}

impl_scalar!(u16, read_u16, write_u16);
impl_scalar!(i16, read_i16, write_i16);
impl_scalar!(u32, read_u32, write_u32);
impl_scalar!(i32, read_i32, write_i32);
impl_scalar!(u64, read_u64, write_u64);
impl_scalar!(i64, read_i64, write_i64);
impl_scalar!(f32, read_f32, write_f32);
impl_scalar!(f64, read_f64, write_f64);
