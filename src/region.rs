// src/region.rs
use bytes::{Bytes, BytesMut};
use log::trace;
use std::ops::Range;

use crate::error::{check_range, Result};
use crate::memory;
use crate::types::{ByteOrder, ElementWidth, Scalar};

/// An owned block of raw memory with a declared byte order
///
/// Scalars and arrays read from or written to the region are converted
/// between the region's order and the native order of the host. This is the
/// shape of a direct buffer: a fixed-size byte block whose order can be
/// changed at any time without touching the stored bytes.
///
/// # Example
///
/// ```
/// use memswap::{ByteOrder, MemoryRegion};
///
/// let mut region = MemoryRegion::new(16, ByteOrder::Big);
/// region.put_array(2, &[0x0102i16, 0x0304]).unwrap();
///
/// assert_eq!(&region.as_bytes()[2..6], &[0x01, 0x02, 0x03, 0x04]);
///
/// let mut values = [0i16; 2];
/// region.get_array(2, &mut values).unwrap();
/// assert_eq!(values, [0x0102, 0x0304]);
/// ```
pub struct MemoryRegion {
    buffer: BytesMut,
    order: ByteOrder,
}

impl MemoryRegion {
    /// Create a zero-filled region of `len` bytes
    pub fn new(len: usize, order: ByteOrder) -> Self {
        MemoryRegion {
            buffer: BytesMut::zeroed(len),
            order,
        }
    }

    /// Wrap existing bytes without copying when possible
    pub fn from_bytes(bytes: impl Into<BytesMut>, order: ByteOrder) -> Self {
        MemoryRegion {
            buffer: bytes.into(),
            order,
        }
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn order(&self) -> ByteOrder {
        self.order
    }

    /// Change how stored bytes are interpreted; the bytes themselves are untouched
    pub fn set_order(&mut self, order: ByteOrder) {
        self.order = order;
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.buffer
    }

    /// Read one scalar stored in the region's order
    pub fn get<T: Scalar>(&self, offset: usize) -> Result<T> {
        memory::peek(&self.buffer, offset, self.order)
    }

    /// Write one scalar in the region's order
    pub fn put<T: Scalar>(&mut self, offset: usize, value: T) -> Result<()> {
        memory::poke(&mut self.buffer, offset, value, self.order)
    }

    /// Fill `out` from consecutive elements starting at `offset`
    pub fn get_array<T: Scalar>(&self, offset: usize, out: &mut [T]) -> Result<()> {
        trace!("get_array: {} elements at offset {}", out.len(), offset);
        memory::peek_array(&self.buffer, offset, out, self.order.needs_swap())
    }

    /// Store `values` as consecutive elements starting at `offset`
    pub fn put_array<T: Scalar>(&mut self, offset: usize, values: &[T]) -> Result<()> {
        trace!("put_array: {} elements at offset {}", values.len(), offset);
        memory::poke_array(&mut self.buffer, offset, values, self.order.needs_swap())
    }

    /// Byte-reverse every `width` element inside `range`
    pub fn swap_in_place(&mut self, width: ElementWidth, range: Range<usize>) -> Result<()> {
        let len = check_range(&range, self.buffer.len())?;
        memory::swap_range(&mut self.buffer, range.start, len, width)
    }

    /// Freeze the region into immutable, cheaply clonable bytes
    pub fn freeze(self) -> Bytes {
        self.buffer.freeze()
    }
}

// Implement Debug manually to avoid printing large regions
impl std::fmt::Debug for MemoryRegion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryRegion")
            .field("order", &self.order)
            .field("len", &self.buffer.len())
            .finish()
    }
}
