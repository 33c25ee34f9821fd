// src/memory.rs
//! Scalar and array access at arbitrary byte offsets
//!
//! These helpers treat a byte slice as raw memory. Reads and writes go
//! through byte-granularity codecs, so any offset is valid as long as the
//! accessed range stays inside the slice.
//!
//! # Example
//!
//! ```
//! use memswap::memory::{peek_i32, poke_i32};
//! use memswap::ByteOrder;
//!
//! let mut mem = [0u8; 8];
//! poke_i32(&mut mem, 3, 0x01020304, ByteOrder::Big).unwrap();
//! assert_eq!(&mem[3..7], &[0x01, 0x02, 0x03, 0x04]);
//! assert_eq!(peek_i32(&mem, 3, ByteOrder::Big).unwrap(), 0x01020304);
//! ```

use log::trace;

use crate::error::{check_bounds, MemoryError, Result};
use crate::swap::swap_bytes_in_place;
use crate::types::{ByteOrder, ElementWidth, Scalar};

/// Read one scalar at `offset`
pub fn peek<T: Scalar>(mem: &[u8], offset: usize, order: ByteOrder) -> Result<T> {
    check_bounds(offset, T::WIDTH, mem.len())?;
    Ok(T::read_from(&mem[offset..], order))
}

/// Write one scalar at `offset`
pub fn poke<T: Scalar>(mem: &mut [u8], offset: usize, value: T, order: ByteOrder) -> Result<()> {
    check_bounds(offset, T::WIDTH, mem.len())?;
    value.write_to(&mut mem[offset..], order);
    Ok(())
}

pub fn peek_i16(mem: &[u8], offset: usize, order: ByteOrder) -> Result<i16> {
    peek(mem, offset, order)
}

pub fn peek_i32(mem: &[u8], offset: usize, order: ByteOrder) -> Result<i32> {
    peek(mem, offset, order)
}

pub fn peek_i64(mem: &[u8], offset: usize, order: ByteOrder) -> Result<i64> {
    peek(mem, offset, order)
}

pub fn poke_i16(mem: &mut [u8], offset: usize, value: i16, order: ByteOrder) -> Result<()> {
    poke(mem, offset, value, order)
}

pub fn poke_i32(mem: &mut [u8], offset: usize, value: i32, order: ByteOrder) -> Result<()> {
    poke(mem, offset, value, order)
}

pub fn poke_i64(mem: &mut [u8], offset: usize, value: i64, order: ByteOrder) -> Result<()> {
    poke(mem, offset, value, order)
}

/// Copy `dst.len()` scalars out of `mem` starting at `offset`.
///
/// With `swap` set every element is byte-reversed on the way out; otherwise
/// bytes are copied verbatim in native order.
pub fn peek_array<T: Scalar>(mem: &[u8], offset: usize, dst: &mut [T], swap: bool) -> Result<()> {
    let byte_len = std::mem::size_of_val(dst);
    check_bounds(offset, byte_len, mem.len())?;

    let out: &mut [u8] = bytemuck::cast_slice_mut(dst);
    bulk_copy(out, &mem[offset..offset + byte_len], T::WIDTH, swap)
}

/// Copy the scalars of `src` into `mem` starting at `offset`.
pub fn poke_array<T: Scalar>(mem: &mut [u8], offset: usize, src: &[T], swap: bool) -> Result<()> {
    let byte_len = std::mem::size_of_val(src);
    check_bounds(offset, byte_len, mem.len())?;

    let input: &[u8] = bytemuck::cast_slice(src);
    bulk_copy(&mut mem[offset..offset + byte_len], input, T::WIDTH, swap)
}

/// Copy `src` into `dst`, reversing each `element_width`-byte element when
/// `swap` is set.
///
/// A width of 1 copies verbatim regardless of `swap`.
pub fn bulk_copy(dst: &mut [u8], src: &[u8], element_width: usize, swap: bool) -> Result<()> {
    if dst.len() != src.len() {
        return Err(MemoryError::LengthMismatch { dst: dst.len(), src: src.len() });
    }

    if !matches!(element_width, 1 | 2 | 4 | 8) {
        return Err(MemoryError::InvalidWidth(element_width));
    }

    if !swap || element_width == 1 {
        dst.copy_from_slice(src);
        return Ok(());
    }

    trace!("bulk copy of {} bytes with {}-byte swap", src.len(), element_width);
    let width = ElementWidth::from_bytes(element_width)?;
    crate::swap::swap_bytes(width, dst, src)
}

/// Move `len` bytes from `src_offset` to `dst_offset`; the ranges may overlap.
pub fn memmove(mem: &mut [u8], dst_offset: usize, src_offset: usize, len: usize) -> Result<()> {
    check_bounds(src_offset, len, mem.len())?;
    check_bounds(dst_offset, len, mem.len())?;
    mem.copy_within(src_offset..src_offset + len, dst_offset);
    Ok(())
}

/// Reverse every element of `width` inside `mem[offset..offset + len]`
pub fn swap_range(mem: &mut [u8], offset: usize, len: usize, width: ElementWidth) -> Result<()> {
    check_bounds(offset, len, mem.len())?;
    swap_bytes_in_place(width, &mut mem[offset..offset + len])
}
