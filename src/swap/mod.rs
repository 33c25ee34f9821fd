// src/swap/mod.rs
//! Byte-order swapping of fixed-width elements
//!
//! Three routines reverse the bytes of every 2-, 4- or 8-byte element of a
//! source buffer into a destination buffer:
//!
//! - [`swap_shorts`] - 16-bit elements
//! - [`swap_ints`] - 32-bit elements
//! - [`swap_longs`] - 64-bit elements
//!
//! Buffers may start at any address. When both buffers share an 8-byte
//! alignment the aligned middle is processed a word at a time; the unaligned
//! head, the partial tail and buffers with different alignments are
//! processed one element at a time from single-byte accesses. Both paths
//! produce identical output.
//!
//! # Example
//!
//! ```
//! use memswap::swap::swap_ints;
//!
//! let src = [[0x01, 0x02, 0x03, 0x04], [0x05, 0x06, 0x07, 0x08]];
//! let mut dst = [[0u8; 4]; 2];
//! swap_ints(&mut dst, &src);
//!
//! assert_eq!(dst, [[0x04, 0x03, 0x02, 0x01], [0x08, 0x07, 0x06, 0x05]]);
//! ```
//!
//! Byte slices of unknown length go through the checked entry point:
//!
//! ```
//! use memswap::swap::swap_bytes;
//! use memswap::ElementWidth;
//!
//! let src = [0x01u8, 0x02, 0x03, 0x04];
//! let mut dst = [0u8; 4];
//! swap_bytes(ElementWidth::Two, &mut dst, &src).unwrap();
//!
//! assert_eq!(dst, [0x02, 0x01, 0x04, 0x03]);
//! ```

mod element;
mod word;

pub use element::Element;

use std::ptr;
use std::slice;

use log::trace;

use crate::error::{MemoryError, Result};
use crate::types::{ElementWidth, SwapStrategy};

/// Swap every element of `src` into `dst` using the given strategy.
///
/// # Panics
///
/// Panics if `dst` and `src` hold a different number of elements.
pub fn swap_with_strategy<E: Element>(dst: &mut [E], src: &[E], strategy: SwapStrategy) {
    assert_eq!(
        dst.len(),
        src.len(),
        "destination and source must hold the same number of elements"
    );

    let handled = match strategy {
        SwapStrategy::Auto => word::swap_words(dst, src),
        SwapStrategy::ByteSerial => 0..0,
    };

    swap_serial(&mut dst[..handled.start], &src[..handled.start]);
    swap_serial(&mut dst[handled.end..], &src[handled.end..]);
}

/// Swap every element of `buf` where it lies.
pub fn swap_in_place_with_strategy<E: Element>(buf: &mut [E], strategy: SwapStrategy) {
    let handled = match strategy {
        SwapStrategy::Auto => word::swap_words_in_place(buf),
        SwapStrategy::ByteSerial => 0..0,
    };

    let (head, rest) = buf.split_at_mut(handled.start);
    swap_serial_in_place(head);
    swap_serial_in_place(&mut rest[handled.len()..]);
}

fn swap_serial<E: Element>(dst: &mut [E], src: &[E]) {
    for (out, element) in dst.iter_mut().zip(src) {
        *out = element.swapped();
    }
}

fn swap_serial_in_place<E: Element>(buf: &mut [E]) {
    for element in buf.iter_mut() {
        *element = element.swapped();
    }
}

/// Swap 16-bit elements from `src` into `dst`
///
/// # Panics
///
/// Panics if the slices differ in length.
pub fn swap_shorts(dst: &mut [[u8; 2]], src: &[[u8; 2]]) {
    swap_with_strategy(dst, src, SwapStrategy::Auto);
}

/// Swap 32-bit elements from `src` into `dst`
///
/// # Panics
///
/// Panics if the slices differ in length.
pub fn swap_ints(dst: &mut [[u8; 4]], src: &[[u8; 4]]) {
    swap_with_strategy(dst, src, SwapStrategy::Auto);
}

/// Swap 64-bit elements from `src` into `dst`
///
/// # Panics
///
/// Panics if the slices differ in length.
pub fn swap_longs(dst: &mut [[u8; 8]], src: &[[u8; 8]]) {
    swap_with_strategy(dst, src, SwapStrategy::Auto);
}

/// Swap 16-bit elements of `buf` where they lie
pub fn swap_shorts_in_place(buf: &mut [[u8; 2]]) {
    swap_in_place_with_strategy(buf, SwapStrategy::Auto);
}

/// Swap 32-bit elements of `buf` where they lie
pub fn swap_ints_in_place(buf: &mut [[u8; 4]]) {
    swap_in_place_with_strategy(buf, SwapStrategy::Auto);
}

/// Swap 64-bit elements of `buf` where they lie
pub fn swap_longs_in_place(buf: &mut [[u8; 8]]) {
    swap_in_place_with_strategy(buf, SwapStrategy::Auto);
}

/// Swap `count` 16-bit elements from `src` to `dst`.
///
/// # Safety
///
/// Both pointers must be valid for `count * 2` bytes, non-null, and not
/// concurrently accessed. They may be equal or overlap.
pub unsafe fn swap_shorts_raw(dst: *mut u8, src: *const u8, count: usize) {
    swap_raw::<[u8; 2]>(dst, src, count);
}

/// Swap `count` 32-bit elements from `src` to `dst`.
///
/// # Safety
///
/// Both pointers must be valid for `count * 4` bytes, non-null, and not
/// concurrently accessed. They may be equal or overlap.
pub unsafe fn swap_ints_raw(dst: *mut u8, src: *const u8, count: usize) {
    swap_raw::<[u8; 4]>(dst, src, count);
}

/// Swap `count` 64-bit elements from `src` to `dst`.
///
/// # Safety
///
/// Both pointers must be valid for `count * 8` bytes, non-null, and not
/// concurrently accessed. They may be equal or overlap.
pub unsafe fn swap_longs_raw(dst: *mut u8, src: *const u8, count: usize) {
    swap_raw::<[u8; 8]>(dst, src, count);
}

/// Swap `count` elements of a width only known at runtime.
///
/// # Safety
///
/// Same contract as [`swap_shorts_raw`], with `count * width.bytes()` bytes.
pub unsafe fn swap_raw_for_width(width: ElementWidth, dst: *mut u8, src: *const u8, count: usize) {
    match width {
        ElementWidth::Two => swap_raw::<[u8; 2]>(dst, src, count),
        ElementWidth::Four => swap_raw::<[u8; 4]>(dst, src, count),
        ElementWidth::Eight => swap_raw::<[u8; 8]>(dst, src, count),
    }
}

unsafe fn swap_raw<E: Element>(dst: *mut u8, src: *const u8, count: usize) {
    if count == 0 {
        return;
    }

    let byte_len = count * E::WIDTH.bytes();
    let dst_start = dst as usize;
    let src_start = src as usize;

    if dst_start == src_start {
        swap_in_place_with_strategy(slice::from_raw_parts_mut(dst as *mut E, count), SwapStrategy::Auto);
    } else if src_start < dst_start + byte_len && dst_start < src_start + byte_len {
        // Partial overlap: move first, then swap the moved copy.
        ptr::copy(src, dst, byte_len);
        swap_in_place_with_strategy(slice::from_raw_parts_mut(dst as *mut E, count), SwapStrategy::Auto);
    } else {
        swap_with_strategy(
            slice::from_raw_parts_mut(dst as *mut E, count),
            slice::from_raw_parts(src as *const E, count),
            SwapStrategy::Auto,
        );
    }
}

fn check_lengths(width: ElementWidth, dst_len: usize, src_len: usize) -> Result<()> {
    if dst_len != src_len {
        return Err(MemoryError::LengthMismatch { dst: dst_len, src: src_len });
    }
    if src_len % width.bytes() != 0 {
        return Err(MemoryError::UnalignedLength { len: src_len, width: width.bytes() });
    }
    Ok(())
}

/// Swap byte slices holding elements of `width`.
///
/// Unlike the typed routines this never panics: slices of different lengths
/// or lengths that are not a multiple of `width` are reported as errors.
pub fn swap_bytes(width: ElementWidth, dst: &mut [u8], src: &[u8]) -> Result<()> {
    swap_bytes_with_strategy(width, dst, src, SwapStrategy::Auto)
}

/// [`swap_bytes`] with an explicit choice of code path
pub fn swap_bytes_with_strategy(
    width: ElementWidth,
    dst: &mut [u8],
    src: &[u8],
    strategy: SwapStrategy,
) -> Result<()> {
    check_lengths(width, dst.len(), src.len())?;
    trace!("swapping {} {} elements ({:?})", src.len() / width.bytes(), width.name(), strategy);

    match width {
        ElementWidth::Two => swap_with_strategy::<[u8; 2]>(
            bytemuck::cast_slice_mut(dst),
            bytemuck::cast_slice(src),
            strategy,
        ),
        ElementWidth::Four => swap_with_strategy::<[u8; 4]>(
            bytemuck::cast_slice_mut(dst),
            bytemuck::cast_slice(src),
            strategy,
        ),
        ElementWidth::Eight => swap_with_strategy::<[u8; 8]>(
            bytemuck::cast_slice_mut(dst),
            bytemuck::cast_slice(src),
            strategy,
        ),
    }
    Ok(())
}

/// Swap a byte slice of `width` elements where it lies
pub fn swap_bytes_in_place(width: ElementWidth, buf: &mut [u8]) -> Result<()> {
    check_lengths(width, buf.len(), buf.len())?;
    trace!("swapping {} {} elements in place", buf.len() / width.bytes(), width.name());

    match width {
        ElementWidth::Two => swap_shorts_in_place(bytemuck::cast_slice_mut(buf)),
        ElementWidth::Four => swap_ints_in_place(bytemuck::cast_slice_mut(buf)),
        ElementWidth::Eight => swap_longs_in_place(bytemuck::cast_slice_mut(buf)),
    }
    Ok(())
}
