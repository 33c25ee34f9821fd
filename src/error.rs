// src/error.rs
use std::io;
use std::ops::Range;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MemoryError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Out of bounds: {len} bytes at offset {offset} exceeds capacity {capacity}")]
    OutOfBounds { offset: usize, len: usize, capacity: usize },

    #[error("Length mismatch: destination has {dst} bytes, source has {src} bytes")]
    LengthMismatch { dst: usize, src: usize },

    #[error("Buffer length {len} is not a multiple of element width {width}")]
    UnalignedLength { len: usize, width: usize },

    #[error("Invalid element width: {0}")]
    InvalidWidth(usize),
}

pub type Result<T> = std::result::Result<T, MemoryError>;

/// Validate that `len` bytes starting at `offset` fit inside `capacity`.
pub(crate) fn check_bounds(offset: usize, len: usize, capacity: usize) -> Result<()> {
    match offset.checked_add(len) {
        Some(end) if end <= capacity => Ok(()),
        _ => Err(MemoryError::OutOfBounds { offset, len, capacity }),
    }
}

/// Validate a byte range against `capacity`, returning its length.
///
/// A range whose start lies past its end is out of bounds.
pub(crate) fn check_range(range: &Range<usize>, capacity: usize) -> Result<usize> {
    if range.start > range.end {
        return Err(MemoryError::OutOfBounds { offset: range.start, len: 0, capacity });
    }
    let len = range.end - range.start;
    check_bounds(range.start, len, capacity)?;
    Ok(len)
}
