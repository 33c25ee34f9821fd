// src/mmap.rs
//! Memory-mapped file access (requires the "mmap" feature)

use log::{debug, trace};
use memmap2::MmapMut;
use std::fs::{File, OpenOptions};
use std::ops::Range;
use std::path::Path;

use crate::error::{check_range, Result};
use crate::memory;
use crate::types::{ByteOrder, ElementWidth, Scalar};

/// A file mapped read-write into memory, interpreted in a fixed byte order
pub struct MappedFile {
    mmap: MmapMut,
    order: ByteOrder,
    _file: File,
}

impl MappedFile {
    /// Map an existing file for reading and writing
    pub fn open(path: impl AsRef<Path>, order: ByteOrder) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new().read(true).write(true).open(path)?;
        let mmap = unsafe { MmapMut::map_mut(&file)? };
        debug!("mapped {} ({} bytes, {:?})", path.display(), mmap.len(), order);

        Ok(MappedFile {
            mmap,
            order,
            _file: file,
        })
    }

    pub fn len(&self) -> usize {
        self.mmap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mmap.is_empty()
    }

    pub fn order(&self) -> ByteOrder {
        self.order
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.mmap
    }

    pub fn get<T: Scalar>(&self, offset: usize) -> Result<T> {
        memory::peek(&self.mmap, offset, self.order)
    }

    pub fn put<T: Scalar>(&mut self, offset: usize, value: T) -> Result<()> {
        memory::poke(&mut self.mmap, offset, value, self.order)
    }

    /// Fill `out` from the mapping starting at `offset`
    pub fn get_array<T: Scalar>(&self, offset: usize, out: &mut [T]) -> Result<()> {
        memory::peek_array(&self.mmap, offset, out, self.order.needs_swap())
    }

    /// Store `values` into the mapping starting at `offset`
    pub fn put_array<T: Scalar>(&mut self, offset: usize, values: &[T]) -> Result<()> {
        memory::poke_array(&mut self.mmap, offset, values, self.order.needs_swap())
    }

    /// Byte-reverse every `width` element inside `range` of the mapping
    pub fn swap_in_place(&mut self, width: ElementWidth, range: Range<usize>) -> Result<()> {
        let len = check_range(&range, self.mmap.len())?;
        trace!("swapping {:?} of mapped file as {}", range, width);
        memory::swap_range(&mut self.mmap, range.start, len, width)
    }

    /// Write dirty pages back to the file
    pub fn flush(&self) -> Result<()> {
        self.mmap.flush()?;
        Ok(())
    }
}

impl std::fmt::Debug for MappedFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MappedFile")
            .field("order", &self.order)
            .field("len", &self.mmap.len())
            .finish()
    }
}
