// src/lib.rs
//! # memswap
//!
//! Byte-order primitives for raw memory-mapped numeric access.
//!
//! ## Features
//!
//! - **Alignment tolerant**: buffers may start at any address, including on
//!   targets that fault on misaligned loads
//! - **Two code paths, one answer**: aligned buffers are swapped a word at a
//!   time, everything else byte by byte, with identical output
//! - **Type-checked widths**: element slices are `[[u8; 2]]`, `[[u8; 4]]` and
//!   `[[u8; 8]]`, so a buffer can never be swapped at the wrong width
//! - **Peek and poke**: scalar and array access at arbitrary byte offsets
//! - **Memory-mapped files** behind the `mmap` feature
//!
//! ## Quick Start
//!
//! ```rust
//! use memswap::*;
//!
//! fn main() -> Result<()> {
//!     // Swap 16-bit elements between two byte buffers
//!     let src = [0x01u8, 0x02, 0x03, 0x04];
//!     let mut dst = [0u8; 4];
//!     swap_bytes(ElementWidth::Two, &mut dst, &src)?;
//!     assert_eq!(dst, [0x02, 0x01, 0x04, 0x03]);
//!
//!     // Read a big-endian int from an odd offset
//!     let mem = [0xFFu8, 0x00, 0x00, 0x01, 0x00];
//!     assert_eq!(memory::peek_i32(&mem, 1, ByteOrder::Big)?, 256);
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Memory regions
//!
//! ```rust
//! use memswap::prelude::*;
//!
//! let mut region = MemoryRegion::new(8, ByteOrder::Big);
//! region.put_array(0, &[1u32, 2]).unwrap();
//! assert_eq!(region.as_bytes(), &[0, 0, 0, 1, 0, 0, 0, 2]);
//! ```

// Modules
pub mod error;
pub mod types;
pub mod swap;
pub mod memory;
pub mod region;

#[cfg(feature = "mmap")]
pub mod mmap;

// Re-export commonly used types at the crate root for convenience
pub use error::{MemoryError, Result};

pub use types::{
    ByteOrder,
    ElementWidth,
    Scalar,
    SwapStrategy,
};

pub use swap::{
    swap_bytes,
    swap_bytes_in_place,
    swap_ints,
    swap_longs,
    swap_shorts,
    Element,
};

pub use region::MemoryRegion;

#[cfg(feature = "mmap")]
pub use mmap::MappedFile;

// Prelude module for glob imports
pub mod prelude {
    //! Convenient imports for common use cases.
    //!
    //! ```rust
    //! use memswap::prelude::*;
    //! ```

    pub use crate::error::{MemoryError, Result};
    pub use crate::types::{ByteOrder, ElementWidth, SwapStrategy};
    pub use crate::swap::{swap_bytes, swap_bytes_in_place};
    pub use crate::region::MemoryRegion;

    #[cfg(feature = "mmap")]
    pub use crate::mmap::MappedFile;
}

/// The library version
pub const LIBRARY_VERSION: &str = env!("CARGO_PKG_VERSION");
