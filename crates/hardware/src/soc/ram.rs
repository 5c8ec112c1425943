//! Main Memory.
//!
//! This module provides the flat byte-addressable RAM of the machine. It provides:
//! 1. **Storage:** A fixed 256-byte array, zero-initialised.
//! 2. **Bounds Checking:** Every access outside the array fails with `OutOfBounds`.
//! 3. **Program Loading:** Copying an image to address 0.

use crate::common::constants::MEMORY_SIZE;
use crate::common::error::{LoadError, MemoryError};

/// Flat byte-addressable memory.
#[derive(Clone, PartialEq, Eq)]
pub struct Ram {
    cells: [u8; MEMORY_SIZE],
}

impl Ram {
    /// Creates a zero-filled memory.
    pub const fn new() -> Self {
        Self {
            cells: [0; MEMORY_SIZE],
        }
    }

    /// Returns the capacity in bytes.
    #[inline]
    pub const fn len(&self) -> usize {
        MEMORY_SIZE
    }

    /// Always `false`; memory has a fixed non-zero size.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Reads one byte.
    ///
    /// # Arguments
    ///
    /// * `addr` - Address to read.
    ///
    /// # Returns
    ///
    /// The stored byte, or `OutOfBounds` when `addr >= 256`.
    #[inline]
    pub fn read(&self, addr: usize) -> Result<u8, MemoryError> {
        self.cells
            .get(addr)
            .copied()
            .ok_or(MemoryError::OutOfBounds { address: addr })
    }

    /// Writes one byte.
    ///
    /// # Arguments
    ///
    /// * `addr` - Address to write.
    /// * `val`  - Byte to store.
    ///
    /// Fails with `OutOfBounds` when `addr >= 256`; no other cell is touched.
    #[inline]
    pub fn write(&mut self, addr: usize, val: u8) -> Result<(), MemoryError> {
        let cell = self
            .cells
            .get_mut(addr)
            .ok_or(MemoryError::OutOfBounds { address: addr })?;
        *cell = val;
        Ok(())
    }

    /// Reads one byte, yielding 0 past the end of memory.
    ///
    /// Used by diagnostics that must never fail.
    #[inline]
    pub fn peek(&self, addr: usize) -> u8 {
        self.cells.get(addr).copied().unwrap_or(0)
    }

    /// Copies `image` into memory starting at address 0.
    ///
    /// Cells past the end of the image are left unchanged.
    pub fn load(&mut self, image: &[u8]) -> Result<(), LoadError> {
        let dest = self
            .cells
            .get_mut(..image.len())
            .ok_or(LoadError::ProgramTooLarge {
                len: image.len(),
                capacity: MEMORY_SIZE,
            })?;
        dest.copy_from_slice(image);
        Ok(())
    }

    /// Returns the whole memory as a slice.
    pub fn as_slice(&self) -> &[u8] {
        &self.cells
    }
}

impl Default for Ram {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Ram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let used = self.cells.iter().filter(|&&b| b != 0).count();
        f.debug_struct("Ram")
            .field("size", &MEMORY_SIZE)
            .field("non_zero_cells", &used)
            .finish()
    }
}
