//! Bump allocation over a caller-supplied byte buffer.
//!
//! The arena never grows and never frees individual regions: everything it
//! hands out lives until the owning context's next `begin`.

use crate::LayoutError;
use std::ops::Range;

/// A span of bytes handed out by an [`Arena`].
///
/// Regions are plain offsets, not pointers, so holding one never borrows the
/// arena. Reading a region after the arena was reset yields whatever bytes
/// were written since.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    offset: usize,
    len: usize,
}

impl Region {
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn range(&self) -> Range<usize> {
        self.offset..self.offset + self.len
    }
}

/// Allocation state saved by [`Arena::checkpoint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Checkpoint {
    head: usize,
    tail: usize,
}

/// A fixed-capacity bump allocator.
///
/// Aligned allocations grow from the front of the buffer and byte copies grow
/// from the back, so copying text never adds padding in front of the next
/// aligned allocation.
#[derive(Debug)]
pub struct Arena<'a> {
    buffer: &'a mut [u8],
    /// End of the aligned allocations.
    head: usize,
    /// Start of the byte copies.
    tail: usize,
}

impl<'a> Arena<'a> {
    pub fn new(buffer: &'a mut [u8]) -> Self {
        let tail = buffer.len();
        Self {
            buffer,
            head: 0,
            tail,
        }
    }

    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Bytes consumed so far at both ends, including alignment padding.
    pub fn used(&self) -> usize {
        self.head + (self.buffer.len() - self.tail)
    }

    pub fn remaining(&self) -> usize {
        self.tail - self.head
    }

    fn out_of_memory(&self, requested: usize) -> LayoutError {
        LayoutError::OutOfMemory {
            requested,
            available: self.remaining(),
            capacity: self.capacity(),
        }
    }

    /// Reserves `size` bytes whose start address is a multiple of `align`.
    ///
    /// On failure the arena is left exactly as it was.
    pub fn allocate(&mut self, size: usize, align: usize) -> Result<Region, LayoutError> {
        if !align.is_power_of_two() {
            return Err(LayoutError::InvalidAlignment(align));
        }

        let cursor = (self.buffer.as_ptr() as usize).wrapping_add(self.head);
        let padding = cursor.wrapping_neg() & (align - 1);
        let end = self
            .head
            .checked_add(padding)
            .and_then(|start| start.checked_add(size))
            .filter(|end| *end <= self.tail)
            .ok_or_else(|| self.out_of_memory(size))?;

        self.head = end;
        Ok(Region {
            offset: end - size,
            len: size,
        })
    }

    /// Copies `bytes` into a fresh, unaligned region.
    pub fn alloc_bytes(&mut self, bytes: &[u8]) -> Result<Region, LayoutError> {
        let start = self
            .tail
            .checked_sub(bytes.len())
            .filter(|start| *start >= self.head)
            .ok_or_else(|| self.out_of_memory(bytes.len()))?;

        self.tail = start;
        let region = Region {
            offset: start,
            len: bytes.len(),
        };
        self.buffer[region.range()].copy_from_slice(bytes);
        Ok(region)
    }

    pub fn alloc_str(&mut self, s: &str) -> Result<Region, LayoutError> {
        self.alloc_bytes(s.as_bytes())
    }

    /// The bytes behind `region`; empty if the region lies outside the buffer.
    pub fn bytes(&self, region: Region) -> &[u8] {
        self.buffer.get(region.range()).unwrap_or(&[])
    }

    /// Reads a region written by [`Arena::alloc_str`].
    pub fn str(&self, region: Region) -> &str {
        // Text regions are only ever filled from `&str`.
        std::str::from_utf8(self.bytes(region)).unwrap_or_default()
    }

    pub(crate) fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            head: self.head,
            tail: self.tail,
        }
    }

    /// Drops everything allocated since `checkpoint`. Used to undo the
    /// allocations of a single operation that failed halfway.
    pub(crate) fn rollback(&mut self, checkpoint: Checkpoint) {
        self.head = self.head.min(checkpoint.head);
        self.tail = self.tail.max(checkpoint.tail);
    }

    pub(crate) fn reset(&mut self) {
        self.head = 0;
        self.tail = self.buffer.len();
    }
}
