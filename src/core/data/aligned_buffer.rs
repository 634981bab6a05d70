use std::collections::TryReserveError;
use std::marker::PhantomData;
use std::mem::size_of;

use bytemuck::{Pod, Zeroable};

/// Byte alignment of every buffer handed to the escape-time kernel.
pub const ALIGN_BYTES: usize = 64;

#[derive(Clone, Copy, Pod, Zeroable)]
#[repr(C, align(64))]
struct CacheLine([u8; ALIGN_BYTES]);

/// Fixed-capacity buffer whose first element sits on an [`ALIGN_BYTES`]
/// boundary.
///
/// Storage is a run of cache-line sized chunks viewed as `T`s through
/// `bytemuck`, so the element slice is contiguous and stays aligned for as
/// long as the buffer lives. The capacity never changes after construction.
pub struct AlignedBuffer<T: Pod> {
    lines: Vec<CacheLine>,
    len: usize,
    _marker: PhantomData<T>,
}

impl<T: Pod> AlignedBuffer<T> {
    const LANES_PER_LINE: usize = {
        assert!(
            size_of::<T>() > 0 && ALIGN_BYTES % size_of::<T>() == 0,
            "element type does not tile a cache line"
        );
        ALIGN_BYTES / size_of::<T>()
    };

    /// Allocates `len` elements set to `value`, reporting allocation failure
    /// instead of aborting.
    pub fn try_new(len: usize, value: T) -> Result<Self, TryReserveError> {
        let line_count = len.div_ceil(Self::LANES_PER_LINE);
        let mut lines = Vec::new();
        lines.try_reserve_exact(line_count)?;
        lines.resize(line_count, CacheLine::zeroed());

        let mut buffer = Self {
            lines,
            len,
            _marker: PhantomData,
        };
        buffer.fill(value);

        Ok(buffer)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn fill(&mut self, value: T) {
        self.as_mut_slice().fill(value);
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &bytemuck::cast_slice::<CacheLine, T>(&self.lines)[..self.len]
    }

    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut bytemuck::cast_slice_mut::<CacheLine, T>(&mut self.lines)[..self.len]
    }
}

impl<T: Pod + std::fmt::Debug> std::fmt::Debug for AlignedBuffer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlignedBuffer")
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_buffer_holds_initial_value() {
        let buffer = AlignedBuffer::try_new(37, 7u32).unwrap();

        assert_eq!(buffer.len(), 37);
        assert!(buffer.as_slice().iter().all(|&v| v == 7));
    }

    #[test]
    fn test_buffer_start_is_aligned() {
        let floats = AlignedBuffer::try_new(3, 0.0f32).unwrap();
        let counts = AlignedBuffer::try_new(4096, 0u32).unwrap();

        assert_eq!(floats.as_slice().as_ptr() as usize % ALIGN_BYTES, 0);
        assert_eq!(counts.as_slice().as_ptr() as usize % ALIGN_BYTES, 0);
    }

    #[test]
    fn test_fill_overwrites_every_element() {
        let mut buffer = AlignedBuffer::try_new(20, 1.5f32).unwrap();
        buffer.as_mut_slice()[19] = -3.0;

        buffer.fill(0.25);

        assert!(buffer.as_slice().iter().all(|&v| v == 0.25));
    }

    #[test]
    fn test_writes_are_visible_through_slice() {
        let mut buffer = AlignedBuffer::try_new(33, 0u32).unwrap();

        for (i, value) in buffer.as_mut_slice().iter_mut().enumerate() {
            *value = i as u32;
        }

        assert_eq!(buffer.as_slice()[0], 0);
        assert_eq!(buffer.as_slice()[16], 16);
        assert_eq!(buffer.as_slice()[32], 32);
    }

    #[test]
    fn test_empty_buffer() {
        let buffer = AlignedBuffer::try_new(0, 0.0f32).unwrap();

        assert!(buffer.is_empty());
        assert!(buffer.as_slice().is_empty());
    }

    #[test]
    fn test_lengths_straddling_a_cache_line() {
        for len in [15, 16, 17, 31, 32, 33] {
            let mut buffer = AlignedBuffer::try_new(len, 3u32).unwrap();
            buffer.as_mut_slice()[len - 1] = 9;

            assert_eq!(buffer.as_slice().len(), len);
            assert_eq!(buffer.as_slice()[len - 1], 9);
            assert!(buffer.as_slice()[..len - 1].iter().all(|&v| v == 3));
        }
    }

    #[test]
    fn test_impossible_allocation_is_reported() {
        let result = AlignedBuffer::try_new(usize::MAX, 0u32);

        assert!(result.is_err());
    }
}
