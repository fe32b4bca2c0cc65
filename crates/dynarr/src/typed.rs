//! Typed views over the raw byte-block storage.
//!
//! [`Array<T>`] fixes the element width of a [`RawArray`] to `T::WIDTH`
//! at construction, so payload width mismatches cannot arise, and moves
//! values in and out of slots through the [`Element`] encoding. Reads
//! return values by copy: index-based access instead of references that
//! would pin the storage across mutations.

use std::marker::PhantomData;

use dynarr_core::{ArrayError, Element, Var};

use crate::raw::RawArray;

/// A growable array of `T` stored through the type-erased [`RawArray`].
///
/// A thin forwarding layer: all storage management (doubling growth,
/// bounds gating, range deletion with compaction) lives in the raw
/// array. The typed layer only encodes and decodes element payloads.
#[derive(Clone, Debug)]
pub struct Array<T: Element> {
    raw: RawArray,
    _elem: PhantomData<T>,
}

/// A heterogeneous array of tagged [`Var`] values.
///
/// Each slot stores the active kind alongside the payload; reads come
/// back as [`Var`] and are unpacked with its checked accessors.
pub type VarArray = Array<Var>;

impl<T: Element> Array<T> {
    /// Create an array with `capacity` pre-allocated, zero-filled slots
    /// of `T::WIDTH` bytes each.
    ///
    /// # Errors
    ///
    /// [`ArrayError::AllocationFailed`] if the allocator refuses the
    /// block (or [`ArrayError::ZeroElementWidth`] for a zero-width
    /// `Element` impl, which violates the trait contract).
    pub fn with_capacity(capacity: usize) -> Result<Self, ArrayError> {
        Ok(Self {
            raw: RawArray::with_capacity(T::WIDTH, capacity)?,
            _elem: PhantomData,
        })
    }

    /// Append `value`, doubling the capacity when full.
    ///
    /// # Errors
    ///
    /// [`ArrayError::AllocationFailed`] if growth fails; the array is
    /// unchanged.
    pub fn push(&mut self, value: T) -> Result<(), ArrayError> {
        self.raw.push_with(|slot| value.write_bytes(slot))
    }

    /// Overwrite the element at `index` with `value`.
    ///
    /// # Errors
    ///
    /// [`ArrayError::OutOfBounds`] if `index` is not a valid element;
    /// the array is unchanged.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), ArrayError> {
        let size = self.raw.len();
        match self.raw.get_mut(index) {
            Some(slot) => {
                value.write_bytes(slot);
                Ok(())
            }
            None => Err(ArrayError::OutOfBounds { index, size }),
        }
    }

    /// The element at `index` by copy, or `None` if out of bounds.
    pub fn get(&self, index: usize) -> Option<T> {
        self.raw.get(index).map(T::read_bytes)
    }

    /// True iff `index` addresses a valid element.
    pub fn in_bounds(&self, index: usize) -> bool {
        self.raw.in_bounds(index)
    }

    /// Remove `len` contiguous elements starting at `start`, compacting
    /// the tail. The range may run exactly to the end of the array.
    ///
    /// # Errors
    ///
    /// [`ArrayError::RangeOutOfBounds`] if the range does not lie within
    /// `[0, size)`; the array is unchanged.
    pub fn delete_range(&mut self, start: usize, len: usize) -> Result<(), ArrayError> {
        self.raw.delete_range(start, len)
    }

    /// Remove the single element at `index`, compacting the tail.
    ///
    /// # Errors
    ///
    /// [`ArrayError::RangeOutOfBounds`] if `index` is not a valid
    /// element; the array is unchanged.
    pub fn delete(&mut self, index: usize) -> Result<(), ArrayError> {
        self.raw.delete(index)
    }

    /// Number of valid elements.
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// True if no elements are stored.
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Number of slots currently allocated.
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }

    /// Borrow the underlying type-erased array.
    pub fn as_raw(&self) -> &RawArray {
        &self.raw
    }
}
