//! The type-erased dynamic array: raw byte-block storage.
//!
//! [`RawArray`] manages one owned, contiguous byte block as a sequence of
//! fixed-width slots. The element width is a runtime value chosen at
//! construction, so a single array type serves any payload — primitive
//! scalars, packed structs, encoded variants — at the cost of moving type
//! safety to the [`Element`](dynarr_core::Element) seam in the typed view.

use dynarr_core::ArrayError;

/// Number of bytes for `capacity` slots of `width` bytes each.
///
/// A product that overflows `usize` can never be allocated, so it is
/// reported as an allocation failure of the full address space.
fn block_bytes(capacity: usize, width: usize) -> Result<usize, ArrayError> {
    capacity
        .checked_mul(width)
        .ok_or(ArrayError::AllocationFailed {
            requested: usize::MAX,
        })
}

/// A growable array of fixed-width elements over an owned byte block.
///
/// The element width is set at construction and never changes. The
/// backing block always holds exactly `capacity * width` bytes; slots at
/// indices `[size, capacity)` stay zero-filled across construction,
/// growth, and deletion.
///
/// Every accessor and mutator gates on [`RawArray::in_bounds`]: a
/// rejected index or range is reported and the operation is a no-op.
/// Nothing here panics on caller input, and the block is freed when the
/// array is dropped.
#[derive(Clone, Debug)]
pub struct RawArray {
    /// Byte width of one element. Immutable after construction.
    width: usize,
    /// Number of slots the block holds without reallocation.
    capacity: usize,
    /// Number of logically valid elements.
    len: usize,
    /// Backing block, always exactly `capacity * width` bytes.
    data: Vec<u8>,
}

impl RawArray {
    /// Create an array for elements of `width` bytes with `capacity`
    /// pre-allocated, zero-filled slots.
    ///
    /// A `capacity` of 0 is legal; the first push grows the block to one
    /// slot.
    ///
    /// # Errors
    ///
    /// [`ArrayError::ZeroElementWidth`] if `width` is 0, or
    /// [`ArrayError::AllocationFailed`] if the allocator refuses the
    /// block.
    pub fn with_capacity(width: usize, capacity: usize) -> Result<Self, ArrayError> {
        if width == 0 {
            return Err(ArrayError::ZeroElementWidth);
        }
        let bytes = block_bytes(capacity, width)?;
        let mut data = Vec::new();
        data.try_reserve_exact(bytes)
            .map_err(|_| ArrayError::AllocationFailed { requested: bytes })?;
        data.resize(bytes, 0);
        Ok(Self {
            width,
            capacity,
            len: 0,
            data,
        })
    }

    /// True iff `index` addresses a valid element (`index < size`).
    ///
    /// The single gate every accessor and mutator goes through.
    pub fn in_bounds(&self, index: usize) -> bool {
        index < self.len
    }

    /// Number of valid elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if no elements are stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots currently allocated.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Byte width of one element.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Size of the backing block in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.data.len()
    }

    /// Append one element, growing the block if full.
    ///
    /// When `size == capacity`, the capacity doubles, stored bytes are
    /// preserved at their indices, and every newly available slot is
    /// zero-filled before the value lands in its slot. Amortized O(1);
    /// a growing call is O(capacity).
    ///
    /// # Errors
    ///
    /// [`ArrayError::WidthMismatch`] unless `value.len()` equals the
    /// element width, or [`ArrayError::AllocationFailed`] if growth
    /// fails. The array is unchanged on error.
    pub fn push(&mut self, value: &[u8]) -> Result<(), ArrayError> {
        if value.len() != self.width {
            reject!(
                "push rejected: payload of {} bytes, element width {}",
                value.len(),
                self.width
            );
            return Err(ArrayError::WidthMismatch {
                expected: self.width,
                actual: value.len(),
            });
        }
        self.push_with(|slot| slot.copy_from_slice(value))
    }

    /// Append one element by writing directly into the fresh slot.
    ///
    /// The slot handed to `f` is exactly one element wide and zero-filled.
    /// This is the write path the typed [`Array`](crate::typed::Array)
    /// uses; [`RawArray::push`] is this plus a payload width check.
    ///
    /// # Errors
    ///
    /// [`ArrayError::AllocationFailed`] if growth fails; the array is
    /// unchanged and `f` is not called.
    pub fn push_with(&mut self, f: impl FnOnce(&mut [u8])) -> Result<(), ArrayError> {
        if self.len == self.capacity {
            self.grow()?;
        }
        let start = self.len * self.width;
        self.len += 1;
        f(&mut self.data[start..start + self.width]);
        Ok(())
    }

    /// Double the capacity, preserving stored bytes and zero-filling
    /// every new slot. A capacity of 0 grows to one slot.
    fn grow(&mut self) -> Result<(), ArrayError> {
        let new_capacity = if self.capacity == 0 {
            1
        } else {
            self.capacity
                .checked_mul(2)
                .ok_or(ArrayError::AllocationFailed {
                    requested: usize::MAX,
                })?
        };
        let new_bytes = block_bytes(new_capacity, self.width)?;
        let grow_by = new_bytes - self.data.len();
        self.data
            .try_reserve_exact(grow_by)
            .map_err(|_| ArrayError::AllocationFailed {
                requested: new_bytes,
            })?;
        self.data.resize(new_bytes, 0);
        self.capacity = new_capacity;
        Ok(())
    }

    /// Overwrite the element at `index` with `value`.
    ///
    /// # Errors
    ///
    /// [`ArrayError::WidthMismatch`] unless `value.len()` equals the
    /// element width, or [`ArrayError::OutOfBounds`] if `index` is not a
    /// valid element. The array is unchanged on error.
    pub fn set(&mut self, index: usize, value: &[u8]) -> Result<(), ArrayError> {
        if value.len() != self.width {
            reject!(
                "set rejected: payload of {} bytes, element width {}",
                value.len(),
                self.width
            );
            return Err(ArrayError::WidthMismatch {
                expected: self.width,
                actual: value.len(),
            });
        }
        if !self.in_bounds(index) {
            reject!("set rejected: index {} out of bounds (size {})", index, self.len);
            return Err(ArrayError::OutOfBounds {
                index,
                size: self.len,
            });
        }
        let start = index * self.width;
        self.data[start..start + self.width].copy_from_slice(value);
        Ok(())
    }

    /// Borrow the element at `index`, or `None` if out of bounds.
    ///
    /// The borrow is tied to `&self`: growth and deletion take
    /// `&mut self`, so the compiler ends any outstanding view before the
    /// storage can move.
    pub fn get(&self, index: usize) -> Option<&[u8]> {
        if !self.in_bounds(index) {
            reject!("get rejected: index {} out of bounds (size {})", index, self.len);
            return None;
        }
        let start = index * self.width;
        Some(&self.data[start..start + self.width])
    }

    /// Mutably borrow the element at `index`, or `None` if out of bounds.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut [u8]> {
        if !self.in_bounds(index) {
            reject!("get_mut rejected: index {} out of bounds (size {})", index, self.len);
            return None;
        }
        let start = index * self.width;
        Some(&mut self.data[start..start + self.width])
    }

    /// Remove `len` contiguous elements starting at `start`, shifting the
    /// tail left to close the gap.
    ///
    /// The range may run exactly to the end of the array
    /// (`start + len == size`). Vacated trailing slots are zero-filled,
    /// keeping the zero-beyond-size invariant. A `len` of 0 is a no-op
    /// for any in-bounds `start`. Capacity does not shrink.
    ///
    /// # Errors
    ///
    /// [`ArrayError::RangeOutOfBounds`] if `start >= size` or
    /// `start + len > size`; the array is unchanged.
    pub fn delete_range(&mut self, start: usize, len: usize) -> Result<(), ArrayError> {
        let size = self.len;
        let end_in_bounds = start
            .checked_add(len)
            .is_some_and(|end| end <= size);
        if !self.in_bounds(start) || !end_in_bounds {
            reject!(
                "delete_range rejected: [{}, {}+{}) outside size {}",
                start,
                start,
                len,
                size
            );
            return Err(ArrayError::RangeOutOfBounds { start, len, size });
        }
        let w = self.width;
        self.data.copy_within((start + len) * w..size * w, start * w);
        self.data[(size - len) * w..size * w].fill(0);
        self.len -= len;
        Ok(())
    }

    /// Remove the single element at `index`, shifting the tail left.
    ///
    /// # Errors
    ///
    /// [`ArrayError::RangeOutOfBounds`] if `index` is not a valid
    /// element; the array is unchanged.
    pub fn delete(&mut self, index: usize) -> Result<(), ArrayError> {
        self.delete_range(index, 1)
    }
}
