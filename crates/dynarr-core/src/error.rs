//! Error types for the dynarr containers.

use std::error::Error;
use std::fmt;

use crate::var::VarKind;

/// Errors that can occur during dynamic array operations.
///
/// Rejected indices and ranges leave the array untouched: the failing
/// operation is a no-op and the error carries the context needed to
/// report it. Allocation failures are surfaced explicitly rather than
/// continuing with a missing backing block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// An index outside `[0, size)` was passed to an accessor or mutator.
    OutOfBounds {
        /// The rejected index.
        index: usize,
        /// Number of valid elements at the time of the call.
        size: usize,
    },
    /// A deletion range that does not lie entirely within `[0, size)`.
    RangeOutOfBounds {
        /// First index of the rejected range.
        start: usize,
        /// Number of elements in the rejected range.
        len: usize,
        /// Number of valid elements at the time of the call.
        size: usize,
    },
    /// A byte payload whose length differs from the array's element width.
    WidthMismatch {
        /// The element width the array was constructed with.
        expected: usize,
        /// The length of the rejected payload.
        actual: usize,
    },
    /// Construction was attempted with an element width of zero.
    ZeroElementWidth,
    /// The allocator refused a request during construction or growth.
    AllocationFailed {
        /// Number of bytes requested.
        requested: usize,
    },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { index, size } => {
                write!(f, "index {index} out of bounds for array of size {size}")
            }
            Self::RangeOutOfBounds { start, len, size } => {
                write!(
                    f,
                    "range [{start}, {start}+{len}) out of bounds for array of size {size}"
                )
            }
            Self::WidthMismatch { expected, actual } => {
                write!(
                    f,
                    "payload of {actual} bytes does not match element width {expected}"
                )
            }
            Self::ZeroElementWidth => {
                write!(f, "element width must be greater than zero")
            }
            Self::AllocationFailed { requested } => {
                write!(f, "allocation of {requested} bytes failed")
            }
        }
    }
}

impl Error for ArrayError {}

/// A checked [`Var`](crate::var::Var) accessor asked for a kind other
/// than the one stored.
///
/// Carries both sides so callers can report exactly what went wrong
/// instead of reinterpreting the payload bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KindMismatch {
    /// The kind the accessor asked for.
    pub expected: VarKind,
    /// The kind actually stored.
    pub actual: VarKind,
}

impl fmt::Display for KindMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "variant kind mismatch: expected {}, found {}",
            self.expected, self.actual
        )
    }
}

impl Error for KindMismatch {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_display_names_index_and_size() {
        let err = ArrayError::OutOfBounds { index: 7, size: 3 };
        assert_eq!(err.to_string(), "index 7 out of bounds for array of size 3");
    }

    #[test]
    fn range_display_names_both_ends() {
        let err = ArrayError::RangeOutOfBounds {
            start: 2,
            len: 5,
            size: 4,
        };
        assert_eq!(
            err.to_string(),
            "range [2, 2+5) out of bounds for array of size 4"
        );
    }

    #[test]
    fn kind_mismatch_display_names_both_kinds() {
        let err = KindMismatch {
            expected: VarKind::F32,
            actual: VarKind::U64,
        };
        assert_eq!(err.to_string(), "variant kind mismatch: expected f32, found u64");
    }
}
