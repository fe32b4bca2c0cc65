//! Dynamic arrays over raw byte-block storage.
//!
//! Two containers share one storage algorithm:
//!
//! - [`RawArray`] — a type-erased growable array whose element byte width
//!   is chosen at construction. This is where the storage management
//!   lives: doubling growth, bounds-checked access, and mid-array range
//!   deletion with compaction.
//! - [`Array<T>`] — a typed view over the same storage for any
//!   [`Element`], including the tagged [`Var`] variant via [`VarArray`].
//!
//! # Quick start
//!
//! ```rust
//! use dynarr::{Array, ArrayError};
//!
//! fn main() -> Result<(), ArrayError> {
//!     let mut xs: Array<i32> = Array::with_capacity(4)?;
//!     for v in 1..=14 {
//!         xs.push(v)?;
//!     }
//!     assert_eq!(xs.len(), 14);
//!     assert_eq!(xs.capacity(), 16); // doubled 4 -> 8 -> 16
//!
//!     xs.delete_range(3, 5)?; // removes the values 4..=8
//!     assert_eq!(xs.get(3), Some(9));
//!     assert_eq!(xs.len(), 9);
//!     Ok(())
//! }
//! ```
//!
//! # Storage contract
//!
//! - `size <= capacity` at all times; slots beyond `size` are zero-filled
//!   across construction, growth, and deletion.
//! - Growth doubles the capacity and preserves stored bytes at their
//!   indices.
//! - An out-of-range index or range is reported and the operation is a
//!   no-op: never a panic, never corrupted state.
//! - Allocation failure surfaces as [`ArrayError::AllocationFailed`] with
//!   the array unchanged.
//!
//! # Feature flags
//!
//! - `logging` — emit a `log::debug!` record for every rejected index,
//!   range, or payload width, in addition to the returned error.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

#[macro_use]
mod logging;

pub mod raw;
pub mod typed;

// Public re-exports for the primary API surface.
pub use dynarr_core::{ArrayError, Element, KindMismatch, Var, VarKind};
pub use raw::RawArray;
pub use typed::{Array, VarArray};
