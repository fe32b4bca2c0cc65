//! Core types for the `dynarr` containers.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions shared across the workspace: the
//! [`Element`] byte-view trait, the tagged [`Var`] variant, and the
//! error types returned by every container operation.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod element;
pub mod error;
pub mod var;

// Public re-exports for the primary API surface.
pub use element::Element;
pub use error::{ArrayError, KindMismatch};
pub use var::{Var, VarKind};
