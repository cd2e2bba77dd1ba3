//! Mfcontrast: contrast coding for categorical model variables.
//!
//! A categorical variable with k observed levels enters a numeric model
//! matrix through a k-row coding matrix. This crate provides the standard
//! reduced-rank schemes (dummy, effects, Helmert), the full-rank full-dummy
//! coding, and verbatim user-supplied matrices, together with the level and
//! base-level bookkeeping: declared level orderings, declared reference
//! levels, strict level-set validation at build time, and subset-only
//! revalidation when an already-built coding meets new data.
//!
//! Example
//! ```
//! use mfcontrast::prelude::*;
//!
//! let built = ContrastsMatrix::build(Coding::dummy(), &["a", "b", "c"]).unwrap();
//! assert_eq!(built.matrix().nrows(), 3);
//! assert_eq!(built.matrix().ncols(), 2);
//! assert_eq!(built.term_names(), ["b", "c"]);
//!
//! // Scoring on a subset of the training levels is fine...
//! assert!(built.rebuild(&["a", "c"]).is_ok());
//! // ...but an unseen level is not.
//! assert!(built.rebuild(&["a", "z"]).is_err());
//! ```

/// Coding schemes and their per-scheme matrix semantics.
pub mod coding;
/// Typed contrast-configuration faults.
pub mod error;
/// A scheme applied to concrete levels: the built coding matrix.
pub mod matrix;

pub mod prelude {
    //! Convenient re-exports for end users.
    pub use crate::coding::{Coding, CodingKind, CodingOptions, Level};
    pub use crate::error::{ContrastError, Result};
    pub use crate::matrix::ContrastsMatrix;
}
