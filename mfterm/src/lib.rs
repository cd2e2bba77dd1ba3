//! Mfterm: the symbolic term engine behind model-matrix construction.
//!
//! A statistical model formula such as `y ~ a + b + a & b` is handed to this
//! crate as an already-parsed expression tree ([`expr::Expr`]). The crate
//! normalizes it into a canonical sum-of-interactions term tree
//! ([`term::Term`]), expands that tree into the metadata a design-matrix
//! builder needs ([`termset::TermSet`]), and supports round-trip editing of
//! formulas at the term level ([`edit`]).
//!
//! Normalization
//!  - Nested `+` under `+` and `&` under `&` are flattened at construction.
//!  - `&` distributes over `+`, so `a & (b + c)` becomes `a & b + a & c`.
//!  - The crossing operator `*` never survives: `a * b` becomes
//!    `a + b + a & b` before anything else looks at the tree.
//!  - `x - 1` is rewritten to `x + (-1)`; any other right operand of `-` is
//!    rejected.
//!
//! All computation here is pure and synchronous. Editing operations clone the
//! input formula before touching it, so shared formulas are never mutated.
//!
//! Example
//! ```
//! use mfterm::prelude::*;
//!
//! let expr = Expr::tie(sym("y"), sym("a") * sym("b"));
//! let formula = Formula::from_expr(&expr).unwrap();
//! let set = TermSet::build(&formula).unwrap();
//!
//! // `a * b` expanded to `a + b + a & b`, with the implicit intercept.
//! assert!(set.has_intercept());
//! assert_eq!(set.terms().len(), 3);
//! assert_eq!(set.degrees(), &[1, 1, 2]);
//! ```

/// Formula editing: reconstruction from a term set and single-term removal.
pub mod edit;
/// Typed construction and edit faults.
pub mod error;
/// The expression-tree adapter over the host parser's output.
pub mod expr;
/// The formula pair (optional lhs, rhs).
pub mod formula;
/// The normalized term algebra and its rewrite rules.
pub mod term;
/// Term-set extraction: terms, variables, and the incidence matrix.
pub mod termset;

pub mod prelude {
    //! Convenient re-exports for end users.
    pub use crate::edit::{drop_term, reconstruct};
    pub use crate::error::{Result, TermError};
    pub use crate::expr::{Expr, Name, Operator, lit, sym};
    pub use crate::formula::Formula;
    pub use crate::term::{Intercept, Term, TermKind};
    pub use crate::termset::TermSet;
}
