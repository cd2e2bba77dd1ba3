use strum::EnumIs;
use thiserror::Error;

use crate::expr::Operator;

pub type Result<T> = std::result::Result<T, TermError>;

/// Faults raised while building or editing term structures. Every variant
/// carries the offending value so callers can report precisely.
#[derive(Debug, Clone, PartialEq, Eq, EnumIs, Error)]
pub enum TermError {
    /// The root expression was not a `~` call with one or two arguments.
    #[error(
        "The root of a formula must be a `~` call with one or two arguments, but `{found}` was given."
    )]
    NotAFormula { found: String },

    /// A bare integer literal outside {-1, 0, 1}.
    #[error(
        "Cannot build an intercept term from the integer literal `{value}`. Only -1, 0 and 1 may appear as bare literals in a formula."
    )]
    BadInterceptValue { value: i64 },

    /// The right operand of `-` was not the literal intercept `1`.
    #[error("The right operand of `-` must be the literal intercept `1`, but `{found}` was given.")]
    BadSubtraction { found: String },

    /// A `-` call with an argument count other than two.
    #[error("A `-` call must have exactly two operands, but {count} were given.")]
    BadSubtractionArity { count: usize },

    /// An operator appeared somewhere it cannot, e.g. `~` nested inside a
    /// formula side.
    #[error("Malformed formula expression: the operator `{op}` cannot appear here.")]
    Malformed { op: Operator },

    /// A term-removal target on a right-hand side that is not an additive call.
    #[error("Cannot drop a term from `{rhs}`: the right-hand side is not an additive (`+`) call.")]
    NotAdditive { rhs: String },

    /// The removal target does not appear verbatim among the rhs arguments.
    #[error("The term `{term}` does not appear on the right-hand side `{rhs}`.")]
    TermNotFound { term: String, rhs: String },

    /// Only the literal intercept `1` may be dropped among numeric literals.
    #[error(
        "Cannot drop the numeric literal `{value}`; only the literal intercept `1` may be dropped."
    )]
    DropNonUnit { value: i64 },
}
