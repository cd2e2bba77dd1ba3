//! Coding schemes.
//!
//! A scheme decides, for k levels and a base-level index, the k-row numeric
//! coding matrix and the human-readable column names. The reduced-rank
//! schemes (dummy, effects, Helmert) share one settings struct carrying the
//! optional declared base level and level ordering; the full-dummy coding
//! has no base-level concept and the manual coding uses a user-supplied
//! matrix verbatim after a shape check.

use std::fmt;

use nalgebra::DMatrix;
use strum::{EnumDiscriminants, EnumIs};

use crate::error::{ContrastError, Result};

/// Bound required of categorical level values.
pub trait Level: Clone + PartialEq + fmt::Debug + fmt::Display {}

impl<T: Clone + PartialEq + fmt::Debug + fmt::Display> Level for T {}

/// User-tunable settings shared by the reduced-rank schemes.
#[derive(Debug, Clone, PartialEq)]
pub struct CodingOptions<L> {
    /// Reference level exempt from its own column. Defaults to the first
    /// level.
    pub base: Option<L>,
    /// Declared level ordering. Defaults to the observed order.
    pub levels: Option<Vec<L>>,
}

impl<L> Default for CodingOptions<L> {
    fn default() -> Self {
        CodingOptions {
            base: None,
            levels: None,
        }
    }
}

/// A contrast-coding scheme, not yet applied to concrete levels.
#[derive(Debug, Clone, PartialEq, EnumIs, EnumDiscriminants)]
#[strum_discriminants(name(CodingKind), derive(EnumIs))]
pub enum Coding<L> {
    /// Indicator columns for every non-base level.
    Dummy(CodingOptions<L>),
    /// Like dummy coding, with the base-level row pinned at -1.
    Effects(CodingOptions<L>),
    /// Each column contrasts one level against the mean of the levels
    /// preceding it.
    Helmert(CodingOptions<L>),
    /// One indicator column per level; full rank, no base level.
    FullDummy,
    /// A user-supplied k x (k-1) matrix used verbatim.
    Manual {
        matrix: DMatrix<f64>,
        levels: Option<Vec<L>>,
    },
}

impl<L: Level> Coding<L> {
    /// Dummy coding with default settings.
    pub fn dummy() -> Coding<L> {
        Coding::Dummy(CodingOptions::default())
    }

    /// Effects coding with default settings.
    pub fn effects() -> Coding<L> {
        Coding::Effects(CodingOptions::default())
    }

    /// Helmert coding with default settings.
    pub fn helmert() -> Coding<L> {
        Coding::Helmert(CodingOptions::default())
    }

    /// The scheme's declared level ordering, if any.
    pub fn declared_levels(&self) -> Option<&[L]> {
        match self {
            Coding::Dummy(options) | Coding::Effects(options) | Coding::Helmert(options) => {
                options.levels.as_deref()
            }
            Coding::Manual { levels, .. } => levels.as_deref(),
            Coding::FullDummy => None,
        }
    }

    /// The scheme's declared base level, if any.
    pub fn declared_base(&self) -> Option<&L> {
        match self {
            Coding::Dummy(options) | Coding::Effects(options) | Coding::Helmert(options) => {
                options.base.as_ref()
            }
            Coding::FullDummy | Coding::Manual { .. } => None,
        }
    }

    /// Column names for the coded matrix: every level except the base, in
    /// level order; all levels for the full-rank coding.
    pub fn term_names(&self, levels: &[L], base: usize) -> Vec<String> {
        match self {
            Coding::FullDummy => levels.iter().map(ToString::to_string).collect(),
            _ => levels
                .iter()
                .enumerate()
                .filter(|(index, _)| *index != base)
                .map(|(_, level)| level.to_string())
                .collect(),
        }
    }

    /// The numeric coding matrix for `n` levels with base row `base`
    /// (0-indexed). Fails for fewer than two levels, and for the manual
    /// scheme on a shape mismatch.
    pub fn contrasts_matrix(&self, base: usize, n: usize) -> Result<DMatrix<f64>> {
        if n < 2 {
            return Err(ContrastError::TooFewLevels { count: n });
        }
        match self {
            Coding::Dummy(_) => Ok(dummy_matrix(base, n)),
            Coding::Effects(_) => {
                let mut matrix = dummy_matrix(base, n);
                for col in 0..n - 1 {
                    matrix[(base, col)] = -1.0;
                }
                Ok(matrix)
            }
            Coding::Helmert(_) => Ok(helmert_matrix(base, n)),
            Coding::FullDummy => Ok(DMatrix::identity(n, n)),
            Coding::Manual { matrix, .. } => {
                if matrix.nrows() != n || matrix.ncols() != n - 1 {
                    return Err(ContrastError::BadShape {
                        levels: n,
                        expected_cols: n - 1,
                        rows: matrix.nrows(),
                        cols: matrix.ncols(),
                    });
                }
                Ok(matrix.clone())
            }
        }
    }
}

/// The n x n identity with the base level's column removed: one indicator
/// column per non-base level.
fn dummy_matrix(base: usize, n: usize) -> DMatrix<f64> {
    DMatrix::from_fn(n, n - 1, |row, col| {
        let level = if col < base { col } else { col + 1 };
        if row == level { 1.0 } else { 0.0 }
    })
}

/// Helmert columns are built in the pre-reorder level numbering: column i
/// has -1 in rows 0..=i, the value i+1 at row i+1, and 0 below. The rows are
/// then reordered through the index list [base, 0..base, base+1..n]: the
/// first output row reads the base's prototype row, the rows before the base
/// shift down by one, and the rows after it stay in place.
fn helmert_matrix(base: usize, n: usize) -> DMatrix<f64> {
    let prototype = DMatrix::from_fn(n, n - 1, |row, col| {
        if row <= col {
            -1.0
        } else if row == col + 1 {
            (col + 1) as f64
        } else {
            0.0
        }
    });
    let source_row = |row: usize| {
        if row == 0 {
            base
        } else if row <= base {
            row - 1
        } else {
            row
        }
    };
    DMatrix::from_fn(n, n - 1, |row, col| prototype[(source_row(row), col)])
}
