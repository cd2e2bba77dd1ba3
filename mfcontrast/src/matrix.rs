//! Building a coding scheme against concrete levels.

use log::debug;
use nalgebra::DMatrix;

use crate::coding::{Coding, CodingKind, Level};
use crate::error::{ContrastError, Result};

/// A coding scheme applied to a concrete, ordered set of levels.
///
/// Invariants: `matrix` has exactly `levels.len()` rows and
/// `term_names.len()` columns; reduced-rank schemes produce one column fewer
/// than there are levels.
#[derive(Debug, Clone, PartialEq)]
pub struct ContrastsMatrix<L> {
    coding: Coding<L>,
    matrix: DMatrix<f64>,
    term_names: Vec<String>,
    levels: Vec<L>,
}

impl<L: Level> ContrastsMatrix<L> {
    /// Apply `coding` to the levels observed in the data.
    ///
    /// The effective level ordering is the scheme's declared one when
    /// present, else the observed order. Declared and observed levels must
    /// be set-equal: a declared level missing from the data would produce an
    /// all-zero column, and an observed level missing from the declaration
    /// would silently drop data. The base level defaults to the first level.
    pub fn build(coding: Coding<L>, observed: &[L]) -> Result<ContrastsMatrix<L>> {
        let levels: Vec<L> = match coding.declared_levels() {
            Some(declared) => declared.to_vec(),
            None => observed.to_vec(),
        };

        let declared_missing = levels.iter().any(|level| !observed.contains(level));
        let observed_missing = observed.iter().any(|level| !levels.contains(level));
        if declared_missing || observed_missing {
            return Err(ContrastError::LevelMismatch {
                declared: render(&levels),
                observed: render(observed),
            });
        }

        if levels.len() < 2 {
            return Err(ContrastError::TooFewLevels {
                count: levels.len(),
            });
        }

        let base = match coding.declared_base() {
            Some(declared) => levels.iter().position(|level| level == declared).ok_or_else(
                || ContrastError::UnknownBaseLevel {
                    base: declared.to_string(),
                    levels: render(&levels),
                },
            )?,
            None => 0,
        };

        let term_names = coding.term_names(&levels, base);
        let matrix = coding.contrasts_matrix(base, levels.len())?;
        debug!(
            "built {:?} contrasts for {} levels ({} columns, base row {})",
            CodingKind::from(&coding),
            levels.len(),
            matrix.ncols(),
            base,
        );

        Ok(ContrastsMatrix {
            coding,
            matrix,
            term_names,
            levels,
        })
    }

    /// Re-validate this coding against the levels of new data.
    ///
    /// Unlike [`ContrastsMatrix::build`] this is a subset check, not
    /// set-equality: scoring on a subset of the training levels is fine, but
    /// a level the coding was never built for is a fault. The coding itself
    /// is returned unchanged.
    pub fn rebuild(&self, new_levels: &[L]) -> Result<ContrastsMatrix<L>> {
        for level in new_levels {
            if !self.levels.contains(level) {
                return Err(ContrastError::UnknownNewLevel {
                    level: level.to_string(),
                    levels: render(&self.levels),
                });
            }
        }
        Ok(self.clone())
    }

    /// The scheme this matrix was built from.
    pub fn coding(&self) -> &Coding<L> {
        &self.coding
    }

    /// The numeric coding matrix, one row per level.
    pub fn matrix(&self) -> &DMatrix<f64> {
        &self.matrix
    }

    /// Human-readable column names, one per matrix column.
    pub fn term_names(&self) -> &[String] {
        &self.term_names
    }

    /// The ordered levels this matrix was built for.
    pub fn levels(&self) -> &[L] {
        &self.levels
    }
}

fn render<L: Level>(levels: &[L]) -> Vec<String> {
    levels.iter().map(ToString::to_string).collect()
}
