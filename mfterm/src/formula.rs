use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, TermError};
use crate::expr::{Expr, Operator};

/// A model formula: an optional response side and a predictor side, both
/// kept as raw expressions. Equality is structural. A formula is never
/// mutated in place; edits go through [`crate::edit`] and return a fresh
/// copy.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Formula {
    pub lhs: Option<Expr>,
    pub rhs: Expr,
}

impl Formula {
    /// Split a parsed `~` call into its sides. One argument makes a
    /// one-sided formula, two make a response/predictor pair; anything else
    /// is rejected.
    pub fn from_expr(expr: &Expr) -> Result<Formula> {
        match expr {
            Expr::Call {
                op: Operator::Tilde,
                args,
            } => match args.as_slice() {
                [rhs] => Ok(Formula {
                    lhs: None,
                    rhs: rhs.clone(),
                }),
                [lhs, rhs] => Ok(Formula {
                    lhs: Some(lhs.clone()),
                    rhs: rhs.clone(),
                }),
                _ => Err(TermError::NotAFormula {
                    found: expr.to_string(),
                }),
            },
            other => Err(TermError::NotAFormula {
                found: other.to_string(),
            }),
        }
    }

    pub fn two_sided(lhs: Expr, rhs: Expr) -> Formula {
        Formula {
            lhs: Some(lhs),
            rhs,
        }
    }

    pub fn one_sided(rhs: Expr) -> Formula {
        Formula { lhs: None, rhs }
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.lhs {
            Some(lhs) => write!(f, "{} ~ {}", lhs, self.rhs),
            None => write!(f, "~ {}", self.rhs),
        }
    }
}
