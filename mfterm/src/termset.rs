//! Term-set extraction.
//!
//! [`TermSet::build`] expands a formula's right-hand side into everything a
//! design-matrix builder needs to decide, per column group, which data
//! columns to pull: the ordered fixed-effect terms, the evaluation-variable
//! universe, the term-by-variable incidence matrix, per-term degrees, and the
//! intercept and response flags. Grouping (`|`) terms describe random-effect
//! structure and are carried separately; they take no part in the
//! fixed-effect expansion.

use log::debug;
use nalgebra::DMatrix;

use crate::error::Result;
use crate::expr::Name;
use crate::formula::Formula;
use crate::term::Term;

/// The expanded right-hand side of a formula.
///
/// Invariants
/// - `terms` holds the de-duplicated rhs terms sorted by non-decreasing
///   degree, with intercept and grouping terms removed.
/// - `variables` lists the response variables (if any) first, then each rhs
///   variable at first occurrence in term order.
/// - `factors` has one row per variable and one column per term; an entry is
///   true iff the variable is a constituent of the term.
#[derive(Debug, Clone, PartialEq)]
pub struct TermSet {
    response: Option<Term>,
    terms: Vec<Term>,
    group_terms: Vec<Term>,
    variables: Vec<Name>,
    term_vars: Vec<Vec<Name>>,
    factors: DMatrix<bool>,
    degrees: Vec<usize>,
    has_intercept: bool,
}

impl TermSet {
    /// Expand a formula into its term set.
    ///
    /// The rhs is wrapped in a synthetic top-level sum so a bare single term
    /// or an intercept-only rhs goes through the same path, sorted by
    /// degree, and de-duplicated preserving first occurrence. The intercept
    /// is present unless some intercept literal denies it: an explicit `0`
    /// or `-1` anywhere forces absence.
    pub fn build(formula: &Formula) -> Result<TermSet> {
        let rhs = Term::from_expr(&formula.rhs)?;
        let summands = Term::sum(vec![rhs]).sorted().summands();

        let mut deduplicated: Vec<Term> = Vec::with_capacity(summands.len());
        for term in summands {
            if !deduplicated.contains(&term) {
                deduplicated.push(term);
            }
        }

        let mut has_intercept = true;
        let mut terms: Vec<Term> = Vec::new();
        let mut group_terms: Vec<Term> = Vec::new();
        for term in deduplicated {
            match term {
                Term::Intercept(intercept) => has_intercept &= intercept.is_present(),
                Term::Grouping(_) => group_terms.push(term),
                other => terms.push(other),
            }
        }

        let response = formula.lhs.as_ref().map(Term::from_expr).transpose()?;

        let term_vars: Vec<Vec<Name>> = terms.iter().map(Term::eval_vars).collect();
        let mut variables: Vec<Name> = Vec::new();
        if let Some(response) = &response {
            variables.extend(response.eval_vars());
        }
        for vars in &term_vars {
            for var in vars {
                if !variables.contains(var) {
                    variables.push(var.clone());
                }
            }
        }

        let factors = DMatrix::from_fn(variables.len(), terms.len(), |row, col| {
            term_vars[col].contains(&variables[row])
        });
        let degrees: Vec<usize> = terms.iter().map(Term::degree).collect();

        debug!(
            "expanded `{}` into {} fixed-effect terms over {} variables (intercept: {})",
            formula,
            terms.len(),
            variables.len(),
            has_intercept,
        );

        Ok(TermSet {
            response,
            terms,
            group_terms,
            variables,
            term_vars,
            factors,
            degrees,
            has_intercept,
        })
    }

    /// The normalized response term, when the formula was two-sided.
    pub fn response(&self) -> Option<&Term> {
        self.response.as_ref()
    }

    /// Ordered, de-duplicated fixed-effect terms (intercept removed).
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Grouping (`|`) terms, in rhs order. Random-effect expansion is the
    /// caller's business.
    pub fn group_terms(&self) -> &[Term] {
        &self.group_terms
    }

    /// The evaluation-variable universe, response variables first.
    pub fn variables(&self) -> &[Name] {
        &self.variables
    }

    /// Per-term constituent variable lists, parallel to [`TermSet::terms`].
    pub fn term_vars(&self) -> &[Vec<Name>] {
        &self.term_vars
    }

    /// Variable-by-term incidence matrix.
    pub fn factors(&self) -> &DMatrix<bool> {
        &self.factors
    }

    /// Per-term interaction degrees, parallel to [`TermSet::terms`].
    pub fn degrees(&self) -> &[usize] {
        &self.degrees
    }

    pub fn has_intercept(&self) -> bool {
        self.has_intercept
    }

    pub fn has_response(&self) -> bool {
        self.response.is_some()
    }
}
