//! Formula editing: rebuild a formula from its term set, or remove a single
//! additive term. Both operations leave their inputs untouched.

use crate::error::{Result, TermError};
use crate::expr::{Expr, Operator};
use crate::formula::Formula;
use crate::term::Term;
use crate::termset::TermSet;

/// Rebuild a formula from its expanded term set.
///
/// The right-hand side is an additive call starting with the literal `1` or
/// `0` (so the intercept flag survives re-extraction), followed by the
/// retained terms in stored order and then any grouping terms. The result is
/// term-set equivalent to the original formula, though not necessarily
/// expression-identical.
pub fn reconstruct(set: &TermSet) -> Formula {
    let mut args: Vec<Expr> = Vec::with_capacity(set.terms().len() + set.group_terms().len() + 1);
    args.push(Expr::Integer(if set.has_intercept() { 1 } else { 0 }));
    args.extend(set.terms().iter().map(Term::to_expr));
    args.extend(set.group_terms().iter().map(Term::to_expr));
    Formula {
        lhs: set.response().map(Term::to_expr),
        rhs: Expr::call(Operator::Plus, args),
    }
}

/// Remove a single additive term from a formula's right-hand side.
///
/// The rhs must literally be a `+` call and `target` must match one of its
/// direct arguments by structural equality; the last match wins when the
/// same term appears more than once. Dropping the literal `1` replaces it in
/// place by `0` (explicit intercept removal) instead of deleting the
/// argument. The input formula is never mutated; the edit is applied to a
/// fresh copy.
pub fn drop_term(formula: &Formula, target: &Expr) -> Result<Formula> {
    if let Expr::Integer(value) = target
        && *value != 1
    {
        return Err(TermError::DropNonUnit { value: *value });
    }

    let mut edited = formula.clone();
    let Expr::Call {
        op: Operator::Plus,
        args,
    } = &mut edited.rhs
    else {
        return Err(TermError::NotAdditive {
            rhs: formula.rhs.to_string(),
        });
    };

    let position = args
        .iter()
        .rposition(|arg| arg == target)
        .ok_or_else(|| TermError::TermNotFound {
            term: target.to_string(),
            rhs: formula.rhs.to_string(),
        })?;

    if matches!(target, Expr::Integer(1)) {
        args[position] = Expr::Integer(0);
    } else {
        args.remove(position);
    }
    Ok(edited)
}
