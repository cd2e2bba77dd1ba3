//! The normalized term algebra.
//!
//! Role
//! - Convert a parsed formula expression into a canonical sum-of-interactions
//!   term tree via [`Term::from_expr`].
//! - Guarantee the normalization invariants: no `+` directly under `+`, no
//!   `&` under `&`, no surviving `*` or `-` nodes.
//!
//! The rewrite engine is a work-queue fold: a fresh term accepts its children
//! one at a time, and each step may splice the queue (associativity), replace
//! the accumulator wholesale (distributivity), or expand the child before it
//! is ever folded (crossing). Trees are small, so the structural clones taken
//! during distribution are cheap.

use std::collections::VecDeque;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use strum::{EnumDiscriminants, EnumIs};

use crate::error::{Result, TermError};
use crate::expr::{Expr, Name, Operator};

/// Presence marker for the constant column. The three variants mirror the
/// three source spellings: `0` and `- 1` both denote absence but remain
/// distinguishable in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIs)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Intercept {
    /// Spelled `- 1` in the source formula.
    Negative,
    /// Spelled `0`.
    Zero,
    /// Spelled `1`, or implied by writing no intercept literal at all.
    Positive,
}

impl Intercept {
    pub fn from_value(value: i64) -> Result<Intercept> {
        match value {
            -1 => Ok(Intercept::Negative),
            0 => Ok(Intercept::Zero),
            1 => Ok(Intercept::Positive),
            _ => Err(TermError::BadInterceptValue { value }),
        }
    }

    pub fn value(self) -> i64 {
        match self {
            Intercept::Negative => -1,
            Intercept::Zero => 0,
            Intercept::Positive => 1,
        }
    }

    /// Whether this spelling denotes presence of the constant column.
    pub fn is_present(self) -> bool {
        matches!(self, Intercept::Positive)
    }
}

/// A node of the normalized additive-interaction tree.
///
/// Equality and hashing are structural: two terms are equal iff they have the
/// same head and equal children in the same order. The crossing (`*`) and
/// subtraction (`-`) operators have no variant here; both are rewritten away
/// during construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumIs, EnumDiscriminants)]
#[strum_discriminants(name(TermKind), derive(EnumIs))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", strum_discriminants(derive(Serialize, Deserialize)))]
pub enum Term {
    /// Additive combination of sub-terms.
    Sum(Vec<Term>),
    /// A k-way interaction.
    Interaction(Vec<Term>),
    /// A random-effect grouping `effects | group`.
    Grouping(Vec<Term>),
    /// Presence or absence of the constant column.
    Intercept(Intercept),
    /// A leaf evaluating a single data column.
    Eval(Name),
}

impl Term {
    /// Normalize a parsed expression into a term tree.
    ///
    /// Symbols become [`Term::Eval`] leaves, integer literals become
    /// intercept terms (rejecting anything outside {-1, 0, 1}), and calls are
    /// converted argument by argument and folded under the rewrite rules.
    pub fn from_expr(expr: &Expr) -> Result<Term> {
        match expr {
            Expr::Symbol(name) => Ok(Term::Eval(name.clone())),
            Expr::Integer(value) => Intercept::from_value(*value).map(Term::Intercept),
            Expr::Call { op, args } => {
                let children = args
                    .iter()
                    .map(Term::from_expr)
                    .collect::<Result<Vec<_>>>()?;
                Self::combine(*op, children)
            }
        }
    }

    /// Build a normalized additive combination.
    pub fn sum(children: Vec<Term>) -> Term {
        Self::fold(TermKind::Sum, children)
    }

    /// Build a normalized interaction (distributing over any sums).
    pub fn interaction(children: Vec<Term>) -> Term {
        Self::fold(TermKind::Interaction, children)
    }

    fn combine(op: Operator, children: Vec<Term>) -> Result<Term> {
        match op {
            Operator::Plus => Ok(Self::fold(TermKind::Sum, children)),
            Operator::And => Ok(Self::fold(TermKind::Interaction, children)),
            Operator::Bar => Ok(Term::Grouping(children)),
            Operator::Star => Self::cross(children),
            Operator::Minus => Self::subtract(children),
            Operator::Tilde => Err(TermError::Malformed { op }),
        }
    }

    /// Fold `pending` into a fresh `head`-tagged term one child at a time.
    ///
    /// Rewrites applied per step:
    /// - a `+` child under a `+` head (or `&` under `&`) splices its children
    ///   into the front of the queue instead of nesting;
    /// - a `+` child under a `&` head distributes: each grandchild gets its
    ///   own clone of the accumulated prefix plus the remaining queue, and
    ///   the results are summed.
    fn fold(head: TermKind, pending: Vec<Term>) -> Term {
        let mut queue: VecDeque<Term> = pending.into();
        let mut children: Vec<Term> = Vec::with_capacity(queue.len());
        while let Some(child) = queue.pop_front() {
            match (head, child) {
                (TermKind::Sum, Term::Sum(inner))
                | (TermKind::Interaction, Term::Interaction(inner)) => {
                    for grandchild in inner.into_iter().rev() {
                        queue.push_front(grandchild);
                    }
                }
                (TermKind::Interaction, Term::Sum(inner)) => {
                    let rest: SmallVec<Term, 4> = queue.into_iter().collect();
                    let mut alternatives: Vec<Term> = Vec::with_capacity(inner.len());
                    for grandchild in inner {
                        let mut branch = children.clone();
                        branch.push(grandchild);
                        branch.extend(rest.iter().cloned());
                        alternatives.push(Self::fold(TermKind::Interaction, branch));
                    }
                    return Self::fold(TermKind::Sum, alternatives);
                }
                (_, child) => children.push(child),
            }
        }
        match head {
            TermKind::Sum => Term::Sum(children),
            TermKind::Interaction => Term::Interaction(children),
            _ => unreachable!("fold only builds sums and interactions"),
        }
    }

    /// Expand an n-ary crossing left-associatively: `x * y = x + y + x & y`.
    fn cross(children: Vec<Term>) -> Result<Term> {
        let mut operands = children.into_iter();
        let Some(first) = operands.next() else {
            return Err(TermError::Malformed { op: Operator::Star });
        };
        let mut acc = first;
        for next in operands {
            let pair = Self::fold(TermKind::Interaction, vec![acc.clone(), next.clone()]);
            acc = Self::fold(TermKind::Sum, vec![acc, next, pair]);
        }
        Ok(acc)
    }

    /// `x - 1` collapses to `x + (-1)`; any other subtraction is rejected.
    fn subtract(children: Vec<Term>) -> Result<Term> {
        let [minuend, subtrahend]: [Term; 2] = children
            .try_into()
            .map_err(|rest: Vec<Term>| TermError::BadSubtractionArity { count: rest.len() })?;
        if subtrahend != Term::Intercept(Intercept::Positive) {
            return Err(TermError::BadSubtraction {
                found: subtrahend.to_string(),
            });
        }
        Ok(Self::fold(
            TermKind::Sum,
            vec![minuend, Term::Intercept(Intercept::Negative)],
        ))
    }

    /// Interaction order: 0 for intercepts, k for a k-way interaction, 1
    /// otherwise.
    pub fn degree(&self) -> usize {
        match self {
            Term::Intercept(_) => 0,
            Term::Interaction(children) => children.len(),
            _ => 1,
        }
    }

    /// Stable-sort the children of a sum by non-decreasing degree, putting
    /// intercepts first. Any other term is returned unchanged.
    pub fn sorted(self) -> Term {
        match self {
            Term::Sum(mut children) => {
                children.sort_by_key(Term::degree);
                Term::Sum(children)
            }
            other => other,
        }
    }

    /// The direct children of a sum; any other term is its own sole summand.
    pub fn summands(self) -> Vec<Term> {
        match self {
            Term::Sum(children) => children,
            other => vec![other],
        }
    }

    /// Order-preserving, de-duplicated list of the data columns this term
    /// evaluates. Groupings and intercepts contribute nothing.
    pub fn eval_vars(&self) -> Vec<Name> {
        let mut out = Vec::new();
        self.collect_eval_vars(&mut out);
        out
    }

    fn collect_eval_vars(&self, out: &mut Vec<Name>) {
        match self {
            Term::Eval(name) => {
                if !out.contains(name) {
                    out.push(name.clone());
                }
            }
            Term::Sum(children) | Term::Interaction(children) => {
                for child in children {
                    child.collect_eval_vars(out);
                }
            }
            Term::Grouping(_) | Term::Intercept(_) => {}
        }
    }

    /// Rebuild the source-level expression this term denotes.
    pub fn to_expr(&self) -> Expr {
        match self {
            Term::Eval(name) => Expr::Symbol(name.clone()),
            Term::Intercept(intercept) => Expr::Integer(intercept.value()),
            Term::Sum(children) => Expr::call(
                Operator::Plus,
                children.iter().map(Term::to_expr).collect(),
            ),
            Term::Interaction(children) => {
                Expr::call(Operator::And, children.iter().map(Term::to_expr).collect())
            }
            Term::Grouping(children) => {
                Expr::call(Operator::Bar, children.iter().map(Term::to_expr).collect())
            }
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_expr())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::{lit, sym};

    #[test]
    fn intercept_spellings_stay_distinguishable() {
        let zero = Term::from_expr(&lit(0)).unwrap();
        let negative = Term::from_expr(&lit(-1)).unwrap();
        assert_ne!(zero, negative);
        assert!(!Intercept::Zero.is_present());
        assert!(!Intercept::Negative.is_present());
        assert!(Intercept::Positive.is_present());
    }

    #[test]
    fn fold_never_nests_same_head() {
        let nested = Term::sum(vec![
            Term::sum(vec![Term::Eval("a".into()), Term::Eval("b".into())]),
            Term::Eval("c".into()),
        ]);
        assert_eq!(
            nested,
            Term::Sum(vec![
                Term::Eval("a".into()),
                Term::Eval("b".into()),
                Term::Eval("c".into()),
            ])
        );
    }

    #[test]
    fn display_round_trips_formula_syntax() {
        let term = Term::from_expr(&(sym("a") & sym("b"))).unwrap();
        assert_eq!(term.to_string(), "a & b");
    }
}
