//! Expression-tree adapter.
//!
//! The host language's parser hands over a small expression tree: atomic
//! symbols, integer literals, and n-ary calls with an operator head. The term
//! algebra treats this tree as opaque read-only input; the only questions it
//! asks are "is this a call", "what is its operator", and "what are its
//! arguments".
//!
//! Builder sugar is provided through the standard arithmetic operator traits,
//! so `sym("a") + sym("b") * sym("c")` produces the corresponding call nodes
//! without going through a parser.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::{EnumDiscriminants, EnumIs};

/// The name of an evaluation variable, i.e. a data column.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Name(Box<str>);

impl Name {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Name {
    fn from(s: &str) -> Self {
        Name(s.into())
    }
}

impl From<String> for Name {
    fn from(s: String) -> Self {
        Name(s.into_boxed_str())
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The fixed operator vocabulary of model formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIs)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operator {
    /// Formula separator `~`.
    Tilde,
    /// Additive combination `+`.
    Plus,
    /// Interaction `&`.
    And,
    /// Full crossing `*`.
    Star,
    /// Intercept subtraction `-`.
    Minus,
    /// Random-effect grouping `|`.
    Bar,
}

impl Operator {
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Tilde => "~",
            Operator::Plus => "+",
            Operator::And => "&",
            Operator::Star => "*",
            Operator::Minus => "-",
            Operator::Bar => "|",
        }
    }

    /// Binding strength used only for display parenthesization.
    fn precedence(self) -> u8 {
        match self {
            Operator::Tilde => 0,
            Operator::Bar => 1,
            Operator::Plus | Operator::Minus => 2,
            Operator::Star => 3,
            Operator::And => 4,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A parsed formula expression, as received from the host parser.
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumIs, EnumDiscriminants)]
#[strum_discriminants(name(ExprKind), derive(EnumIs))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// An atomic symbol naming a data column.
    Symbol(Name),
    /// An integer literal. Only -1, 0 and 1 are meaningful in formulas.
    Integer(i64),
    /// An n-ary call with an operator head and an ordered argument list.
    Call { op: Operator, args: Vec<Expr> },
}

impl Expr {
    pub fn call(op: Operator, args: Vec<Expr>) -> Expr {
        Expr::Call { op, args }
    }

    /// Two-sided formula separator: `lhs ~ rhs`.
    pub fn tie(lhs: Expr, rhs: Expr) -> Expr {
        Expr::Call {
            op: Operator::Tilde,
            args: vec![lhs, rhs],
        }
    }

    /// One-sided formula: `~ rhs`.
    pub fn onesided(rhs: Expr) -> Expr {
        Expr::Call {
            op: Operator::Tilde,
            args: vec![rhs],
        }
    }

    /// The operator head, for call nodes.
    pub fn operator(&self) -> Option<Operator> {
        match self {
            Expr::Call { op, .. } => Some(*op),
            _ => None,
        }
    }

    /// The ordered argument list, for call nodes.
    pub fn args(&self) -> Option<&[Expr]> {
        match self {
            Expr::Call { args, .. } => Some(args),
            _ => None,
        }
    }
}

/// Shorthand for a symbol leaf.
pub fn sym(name: impl Into<Name>) -> Expr {
    Expr::Symbol(name.into())
}

/// Shorthand for an integer literal leaf.
pub fn lit(value: i64) -> Expr {
    Expr::Integer(value)
}

impl std::ops::Add for Expr {
    type Output = Expr;

    fn add(self, rhs: Expr) -> Expr {
        Expr::call(Operator::Plus, vec![self, rhs])
    }
}

impl std::ops::Sub for Expr {
    type Output = Expr;

    fn sub(self, rhs: Expr) -> Expr {
        Expr::call(Operator::Minus, vec![self, rhs])
    }
}

impl std::ops::Mul for Expr {
    type Output = Expr;

    fn mul(self, rhs: Expr) -> Expr {
        Expr::call(Operator::Star, vec![self, rhs])
    }
}

impl std::ops::BitAnd for Expr {
    type Output = Expr;

    fn bitand(self, rhs: Expr) -> Expr {
        Expr::call(Operator::And, vec![self, rhs])
    }
}

impl std::ops::BitOr for Expr {
    type Output = Expr;

    fn bitor(self, rhs: Expr) -> Expr {
        Expr::call(Operator::Bar, vec![self, rhs])
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Symbol(name) => write!(f, "{name}"),
            Expr::Integer(value) => write!(f, "{value}"),
            Expr::Call { op, args } => {
                if args.len() == 1 {
                    write!(f, "{} ", op.symbol())?;
                }
                let mut first = true;
                for arg in args {
                    if !first {
                        write!(f, " {} ", op.symbol())?;
                    }
                    first = false;
                    let parens = arg
                        .operator()
                        .is_some_and(|inner| inner.precedence() < op.precedence());
                    if parens {
                        write!(f, "({arg})")?;
                    } else {
                        write!(f, "{arg}")?;
                    }
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_parenthesizes_by_precedence() {
        let e = sym("a") & (sym("b") + sym("c"));
        assert_eq!(e.to_string(), "a & (b + c)");

        let e = sym("a") + (sym("b") & sym("c"));
        assert_eq!(e.to_string(), "a + b & c");
    }

    #[test]
    fn display_formula_separator() {
        let e = Expr::tie(sym("y"), sym("x") - lit(1));
        assert_eq!(e.to_string(), "y ~ x - 1");

        let e = Expr::onesided(sym("x"));
        assert_eq!(e.to_string(), "~ x");
    }
}
