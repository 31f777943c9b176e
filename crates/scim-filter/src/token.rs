//! Operator tokens of the SCIM filter grammar.

use std::str::FromStr;

use crate::error::{FilterError, FilterResult};

/// An operator token.
///
/// Comparison tokens appear in [`AttributeExpression`](crate::AttributeExpression),
/// logical tokens in [`UnaryExpression`](crate::UnaryExpression) and
/// [`BinaryExpression`](crate::BinaryExpression). The model does not check
/// that a token fits the node it is stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Token {
    /// Equal: `eq`
    Eq,
    /// Not equal: `ne`
    Ne,
    /// Contains: `co`
    Co,
    /// Starts with: `sw`
    Sw,
    /// Ends with: `ew`
    Ew,
    /// Greater than: `gt`
    Gt,
    /// Less than: `lt`
    Lt,
    /// Greater than or equal: `ge`
    Ge,
    /// Less than or equal: `le`
    Le,
    /// Present (has value): `pr`
    Pr,
    /// Logical conjunction: `and`
    And,
    /// Logical disjunction: `or`
    Or,
    /// Logical negation: `not`
    Not,
}

impl Token {
    /// Every token, comparison operators first.
    pub const ALL: [Token; 13] = [
        Token::Eq,
        Token::Ne,
        Token::Co,
        Token::Sw,
        Token::Ew,
        Token::Gt,
        Token::Lt,
        Token::Ge,
        Token::Le,
        Token::Pr,
        Token::And,
        Token::Or,
        Token::Not,
    ];

    /// Returns the canonical textual token.
    pub fn as_str(&self) -> &'static str {
        match self {
            Token::Eq => "eq",
            Token::Ne => "ne",
            Token::Co => "co",
            Token::Sw => "sw",
            Token::Ew => "ew",
            Token::Gt => "gt",
            Token::Lt => "lt",
            Token::Ge => "ge",
            Token::Le => "le",
            Token::Pr => "pr",
            Token::And => "and",
            Token::Or => "or",
            Token::Not => "not",
        }
    }

    /// Returns true for attribute comparison operators.
    pub fn is_comparison(&self) -> bool {
        !self.is_logical()
    }

    /// Returns true for `and`, `or` and `not`.
    pub fn is_logical(&self) -> bool {
        matches!(self, Token::And | Token::Or | Token::Not)
    }

    /// Returns true for the prefix operator `not`.
    pub fn is_unary(&self) -> bool {
        matches!(self, Token::Not)
    }

    /// Returns true if the operator takes no compare value.
    pub fn is_presence(&self) -> bool {
        matches!(self, Token::Pr)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Token {
    type Err = FilterError;

    /// Operators are matched case-insensitively: `EQ`, `Eq` and `eq` are the same token.
    fn from_str(s: &str) -> FilterResult<Self> {
        Token::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                tracing::debug!(token = s, "rejected operator token");
                FilterError::UnknownOperator {
                    token: s.to_string(),
                }
            })
    }
}
