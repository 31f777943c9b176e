//! Abstract Syntax Tree types for SCIM paths and filter expressions.
//!
//! Trees are built bottom-up by a filter parser and read thereafter. Every
//! node owns its children outright; nothing is shared between parents.

use std::str::FromStr;

use crate::error::{FilterError, FilterResult};
use crate::token::Token;
use crate::uri;

// =============================================================================
// Paths
// =============================================================================

/// A target location within a resource, as used by PATCH operations.
///
/// The value expression narrows a multi-valued `attribute_name` before
/// `sub_attribute` is resolved: `addresses[type eq "work"].city`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    /// Schema URN qualifying the attribute name.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub uri_prefix: Option<String>,
    /// The attribute name.
    pub attribute_name: String,
    /// Child attribute of `attribute_name`.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub sub_attribute: Option<String>,
    /// Filter selecting elements of a multi-valued attribute.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub value_expression: Option<Box<Expression>>,
}

/// A bare attribute reference, the left-hand side of a comparison.
///
/// Example: `name.familyName`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributePath {
    /// Schema URN qualifying the attribute name.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub uri_prefix: Option<String>,
    /// The attribute name.
    pub attribute_name: String,
    /// Child attribute of `attribute_name`.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub sub_attribute: Option<String>,
}

/// A multi-valued attribute narrowed by an embedded filter.
///
/// Example: `emails[type eq "work"]`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValuePath {
    /// Schema URN qualifying the attribute name.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub uri_prefix: Option<String>,
    /// The multi-valued attribute name.
    pub attribute_name: String,
    /// Filter evaluated against each element of the attribute.
    pub value_expression: Box<Expression>,
}

// =============================================================================
// Expressions
// =============================================================================

/// A leaf comparison: `userName eq "bjensen"`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeExpression {
    /// The compared attribute.
    pub attribute_path: AttributePath,
    /// Comparison operator.
    pub compare_operator: Token,
    /// Literal text as written in the filter, including any JSON quotes.
    /// Empty for `pr`.
    pub compare_value: String,
}

/// A prefix operator applied to one child: `not X`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnaryExpression {
    /// The prefix operator, normally [`Token::Not`].
    pub compare_operator: Token,
    /// The operand.
    pub x: Box<Expression>,
}

/// An infix operator joining two children, left to right: `X and Y`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BinaryExpression {
    /// Left operand.
    pub x: Box<Expression>,
    /// The infix operator, normally [`Token::And`] or [`Token::Or`].
    pub compare_operator: Token,
    /// Right operand.
    pub y: Box<Expression>,
}

/// Any node that can stand where a filter or value filter is expected.
///
/// # Examples
///
/// ```rust
/// use scim_filter::{AttributePath, Expression, Token};
///
/// let expr = Expression::and(
///     Expression::attribute(AttributePath::new("userName"), Token::Eq, "\"bjensen\""),
///     Expression::attribute(AttributePath::new("active"), Token::Eq, "true"),
/// );
/// assert_eq!(expr.to_string(), "('userName eq \"bjensen\"' and 'active eq true')");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Expression {
    /// Leaf comparison.
    Attribute(AttributeExpression),
    /// Multi-valued attribute with a value filter.
    ValuePath(ValuePath),
    /// Prefix operator.
    Unary(UnaryExpression),
    /// Infix operator.
    Binary(BinaryExpression),
}

// =============================================================================
// Implementations
// =============================================================================

impl AttributePath {
    /// Creates a path to an unqualified attribute.
    ///
    /// The name is stored as given; use [`AttributePath::from_str`] to split
    /// and check a URN-qualified name.
    pub fn new(attribute_name: impl Into<String>) -> Self {
        Self {
            uri_prefix: None,
            attribute_name: attribute_name.into(),
            sub_attribute: None,
        }
    }

    /// Sets the URI prefix.
    pub fn with_uri_prefix(mut self, uri_prefix: impl Into<String>) -> Self {
        self.uri_prefix = Some(uri_prefix.into());
        self
    }

    /// Sets the sub-attribute.
    pub fn with_sub_attribute(mut self, sub_attribute: impl Into<String>) -> Self {
        self.sub_attribute = Some(sub_attribute.into());
        self
    }

    /// Returns `prefix:name`, or just the name when there is no prefix.
    pub fn qualified_name(&self) -> String {
        qualify(self.uri_prefix.as_deref(), &self.attribute_name)
    }
}

impl FromStr for AttributePath {
    type Err = FilterError;

    fn from_str(s: &str) -> FilterResult<Self> {
        uri::read_attribute_path(s)
    }
}

impl ValuePath {
    /// Creates a value path over an unqualified attribute.
    pub fn new(attribute_name: impl Into<String>, value_expression: Expression) -> Self {
        Self {
            uri_prefix: None,
            attribute_name: attribute_name.into(),
            value_expression: Box::new(value_expression),
        }
    }

    /// Creates a value path from a possibly URN-qualified attribute name,
    /// splitting it with [`split_uri_prefix`](crate::split_uri_prefix).
    ///
    /// ```rust
    /// use scim_filter::{AttributePath, Expression, Token, ValuePath};
    ///
    /// let filter = Expression::attribute(AttributePath::new("primary"), Token::Eq, "true");
    /// let vp = ValuePath::from_qualified_name("ext:emails", filter);
    /// assert_eq!(vp.uri_prefix.as_deref(), Some("ext"));
    /// assert_eq!(vp.attribute_name, "emails");
    /// ```
    pub fn from_qualified_name(raw: &str, value_expression: Expression) -> Self {
        let (uri_prefix, attribute_name) = uri::split_uri_prefix(raw);
        Self {
            uri_prefix: uri_prefix.map(str::to_string),
            attribute_name: attribute_name.to_string(),
            value_expression: Box::new(value_expression),
        }
    }

    /// Sets the URI prefix.
    pub fn with_uri_prefix(mut self, uri_prefix: impl Into<String>) -> Self {
        self.uri_prefix = Some(uri_prefix.into());
        self
    }

    /// Returns `prefix:name`, or just the name when there is no prefix.
    pub fn qualified_name(&self) -> String {
        qualify(self.uri_prefix.as_deref(), &self.attribute_name)
    }
}

impl Path {
    /// Creates a path to an unqualified attribute.
    pub fn new(attribute_name: impl Into<String>) -> Self {
        Self {
            uri_prefix: None,
            attribute_name: attribute_name.into(),
            sub_attribute: None,
            value_expression: None,
        }
    }

    /// Creates a path from a possibly URN-qualified attribute name, splitting
    /// it with [`split_uri_prefix`](crate::split_uri_prefix).
    ///
    /// The name is not checked against the attribute name grammar and no
    /// sub-attribute is split off; set one with [`Path::with_sub_attribute`].
    pub fn from_qualified_name(raw: &str) -> Self {
        let (uri_prefix, attribute_name) = uri::split_uri_prefix(raw);
        Self {
            uri_prefix: uri_prefix.map(str::to_string),
            attribute_name: attribute_name.to_string(),
            sub_attribute: None,
            value_expression: None,
        }
    }

    /// Sets the URI prefix.
    pub fn with_uri_prefix(mut self, uri_prefix: impl Into<String>) -> Self {
        self.uri_prefix = Some(uri_prefix.into());
        self
    }

    /// Sets the sub-attribute.
    pub fn with_sub_attribute(mut self, sub_attribute: impl Into<String>) -> Self {
        self.sub_attribute = Some(sub_attribute.into());
        self
    }

    /// Sets the value filter.
    pub fn with_value_expression(mut self, value_expression: Expression) -> Self {
        self.value_expression = Some(Box::new(value_expression));
        self
    }

    /// Returns `prefix:name`, or just the name when there is no prefix.
    pub fn qualified_name(&self) -> String {
        qualify(self.uri_prefix.as_deref(), &self.attribute_name)
    }

    /// Returns true if the path carries a value filter.
    pub fn has_value_expression(&self) -> bool {
        self.value_expression.is_some()
    }

    /// The addressed attribute without its value filter.
    pub fn attribute_path(&self) -> AttributePath {
        AttributePath {
            uri_prefix: self.uri_prefix.clone(),
            attribute_name: self.attribute_name.clone(),
            sub_attribute: self.sub_attribute.clone(),
        }
    }
}

impl From<AttributePath> for Path {
    fn from(path: AttributePath) -> Self {
        Self {
            uri_prefix: path.uri_prefix,
            attribute_name: path.attribute_name,
            sub_attribute: path.sub_attribute,
            value_expression: None,
        }
    }
}

impl From<ValuePath> for Path {
    fn from(path: ValuePath) -> Self {
        Self {
            uri_prefix: path.uri_prefix,
            attribute_name: path.attribute_name,
            sub_attribute: None,
            value_expression: Some(path.value_expression),
        }
    }
}

impl AttributeExpression {
    /// Creates a comparison with a raw literal compare value.
    pub fn new(
        attribute_path: AttributePath,
        compare_operator: Token,
        compare_value: impl Into<String>,
    ) -> Self {
        Self {
            attribute_path,
            compare_operator,
            compare_value: compare_value.into(),
        }
    }

    /// Creates a comparison against a string, JSON-encoding it as the literal.
    ///
    /// ```rust
    /// use scim_filter::{AttributeExpression, AttributePath, Token};
    ///
    /// let path = AttributePath::new("title");
    /// let expr = AttributeExpression::string_value(path, Token::Co, "say \"hi\"");
    /// assert_eq!(expr.compare_value, r#""say \"hi\"""#);
    /// ```
    pub fn string_value(
        attribute_path: AttributePath,
        compare_operator: Token,
        value: &str,
    ) -> Self {
        Self::new(
            attribute_path,
            compare_operator,
            serde_json::Value::from(value).to_string(),
        )
    }

    /// Creates a presence test: `title pr`.
    pub fn present(attribute_path: AttributePath) -> Self {
        Self::new(attribute_path, Token::Pr, String::new())
    }
}

impl UnaryExpression {
    /// Creates a prefix expression.
    pub fn new(compare_operator: Token, x: Expression) -> Self {
        Self {
            compare_operator,
            x: Box::new(x),
        }
    }
}

impl BinaryExpression {
    /// Creates an infix expression.
    pub fn new(x: Expression, compare_operator: Token, y: Expression) -> Self {
        Self {
            x: Box::new(x),
            compare_operator,
            y: Box::new(y),
        }
    }
}

impl Expression {
    /// Creates a leaf comparison expression.
    pub fn attribute(
        attribute_path: AttributePath,
        compare_operator: Token,
        compare_value: impl Into<String>,
    ) -> Self {
        Expression::Attribute(AttributeExpression::new(
            attribute_path,
            compare_operator,
            compare_value,
        ))
    }

    /// Creates a value path expression.
    pub fn value_path(attribute_name: impl Into<String>, value_expression: Expression) -> Self {
        Expression::ValuePath(ValuePath::new(attribute_name, value_expression))
    }

    /// Creates a `not` expression.
    pub fn not(x: Expression) -> Self {
        Expression::Unary(UnaryExpression::new(Token::Not, x))
    }

    /// Creates an `and` expression.
    pub fn and(x: Expression, y: Expression) -> Self {
        Expression::Binary(BinaryExpression::new(x, Token::And, y))
    }

    /// Creates an `or` expression.
    pub fn or(x: Expression, y: Expression) -> Self {
        Expression::Binary(BinaryExpression::new(x, Token::Or, y))
    }

    /// Returns true for unary and binary expressions.
    pub fn is_logical(&self) -> bool {
        matches!(self, Expression::Unary(_) | Expression::Binary(_))
    }

    /// Returns the comparison if this is a leaf expression.
    pub fn as_attribute_expression(&self) -> Option<&AttributeExpression> {
        match self {
            Expression::Attribute(e) => Some(e),
            _ => None,
        }
    }

    /// Number of nodes on the longest root-to-leaf chain, counting value
    /// filters as children of their value path.
    pub fn depth(&self) -> usize {
        match self {
            Expression::Attribute(_) => 1,
            Expression::ValuePath(vp) => 1 + vp.value_expression.depth(),
            Expression::Unary(u) => 1 + u.x.depth(),
            Expression::Binary(b) => 1 + b.x.depth().max(b.y.depth()),
        }
    }
}

impl From<AttributeExpression> for Expression {
    fn from(e: AttributeExpression) -> Self {
        Expression::Attribute(e)
    }
}

impl From<ValuePath> for Expression {
    fn from(e: ValuePath) -> Self {
        Expression::ValuePath(e)
    }
}

impl From<UnaryExpression> for Expression {
    fn from(e: UnaryExpression) -> Self {
        Expression::Unary(e)
    }
}

impl From<BinaryExpression> for Expression {
    fn from(e: BinaryExpression) -> Self {
        Expression::Binary(e)
    }
}

fn qualify(uri_prefix: Option<&str>, attribute_name: &str) -> String {
    match uri_prefix {
        Some(prefix) => format!("{}:{}", prefix, attribute_name),
        None => attribute_name.to_string(),
    }
}
