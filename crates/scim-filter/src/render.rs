//! Canonical rendering of paths and filter expressions.
//!
//! Each node maps to exactly one template and renders its children as opaque
//! text. Binary expressions are always parenthesized, so the output never
//! depends on operator precedence.
//!
//! | Node | Rendering |
//! |------|-----------|
//! | [`Path`] | `name`, `name[filter]`, `name.sub`, `name[filter].sub` |
//! | [`AttributePath`] | `name`, `name.sub` |
//! | [`ValuePath`] | `name[filter]` |
//! | [`AttributeExpression`] | `'path op value'` |
//! | [`UnaryExpression`] | `op X` |
//! | [`BinaryExpression`] | `(X op Y)` |
//!
//! Names are written as `prefix:name` when a URI prefix is set.

use std::fmt;

use crate::ast::{
    AttributeExpression, AttributePath, BinaryExpression, Expression, Path, UnaryExpression,
    ValuePath,
};

fn write_name(f: &mut fmt::Formatter<'_>, uri_prefix: Option<&str>, name: &str) -> fmt::Result {
    if let Some(prefix) = uri_prefix {
        write!(f, "{}:", prefix)?;
    }
    f.write_str(name)
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_name(f, self.uri_prefix.as_deref(), &self.attribute_name)?;
        if let Some(ref value_expression) = self.value_expression {
            write!(f, "[{}]", value_expression)?;
        }
        if let Some(ref sub_attribute) = self.sub_attribute {
            write!(f, ".{}", sub_attribute)?;
        }
        Ok(())
    }
}

impl fmt::Display for AttributePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_name(f, self.uri_prefix.as_deref(), &self.attribute_name)?;
        if let Some(ref sub_attribute) = self.sub_attribute {
            write!(f, ".{}", sub_attribute)?;
        }
        Ok(())
    }
}

impl fmt::Display for ValuePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_name(f, self.uri_prefix.as_deref(), &self.attribute_name)?;
        write!(f, "[{}]", self.value_expression)
    }
}

impl fmt::Display for AttributeExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{} {} {}'",
            self.attribute_path, self.compare_operator, self.compare_value
        )
    }
}

impl fmt::Display for UnaryExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.compare_operator, self.x)
    }
}

impl fmt::Display for BinaryExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} {})", self.x, self.compare_operator, self.y)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Attribute(e) => fmt::Display::fmt(e, f),
            Expression::ValuePath(e) => fmt::Display::fmt(e, f),
            Expression::Unary(e) => fmt::Display::fmt(e, f),
            Expression::Binary(e) => fmt::Display::fmt(e, f),
        }
    }
}
