//! # scim-filter
//!
//! Expression model and canonical renderer for SCIM resource paths and
//! filter expressions.
//!
//! This crate provides:
//! - **Expression Model**: typed nodes for paths, attribute references,
//!   value-filtered paths, comparisons and logical expressions
//! - **Canonical Renderer**: a deterministic `Display` for every node
//!
//! Trees are produced by a filter parser and consumed by evaluators; neither
//! lives here.
//!
//! ## Usage
//!
//! ```rust
//! use scim_filter::{AttributePath, Expression, Path, Token};
//!
//! // emails[type eq "work"].value
//! let path = Path::new("emails")
//!     .with_value_expression(Expression::attribute(
//!         AttributePath::new("type"),
//!         Token::Eq,
//!         "\"work\"",
//!     ))
//!     .with_sub_attribute("value");
//!
//! assert_eq!(path.to_string(), "emails['type eq \"work\"'].value");
//!
//! // URN-qualified attribute names split on the final ':'
//! let manager: AttributePath =
//!     "urn:ietf:params:scim:schemas:extension:enterprise:2.0:User:manager".parse().unwrap();
//! assert_eq!(manager.attribute_name, "manager");
//! ```
//!
//! ## Operator Quick Reference
//!
//! | Token | Meaning | Example |
//! |-------|---------|---------|
//! | `eq` | Equal | `userName eq "bjensen"` |
//! | `ne` | Not equal | `title ne "Tour Guide"` |
//! | `co` | Contains | `name.familyName co "O'Malley"` |
//! | `sw` | Starts with | `userName sw "J"` |
//! | `ew` | Ends with | `emails.value ew "example.org"` |
//! | `gt` `ge` `lt` `le` | Ordering | `meta.lastModified gt "2011-05-13T04:42:34Z"` |
//! | `pr` | Present | `title pr` |
//! | `and` `or` | Conjunction, disjunction | `title pr and userType eq "Employee"` |
//! | `not` | Negation | `not (emails co "example.com")` |

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod ast;
mod error;
mod render;
mod token;
mod uri;

pub use ast::{
    AttributeExpression, AttributePath, BinaryExpression, Expression, Path, UnaryExpression,
    ValuePath,
};
pub use error::{FilterError, FilterResult};
pub use token::Token;
pub use uri::split_uri_prefix;
