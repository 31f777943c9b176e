//! URI prefix handling and attribute path reading.
//!
//! SCIM attribute names may be qualified by a schema URN such as
//! `urn:ietf:params:scim:schemas:extension:enterprise:2.0:User`. The prefix
//! is everything before the final `:`; the final segment is the bare name.

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while},
    character::complete::{char, satisfy},
    combinator::{all_consuming, opt, recognize},
    sequence::{pair, preceded},
    IResult,
};

use crate::ast::AttributePath;
use crate::error::{FilterError, FilterResult};

/// Splits a raw attribute name into its URI prefix and bare name.
///
/// With no `:` the whole input is the name. Otherwise the name is the final
/// segment and the prefix is everything before it, so multi-colon URNs stay
/// intact. An empty prefix is treated as absent.
///
/// ```rust
/// use scim_filter::split_uri_prefix;
///
/// assert_eq!(split_uri_prefix("userName"), (None, "userName"));
/// assert_eq!(
///     split_uri_prefix("urn:ietf:params:scim:schemas:extension:enterprise:2.0:User:manager"),
///     (Some("urn:ietf:params:scim:schemas:extension:enterprise:2.0:User"), "manager"),
/// );
/// ```
pub fn split_uri_prefix(raw: &str) -> (Option<&str>, &str) {
    match raw.rsplit_once(':') {
        Some((prefix, name)) if !prefix.is_empty() => (Some(prefix), name),
        Some((_, name)) => (None, name),
        None => (None, raw),
    }
}

/// Reads `[prefix:]name[.subAttr]` into an [`AttributePath`].
///
/// Surrounding whitespace is ignored. Error positions are byte offsets into
/// the untrimmed input.
pub(crate) fn read_attribute_path(raw: &str) -> FilterResult<AttributePath> {
    let leading = raw.len() - raw.trim_start().len();
    let input = raw.trim();
    let (uri_prefix, segment) = split_uri_prefix(input);
    if segment.is_empty() {
        tracing::debug!(input, "attribute path without a name");
        return Err(FilterError::EmptyAttributeName);
    }
    let offset = leading + input.len() - segment.len();

    match all_consuming(name_and_sub_attribute)(segment) {
        Ok((_, (name, sub_attribute))) => {
            if let Some(prefix) = uri_prefix {
                tracing::trace!(prefix, name, "read qualified attribute path");
            }
            Ok(AttributePath {
                uri_prefix: uri_prefix.map(str::to_string),
                attribute_name: name.to_string(),
                sub_attribute: sub_attribute.map(str::to_string),
            })
        }
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
            let position = offset + segment.len() - e.input.len();
            tracing::debug!(input, position, "rejected attribute path");
            Err(FilterError::InvalidAttributePath {
                position,
                message: format!("unexpected input at: '{}'", e.input),
            })
        }
        Err(nom::Err::Incomplete(_)) => Err(FilterError::InvalidAttributePath {
            position: leading + input.len(),
            message: "incomplete attribute path".to_string(),
        }),
    }
}

// ============================================================================
// Attribute name grammar: ALPHA *(ALPHA / DIGIT / "-" / "_" / "$"), plus the
// reserved reference attribute `$ref`
// ============================================================================

fn name_and_sub_attribute(input: &str) -> IResult<&str, (&str, Option<&str>)> {
    pair(attr_name, opt(preceded(char('.'), attr_name)))(input)
}

fn attr_name(input: &str) -> IResult<&str, &str> {
    alt((
        tag("$ref"),
        recognize(pair(
            satisfy(|c| c.is_ascii_alphabetic()),
            take_while(is_name_char),
        )),
    ))(input)
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '$'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_without_prefix() {
        assert_eq!(split_uri_prefix("userName"), (None, "userName"));
    }

    #[test]
    fn test_split_single_colon() {
        assert_eq!(split_uri_prefix("ext:employeeNumber"), (Some("ext"), "employeeNumber"));
    }

    #[test]
    fn test_split_multi_colon_urn() {
        let (prefix, name) =
            split_uri_prefix("urn:ietf:params:scim:schemas:extension:enterprise:2.0:User:manager");
        assert_eq!(
            prefix,
            Some("urn:ietf:params:scim:schemas:extension:enterprise:2.0:User")
        );
        assert_eq!(name, "manager");
    }

    #[test]
    fn test_split_leading_colon() {
        assert_eq!(split_uri_prefix(":name"), (None, "name"));
    }

    #[test]
    fn test_read_simple() {
        let path = read_attribute_path("userName").unwrap();
        assert_eq!(path.uri_prefix, None);
        assert_eq!(path.attribute_name, "userName");
        assert_eq!(path.sub_attribute, None);
    }

    #[test]
    fn test_read_sub_attribute() {
        let path = read_attribute_path("name.familyName").unwrap();
        assert_eq!(path.attribute_name, "name");
        assert_eq!(path.sub_attribute.as_deref(), Some("familyName"));
    }

    #[test]
    fn test_read_urn_with_dotted_version() {
        let path = read_attribute_path(
            "urn:ietf:params:scim:schemas:extension:enterprise:2.0:User:manager.displayName",
        )
        .unwrap();
        assert_eq!(
            path.uri_prefix.as_deref(),
            Some("urn:ietf:params:scim:schemas:extension:enterprise:2.0:User")
        );
        assert_eq!(path.attribute_name, "manager");
        assert_eq!(path.sub_attribute.as_deref(), Some("displayName"));
    }

    #[test]
    fn test_read_name_chars() {
        let err = read_attribute_path("$other").unwrap_err();
        assert!(matches!(err, FilterError::InvalidAttributePath { position: 0, .. }));

        let path = read_attribute_path("x-custom_attr$1").unwrap();
        assert_eq!(path.attribute_name, "x-custom_attr$1");
    }

    #[test]
    fn test_read_reference_attribute() {
        let path = read_attribute_path("$ref").unwrap();
        assert_eq!(path.attribute_name, "$ref");

        let path = read_attribute_path("members.$ref").unwrap();
        assert_eq!(path.attribute_name, "members");
        assert_eq!(path.sub_attribute.as_deref(), Some("$ref"));

        assert!(read_attribute_path("$refs").is_err());
    }

    #[test]
    fn test_read_empty() {
        assert_eq!(read_attribute_path(""), Err(FilterError::EmptyAttributeName));
        assert_eq!(read_attribute_path("urn:"), Err(FilterError::EmptyAttributeName));
    }

    #[test]
    fn test_read_error_position() {
        let err = read_attribute_path("ext:name.sub.deeper").unwrap_err();
        match err {
            FilterError::InvalidAttributePath { position, .. } => assert_eq!(position, 12),
            other => panic!("Expected InvalidAttributePath, got {:?}", other),
        }
    }

    #[test]
    fn test_read_error_position_counts_leading_whitespace() {
        let err = read_attribute_path("  ext:name.sub.deeper").unwrap_err();
        match err {
            FilterError::InvalidAttributePath { position, .. } => assert_eq!(position, 14),
            other => panic!("Expected InvalidAttributePath, got {:?}", other),
        }

        let err = read_attribute_path("\t1abc ").unwrap_err();
        assert!(matches!(err, FilterError::InvalidAttributePath { position: 1, .. }));
    }

    #[test]
    fn test_read_ignores_surrounding_whitespace() {
        let path = read_attribute_path("  ext:employeeNumber \n").unwrap();
        assert_eq!(path.uri_prefix.as_deref(), Some("ext"));
        assert_eq!(path.attribute_name, "employeeNumber");
    }
}
