//! Resolution of one link template against one model
//!
//! Every variable of the template must resolve to a non-null field value,
//! otherwise the whole link fails; no partially substituted href is produced.
//!
//! Values substituted before the first `?` are inserted verbatim: path
//! templates are trusted to produce URI-safe segments. Values substituted after
//! it are percent-encoded as query data.

use crate::core::error::ResolveError;
use crate::core::link::{Link, LinkTemplate};
use crate::core::model::Model;
use crate::core::template::Segment;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters escaped in query values: everything but RFC 3986 unreserved
const QUERY_DATA: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encode a value for use inside a query component
pub fn escape_query_value(value: &str) -> String {
    utf8_percent_encode(value, QUERY_DATA).to_string()
}

/// Resolve a template against a model
///
/// Returns the resolved link, or the first variable that could not be
/// resolved. A template without variables always resolves to its href.
pub fn resolve<M: Model + ?Sized>(
    template: &LinkTemplate,
    model: &M,
) -> Result<Link, ResolveError> {
    let uri = template.uri_template();

    if uri.is_literal() {
        return Ok(template.to_link(uri.as_str().to_string()));
    }

    let values = uri
        .variables()
        .iter()
        .map(|variable| lookup(model, &variable.name))
        .collect::<Result<Vec<String>, ResolveError>>()
        .inspect_err(|err| {
            tracing::debug!(
                rel = %template.rel(),
                href = %template.href(),
                field = %err.field(),
                reason = err.error_code(),
                "Link template not resolvable for model"
            );
        })?;

    let mut href = String::with_capacity(uri.as_str().len());
    for segment in uri.segments() {
        match segment {
            Segment::Literal(text) => href.push_str(text),
            Segment::Variable { index, in_query } => {
                let value = &values[*index];
                if *in_query {
                    href.push_str(&escape_query_value(value));
                } else {
                    href.push_str(value);
                }
            }
        }
    }

    Ok(template.to_link(href))
}

fn lookup<M: Model + ?Sized>(model: &M, field: &str) -> Result<String, ResolveError> {
    match model.resolve_field(field) {
        None => Err(ResolveError::MissingField {
            field: field.to_string(),
        }),
        Some(value) => value
            .to_canonical_string()
            .ok_or_else(|| ResolveError::NullField {
                field: field.to_string(),
            }),
    }
}
