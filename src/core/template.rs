//! URI template analysis
//!
//! Templates use the `{name}` placeholder syntax. A literal `?` marks the start
//! of the query component; placeholders after it are substituted with
//! query-escaped values, placeholders before it are substituted verbatim.
//!
//! Variable names are case-insensitive: `{id}` and `{ID}` in the same template
//! name one variable, reported with the casing of its first occurrence.

use crate::core::error::TemplateError;
use indexmap::IndexMap;
use regex::Regex;
use std::sync::OnceLock;

fn placeholder_regex() -> &'static Regex {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER.get_or_init(|| Regex::new(r"\{[^{}]+\}").unwrap())
}

/// A piece of a parsed template
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Text copied to the output unchanged
    Literal(String),

    /// A placeholder occurrence
    Variable {
        /// Index into [`UriTemplate::variables`]
        index: usize,
        /// Whether the occurrence sits after the first `?`
        in_query: bool,
    },
}

/// A variable declared by a template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    /// Name as first written in the template
    pub name: String,
    /// Lowercased name used for deduplication
    pub key: String,
}

/// A URI template split into literal and variable segments
///
/// Parsing is lenient: a brace that does not form a `{name}` placeholder is
/// kept as literal text. Use [`UriTemplate::validate`] to reject such
/// templates up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UriTemplate {
    href: String,
    query_start: Option<usize>,
    segments: Vec<Segment>,
    variables: Vec<Variable>,
}

impl UriTemplate {
    /// Parse a template string
    pub fn parse(href: impl Into<String>) -> Self {
        let href = href.into();
        let query_start = href.find('?');

        let mut segments = Vec::new();
        let mut index_by_key: IndexMap<String, String> = IndexMap::new();
        let mut last = 0;

        for m in placeholder_regex().find_iter(&href) {
            if m.start() > last {
                segments.push(Segment::Literal(href[last..m.start()].to_string()));
            }

            let name = &href[m.start() + 1..m.end() - 1];
            let key = name.to_lowercase();
            let index = match index_by_key.get_index_of(&key) {
                Some(index) => index,
                None => {
                    index_by_key.insert(key, name.to_string());
                    index_by_key.len() - 1
                }
            };

            segments.push(Segment::Variable {
                index,
                in_query: query_start.is_some_and(|q| m.start() > q),
            });
            last = m.end();
        }

        if last < href.len() {
            segments.push(Segment::Literal(href[last..].to_string()));
        }

        let variables = index_by_key
            .into_iter()
            .map(|(key, name)| Variable { name, key })
            .collect();

        Self {
            href,
            query_start,
            segments,
            variables,
        }
    }

    /// Check placeholder syntax: balanced, not nested, not empty
    pub fn validate(href: &str) -> Result<(), TemplateError> {
        let mut open: Option<usize> = None;

        for (position, c) in href.char_indices() {
            match (c, open) {
                ('{', None) => open = Some(position),
                ('{', Some(_)) => {
                    return Err(TemplateError::NestedBrace {
                        href: href.to_string(),
                        position,
                    });
                }
                ('}', None) => {
                    return Err(TemplateError::UnbalancedBrace {
                        href: href.to_string(),
                        position,
                    });
                }
                ('}', Some(start)) => {
                    if position == start + 1 {
                        return Err(TemplateError::EmptyPlaceholder {
                            href: href.to_string(),
                            position: start,
                        });
                    }
                    open = None;
                }
                _ => {}
            }
        }

        match open {
            Some(position) => Err(TemplateError::UnbalancedBrace {
                href: href.to_string(),
                position,
            }),
            None => Ok(()),
        }
    }

    /// The original template string
    pub fn as_str(&self) -> &str {
        &self.href
    }

    /// Byte offset of the first `?`, if any
    pub fn query_start(&self) -> Option<usize> {
        self.query_start
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Distinct variables in order of first occurrence
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn variable_names(&self) -> impl Iterator<Item = &str> {
        self.variables.iter().map(|v| v.name.as_str())
    }

    /// True when the template contains no placeholders
    pub fn is_literal(&self) -> bool {
        self.variables.is_empty()
    }
}

/// Extract the distinct variable names of a template
///
/// Names are deduplicated ignoring case; each keeps the casing of its first
/// occurrence.
pub fn extract_variable_names(href: &str) -> Vec<String> {
    UriTemplate::parse(href)
        .variables
        .into_iter()
        .map(|v| v.name)
        .collect()
}
