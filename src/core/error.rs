//! Typed errors for link resolution and configuration
//!
//! # Error Categories
//!
//! - [`ResolveError`]: a single template could not be resolved against a model.
//!   This is an expected outcome; builders filter it out silently.
//! - [`TemplateError`]: a URI template is malformed.
//! - [`ConfigError`]: a links configuration could not be loaded or is invalid.

use thiserror::Error;

/// Why one link template could not be resolved for a model
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The model exposes no field with this name, exactly or ignoring case
    #[error("model has no field matching '{field}'")]
    MissingField { field: String },

    /// The field exists but holds no value
    #[error("field '{field}' has no value")]
    NullField { field: String },
}

impl ResolveError {
    /// The template variable that failed to resolve
    pub fn field(&self) -> &str {
        match self {
            ResolveError::MissingField { field } | ResolveError::NullField { field } => field,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ResolveError::MissingField { .. } => "FIELD_MISSING",
            ResolveError::NullField { .. } => "FIELD_NULL",
        }
    }
}

/// Malformed placeholder syntax in a URI template
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// A `{` without a closing `}`, or a `}` without an opening `{`
    #[error("unbalanced brace at byte {position} in template '{href}'")]
    UnbalancedBrace { href: String, position: usize },

    /// A `{` inside an open placeholder
    #[error("nested placeholder at byte {position} in template '{href}'")]
    NestedBrace { href: String, position: usize },

    /// `{}` with no variable name
    #[error("empty placeholder at byte {position} in template '{href}'")]
    EmptyPlaceholder { href: String, position: usize },
}

/// Errors related to links configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A link declares an invalid href template
    #[error("invalid link template for model '{model}': {source}")]
    Template {
        model: String,
        #[source]
        source: TemplateError,
    },

    /// A link declares an empty relation name
    #[error("link '{href}' of model '{model}' has an empty rel")]
    MissingRel { model: String, href: String },

    /// A model is declared without a name
    #[error("model declaration is missing a name")]
    MissingModelName,

    /// Failed to parse configuration
    #[error("failed to parse links config: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// IO error while reading configuration
    #[error("failed to read links config: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::Template { .. } => "INVALID_TEMPLATE",
            ConfigError::MissingRel { .. } => "MISSING_REL",
            ConfigError::MissingModelName => "MISSING_MODEL_NAME",
            ConfigError::Parse(_) => "CONFIG_PARSE_ERROR",
            ConfigError::Io(_) => "CONFIG_IO_ERROR",
        }
    }
}
