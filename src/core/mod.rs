//! Core module containing the fundamental types of link resolution

pub mod error;
pub mod field;
pub mod link;
pub mod model;
pub mod template;

pub use error::{ConfigError, ResolveError, TemplateError};
pub use field::FieldValue;
pub use link::{HandlerType, Link, LinkTemplate, SELF_REL};
pub use model::{FieldAccessor, FieldTable, Model, NoFields, StaticModel};
pub use template::{Segment, UriTemplate, Variable, extract_variable_names};
