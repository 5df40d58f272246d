//! # This-RS Hypermedia
//!
//! Hypermedia link templates resolved against model instances, for building
//! the "links" section of resource representations.
//!
//! ## Features
//!
//! - **URI Templates**: `{variable}` placeholders filled from model fields
//! - **Case-Insensitive Fields**: `{UserId}` resolves against a `userid` field
//! - **Query Escaping**: values after `?` are percent-encoded, path values are not
//! - **Fail-Soft Links**: links a model cannot satisfy are simply left out
//! - **Canonical Links**: the first resolvable `rel="self"` link
//! - **Configuration-Based**: declare templates per model in YAML
//!
//! ## Quick Start
//!
//! ```rust
//! use hypermedia::prelude::*;
//!
//! #[derive(Clone)]
//! struct User {
//!     id: u32,
//!     name: String,
//! }
//!
//! impl_model!(User, "user", [id, name]);
//!
//! let builder = LinkBuilder::new(vec![
//!     LinkTemplate::canonical("/users/{id}"),
//!     LinkTemplate::new("search", "/users?name={name}").with_title("Namesakes"),
//!     LinkTemplate::new("manager", "/users/{manager_id}"),
//! ]);
//!
//! let user = User { id: 7, name: "a b".to_string() };
//!
//! let links = builder.links_for_model(&user);
//! assert_eq!(links.len(), 2);
//! assert_eq!(links[1].href, "/users?name=a%20b");
//!
//! let canonical = builder.canonical_for_model(&user).unwrap();
//! assert_eq!(canonical.href, "/users/7");
//! ```

pub mod config;
pub mod core;
pub mod links;
pub mod models;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Types ===
    pub use crate::core::{
        error::{ConfigError, ResolveError, TemplateError},
        field::FieldValue,
        link::{HandlerType, Link, LinkTemplate, SELF_REL},
        model::{FieldTable, Model, NoFields, StaticModel},
        template::{UriTemplate, extract_variable_names},
    };

    // === Macros ===
    pub use crate::impl_model;

    // === Links ===
    pub use crate::links::{EMPTY, LinkBuilder, LinkRegistry, LinksSection, resolve};

    // === Config ===
    pub use crate::config::{LinkConfig, LinksConfig, ModelLinksConfig};
}
