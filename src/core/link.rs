//! Link templates and resolved links

use crate::core::template::UriTemplate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The relation name of a resource's canonical link
pub const SELF_REL: &str = "self";

/// Identity of the handler that serves a link's target
///
/// Opaque to link resolution: copied from template to resolved link as is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HandlerType(String);

impl HandlerType {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Identify a handler by its Rust type
    pub fn of<T: ?Sized>() -> Self {
        Self(std::any::type_name::<T>().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HandlerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A declared link whose href may still contain `{variable}` placeholders
///
/// Templates are created at start-up and never change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkTemplate {
    handler_type: HandlerType,
    href: UriTemplate,
    rel: String,
    media_type: Option<String>,
    title: Option<String>,
}

impl LinkTemplate {
    /// Create a template with a relation name and href
    pub fn new(rel: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            handler_type: HandlerType::default(),
            href: UriTemplate::parse(href),
            rel: rel.into(),
            media_type: None,
            title: None,
        }
    }

    /// Shorthand for a `rel="self"` template
    pub fn canonical(href: impl Into<String>) -> Self {
        Self::new(SELF_REL, href)
    }

    pub fn with_handler(mut self, handler_type: HandlerType) -> Self {
        self.handler_type = handler_type;
        self
    }

    pub fn with_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = Some(media_type.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn handler_type(&self) -> &HandlerType {
        &self.handler_type
    }

    /// The unresolved href
    pub fn href(&self) -> &str {
        self.href.as_str()
    }

    pub fn uri_template(&self) -> &UriTemplate {
        &self.href
    }

    pub fn rel(&self) -> &str {
        &self.rel
    }

    pub fn media_type(&self) -> Option<&str> {
        self.media_type.as_deref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// True for candidate canonical links
    pub fn is_canonical(&self) -> bool {
        self.rel == SELF_REL
    }

    /// Build the resolved link for a fully substituted href
    pub(crate) fn to_link(&self, href: String) -> Link {
        Link {
            handler_type: self.handler_type.clone(),
            href,
            rel: self.rel.clone(),
            media_type: self.media_type.clone(),
            title: self.title.clone(),
        }
    }
}

/// A link template resolved against one model
///
/// Serializes as `{ "href", "rel", "type"?, "title"? }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Handler serving the link target; not part of the representation
    #[serde(skip)]
    pub handler_type: HandlerType,

    /// Concrete URI
    pub href: String,

    /// Relation name (e.g., "self", "orders")
    pub rel: String,

    /// Media type hint
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,

    /// Human-readable label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Link {
    pub fn is_canonical(&self) -> bool {
        self.rel == SELF_REL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct GetUser;

    #[test]
    fn test_template_builder() {
        let template = LinkTemplate::new("orders", "/users/{id}/orders")
            .with_handler(HandlerType::new("orders::List"))
            .with_type("application/json")
            .with_title("Orders");

        assert_eq!(template.rel(), "orders");
        assert_eq!(template.href(), "/users/{id}/orders");
        assert_eq!(template.handler_type().as_str(), "orders::List");
        assert_eq!(template.media_type(), Some("application/json"));
        assert_eq!(template.title(), Some("Orders"));
        assert!(!template.is_canonical());
    }

    #[test]
    fn test_canonical_template() {
        let template = LinkTemplate::canonical("/users/{id}");
        assert_eq!(template.rel(), "self");
        assert!(template.is_canonical());
    }

    #[test]
    fn test_handler_type_of() {
        let handler = HandlerType::of::<GetUser>();
        assert!(handler.as_str().ends_with("GetUser"));
    }

    #[test]
    fn test_to_link_copies_metadata() {
        let template = LinkTemplate::new("orders", "/users/{id}/orders")
            .with_handler(HandlerType::new("orders::List"))
            .with_title("Orders");

        let link = template.to_link("/users/1/orders".to_string());
        assert_eq!(link.href, "/users/1/orders");
        assert_eq!(link.rel, "orders");
        assert_eq!(link.handler_type, HandlerType::new("orders::List"));
        assert_eq!(link.title.as_deref(), Some("Orders"));
        assert_eq!(link.media_type, None);
    }

    #[test]
    fn test_link_serialization() {
        let link = LinkTemplate::canonical("/users/1")
            .with_handler(HandlerType::new("users::Get"))
            .with_type("application/json")
            .to_link("/users/1".to_string());

        let json = serde_json::to_value(&link).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "href": "/users/1",
                "rel": "self",
                "type": "application/json"
            })
        );
    }
}
