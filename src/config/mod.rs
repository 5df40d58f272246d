//! Configuration loading and management

use crate::core::error::ConfigError;
use crate::core::link::{HandlerType, LinkTemplate};
use crate::core::template::UriTemplate;
use crate::links::LinkRegistry;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Declaration of one link template
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LinkConfig {
    /// Relation name (e.g., "self", "orders")
    pub rel: String,

    /// URI template (e.g., "/users/{id}/orders?page={page}")
    pub href: String,

    /// Media type hint
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,

    /// Human-readable label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Identity of the handler serving the target
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handler: Option<String>,
}

impl LinkConfig {
    /// Build the runtime template
    pub fn to_template(&self) -> LinkTemplate {
        let mut template = LinkTemplate::new(self.rel.clone(), self.href.clone());
        if let Some(handler) = &self.handler {
            template = template.with_handler(HandlerType::new(handler.clone()));
        }
        if let Some(media_type) = &self.media_type {
            template = template.with_type(media_type.clone());
        }
        if let Some(title) = &self.title {
            template = template.with_title(title.clone());
        }
        template
    }
}

/// Link templates declared for one model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModelLinksConfig {
    /// Model name (e.g., "user")
    pub name: String,

    /// Templates in declaration order
    #[serde(default)]
    pub links: Vec<LinkConfig>,
}

/// Complete configuration for the links system
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LinksConfig {
    /// Link declarations per model
    #[serde(default)]
    pub models: Vec<ModelLinksConfig>,
}

impl LinksConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(ConfigError::from)
            .with_context(|| format!("reading links config {}", path.display()))?;
        Self::from_yaml_str(&content)
            .with_context(|| format!("loading links config {}", path.display()))
    }

    /// Load configuration from a YAML string
    ///
    /// The configuration is validated before it is returned.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml).map_err(ConfigError::from)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject malformed templates and empty relation names
    pub fn validate(&self) -> Result<(), ConfigError> {
        for model in &self.models {
            if model.name.trim().is_empty() {
                return Err(ConfigError::MissingModelName);
            }

            for link in &model.links {
                if link.rel.trim().is_empty() {
                    return Err(ConfigError::MissingRel {
                        model: model.name.clone(),
                        href: link.href.clone(),
                    });
                }

                UriTemplate::validate(&link.href).map_err(|source| ConfigError::Template {
                    model: model.name.clone(),
                    source,
                })?;
            }
        }
        Ok(())
    }

    /// Merge several configurations
    ///
    /// Models are kept in first-seen order. Links declared for the same model
    /// in later configurations are appended after the earlier ones.
    pub fn merge(configs: Vec<LinksConfig>) -> Self {
        let mut merged: Vec<ModelLinksConfig> = Vec::new();

        for model in configs.into_iter().flat_map(|config| config.models) {
            match merged.iter_mut().find(|m| m.name == model.name) {
                Some(existing) => existing.links.extend(model.links),
                None => merged.push(model),
            }
        }

        Self { models: merged }
    }

    /// Templates declared for a model, in declaration order
    pub fn templates_for(&self, model_name: &str) -> Vec<LinkTemplate> {
        self.models
            .iter()
            .filter(|m| m.name == model_name)
            .flat_map(|m| m.links.iter().map(LinkConfig::to_template))
            .collect()
    }

    /// Build a registry with one builder per declared model
    pub fn to_registry(&self) -> LinkRegistry {
        let mut registry = LinkRegistry::new();
        for name in self.model_names() {
            registry.register(name, self.templates_for(name));
        }
        registry
    }

    fn model_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for model in &self.models {
            if !names.contains(&model.name.as_str()) {
                names.push(&model.name);
            }
        }
        names
    }

    /// Create a default configuration for testing
    pub fn default_config() -> Self {
        Self {
            models: vec![
                ModelLinksConfig {
                    name: "user".to_string(),
                    links: vec![
                        LinkConfig {
                            rel: "self".to_string(),
                            href: "/users/{id}".to_string(),
                            media_type: Some("application/json".to_string()),
                            title: Some("User".to_string()),
                            handler: Some("users::Get".to_string()),
                        },
                        LinkConfig {
                            rel: "cars".to_string(),
                            href: "/users/{id}/cars".to_string(),
                            media_type: Some("application/json".to_string()),
                            title: Some("Cars owned".to_string()),
                            handler: Some("cars::ListByOwner".to_string()),
                        },
                    ],
                },
                ModelLinksConfig {
                    name: "car".to_string(),
                    links: vec![
                        LinkConfig {
                            rel: "self".to_string(),
                            href: "/cars/{id}".to_string(),
                            media_type: Some("application/json".to_string()),
                            title: Some("Car".to_string()),
                            handler: Some("cars::Get".to_string()),
                        },
                        LinkConfig {
                            rel: "owner".to_string(),
                            href: "/users/{owner_id}".to_string(),
                            media_type: None,
                            title: Some("Owner".to_string()),
                            handler: Some("users::Get".to_string()),
                        },
                    ],
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LinksConfig::default_config();

        assert_eq!(config.models.len(), 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_yaml_serialization() {
        let config = LinksConfig::default_config();
        let yaml = serde_yaml::to_string(&config).unwrap();

        // Should be able to parse it back
        let parsed = LinksConfig::from_yaml_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_link_config_to_template() {
        let config = LinksConfig::default_config();
        let template = config.models[0].links[0].to_template();

        assert_eq!(template.rel(), "self");
        assert_eq!(template.href(), "/users/{id}");
        assert_eq!(template.media_type(), Some("application/json"));
        assert_eq!(template.title(), Some("User"));
        assert_eq!(template.handler_type().as_str(), "users::Get");
    }

    #[test]
    fn test_validate_rejects_malformed_href() {
        let yaml = r#"
models:
  - name: user
    links:
      - rel: self
        href: /users/{id
"#;
        let err = LinksConfig::from_yaml_str(yaml).unwrap_err();
        let config_err = err.downcast_ref::<ConfigError>().unwrap();
        assert_eq!(config_err.error_code(), "INVALID_TEMPLATE");
    }

    #[test]
    fn test_validate_rejects_empty_rel() {
        let yaml = r#"
models:
  - name: user
    links:
      - rel: ""
        href: /users/{id}
"#;
        let err = LinksConfig::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::MissingRel { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_empty_model_name() {
        let yaml = r#"
models:
  - name: ""
    links:
      - rel: self
        href: /users/{id}
"#;
        let err = LinksConfig::from_yaml_str(yaml).unwrap_err();
        let config_err = err.downcast_ref::<ConfigError>().unwrap();
        assert_eq!(config_err.error_code(), "MISSING_MODEL_NAME");
    }

    #[test]
    fn test_validate_rejects_blank_model_name() {
        let config = LinksConfig {
            models: vec![ModelLinksConfig {
                name: "  ".to_string(),
                links: Vec::new(),
            }],
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::MissingModelName));
        assert_eq!(err.error_code(), "MISSING_MODEL_NAME");
    }

    #[test]
    fn test_templates_for_unknown_model() {
        let config = LinksConfig::default_config();
        assert!(config.templates_for("boat").is_empty());
    }
}
