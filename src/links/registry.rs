//! Registry of link builders per model
//!
//! Maps model names to the builders holding their link templates, so the
//! representation layer can ask for a model's links without knowing where
//! the templates were declared.

use crate::core::link::{Link, LinkTemplate};
use crate::core::model::Model;
use crate::links::builder::{EMPTY, LinkBuilder, LinksSection};
use std::collections::HashMap;

/// Lookup of link builders by model name
///
/// Unknown models get the empty builder.
#[derive(Debug, Clone, Default)]
pub struct LinkRegistry {
    builders: HashMap<String, LinkBuilder>,
}

impl LinkRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the templates of a model, replacing any previous builder
    pub fn register(
        &mut self,
        model_name: impl Into<String>,
        templates: impl IntoIterator<Item = LinkTemplate>,
    ) -> &mut Self {
        let model_name = model_name.into();
        let builder = LinkBuilder::new(templates);
        tracing::debug!(
            model = %model_name,
            templates = builder.len(),
            "Registered link templates"
        );
        self.builders.insert(model_name, builder);
        self
    }

    /// The builder for a model name, or the empty builder
    pub fn builder_for(&self, model_name: &str) -> &LinkBuilder {
        self.builders.get(model_name).unwrap_or(&EMPTY)
    }

    pub fn contains(&self, model_name: &str) -> bool {
        self.builders.contains_key(model_name)
    }

    /// Registered model names, sorted
    pub fn model_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.builders.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Links of a model, dispatched on its model name
    pub fn links_for<M: Model + ?Sized>(&self, model: &M) -> Vec<Link> {
        self.builder_for(model.model_name()).links_for_model(model)
    }

    /// Canonical link of a model, dispatched on its model name
    pub fn canonical_for<M: Model + ?Sized>(&self, model: &M) -> Option<Link> {
        self.builder_for(model.model_name()).canonical_for_model(model)
    }

    pub fn describe<M: Model + ?Sized>(&self, model: &M) -> LinksSection {
        self.builder_for(model.model_name()).describe(model)
    }
}
