//! Link builder: resolves a fixed set of templates for any model

use crate::core::link::{Link, LinkTemplate};
use crate::core::model::Model;
use crate::links::resolver::resolve;
use serde::{Deserialize, Serialize};

/// Resolves an ordered, immutable list of link templates against models
///
/// A builder holds no per-model state and can be shared between threads and
/// reused for any number of models. Templates that a model cannot satisfy are
/// skipped silently.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinkBuilder {
    templates: Vec<LinkTemplate>,
}

/// The builder with no templates
///
/// Use it for resources that declare no links instead of an optional builder.
pub static EMPTY: LinkBuilder = LinkBuilder::empty();

impl LinkBuilder {
    /// Snapshot a sequence of templates, keeping their order
    pub fn new(templates: impl IntoIterator<Item = LinkTemplate>) -> Self {
        Self {
            templates: templates.into_iter().collect(),
        }
    }

    /// A builder that never produces links
    pub const fn empty() -> Self {
        Self {
            templates: Vec::new(),
        }
    }

    pub fn templates(&self) -> &[LinkTemplate] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Resolve every template, keeping successes in template order
    pub fn links_for_model<M: Model + ?Sized>(&self, model: &M) -> Vec<Link> {
        self.templates
            .iter()
            .filter_map(|template| resolve(template, model).ok())
            .collect()
    }

    /// The first `rel="self"` template that resolves for this model
    pub fn canonical_for_model<M: Model + ?Sized>(&self, model: &M) -> Option<Link> {
        let canonical = self
            .templates
            .iter()
            .filter(|template| template.is_canonical())
            .find_map(|template| resolve(template, model).ok());

        tracing::trace!(
            found = canonical.is_some(),
            href = canonical.as_ref().map(|link| link.href.as_str()),
            "Canonical link lookup"
        );

        canonical
    }

    /// Both the canonical link and the full links collection
    pub fn describe<M: Model + ?Sized>(&self, model: &M) -> LinksSection {
        LinksSection {
            canonical: self.canonical_for_model(model),
            links: self.links_for_model(model),
        }
    }
}

impl FromIterator<LinkTemplate> for LinkBuilder {
    fn from_iter<I: IntoIterator<Item = LinkTemplate>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// The links part of a resource representation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinksSection {
    /// The resource's own URI
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub canonical: Option<Link>,

    /// Every link the model supports
    #[serde(default)]
    pub links: Vec<Link>,
}
