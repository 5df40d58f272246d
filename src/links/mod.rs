//! Link resolution module
//!
//! This module turns declared link templates into concrete links for a
//! given model, and keeps the templates of each model in a registry.

pub mod builder;
pub mod registry;
pub mod resolver;

pub use builder::{EMPTY, LinkBuilder, LinksSection};
pub use registry::LinkRegistry;
pub use resolver::{escape_query_value, resolve};
