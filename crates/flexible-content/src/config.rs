//! Page Configuration
//!
//! The host page describes its item types, the placeholder token used in
//! their templates and how prefixes are spelled. Everything is validated
//! up front so a bad page fails at startup rather than on first click.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::ConfigError;
use crate::factory::ItemFactory;
use crate::prefix::PrefixScheme;
use crate::template::{ItemType, Placeholder, TemplateRegistry};

pub const DEFAULT_PLACEHOLDER: &str = "PLACEHOLDER";
pub const DEFAULT_PREFIX_TEMPLATE: &str = "fc-item-{counter}";

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}

fn default_prefix_template() -> String {
    DEFAULT_PREFIX_TEMPLATE.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemTypeConfig {
    pub slug: String,
    /// Display name; falls back to the slug
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: String,
    pub template: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlexibleContentConfig {
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    #[serde(default = "default_prefix_template")]
    pub prefix_template: String,
    #[serde(default)]
    pub types: Vec<ItemTypeConfig>,
}

impl Default for FlexibleContentConfig {
    fn default() -> Self {
        Self {
            placeholder: default_placeholder(),
            prefix_template: default_prefix_template(),
            types: Vec::new(),
        }
    }
}

impl FlexibleContentConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Config from the older page globals: a bare slug -> template map and
    /// an optional placeholder token.
    pub fn from_legacy(templates: BTreeMap<String, String>, placeholder: Option<String>) -> Self {
        Self {
            placeholder: placeholder.unwrap_or_else(default_placeholder),
            types: templates
                .into_iter()
                .map(|(slug, template)| ItemTypeConfig {
                    slug,
                    name: None,
                    description: String::new(),
                    template,
                })
                .collect(),
            ..Self::default()
        }
    }

    pub fn registry(&self) -> Result<TemplateRegistry, ConfigError> {
        let mut registry = TemplateRegistry::new();
        for t in &self.types {
            registry.register(ItemType {
                slug: t.slug.clone(),
                name: t.name.clone().unwrap_or_else(|| t.slug.clone()),
                description: t.description.clone(),
                template: t.template.clone(),
            })?;
        }
        Ok(registry)
    }

    /// Validate everything and build the factory
    pub fn into_factory(self) -> Result<ItemFactory, ConfigError> {
        let registry = self.registry()?;
        let placeholder = Placeholder::new(self.placeholder)?;
        let scheme = PrefixScheme::new(&self.prefix_template)?;
        Ok(ItemFactory::new(registry, placeholder, scheme))
    }
}
