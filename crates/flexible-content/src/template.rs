//! Item Types and Form Templates
//!
//! Each item type carries a form template with a placeholder token wherever
//! the new item's counter belongs. The registry is handed to the factory at
//! construction and only ever read afterwards.

use regex::{NoExpand, Regex};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::ConfigError;

/// Literal token replaced with the new item's counter
#[derive(Debug, Clone)]
pub struct Placeholder {
    token: String,
    pattern: Regex,
}

impl Placeholder {
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyPlaceholder);
        }
        // Escaped so tokens like `__prefix__` or `$(n)` match literally
        let pattern = Regex::new(&regex::escape(&token))?;
        Ok(Self { token, pattern })
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn occurs_in(&self, template: &str) -> bool {
        self.pattern.is_match(template)
    }

    /// Replace every occurrence, on every line, with `stamp`
    pub fn substitute(&self, template: &str, stamp: u64) -> String {
        let stamp = stamp.to_string();
        self.pattern
            .replace_all(template, NoExpand(stamp.as_str()))
            .into_owned()
    }
}

/// A registered content item type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemType {
    pub slug: String,
    pub name: String,
    /// Markdown help text shown next to the add button
    #[serde(default)]
    pub description: String,
    pub template: String,
}

/// Type slug -> item type, in registration order
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    types: Vec<ItemType>,
    index: HashMap<String, usize>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, item_type: ItemType) -> Result<(), ConfigError> {
        if self.index.contains_key(&item_type.slug) {
            return Err(ConfigError::DuplicateType(item_type.slug));
        }
        self.index.insert(item_type.slug.clone(), self.types.len());
        self.types.push(item_type);
        Ok(())
    }

    pub fn get(&self, slug: &str) -> Option<&ItemType> {
        self.index.get(slug).map(|&i| &self.types[i])
    }

    pub fn template(&self, slug: &str) -> Option<&str> {
        self.get(slug).map(|t| t.template.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemType> {
        self.types.iter()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_text() -> ItemType {
        ItemType {
            slug: "plain-text".to_string(),
            name: "Plain Text".to_string(),
            description: String::new(),
            template: "<textarea name=\"fc-item-PLACEHOLDER-text\"></textarea>".to_string(),
        }
    }

    #[test]
    fn test_substitute_all_lines() {
        let placeholder = Placeholder::new("PLACEHOLDER").unwrap();
        let template = "<input name=\"fc-item-PLACEHOLDER-ct\">\n<input name=\"fc-item-PLACEHOLDER-ordering\">";
        assert_eq!(
            placeholder.substitute(template, 4),
            "<input name=\"fc-item-4-ct\">\n<input name=\"fc-item-4-ordering\">"
        );
    }

    #[test]
    fn test_substitute_is_literal() {
        let placeholder = Placeholder::new("$(n).*").unwrap();
        assert_eq!(placeholder.substitute("a-$(n).*-b xyz", 2), "a-2-b xyz");
        assert!(!placeholder.occurs_in("a-n-b"));
    }

    #[test]
    fn test_empty_placeholder_rejected() {
        assert!(matches!(Placeholder::new(""), Err(ConfigError::EmptyPlaceholder)));
    }

    #[test]
    fn test_registry_lookup_and_order() {
        let mut registry = TemplateRegistry::new();
        registry.register(plain_text()).unwrap();
        registry
            .register(ItemType {
                slug: "raw-html".to_string(),
                name: "Raw HTML".to_string(),
                description: String::new(),
                template: "PLACEHOLDER".to_string(),
            })
            .unwrap();

        assert_eq!(registry.len(), 2);
        assert!(registry.template("plain-text").unwrap().contains("PLACEHOLDER"));
        assert!(registry.get("video").is_none());
        let slugs: Vec<_> = registry.iter().map(|t| t.slug.as_str()).collect();
        assert_eq!(slugs, vec!["plain-text", "raw-html"]);
    }

    #[test]
    fn test_registry_rejects_duplicates() {
        let mut registry = TemplateRegistry::new();
        registry.register(plain_text()).unwrap();
        let err = registry.register(plain_text()).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateType(slug) if slug == "plain-text"));
    }
}
