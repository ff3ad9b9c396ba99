//! Item Factory
//!
//! Turns a type slug into a fresh item: look up the template, stamp the
//! next counter value into every placeholder, derive the prefix.

use tracing::{debug, warn};

use crate::collection::ItemCollection;
use crate::error::FactoryError;
use crate::item::ContentItem;
use crate::prefix::{PrefixCounter, PrefixScheme};
use crate::template::{Placeholder, TemplateRegistry};

#[derive(Debug, Clone)]
pub struct ItemFactory {
    registry: TemplateRegistry,
    placeholder: Placeholder,
    scheme: PrefixScheme,
    counter: PrefixCounter,
}

impl ItemFactory {
    pub fn new(registry: TemplateRegistry, placeholder: Placeholder, scheme: PrefixScheme) -> Self {
        Self {
            registry,
            placeholder,
            scheme,
            counter: PrefixCounter::default(),
        }
    }

    /// Move the counter past every item already in `items`
    pub fn seed_from(&mut self, items: &ItemCollection) {
        let seeded = PrefixCounter::seeded(&self.scheme, items.prefixes());
        if seeded.last() > self.counter.last() {
            self.counter = seeded;
        }
    }

    pub fn registry(&self) -> &TemplateRegistry {
        &self.registry
    }

    pub fn placeholder(&self) -> &Placeholder {
        &self.placeholder
    }

    pub fn scheme(&self) -> &PrefixScheme {
        &self.scheme
    }

    pub fn counter(&self) -> &PrefixCounter {
        &self.counter
    }

    /// Render the markup for `type_id` stamped with `stamp`, without touching
    /// the counter.
    pub fn render(&self, type_id: &str, stamp: u64) -> Result<String, FactoryError> {
        if type_id.is_empty() {
            return Err(FactoryError::MissingTypeId);
        }
        let template = self
            .registry
            .template(type_id)
            .ok_or_else(|| FactoryError::UnknownType {
                type_id: type_id.to_string(),
            })?;
        if !self.placeholder.occurs_in(template) {
            return Err(FactoryError::PlaceholderMissing {
                type_id: type_id.to_string(),
                placeholder: self.placeholder.token().to_string(),
            });
        }
        Ok(self.placeholder.substitute(template, stamp))
    }

    /// Build the next item of `type_id`. The counter only advances when the
    /// item was actually produced.
    pub fn create(&mut self, type_id: &str) -> Result<ContentItem, FactoryError> {
        let stamp = self.counter.peek_next().ok_or_else(|| {
            warn!(type_id, last = self.counter.last(), "prefix counter exhausted");
            FactoryError::CounterExhausted {
                last: self.counter.last(),
            }
        })?;
        let markup = self.render(type_id, stamp).map_err(|e| {
            warn!(type_id, error = %e, "refusing to create item");
            e
        })?;
        self.counter.advance();

        let prefix = self.scheme.format(stamp);
        debug!(type_id, prefix = prefix.as_str(), stamp, "created item");
        Ok(ContentItem::new(prefix, Some(type_id.to_string()), markup))
    }
}
