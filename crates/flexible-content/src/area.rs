//! Content Area
//!
//! The editable area: the item collection, the factory that feeds it and
//! the metadata derived from it. Every operation ends with a resync, so
//! `metadata()` and each item's ordering are always current between calls.

use tracing::{info, warn};

use crate::collection::{Direction, ItemCollection};
use crate::error::FactoryError;
use crate::factory::ItemFactory;
use crate::item::{ContentItem, DeleteState};
use crate::prefix::Prefix;
use crate::sync::{synchronize, Metadata};
use crate::template::TemplateRegistry;

#[derive(Debug, Clone)]
pub struct ContentArea {
    items: ItemCollection,
    factory: ItemFactory,
    metadata: Metadata,
}

impl ContentArea {
    pub fn new(factory: ItemFactory) -> Self {
        Self::with_items(factory, ItemCollection::new())
    }

    /// Start from items already rendered on the page
    pub fn with_items(mut factory: ItemFactory, mut items: ItemCollection) -> Self {
        factory.seed_from(&items);
        let metadata = synchronize(&mut items);
        info!(count = metadata.count, "content area ready");
        Self { items, factory, metadata }
    }

    pub fn items(&self) -> &ItemCollection {
        &self.items
    }

    pub fn item(&self, prefix: &Prefix) -> Option<&ContentItem> {
        self.items.get(prefix)
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn registry(&self) -> &TemplateRegistry {
        self.factory.registry()
    }

    pub fn factory(&self) -> &ItemFactory {
        &self.factory
    }

    /// Recompute the derived fields from the current order
    pub fn synchronize(&mut self) -> &Metadata {
        self.metadata = synchronize(&mut self.items);
        &self.metadata
    }

    /// Append a new item of `type_id`. On error the area is untouched.
    pub fn create_item(&mut self, type_id: &str) -> Result<Prefix, FactoryError> {
        let item = self.factory.create(type_id)?;
        let prefix = item.prefix().clone();
        self.items.push(item);
        self.synchronize();
        Ok(prefix)
    }

    /// Swap an item with its neighbour. Returns whether anything moved;
    /// the first item going up and the last going down stay put.
    pub fn move_item(&mut self, prefix: &Prefix, direction: Direction) -> bool {
        let moved = match self.items.position(prefix) {
            Some(index) => self.items.swap_with_neighbour(index, direction),
            None => {
                warn!(prefix = prefix.as_str(), "move requested for unknown item");
                false
            }
        };
        self.synchronize();
        moved
    }

    pub fn move_up(&mut self, prefix: &Prefix) -> bool {
        self.move_item(prefix, Direction::Up)
    }

    pub fn move_down(&mut self, prefix: &Prefix) -> bool {
        self.move_item(prefix, Direction::Down)
    }

    /// Flip the soft-delete flag. The item stays in the collection.
    pub fn toggle_deleted(&mut self, prefix: &Prefix) -> Option<DeleteState> {
        let state = match self.items.get_mut(prefix) {
            Some(item) => Some(item.toggle_deleted()),
            None => {
                warn!(prefix = prefix.as_str(), "delete toggle requested for unknown item");
                None
            }
        };
        self.synchronize();
        state
    }
}
