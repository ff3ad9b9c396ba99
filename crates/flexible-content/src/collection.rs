//! Item Collection
//!
//! The ordered list of items, in document order. This is the authoritative
//! model; the page is a projection of it.

use serde::{Deserialize, Serialize};

use crate::item::ContentItem;
use crate::prefix::Prefix;

/// Which neighbour to swap with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemCollection {
    items: Vec<ContentItem>,
}

impl ItemCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ContentItem> {
        self.items.iter()
    }

    pub fn prefixes(&self) -> impl Iterator<Item = &Prefix> {
        self.items.iter().map(ContentItem::prefix)
    }

    /// 0-based index of the item with this prefix
    pub fn position(&self, prefix: &Prefix) -> Option<usize> {
        self.items.iter().position(|item| item.prefix() == prefix)
    }

    pub fn get(&self, prefix: &Prefix) -> Option<&ContentItem> {
        self.items.iter().find(|item| item.prefix() == prefix)
    }

    pub fn contains(&self, prefix: &Prefix) -> bool {
        self.position(prefix).is_some()
    }

    pub(crate) fn get_mut(&mut self, prefix: &Prefix) -> Option<&mut ContentItem> {
        self.items.iter_mut().find(|item| item.prefix() == prefix)
    }

    pub(crate) fn items_mut(&mut self) -> &mut [ContentItem] {
        &mut self.items
    }

    pub(crate) fn push(&mut self, item: ContentItem) {
        self.items.push(item);
    }

    /// Swap the item at `index` with its neighbour. Returns false when there
    /// is no neighbour in that direction.
    pub(crate) fn swap_with_neighbour(&mut self, index: usize, direction: Direction) -> bool {
        let neighbour = match direction {
            Direction::Up => index.checked_sub(1),
            Direction::Down => Some(index + 1).filter(|&i| i < self.items.len()),
        };
        match neighbour {
            Some(other) if index < self.items.len() => {
                self.items.swap(index, other);
                true
            }
            _ => false,
        }
    }
}

impl FromIterator<ContentItem> for ItemCollection {
    fn from_iter<I: IntoIterator<Item = ContentItem>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
