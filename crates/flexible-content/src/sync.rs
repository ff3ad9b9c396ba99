//! Metadata Synchronizer
//!
//! Recomputes every derived value from the collection's current order:
//! the item count, the joined prefix list and each item's ordering.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::collection::ItemCollection;
use crate::prefix::Prefix;

/// Comma-joined prefixes, as submitted in the `fc-prefixes` field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrefixList(String);

impl PrefixList {
    pub fn join<'a>(prefixes: impl IntoIterator<Item = &'a Prefix>) -> Self {
        let joined = prefixes
            .into_iter()
            .map(Prefix::as_str)
            .collect::<Vec<_>>()
            .join(",");
        Self(joined)
    }

    /// Split a submitted list, skipping empty segments
    pub fn parse(value: &str) -> Vec<Prefix> {
        value
            .split(',')
            .filter(|p| !p.is_empty())
            .map(Prefix::from)
            .collect()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn prefixes(&self) -> Vec<Prefix> {
        Self::parse(&self.0)
    }
}

/// Derived state shown in, and submitted with, the form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Items present, soft-deleted ones included
    pub count: usize,
    pub prefix_list: PrefixList,
}

/// Bring counts, prefix list and orderings in line with the current order.
/// Safe to call any number of times.
pub fn synchronize(items: &mut ItemCollection) -> Metadata {
    for (index, item) in items.items_mut().iter_mut().enumerate() {
        item.set_ordering(index as u32 + 1);
    }

    let metadata = Metadata {
        count: items.len(),
        prefix_list: PrefixList::join(items.prefixes()),
    };
    debug!(count = metadata.count, prefixes = metadata.prefix_list.as_str(), "synchronized item metadata");
    metadata
}
