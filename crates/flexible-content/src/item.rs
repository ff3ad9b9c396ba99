//! Content Item Entity
//!
//! One repeatable block of the form. The markup is opaque; only the
//! bookkeeping around it (prefix, ordering, delete flag) is managed here.

use serde::{Deserialize, Serialize};

use crate::prefix::Prefix;

/// Class put on an item's element while it is marked for deletion
pub const DELETED_CLASS: &str = "fc-deleted";

/// Soft-delete state. The item never leaves the collection; the form
/// processor drops it on save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeleteState {
    #[default]
    Active,
    MarkedDeleted,
}

impl DeleteState {
    pub fn from_flag(deleted: bool) -> Self {
        if deleted {
            DeleteState::MarkedDeleted
        } else {
            DeleteState::Active
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            DeleteState::Active => DeleteState::MarkedDeleted,
            DeleteState::MarkedDeleted => DeleteState::Active,
        }
    }

    pub fn is_deleted(self) -> bool {
        self == DeleteState::MarkedDeleted
    }

    /// Value of the hidden `{prefix}-delete` input
    pub fn field_value(self) -> &'static str {
        match self {
            DeleteState::Active => "0",
            DeleteState::MarkedDeleted => "1",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    prefix: Prefix,
    /// Type slug, when known. Items adopted from the page may not carry one.
    type_id: Option<String>,
    markup: String,
    /// 1-based position, written by the synchronizer
    ordering: u32,
    delete_state: DeleteState,
}

impl ContentItem {
    pub fn new(prefix: Prefix, type_id: Option<String>, markup: String) -> Self {
        Self {
            prefix,
            type_id,
            markup,
            ordering: 0,
            delete_state: DeleteState::Active,
        }
    }

    /// An item that was already rendered on the page before the editor started
    pub fn adopted(prefix: Prefix, type_id: Option<String>, markup: String, deleted: bool) -> Self {
        Self {
            delete_state: DeleteState::from_flag(deleted),
            ..Self::new(prefix, type_id, markup)
        }
    }

    pub fn prefix(&self) -> &Prefix {
        &self.prefix
    }

    pub fn type_id(&self) -> Option<&str> {
        self.type_id.as_deref()
    }

    pub fn markup(&self) -> &str {
        &self.markup
    }

    pub fn ordering(&self) -> u32 {
        self.ordering
    }

    pub fn delete_state(&self) -> DeleteState {
        self.delete_state
    }

    pub fn is_deleted(&self) -> bool {
        self.delete_state.is_deleted()
    }

    pub(crate) fn set_ordering(&mut self, ordering: u32) {
        self.ordering = ordering;
    }

    pub(crate) fn toggle_deleted(&mut self) -> DeleteState {
        self.delete_state = self.delete_state.toggled();
        self.delete_state
    }
}
