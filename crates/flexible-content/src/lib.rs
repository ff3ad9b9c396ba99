//! Flexible Content Core
//!
//! Layered like the UI that drives it:
//! - model: prefixes, items, the ordered collection
//! - sync: derived metadata (count, prefix list, orderings)
//! - factory: template lookup and placeholder stamping
//! - area: the editable content area tying both together
//! - config / submission: what comes in from the page and what goes out in the form

mod area;
mod collection;
mod config;
mod error;
mod factory;
mod item;
mod prefix;
mod submission;
mod sync;
mod template;

#[cfg(test)]
mod tests;

pub use area::ContentArea;
pub use collection::{Direction, ItemCollection};
pub use config::{FlexibleContentConfig, ItemTypeConfig, DEFAULT_PLACEHOLDER, DEFAULT_PREFIX_TEMPLATE};
pub use error::{ConfigError, FactoryError, SubmissionError};
pub use factory::ItemFactory;
pub use item::{ContentItem, DeleteState, DELETED_CLASS};
pub use prefix::{Prefix, PrefixCounter, PrefixScheme};
pub use submission::{FormFields, SubmittedForm, SubmittedItem, PREFIXES_FIELD};
pub use sync::{synchronize, Metadata, PrefixList};
pub use template::{ItemType, Placeholder, TemplateRegistry};
