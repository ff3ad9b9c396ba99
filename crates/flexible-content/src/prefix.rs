//! Form Prefixes
//!
//! Every item namespaces its fields with a prefix such as `fc-item-3`.
//! Prefixes are handed out by a counter that only ever moves forward.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ConfigError;

const COUNTER_TOKEN: &str = "{counter}";

/// Stable identifier stamped on an item at creation
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Prefix(String);

impl Prefix {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name of one of this item's form fields, e.g. `fc-item-3-ordering`
    pub fn field(&self, name: &str) -> String {
        format!("{}-{}", self.0, name)
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Prefix {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// How a counter value becomes a prefix (`fc-item-{counter}` by default)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixScheme {
    head: String,
    tail: String,
}

impl PrefixScheme {
    pub fn new(template: &str) -> Result<Self, ConfigError> {
        let mut parts = template.split(COUNTER_TOKEN);
        match (parts.next(), parts.next(), parts.next()) {
            (Some(head), Some(tail), None) => Ok(Self {
                head: head.to_string(),
                tail: tail.to_string(),
            }),
            _ => Err(ConfigError::PrefixTemplate(template.to_string())),
        }
    }

    pub fn format(&self, counter: u64) -> Prefix {
        Prefix(format!("{}{}{}", self.head, counter, self.tail))
    }

    /// Recover the counter a prefix was stamped with, if it follows this scheme
    pub fn parse(&self, prefix: &Prefix) -> Option<u64> {
        prefix
            .as_str()
            .strip_prefix(&self.head)?
            .strip_suffix(&self.tail)?
            .parse()
            .ok()
    }
}

/// Monotonic stamp source for new items
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixCounter {
    last: u64,
}

impl PrefixCounter {
    /// Start past everything already on the page: past the item count and
    /// past the highest stamp found in the existing prefixes.
    pub fn seeded<'a>(scheme: &PrefixScheme, existing: impl IntoIterator<Item = &'a Prefix>) -> Self {
        let mut count = 0u64;
        let mut highest = 0u64;
        for prefix in existing {
            count += 1;
            if let Some(stamp) = scheme.parse(prefix) {
                highest = highest.max(stamp);
            }
        }
        Self { last: count.max(highest) }
    }

    /// The stamp the next item would receive, `None` once the counter is
    /// at `u64::MAX`
    pub fn peek_next(&self) -> Option<u64> {
        self.last.checked_add(1)
    }

    /// Hand out the next stamp. An exhausted counter stays where it is.
    pub fn advance(&mut self) -> Option<u64> {
        let next = self.peek_next()?;
        self.last = next;
        Some(next)
    }

    pub fn last(&self) -> u64 {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_round_trip() {
        let scheme = PrefixScheme::new("fc-item-{counter}").unwrap();
        let prefix = scheme.format(12);
        assert_eq!(prefix.as_str(), "fc-item-12");
        assert_eq!(scheme.parse(&prefix), Some(12));
        assert_eq!(scheme.parse(&Prefix::from("legacy")), None);
    }

    #[test]
    fn test_scheme_with_suffix() {
        let scheme = PrefixScheme::new("block-{counter}-x").unwrap();
        assert_eq!(scheme.format(4).as_str(), "block-4-x");
        assert_eq!(scheme.parse(&Prefix::from("block-9-x")), Some(9));
    }

    #[test]
    fn test_scheme_requires_single_counter() {
        assert!(PrefixScheme::new("fc-item").is_err());
        assert!(PrefixScheme::new("{counter}-{counter}").is_err());
    }

    #[test]
    fn test_field_name() {
        assert_eq!(Prefix::from("fc-item-2").field("delete"), "fc-item-2-delete");
    }

    #[test]
    fn test_counter_seeded_past_highest_stamp() {
        let scheme = PrefixScheme::new("fc-item-{counter}").unwrap();
        let existing = vec![Prefix::from("fc-item-1"), Prefix::from("fc-item-7")];
        let mut counter = PrefixCounter::seeded(&scheme, &existing);
        assert_eq!(counter.peek_next(), Some(8));
        assert_eq!(counter.advance(), Some(8));
        assert_eq!(counter.advance(), Some(9));
    }

    #[test]
    fn test_counter_seeded_past_count_for_foreign_prefixes() {
        let scheme = PrefixScheme::new("fc-item-{counter}").unwrap();
        let existing = vec![Prefix::from("a"), Prefix::from("b")];
        let counter = PrefixCounter::seeded(&scheme, &existing);
        assert_eq!(counter.peek_next(), Some(3));
    }

    #[test]
    fn test_counter_exhausted_at_max_stamp() {
        let scheme = PrefixScheme::new("fc-item-{counter}").unwrap();
        let existing = vec![Prefix::new(format!("fc-item-{}", u64::MAX))];
        let mut counter = PrefixCounter::seeded(&scheme, &existing);
        assert_eq!(counter.peek_next(), None);
        assert_eq!(counter.advance(), None);
        assert_eq!(counter.last(), u64::MAX);
    }
}
