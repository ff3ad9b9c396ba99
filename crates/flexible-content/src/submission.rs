//! Submitted Form Fields
//!
//! The form processor on the other end reads a fixed naming convention:
//! `fc-prefixes` lists the items, and each item's fields are namespaced
//! as `{prefix}-{field}`. This module writes that convention out of the
//! model and reads a submitted field set back into per-item records.

use percent_encoding::percent_decode_str;
use std::collections::BTreeMap;

use crate::area::ContentArea;
use crate::error::SubmissionError;
use crate::prefix::Prefix;
use crate::sync::PrefixList;

pub const PREFIXES_FIELD: &str = "fc-prefixes";
const ORDERING_FIELD: &str = "ordering";
const DELETE_FIELD: &str = "delete";

/// Bookkeeping fields for the whole area, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields(Vec<(String, String)>);

impl FormFields {
    pub fn encode(area: &ContentArea) -> Self {
        let mut pairs = vec![(
            PREFIXES_FIELD.to_string(),
            area.metadata().prefix_list.as_str().to_string(),
        )];
        for item in area.items().iter() {
            pairs.push((item.prefix().field(ORDERING_FIELD), item.ordering().to_string()));
            pairs.push((
                item.prefix().field(DELETE_FIELD),
                item.delete_state().field_value().to_string(),
            ));
        }
        Self(pairs)
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.0
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn into_pairs(self) -> Vec<(String, String)> {
        self.0
    }
}

/// One item as the form processor sees it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedItem {
    pub prefix: Prefix,
    pub ordering: Option<u32>,
    pub deleted: bool,
    /// This item's fields with the `{prefix}-` namespace stripped
    pub fields: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmittedForm {
    items: Vec<SubmittedItem>,
}

impl SubmittedForm {
    pub fn parse<I, K, V>(pairs: I) -> Result<Self, SubmissionError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let pairs: Vec<(String, String)> = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        let prefixes = pairs
            .iter()
            .find(|(key, _)| key == PREFIXES_FIELD)
            .map(|(_, value)| PrefixList::parse(value))
            .unwrap_or_default();

        let items = prefixes
            .into_iter()
            .map(|prefix| collect_item(prefix, &pairs))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { items })
    }

    /// Parse an `application/x-www-form-urlencoded` body
    pub fn from_urlencoded(body: &str) -> Result<Self, SubmissionError> {
        let pairs = body
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                (decode_component(key), decode_component(value))
            });
        Self::parse(pairs)
    }

    pub fn items(&self) -> &[SubmittedItem] {
        &self.items
    }

    /// Items that should be saved, i.e. not marked for deletion
    pub fn kept(&self) -> impl Iterator<Item = &SubmittedItem> {
        self.items.iter().filter(|item| !item.deleted)
    }
}

fn collect_item(prefix: Prefix, pairs: &[(String, String)]) -> Result<SubmittedItem, SubmissionError> {
    // The trailing hyphen keeps fc-item-1 from claiming fc-item-10's fields
    let namespace = format!("{}-", prefix.as_str());
    let fields: BTreeMap<String, String> = pairs
        .iter()
        .filter_map(|(key, value)| {
            key.strip_prefix(&namespace)
                .map(|name| (name.to_string(), value.clone()))
        })
        .collect();

    let ordering: Option<u32> = match fields.get(ORDERING_FIELD).map(|v| v.trim()) {
        None | Some("") => None,
        Some(value) => Some(value.parse::<u32>().map_err(|_| SubmissionError::InvalidOrdering {
            field: prefix.field(ORDERING_FIELD),
            value: value.to_string(),
        })?),
    };

    let deleted = match fields.get(DELETE_FIELD).map(|v| v.trim()) {
        None | Some("") => false,
        Some(value) => {
            let flag: i64 = value.parse().map_err(|_| SubmissionError::InvalidDeleteFlag {
                field: prefix.field(DELETE_FIELD),
                value: value.to_string(),
            })?;
            flag != 0
        }
    };

    Ok(SubmittedItem {
        prefix,
        ordering,
        deleted,
        fields,
    })
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}
