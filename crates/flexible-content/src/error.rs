//! Error Types
//!
//! One enum per concern. Only `FactoryError` ever reaches the user.

use thiserror::Error;

/// Failures while materializing a new item. All of them are configuration
/// problems on the page, so nothing is mutated when one is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FactoryError {
    #[error("no type identifier was given for the new item")]
    MissingTypeId,

    #[error("no form template is registered for type '{type_id}'")]
    UnknownType { type_id: String },

    #[error("form template for type '{type_id}' does not contain the placeholder '{placeholder}'")]
    PlaceholderMissing { type_id: String, placeholder: String },

    #[error("no prefix is left after stamp {last}")]
    CounterExhausted { last: u64 },
}

impl FactoryError {
    /// Text for the blocking notification shown to the editor.
    pub fn user_message(&self) -> String {
        let detail = match self {
            FactoryError::MissingTypeId => {
                "the type you tried to add didn't have a slug (or perhaps we're looking in the wrong place)"
                    .to_string()
            }
            FactoryError::UnknownType { type_id } => format!(
                "the type you tried to add ('{}') didn't have a form template (or perhaps we just aren't looking in the right place)",
                type_id
            ),
            FactoryError::PlaceholderMissing { type_id, .. } => format!(
                "we couldn't render the final form from the template for '{}'",
                type_id
            ),
            FactoryError::CounterExhausted { last } => format!(
                "an existing item already uses the highest possible prefix number ({}), so no new item can be numbered",
                last
            ),
        };
        format!("Sorry, something went wrong. Tell a developer that {}.", detail)
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("the form prefix placeholder must not be empty")]
    EmptyPlaceholder,

    #[error("the form prefix placeholder cannot be matched: {0}")]
    InvalidPlaceholder(#[from] regex::Error),

    #[error("prefix template '{0}' must contain '{{counter}}' exactly once")]
    PrefixTemplate(String),

    #[error("item type '{0}' is registered more than once")]
    DuplicateType(String),

    #[error("no configuration found: {0}")]
    Missing(String),

    #[error("invalid page globals: {0}")]
    InvalidGlobals(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("field '{field}' has a non-numeric ordering '{value}'")]
    InvalidOrdering { field: String, value: String },

    #[error("field '{field}' has a non-numeric delete flag '{value}'")]
    InvalidDeleteFlag { field: String, value: String },
}
