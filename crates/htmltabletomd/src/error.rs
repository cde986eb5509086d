use thiserror::Error;

/// Failures surfaced by [`crate::TableConverter`]. Both variants carry a fixed
/// message so callers can match on the rendered text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("Invalid alignment option for '{arg}' arg. Expected one of: {expected}")]
    InvalidArgument { arg: &'static str, expected: String },

    #[error("No '{tag}' tag found")]
    Structural { tag: &'static str },
}

impl TableError {
    pub(crate) fn missing_tag(tag: &'static str) -> Self {
        TableError::Structural { tag }
    }
}
