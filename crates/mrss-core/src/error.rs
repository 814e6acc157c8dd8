//! Error types for media extraction.
//!
//! Missing tags, unknown enum spellings and malformed numbers are not errors;
//! they leave fields unset or fall back to defaults. Only input that cannot
//! be approximated safely surfaces here.

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MediaError>;

#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    /// A timestamp attribute or element did not match any known format.
    #[error("invalid timestamp in {field}: {value:?}")]
    InvalidTimestamp { field: &'static str, value: String },

    /// The document is not well-formed XML.
    #[error("XML parse error: {0}")]
    Xml(#[from] xmltree::ParseError),

    /// Rendering an element failed.
    #[error("XML write error: {0}")]
    Write(#[from] xmltree::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Options file could not be decoded.
    #[error("options error: {0}")]
    Options(#[from] serde_json::Error),

    /// The root element is neither an RSS channel nor an Atom feed.
    #[error("unsupported document root <{0}>")]
    UnsupportedRoot(String),
}

impl MediaError {
    pub(crate) fn invalid_timestamp(field: &'static str, value: &str) -> Self {
        MediaError::InvalidTimestamp {
            field,
            value: value.to_string(),
        }
    }
}
