//! Structured errors for the data-loading surface.
//!
//! The geometry and color paths degrade silently on malformed *data*
//! (lenient parsing, clamping); errors exist only where a host hands us
//! structured input — region tables and styles — and a mistake there is a
//! programming problem worth surfacing with a hint.

use thiserror::Error;

/// The error type returned by table and style loading.
#[derive(Debug, Error)]
pub enum MapError {
    /// JSON input failed to parse as the expected structure.
    #[error("failed to parse input: {source}\n  hint: {hint}")]
    Parse {
        source: serde_json::Error,
        hint: String,
    },
    /// The input parsed but violates a table invariant.
    #[error("invalid body table: {0}")]
    Table(String),
}

impl From<serde_json::Error> for MapError {
    fn from(e: serde_json::Error) -> Self {
        let hint = match e.classify() {
            serde_json::error::Category::Syntax => {
                "check for trailing commas, missing quotes, or unescaped characters".to_string()
            }
            serde_json::error::Category::Data => {
                "the JSON is valid but doesn't match the expected schema; check field names, \
                 region slugs, and types"
                    .to_string()
            }
            serde_json::error::Category::Eof => {
                "unexpected end of input — is the JSON truncated?".to_string()
            }
            serde_json::error::Category::Io => "I/O failure while reading input".to_string(),
        };
        MapError::Parse { source: e, hint }
    }
}
