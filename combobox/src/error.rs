//! Error types for option configuration.

/// Errors raised while parsing an option list from configuration text.
///
/// Interaction never surfaces these: the lenient loader logs them and falls
/// back to an empty list.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The text is not valid JSON, or an entry lacks `label`/`value`.
    #[error("invalid option JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The JSON parsed, but the top-level value is not an array.
    #[error("expected a JSON array of options, found {found}")]
    NotAList { found: &'static str },
}
