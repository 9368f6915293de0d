//! Error types for the fallible edges of the crate
//!
//! The inference functions themselves never fail; only user-supplied
//! patterns and configuration can.

#[derive(Debug, thiserror::Error)]
pub enum NetkitError {
    #[error("Invalid net pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}
