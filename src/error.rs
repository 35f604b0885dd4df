//! Error type shared by the store, root, control and config layers.

/// Failure raised while reading or applying a theme preference.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// A browser facility (window, document, storage, root element) is absent.
    #[error("{0} is unavailable")]
    Unavailable(&'static str),
    /// The persistent store rejected a read.
    #[error("failed to read preference {key:?}: {reason}")]
    StorageRead { key: String, reason: String },
    /// The persistent store rejected a write (disabled storage, quota).
    #[error("failed to persist preference {key:?}: {reason}")]
    StorageWrite { key: String, reason: String },
    /// The root element rejected the attribute write.
    #[error("failed to set root attribute {name:?}: {reason}")]
    Attribute { name: String, reason: String },
    /// The switch control could not be built or wired.
    #[error("switch control error: {0}")]
    Control(String),
    /// A configuration field holds an unusable value.
    #[error("invalid config field `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },
    /// The configuration JSON could not be parsed.
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}
