use thiserror::Error;

/// Errors raised while building tabs or loading their configuration
#[derive(Debug, Error)]
pub enum TabsError {
    #[error("tab title must not be empty")]
    EmptyTitle,

    #[error("invalid message catalog: {0}")]
    InvalidCatalog(String),

    #[error("invalid tabs config: {0}")]
    InvalidConfig(#[source] serde_json::Error),

    #[error("invalid view settings: {0}")]
    InvalidSettings(String),
}
