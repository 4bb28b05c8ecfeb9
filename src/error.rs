//! Error types for configuration, storage, and page wiring.
//!
//! Runtime behaviors degrade silently; these errors only surface at the
//! edges (startup wiring and best-effort persistence) where the host decides
//! whether to log or abort.

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid page config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid page config: {0}")]
    Invalid(String),
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("preference storage unavailable")]
    Unavailable,
    #[error("preference write rejected: {0}")]
    Rejected(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("required element missing: {0}")]
    MissingElement(&'static str),
    #[error("browser call failed: {0}")]
    Js(String),
}
