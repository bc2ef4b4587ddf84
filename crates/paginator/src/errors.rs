use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginatorError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("invalid url: {0}")]
    InvalidUrl(String),
}

impl PaginatorError {
    pub fn invalid_url(input: &str, reason: impl std::fmt::Display) -> Self {
        Self::InvalidUrl(format!("'{input}': {reason}"))
    }
}
