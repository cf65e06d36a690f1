use thiserror::Error;

/// Rejected slider configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("perPage must be at least 1")]
    ZeroPerPage,
}
