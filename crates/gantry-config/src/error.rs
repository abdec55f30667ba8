//! Error types for the declarative build model.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("no known platform tag in capability set [{}]", tags.join(", "))]
    PlatformUndetermined { tags: Vec<String> },

    #[error("required option is missing or empty: {0}")]
    MissingOption(&'static str),
}
