use thiserror::Error;

/// Library error type for imagefill operations.
#[derive(Debug, Error)]
pub enum Error {
    /// No element within the container matched the target selector.
    /// Fatal to the widget instance being attached, nothing else.
    #[error("no element matches target selector {0:?}")]
    MissingTarget(String),

    /// Settings rejected by [`crate::config::Settings::validated`].
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    /// Underlying IO error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// YAML/serde configuration error.
    #[error(transparent)]
    Config(#[from] serde_yaml::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
