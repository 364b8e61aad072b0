#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilerError {
    /// The path or environment does not determine a filer, share or bucket.
    #[error("Configuration error: {0}")]
    Configuration(String),
    /// A required per-filer variable is absent from the environment.
    #[error("Missing environment variable: {0}")]
    MissingEnvironmentVariable(String),
}

pub type Result<T> = std::result::Result<T, FilerError>;
