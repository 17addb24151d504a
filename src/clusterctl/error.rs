use thiserror::Error;

#[derive(Error, Debug)]
pub enum CtlError {
    #[error("unknown output: {0}")]
    UnknownOutput(String),

    #[error("please provide a valid resource for \"{0}\"")]
    MissingResource(String),

    #[error("unknown resource type \"{0}\"")]
    UnknownResource(String),

    #[error("invalid cluster config: {0}")]
    InvalidConfig(String),

    #[error("usage error: {0}")]
    Usage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Provision(String),
}

pub type Result<T> = std::result::Result<T, CtlError>;
