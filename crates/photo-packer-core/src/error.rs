use thiserror::Error;

#[derive(Debug, Error)]
pub enum PackError {
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("unknown algorithm '{0}' (expected guillotine, shelf, or maxrects)")]
    UnknownAlgorithm(String),
}

impl PackError {
    pub(crate) fn geometry(reason: impl Into<String>) -> Self {
        Self::InvalidGeometry(reason.into())
    }
}

pub type Result<T> = std::result::Result<T, PackError>;
