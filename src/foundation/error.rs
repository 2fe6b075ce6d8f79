use std::path::PathBuf;

pub type SpriteResult<T> = Result<T, SpriteError>;

#[derive(thiserror::Error, Debug)]
pub enum SpriteError {
    #[error("missing frame: {}", .0.display())]
    MissingFrame(PathBuf),

    #[error("no frames loaded: the requested range is empty")]
    EmptySequence,

    #[error("no candidate ranges: the search window and length bounds admit no valid range")]
    NoCandidates,

    #[error("validation error: {0}")]
    Validation(String),

    #[error("external tool error: {0}")]
    External(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SpriteError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn external(msg: impl Into<String>) -> Self {
        Self::External(msg.into())
    }
}
