use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown observation kind: {0}")]
    UnknownKind(String),

    #[error("unknown threshold flag: {0}")]
    UnknownFlag(String),
}
