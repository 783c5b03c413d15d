use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[error("unknown release type {0:?} (expected tender, award or spend)")]
pub struct ParseReleaseTypeError(pub String);
