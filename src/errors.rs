use crate::options::VersionsOptionsError;
use crate::pattern::PatternError;
use crate::version::VersionNumberError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VersionsError {
    #[error(transparent)]
    Pattern(#[from] PatternError),
    #[error("path '{path}' captured an invalid version number: {source}")]
    InvalidVersionNumber {
        path: String,
        #[source]
        source: VersionNumberError,
    },
    #[error(transparent)]
    Options(#[from] VersionsOptionsError),
}

pub type VersionsResult<T> = Result<T, VersionsError>;
