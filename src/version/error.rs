use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionNumberError {
    #[error("version number is empty")]
    Empty,
    #[error("version number '{input}' has {count} components; expected 1 to 3")]
    TooManyComponents { input: String, count: usize },
    #[error("version number '{input}' has an empty component at position {position}")]
    EmptyComponent { input: String, position: usize },
    #[error(
        "version number '{input}' contains component '{component}' which is not a non-negative integer"
    )]
    InvalidComponent { input: String, component: String },
}

pub type VersionNumberResult<T> = Result<T, VersionNumberError>;
