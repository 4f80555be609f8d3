use thiserror::Error;

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("pattern '{pattern}' is not a valid regular expression: {source}")]
    Invalid {
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("pattern '{pattern}' could not be parsed for anchoring: {source}")]
    Syntax {
        pattern: String,
        #[source]
        source: regex_syntax::Error,
    },
}

impl PatternError {
    pub fn pattern(&self) -> &str {
        match self {
            PatternError::Invalid { pattern, .. } | PatternError::Syntax { pattern, .. } => {
                pattern
            }
        }
    }
}

pub type PatternResult<T> = Result<T, PatternError>;
