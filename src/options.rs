use crate::extract::DEFAULT_VERSION_GROUP;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_CACHE_CAPACITY: usize = 64;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct VersionsOptions {
    /// Capturing group whose text is the version number.
    pub version_group: String,
    /// Compiled patterns kept per [`crate::Versions`] instance.
    pub cache_capacity: usize,
    /// Upper bound, in bytes, on a compiled pattern.
    pub regex_size_limit: Option<usize>,
}

impl Default for VersionsOptions {
    fn default() -> Self {
        Self {
            version_group: DEFAULT_VERSION_GROUP.to_string(),
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            regex_size_limit: None,
        }
    }
}

impl VersionsOptions {
    pub fn builder() -> VersionsOptionsBuilder {
        VersionsOptionsBuilder::default()
    }

    pub fn validate(&self) -> Result<(), VersionsOptionsError> {
        validate_group_name(&self.version_group)?;
        if self.cache_capacity == 0 {
            return Err(VersionsOptionsError::CacheCapacityInvalid { provided: 0 });
        }
        Ok(())
    }
}

fn validate_group_name(name: &str) -> Result<(), VersionsOptionsError> {
    let Some(first) = name.chars().next() else {
        return Err(VersionsOptionsError::EmptyVersionGroup);
    };

    if !(first.is_ascii_alphabetic() || first == '_') {
        return Err(VersionsOptionsError::InvalidVersionGroup {
            name: name.to_string(),
            invalid: first,
        });
    }

    if let Some(invalid) = name
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '_'))
    {
        return Err(VersionsOptionsError::InvalidVersionGroup {
            name: name.to_string(),
            invalid,
        });
    }

    Ok(())
}

#[derive(Debug, Default, Clone)]
pub struct VersionsOptionsBuilder {
    options: VersionsOptions,
}

impl VersionsOptionsBuilder {
    pub fn version_group<S: Into<String>>(mut self, name: S) -> Self {
        self.options.version_group = name.into();
        self
    }

    pub fn cache_capacity(mut self, value: usize) -> Self {
        self.options.cache_capacity = value;
        self
    }

    pub fn regex_size_limit(mut self, value: usize) -> Self {
        self.options.regex_size_limit = Some(value);
        self
    }

    pub fn build(self) -> Result<VersionsOptions, VersionsOptionsError> {
        let options = self.options;
        options.validate()?;
        Ok(options)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VersionsOptionsError {
    #[error("version group name cannot be empty")]
    EmptyVersionGroup,
    #[error("version group name '{name}' contains invalid character '{invalid}'")]
    InvalidVersionGroup { name: String, invalid: char },
    #[error("cache_capacity must be at least 1 (got {provided})")]
    CacheCapacityInvalid { provided: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let options = VersionsOptions::default();
        assert_eq!(options.version_group, "version");
        assert_eq!(options.cache_capacity, DEFAULT_CACHE_CAPACITY);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn group_names_follow_regex_rules() {
        assert_eq!(
            validate_group_name(""),
            Err(VersionsOptionsError::EmptyVersionGroup)
        );
        assert_eq!(
            validate_group_name("1st"),
            Err(VersionsOptionsError::InvalidVersionGroup {
                name: "1st".to_string(),
                invalid: '1',
            })
        );
        assert_eq!(
            validate_group_name("ver-sion"),
            Err(VersionsOptionsError::InvalidVersionGroup {
                name: "ver-sion".to_string(),
                invalid: '-',
            })
        );
        assert_eq!(
            validate_group_name("élan"),
            Err(VersionsOptionsError::InvalidVersionGroup {
                name: "élan".to_string(),
                invalid: 'é',
            })
        );
        assert!(validate_group_name("_rel2").is_ok());
    }
}
