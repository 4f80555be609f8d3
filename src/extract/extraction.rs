use crate::errors::{VersionsError, VersionsResult};
use crate::pattern::{Anchoring, CompiledPattern};
use crate::version::{Version, parse_version_number};
use serde::{Deserialize, Serialize};

/// Name of the capturing group that overrides positional extraction.
pub const DEFAULT_VERSION_GROUP: &str = "version";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExtractedVersion {
    pub path: String,
    pub version: Version,
    /// Raw text captured from the path, before zero filling.
    pub version_number: String,
}

/// Extracts the version carried by `path`.
///
/// `Ok(None)` means the path is not a versioned artifact for `pattern`. An
/// uncompilable pattern or a captured text that is not a version number is an
/// error.
#[tracing::instrument(level = "trace")]
pub fn extract(path: &str, pattern: &str) -> VersionsResult<Option<ExtractedVersion>> {
    let compiled = CompiledPattern::new(pattern, Anchoring::Unanchored)?;
    extract_with(&compiled, path, DEFAULT_VERSION_GROUP)
}

pub fn extract_with(
    compiled: &CompiledPattern,
    path: &str,
    group_name: &str,
) -> VersionsResult<Option<ExtractedVersion>> {
    let Some(version_number) = compiled.version_capture(path, group_name) else {
        return Ok(None);
    };

    let version = parse_version_number(version_number).map_err(|source| {
        VersionsError::InvalidVersionNumber {
            path: path.to_string(),
            source,
        }
    })?;

    Ok(Some(ExtractedVersion {
        path: path.to_string(),
        version,
        version_number: version_number.to_string(),
    }))
}
