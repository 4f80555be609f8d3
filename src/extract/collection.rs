use crate::errors::VersionsResult;
use crate::pattern::{Anchoring, CompiledPattern};
use crate::version::Version;
use serde::{Deserialize, Serialize};

use super::{DEFAULT_VERSION_GROUP, ExtractedVersion, extract_with};

/// Extracted versions of a bucket listing, orderable by version.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Extractions {
    items: Vec<ExtractedVersion>,
}

impl Extractions {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, extraction: ExtractedVersion) {
        self.items.push(extraction);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ExtractedVersion> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[ExtractedVersion] {
        &self.items
    }

    /// Ascending by version; equal versions keep their listing order.
    pub fn sort(&mut self) {
        self.items.sort_by(|a, b| a.version.cmp(&b.version));
    }

    /// Highest version; the last listed wins a tie.
    pub fn latest(&self) -> Option<&ExtractedVersion> {
        self.items.iter().max_by(|a, b| a.version.cmp(&b.version))
    }

    pub fn newer_than<'a>(
        &'a self,
        version: &'a Version,
    ) -> impl Iterator<Item = &'a ExtractedVersion> + 'a {
        self.items.iter().filter(move |item| item.version > *version)
    }

    pub fn into_vec(self) -> Vec<ExtractedVersion> {
        self.items
    }
}

impl FromIterator<ExtractedVersion> for Extractions {
    fn from_iter<I: IntoIterator<Item = ExtractedVersion>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Extractions {
    type Item = ExtractedVersion;
    type IntoIter = std::vec::IntoIter<ExtractedVersion>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Extractions {
    type Item = &'a ExtractedVersion;
    type IntoIter = std::slice::Iter<'a, ExtractedVersion>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Matches `paths` against `pattern` from start to end and extracts a version
/// from each match, sorted ascending.
///
/// Paths without a version capture are skipped; the first unparsable version
/// number aborts the whole listing.
#[tracing::instrument(level = "trace", skip(paths), fields(paths = paths.len() as u64))]
pub fn extract_all<S: AsRef<str>>(paths: &[S], pattern: &str) -> VersionsResult<Extractions> {
    if paths.is_empty() {
        return Ok(Extractions::new());
    }

    let compiled = CompiledPattern::new(pattern, Anchoring::Full)?;
    extract_all_with(&compiled, paths, DEFAULT_VERSION_GROUP)
}

pub fn extract_all_with<S: AsRef<str>>(
    compiled: &CompiledPattern,
    paths: &[S],
    group_name: &str,
) -> VersionsResult<Extractions> {
    let mut extractions = Extractions::new();

    for path in compiled.filter(paths) {
        if let Some(extraction) = extract_with(compiled, path, group_name)? {
            extractions.push(extraction);
        }
    }

    extractions.sort();
    tracing::trace!(extracted = extractions.len() as u64, "versions extracted");

    Ok(extractions)
}
