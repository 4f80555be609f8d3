use regex::{Regex, RegexBuilder};
use regex_syntax::hir::{Hir, Look};
use serde::{Deserialize, Serialize};

use super::{PatternError, PatternResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Anchoring {
    /// The pattern must span the whole path.
    #[default]
    Full,
    /// Any substring match is enough.
    Unanchored,
}

/// A caller supplied pattern compiled once for a given [`Anchoring`].
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    raw: Box<str>,
    anchoring: Anchoring,
    regex: Regex,
}

impl CompiledPattern {
    pub fn new(pattern: &str, anchoring: Anchoring) -> PatternResult<Self> {
        Self::with_size_limit(pattern, anchoring, None)
    }

    #[tracing::instrument(level = "trace", skip(size_limit))]
    pub fn with_size_limit(
        pattern: &str,
        anchoring: Anchoring,
        size_limit: Option<usize>,
    ) -> PatternResult<Self> {
        // The pattern must compile as written before anchoring is considered,
        // so errors always describe what the caller supplied.
        let unanchored = build_regex(pattern, pattern, size_limit)?;

        let regex = match anchoring {
            Anchoring::Unanchored => unanchored,
            Anchoring::Full => build_regex(pattern, &anchored_source(pattern)?, size_limit)?,
        };

        Ok(Self {
            raw: pattern.into(),
            anchoring,
            regex,
        })
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn anchoring(&self) -> Anchoring {
        self.anchoring
    }

    #[inline]
    pub fn is_match(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }

    /// Keeps the paths this pattern matches, in input order.
    pub fn filter<'a, S: AsRef<str>>(&self, paths: &'a [S]) -> Vec<&'a str> {
        paths
            .iter()
            .map(AsRef::<str>::as_ref)
            .filter(|path| self.is_match(path))
            .collect()
    }

    /// Index of the group labelled `name`, if the pattern declares one.
    pub fn named_group_index(&self, name: &str) -> Option<usize> {
        self.regex
            .capture_names()
            .position(|candidate| candidate == Some(name))
    }

    /// Index of the first unnamed capturing group in declaration order.
    pub fn first_unnamed_group_index(&self) -> Option<usize> {
        self.regex
            .capture_names()
            .enumerate()
            .skip(1)
            .find_map(|(index, name)| name.is_none().then_some(index))
    }

    /// Text of the version bearing group for `path`.
    ///
    /// The group labelled `group_name` wins regardless of its position; the
    /// first unnamed group is used otherwise. `None` when the pattern does not
    /// match, has no usable group, or the chosen group did not participate.
    pub fn version_capture<'p>(&self, path: &'p str, group_name: &str) -> Option<&'p str> {
        let index = self
            .named_group_index(group_name)
            .or_else(|| self.first_unnamed_group_index())?;

        let captures = self.regex.captures(path)?;
        captures.get(index).map(|m| m.as_str())
    }
}

fn build_regex(pattern: &str, source: &str, size_limit: Option<usize>) -> PatternResult<Regex> {
    let mut builder = RegexBuilder::new(source);
    if let Some(limit) = size_limit {
        builder.size_limit(limit);
    }

    builder.build().map_err(|err| {
        tracing::debug!(pattern, error = %err, "pattern failed to compile");
        PatternError::Invalid {
            pattern: pattern.to_string(),
            source: err,
        }
    })
}

/// Re-prints `pattern` wrapped in start and end of text assertions.
///
/// Anchoring the parsed form keeps inline flags, comments and group numbering
/// exactly as the caller wrote them.
fn anchored_source(pattern: &str) -> PatternResult<String> {
    let hir = regex_syntax::parse(pattern).map_err(|source| PatternError::Syntax {
        pattern: pattern.to_string(),
        source,
    })?;

    let anchored = Hir::concat(vec![Hir::look(Look::Start), hir, Hir::look(Look::End)]);

    Ok(anchored.to_string())
}

impl PartialEq for CompiledPattern {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw && self.anchoring == other.anchoring
    }
}

impl Eq for CompiledPattern {}
