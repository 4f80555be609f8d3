use crate::pattern::{Anchoring, CompiledPattern, PatternResult};

/// Paths that `pattern` matches from start to end, in input order.
///
/// `abc` keeps `abc` but not `folder/abc`.
pub fn match_paths<'a, S: AsRef<str>>(
    paths: &'a [S],
    pattern: &str,
) -> PatternResult<Vec<&'a str>> {
    filter_paths(paths, pattern, Anchoring::Full)
}

/// Paths containing at least one match of `pattern` anywhere.
pub fn match_paths_unanchored<'a, S: AsRef<str>>(
    paths: &'a [S],
    pattern: &str,
) -> PatternResult<Vec<&'a str>> {
    filter_paths(paths, pattern, Anchoring::Unanchored)
}

#[tracing::instrument(level = "trace", skip(paths), fields(paths = paths.len() as u64))]
pub fn filter_paths<'a, S: AsRef<str>>(
    paths: &'a [S],
    pattern: &str,
    anchoring: Anchoring,
) -> PatternResult<Vec<&'a str>> {
    if paths.is_empty() {
        return Ok(Vec::new());
    }

    let compiled = CompiledPattern::new(pattern, anchoring)?;
    let matched = compiled.filter(paths);

    tracing::trace!(matched = matched.len() as u64, "paths filtered");

    Ok(matched)
}
