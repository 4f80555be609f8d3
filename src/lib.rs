//! Path matching and version extraction for storage bucket polling.
//!
//! A pattern is typically used three times: [`prefix`] narrows the bucket
//! listing, [`match_paths`] filters the listing, and [`extract`] turns each
//! matching path into an orderable [`Version`].

mod cache;
pub mod errors;
pub mod extract;
pub mod matcher;
pub mod options;
pub mod pattern;
mod service;
pub mod version;

pub use errors::{VersionsError, VersionsResult};
pub use extract::{
    DEFAULT_VERSION_GROUP, ExtractedVersion, Extractions, extract, extract_all, extract_with,
};
pub use matcher::{filter_paths, match_paths, match_paths_unanchored};
pub use options::{VersionsOptions, VersionsOptionsBuilder, VersionsOptionsError};
pub use pattern::{Anchoring, CompiledPattern, PatternError, PatternResult, prefix};
pub use service::Versions;
pub use version::{Version, VersionNumberError, parse_version_number};
