mod collection;
mod extraction;

pub use collection::{Extractions, extract_all, extract_all_with};
pub use extraction::{DEFAULT_VERSION_GROUP, ExtractedVersion, extract, extract_with};
