mod paths;

pub use paths::{filter_paths, match_paths, match_paths_unanchored};
