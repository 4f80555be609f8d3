mod error;
mod parser;

pub use error::{VersionNumberError, VersionNumberResult};
pub use parser::{MAX_VERSION_COMPONENTS, parse_version_number};
pub use semver::Version;
