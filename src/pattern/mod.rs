mod compiled;
mod error;
mod prefix;

pub use compiled::{Anchoring, CompiledPattern};
pub use error::{PatternError, PatternResult};
pub use prefix::prefix;
