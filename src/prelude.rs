//! Convenience re-exports.

pub use crate::config::LookupConfig;
pub use crate::error::{LookupError, Result};
pub use crate::generation::{collect_lookup, StreamCoordinator};
pub use crate::prompt::build_prompt;
pub use crate::provider::ContentProvider;
pub use crate::types::*;
