//! Streaming lookups and their collection helpers.

pub mod convenience;
pub mod stream;

pub use convenience::{lookup, stream};
pub use stream::{collect_lookup, failure_message, StreamCoordinator};
