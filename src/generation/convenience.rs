//! Convenience functions for one-off lookups.

use futures::stream::BoxStream;

use crate::config::LookupConfig;
use crate::error::LookupError;
use crate::types::*;

use super::stream::{collect_lookup, StreamCoordinator};

/// Stream a lookup using configuration from the environment.
pub fn stream(
    topic: impl Into<String>,
    language: LanguageCode,
    mode: GenerationMode,
) -> Result<BoxStream<'static, StreamEvent>, LookupError> {
    let coordinator = StreamCoordinator::from_config(&LookupConfig::from_env())?;
    Ok(coordinator.generate(topic, language, mode))
}

/// Run a lookup to completion: topic → text + image.
///
/// A failed lookup is still `Ok`; check [`LookupResult::error`].
pub async fn lookup(
    topic: impl Into<String>,
    language: LanguageCode,
    mode: GenerationMode,
) -> Result<LookupResult, LookupError> {
    Ok(collect_lookup(stream(topic, language, mode)?).await)
}
