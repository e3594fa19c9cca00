//! Content provider trait and the Gemini implementation.

pub mod http;

#[cfg(feature = "google")]
pub mod google;

use async_trait::async_trait;
use futures::stream::BoxStream;

use crate::error::LookupError;
use crate::types::ContentChunk;

/// Stream of normalized chunks from one generation request.
///
/// An `Err` item ends the stream.
pub type ChunkStream = BoxStream<'static, Result<ContentChunk, LookupError>>;

/// Backend that turns a prompt into a streamed text + image response.
#[async_trait]
pub trait ContentProvider: Send + Sync {
    /// Provider name (e.g., "google").
    fn provider_name(&self) -> &str;

    /// The model ID this provider instance serves.
    fn model_id(&self) -> &str;

    /// Open one streamed request asking for interleaved text and image output.
    async fn stream_content(&self, prompt: &str) -> Result<ChunkStream, LookupError>;
}

/// Create the default provider from config.
#[allow(unused_variables)]
pub fn create_provider(
    config: &crate::config::LookupConfig,
) -> Result<Box<dyn ContentProvider>, LookupError> {
    #[cfg(feature = "google")]
    {
        Ok(Box::new(google::GoogleProvider::from_config(config)?))
    }
    #[cfg(not(feature = "google"))]
    {
        Err(LookupError::Configuration(
            "No provider enabled via feature flags".into(),
        ))
    }
}
