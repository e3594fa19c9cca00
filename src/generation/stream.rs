//! Streaming lookups: one combined text + image request per call.

use std::sync::Arc;

use futures::stream::BoxStream;
use futures::StreamExt;
use tracing::{debug, warn};

use crate::config::LookupConfig;
use crate::error::LookupError;
use crate::provider::{ContentProvider, ChunkStream};
use crate::types::*;

const UNKNOWN_ERROR: &str = "An unknown error occurred.";

/// Turns a `(topic, language, mode)` lookup into a stream of [`StreamEvent`]s.
///
/// Each call to [`generate`](Self::generate) opens its own request; concurrent
/// lookups share nothing but the provider. The returned stream is lazy (no
/// request is sent until it is first polled), finite, and cannot be restarted.
/// Dropping it abandons the request.
#[derive(Clone)]
pub struct StreamCoordinator {
    provider: Arc<dyn ContentProvider>,
}

impl StreamCoordinator {
    pub fn new(provider: Arc<dyn ContentProvider>) -> Self {
        Self { provider }
    }

    /// Build a coordinator backed by the default provider for `config`.
    pub fn from_config(config: &LookupConfig) -> Result<Self, LookupError> {
        let provider = crate::provider::create_provider(config)?;
        Ok(Self::new(Arc::from(provider)))
    }

    pub fn provider(&self) -> &dyn ContentProvider {
        self.provider.as_ref()
    }

    /// Stream a lookup.
    ///
    /// Errors never escape as `Err`: a failure while connecting or mid-stream
    /// becomes a single trailing [`StreamEvent::Failed`], and events already
    /// yielded stay valid.
    pub fn generate(
        &self,
        topic: impl Into<String>,
        language: LanguageCode,
        mode: GenerationMode,
    ) -> BoxStream<'static, StreamEvent> {
        self.generate_request(&GenerationRequest::new(topic, language, mode))
    }

    /// Stream a lookup described by `request`.
    pub fn generate_request(&self, request: &GenerationRequest) -> BoxStream<'static, StreamEvent> {
        let provider = Arc::clone(&self.provider);
        let topic = request.topic().to_string();
        let prompt = request.prompt();
        let mode = request.mode();
        let language = request.language().clone();

        let stream = async_stream::stream! {
            debug!(
                provider = provider.provider_name(),
                model = provider.model_id(),
                %mode,
                %language,
                "starting lookup"
            );

            let mut chunks: ChunkStream = match provider.stream_content(&prompt).await {
                Ok(chunks) => chunks,
                Err(e) => {
                    warn!(error = %e, topic = %topic, "lookup request failed");
                    yield StreamEvent::failed(failure_message(&topic, &e));
                    return;
                }
            };

            while let Some(item) = chunks.next().await {
                let chunk = match item {
                    Ok(chunk) => chunk,
                    Err(e) => {
                        warn!(error = %e, topic = %topic, "lookup stream failed");
                        yield StreamEvent::failed(failure_message(&topic, &e));
                        return;
                    }
                };

                if let Some(text) = chunk.text_delta() {
                    yield StreamEvent::text_delta(text);
                }
                for url in chunk.image_urls() {
                    debug!(url_len = url.len(), "lookup image ready");
                    yield StreamEvent::image_ready(url);
                }
            }

            debug!(topic = %topic, "lookup finished");
        };

        Box::pin(stream)
    }
}

/// Message carried by [`StreamEvent::Failed`].
pub fn failure_message(topic: &str, error: &dyn std::fmt::Display) -> String {
    let description = error.to_string();
    let description = if description.trim().is_empty() {
        UNKNOWN_ERROR
    } else {
        description.as_str()
    };
    format!("Could not generate content for \"{topic}\". {description}")
}

/// Drain a lookup stream into a [`LookupResult`].
pub async fn collect_lookup(mut stream: BoxStream<'static, StreamEvent>) -> LookupResult {
    let mut result = LookupResult::default();
    while let Some(event) = stream.next().await {
        result.apply(event);
    }
    result
}
