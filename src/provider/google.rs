//! Google Gemini API provider.

use async_trait::async_trait;
use futures::StreamExt;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::{LookupConfig, DEFAULT_BASE_URL};
use crate::error::LookupError;
use crate::types::{ChunkPart, ContentChunk};

use super::http::{build_client, google_headers, parse_sse_data, status_to_error, SseLineBuffer};
use super::{ChunkStream, ContentProvider};

pub struct GoogleProvider {
    client: reqwest::Client,
    model: String,
    api_key: String,
    base_url: String,
}

impl GoogleProvider {
    pub fn new(model: impl Into<String>, api_key: impl Into<String>) -> Result<Self, LookupError> {
        Ok(Self {
            client: build_client(None)?,
            model: model.into(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    pub fn from_config(config: &LookupConfig) -> Result<Self, LookupError> {
        Ok(Self {
            client: build_client(config.timeout())?,
            model: config.model().to_string(),
            api_key: config.require_api_key()?.to_string(),
            base_url: config.base_url().to_string(),
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn stream_url(&self) -> String {
        format!(
            "{}/models/{}:streamGenerateContent?alt=sse",
            self.base_url, self.model
        )
    }

    fn build_request_body(prompt: &str) -> serde_json::Value {
        serde_json::json!({
            "contents": [{
                "role": "user",
                "parts": [{"text": prompt}],
            }],
            "generationConfig": {
                "responseModalities": ["IMAGE", "TEXT"],
            },
        })
    }
}

#[async_trait]
impl ContentProvider for GoogleProvider {
    fn provider_name(&self) -> &str {
        "google"
    }

    fn model_id(&self) -> &str {
        &self.model
    }

    async fn stream_content(&self, prompt: &str) -> Result<ChunkStream, LookupError> {
        let body = Self::build_request_body(prompt);

        debug!(model = %self.model, "Google stream_content");

        let resp = self
            .client
            .post(self.stream_url())
            .headers(google_headers(&self.api_key)?)
            .json(&body)
            .send()
            .await?;

        let status = resp.status().as_u16();
        if !resp.status().is_success() {
            let body_text = resp.text().await.unwrap_or_default();
            return Err(status_to_error(status, &body_text));
        }

        let byte_stream = resp.bytes_stream();

        let stream = async_stream::stream! {
            let mut lines = SseLineBuffer::new();
            let mut done = false;
            futures::pin_mut!(byte_stream);

            while !done {
                let pending = match byte_stream.next().await {
                    Some(Ok(bytes)) => lines.push(&bytes),
                    Some(Err(e)) => {
                        yield Err(LookupError::Network(e));
                        break;
                    }
                    None => {
                        done = true;
                        lines.finish().into_iter().collect()
                    }
                };

                for line in pending {
                    let data = match parse_sse_data(&line) {
                        Some(data) => data,
                        None => continue,
                    };
                    match parse_chunk(data) {
                        Ok(chunk) => yield Ok(chunk),
                        Err(e) => {
                            yield Err(e);
                            done = true;
                            break;
                        }
                    }
                }
            }
        };

        Ok(Box::pin(stream))
    }
}

/// Normalize one SSE payload.
///
/// Text is the concatenation of the first candidate's text parts, the same
/// view the Gemini SDKs expose as `chunk.text`.
fn parse_chunk(data: &str) -> Result<ContentChunk, LookupError> {
    let resp: GeminiStreamChunk = serde_json::from_str(data)?;

    if let Some(err) = resp.error {
        return Err(err.into_error());
    }
    if let Some(reason) = resp.prompt_feedback.and_then(|f| f.block_reason) {
        warn!(reason = %reason, "Gemini blocked the prompt");
    }

    let parts = resp
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|c| c.parts)
        .unwrap_or_default();

    let mut text: Option<String> = None;
    for t in parts.iter().filter_map(|p| p.text.as_deref()) {
        text.get_or_insert_with(String::new).push_str(t);
    }

    debug!(
        text_len = text.as_ref().map_or(0, String::len),
        parts = parts.len(),
        "Gemini chunk"
    );

    Ok(ContentChunk { text, parts })
}

// Internal Gemini response types

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiStreamChunk {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    prompt_feedback: Option<GeminiPromptFeedback>,
    error: Option<GeminiError>,
}

#[derive(Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiContent>,
}

#[derive(Deserialize)]
struct GeminiContent {
    #[serde(default)]
    parts: Vec<ChunkPart>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiPromptFeedback {
    block_reason: Option<String>,
}

#[derive(Deserialize)]
struct GeminiError {
    code: Option<u16>,
    message: Option<String>,
    status: Option<String>,
}

impl GeminiError {
    fn into_error(self) -> LookupError {
        let message = self
            .message
            .or(self.status)
            .unwrap_or_else(|| "Gemini stream error".to_string());
        LookupError::api(self.code.unwrap_or(500), message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn request_body_asks_for_both_modalities() {
        let body = GoogleProvider::build_request_body("hello");
        assert_eq!(
            body["generationConfig"]["responseModalities"],
            serde_json::json!(["IMAGE", "TEXT"])
        );
        assert_eq!(body["contents"][0]["parts"][0]["text"], "hello");
    }

    #[test]
    fn parse_chunk_joins_text_parts_and_keeps_inline_data() {
        let data = r#"{"candidates":[{"content":{"role":"model","parts":[
            {"text":"Hel"},{"text":"lo"},
            {"inlineData":{"mimeType":"image/png","data":"xx"}}
        ]}}]}"#;
        let chunk = parse_chunk(data).unwrap();
        assert_eq!(chunk.text.as_deref(), Some("Hello"));
        assert_eq!(chunk.parts.len(), 3);
        assert_eq!(
            chunk.image_urls().collect::<Vec<_>>(),
            vec!["data:image/png;base64,xx".to_string()]
        );
    }

    #[test]
    fn parse_chunk_without_candidates_is_empty() {
        let chunk = parse_chunk(r#"{"usageMetadata":{"totalTokenCount":3}}"#).unwrap();
        assert_eq!(chunk, ContentChunk::default());
    }

    #[test]
    fn parse_chunk_surfaces_error_envelope() {
        let err = parse_chunk(r#"{"error":{"code":503,"message":"overloaded"}}"#).unwrap_err();
        assert!(matches!(err, LookupError::Api { status: 503, ref message } if message == "overloaded"));
    }

    #[test]
    fn parse_chunk_rejects_malformed_json() {
        assert!(matches!(
            parse_chunk("{not json"),
            Err(LookupError::Serialization(_))
        ));
    }
}
