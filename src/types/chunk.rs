//! Provider-neutral stream chunks.

use serde::{Deserialize, Serialize};

use super::image::DataUri;

/// One unit of a provider's streamed response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentChunk {
    /// Text fragment carried by this chunk.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Content parts of the first candidate.
    #[serde(default)]
    pub parts: Vec<ChunkPart>,
}

/// A sub-unit of a chunk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChunkPart {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

/// Inline binary payload. Either field may be missing on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
}

impl ContentChunk {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            parts: Vec::new(),
        }
    }

    pub fn with_part(mut self, part: ChunkPart) -> Self {
        self.parts.push(part);
        self
    }

    /// Text to surface, if any. Empty strings count as no text.
    pub fn text_delta(&self) -> Option<&str> {
        self.text.as_deref().filter(|t| !t.is_empty())
    }

    /// Data URLs for every part carrying a complete inline payload, in part order.
    pub fn image_urls(&self) -> impl Iterator<Item = String> + '_ {
        self.parts
            .iter()
            .filter_map(|part| part.inline_data.as_ref())
            .filter_map(InlineData::to_data_uri)
            .map(|uri| uri.to_url())
    }
}

impl ChunkPart {
    pub fn inline(data: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            text: None,
            inline_data: Some(InlineData {
                data: Some(data.into()),
                mime_type: Some(mime_type.into()),
            }),
        }
    }
}

impl InlineData {
    /// `None` unless both payload and media type are present and non-empty.
    pub fn to_data_uri(&self) -> Option<DataUri> {
        let data = self.data.as_deref().filter(|d| !d.is_empty())?;
        let mime_type = self.mime_type.as_deref().filter(|m| !m.is_empty())?;
        Some(DataUri::new(mime_type, data))
    }
}
