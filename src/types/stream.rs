//! Streaming types.

use serde::{Deserialize, Serialize};

/// Normalized unit produced by a lookup stream.
///
/// `Failed` is always the last event of a stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StreamEvent {
    /// Incremental text, in arrival order.
    TextDelta { text: String },
    /// An illustration, as a `data:` URL.
    ImageReady { url: String },
    /// Terminal failure. Events before it remain valid.
    Failed { message: String },
}

impl StreamEvent {
    pub fn text_delta(text: impl Into<String>) -> Self {
        Self::TextDelta { text: text.into() }
    }

    pub fn image_ready(url: impl Into<String>) -> Self {
        Self::ImageReady { url: url.into() }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            message: message.into(),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Outcome after consuming a lookup stream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupResult {
    /// All text deltas, concatenated in order.
    pub text: String,
    /// Every image url, in arrival order.
    pub images: Vec<String>,
    /// Failure message, if the stream ended in `Failed`.
    pub error: Option<String>,
}

impl LookupResult {
    /// The image to display: the last one received.
    pub fn image(&self) -> Option<&str> {
        self.images.last().map(String::as_str)
    }

    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }

    /// Fold one event into the result.
    pub fn apply(&mut self, event: StreamEvent) {
        match event {
            StreamEvent::TextDelta { text } => self.text.push_str(&text),
            StreamEvent::ImageReady { url } => self.images.push(url),
            StreamEvent::Failed { message } => self.error = Some(message),
        }
    }
}
