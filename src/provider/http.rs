//! HTTP client construction, SSE line parsing, and status mapping.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};

use crate::error::LookupError;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Build a pooled reqwest client.
///
/// `timeout` bounds the whole request including the streamed body, so it is
/// only set when the caller asks for one.
pub fn build_client(timeout: Option<Duration>) -> Result<reqwest::Client, LookupError> {
    let mut builder = reqwest::Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .pool_max_idle_per_host(10);
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}

/// Build headers for the Gemini API (x-goog-api-key).
pub fn google_headers(api_key: &str) -> Result<HeaderMap, LookupError> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    let key = HeaderValue::from_str(api_key)
        .map_err(|_| LookupError::Configuration("API key is not a valid header value".into()))?;
    headers.insert("x-goog-api-key", key);
    Ok(headers)
}

/// Parse an SSE "data:" line, returning None for other fields and "[DONE]".
pub fn parse_sse_data(line: &str) -> Option<&str> {
    let data = line.strip_prefix("data:")?.trim_start();
    if data.is_empty() || data == "[DONE]" {
        return None;
    }
    Some(data)
}

/// Splits a byte stream into lines, holding back partial lines between reads.
///
/// Lines are decoded only once complete, so multi-byte characters split across
/// network reads survive intact.
#[derive(Debug, Default)]
pub struct SseLineBuffer {
    buffer: Vec<u8>,
    /// Bytes of `buffer` already known to contain no newline.
    scanned: usize,
}

impl SseLineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append bytes and return every line they complete.
    pub fn push(&mut self, bytes: &[u8]) -> Vec<String> {
        self.buffer.extend_from_slice(bytes);
        let mut lines = Vec::new();
        let mut start = 0;
        while let Some(offset) = self.buffer[start + self.scanned..]
            .iter()
            .position(|b| *b == b'\n')
        {
            let end = start + self.scanned + offset;
            lines.push(decode_line(&self.buffer[start..end]));
            start = end + 1;
            self.scanned = 0;
        }
        self.buffer.drain(..start);
        self.scanned = self.buffer.len();
        lines
    }

    /// Flush a trailing line that never received its newline.
    pub fn finish(&mut self) -> Option<String> {
        if self.buffer.is_empty() {
            return None;
        }
        let raw = std::mem::take(&mut self.buffer);
        self.scanned = 0;
        Some(decode_line(&raw))
    }
}

fn decode_line(raw: &[u8]) -> String {
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8_lossy(raw).into_owned()
}

/// Map a non-success HTTP status to an error.
pub fn status_to_error(status: u16, body: &str) -> LookupError {
    let message = extract_error_message(body).unwrap_or_else(|| body.to_string());
    match status {
        401 | 403 => LookupError::Authentication(message),
        429 => LookupError::RateLimited {
            retry_after_ms: extract_retry_after(body),
        },
        _ => LookupError::api(status, message),
    }
}

/// Pull `error.message` out of a Google error envelope.
pub fn extract_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()?
        .get("error")?
        .get("message")?
        .as_str()
        .map(str::to_string)
}

fn extract_retry_after(body: &str) -> Option<u64> {
    // Google reports RetryInfo as {"@type": "...RetryInfo", "retryDelay": "12s"}
    let value = serde_json::from_str::<serde_json::Value>(body).ok()?;
    value
        .get("error")?
        .get("details")?
        .as_array()?
        .iter()
        .find_map(|d| d.get("retryDelay").and_then(|r| r.as_str()))
        .and_then(|delay| delay.strip_suffix('s'))
        .and_then(|secs| secs.parse::<f64>().ok())
        .map(|s| (s * 1000.0) as u64)
}
