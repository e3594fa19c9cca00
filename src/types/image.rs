//! Inline image payloads.

use base64::Engine;

use crate::error::LookupError;

/// A base64 image addressed as `data:<mime>;base64,<payload>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUri {
    pub mime_type: String,
    /// Base64 payload, kept encoded.
    pub data: String,
}

impl DataUri {
    pub fn new(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: data.into(),
        }
    }

    /// Render as a URL usable directly as an image source.
    pub fn to_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }

    /// Parse a `data:<mime>;base64,<payload>` URL.
    pub fn parse(url: &str) -> Result<Self, LookupError> {
        let rest = url
            .strip_prefix("data:")
            .ok_or_else(|| LookupError::InvalidArgument("not a data URL".into()))?;
        let (header, data) = rest
            .split_once(',')
            .ok_or_else(|| LookupError::InvalidArgument("data URL has no payload".into()))?;
        let mime_type = header.strip_suffix(";base64").ok_or_else(|| {
            LookupError::InvalidArgument("only base64 data URLs are supported".into())
        })?;
        Ok(Self::new(mime_type, data))
    }

    /// Decode the payload into raw bytes.
    pub fn decode(&self) -> Result<Vec<u8>, LookupError> {
        base64::engine::general_purpose::STANDARD
            .decode(self.data.as_bytes())
            .map_err(|e| LookupError::InvalidArgument(format!("invalid base64 image data: {e}")))
    }

    /// Conventional file extension for the media type.
    pub fn extension(&self) -> &str {
        match self.mime_type.as_str() {
            "image/png" => "png",
            "image/jpeg" | "image/jpg" => "jpg",
            "image/webp" => "webp",
            "image/gif" => "gif",
            _ => "bin",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_decode() {
        let uri = DataUri::parse("data:image/png;base64,aGVsbG8=").unwrap();
        assert_eq!(uri.mime_type, "image/png");
        assert_eq!(uri.decode().unwrap(), b"hello");
        assert_eq!(uri.extension(), "png");
        assert_eq!(uri.to_url(), "data:image/png;base64,aGVsbG8=");
    }

    #[test]
    fn rejects_non_data_urls() {
        assert!(matches!(
            DataUri::parse("https://example.com/a.png"),
            Err(LookupError::InvalidArgument(_))
        ));
        assert!(DataUri::parse("data:text/plain,hello").is_err());
        assert!(DataUri::new("image/png", "!!!").decode().is_err());
    }
}
