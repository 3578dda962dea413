//! Media assets
//!
//! User-supplied files attached to floors (interior content and ambient
//! music). A file is imported once into a self-contained data-URL payload
//! and treated as an opaque immutable value from then on; replacing it is a
//! whole-value overwrite.

use serde::{Deserialize, Serialize};

/// Error type for media import and decoding
#[derive(Debug)]
pub enum MediaError {
    /// File I/O error during import
    Io(String),
    /// The stored payload is not a data URL or fails to decode
    Payload(String),
}

impl std::fmt::Display for MediaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaError::Io(msg) => write!(f, "I/O error: {}", msg),
            MediaError::Payload(msg) => write!(f, "payload error: {}", msg),
        }
    }
}

impl std::error::Error for MediaError {}

impl From<std::io::Error> for MediaError {
    fn from(e: std::io::Error) -> Self {
        MediaError::Io(e.to_string())
    }
}

/// MIME type reported when a file's type cannot be guessed
pub const OCTET_STREAM: &str = "application/octet-stream";

/// A user-supplied file encoded for inline storage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaAsset {
    /// Declared MIME type (drives the viewer dispatch)
    pub mime_type: String,
    /// Self-contained `data:<mime>;base64,<payload>` string
    pub encoded_data: String,
    /// Original file name, shown as the asset label
    pub original_name: String,
}

impl MediaAsset {
    /// Encode raw file bytes into a self-contained asset
    pub fn from_bytes(name: impl Into<String>, mime_type: impl Into<String>, bytes: &[u8]) -> Self {
        let mime_type = mime_type.into();
        let payload =
            base64::Engine::encode(&base64::engine::general_purpose::STANDARD, bytes);
        Self {
            encoded_data: format!("data:{};base64,{}", mime_type, payload),
            mime_type,
            original_name: name.into(),
        }
    }

    /// Import a file from disk, guessing its MIME type from the path.
    ///
    /// No size limit or type allow-list; anything the user picks is
    /// accepted and carried as-is.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn import_from_path(path: &std::path::Path) -> Result<Self, MediaError> {
        let bytes = std::fs::read(path)?;
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("file.bin")
            .to_string();
        let mime_type = mime_guess::from_path(path)
            .first_raw()
            .unwrap_or(OCTET_STREAM)
            .to_string();
        Ok(Self::from_bytes(name, mime_type, &bytes))
    }

    /// Recover the raw bytes from the data-URL payload
    pub fn decode_payload(&self) -> Result<Vec<u8>, MediaError> {
        let payload = self
            .encoded_data
            .split_once(";base64,")
            .map(|(_, payload)| payload)
            .ok_or_else(|| MediaError::Payload("not a base64 data URL".to_string()))?;
        base64::Engine::decode(&base64::engine::general_purpose::STANDARD, payload)
            .map_err(|e| MediaError::Payload(e.to_string()))
    }

    /// Rendering mode for this asset's declared type
    pub fn render_mode(&self) -> RenderMode {
        render_mode(&self.mime_type)
    }
}

/// The medium an asset is rendered in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Static image (`image/*`)
    Image,
    /// Looped inline video (`video/*`)
    Video,
    /// Looped audio with a visible label (`audio/*`)
    Audio,
    /// Inline document (`text/html`, `image/svg+xml`)
    Document,
    /// Explicit placeholder for anything else, never silently blank
    Unsupported,
}

/// Dispatch a MIME type to its rendering mode.
///
/// SVG routes to Document rather than Image: it is drawn as markup, not
/// decoded as a raster.
pub fn render_mode(mime_type: &str) -> RenderMode {
    if mime_type == "text/html" || mime_type == "image/svg+xml" {
        RenderMode::Document
    } else if mime_type.starts_with("image/") {
        RenderMode::Image
    } else if mime_type.starts_with("video/") {
        RenderMode::Video
    } else if mime_type.starts_with("audio/") {
        RenderMode::Audio
    } else {
        RenderMode::Unsupported
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_builds_data_url() {
        let asset = MediaAsset::from_bytes("photo.png", "image/png", b"rawbytes");
        assert!(asset.encoded_data.starts_with("data:image/png;base64,"));
        assert_eq!(asset.mime_type, "image/png");
        assert_eq!(asset.original_name, "photo.png");
    }

    #[test]
    fn test_decode_round_trip() {
        let bytes = vec![0u8, 1, 2, 250, 255];
        let asset = MediaAsset::from_bytes("blob.bin", OCTET_STREAM, &bytes);
        assert_eq!(asset.decode_payload().unwrap(), bytes);
    }

    #[test]
    fn test_decode_rejects_non_data_url() {
        let asset = MediaAsset {
            mime_type: "image/png".to_string(),
            encoded_data: "http://example.com/a.png".to_string(),
            original_name: "a.png".to_string(),
        };
        assert!(matches!(asset.decode_payload(), Err(MediaError::Payload(_))));
    }

    #[test]
    fn test_dispatch_by_prefix() {
        assert_eq!(render_mode("image/png"), RenderMode::Image);
        assert_eq!(render_mode("image/gif"), RenderMode::Image);
        assert_eq!(render_mode("video/mp4"), RenderMode::Video);
        assert_eq!(render_mode("audio/mpeg"), RenderMode::Audio);
        assert_eq!(render_mode("text/html"), RenderMode::Document);
        assert_eq!(render_mode("image/svg+xml"), RenderMode::Document);
    }

    #[test]
    fn test_dispatch_unknown_is_unsupported() {
        // Never the image or video path for opaque binaries
        assert_eq!(render_mode(OCTET_STREAM), RenderMode::Unsupported);
        assert_eq!(render_mode("font/woff2"), RenderMode::Unsupported);
        assert_eq!(render_mode(""), RenderMode::Unsupported);
    }
}
