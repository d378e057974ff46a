//! Image encoding for data-URI embedding.

use base64::prelude::*;
use std::path::Path;
use tracing::{debug, instrument};

/// Image formats recognised from a file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ImageFormat {
    #[display("image/png")]
    Png,
    #[display("image/jpeg")]
    Jpeg,
    #[display("image/webp")]
    WebP,
    #[display("image/gif")]
    Gif,
}

impl ImageFormat {
    /// Guesses the format from the path's extension, case-insensitively.
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let extension = path.as_ref().extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "png" => Some(ImageFormat::Png),
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            "webp" => Some(ImageFormat::WebP),
            "gif" => Some(ImageFormat::Gif),
            _ => None,
        }
    }

    /// MIME type for this format.
    pub fn mime(&self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::WebP => "image/webp",
            ImageFormat::Gif => "image/gif",
        }
    }
}

/// Reads a file and returns its bytes as standard, unwrapped base64.
///
/// Only the payload is returned; see [`image_data_uri`] for a full `data:` URI.
///
/// # Errors
///
/// The [`std::io::Error`] from opening or reading the file is returned as is.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn encode_image(path: impl AsRef<Path>) -> std::io::Result<String> {
    let bytes = std::fs::read(path.as_ref())?;
    debug!(bytes = bytes.len(), "Encoded image");
    Ok(BASE64_STANDARD.encode(bytes))
}

/// Builds a `data:` URI from a MIME type and a base64 payload.
///
/// # Examples
///
/// ```
/// use uitars_core::data_uri;
///
/// assert_eq!(data_uri("image/png", "iVBORw0KGgo="), "data:image/png;base64,iVBORw0KGgo=");
/// ```
pub fn data_uri(mime: &str, payload: &str) -> String {
    format!("data:{};base64,{}", mime, payload)
}

/// Reads an image file and returns a `data:` URI for it.
///
/// The MIME type comes from the extension; unknown extensions fall back to
/// `application/octet-stream`.
///
/// # Errors
///
/// Propagates the I/O error from [`encode_image`].
pub fn image_data_uri(path: impl AsRef<Path>) -> std::io::Result<String> {
    let path = path.as_ref();
    let mime = ImageFormat::from_path(path)
        .map(|format| format.mime())
        .unwrap_or("application/octet-stream");
    Ok(data_uri(mime, &encode_image(path)?))
}
