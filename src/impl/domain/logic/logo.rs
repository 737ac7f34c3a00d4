use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::entities::PickedImage;

const FALLBACK_MIME: &str = "image/jpeg";

/// Encodes a picked image as an embeddable data URI.
pub fn logo_data_uri(image: &PickedImage) -> String {
    let mime = image
        .mime_type
        .as_deref()
        .filter(|m| !m.trim().is_empty())
        .unwrap_or(FALLBACK_MIME);
    format!("data:{};base64,{}", mime, STANDARD.encode(&image.bytes))
}

/// Checks that `uri` is an image data URI with a decodable base64 payload.
/// Returns a human-readable reason on failure.
pub(crate) fn check_logo_data_uri(uri: &str) -> Result<(), String> {
    let rest = uri
        .strip_prefix("data:")
        .ok_or_else(|| "expected a data URI".to_string())?;
    let (mime, payload) = rest
        .split_once(";base64,")
        .ok_or_else(|| "expected base64 encoding".to_string())?;
    if !mime.starts_with("image/") {
        return Err(format!("unsupported media type '{mime}'"));
    }
    if payload.is_empty() {
        return Err("empty image payload".to_string());
    }
    STANDARD
        .decode(payload)
        .map(|_| ())
        .map_err(|e| format!("payload is not valid base64 ({e})"))
}
