//! The 1x1 transparent PNG served by the pixel endpoint.

use base64::Engine as _;
use std::sync::LazyLock;

/// 1x1 transparent PNG, base64-encoded.
const PIXEL_BASE64: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAQAAAC1HAwCAAAAC0lEQVR4nGNgYAAAAAMAASsJTYQAAAAASUVORK5CYII=";

/// Decoded pixel bytes, shared across all responses.
pub static PIXEL_PNG: LazyLock<Vec<u8>> = LazyLock::new(|| {
    base64::engine::general_purpose::STANDARD
        .decode(PIXEL_BASE64)
        .expect("embedded pixel is valid base64")
});
