/// Bounded-size previews for selected and fetched media
///
/// Images are decoded and downscaled once, up front, so the view never
/// pays for a full-resolution decode. Videos get a textual placeholder.

use iced::widget::image::Handle;
use image::imageops::FilterType;

use super::encoder::{self, EncodeError};

/// Longest edge of a generated preview, in pixels
const PREVIEW_SIZE: u32 = 256;

/// Widget-ready preview of a media asset
#[derive(Debug, Clone)]
pub enum Preview {
    /// Decoded and downscaled image
    Image(Handle),
    /// Label shown when there is nothing to draw (videos, failed decodes)
    Placeholder(String),
}

/// Errors while turning a stored asset into a preview
#[derive(Debug, thiserror::Error)]
pub enum PreviewError {
    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error("could not decode image: {0}")]
    Decode(#[from] image::ImageError),
}

/// Decode image bytes into a downscaled widget handle
pub fn image_handle(bytes: &[u8]) -> Result<Handle, image::ImageError> {
    let decoded = image::load_from_memory(bytes)?;
    let scaled = decoded.resize(PREVIEW_SIZE, PREVIEW_SIZE, FilterType::Lanczos3);

    let rgba = scaled.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(Handle::from_rgba(width, height, rgba.into_raw()))
}

/// Image preview for a freshly picked file
pub fn from_image_bytes(bytes: &[u8]) -> Result<Preview, image::ImageError> {
    Ok(Preview::Image(image_handle(bytes)?))
}

/// Placeholder preview for assets that are not decoded
pub fn placeholder(file_name: &str, byte_len: usize) -> Preview {
    Preview::Placeholder(format!("{} ({})", file_name, human_size(byte_len)))
}

/// Thumbnail for a pair fetched from the store, straight from its data URI
pub fn thumbnail_from_data_uri(uri: &str) -> Result<Handle, PreviewError> {
    let bytes = encoder::decode_data_uri(uri)?;
    Ok(image_handle(&bytes)?)
}

/// Render a byte count as a short human-readable size
fn human_size(bytes: usize) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    const GB: f64 = MB * 1024.0;

    let bytes = bytes as f64;
    if bytes >= GB {
        format!("{:.1} GB", bytes / GB)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes / MB)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes / KB)
    } else {
        format!("{} B", bytes as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Encode a tiny solid-color PNG in memory
    fn tiny_png() -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(4, 4, image::Rgba([10, 20, 30, 255]));
        let mut buffer = Cursor::new(Vec::new());
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut buffer, image::ImageFormat::Png)
            .unwrap();
        buffer.into_inner()
    }

    #[test]
    fn test_image_preview_from_valid_bytes() {
        let preview = from_image_bytes(&tiny_png()).unwrap();
        assert!(matches!(preview, Preview::Image(_)));
    }

    #[test]
    fn test_image_preview_rejects_garbage() {
        assert!(from_image_bytes(b"definitely not an image").is_err());
    }

    #[test]
    fn test_thumbnail_from_data_uri() {
        use base64::{engine::general_purpose::STANDARD, Engine as _};
        let uri = format!("data:image/png;base64,{}", STANDARD.encode(tiny_png()));

        assert!(thumbnail_from_data_uri(&uri).is_ok());
    }

    #[test]
    fn test_thumbnail_from_malformed_uri_fails() {
        assert!(matches!(
            thumbnail_from_data_uri("data:image/png;base64,???"),
            Err(PreviewError::Encode(_))
        ));
    }

    #[test]
    fn test_placeholder_mentions_name_and_size() {
        let Preview::Placeholder(label) = placeholder("clip.mp4", 3 * 1024 * 1024) else {
            panic!("expected a placeholder");
        };
        assert_eq!(label, "clip.mp4 (3.0 MB)");
    }

    #[test]
    fn test_human_size_units() {
        assert_eq!(human_size(512), "512 B");
        assert_eq!(human_size(2048), "2.0 KB");
        assert_eq!(human_size(5 * 1024 * 1024 + 524_288), "5.5 MB");
    }
}
