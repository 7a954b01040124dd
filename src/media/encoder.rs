/// File-to-data-URI encoding
///
/// A selected file becomes a `data:<mime>;base64,<payload>` string that
/// embeds directly as a display source and travels inside JSON, so the
/// store never needs a separate binary upload path.

use std::path::{Path, PathBuf};

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

use super::preview::{self, Preview};

/// Which kind of asset a picker slot accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

/// A file converted to a self-contained data URI
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedAsset {
    /// `data:<mime>;base64,<payload>` string
    pub data_uri: String,
    /// Name of the source file, shown next to the picker
    pub file_name: String,
}

/// An encoded asset together with its preview, as produced by one pick
#[derive(Debug, Clone)]
pub struct EncodedMedia {
    pub asset: EncodedAsset,
    pub preview: Preview,
}

/// Errors from encoding or decoding media assets
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    /// The selected file could not be read from disk
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The selected image could not be decoded for its preview
    #[error("could not decode image: {0}")]
    Preview(#[from] image::ImageError),

    /// A stored asset string is not a base64 data URI
    #[error("malformed data URI")]
    InvalidDataUri,

    /// The background encoding task died
    #[error("encoding task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Read a file and turn it into an encoded asset plus its preview.
///
/// The read is asynchronous. Base64 encoding and preview decoding are
/// CPU-bound and run on a blocking thread.
pub async fn encode_media(path: PathBuf, kind: MediaKind) -> Result<EncodedMedia, EncodeError> {
    let bytes = tokio::fs::read(&path).await.map_err(|source| EncodeError::Read {
        path: path.clone(),
        source,
    })?;

    tokio::task::spawn_blocking(move || build_media(&path, bytes, kind)).await?
}

/// Blocking part of [`encode_media`]
fn build_media(path: &Path, bytes: Vec<u8>, kind: MediaKind) -> Result<EncodedMedia, EncodeError> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());

    let preview = match kind {
        MediaKind::Image => preview::from_image_bytes(&bytes)?,
        // Videos are not decoded; the preview is a labelled placeholder
        MediaKind::Video => preview::placeholder(&file_name, bytes.len()),
    };

    let data_uri = encode_bytes(&bytes, mime_for_path(path));

    Ok(EncodedMedia {
        asset: EncodedAsset { data_uri, file_name },
        preview,
    })
}

/// Build a self-contained data URI from raw bytes
fn encode_bytes(bytes: &[u8], mime: &str) -> String {
    format!("data:{};base64,{}", mime, BASE64.encode(bytes))
}

/// Extract the raw bytes from a `data:<mime>;base64,<payload>` string
pub fn decode_data_uri(uri: &str) -> Result<Vec<u8>, EncodeError> {
    let payload = uri
        .strip_prefix("data:")
        .and_then(|rest| rest.split_once(";base64,"))
        .map(|(_, payload)| payload)
        .ok_or(EncodeError::InvalidDataUri)?;

    BASE64.decode(payload).map_err(|_| EncodeError::InvalidDataUri)
}

/// MIME type for a file, derived from its extension
fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        "ogv" => "video/ogg",
        "mov" => "video/quicktime",
        "mkv" => "video/x-matroska",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_lookup_ignores_case() {
        assert_eq!(mime_for_path(Path::new("photo.PNG")), "image/png");
        assert_eq!(mime_for_path(Path::new("clip.Mp4")), "video/mp4");
    }

    #[test]
    fn test_mime_lookup_falls_back_to_octet_stream() {
        assert_eq!(
            mime_for_path(Path::new("mystery.xyz")),
            "application/octet-stream"
        );
        assert_eq!(mime_for_path(Path::new("no_extension")), "application/octet-stream");
    }

    #[test]
    fn test_encode_bytes_builds_a_data_uri() {
        assert_eq!(
            encode_bytes(b"hello", "image/png"),
            "data:image/png;base64,aGVsbG8="
        );
    }

    #[test]
    fn test_decode_data_uri_recovers_the_payload() {
        let bytes = decode_data_uri("data:image/png;base64,aGVsbG8=").unwrap();
        assert_eq!(bytes, b"hello");
    }

    #[test]
    fn test_decode_rejects_strings_without_base64_marker() {
        assert!(matches!(
            decode_data_uri("data:image/png,plain"),
            Err(EncodeError::InvalidDataUri)
        ));
        assert!(matches!(
            decode_data_uri("http://example.com/cat.png"),
            Err(EncodeError::InvalidDataUri)
        ));
    }

    #[test]
    fn test_decode_rejects_invalid_base64() {
        assert!(matches!(
            decode_data_uri("data:image/png;base64,!!!"),
            Err(EncodeError::InvalidDataUri)
        ));
    }

    #[tokio::test]
    async fn test_encode_missing_file_reports_the_path() {
        let result = encode_media(PathBuf::from("/nonexistent/clip.mp4"), MediaKind::Video).await;

        match result {
            Err(EncodeError::Read { path, .. }) => {
                assert_eq!(path, PathBuf::from("/nonexistent/clip.mp4"));
            }
            other => panic!("expected a read error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_encode_video_file_end_to_end() {
        let path = std::env::temp_dir().join(format!("pair-manager-test-{}.mp4", std::process::id()));
        std::fs::write(&path, b"not really a video").unwrap();

        let media = encode_media(path.clone(), MediaKind::Video).await.unwrap();
        std::fs::remove_file(&path).unwrap();

        assert!(media.asset.data_uri.starts_with("data:video/mp4;base64,"));
        assert_eq!(
            decode_data_uri(&media.asset.data_uri).unwrap(),
            b"not really a video"
        );
        assert!(matches!(media.preview, Preview::Placeholder(_)));
    }
}
