/// Media asset handling
///
/// This module handles:
/// - Encoding selected files as self-contained data URIs for upload
/// - Decoding stored data URIs back into raw bytes
/// - Generating bounded-size previews for display

pub mod encoder;
pub mod preview;
