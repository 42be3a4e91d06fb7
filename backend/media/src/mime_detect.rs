//! MIME type detection for uploaded images.
//!
//! Browsers and camera captures usually label the upload; files sent from the
//! command line or by bare HTTP clients often arrive without a usable type.

use std::path::Path;

use tracing::debug;

const OCTET_STREAM: &str = "application/octet-stream";

/// Detect MIME type by file extension.
pub fn detect_mime_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png"          => "image/png",
        "gif"          => "image/gif",
        "webp"         => "image/webp",
        "avif"         => "image/avif",
        "heic"         => "image/heic",
        "heif"         => "image/heif",
        "bmp"          => "image/bmp",
        "tiff" | "tif" => "image/tiff",
        _              => OCTET_STREAM,
    }
}

/// Detect an image MIME type from its leading bytes.
pub fn sniff_mime_type(bytes: &[u8]) -> Option<&'static str> {
    match bytes {
        [0xff, 0xd8, 0xff, ..] => Some("image/jpeg"),
        [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, ..] => Some("image/png"),
        [b'G', b'I', b'F', b'8', b'7' | b'9', b'a', ..] => Some("image/gif"),
        [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'E', b'B', b'P', ..] => Some("image/webp"),
        [b'B', b'M', ..] => Some("image/bmp"),
        [b'I', b'I', 0x2a, 0x00, ..] | [b'M', b'M', 0x00, 0x2a, ..] => Some("image/tiff"),
        [_, _, _, _, b'f', b't', b'y', b'p', brand @ ..] if brand.len() >= 4 => {
            match &brand[..4] {
                b"avif" | b"avis" => Some("image/avif"),
                b"heic" | b"heix" | b"heim" | b"heis" => Some("image/heic"),
                b"mif1" | b"msf1" => Some("image/heif"),
                _ => None,
            }
        }
        _ => None,
    }
}

/// Whether a MIME type is for an image.
pub fn is_image(mime: &str) -> bool {
    mime.starts_with("image/")
}

/// Pick the MIME type to send upstream for an uploaded image.
///
/// A declared `image/*` type wins; otherwise the bytes are sniffed, then the
/// file name's extension is tried.
pub fn resolve_image_mime(declared: Option<&str>, file_name: Option<&str>, bytes: &[u8]) -> String {
    if let Some(declared) = declared.map(str::trim).filter(|m| is_image(m)) {
        return declared.to_string();
    }
    let resolved = sniff_mime_type(bytes)
        .or_else(|| {
            file_name
                .map(|name| detect_mime_type(Path::new(name)))
                .filter(|m| is_image(m))
        })
        .unwrap_or(OCTET_STREAM);
    debug!(declared = ?declared, resolved, "Resolved upload MIME type");
    resolved.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn detects_jpeg_extension() {
        assert_eq!(detect_mime_type(&PathBuf::from("photo.JPG")), "image/jpeg");
    }

    #[test]
    fn unknown_extension_fallback() {
        assert_eq!(detect_mime_type(&PathBuf::from("file.xyz")), "application/octet-stream");
    }

    #[test]
    fn sniffs_common_formats() {
        assert_eq!(sniff_mime_type(&[0xff, 0xd8, 0xff, 0xe0]), Some("image/jpeg"));
        assert_eq!(
            sniff_mime_type(b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR"),
            Some("image/png")
        );
        assert_eq!(sniff_mime_type(b"GIF89a...."), Some("image/gif"));
        assert_eq!(sniff_mime_type(b"RIFF\x10\0\0\0WEBPVP8 "), Some("image/webp"));
        assert_eq!(sniff_mime_type(b"\0\0\0\x18ftypheic\0\0\0\0"), Some("image/heic"));
        assert_eq!(sniff_mime_type(b"hello"), None);
        assert_eq!(sniff_mime_type(&[]), None);
    }

    #[test]
    fn declared_image_type_wins() {
        let png = b"\x89PNG\r\n\x1a\n";
        assert_eq!(resolve_image_mime(Some("image/jpeg"), None, png), "image/jpeg");
    }

    #[test]
    fn generic_declared_type_falls_back_to_sniffing() {
        let png = b"\x89PNG\r\n\x1a\n";
        assert_eq!(
            resolve_image_mime(Some("application/octet-stream"), None, png),
            "image/png"
        );
        assert_eq!(resolve_image_mime(None, Some("leaf.webp"), b"????"), "image/webp");
        assert_eq!(resolve_image_mime(None, Some("notes.txt"), b"????"), "application/octet-stream");
    }
}
