pub mod mime_detect;

pub use mime_detect::{detect_mime_type, is_image, resolve_image_mime, sniff_mime_type};
