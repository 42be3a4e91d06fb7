//! Structured logging for Planty.
//!
//! Console output, optional rolling JSON files, and secret redaction.

pub mod logger;
pub mod redact;

pub use logger::init_logger;
pub use redact::redact_sensitive_data;
