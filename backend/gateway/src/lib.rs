//! Planty Gateway HTTP API Server
//!
//! Provides the plant identification endpoint, a health probe, and the
//! browser capture client.

pub mod control_ui;
pub mod error;
pub mod health_api;
pub mod identify;
pub mod server;

pub use error::IdentifyError;
pub use server::{build_router, start_server, GatewayState};
