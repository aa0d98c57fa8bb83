//! Inbound HTTP subsystem.
//!
//! # Data Flow
//! ```text
//! client request (form-encoded)
//!     → server.rs   (Axum setup, middleware, state)
//!     → handlers.rs (fan-out: provider call ∥ audit write, join)
//!     → JSON response
//! ```

pub mod handlers;
pub mod server;

pub use server::{AppState, HttpServer};
