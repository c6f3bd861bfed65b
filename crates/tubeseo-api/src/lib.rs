//! Axum HTTP API for the title optimizer.
//!
//! This crate provides:
//! - Title analysis with suggestions, tags and a description
//! - Channel audits backed by the YouTube Data API
//! - The active power word list and its source

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;
