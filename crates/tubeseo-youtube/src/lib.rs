//! YouTube Data API client.
//!
//! This crate provides the external collaborators of the title engine:
//! - A trending power word hint from the top search result
//! - Competitor tag statistics for a keyword
//! - Recent uploads of a channel for audits

pub mod client;
pub mod error;
pub mod hint;
pub mod types;

pub use client::{YoutubeClient, YoutubeConfig};
pub use error::{YoutubeError, YoutubeResult};
pub use hint::{resolve_trending_word, TrendingHintSource};
