//! Shared data models for the TubeSEO title optimizer.
//!
//! This crate provides Serde-serializable types for:
//! - Title analysis findings and scores
//! - Generated title suggestions
//! - Power word source status
//! - Channel audit records

pub mod analysis;
pub mod audit;
pub mod suggestion;
pub mod words;

// Re-export common types
pub use analysis::{Finding, Severity, TitleAnalysis};
pub use audit::{AuditEntry, UploadRecord};
pub use suggestion::{OptimizeReport, Suggestion};
pub use words::SourceStatus;
