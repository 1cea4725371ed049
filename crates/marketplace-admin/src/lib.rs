//! Core of the marketplace administration console: seller application review,
//! analytics summaries, and report exports.

pub mod analytics;
pub mod config;
pub mod error;
pub mod reports;
pub mod sellers;
pub mod telemetry;
