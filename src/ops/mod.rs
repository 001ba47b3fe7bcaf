//! High-level operations exposed to the service's callers.
//!
//! This module provides the user-facing operations that orchestrate the core
//! functionality: generating summaries and insights from snippets, and reporting
//! service health.

pub mod health;
pub mod summarize;

// Re-export commonly used functions
pub use health::{
    basic_health, debug_info, detailed_health, DebugInfo, DetailedHealthReport, HealthReport,
};
pub use summarize::{generate, generate_for_batch, insights_only, summarize_day, summary_only};
