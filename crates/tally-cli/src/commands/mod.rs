//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `common` - Shared utilities (config loading, CSV ingestion)
//! - `classify` - Classify a single description
//! - `import` - Import and export commands (list lines, write CSV)
//! - `reports` - Per-month summary report
//! - `demo` - Bundled sample statement

pub mod classify;
pub mod common;
pub mod demo;
pub mod import;
pub mod reports;

// Re-export command functions for main.rs
pub use classify::*;
pub use common::*;
pub use demo::*;
pub use import::*;
pub use reports::*;

/// Truncate a string to a maximum length, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
