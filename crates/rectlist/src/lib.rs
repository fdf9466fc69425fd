use clap::ValueEnum;

pub mod input;
pub mod list;
pub mod prompt;
pub mod report;
pub mod session;
pub mod utils;

// Re-export the geometry crate for external use
pub use rectlist_geom;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable report
    Text,
    /// JSON report on stdout; prompts move to stderr
    Json,
}
