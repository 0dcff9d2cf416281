//! CLI command handlers, one per file.

mod completions;
mod config;
mod count;

pub use completions::run_completions;
pub use config::run_config;
pub use count::run_count;
