pub mod config;
pub mod logging;

pub mod counter;
pub mod dispatcher;
pub mod fetch;
pub mod reader;
pub mod report;
pub mod source;

pub use dispatcher::{Dispatcher, RunSummary};
pub use reader::count_sources;
