//! Fetching source contents: HTTP GET for `http*` identifiers, file read otherwise.

mod error;
mod http;

pub use error::FetchError;

use crate::config::HttpConfig;
use crate::source::{Source, SourceKind};

/// Retrieves the raw bytes behind a source. Implementations block; the
/// dispatcher runs them on the blocking pool.
pub trait Fetch: Send + Sync + 'static {
    fn fetch(&self, source: &Source) -> Result<Vec<u8>, FetchError>;
}

/// Production fetcher: libcurl for HTTP sources, `std::fs` for paths.
#[derive(Debug, Clone, Default)]
pub struct SourceFetcher {
    http: HttpConfig,
}

impl SourceFetcher {
    pub fn new(http: HttpConfig) -> Self {
        Self { http }
    }
}

impl Fetch for SourceFetcher {
    fn fetch(&self, source: &Source) -> Result<Vec<u8>, FetchError> {
        match source.kind() {
            SourceKind::Http => http::get(source.as_str(), &self.http),
            SourceKind::File => Ok(std::fs::read(source.as_path())?),
        }
    }
}
