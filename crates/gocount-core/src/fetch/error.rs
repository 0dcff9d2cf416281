//! Per-source fetch failure.

use thiserror::Error;

/// Why a single source could not be fetched. Reported on the error stream;
/// never fatal for the run.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Filesystem read failed (not found, permission denied, is a directory...).
    #[error("{0}")]
    Io(#[from] std::io::Error),
    /// libcurl failed to complete the GET (resolve, connect, TLS, protocol).
    #[error("{0}")]
    Curl(#[from] curl::Error),
}
