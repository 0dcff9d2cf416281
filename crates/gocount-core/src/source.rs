//! Source identifiers: a local path or an HTTP(S) URL, told apart by prefix.

use std::ffi::OsString;
use std::fmt;
use std::path::Path;

/// Literal prefix that routes a source to the HTTP fetcher.
pub const HTTP_SCHEME_PREFIX: &str = "http";

/// Where a source's bytes come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Http,
    File,
}

/// One identifier read from the input.
///
/// `raw` keeps the exact bytes (a path need not be UTF-8); `display` is the
/// lossy UTF-8 form used in result lines and as the URL for HTTP sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    raw: OsString,
    display: String,
    kind: SourceKind,
}

fn classify(bytes: &[u8]) -> SourceKind {
    if bytes.starts_with(HTTP_SCHEME_PREFIX.as_bytes()) {
        SourceKind::Http
    } else {
        SourceKind::File
    }
}

impl Source {
    /// Classify an identifier. Only the literal `http` prefix is checked, so
    /// `https://...` is HTTP and so is a relative file named `httpd.conf`.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        Self {
            kind: classify(raw.as_bytes()),
            display: raw.clone(),
            raw: OsString::from(raw),
        }
    }

    /// Build a source from the raw bytes of an input line.
    #[cfg(unix)]
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        use std::os::unix::ffi::OsStringExt;

        let kind = classify(&bytes);
        let display = String::from_utf8_lossy(&bytes).into_owned();
        Self {
            raw: OsString::from_vec(bytes),
            display,
            kind,
        }
    }

    /// Build a source from the raw bytes of an input line. Off unix, paths
    /// must be text, so invalid UTF-8 is replaced.
    #[cfg(not(unix))]
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self::new(String::from_utf8_lossy(&bytes).into_owned())
    }

    pub fn kind(&self) -> SourceKind {
        self.kind
    }

    /// Lossy UTF-8 form of the identifier.
    pub fn as_str(&self) -> &str {
        &self.display
    }

    /// Filesystem view of the identifier (meaningful for `SourceKind::File`).
    pub fn as_path(&self) -> &Path {
        Path::new(&self.raw)
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}

impl From<&str> for Source {
    fn from(raw: &str) -> Self {
        Source::new(raw)
    }
}

impl From<String> for Source {
    fn from(raw: String) -> Self {
        Source::new(raw)
    }
}
