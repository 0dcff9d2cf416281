//! HTTP GET of a source's body via libcurl.

use super::FetchError;
use crate::config::HttpConfig;

/// GET `url` and return the whole response body.
///
/// The body is read to the end regardless of status. A non-2xx status is not an
/// error: the body (an error page, usually) is returned and counted like any
/// other. Only transport failures are returned as `Err`.
/// Blocks the current thread; call from `spawn_blocking` in async code.
pub fn get(url: &str, http: &HttpConfig) -> Result<Vec<u8>, FetchError> {
    let mut body = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.follow_location(http.follow_redirects)?;
    if let Some(agent) = &http.user_agent {
        easy.useragent(agent)?;
    }

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        tracing::warn!(url, code, "non-success HTTP status, counting body anyway");
    }
    tracing::debug!(url, code, bytes = body.len(), "GET complete");
    Ok(body)
}
