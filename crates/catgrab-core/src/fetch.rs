//! Blocking HTTP GET boundary (libcurl).
//!
//! `fetch_page` retrieves the listing page once up front; `fetch_bytes`
//! retrieves one image body per download task. Both run in the current
//! thread; call from `spawn_blocking` when driving them from async code.

use std::time::Duration;

use crate::error::FetchError;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// GET the listing page and return its body as (lossy) UTF-8 text.
/// A failure here is fatal for the whole run: no records, no downloads.
pub fn fetch_page(url: &str) -> Result<String, FetchError> {
    let bytes = fetch_bytes(url, None)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// GET one URL and return the raw body. No content-type or size validation.
///
/// Follows redirects. `timeout` bounds the whole transfer; `None` leaves the
/// transfer unbounded (baseline behavior), so a hung server blocks the
/// calling worker.
pub fn fetch_bytes(url: &str, timeout: Option<Duration>) -> Result<Vec<u8>, FetchError> {
    let mut body = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(CONNECT_TIMEOUT)?;
    if let Some(t) = timeout {
        easy.timeout(t)?;
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
        return Err(FetchError::Http {
            url: url.to_string(),
            code,
        });
    }
    Ok(body)
}
