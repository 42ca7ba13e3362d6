//! Catalogue loading
//!
//! The single suspension point of the explorer: one GET of the catalogue.
//! Nothing renders until it resolves.

use testgen_core::{FileRecord, parse_catalogue};

use crate::error::FetchError;

/// Turns a response status and body into a catalogue
///
/// # Errors
///
/// Returns [`FetchError::Status`] for non-2xx statuses and
/// [`FetchError::Decode`] when the body is not a catalogue.
pub fn decode_catalogue(url: &str, status: u16, body: &str) -> Result<Vec<FileRecord>, FetchError> {
    if !(200..300).contains(&status) {
        return Err(FetchError::Status {
            url: url.to_string(),
            status,
        });
    }
    parse_catalogue(body).map_err(|e| FetchError::Decode {
        url: url.to_string(),
        reason: e.to_string(),
    })
}

/// Fetch the catalogue document
///
/// # Errors
///
/// Returns a [`FetchError`] if the request, the status, or the JSON fails.
pub async fn fetch_catalogue(url: &str) -> Result<Vec<FileRecord>, FetchError> {
    #[cfg(target_arch = "wasm32")]
    {
        use gloo_net::http::Request;

        let network = |e: gloo_net::Error| FetchError::Network {
            url: url.to_string(),
            reason: e.to_string(),
        };

        let response = Request::get(url).send().await.map_err(network)?;
        let status = response.status();
        let body = response.text().await.map_err(network)?;
        decode_catalogue(url, status, &body)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        // Outside the browser the path is read from disk
        let body = std::fs::read_to_string(url).map_err(|e| FetchError::Network {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        decode_catalogue(url, 200, &body)
    }
}
