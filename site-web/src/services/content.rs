//! Content store fetch service.
//!
//! One GET per call, against the populate URL built by [`shared::query`].
//! This is the error boundary for the whole pipeline: every failure mode is
//! normalized to `None` here, so callers see "document or no document" and
//! never an error value or a panic.

use gloo_net::http::Request;
use shared::dto::navigation::{Envelope, NavigationDocument};
use shared::query::navigation_url;

/// Fetch the navigation document, fully populated, in one round trip.
///
/// Returns `None` on transport failure, non-2xx status, a body that does
/// not decode as the expected envelope, or an envelope with `data: null`.
pub async fn fetch_navigation(base_url: &str) -> Option<NavigationDocument> {
    let url = navigation_url(base_url);
    log::info!("Fetching navigation from {url}");

    let response = match Request::get(&url).send().await {
        Ok(resp) => resp,
        Err(err) => {
            log::warn!("Navigation request failed: {err:?}");
            return None;
        }
    };

    if !response.ok() {
        log::warn!("Navigation request returned status {}", response.status());
        return None;
    }

    match response.json::<Envelope<NavigationDocument>>().await {
        Ok(envelope) => {
            if envelope.data.is_none() {
                log::warn!("Navigation document is absent (data: null)");
            }
            envelope.data
        }
        Err(err) => {
            log::warn!("Navigation response did not match the expected shape: {err:?}");
            None
        }
    }
}
