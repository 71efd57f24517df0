//! IP geolocation adapters.
//!
//! Each adapter performs one GET request at construction, decodes the JSON
//! body and keeps it in an owned [`AttributeStore`]. Failures surface as
//! [`Error::Service`] and are never retried here.

mod client;
mod ip_registry;
mod ip_whois;

pub use client::*;
pub use ip_registry::IpRegistry;
pub use ip_whois::IpWhoIs;

use crate::attributes::AttributeStore;
use crate::error::{Error, Result};
use indexmap::IndexMap;
use serde_json::Value;
use url::Url;

/// Common surface of the geolocation adapters.
pub trait GeoService {
    /// Look up `ip`. Services that need no key ignore `api_key`.
    fn fetch(client: &dyn HttpClient, ip: &str, api_key: &str) -> Result<Self>
    where
        Self: Sized;

    /// Short service name used in errors and logs.
    fn name(&self) -> &'static str;

    /// The decoded response.
    fn attributes(&self) -> &AttributeStore;

    /// All attributes of the decoded response, in body order.
    fn all(&self) -> &IndexMap<String, Value> {
        self.attributes().all()
    }
}

/// GET `url` and decode the body into a store. `log_url` is the form of the
/// URL safe to log.
fn lookup(
    service: &'static str,
    client: &dyn HttpClient,
    url: &str,
    log_url: &str,
) -> Result<AttributeStore> {
    tracing::debug!(service, url = log_url, "geolocation lookup");

    let body = client.get_text(url).map_err(|e| {
        tracing::warn!(service, error = %e, "geolocation request failed");
        Error::service(service, e)
    })?;

    AttributeStore::from_json_str(&body).map_err(|e| {
        tracing::warn!(service, error = %e, "geolocation response is not a JSON object");
        Error::service(service, e)
    })
}

/// `base_url` with `ip` appended as one percent-encoded path segment.
fn endpoint(service: &'static str, base_url: &str, ip: &str) -> Result<Url> {
    let mut url = Url::parse(base_url).map_err(|e| Error::service(service, e))?;
    url.path_segments_mut()
        .map_err(|()| Error::service(service, "base url cannot take a path"))?
        .pop_if_empty()
        .push(ip);
    Ok(url)
}

#[cfg(test)]
pub(crate) mod stub {
    use super::*;
    use crate::error::BoxError;
    use std::cell::RefCell;

    /// Canned-response client that records requested URLs.
    pub(crate) struct StubClient {
        pub response: std::result::Result<String, String>,
        pub requested: RefCell<Vec<String>>,
    }

    impl StubClient {
        pub fn ok(body: &str) -> Self {
            Self {
                response: Ok(body.to_string()),
                requested: RefCell::new(Vec::new()),
            }
        }

        pub fn failing(message: &str) -> Self {
            Self {
                response: Err(message.to_string()),
                requested: RefCell::new(Vec::new()),
            }
        }
    }

    impl HttpClient for StubClient {
        fn get_text(&self, url: &str) -> std::result::Result<String, BoxError> {
            self.requested.borrow_mut().push(url.to_string());
            self.response.clone().map_err(BoxError::from)
        }
    }
}
