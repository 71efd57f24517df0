use super::{endpoint, lookup, GeoService, HttpClient};
use crate::attributes::AttributeStore;
use crate::error::Result;

/// Lookup against the ipregistry.co API.
#[derive(Debug, Clone)]
pub struct IpRegistry {
    attributes: AttributeStore,
}

impl IpRegistry {
    pub const SERVICE_URL: &'static str = "https://api.ipregistry.co";
    const NAME: &'static str = "ipregistry";

    /// Query `base_url` instead of the public endpoint.
    pub fn fetch_from(
        client: &dyn HttpClient,
        base_url: &str,
        ip: &str,
        api_key: &str,
    ) -> Result<Self> {
        let mut url = endpoint(Self::NAME, base_url, ip)?;
        let log_url = format!("{url}?key=<redacted>");
        url.query_pairs_mut().append_pair("key", api_key);
        let attributes = lookup(Self::NAME, client, url.as_str(), &log_url)?;
        Ok(Self { attributes })
    }
}

impl GeoService for IpRegistry {
    fn fetch(client: &dyn HttpClient, ip: &str, api_key: &str) -> Result<Self> {
        Self::fetch_from(client, Self::SERVICE_URL, ip, api_key)
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn attributes(&self) -> &AttributeStore {
        &self.attributes
    }
}
