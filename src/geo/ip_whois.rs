use super::{endpoint, lookup, GeoService, HttpClient};
use crate::attributes::AttributeStore;
use crate::error::Result;

/// Lookup against the keyless ipwho.is API.
#[derive(Debug, Clone)]
pub struct IpWhoIs {
    attributes: AttributeStore,
}

impl IpWhoIs {
    pub const SERVICE_URL: &'static str = "http://ipwho.is";
    const NAME: &'static str = "ipwhois";

    /// Query `base_url` instead of the public endpoint.
    pub fn fetch_from(client: &dyn HttpClient, base_url: &str, ip: &str) -> Result<Self> {
        let url = endpoint(Self::NAME, base_url, ip)?;
        let attributes = lookup(Self::NAME, client, url.as_str(), url.as_str())?;
        Ok(Self { attributes })
    }
}

impl GeoService for IpWhoIs {
    fn fetch(client: &dyn HttpClient, ip: &str, _api_key: &str) -> Result<Self> {
        Self::fetch_from(client, Self::SERVICE_URL, ip)
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn attributes(&self) -> &AttributeStore {
        &self.attributes
    }
}
