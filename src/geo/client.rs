use crate::error::BoxError;
use serde::Deserialize;

/// Outbound HTTP collaborator used by the geolocation adapters.
pub trait HttpClient {
    /// Issue a GET request and return the response body as text.
    fn get_text(&self, url: &str) -> Result<String, BoxError>;
}

impl<T: HttpClient + ?Sized> HttpClient for &T {
    fn get_text(&self, url: &str) -> Result<String, BoxError> {
        (**self).get_text(url)
    }
}

/// Settings for [`ReqwestClient`].
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpClientConfig {
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
    /// `User-Agent` sent with lookups; reqwest's default when `None`.
    pub user_agent: Option<String>,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            user_agent: None,
        }
    }
}

/// Blocking [`HttpClient`] backed by `reqwest`.
#[cfg(feature = "blocking-client")]
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    client: reqwest::blocking::Client,
}

#[cfg(feature = "blocking-client")]
impl ReqwestClient {
    pub fn new(config: &HttpClientConfig) -> crate::Result<Self> {
        let mut builder = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs));
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }
        let client = builder
            .build()
            .map_err(|e| crate::Error::service("http-client", e))?;
        Ok(Self { client })
    }
}

#[cfg(feature = "blocking-client")]
impl HttpClient for ReqwestClient {
    fn get_text(&self, url: &str) -> Result<String, BoxError> {
        let body = self.client.get(url).send()?.error_for_status()?.text()?;
        Ok(body)
    }
}
