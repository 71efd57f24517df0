use crate::classifier::UserAgentClassifier;
use crate::types::{Browser, Facts, Os};
use std::borrow::Cow;
use std::net::{IpAddr, SocketAddr};

/// Header carrying the proxy chain, leftmost entry nearest the client.
pub const X_FORWARDED_FOR: &str = "x-forwarded-for";

/// Read access to the parts of an inbound request the inspector needs.
pub trait ClientRequest {
    /// Value of header `name`, with repeated headers joined by `", "`.
    /// Bytes that are not valid UTF-8 are replaced, never dropped.
    fn header(&self, name: &str) -> Option<Cow<'_, str>>;

    /// Address of the directly connected peer.
    fn remote_addr(&self) -> Option<Cow<'_, str>>;
}

/// Reads headers from the request and the peer address from a
/// [`SocketAddr`] or [`IpAddr`] request extension.
impl<B> ClientRequest for http::Request<B> {
    fn header(&self, name: &str) -> Option<Cow<'_, str>> {
        let mut values = self
            .headers()
            .get_all(name)
            .iter()
            .map(|v| String::from_utf8_lossy(v.as_bytes()));
        let first = values.next()?;
        match values.next() {
            None => Some(first),
            Some(second) => {
                let mut joined = format!("{first}, {second}");
                for value in values {
                    joined.push_str(", ");
                    joined.push_str(&value);
                }
                Some(Cow::Owned(joined))
            }
        }
    }

    fn remote_addr(&self) -> Option<Cow<'_, str>> {
        let extensions = self.extensions();
        extensions
            .get::<SocketAddr>()
            .map(|addr| addr.ip())
            .or_else(|| extensions.get::<IpAddr>().copied())
            .map(|ip| Cow::Owned(ip.to_string()))
    }
}

/// Extracts client facts from one request.
///
/// Every accessor is a pure function of the request; missing or malformed
/// headers resolve to defaults instead of errors.
pub struct RequestInspector<'a, R: ?Sized> {
    request: &'a R,
    classifier: &'a UserAgentClassifier,
}

impl<'a, R: ClientRequest + ?Sized> RequestInspector<'a, R> {
    pub fn new(request: &'a R, classifier: &'a UserAgentClassifier) -> Self {
        Self {
            request,
            classifier,
        }
    }

    /// Client IP: the first non-empty entry of `X-Forwarded-For`, else the
    /// remote address.
    pub fn ip(&self) -> Option<String> {
        if let Some(forwarded_for) = self.request.header(X_FORWARDED_FOR) {
            if let Some(ip) = forwarded_for
                .split(',')
                .map(str::trim)
                .find(|ip| !ip.is_empty())
            {
                return Some(ip.to_string());
            }
        }
        self.request.remote_addr().map(Cow::into_owned)
    }

    pub fn user_agent(&self) -> Cow<'a, str> {
        self.request
            .header(http::header::USER_AGENT.as_str())
            .unwrap_or(Cow::Borrowed(""))
    }

    /// Language tags from `Accept-Language` in header order, `;q=` weights
    /// dropped.
    ///
    /// A missing header yields a single empty tag, like splitting an empty
    /// string would.
    pub fn accept_langs(&self) -> Vec<String> {
        let header = self
            .request
            .header(http::header::ACCEPT_LANGUAGE.as_str())
            .unwrap_or(Cow::Borrowed(""));
        header
            .split(',')
            .map(|entry| entry.split(';').next().unwrap_or(entry).trim().to_string())
            .collect()
    }

    pub fn referer(&self) -> String {
        self.request
            .header(http::header::REFERER.as_str())
            .map(Cow::into_owned)
            .unwrap_or_default()
    }

    pub fn browser(&self) -> Browser<'static> {
        self.classifier.browser(&self.user_agent()).into_owned()
    }

    pub fn os(&self) -> Os<'static> {
        self.classifier.os(&self.user_agent()).into_owned()
    }

    pub fn device(&self) -> String {
        self.classifier.device(&self.user_agent()).into_owned()
    }

    pub fn is_phone(&self) -> bool {
        self.classifier.is_phone(&self.user_agent())
    }

    /// All facts in one bundle. The user agent is classified once.
    pub fn all(&self) -> Facts {
        let ua = self.user_agent();
        let detection = self.classifier.classify(&ua);
        Facts {
            os: detection.os.into_owned(),
            device: detection.device.into_owned(),
            browser: detection.browser.into_owned(),
            accept_lang: self.accept_langs(),
            referer: self.referer(),
            is_phone: detection.is_phone,
            ip: self.ip(),
        }
    }
}
