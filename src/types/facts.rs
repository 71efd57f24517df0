use super::{Browser, Os};
use serde::Serialize;

/// Facts gathered from a single request by [`RequestInspector::all`].
///
/// Serializes with the keys `os`, `device`, `browser`, `accept_lang`,
/// `referer`, `is_phone` and, when known, `ip`.
///
/// [`RequestInspector::all`]: crate::RequestInspector::all
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Facts {
    pub os: Os<'static>,
    pub device: String,
    pub browser: Browser<'static>,
    /// Language tags in header order, quality weights stripped.
    pub accept_lang: Vec<String>,
    pub referer: String,
    pub is_phone: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
}
