use serde::Serialize;
use std::borrow::Cow;

/// Sentinel used for every field no rule could determine.
pub const UNKNOWN: &str = "Unknown";

/// Everything the classifier derives from one user-agent string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Detection<'a> {
    pub browser: Browser<'a>,
    pub os: Os<'a>,
    pub device: Cow<'a, str>,
    pub is_phone: bool,
}

impl<'a> Detection<'a> {
    pub fn browser(&self) -> &Browser<'a> {
        &self.browser
    }
    pub fn os(&self) -> &Os<'a> {
        &self.os
    }
    pub fn device(&self) -> &str {
        &self.device
    }
    pub fn is_phone(&self) -> bool {
        self.is_phone
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Browser<'a> {
    pub name: Cow<'a, str>,
    pub version: Cow<'a, str>,
}

impl Browser<'_> {
    pub fn unknown() -> Browser<'static> {
        Browser {
            name: Cow::Borrowed(UNKNOWN),
            version: Cow::Borrowed(UNKNOWN),
        }
    }

    pub fn into_owned(self) -> Browser<'static> {
        Browser {
            name: Cow::Owned(self.name.into_owned()),
            version: Cow::Owned(self.version.into_owned()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Os<'a> {
    pub name: Cow<'a, str>,
    pub version: Cow<'a, str>,
}

impl Os<'_> {
    pub fn unknown() -> Os<'static> {
        Os {
            name: Cow::Borrowed(UNKNOWN),
            version: Cow::Borrowed(UNKNOWN),
        }
    }

    pub fn into_owned(self) -> Os<'static> {
        Os {
            name: Cow::Owned(self.name.into_owned()),
            version: Cow::Owned(self.version.into_owned()),
        }
    }
}
