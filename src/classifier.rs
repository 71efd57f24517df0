use super::db;
use super::error::Result;
use super::helpers::{browser_version, os_version};
use super::parser::CompiledParser;
use super::parser_data::*;
use super::types::*;
use std::borrow::Cow;
use std::path::Path;

/// Rule-table user-agent classifier.
///
/// Holds four independent tables (browsers, operating systems, device types and
/// phone markers), each evaluated in declaration order with first-match-wins
/// semantics. Immutable once built; share one instance across requests.
pub struct UserAgentClassifier {
    browser_parser: CompiledParser<BrowserData>,
    os_parser: CompiledParser<OsData>,
    device_parser: CompiledParser<DeviceData>,
    phone_parser: CompiledParser<()>,
}

impl UserAgentClassifier {
    /// Build the classifier from the tables bundled with the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_yaml_strs(db::BROWSERS_YML, db::OSS_YML, db::DEVICES_YML, db::PHONES_YML)
    }

    /// Load `browsers.yml`, `oss.yml`, `devices.yml` and `phones.yml` from
    /// `dir` and build the classifier.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let read = |file: &str| std::fs::read_to_string(dir.join(file));
        Self::from_yaml_strs(
            &read("browsers.yml")?,
            &read("oss.yml")?,
            &read("devices.yml")?,
            &read("phones.yml")?,
        )
    }

    /// Build the classifier from YAML table sources held in memory.
    pub fn from_yaml_strs(browsers: &str, oss: &str, devices: &str, phones: &str) -> Result<Self> {
        let browsers: Vec<db::RuleEntry> = serde_yaml::from_str(browsers)?;
        let oss: Vec<db::RuleEntry> = serde_yaml::from_str(oss)?;
        let devices: Vec<db::RuleEntry> = serde_yaml::from_str(devices)?;
        let phones: db::PatternList = serde_yaml::from_str(phones)?;

        // Compile the four tables concurrently.
        let ((browser_parser, os_parser), (device_parser, phone_parser)) = rayon::join(
            || {
                rayon::join(
                    || {
                        CompiledParser::build(
                            "browsers",
                            browsers.into_iter().map(|b| {
                                (
                                    b.regex,
                                    BrowserData {
                                        name: b.name,
                                        version_template: b.version,
                                    },
                                )
                            }),
                        )
                    },
                    || {
                        CompiledParser::build(
                            "oss",
                            oss.into_iter().map(|o| {
                                (
                                    o.regex,
                                    OsData {
                                        name: o.name,
                                        version_template: o.version,
                                    },
                                )
                            }),
                        )
                    },
                )
            },
            || {
                rayon::join(
                    || {
                        CompiledParser::build(
                            "devices",
                            devices
                                .into_iter()
                                .map(|d| (d.regex, DeviceData { name: d.name })),
                        )
                    },
                    || CompiledParser::build("phones", phones.into_iter().map(|p| (p, ()))),
                )
            },
        );

        Ok(Self {
            browser_parser: browser_parser?,
            os_parser: os_parser?,
            device_parser: device_parser?,
            phone_parser: phone_parser?,
        })
    }

    /// Classify a user-agent string against all tables at once.
    ///
    /// The returned `Detection` borrows from both `self` (rule labels) and `ua`
    /// (captured versions).
    pub fn classify<'a>(&'a self, ua: &'a str) -> Detection<'a> {
        Detection {
            browser: self.browser(ua),
            os: self.os(ua),
            device: self.device(ua),
            is_phone: self.is_phone(ua),
        }
    }

    /// Browser name and version; group 1 of the matching rule is the version.
    pub fn browser<'a>(&'a self, ua: &'a str) -> Browser<'a> {
        match self.browser_parser.match_first(ua) {
            Some(m) => Browser {
                name: Cow::Borrowed(m.data.name.as_str()),
                version: browser_version(m.data.version_template.as_deref(), &m.captures),
            },
            None => Browser::unknown(),
        }
    }

    /// Operating system name and version.
    pub fn os<'a>(&'a self, ua: &'a str) -> Os<'a> {
        match self.os_parser.match_first(ua) {
            Some(m) => Os {
                name: Cow::Borrowed(m.data.name.as_str()),
                version: os_version(m.data.version_template.as_deref(), &m.captures),
            },
            None => Os::unknown(),
        }
    }

    /// Device type label of the first matching device rule.
    pub fn device<'a>(&'a self, ua: &'a str) -> Cow<'a, str> {
        self.device_parser
            .match_first(ua)
            .map(|m| Cow::Borrowed(m.data.name.as_str()))
            .unwrap_or(Cow::Borrowed(UNKNOWN))
    }

    /// Whether any phone marker occurs in `ua`. Independent of [`Self::device`].
    pub fn is_phone(&self, ua: &str) -> bool {
        self.phone_parser.is_match(ua)
    }

    /// Number of rules per table: (browsers, oss, devices, phones).
    pub fn table_sizes(&self) -> (usize, usize, usize, usize) {
        (
            self.browser_parser.len(),
            self.os_parser.len(),
            self.device_parser.len(),
            self.phone_parser.len(),
        )
    }
}
