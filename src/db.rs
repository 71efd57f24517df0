use serde::Deserialize;

// ---------------------------------------------------------------------------
// Browsers / Operating Systems / Devices  (regexes/{browsers,oss,devices}.yml)
//
// Format: a YAML sequence, evaluated top to bottom (first-match-wins).
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct RuleEntry {
    pub regex: String,
    pub name: String,
    /// Optional `$N` template; when absent the version comes from the
    /// capture groups directly.
    #[serde(default)]
    pub version: Option<String>,
}

// ---------------------------------------------------------------------------
// Phone markers  (regexes/phones.yml)
//
// Format: a flat YAML sequence of regex patterns, any match counts.
// ---------------------------------------------------------------------------

pub(crate) type PatternList = Vec<String>;

// ---------------------------------------------------------------------------
// Built-in tables, embedded at compile time.
// ---------------------------------------------------------------------------

pub(crate) const BROWSERS_YML: &str = include_str!("../regexes/browsers.yml");
pub(crate) const OSS_YML: &str = include_str!("../regexes/oss.yml");
pub(crate) const DEVICES_YML: &str = include_str!("../regexes/devices.yml");
pub(crate) const PHONES_YML: &str = include_str!("../regexes/phones.yml");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_tables_deserialize() {
        let browsers: Vec<RuleEntry> = serde_yaml::from_str(BROWSERS_YML).unwrap();
        let oss: Vec<RuleEntry> = serde_yaml::from_str(OSS_YML).unwrap();
        let devices: Vec<RuleEntry> = serde_yaml::from_str(DEVICES_YML).unwrap();
        let phones: PatternList = serde_yaml::from_str(PHONES_YML).unwrap();

        assert_eq!(browsers.len(), 5);
        assert_eq!(browsers[0].name, "Internet Explorer");
        assert_eq!(oss.len(), 9);
        assert_eq!(oss.last().unwrap().name, "Linux");
        assert_eq!(devices.len(), 5);
        assert_eq!(phones, vec!["iPhone", "iPod", "Android", "Windows Phone"]);
    }
}
