use crate::substitution::substitute;
use crate::types::UNKNOWN;
use std::borrow::Cow;

/// Text of capture group `group`, or the unknown sentinel.
pub(crate) fn capture_or_unknown<'a>(
    captures: &fancy_regex::Captures<'a>,
    group: usize,
) -> Cow<'a, str> {
    captures
        .get(group)
        .map(|m| Cow::Borrowed(m.as_str()))
        .filter(|s| !s.is_empty())
        .unwrap_or(Cow::Borrowed(UNKNOWN))
}

/// Version of a matched OS rule.
///
/// An explicit template wins. Otherwise a single capture group is taken
/// verbatim and two groups are joined as `major.minor`; a rule that captures
/// nothing yields the unknown sentinel.
pub(crate) fn os_version<'a>(
    template: Option<&'a str>,
    captures: &fancy_regex::Captures<'a>,
) -> Cow<'a, str> {
    if let Some(tpl) = template {
        return substitute(tpl, captures).unwrap_or(Cow::Borrowed(UNKNOWN));
    }

    match captures.len().saturating_sub(1) {
        0 => Cow::Borrowed(UNKNOWN),
        1 => capture_or_unknown(captures, 1),
        _ => substitute("$1.$2", captures).unwrap_or(Cow::Borrowed(UNKNOWN)),
    }
}

/// Version of a matched browser rule: the template if any, else group 1.
pub(crate) fn browser_version<'a>(
    template: Option<&'a str>,
    captures: &fancy_regex::Captures<'a>,
) -> Cow<'a, str> {
    match template {
        Some(tpl) => substitute(tpl, captures).unwrap_or(Cow::Borrowed(UNKNOWN)),
        None => capture_or_unknown(captures, 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn caps<'a>(re: &'a fancy_regex::Regex, text: &'a str) -> fancy_regex::Captures<'a> {
        re.captures(text).unwrap().unwrap()
    }

    #[test]
    fn os_version_two_groups_join_major_minor() {
        let re = fancy_regex::Regex::new(r"Mac OS X (\d+)[._](\d+)").unwrap();
        assert_eq!(os_version(None, &caps(&re, "Intel Mac OS X 10_1")), "10.1");
    }

    #[test]
    fn os_version_single_group_verbatim() {
        let re = fancy_regex::Regex::new(r"Android (\d+\.\d+)").unwrap();
        assert_eq!(os_version(None, &caps(&re, "Android 13.0; Pixel")), "13.0");
    }

    #[test]
    fn os_version_without_groups_is_unknown() {
        let re = fancy_regex::Regex::new("Linux").unwrap();
        assert_eq!(os_version(None, &caps(&re, "X11; Linux x86_64")), UNKNOWN);
    }

    #[test]
    fn os_version_template_overrides_groups() {
        let re = fancy_regex::Regex::new(r"Windows NT (\d+)\.(\d+)").unwrap();
        assert_eq!(os_version(Some("$1"), &caps(&re, "Windows NT 6.1")), "6");
    }

    #[test]
    fn browser_version_uses_first_group() {
        let re = fancy_regex::Regex::new(r"Firefox/([\d.]+)").unwrap();
        assert_eq!(browser_version(None, &caps(&re, "Firefox/121.0")), "121.0");
    }

    #[test]
    fn browser_version_without_groups_is_unknown() {
        let re = fancy_regex::Regex::new("Lynx").unwrap();
        assert_eq!(browser_version(None, &caps(&re, "Lynx")), UNKNOWN);
    }
}
