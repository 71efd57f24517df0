use std::borrow::Cow;

/// Replace `$1`, `$2`, ... in a version `template` with capture groups from
/// the regex match. Groups that did not participate expand to nothing, and
/// dots or whitespace left dangling at either end are trimmed.
///
/// Returns `None` when the expansion is empty, so the caller can fall back to
/// the unknown sentinel. Borrows the template when it has no placeholders.
pub(crate) fn substitute<'a>(
    template: &'a str,
    captures: &fancy_regex::Captures<'_>,
) -> Option<Cow<'a, str>> {
    let is_trim = |c: char| c.is_whitespace() || c == '.';

    if !template.contains('$') {
        let trimmed = template.trim_matches(is_trim);
        return (!trimmed.is_empty()).then_some(Cow::Borrowed(trimmed));
    }

    let mut result = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '$' {
            if let Some(idx) = chars.peek().and_then(|d| d.to_digit(10)) {
                chars.next();
                if let Some(m) = captures.get(idx as usize) {
                    result.push_str(m.as_str());
                }
                continue;
            }
        }
        result.push(c);
    }

    let trimmed = result.trim_matches(is_trim);
    if trimmed.is_empty() {
        None
    } else {
        Some(Cow::Owned(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn caps<'a>(re: &'a fancy_regex::Regex, text: &'a str) -> fancy_regex::Captures<'a> {
        re.captures(text).unwrap().unwrap()
    }

    #[test]
    fn basic_substitution() {
        let re = fancy_regex::Regex::new(r"Mac OS X (\d+)[._](\d+)").unwrap();
        let c = caps(&re, "Mac OS X 10_15");
        assert_eq!(substitute("$1.$2", &c).unwrap(), "10.15");
    }

    #[test]
    fn no_placeholders() {
        let re = fancy_regex::Regex::new("Windows NT 10").unwrap();
        let c = caps(&re, "Windows NT 10.0");
        assert_eq!(substitute("10", &c).unwrap(), "10");
    }

    #[test]
    fn missing_group_leaves_no_dangling_dot() {
        let re = fancy_regex::Regex::new(r"Android (\d+)(?:\.(\d+))?").unwrap();
        let c = caps(&re, "Android 14;");
        assert_eq!(substitute("$1.$2", &c).unwrap(), "14");
    }

    #[test]
    fn empty_expansion_is_none() {
        let re = fancy_regex::Regex::new(r"Linux( \d+)?").unwrap();
        let c = caps(&re, "Linux");
        assert!(substitute("$1", &c).is_none());
    }
}
