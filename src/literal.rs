use regex_syntax::{hir::literal::Extractor, parse};

/// Extract the prefix literals of a regex pattern for use as Aho-Corasick
/// prefilter candidates.
///
/// Any match of `pattern` starts with one of the returned literals, so a rule
/// can be skipped when none of them occur in the input. Returns an empty vec
/// when no such guarantee can be given (unparseable pattern, infinite literal
/// set, or any literal shorter than `min_len`); the rule must then always be
/// tried.
///
/// Literals keep their original case. Matching them ASCII-case-insensitively
/// is a superset of the pattern's own case rules.
pub(crate) fn extract_literals(pattern: &str, min_len: usize) -> Vec<String> {
    let hir = match parse(pattern) {
        Ok(h) => h,
        Err(_) => return Vec::new(),
    };

    let mut extractor = Extractor::new();
    extractor.kind(regex_syntax::hir::literal::ExtractKind::Prefix);

    let seq = extractor.extract(&hir);
    let Some(lits) = seq.literals() else {
        return Vec::new();
    };

    let mut literals = Vec::with_capacity(lits.len());
    for lit in lits {
        // A short literal would make the whole rule a candidate anyway.
        match std::str::from_utf8(lit.as_bytes()) {
            Ok(s) if s.len() >= min_len => literals.push(s.to_string()),
            _ => return Vec::new(),
        }
    }
    literals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_literal() {
        let lits = extract_literals(r"Firefox/([\d.]+)", 3);
        assert!(!lits.is_empty());
        assert!(lits.iter().all(|l| l.starts_with("Firefox/")));
    }

    #[test]
    fn alternation() {
        let lits = extract_literals("(?:iPhone|iPod|Android)", 3);
        assert!(lits.contains(&"iPhone".to_string()));
        assert!(lits.contains(&"iPod".to_string()));
        assert!(lits.contains(&"Android".to_string()));
    }

    #[test]
    fn one_short_branch_disables_prefilter() {
        assert!(extract_literals("Firefox|Go", 3).is_empty());
    }

    #[test]
    fn too_short_returns_empty() {
        let lits = extract_literals(r"\d+\.\d+", 3);
        assert!(lits.is_empty());
    }
}
