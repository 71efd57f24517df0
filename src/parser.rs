use aho_corasick::AhoCorasick;
use rayon::prelude::*;

use crate::error::Result;
use crate::literal::extract_literals;

/// Shortest literal worth feeding to the prefilter.
const MIN_LITERAL_LEN: usize = 3;

/// A compiled rule: one regex plus its associated data.
pub(crate) struct CompiledRule<T> {
    pub regex: fancy_regex::Regex,
    pub data: T,
}

/// Result of a successful match.
pub(crate) struct MatchResult<'a, T> {
    pub data: &'a T,
    pub captures: fancy_regex::Captures<'a>,
}

// ---------------------------------------------------------------------------
// CompiledParser — ordered first-match-wins table (browsers, OS, devices, phones)
// ---------------------------------------------------------------------------

/// Core matching engine: Aho-Corasick literal prefilter + ordered regex scan.
///
/// `T` is the associated data for each rule (e.g. browser name, OS name, etc.).
pub(crate) struct CompiledParser<T> {
    rules: Vec<CompiledRule<T>>,
    /// Prefilter over the prefix literals of every rule that has any.
    prefilter: Option<AhoCorasick>,
    /// Maps prefilter pattern id → rule index.
    literal_to_rule: Vec<usize>,
    /// Rules without usable literals; always candidates.
    always: Vec<usize>,
}

impl<T> CompiledParser<T> {
    /// Build a CompiledParser from an iterator of (regex_pattern, data) pairs.
    /// Declaration order is preserved and decides precedence.
    pub fn build(
        table: &'static str,
        items: impl IntoIterator<Item = (String, T)>,
    ) -> Result<Self> {
        let (patterns, data): (Vec<String>, Vec<T>) = items.into_iter().unzip();

        let compiled: Vec<(fancy_regex::Regex, Vec<String>)> = patterns
            .par_iter()
            .map(|pattern| -> Result<_> {
                let regex = fancy_regex::Regex::new(pattern)?;
                Ok((regex, extract_literals(pattern, MIN_LITERAL_LEN)))
            })
            .collect::<Result<Vec<_>>>()?;

        let mut rules = Vec::with_capacity(data.len());
        let mut literals: Vec<String> = Vec::new();
        let mut literal_to_rule: Vec<usize> = Vec::new();
        let mut always: Vec<usize> = Vec::new();

        for (idx, ((regex, lits), data)) in compiled.into_iter().zip(data).enumerate() {
            if lits.is_empty() {
                always.push(idx);
            } else {
                literal_to_rule.extend(std::iter::repeat(idx).take(lits.len()));
                literals.extend(lits);
            }
            rules.push(CompiledRule { regex, data });
        }

        let prefilter = if literals.is_empty() {
            None
        } else {
            Some(
                AhoCorasick::builder()
                    .ascii_case_insensitive(true)
                    .build(&literals)?,
            )
        };

        tracing::debug!(
            table,
            rules = rules.len(),
            prefiltered = rules.len() - always.len(),
            "compiled rule table"
        );

        Ok(Self {
            rules,
            prefilter,
            literal_to_rule,
            always,
        })
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Find the first matching rule in declaration order.
    pub fn match_first<'a>(&'a self, ua: &'a str) -> Option<MatchResult<'a, T>> {
        let mut candidate = vec![false; self.rules.len()];
        for &idx in &self.always {
            candidate[idx] = true;
        }
        if let Some(prefilter) = &self.prefilter {
            for m in prefilter.find_overlapping_iter(ua) {
                candidate[self.literal_to_rule[m.pattern().as_usize()]] = true;
            }
        }

        self.rules
            .iter()
            .zip(candidate)
            .enumerate()
            .filter(|(_, (_, is_candidate))| *is_candidate)
            .find_map(|(idx, (rule, _))| match rule.regex.captures(ua) {
                Ok(Some(captures)) => {
                    tracing::trace!(rule = idx, pattern = rule.regex.as_str(), "rule matched");
                    Some(MatchResult {
                        data: &rule.data,
                        captures,
                    })
                }
                Ok(None) => None,
                Err(err) => {
                    tracing::trace!(rule = idx, %err, "rule skipped");
                    None
                }
            })
    }

    /// Whether any rule matches.
    pub fn is_match(&self, ua: &str) -> bool {
        self.match_first(ua).is_some()
    }
}
