//! Pattern-to-replacement rules.

use std::borrow::Cow;

use regex::Regex;
use tracing::trace;

use crate::error::{Result, RewriteError};

/// A compiled pattern and the template that replaces each match.
///
/// The template may reference capture groups positionally (`$1`, `${1}`).
#[derive(Debug, Clone)]
pub struct Rule {
    name: &'static str,
    pattern: Regex,
    replacement: String,
}

impl Rule {
    /// Compiles a rule.
    ///
    /// # Errors
    ///
    /// Returns [`RewriteError::InvalidPattern`] if `pattern` is not a valid regex.
    pub fn new(name: &'static str, pattern: &str, replacement: impl Into<String>) -> Result<Self> {
        Ok(Self {
            name,
            pattern: compile(name, pattern)?,
            replacement: replacement.into(),
        })
    }

    /// A rule that deletes every match.
    ///
    /// # Errors
    ///
    /// Returns [`RewriteError::InvalidPattern`] if `pattern` is not a valid regex.
    pub fn strip(name: &'static str, pattern: &str) -> Result<Self> {
        Self::new(name, pattern, "")
    }

    /// Returns the rule name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Replaces all non-overlapping matches in `text`.
    ///
    /// Borrows `text` when nothing matched.
    #[must_use]
    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.pattern.replace_all(text, self.replacement.as_str())
    }
}

/// Compiles a regex, tagging failures with the rule name.
///
/// # Errors
///
/// Returns [`RewriteError::InvalidPattern`] if `pattern` is not a valid regex.
pub fn compile(rule: &'static str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| RewriteError::InvalidPattern { rule, source })
}

/// Applies `rules` in order, each to the output of the previous one.
#[must_use]
pub fn apply_all<'t>(rules: &[Rule], text: &'t str) -> Cow<'t, str> {
    let mut current = Cow::Borrowed(text);
    for rule in rules {
        let next = match rule.apply(&current) {
            Cow::Owned(replaced) => Some(replaced),
            Cow::Borrowed(_) => None,
        };
        if let Some(replaced) = next {
            trace!(rule = rule.name(), "Rule matched");
            current = Cow::Owned(replaced);
        }
    }
    current
}

/// Escapes `$` so `value` is inserted literally into a replacement template.
#[must_use]
pub fn escape_replacement(value: &str) -> Cow<'_, str> {
    if value.contains('$') {
        Cow::Owned(value.replace('$', "$$"))
    } else {
        Cow::Borrowed(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_replaces_all_matches() {
        let rule = Rule::new("digits", r"\d+", "N").unwrap();
        assert_eq!(rule.apply("a1 b22 c333"), "aN bN cN");
    }

    #[test]
    fn test_rule_borrows_without_match() {
        let rule = Rule::strip("engine", r"ENGINE=\w+").unwrap();
        assert!(matches!(rule.apply("CREATE TABLE t (a int);"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_rule_capture_groups() {
        let rule = Rule::new("use", r"use `([^`]+)`;", "-- USE $1;").unwrap();
        assert_eq!(rule.apply("use `shop`;"), "-- USE shop;");
    }

    #[test]
    fn test_invalid_pattern_names_rule() {
        let err = Rule::new("broken", r"(unclosed", "").unwrap_err();
        assert!(err.to_string().starts_with("Invalid pattern for rule 'broken'"));
    }

    #[test]
    fn test_rule_keeps_its_name() {
        assert_eq!(Rule::strip("engine", r"ENGINE=\w+").unwrap().name(), "engine");
    }

    #[test]
    fn test_apply_all_is_ordered() {
        let rules = vec![
            Rule::new("a-to-b", "a", "b").unwrap(),
            Rule::new("b-to-c", "b", "c").unwrap(),
        ];
        assert_eq!(apply_all(&rules, "ab"), "cc");
    }

    #[test]
    fn test_escape_replacement() {
        let rule = Rule::new("price", "PRICE", escape_replacement("$5").into_owned()).unwrap();
        assert_eq!(rule.apply("PRICE"), "$5");
    }
}
