//! Polarity suffix normalization

use std::collections::HashSet;

/// A normalized list of polarity suffixes.
///
/// Members are trimmed, uppercased, deduplicated and ordered longest first so
/// that `_DP` is always tried before `P`. Empty members are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuffixSet {
    suffixes: Vec<String>,
}

impl SuffixSet {
    /// Normalize a raw suffix list
    pub fn new<S: AsRef<str>>(raw: &[S]) -> Self {
        let mut seen = HashSet::new();
        let mut suffixes: Vec<String> = raw
            .iter()
            .map(|s| s.as_ref().trim().to_uppercase())
            .filter(|s| !s.is_empty())
            .filter(|s| seen.insert(s.clone()))
            .collect();

        // Stable sort keeps first-seen order between equal lengths
        suffixes.sort_by_key(|s| std::cmp::Reverse(s.chars().count()));

        Self { suffixes }
    }

    pub fn is_empty(&self) -> bool {
        self.suffixes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.suffixes.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.suffixes.iter().map(String::as_str)
    }

    pub fn contains(&self, suffix: &str) -> bool {
        self.suffixes.iter().any(|s| s == suffix)
    }

    /// Regex alternation of every suffix, escaped, longest first
    pub fn alternation(&self) -> String {
        self.suffixes
            .iter()
            .map(|s| regex::escape(s))
            .collect::<Vec<_>>()
            .join("|")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_dedupes_and_sorts() {
        let set = SuffixSet::new(&["_p", "+", "_DP", "P", " _h ", "_DP", "DP"]);
        let members: Vec<_> = set.iter().collect();
        assert_eq!(members, vec!["_DP", "_P", "_H", "DP", "+", "P"]);
    }

    #[test]
    fn test_empty_members_dropped() {
        let set = SuffixSet::new(&["", "  ", "n"]);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["N"]);
        assert!(SuffixSet::new::<&str>(&[]).is_empty());
    }

    #[test]
    fn test_alternation_escapes_metacharacters() {
        let set = SuffixSet::new(&["+", "(N)", "."]);
        assert_eq!(set.alternation(), r"\(N\)|\+|\.");
    }

    #[test]
    fn test_contains_uses_normalized_form() {
        let set = SuffixSet::new(&["_dm"]);
        assert!(set.contains("_DM"));
        assert!(!set.contains("_dm"));
    }
}
