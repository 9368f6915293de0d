//! Include/exclude filtering of net names

use crate::error::NetkitError;
use regex::Regex;

/// A single filter pattern: a literal substring or a regular expression
#[derive(Debug, Clone)]
pub enum Pattern {
    /// Case-sensitive substring match
    Substring(String),
    /// Unanchored regex match
    Regex(Regex),
}

impl Pattern {
    /// Compile a regex pattern from user input
    pub fn regex(source: &str) -> Result<Self, NetkitError> {
        Regex::new(source)
            .map(Pattern::Regex)
            .map_err(|source_err| NetkitError::InvalidPattern {
                pattern: source.to_string(),
                source: source_err,
            })
    }

    pub fn substring(text: impl Into<String>) -> Self {
        Pattern::Substring(text.into())
    }

    pub fn is_match(&self, item: &str) -> bool {
        match self {
            Pattern::Substring(text) => item.contains(text.as_str()),
            Pattern::Regex(re) => re.is_match(item),
        }
    }
}

impl From<&str> for Pattern {
    fn from(text: &str) -> Self {
        Pattern::Substring(text.to_string())
    }
}

impl From<Regex> for Pattern {
    fn from(re: Regex) -> Self {
        Pattern::Regex(re)
    }
}

/// Keep items that match any `include` pattern and no `exclude` pattern.
///
/// An empty `include` list accepts every item, so exclusion alone can be used
/// as a deny list.
pub fn filter_strings<S: AsRef<str>>(
    items: &[S],
    include: &[Pattern],
    exclude: &[Pattern],
) -> Vec<String> {
    items
        .iter()
        .map(AsRef::as_ref)
        .filter(|item| {
            let included = include.is_empty() || include.iter().any(|p| p.is_match(item));
            let excluded = exclude.iter().any(|p| p.is_match(item));
            included && !excluded
        })
        .map(str::to_string)
        .collect()
}
