//! `netkit.toml` configuration
//!
//! Every key is optional; missing keys fall back to the built-in defaults.
//!
//! ```toml
//! [diff-pair]
//! positive-suffixes = ["_P", "+"]
//! negative-suffixes = ["_N", "-"]
//!
//! [power]
//! include = ["(?i)vdd", "(?i)\\d+v\\d*"]
//! exclude = ["(?i)(en|fb|ctrl)"]
//! ```

use crate::diffpair::{
    DEFAULT_NEGATIVE_SUFFIXES, DEFAULT_POSITIVE_SUFFIXES, DEFAULT_SIMPLE_NEGATIVE_SUFFIXES,
    DEFAULT_SIMPLE_POSITIVE_SUFFIXES,
};
use crate::error::NetkitError;
use crate::nets::{Pattern, POWER_EXCLUDE_REGEX, POWER_INCLUDE_REGEX};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Parsed `netkit.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct NetkitConfig {
    pub diff_pair: DiffPairConfig,
    pub power: PowerConfig,
}

/// Suffix lists for both pair identifiers
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct DiffPairConfig {
    pub positive_suffixes: Vec<String>,
    pub negative_suffixes: Vec<String>,
    pub simple_positive_suffixes: Vec<String>,
    pub simple_negative_suffixes: Vec<String>,
}

impl Default for DiffPairConfig {
    fn default() -> Self {
        let owned = |list: &[&str]| -> Vec<String> { list.iter().map(|s| s.to_string()).collect() };
        Self {
            positive_suffixes: owned(DEFAULT_POSITIVE_SUFFIXES),
            negative_suffixes: owned(DEFAULT_NEGATIVE_SUFFIXES),
            simple_positive_suffixes: owned(DEFAULT_SIMPLE_POSITIVE_SUFFIXES),
            simple_negative_suffixes: owned(DEFAULT_SIMPLE_NEGATIVE_SUFFIXES),
        }
    }
}

/// Regex sources for the power net filter
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PowerConfig {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

impl Default for PowerConfig {
    fn default() -> Self {
        Self {
            include: vec![POWER_INCLUDE_REGEX.as_str().to_string()],
            exclude: vec![POWER_EXCLUDE_REGEX.as_str().to_string()],
        }
    }
}

/// Compiled power filter patterns
#[derive(Debug, Clone)]
pub struct PowerFilter {
    pub include: Vec<Pattern>,
    pub exclude: Vec<Pattern>,
}

impl PowerFilter {
    pub fn apply<S: AsRef<str>>(&self, items: &[S]) -> Vec<String> {
        crate::nets::filter_strings(items, &self.include, &self.exclude)
    }
}

impl NetkitConfig {
    /// Load a config file
    pub fn parse(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config = Self::parse_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse config from string content
    pub fn parse_str(content: &str) -> Result<Self, NetkitError> {
        Ok(toml::from_str(content)?)
    }

    /// Compile the power filter, rejecting invalid regex sources
    pub fn power_filter(&self) -> Result<PowerFilter, NetkitError> {
        let compile = |sources: &[String]| {
            sources
                .iter()
                .map(|s| Pattern::regex(s))
                .collect::<Result<Vec<_>, _>>()
        };

        Ok(PowerFilter {
            include: compile(&self.power.include)?,
            exclude: compile(&self.power.exclude)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = NetkitConfig::parse_str("").unwrap();
        assert_eq!(config, NetkitConfig::default());
        assert_eq!(config.diff_pair.positive_suffixes[0], "_P");
        assert_eq!(config.diff_pair.simple_negative_suffixes.len(), 5);
    }

    #[test]
    fn test_partial_override() {
        let config = NetkitConfig::parse_str(
            r#"
            [diff-pair]
            positive-suffixes = ["_POS"]

            [power]
            exclude = []
            "#,
        )
        .unwrap();

        assert_eq!(config.diff_pair.positive_suffixes, vec!["_POS"]);
        assert_eq!(config.diff_pair.negative_suffixes[0], "_N");
        assert!(config.power.exclude.is_empty());

        let filter = config.power_filter().unwrap();
        assert_eq!(filter.apply(&["VDD_EN", "SDA"]), vec!["VDD_EN"]);
    }

    #[test]
    fn test_default_power_filter_matches_builtin() {
        let filter = NetkitConfig::default().power_filter().unwrap();
        let nets = ["VDD_EN", "3V3", "VCCIO", "RESET"];
        assert_eq!(filter.apply(&nets), crate::nets::filter_power_nets(&nets));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = NetkitConfig::parse_str("[diff-pair]\npositive = [\"P\"]").unwrap_err();
        assert!(matches!(err, NetkitError::ConfigParse(_)));
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        let config = NetkitConfig::parse_str("[power]\ninclude = [\"[\"]").unwrap();
        let err = config.power_filter().unwrap_err();
        assert!(matches!(err, NetkitError::InvalidPattern { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = NetkitConfig::parse(Path::new("/nonexistent/netkit.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/netkit.toml"));
    }
}
