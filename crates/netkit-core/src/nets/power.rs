//! Power net detection: explicit voltages and named rails

use super::filter::{filter_strings, Pattern};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::LazyLock;

/// Default include pattern for power net candidates
///
/// Matches anywhere in the name:
/// - `1.2v`: digits, dot, digits, v
/// - `1v2`, `5v`: digits, v, optional digits
/// - `vdd*`, `vcc*`: followed by letters or digits
/// - `vbus*`: followed by digits
pub static POWER_INCLUDE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:[0-9]+\.[0-9]+v|[0-9]+v[0-9]*|vdd[a-z0-9]*|vcc[a-z0-9]*|vbus[0-9]*)")
        .unwrap()
});

/// Default exclude pattern: enables, feedback and control nets
pub static POWER_EXCLUDE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(en|fb|ctrl)").unwrap());

/// Voltage written into the name: 1.2v, 1v2, 5v
static EXPLICIT_VOLTAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)([0-9]+\.[0-9]+v|[0-9]+v[0-9]*|[0-9]+v)").unwrap());

/// Named supply rails without a value
static RAIL_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(vdd[a-z0-9]*|vcc[a-z0-9]*|vbus[0-9]*)").unwrap());

static DOTTED_VOLTAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)\.([0-9]+)v$").unwrap());
static INFIX_VOLTAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)v([0-9]+)$").unwrap());
static WHOLE_VOLTAGE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^([0-9]+)v$").unwrap());

/// A net with a voltage written into its name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplicitNet {
    pub net: String,
    pub voltage: f64,
}

/// A net named after a supply rail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RailNet {
    pub net: String,
    pub rail: String,
}

/// Power nets split by how their supply is identified
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedPowerNets {
    pub explicit: Vec<ExplicitNet>,
    pub rails: Vec<RailNet>,
    pub others: Vec<String>,
}

/// Keep power-like net names, dropping enables, feedback and control nets
///
/// Examples:
/// - "VDD_3V3" → kept
/// - "1V8" → kept
/// - "VDD_EN" → dropped (exclusion wins)
/// - "SPI_CLK" → dropped
pub fn filter_power_nets<S: AsRef<str>>(items: &[S]) -> Vec<String> {
    filter_strings(
        items,
        &[Pattern::Regex(POWER_INCLUDE_REGEX.clone())],
        &[Pattern::Regex(POWER_EXCLUDE_REGEX.clone())],
    )
}

/// Parse a voltage token such as `1.2v`, `1v2` or `5v`
///
/// Digits after an infix `v` are a decimal fraction: `1v2` is 1.2 volts.
/// Returns `None` for anything else, including values that overflow to
/// infinity.
pub fn parse_voltage(token: &str) -> Option<f64> {
    let lower = token.to_lowercase();

    let text = if let Some(caps) = DOTTED_VOLTAGE.captures(&lower) {
        format!("{}.{}", &caps[1], &caps[2])
    } else if let Some(caps) = INFIX_VOLTAGE.captures(&lower) {
        format!("{}.{}", &caps[1], &caps[2])
    } else if let Some(caps) = WHOLE_VOLTAGE.captures(&lower) {
        caps[1].to_string()
    } else {
        return None;
    };

    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Classify power nets into explicit voltages, named rails and the rest
///
/// The input is deduplicated and empty names are dropped. An explicit
/// voltage takes priority over a rail name, so "VDD_1V8" is explicit.
pub fn classify_power_nets<S: AsRef<str>>(nets: &[S]) -> ClassifiedPowerNets {
    let mut result = ClassifiedPowerNets::default();
    let mut seen = HashSet::new();

    for net in nets.iter().map(AsRef::as_ref) {
        if net.is_empty() || !seen.insert(net) {
            continue;
        }

        if let Some(token) = EXPLICIT_VOLTAGE.find(net) {
            match parse_voltage(token.as_str()) {
                Some(voltage) => result.explicit.push(ExplicitNet {
                    net: net.to_string(),
                    voltage,
                }),
                None => {
                    log::trace!("Unparseable voltage token {:?} in {net}", token.as_str());
                    result.others.push(net.to_string());
                }
            }
            continue;
        }

        if let Some(rail) = RAIL_NAME.find(net) {
            result.rails.push(RailNet {
                net: net.to_string(),
                rail: rail.as_str().to_uppercase(),
            });
            continue;
        }

        result.others.push(net.to_string());
    }

    log::debug!(
        "Classified power nets: {} explicit, {} rails, {} others",
        result.explicit.len(),
        result.rails.len(),
        result.others.len()
    );

    result
}
