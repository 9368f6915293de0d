//! Equal-length net groups generated from differential pairs

use super::DiffPair;
use crate::color::ColorRgba;
use serde::{Deserialize, Serialize};

/// Name suffix marking groups that were generated from a pair
pub const PAIR_GROUP_SUFFIX: &str = "_DIFP";

/// Display color for generated groups when the caller gives none
pub const DEFAULT_GROUP_COLOR: ColorRgba = ColorRgba {
    r: 250,
    g: 250,
    b: 250,
    alpha: 1.0,
};

/// An equal-length net group as the host editor creates it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EqualLengthGroup {
    pub name: String,
    pub nets: Vec<String>,
    pub color: ColorRgba,
}

/// One `<pair>_DIFP` group per pair, holding its positive and negative nets
pub fn equal_length_groups(pairs: &[DiffPair], color: Option<ColorRgba>) -> Vec<EqualLengthGroup> {
    let color = color.unwrap_or(DEFAULT_GROUP_COLOR);
    pairs
        .iter()
        .map(|pair| EqualLengthGroup {
            name: format!("{}{PAIR_GROUP_SUFFIX}", pair.name),
            nets: vec![pair.positive_net.clone(), pair.negative_net.clone()],
            color,
        })
        .collect()
}

/// Existing group names that were generated from pairs and should be
/// deleted before regenerating
pub fn stale_pair_groups<S: AsRef<str>>(group_names: &[S]) -> Vec<&str> {
    group_names
        .iter()
        .map(AsRef::as_ref)
        .filter(|name| name.ends_with(PAIR_GROUP_SUFFIX))
        .collect()
}
