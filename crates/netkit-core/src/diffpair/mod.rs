//! Differential pair inference from net names
//!
//! Two identifiers are provided:
//! - [`identify_new_diff_pairs`]: the suffix must be the tail of the net name,
//!   nets already used by existing pairs are skipped and renamed pairs are
//!   reported separately.
//! - [`identify_diff_pairs_simple`]: the suffix may sit anywhere as long as it
//!   is not followed by a letter or digit. A fresh pass that ignores existing
//!   pairs.

mod groups;
mod naming;
mod simple;
mod strict;

use serde::{Deserialize, Serialize};

pub use groups::{
    equal_length_groups, stale_pair_groups, EqualLengthGroup, DEFAULT_GROUP_COLOR, PAIR_GROUP_SUFFIX,
};
pub use naming::{resolve_name, Fallback, ResolvedName, MAX_MARKERS};
pub use simple::identify_diff_pairs_simple;
pub use strict::identify_new_diff_pairs;

/// Positive suffixes used when the caller has no preference
pub const DEFAULT_POSITIVE_SUFFIXES: &[&str] = &["_P", "+", "_DP", "P", "_H", "_DP", "DP"];

/// Negative suffixes used when the caller has no preference
pub const DEFAULT_NEGATIVE_SUFFIXES: &[&str] = &["_N", "-", "_DN", "N", "_L", "_DM", "DM"];

/// Defaults for the simple identifier, where separators are not required
pub const DEFAULT_SIMPLE_POSITIVE_SUFFIXES: &[&str] = &["P", "+", "DP", "H", "DP"];

pub const DEFAULT_SIMPLE_NEGATIVE_SUFFIXES: &[&str] = &["N", "-", "DN", "L", "DM"];

/// A differential pair as the host editor stores it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffPair {
    pub name: String,
    pub positive_net: String,
    pub negative_net: String,
}

impl DiffPair {
    pub fn new(
        name: impl Into<String>,
        positive_net: impl Into<String>,
        negative_net: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            positive_net: positive_net.into(),
            negative_net: negative_net.into(),
        }
    }
}

/// Result of [`identify_new_diff_pairs`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffPairResult {
    /// New pairs whose inferred name clashed and had to be marked
    pub duplicated_pairs: Vec<DiffPair>,
    /// New pairs that kept their inferred name
    pub normal_pairs: Vec<DiffPair>,
    /// The caller's pairs, unchanged
    pub existing_pairs: Vec<DiffPair>,
}

impl DiffPairResult {
    /// All newly identified pairs, normal first
    pub fn new_pairs(&self) -> impl Iterator<Item = &DiffPair> {
        self.normal_pairs.iter().chain(self.duplicated_pairs.iter())
    }
}

/// Transient grouping of nets that share a base name
#[derive(Debug, Default)]
struct BaseGroup<'a> {
    /// Base name as spelled by the first net that created the group
    display: String,
    positive: Option<&'a str>,
    negative: Option<&'a str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Polarity {
    Positive,
    Negative,
}

/// Base groups in creation order, keyed by trimmed uppercase base name
#[derive(Debug, Default)]
struct BaseGroups<'a> {
    order: Vec<BaseGroup<'a>>,
    index: std::collections::HashMap<String, usize>,
}

impl<'a> BaseGroups<'a> {
    /// Record `net` under `base`; the first net per polarity wins
    fn insert(&mut self, base: &str, net: &'a str, polarity: Polarity) {
        let key = base.trim().to_uppercase();
        let idx = match self.index.get(&key) {
            Some(&idx) => idx,
            None => {
                self.order.push(BaseGroup {
                    display: base.to_string(),
                    ..Default::default()
                });
                self.index.insert(key, self.order.len() - 1);
                self.order.len() - 1
            }
        };

        let group = &mut self.order[idx];
        let slot = match polarity {
            Polarity::Positive => &mut group.positive,
            Polarity::Negative => &mut group.negative,
        };
        if slot.is_none() {
            *slot = Some(net);
        } else {
            log::trace!("Ignoring {net}: base {base:?} already has a {polarity:?} net");
        }
    }

    /// Groups holding both polarities, as (display base, positive, negative)
    fn complete(&self) -> impl Iterator<Item = (&str, &'a str, &'a str)> + '_ {
        self.order.iter().filter_map(|g| match (g.positive, g.negative) {
            (Some(p), Some(n)) => Some((g.display.as_str(), p, n)),
            _ => None,
        })
    }
}
