//! Tail-anchored differential pair identification

use super::naming::{resolve_name, Fallback};
use super::{BaseGroups, DiffPair, DiffPairResult, Polarity};
use crate::suffix::SuffixSet;
use regex::Regex;
use std::collections::HashSet;

/// Identify new differential pairs whose polarity suffix ends the net name
///
/// Nets already used by `existing_pairs` are skipped. The longest matching
/// suffix wins, so with the default suffixes `USB_DP` has base `USB` rather
/// than `USB_D`. A new pair whose name clashes with an existing or earlier
/// pair gets `*` markers and is reported in `duplicated_pairs`.
///
/// Examples:
/// - ["CLK_P", "CLK_N"] → normal pair `CLK`
/// - ["CLK_P", "CLK_N"] with existing `CLK` → duplicated pair `CLK*`
pub fn identify_new_diff_pairs<S, P, N>(
    net_list: &[S],
    existing_pairs: &[DiffPair],
    positive_suffixes: &[P],
    negative_suffixes: &[N],
) -> DiffPairResult
where
    S: AsRef<str>,
    P: AsRef<str>,
    N: AsRef<str>,
{
    let positive = SuffixSet::new(positive_suffixes);
    let negative = SuffixSet::new(negative_suffixes);

    let mut result = DiffPairResult {
        existing_pairs: existing_pairs.to_vec(),
        ..Default::default()
    };

    let Some(pattern) = tail_pattern(&positive, &negative) else {
        log::debug!("No polarity suffixes given, nothing to pair");
        return result;
    };

    let occupied: HashSet<&str> = existing_pairs
        .iter()
        .flat_map(|p| [p.positive_net.as_str(), p.negative_net.as_str()])
        .collect();

    let mut seen = HashSet::new();
    let mut groups = BaseGroups::default();

    for net in net_list.iter().map(AsRef::as_ref) {
        if net.is_empty() || !seen.insert(net) || occupied.contains(net) {
            continue;
        }

        let Some(caps) = pattern.captures(net) else {
            continue;
        };
        let base = &caps[1];
        let suffix = caps[2].to_uppercase();

        let polarity = if positive.contains(&suffix) {
            Polarity::Positive
        } else if negative.contains(&suffix) {
            Polarity::Negative
        } else {
            continue;
        };

        log::trace!("{net}: base {base:?}, {polarity:?} suffix {suffix:?}");
        groups.insert(base, net, polarity);
    }

    let mut taken: HashSet<String> = existing_pairs.iter().map(|p| p.name.clone()).collect();

    for (display, p, n) in groups.complete() {
        let resolved = resolve_name(display, &taken, Fallback::Marked);
        taken.insert(resolved.name.clone());

        let pair = DiffPair::new(resolved.name, p, n);
        if resolved.collided {
            result.duplicated_pairs.push(pair);
        } else {
            result.normal_pairs.push(pair);
        }
    }

    log::debug!(
        "Identified {} new pairs ({} renamed) from {} nets, {} existing",
        result.normal_pairs.len() + result.duplicated_pairs.len(),
        result.duplicated_pairs.len(),
        seen.len(),
        existing_pairs.len()
    );

    result
}

/// `^(base)(suffix)$`, case-insensitive, with a lazy base so the longest
/// suffix that ends the name is the one captured
fn tail_pattern(positive: &SuffixSet, negative: &SuffixSet) -> Option<Regex> {
    let alternation = [positive, negative]
        .iter()
        .filter(|set| !set.is_empty())
        .map(|set| set.alternation())
        .collect::<Vec<_>>()
        .join("|");

    if alternation.is_empty() {
        return None;
    }

    // Escaped literals only, so this always compiles
    Regex::new(&format!("(?i)^(.+?)({alternation})$")).ok()
}
