//! Boundary-aware differential pair identification

use super::naming::{resolve_name, Fallback};
use super::{BaseGroups, DiffPair, Polarity};
use crate::suffix::SuffixSet;
use std::collections::HashSet;

/// Identify differential pairs whose polarity suffix may sit anywhere in the name
///
/// A suffix only counts where it is not followed by a letter or digit, so
/// `P` never matches inside `PWR`. Positive suffixes are tried before
/// negative ones, longest first. The matched suffix is cut out of the name to
/// form the base. Existing pairs are not consulted.
///
/// Examples:
/// - ["SIG_P", "SIG_N"] → `SIG_`
/// - ["TX_P_0", "TX_N_0"] → `TX__0`
/// - ["PWR", "NRST"] → no pairs
pub fn identify_diff_pairs_simple<S, P, N>(
    net_list: &[S],
    positive_suffixes: &[P],
    negative_suffixes: &[N],
) -> Vec<DiffPair>
where
    S: AsRef<str>,
    P: AsRef<str>,
    N: AsRef<str>,
{
    let positive = SuffixSet::new(positive_suffixes);
    let negative = SuffixSet::new(negative_suffixes);

    if net_list.is_empty() || (positive.is_empty() && negative.is_empty()) {
        return Vec::new();
    }

    let mut seen = HashSet::new();
    let mut groups = BaseGroups::default();

    for net in net_list.iter().map(AsRef::as_ref) {
        if net.is_empty() || !seen.insert(net) {
            continue;
        }

        let found = find_suffix(net, &positive)
            .map(|range| (range, Polarity::Positive))
            .or_else(|| find_suffix(net, &negative).map(|range| (range, Polarity::Negative)));

        let Some(((start, end), polarity)) = found else {
            continue;
        };

        let base = format!("{}{}", &net[..start], &net[end..]);
        log::trace!("{net}: base {base:?}, {polarity:?} suffix {:?}", &net[start..end]);
        groups.insert(&base, net, polarity);
    }

    let mut taken = HashSet::new();
    let mut pairs = Vec::new();

    for (display, p, n) in groups.complete() {
        let desired = if display.is_empty() {
            sanitize_name(p)
        } else {
            display.to_string()
        };

        let resolved = resolve_name(&desired, &taken, Fallback::Numbered);
        taken.insert(resolved.name.clone());
        pairs.push(DiffPair::new(resolved.name, p, n));
    }

    log::debug!("Identified {} pairs from {} nets", pairs.len(), seen.len());

    pairs
}

/// First suffix (longest first) with a bounded occurrence, as a byte range
fn find_suffix(net: &str, suffixes: &SuffixSet) -> Option<(usize, usize)> {
    suffixes.iter().find_map(|suffix| find_bounded(net, suffix))
}

/// Earliest case-insensitive occurrence of `suffix` not followed by a letter or digit
fn find_bounded(net: &str, suffix: &str) -> Option<(usize, usize)> {
    net.char_indices().find_map(|(start, _)| {
        let end = match_upper_at(net, start, suffix)?;
        let bounded = net[end..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_ascii_alphanumeric());
        bounded.then_some((start, end))
    })
}

/// End offset when the uppercased text at `start` begins with `suffix`
fn match_upper_at(net: &str, start: usize, suffix: &str) -> Option<usize> {
    let mut upper = String::new();
    for (offset, c) in net[start..].char_indices() {
        upper.extend(c.to_uppercase());
        if upper.len() >= suffix.len() {
            return (upper == suffix).then_some(start + offset + c.len_utf8());
        }
        if !suffix.starts_with(upper.as_str()) {
            return None;
        }
    }
    None
}

/// Fallback pair name for nets that are nothing but a suffix
fn sanitize_name(net: &str) -> String {
    net.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::super::{DEFAULT_SIMPLE_NEGATIVE_SUFFIXES, DEFAULT_SIMPLE_POSITIVE_SUFFIXES};
    use super::*;

    fn identify(nets: &[&str]) -> Vec<DiffPair> {
        identify_diff_pairs_simple(
            nets,
            DEFAULT_SIMPLE_POSITIVE_SUFFIXES,
            DEFAULT_SIMPLE_NEGATIVE_SUFFIXES,
        )
    }

    #[test]
    fn test_boundary_blocks_mid_token_match() {
        assert_eq!(find_bounded("PWR", "P"), None);
        assert_eq!(find_bounded("SIG_P", "P"), Some((4, 5)));
        assert_eq!(find_bounded("sig_p", "P"), Some((4, 5)));
        assert_eq!(find_bounded("P_PWR", "P"), Some((0, 1)));
    }

    #[test]
    fn test_suffix_removed_from_middle() {
        let pairs = identify(&["TX_P_0", "TX_N_0"]);
        assert_eq!(pairs, vec![DiffPair::new("TX__0", "TX_P_0", "TX_N_0")]);
    }

    #[test]
    fn test_tail_suffix() {
        let pairs = identify(&["SIG_P", "SIG_N", "PWR", "NRST"]);
        assert_eq!(pairs, vec![DiffPair::new("SIG_", "SIG_P", "SIG_N")]);
    }

    #[test]
    fn test_longest_suffix_tried_first() {
        let pairs = identify(&["USBDP", "USBDM"]);
        assert_eq!(pairs, vec![DiffPair::new("USB", "USBDP", "USBDM")]);
    }

    #[test]
    fn test_positive_checked_before_negative() {
        // "A-+" carries both markers at a boundary; it lands on the positive side
        let pairs = identify_diff_pairs_simple(&["A-+", "A--"], &["+"], &["-"]);
        assert_eq!(pairs, vec![DiffPair::new("A-", "A-+", "A--")]);
    }

    #[test]
    fn test_bare_suffix_nets_use_sanitized_name() {
        let pairs = identify(&["+", "-"]);
        assert_eq!(pairs, vec![DiffPair::new("_", "+", "-")]);
    }

    #[test]
    fn test_name_collision_markers() {
        // Base "_" and the sanitized name of the bare "+"/"-" group coincide
        let pairs = identify(&["_P", "_N", "+", "-"]);
        let names: Vec<_> = pairs.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["_", "_*"]);
    }

    #[test]
    fn test_case_variants_share_a_group() {
        let pairs = identify(&["XP", "X N", "xn"]);
        assert_eq!(pairs, vec![DiffPair::new("X", "XP", "X N")]);
    }

    #[test]
    fn test_empty_inputs() {
        assert!(identify(&[]).is_empty());
        let empty: &[&str] = &[];
        assert!(identify_diff_pairs_simple(&["A_P", "A_N"], empty, empty).is_empty());
    }
}
