//! Behavioural properties of the pair identifiers over realistic net lists

use netkit_core::diffpair::{
    identify_diff_pairs_simple, identify_new_diff_pairs, DiffPair, DiffPairResult,
    DEFAULT_NEGATIVE_SUFFIXES, DEFAULT_POSITIVE_SUFFIXES, DEFAULT_SIMPLE_NEGATIVE_SUFFIXES,
    DEFAULT_SIMPLE_POSITIVE_SUFFIXES,
};
use std::collections::HashSet;

/// Nets from a small SoC carrier board
const BOARD_NETS: &[&str] = &[
    "GND",
    "VDD_3V3",
    "USB_DP",
    "USB_DM",
    "PCIE_TX0_P",
    "PCIE_TX0_N",
    "PCIE_RX0_P",
    "PCIE_RX0_N",
    "HDMI_CLK+",
    "HDMI_CLK-",
    "LVDS_A_H",
    "LVDS_A_L",
    "I2C_SDA",
    "I2C_SCL",
    "PWR_GOOD",
    "USB_DP",
];

fn strict(nets: &[&str], existing: &[DiffPair]) -> DiffPairResult {
    identify_new_diff_pairs(nets, existing, DEFAULT_POSITIVE_SUFFIXES, DEFAULT_NEGATIVE_SUFFIXES)
}

#[test]
fn test_board_pairs() {
    let result = strict(BOARD_NETS, &[]);
    assert_eq!(
        result.normal_pairs,
        vec![
            DiffPair::new("USB", "USB_DP", "USB_DM"),
            DiffPair::new("PCIE_TX0", "PCIE_TX0_P", "PCIE_TX0_N"),
            DiffPair::new("PCIE_RX0", "PCIE_RX0_P", "PCIE_RX0_N"),
            DiffPair::new("HDMI_CLK", "HDMI_CLK+", "HDMI_CLK-"),
            DiffPair::new("LVDS_A", "LVDS_A_H", "LVDS_A_L"),
        ]
    );
    assert!(result.duplicated_pairs.is_empty());
}

#[test]
fn test_rerun_with_own_output_pairs_nothing() {
    let first = strict(BOARD_NETS, &[]);
    let existing: Vec<DiffPair> = first.new_pairs().cloned().collect();

    let second = strict(BOARD_NETS, &existing);
    assert!(second.normal_pairs.is_empty());
    assert!(second.duplicated_pairs.is_empty());
    assert_eq!(second.existing_pairs, existing);
}

#[test]
fn test_pair_nets_are_distinct_and_names_unique() {
    let result = strict(BOARD_NETS, &[]);
    let mut names = HashSet::new();
    for pair in result.new_pairs() {
        assert_ne!(pair.positive_net, pair.negative_net);
        assert!(names.insert(pair.name.clone()), "duplicate name {}", pair.name);
    }
}

#[test]
fn test_renamed_pairs_do_not_clash_with_each_other() {
    let existing = vec![DiffPair::new("CLK", "OLD_P", "OLD_N")];
    let result = strict(&["CLK_P", "CLK_N", "CLK*_P", "CLK*_N"], &existing);

    assert_eq!(
        result.duplicated_pairs,
        vec![DiffPair::new("CLK*", "CLK_P", "CLK_N"), DiffPair::new("CLK**", "CLK*_P", "CLK*_N")]
    );
}

#[test]
fn test_host_json_round_trip() {
    let json = r#"[{"name": "USB", "positiveNet": "USB_DP", "negativeNet": "USB_DM"}]"#;
    let existing: Vec<DiffPair> = serde_json::from_str(json).unwrap();

    let result = strict(&["USB_DP", "USB_DM", "CLK_P", "CLK_N"], &existing);
    let value = serde_json::to_value(&result).unwrap();

    assert_eq!(value["normalPairs"][0]["name"], "CLK");
    assert_eq!(value["existingPairs"][0]["positiveNet"], "USB_DP");
    assert_eq!(value["duplicatedPairs"], serde_json::json!([]));
}

#[test]
fn test_simple_variant_on_board() {
    let pairs = identify_diff_pairs_simple(
        BOARD_NETS,
        DEFAULT_SIMPLE_POSITIVE_SUFFIXES,
        DEFAULT_SIMPLE_NEGATIVE_SUFFIXES,
    );
    let names: Vec<_> = pairs.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["USB_", "PCIE_TX0_", "PCIE_RX0_", "HDMI_CLK", "LVDS_A_"]);
}

#[test]
fn test_simple_variant_ignores_existing_pairs() {
    // Unlike the strict identifier there is no exclusion step, so the same
    // nets pair again on every run
    let first = identify_diff_pairs_simple(&["SIG_P", "SIG_N"], &["P"], &["N"]);
    let second = identify_diff_pairs_simple(&["SIG_P", "SIG_N"], &["P"], &["N"]);
    assert_eq!(first, second);
    assert_eq!(first.len(), 1);
}
