//! `pairs` and `groups` commands

use crate::input::{read_json, read_nets, read_pairs};
use crate::output::{new_table, print_json, print_pairs};
use crate::Session;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use netkit_core::color::{color_to_css_rgba, to_eda_color};
use netkit_core::diffpair::{
    equal_length_groups, identify_diff_pairs_simple, identify_new_diff_pairs, stale_pair_groups,
};
use netkit_core::{DiffPair, EqualLengthGroup};
use serde::Serialize;
use std::path::PathBuf;

/// Arguments for the `pairs` command
#[derive(Args, Debug)]
pub struct PairsArgs {
    /// Net list: one net per line or a JSON array (`-` for stdin)
    #[arg(value_name = "NETS", value_hint = clap::ValueHint::FilePath)]
    pub nets: PathBuf,

    /// JSON file with pairs already defined in the design
    #[arg(long, value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
    pub existing: Option<PathBuf>,

    /// Match suffixes anywhere in the name instead of only at the end
    #[arg(long, conflicts_with = "existing")]
    pub simple: bool,

    /// Positive suffixes, overriding the config (repeatable)
    #[arg(long = "positive", value_name = "SUFFIX")]
    pub positive: Vec<String>,

    /// Negative suffixes, overriding the config (repeatable)
    #[arg(long = "negative", value_name = "SUFFIX")]
    pub negative: Vec<String>,
}

/// Arguments for the `groups` command
#[derive(Args, Debug)]
pub struct GroupsArgs {
    /// JSON file with differential pairs
    #[arg(value_name = "PAIRS", value_hint = clap::ValueHint::FilePath)]
    pub pairs: PathBuf,

    /// Group color (hex or CSS rgb)
    #[arg(long, value_name = "COLOR")]
    pub color: Option<String>,

    /// JSON array of group names already in the design; generated ones are
    /// listed for deletion
    #[arg(long, value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
    pub existing_groups: Option<PathBuf>,
}

/// Groups to delete and create, as handed to the host
#[derive(Serialize)]
struct GroupPlan<'a> {
    delete: Vec<&'a str>,
    create: Vec<EqualLengthGroup>,
}

/// Execute the `pairs` command
pub fn execute(args: PairsArgs, session: &Session) -> Result<()> {
    let nets = read_nets(&args.nets)?;
    let suffixes = &session.config.diff_pair;

    if args.simple {
        let positive = pick(&args.positive, &suffixes.simple_positive_suffixes);
        let negative = pick(&args.negative, &suffixes.simple_negative_suffixes);
        let pairs = identify_diff_pairs_simple(&nets, &positive, &negative);

        if session.host.is_embedded() {
            return print_json(&pairs);
        }
        print_pairs("Pairs", &pairs);
        return Ok(());
    }

    let positive = pick(&args.positive, &suffixes.positive_suffixes);
    let negative = pick(&args.negative, &suffixes.negative_suffixes);
    let existing = read_pairs(args.existing.as_deref())?;
    let result = identify_new_diff_pairs(&nets, &existing, &positive, &negative);

    if session.host.is_embedded() {
        return print_json(&result);
    }

    print_pairs("New pairs", &result.normal_pairs);
    print_pairs("Renamed pairs", &result.duplicated_pairs);
    if !result.duplicated_pairs.is_empty() {
        eprintln!(
            "{}",
            "Renamed pairs clash with existing names; review them before applying".yellow()
        );
    }
    println!("{} existing pairs left untouched", result.existing_pairs.len());

    Ok(())
}

/// Suffixes given on the command line win over the configured ones
fn pick(given: &[String], configured: &[String]) -> Vec<String> {
    if given.is_empty() {
        configured.to_vec()
    } else {
        given.to_vec()
    }
}

/// Execute the `groups` command
pub fn execute_groups(args: GroupsArgs, session: &Session) -> Result<()> {
    let pairs: Vec<DiffPair> = read_json(&args.pairs)?;
    let color = args.color.as_deref().map(to_eda_color);
    let groups = equal_length_groups(&pairs, color);

    let existing: Vec<String> = match &args.existing_groups {
        Some(path) => read_json(path)?,
        None => Vec::new(),
    };
    let stale = stale_pair_groups(&existing);

    if session.host.is_embedded() {
        return print_json(&GroupPlan {
            delete: stale,
            create: groups,
        });
    }

    for name in &stale {
        println!("{} {name}", "delete".red());
    }

    let mut table = new_table(&["Group", "Nets", "Color"]);
    for group in &groups {
        table.add_row(vec![group.name.clone(), group.nets.join(", "), color_to_css_rgba(&group.color)]);
    }
    println!("{table}");

    Ok(())
}
