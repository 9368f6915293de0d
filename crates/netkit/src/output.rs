//! Printing results for a person or for the host bridge

use anyhow::Result;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Table};
use netkit_core::DiffPair;
use serde::Serialize;

/// Pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn new_table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(header.to_vec());
    table
}

/// A titled table of pairs; empty lists print only the title
pub fn print_pairs(title: &str, pairs: &[DiffPair]) {
    println!("{} ({})", title.bold(), pairs.len());
    if pairs.is_empty() {
        return;
    }

    let mut table = new_table(&["Name", "Positive", "Negative"]);
    for pair in pairs {
        table.add_row(vec![&pair.name, &pair.positive_net, &pair.negative_net]);
    }
    println!("{table}");
}
