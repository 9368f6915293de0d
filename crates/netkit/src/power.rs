//! `power` command

use crate::input::read_nets;
use crate::output::{new_table, print_json};
use crate::Session;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use netkit_core::classify_power_nets;
use std::path::PathBuf;

/// Arguments for the `power` command
#[derive(Args, Debug)]
pub struct PowerArgs {
    /// Net list: one net per line or a JSON array (`-` for stdin)
    #[arg(value_name = "NETS", value_hint = clap::ValueHint::FilePath)]
    pub nets: PathBuf,

    /// Drop nets that do not look like supplies before classifying
    #[arg(long)]
    pub filter: bool,
}

/// Execute the `power` command
pub fn execute(args: PowerArgs, session: &Session) -> Result<()> {
    let mut nets = read_nets(&args.nets)?;

    if args.filter {
        let before = nets.len();
        nets = session.config.power_filter()?.apply(&nets);
        log::info!("Power filter kept {} of {} nets", nets.len(), before);
    }

    let classified = classify_power_nets(&nets);

    if session.host.is_embedded() {
        return print_json(&classified);
    }

    let mut table = new_table(&["Net", "Kind", "Value"]);
    for entry in &classified.explicit {
        table.add_row(vec![entry.net.clone(), "voltage".to_string(), format!("{}V", entry.voltage)]);
    }
    for entry in &classified.rails {
        table.add_row(vec![entry.net.clone(), "rail".to_string(), entry.rail.clone()]);
    }
    println!("{table}");

    if !classified.others.is_empty() {
        println!("{} {}", "Unclassified:".dimmed(), classified.others.join(", "));
    }

    Ok(())
}
