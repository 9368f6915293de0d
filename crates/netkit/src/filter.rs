//! `filter` command

use crate::input::read_nets;
use crate::output::print_json;
use crate::Session;
use anyhow::Result;
use clap::Args;
use netkit_core::{filter_strings, Pattern};
use std::path::PathBuf;

/// Arguments for the `filter` command
#[derive(Args, Debug)]
pub struct FilterArgs {
    /// Net list: one net per line or a JSON array (`-` for stdin)
    #[arg(value_name = "NETS", value_hint = clap::ValueHint::FilePath)]
    pub nets: PathBuf,

    /// Keep nets matching any of these (repeatable; all nets when omitted)
    #[arg(long, value_name = "PATTERN")]
    pub include: Vec<String>,

    /// Drop nets matching any of these (repeatable)
    #[arg(long, value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Treat patterns as regular expressions instead of substrings
    #[arg(long)]
    pub regex: bool,
}

/// Execute the `filter` command
pub fn execute(args: FilterArgs, session: &Session) -> Result<()> {
    let nets = read_nets(&args.nets)?;

    let compile = |sources: &[String]| -> Result<Vec<Pattern>> {
        sources
            .iter()
            .map(|s| {
                if args.regex {
                    Ok(Pattern::regex(s)?)
                } else {
                    Ok(Pattern::substring(s.as_str()))
                }
            })
            .collect()
    };

    let include = compile(&args.include)?;
    let exclude = compile(&args.exclude)?;
    let kept = filter_strings(&nets, &include, &exclude);

    if session.host.is_embedded() {
        return print_json(&kept);
    }

    for net in &kept {
        println!("{net}");
    }

    Ok(())
}
