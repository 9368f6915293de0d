use anyhow::Result;
use clap::{Parser, Subcommand};
use netkit_core::{HostContext, NetkitConfig};
use std::path::PathBuf;

mod filter;
mod input;
mod output;
mod pairs;
mod power;
mod render;

#[derive(Parser, Debug)]
#[command(name = "netkit", version, about = "Net name tooling for PCB editor extensions")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to a netkit.toml with suffix and power filter settings
    #[arg(long, global = true, value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
    config: Option<PathBuf>,

    /// Running under the host editor bridge: print JSON for it to consume
    #[arg(long, global = true)]
    host: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Identify differential pairs in a net list
    Pairs(pairs::PairsArgs),

    /// Classify power nets by explicit voltage or rail name
    Power(power::PowerArgs),

    /// Filter a net list with include/exclude patterns
    Filter(filter::FilterArgs),

    /// Equal-length groups for a list of differential pairs
    Groups(pairs::GroupsArgs),

    /// Normalize a color string
    Color(render::ColorArgs),

    /// Render a Markdown file to HTML
    Markdown(render::MarkdownArgs),
}

/// Settings shared by every subcommand
pub struct Session {
    pub host: HostContext,
    pub config: NetkitConfig,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();

    let config = match &cli.config {
        Some(path) => NetkitConfig::parse(path)?,
        None => NetkitConfig::default(),
    };

    let session = Session {
        host: HostContext::new(cli.host),
        config,
    };

    match cli.command {
        Commands::Pairs(args) => pairs::execute(args, &session),
        Commands::Power(args) => power::execute(args, &session),
        Commands::Filter(args) => filter::execute(args, &session),
        Commands::Groups(args) => pairs::execute_groups(args, &session),
        Commands::Color(args) => render::execute_color(args, &session),
        Commands::Markdown(args) => render::execute_markdown(args),
    }
}
