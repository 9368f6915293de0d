//! `color` and `markdown` commands

use crate::output::print_json;
use crate::Session;
use anyhow::{Context, Result};
use clap::Args;
use netkit_core::color::{color_to_css_rgba, ColorInput};
use netkit_core::{md_to_html, ColorRgba};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

/// Arguments for the `color` command
#[derive(Args, Debug)]
pub struct ColorArgs {
    /// Hex (`#abc`, `#aabbcc`), CSS `rgb()`/`rgba()`, or a JSON color object
    #[arg(value_name = "COLOR")]
    pub value: String,
}

/// Arguments for the `markdown` command
#[derive(Args, Debug)]
pub struct MarkdownArgs {
    /// Markdown file to render
    #[arg(value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
    pub path: PathBuf,

    /// Write HTML here instead of stdout
    #[arg(short, long, value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

#[derive(Serialize)]
struct ColorReport {
    hex: String,
    css: String,
    eda: ColorRgba,
}

/// JSON objects go through the color shapes; anything else is a CSS string
fn parse_color_arg(value: &str) -> ColorInput {
    if value.trim_start().starts_with('{') {
        if let Ok(input) = serde_json::from_str(value) {
            return input;
        }
        log::warn!("Unrecognized color object {value}, using white");
        return ColorInput::Unknown(serde_json::Value::String(value.to_string()));
    }
    ColorInput::Css(value.to_string())
}

/// Execute the `color` command
pub fn execute_color(args: ColorArgs, session: &Session) -> Result<()> {
    let eda = parse_color_arg(&args.value).normalize();
    let report = ColorReport {
        hex: format!("#{:02x}{:02x}{:02x}", eda.r, eda.g, eda.b),
        css: color_to_css_rgba(&eda),
        eda,
    };

    if session.host.is_embedded() {
        return print_json(&report);
    }

    println!("hex:  {}", report.hex);
    println!("css:  {}", report.css);
    println!("eda:  {}", serde_json::to_string(&report.eda)?);
    Ok(())
}

/// Execute the `markdown` command
pub fn execute_markdown(args: MarkdownArgs) -> Result<()> {
    let md = fs::read_to_string(&args.path)
        .with_context(|| format!("Failed to read Markdown file: {}", args.path.display()))?;
    let html = md_to_html(&md);

    match args.output {
        Some(path) => {
            fs::write(&path, &html)
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
            eprintln!("Wrote {}", path.display());
        }
        None => println!("{html}"),
    }

    Ok(())
}
