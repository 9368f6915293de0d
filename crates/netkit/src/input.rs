//! Reading net lists and pair files

use anyhow::{Context, Result};
use netkit_core::DiffPair;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Read a whole file, or stdin when the path is `-`
fn read_source(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read from stdin")?;
        return Ok(content);
    }

    fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
}

/// Read a net list: a JSON array of strings or one net per line
pub fn read_nets(path: &Path) -> Result<Vec<String>> {
    let content = read_source(path)?;
    let nets = parse_nets(&content)
        .with_context(|| format!("Failed to parse net list: {}", path.display()))?;
    log::info!("Read {} nets from {}", nets.len(), path.display());
    Ok(nets)
}

fn parse_nets(content: &str) -> Result<Vec<String>> {
    if content.trim_start().starts_with('[') {
        return Ok(serde_json::from_str(content)?);
    }

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Read a JSON file in the host's shape
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = read_source(path)?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse JSON: {}", path.display()))
}

/// Read existing pairs, or none when no file is given
pub fn read_pairs(path: Option<&Path>) -> Result<Vec<DiffPair>> {
    match path {
        Some(path) => read_json(path),
        None => Ok(Vec::new()),
    }
}
