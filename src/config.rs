//! Maze configuration in a `KEY=value` text format
//!
//! One assignment per line; blank lines and `#` comments are ignored
//! and keys are case-insensitive. `SEED` is the only optional key.
//!
//! ```text
//! # 10 x 10 perfect maze
//! WIDTH=10
//! HEIGHT=10
//! ENTRY=0,0
//! EXIT=9,9
//! OUTPUT_FILE=maze.txt
//! PERFECT=true
//! SEED=42
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context};

/// Parsed maze configuration.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct MazeConfig {
    pub width: usize,
    pub height: usize,
    pub entry_point: (usize, usize),
    pub exit_point: (usize, usize),
    pub output_file: PathBuf,
    pub perfect: bool,
    pub seed: Option<u64>,
}

impl MazeConfig {
    /// Read and parse a configuration file.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("cannot read configuration file {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("invalid configuration file {}", path.display()))
    }

    /// Parse configuration from `KEY=value` text.
    pub fn parse(content: &str) -> anyhow::Result<Self> {
        let mut values: HashMap<String, String> = HashMap::new();
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (key, value) = line
                .split_once('=')
                .ok_or_else(|| anyhow!("line is not a KEY=value assignment: '{line}'"))?;
            values.insert(key.trim().to_uppercase(), value.trim().to_string());
        }

        let width = parse_dimension(require(&values, "WIDTH")?, "WIDTH")?;
        let height = parse_dimension(require(&values, "HEIGHT")?, "HEIGHT")?;
        let entry_point = parse_point(require(&values, "ENTRY")?, "ENTRY")?;
        let exit_point = parse_point(require(&values, "EXIT")?, "EXIT")?;
        let output_file = PathBuf::from(require(&values, "OUTPUT_FILE")?);
        let perfect = parse_bool(require(&values, "PERFECT")?, "PERFECT")?;
        let seed = values
            .get("SEED")
            .map(|value| {
                value
                    .parse::<u64>()
                    .with_context(|| format!("invalid SEED value '{value}'"))
            })
            .transpose()?;

        Ok(MazeConfig {
            width,
            height,
            entry_point,
            exit_point,
            output_file,
            perfect,
            seed,
        })
    }
}

fn require<'a>(values: &'a HashMap<String, String>, key: &str) -> anyhow::Result<&'a str> {
    values
        .get(key)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("missing configuration key: {key}"))
}

fn parse_dimension(value: &str, key: &str) -> anyhow::Result<usize> {
    let n: usize = value
        .parse()
        .with_context(|| format!("invalid {key} value '{value}'"))?;
    if n < 1 {
        bail!("{key} must be positive, got {n}");
    }
    Ok(n)
}

fn parse_point(value: &str, key: &str) -> anyhow::Result<(usize, usize)> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| anyhow!("{key} must be 'x,y', got '{value}'"))?;
    Ok((
        x.trim()
            .parse()
            .with_context(|| format!("invalid {key} x coordinate '{}'", x.trim()))?,
        y.trim()
            .parse()
            .with_context(|| format!("invalid {key} y coordinate '{}'", y.trim()))?,
    ))
}

fn parse_bool(value: &str, key: &str) -> anyhow::Result<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => bail!("invalid {key} value '{value}', expected true or false"),
    }
}
