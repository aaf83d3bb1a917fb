//! Command-line configuration.
//!
//! Flags are looked up by name anywhere in the argument list:
//!
//! ```text
//! gapscan --map level.txt --width 3 --format json
//! gapscan --demo
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow, bail};

/// Where the tile map comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapSource {
    /// Built-in sample map.
    Demo,
    /// Read from standard input (`--map -`).
    Stdin,
    File(PathBuf),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub source: MapSource,
    /// Fixed-width merge window; `None` skips the fixed-width merge.
    pub width: Option<usize>,
    pub format: OutputFormat,
}

/// Value following `--name`, if the flag is present. Another `--flag` in
/// that position is not a value.
fn flag_value<'a>(args: &'a [String], name: &str) -> Option<&'a str> {
    args.iter()
        .skip_while(|a| *a != name)
        .nth(1)
        .map(String::as_str)
        .filter(|v| !v.starts_with("--"))
}

fn has_flag(args: &[String], name: &str) -> bool {
    args.iter().any(|a| a == name)
}

impl CliConfig {
    /// Parse from process arguments, skipping the program name.
    pub fn from_env() -> Result<Self> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        Self::parse(&args)
    }

    pub fn parse(args: &[String]) -> Result<Self> {
        let demo = has_flag(args, "--demo");
        let source = match (demo, flag_value(args, "--map")) {
            (true, Some(_)) => bail!("--demo and --map are mutually exclusive"),
            (true, None) => MapSource::Demo,
            (false, Some("-")) => MapSource::Stdin,
            (false, Some(path)) => MapSource::File(path.into()),
            (false, None) if has_flag(args, "--map") => bail!("--map needs a path (or - for stdin)"),
            (false, None) => bail!("no tile map given; pass --map <path> or --demo"),
        };

        let width = match flag_value(args, "--width") {
            Some(raw) => Some(
                raw.parse::<usize>()
                    .with_context(|| format!("--width expects a whole number, got {raw:?}"))?,
            ),
            None if has_flag(args, "--width") => bail!("--width needs a value"),
            None => None,
        };

        let format = match flag_value(args, "--format") {
            None | Some("text") => OutputFormat::Text,
            Some("json") => OutputFormat::Json,
            Some(other) => return Err(anyhow!("unknown --format {other:?} (expected text or json)")),
        };

        Ok(Self {
            source,
            width,
            format,
        })
    }
}
