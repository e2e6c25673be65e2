//! Command-line argument parsing.

use anyhow::{Result, bail};
use std::path::PathBuf;
use stencil_types::Case;

pub const USAGE: &str = "usage: stencil [--upper] [--config PATH] [DATA]";

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Args {
    pub case: Case,
    pub config: Option<PathBuf>,
    pub data: Option<String>,
    pub help: bool,
}

impl Args {
    pub fn parse<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = Args::default();
        let mut args = args.into_iter();
        let mut flags_done = false;

        while let Some(arg) = args.next() {
            if !flags_done && arg.starts_with('-') && arg != "-" {
                match arg.as_str() {
                    "--" => flags_done = true,
                    "-h" | "--help" => parsed.help = true,
                    "-u" | "--upper" => parsed.case = Case::Upper,
                    "--config" => {
                        let Some(path) = args.next() else {
                            bail!("--config requires a path\n{USAGE}");
                        };
                        parsed.config = Some(PathBuf::from(path));
                    }
                    other => match other.strip_prefix("--config=") {
                        Some(path) if !path.is_empty() => {
                            parsed.config = Some(PathBuf::from(path));
                        }
                        _ => bail!("unknown argument: {other}\n{USAGE}"),
                    },
                }
                continue;
            }

            if parsed.data.is_some() {
                bail!("unexpected extra argument: {arg}\n{USAGE}");
            }
            parsed.data = Some(arg);
        }

        Ok(parsed)
    }
}
