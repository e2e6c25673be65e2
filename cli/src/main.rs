//! Stencil CLI - binary entry point.
//!
//! ```text
//! main() -> Args::parse -> StencilConfig::{load_from, load} -> Component
//!                                                                |
//!                                                                v
//!                                          render(DATA) + describe() on stdout
//! ```
//!
//! Logs go to stderr so stdout only carries program output.

mod args;

use anyhow::{Context, Result};
use std::{env, io};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use args::{Args, USAGE};
use stencil_config::StencilConfig;
use stencil_types::{Component, normalize_case};

const DEFAULT_COMPONENT_NAME: &str = "stencil";

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

fn load_config(args: &Args) -> Result<Option<StencilConfig>> {
    match &args.config {
        Some(path) => StencilConfig::load_from(path)
            .map(Some)
            .with_context(|| format!("loading config from {}", path.display())),
        None => Ok(StencilConfig::load()),
    }
}

fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse(env::args().skip(1))?;
    if args.help {
        println!("{USAGE}");
        return Ok(());
    }

    let config = load_config(&args)?;
    let component = config
        .as_ref()
        .and_then(StencilConfig::component)
        .unwrap_or_else(|| Component::new(DEFAULT_COMPONENT_NAME));
    tracing::info!(
        name = component.name(),
        keys = component.config().len(),
        "Component ready"
    );

    let rendered = component.render(args.data);
    println!("{}", normalize_case(&rendered, args.case));

    let info = serde_json::to_string_pretty(&component.describe())
        .context("serializing component info")?;
    println!("{info}");

    Ok(())
}
