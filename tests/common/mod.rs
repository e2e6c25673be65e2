//! Shared test utilities and fixtures
//!
//! Common infrastructure for integration tests.

#![allow(dead_code)]

use serde_json::{Value, json};
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output};
use stencil_types::ConfigMap;
use tempfile::NamedTempFile;

/// A small configuration map with mixed value types.
pub fn sample_config() -> ConfigMap {
    match json!({ "retries": 3, "tags": ["a", "b"] }) {
        Value::Object(map) => map,
        _ => unreachable!("literal is an object"),
    }
}

/// Write `content` to a temporary `.toml` file that lives as long as the handle.
pub fn write_config(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("create temp config");
    file.write_all(content.as_bytes()).expect("write temp config");
    file
}

/// Run the `stencil` binary with the default config location pointed at `home_config`.
///
/// `RUST_LOG` is cleared so stderr noise does not depend on the caller's environment.
pub fn run_stencil(args: &[&str], home_config: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_stencil"))
        .args(args)
        .env("STENCIL_CONFIG", home_config)
        .env_remove("RUST_LOG")
        .output()
        .expect("spawn stencil binary")
}

pub fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}
