//! Configuration loading for Stencil.
//!
//! The config file lives at `~/.stencil/config.toml` unless `STENCIL_CONFIG`
//! points elsewhere. Raw TOML structs stay private here; callers get resolved
//! domain types from `stencil-types`.

use serde::Deserialize;
use serde_json::{Number, Value};
use std::{
    env,
    ffi::OsString,
    fs, io,
    path::{Path, PathBuf},
};
use stencil_types::{Component, ConfigMap};
use thiserror::Error;

/// Environment variable that overrides the default config path.
pub const CONFIG_PATH_ENV: &str = "STENCIL_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    ParseFile {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Default, Deserialize)]
struct RawComponentConfig {
    name: Option<String>,
    config: Option<toml::Table>,
}

#[derive(Debug, Default, Deserialize)]
struct RawStencilConfig {
    component: Option<RawComponentConfig>,
}

#[derive(Debug, Clone, Default)]
struct ComponentSection {
    name: Option<String>,
    config: Option<ConfigMap>,
}

#[derive(Debug, Clone, Default)]
pub struct StencilConfig {
    component: Option<ComponentSection>,
}

impl StencilConfig {
    /// Load from the default location.
    ///
    /// A missing file is not an error. Read and parse failures are logged and
    /// treated as "no config".
    pub fn load() -> Option<Self> {
        let path = config_path()?;
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file");
            return None;
        }

        match Self::load_from(&path) {
            Ok(config) => Some(config),
            Err(err) => {
                tracing::warn!("{err}");
                None
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::parse(&content).map_err(|err| match err {
            ConfigError::Parse(source) => ConfigError::ParseFile {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;

        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Parse TOML text and expand `${VAR}` references in string values.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let raw: RawStencilConfig = toml::from_str(content)?;
        let component = raw.component.map(|section| ComponentSection {
            name: section.name,
            config: section.config.map(|table| {
                let mut map = table_to_map(table);
                for value in map.values_mut() {
                    expand_value(value, &|name| env::var(name).ok());
                }
                map
            }),
        });
        Ok(Self { component })
    }

    /// Resolve the `[component]` section, if any.
    ///
    /// A section without a `name` is ignored.
    #[must_use]
    pub fn component(&self) -> Option<Component> {
        let raw = self.component.as_ref()?;
        let Some(name) = raw.name.as_deref() else {
            tracing::warn!("[component] section has no name; ignoring it");
            return None;
        };
        Some(Component::with_config(name, raw.config.clone()))
    }

    pub fn path() -> Option<PathBuf> {
        config_path()
    }
}

fn config_path() -> Option<PathBuf> {
    resolve_config_path(env::var_os(CONFIG_PATH_ENV), dirs::home_dir())
}

fn resolve_config_path(override_path: Option<OsString>, home: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path.filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }
    home.map(|home| home.join(".stencil").join("config.toml"))
}

fn table_to_map(table: toml::Table) -> ConfigMap {
    table
        .into_iter()
        .map(|(key, value)| (key, toml_to_json(value)))
        .collect()
}

/// Datetimes become their RFC 3339 text. Non-finite floats have no JSON
/// number form and are kept as their `Display` text.
fn toml_to_json(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::from(i),
        toml::Value::Float(f) => Number::from_f64(f)
            .map(Value::Number)
            .unwrap_or_else(|| Value::String(f.to_string())),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Array(items.into_iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => Value::Object(table_to_map(table)),
    }
}

fn expand_value(value: &mut Value, lookup: &dyn Fn(&str) -> Option<String>) {
    match value {
        Value::String(s) => *s = expand_env_vars_with(s, lookup),
        Value::Array(items) => {
            for item in items {
                expand_value(item, lookup);
            }
        }
        Value::Object(map) => {
            for item in map.values_mut() {
                expand_value(item, lookup);
            }
        }
        Value::Null | Value::Bool(_) | Value::Number(_) => {}
    }
}

/// Replace `${VAR}` with `lookup(VAR)`; unknown variables expand to nothing.
///
/// An unterminated `${` is kept literally.
fn expand_env_vars_with(value: &str, lookup: &dyn Fn(&str) -> Option<String>) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find('}') else {
            out.push_str(&rest[start..]);
            return out;
        };
        let var = &after[..end];
        if !var.is_empty() {
            out.push_str(&lookup(var).unwrap_or_default());
        }
        rest = &after[end + 1..];
    }

    out.push_str(rest);
    out
}
