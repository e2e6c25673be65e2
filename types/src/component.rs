//! The placeholder component record.
//!
//! A [`Component`] is a named bag of free-form configuration. It is the piece
//! a new project renames first; nothing here interprets the configuration.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::render::Render;

/// Open-ended configuration: text keys to dynamically typed values.
pub type ConfigMap = Map<String, Value>;

const PROCESSED_PREFIX: &str = "Processed: ";

/// A named component with free-form configuration.
///
/// Invariant: `config` is always present. Omitting it at construction (or
/// in serialized form) yields an empty map, never an unset state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    name: String,
    #[serde(default)]
    config: ConfigMap,
}

impl Component {
    /// Create a component with an empty configuration.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_config(name, None)
    }

    /// Create a component, falling back to an empty map when `config` is `None`.
    #[must_use]
    pub fn with_config(name: impl Into<String>, config: Option<ConfigMap>) -> Self {
        Self {
            name: name.into(),
            config: config.unwrap_or_default(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn config(&self) -> &ConfigMap {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut ConfigMap {
        &mut self.config
    }

    /// Render `data` behind the `Processed: ` prefix.
    ///
    /// See [`Render`] for how values are turned into text; `None` renders as
    /// `None`. Does not read `name` or `config`.
    #[must_use]
    pub fn render(&self, data: impl Render) -> String {
        format!("{PROCESSED_PREFIX}{}", data.render_text())
    }

    /// Borrowed view with exactly two entries: `name` and `config`.
    #[must_use]
    pub fn describe(&self) -> ComponentInfo<'_> {
        ComponentInfo {
            name: &self.name,
            config: &self.config,
        }
    }
}

/// Result of [`Component::describe`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComponentInfo<'a> {
    pub name: &'a str,
    pub config: &'a ConfigMap,
}

impl ComponentInfo<'_> {
    /// Owned JSON object holding the `name` and `config` keys.
    #[must_use]
    pub fn to_value(&self) -> Value {
        let mut map = Map::with_capacity(2);
        map.insert("name".to_string(), Value::String(self.name.to_string()));
        map.insert("config".to_string(), Value::Object(self.config.clone()));
        Value::Object(map)
    }
}
