//! Config file tests

use crate::common::write_config;
use serde_json::json;
use stencil_config::{ConfigError, StencilConfig};

#[test]
fn config_file_resolves_component() {
    let file = write_config(
        r#"
[component]
name = "from-file"

[component.config]
retries = 3
nested = { level = "debug" }
"#,
    );

    let config = StencilConfig::load_from(file.path()).unwrap();
    let component = config.component().unwrap();
    assert_eq!(component.name(), "from-file");
    assert_eq!(
        serde_json::to_value(component.describe()).unwrap(),
        json!({
            "name": "from-file",
            "config": { "retries": 3, "nested": { "level": "debug" } }
        })
    );
}

#[test]
fn config_without_component_section() {
    let file = write_config("# nothing here\n");
    let config = StencilConfig::load_from(file.path()).unwrap();
    assert!(config.component().is_none());
}

#[test]
fn parse_error_names_the_file() {
    let file = write_config("[component\n");
    let err = StencilConfig::load_from(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ParseFile { .. }));
    assert!(err.to_string().contains(&file.path().display().to_string()));
}

#[test]
fn datetime_values_describe_as_strings() {
    let file = write_config(
        r#"
[component]
name = "dated"

[component.config]
released = 1979-05-27T07:32:00Z
"#,
    );

    let component = StencilConfig::load_from(file.path())
        .unwrap()
        .component()
        .unwrap();
    assert_eq!(
        serde_json::to_value(component.describe()).unwrap(),
        json!({ "name": "dated", "config": { "released": "1979-05-27T07:32:00Z" } })
    );
}
