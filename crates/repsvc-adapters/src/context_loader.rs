//! Context file parser.
//!
//! Reads a context written as YAML, JSON or TOML and converts it into a typed
//! [`Context`]. Input is loosely typed, so every property is checked on the
//! way in and a wrong type is reported instead of being dropped.
//!
//! # Context file format
//!
//! ```yaml
//! name: web                    # required, may come from the caller
//! properties:
//!   image: nginx               # required
//!   replicas: 3                # required
//!   container_port: 80         # required
//!   container_name: frontend   # optional, defaults to name
//!   namespace: prod            # optional, defaults to "default"
//!   service_port: 8080         # optional
//!   target_port: 80            # optional
//!   protocol: TCP              # optional
//!   external_service: true     # optional
//!   labels:                    # optional
//!     tier: frontend
//! ```

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, instrument};

use repsvc_core::{
    application::{ApplicationError, ports::ContextParser},
    domain::{Context, ContextFormat, DomainError, LabelSet, Properties},
    error::{RepsvcError, RepsvcResult},
};

const KNOWN_PROPERTIES: &[&str] = &[
    "container_name",
    "namespace",
    "protocol",
    "service_port",
    "target_port",
    "container_port",
    "replicas",
    "image",
    "labels",
    "external_service",
];

// ── Manifest types ────────────────────────────────────────────────────────────

/// Deserialised representation of a context file, before type checks.
#[derive(Debug, Default, Deserialize)]
struct ContextManifest {
    #[serde(default)]
    name: Value,
    #[serde(default)]
    properties: Value,
}

// ── Loader ────────────────────────────────────────────────────────────────────

/// Parses context text in any supported [`ContextFormat`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FileContextLoader;

impl FileContextLoader {
    pub fn new() -> Self {
        Self
    }
}

impl ContextParser for FileContextLoader {
    #[instrument(skip_all, fields(format = %format))]
    fn parse(&self, source: &str, format: ContextFormat) -> RepsvcResult<Context> {
        let manifest = parse_manifest(source, format)?;
        manifest_into_context(manifest).map_err(RepsvcError::Domain)
    }
}

fn parse_manifest(source: &str, format: ContextFormat) -> RepsvcResult<ContextManifest> {
    let parsed = match format {
        ContextFormat::Yaml => serde_yaml::from_str(source).map_err(|e| e.to_string()),
        ContextFormat::Json => serde_json::from_str(source).map_err(|e| e.to_string()),
        ContextFormat::Toml => toml::from_str(source).map_err(|e| e.to_string()),
    };

    parsed.map_err(|reason| {
        ApplicationError::ContextParse {
            format: format.as_str(),
            reason,
        }
        .into()
    })
}

// ── Conversion ────────────────────────────────────────────────────────────────

fn manifest_into_context(manifest: ContextManifest) -> Result<Context, DomainError> {
    let name = match manifest.name {
        // Left empty so a caller's overlay can still supply it.
        Value::Null => String::new(),
        Value::String(name) => name,
        other => return Err(wrong_type("name", "a string", &other)),
    };

    let props = match manifest.properties {
        Value::Null => Map::new(),
        Value::Object(map) => map,
        other => return Err(wrong_type("properties", "a mapping", &other)),
    };

    for key in props.keys() {
        if !KNOWN_PROPERTIES.contains(&key.as_str()) {
            debug!(property = %key, "Ignoring unknown property");
        }
    }

    let properties = Properties {
        container_name: string_property(&props, "container_name")?,
        namespace: string_property(&props, "namespace")?,
        protocol: string_property(&props, "protocol")?,
        service_port: int_property(&props, "service_port")?,
        target_port: int_property(&props, "target_port")?,
        container_port: int_property(&props, "container_port")?,
        replicas: int_property(&props, "replicas")?,
        image: string_property(&props, "image")?,
        labels: labels_property(&props)?,
        external_service: bool_property(&props, "external_service")?,
    };

    Ok(Context::new(name).with_properties(properties))
}

fn string_property(props: &Map<String, Value>, key: &str) -> Result<Option<String>, DomainError> {
    match props.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(wrong_type(key, "a string", other)),
    }
}

fn int_property(props: &Map<String, Value>, key: &str) -> Result<Option<i32>, DomainError> {
    match props.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_i64()
            .and_then(|v| i32::try_from(v).ok())
            .map(Some)
            .ok_or_else(|| wrong_type(key, "a 32-bit integer", &Value::Number(n.clone()))),
        Some(other) => Err(wrong_type(key, "an integer", other)),
    }
}

fn bool_property(props: &Map<String, Value>, key: &str) -> Result<Option<bool>, DomainError> {
    match props.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(other) => Err(wrong_type(key, "a boolean", other)),
    }
}

/// Labels must be a mapping; scalar values are stringified, nested values
/// are rejected.
fn labels_property(props: &Map<String, Value>) -> Result<Option<LabelSet>, DomainError> {
    let map = match props.get("labels") {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Object(map)) => map,
        Some(other) => {
            return Err(DomainError::InvalidLabelsType {
                found: describe(other),
            });
        }
    };

    let mut labels = LabelSet::new();
    for (key, value) in map {
        let value = match value {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            other => {
                return Err(DomainError::InvalidLabelsType {
                    found: format!("a mapping whose '{key}' value is {}", describe(other)),
                });
            }
        };
        labels.insert(key.clone(), value);
    }

    Ok(Some(labels))
}

fn wrong_type(field: &str, expected: &'static str, found: &Value) -> DomainError {
    let field = if field == "name" || field == "properties" {
        field.to_string()
    } else {
        format!("properties.{field}")
    };

    DomainError::InvalidFieldType {
        field,
        expected,
        found: describe(found),
    }
}

fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".into(),
        Value::Bool(b) => format!("the boolean {b}"),
        Value::Number(n) => format!("the number {n}"),
        Value::String(s) => format!("the string {s:?}"),
        Value::Array(_) => "a sequence".into(),
        Value::Object(_) => "a mapping".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str, format: ContextFormat) -> RepsvcResult<Context> {
        FileContextLoader::new().parse(source, format)
    }

    fn domain_error(result: RepsvcResult<Context>) -> DomainError {
        match result {
            Err(RepsvcError::Domain(e)) => e,
            other => panic!("expected domain error, got {other:?}"),
        }
    }

    const WEB_YAML: &str = "\
name: web
properties:
  image: nginx
  replicas: 3
  container_port: 80
  labels:
    tier: frontend
";

    #[test]
    fn parses_yaml_context() {
        let ctx = parse(WEB_YAML, ContextFormat::Yaml).unwrap();

        assert_eq!(ctx.name, "web");
        assert_eq!(ctx.properties.image.as_deref(), Some("nginx"));
        assert_eq!(ctx.properties.replicas, Some(3));
        assert_eq!(ctx.properties.container_port, Some(80));
        assert_eq!(ctx.labels().unwrap().get("tier"), Some("frontend"));
        assert_eq!(ctx.properties.external_service, None);
    }

    #[test]
    fn parses_json_context() {
        let source = r#"{
            "name": "web",
            "properties": {"image": "nginx", "replicas": 3, "container_port": 80,
                           "external_service": true, "service_port": 8080}
        }"#;
        let ctx = parse(source, ContextFormat::Json).unwrap();

        assert!(ctx.is_external());
        assert_eq!(ctx.properties.service_port, Some(8080));
    }

    #[test]
    fn parses_toml_context() {
        let source = r#"
name = "web"

[properties]
image = "nginx"
replicas = 3
container_port = 80
namespace = "prod"

[properties.labels]
tier = "frontend"
"#;
        let ctx = parse(source, ContextFormat::Toml).unwrap();

        assert_eq!(ctx.properties.namespace.as_deref(), Some("prod"));
        assert_eq!(ctx.labels().unwrap().get("tier"), Some("frontend"));
    }

    #[test]
    fn properties_may_be_omitted() {
        let ctx = parse("name: web\n", ContextFormat::Yaml).unwrap();
        assert_eq!(ctx, Context::new("web"));
    }

    #[test]
    fn unknown_properties_are_ignored() {
        let ctx = parse(
            "name: web\nproperties:\n  image: nginx\n  cpu: 2\n",
            ContextFormat::Yaml,
        )
        .unwrap();
        assert_eq!(ctx.properties.image.as_deref(), Some("nginx"));
    }

    #[test]
    fn missing_name_loads_as_empty() {
        let ctx = parse("properties:\n  image: nginx\n", ContextFormat::Yaml).unwrap();
        assert_eq!(ctx, Context::new("").with_image("nginx"));
    }

    #[test]
    fn labels_sequence_is_invalid() {
        let err = domain_error(parse(
            "name: web\nproperties:\n  labels: [a, b]\n",
            ContextFormat::Yaml,
        ));
        assert_eq!(
            err,
            DomainError::InvalidLabelsType {
                found: "a sequence".into()
            }
        );
    }

    #[test]
    fn labels_string_is_invalid() {
        let err = domain_error(parse(
            "name: web\nproperties:\n  labels: tier=frontend\n",
            ContextFormat::Yaml,
        ));
        assert!(matches!(err, DomainError::InvalidLabelsType { .. }));
    }

    #[test]
    fn nested_label_value_is_invalid() {
        let err = domain_error(parse(
            "name: web\nproperties:\n  labels:\n    tier:\n      a: b\n",
            ContextFormat::Yaml,
        ));
        assert!(matches!(err, DomainError::InvalidLabelsType { found } if found.contains("tier")));
    }

    #[test]
    fn scalar_label_values_are_stringified() {
        let ctx = parse(
            "name: web\nproperties:\n  labels:\n    version: 2\n    canary: false\n",
            ContextFormat::Yaml,
        )
        .unwrap();
        let labels = ctx.labels().unwrap();
        assert_eq!(labels.get("version"), Some("2"));
        assert_eq!(labels.get("canary"), Some("false"));
    }

    #[test]
    fn string_replicas_is_wrong_type() {
        let err = domain_error(parse(
            "name: web\nproperties:\n  replicas: three\n",
            ContextFormat::Yaml,
        ));
        assert_eq!(
            err,
            DomainError::InvalidFieldType {
                field: "properties.replicas".into(),
                expected: "an integer",
                found: "the string \"three\"".into(),
            }
        );
    }

    #[test]
    fn oversized_port_is_wrong_type() {
        let err = domain_error(parse(
            r#"{"name": "web", "properties": {"container_port": 4294967296}}"#,
            ContextFormat::Json,
        ));
        assert!(matches!(
            err,
            DomainError::InvalidFieldType { expected: "a 32-bit integer", .. }
        ));
    }

    #[test]
    fn numeric_name_is_wrong_type() {
        let err = domain_error(parse("name: 42\n", ContextFormat::Yaml));
        assert!(matches!(err, DomainError::InvalidFieldType { ref field, .. } if field == "name"));
    }

    #[test]
    fn external_service_must_be_boolean() {
        let err = domain_error(parse(
            "name: web\nproperties:\n  external_service: \"yes\"\n",
            ContextFormat::Yaml,
        ));
        assert!(matches!(err, DomainError::InvalidFieldType { expected: "a boolean", .. }));
    }

    #[test]
    fn malformed_text_is_parse_error() {
        let err = parse("{ not json", ContextFormat::Json).unwrap_err();
        assert!(matches!(
            err,
            RepsvcError::Application(ApplicationError::ContextParse { format: "json", .. })
        ));
    }
}
