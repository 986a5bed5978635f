//! Typed connector configuration field descriptors.
//!
//! Each connector source declares the form fields its setup requires. The
//! wire format is a tagged union; unknown field kinds or missing attributes
//! are deserialization errors rather than runtime shape checks.

use serde::{Deserialize, Serialize};

/// One option of a select/multiselect field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// One tab of a tab-group field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldTab {
    pub id: String,
    pub label: String,
    pub fields: Vec<ConnectorField>,
}

/// A single connector configuration field, one variant per field kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConnectorField {
    Text {
        name: String,
        label: String,
        #[serde(default)]
        optional: bool,
        #[serde(default)]
        is_secret: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        default: Option<String>,
    },
    Select {
        name: String,
        label: String,
        options: Vec<SelectOption>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        default: Option<String>,
    },
    Multiselect {
        name: String,
        label: String,
        options: Vec<SelectOption>,
        #[serde(default)]
        default: Vec<String>,
    },
    Boolean {
        name: String,
        label: String,
        #[serde(default)]
        default: bool,
    },
    Number {
        name: String,
        label: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        default: Option<f64>,
    },
    File {
        name: String,
        label: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        accept: Option<String>,
    },
    TabGroup {
        tabs: Vec<FieldTab>,
    },
}

impl ConnectorField {
    /// Field name, or `None` for container kinds (tab groups).
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Text { name, .. }
            | Self::Select { name, .. }
            | Self::Multiselect { name, .. }
            | Self::Boolean { name, .. }
            | Self::Number { name, .. }
            | Self::File { name, .. } => Some(name),
            Self::TabGroup { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_text_field_with_defaults() {
        let field: ConnectorField =
            serde_json::from_str(r#"{"type":"text","name":"api_key","label":"API key"}"#).unwrap();
        match field {
            ConnectorField::Text {
                name,
                optional,
                is_secret,
                ..
            } => {
                assert_eq!(name, "api_key");
                assert!(!optional);
                assert!(!is_secret);
            },
            other => panic!("expected text field, got {other:?}"),
        }
    }

    #[test]
    fn decodes_nested_tab_group() {
        let raw = r#"{
            "type": "tab_group",
            "tabs": [
                {
                    "id": "auth",
                    "label": "Authentication",
                    "fields": [
                        {"type": "text", "name": "token", "label": "Token", "is_secret": true},
                        {"type": "boolean", "name": "verify_tls", "label": "Verify TLS", "default": true}
                    ]
                }
            ]
        }"#;
        let field: ConnectorField = serde_json::from_str(raw).unwrap();
        let ConnectorField::TabGroup { tabs } = field else {
            panic!("expected tab group");
        };
        assert_eq!(tabs.len(), 1);
        assert_eq!(tabs[0].fields.len(), 2);
        assert_eq!(tabs[0].fields[0].name(), Some("token"));
    }

    #[test]
    fn rejects_unknown_field_kind() {
        let err = serde_json::from_str::<ConnectorField>(
            r#"{"type":"color_picker","name":"x","label":"X"}"#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn rejects_select_without_options() {
        let err =
            serde_json::from_str::<ConnectorField>(r#"{"type":"select","name":"x","label":"X"}"#);
        assert!(err.is_err());
    }

    #[test]
    fn round_trips_multiselect() {
        let field = ConnectorField::Multiselect {
            name: "spaces".into(),
            label: "Spaces".into(),
            options: vec![SelectOption {
                value: "eng".into(),
                label: "Engineering".into(),
            }],
            default: vec!["eng".into()],
        };
        let json = serde_json::to_string(&field).unwrap();
        let back: ConnectorField = serde_json::from_str(&json).unwrap();
        assert_eq!(back, field);
    }
}
