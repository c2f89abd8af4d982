//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Fx.
//! The Fx project belongs to the Dunimd Team.

use serde_json::{json, Value};

use fx::{FxError, FxFieldSchema, FxFormSchema, FxValidationEntry};

#[test]
fn test_form_schema_defaults() {
    let schema = FxFormSchema::from_value(&json!({})).unwrap();
    assert!(schema.name.is_none());
    assert!(schema.object.is_none());
    assert!(!schema.no_fieldset);
    assert!(schema.fields.is_empty());
}

#[test]
fn test_form_schema_camel_case_keys() {
    let schema = FxFormSchema::from_value(&json!({
        "name": "myform",
        "object": "user",
        "trySubmit": "check",
        "submit": "save",
        "noFieldset": true,
        "fields": {},
    }))
    .unwrap();
    assert_eq!(schema.name.as_deref(), Some("myform"));
    assert_eq!(schema.try_submit.as_deref(), Some("check"));
    assert_eq!(schema.submit.as_deref(), Some("save"));
    assert!(schema.no_fieldset);
}

#[test]
fn test_form_schema_preserves_field_order() {
    let schema = FxFormSchema::from_value(&json!({
        "fields": {
            "zulu": { "kind": "input" },
            "alpha": { "kind": "input" },
            "mike": { "kind": "submit" },
        },
    }))
    .unwrap();
    let ids: Vec<&String> = schema.fields.keys().collect();
    assert_eq!(ids, ["zulu", "alpha", "mike"]);
}

#[test]
fn test_field_schema_kind_specific_properties() {
    let field = FxFieldSchema::from_value(&json!({
        "kind": "input",
        "type": "email",
        "label": "Email",
        "placeholder": "test@example",
        "id": "custom-id",
        "rows": 7,
        "additionalContent": "<a href=\"#\">Cancel</a>",
        "containerAttrs": { "foo": "bar" },
    }))
    .unwrap();
    assert_eq!(field.kind, "input");
    assert_eq!(field.input_type.as_deref(), Some("email"));
    assert_eq!(field.id.as_deref(), Some("custom-id"));
    assert_eq!(field.rows, Some(7));
    assert_eq!(
        field.additional_content.as_deref(),
        Some("<a href=\"#\">Cancel</a>")
    );
    assert_eq!(field.container_attrs.unwrap()["foo"], json!("bar"));
}

#[test]
fn test_field_schema_ignores_unknown_properties() {
    let field = FxFieldSchema::from_value(&json!({
        "kind": "input",
        "somethingElse": 42,
    }))
    .unwrap();
    assert_eq!(field.kind, "input");
}

#[test]
fn test_compact_entry_with_args() {
    let entry = FxValidationEntry::from_value(&json!(["minlength:3", "too short"])).unwrap();
    assert_eq!(entry.name, "minlength");
    assert_eq!(entry.args, vec![json!("3")]);
    assert_eq!(entry.message, "too short");
}

#[test]
fn test_compact_entry_splits_args_on_commas() {
    let entry = FxValidationEntry::from_value(&json!(["custom:a,b,c", "msg"])).unwrap();
    assert_eq!(entry.name, "custom");
    assert_eq!(entry.args, vec![json!("a"), json!("b"), json!("c")]);
}

#[test]
fn test_compact_entry_without_args() {
    let entry = FxValidationEntry::from_value(&json!(["required", "mandatory"])).unwrap();
    assert_eq!(entry.name, "required");
    assert!(entry.args.is_empty());
    assert_eq!(entry.message, "mandatory");
}

#[test]
fn test_expanded_entry_keeps_raw_args() {
    let entry = FxValidationEntry::from_value(&json!(["minlength", 3, "too short"])).unwrap();
    assert_eq!(entry.name, "minlength");
    assert_eq!(entry.args, vec![json!(3)]);
    assert_eq!(entry.message, "too short");
}

#[test]
fn test_expanded_entry_does_not_comma_split() {
    let entry =
        FxValidationEntry::from_value(&json!(["custom", "a,b", "msg"])).unwrap();
    assert_eq!(entry.args, vec![json!("a,b")]);
}

#[test]
fn test_single_element_entry_is_malformed() {
    let err = FxValidationEntry::from_value(&json!(["required"])).unwrap_err();
    assert!(matches!(err, FxError::MalformedValidation { .. }));
}

#[test]
fn test_empty_entry_is_malformed() {
    let err = FxValidationEntry::from_value(&json!([])).unwrap_err();
    assert!(matches!(err, FxError::MalformedValidation { .. }));
}

#[test]
fn test_non_list_entry_is_malformed() {
    let err = FxValidationEntry::from_value(&Value::String("required".into())).unwrap_err();
    assert!(matches!(err, FxError::MalformedValidation { .. }));
}

#[test]
fn test_non_string_rule_name_is_malformed() {
    let err = FxValidationEntry::from_value(&json!([3, "msg"])).unwrap_err();
    assert!(matches!(err, FxError::MalformedValidation { .. }));
}
