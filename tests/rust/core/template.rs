//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Fx.
//! The Fx project belongs to the Dunimd Team.

use serde_json::json;

use fx::{FxError, FxTemplateRenderer, FxTemplateSet};

#[test]
fn test_unknown_template_is_rejected() {
    let err = FxTemplateSet.render("no-such-template", &json!({})).unwrap_err();
    assert!(matches!(err, FxError::UnknownTemplate(name) if name == "no-such-template"));
}

#[test]
fn test_pre_form_with_fieldset() {
    let markup = FxTemplateSet
        .render(
            "pre-form",
            &json!({
                "filepath": "forms/login.yaml",
                "name": "f1",
                "trySubmit": "",
                "submit": "f1.$valid && submit();",
                "noFieldset": false,
            }),
        )
        .unwrap();
    assert_eq!(
        markup,
        "<!-- Generated from forms/login.yaml -->\n\
         <form name=\"f1\" ng-submit=\"f1.$valid && submit();\" novalidate>\n\
         \x20 <fieldset>"
    );
}

#[test]
fn test_pre_form_without_fieldset() {
    let markup = FxTemplateSet
        .render(
            "pre-form",
            &json!({
                "filepath": "x.yaml",
                "name": "f9",
                "trySubmit": "warmup(); ",
                "submit": "f9.$valid && go();",
                "noFieldset": true,
            }),
        )
        .unwrap();
    assert_eq!(
        markup,
        "<!-- Generated from x.yaml -->\n\
         <form name=\"f9\" ng-submit=\"warmup(); f9.$valid && go();\" novalidate>"
    );
}

#[test]
fn test_post_form_variants() {
    let with_fieldset = FxTemplateSet
        .render("post-form", &json!({ "noFieldset": false }))
        .unwrap();
    assert_eq!(with_fieldset, "  </fieldset>\n</form>");

    let without_fieldset = FxTemplateSet
        .render("post-form", &json!({ "noFieldset": true }))
        .unwrap();
    assert_eq!(without_fieldset, "</form>");
}

#[test]
fn test_pre_field_with_validations_and_label() {
    let markup = FxTemplateSet
        .render(
            "pre-field",
            &json!({
                "hasValidations": true,
                "formName": "f1",
                "name": "data.email",
                "id": "email",
                "label": "Email",
                "custom": "",
            }),
        )
        .unwrap();
    assert_eq!(
        markup,
        "<div class=\"form-group\" ng-class=\"{ 'has-error': f1['data.email'].$invalid }\">\n\
         \x20 <label class=\"control-label\" for=\"email\">Email</label>"
    );
}

#[test]
fn test_pre_field_plain() {
    let markup = FxTemplateSet
        .render(
            "pre-field",
            &json!({
                "hasValidations": false,
                "formName": "f1",
                "name": "data.plain",
                "id": "plain",
                "label": null,
                "custom": "",
            }),
        )
        .unwrap();
    assert_eq!(markup, "<div class=\"form-group\">");
}

#[test]
fn test_pre_field_appends_custom_expression() {
    let markup = FxTemplateSet
        .render(
            "pre-field",
            &json!({
                "hasValidations": true,
                "formName": "f1",
                "name": "data.opt",
                "id": "opt",
                "label": null,
                "custom": "(myexpr)",
            }),
        )
        .unwrap();
    assert_eq!(
        markup,
        "<div class=\"form-group\" ng-class=\"{ 'has-error': f1['data.opt'].$invalid || (myexpr) }\">"
    );
}

#[test]
fn test_validation_error_with_builtin_flag() {
    let markup = FxTemplateSet
        .render(
            "validation-error",
            &json!({
                "id": "email",
                "name": "data.email",
                "formName": "f1",
                "error": "required",
                "customError": null,
                "msg": "Required",
            }),
        )
        .unwrap();
    assert_eq!(
        markup,
        "  <span class=\"help-block\" ng-show=\"f1['data.email'].$error.required\">Required</span>"
    );
}

#[test]
fn test_validation_error_with_custom_expression() {
    let markup = FxTemplateSet
        .render(
            "validation-error",
            &json!({
                "id": "opt",
                "name": "data.opt",
                "formName": "f1",
                "error": "",
                "customError": "myexpr",
                "msg": "My message",
            }),
        )
        .unwrap();
    assert_eq!(
        markup,
        "  <span class=\"help-block\" ng-show=\"myexpr\">My message</span>"
    );
}

#[test]
fn test_missing_keys_substitute_nothing() {
    let markup = FxTemplateSet.render("input", &json!({})).unwrap();
    assert_eq!(markup, "<input class=\"form-control\">");
}

#[test]
fn test_angular_interpolation_passes_through() {
    let markup = FxTemplateSet
        .render(
            "radio",
            &json!({
                "containerAttrs": "",
                "attrs": " name=\"data.r\" ng-model=\"data.r\"",
                "options": "{ 'a': 'A' }",
            }),
        )
        .unwrap();
    assert_eq!(
        markup,
        "<div class=\"radio\" ng-repeat=\"(value, label) in { 'a': 'A' }\">\n\
         \x20 <label>\n\
         \x20   <input type=\"radio\" name=\"data.r\" ng-model=\"data.r\" value=\"{{ value }}\"> {{ label }}\n\
         \x20 </label>\n\
         </div>"
    );
}

#[test]
fn test_numeric_and_boolean_values_render_as_text() {
    let markup = FxTemplateSet
        .render("static-no-wrapper", &json!({ "content": 42 }))
        .unwrap();
    assert_eq!(markup, "42");
}
