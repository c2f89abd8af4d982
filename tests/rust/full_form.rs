//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Fx.
//! The Fx project belongs to the Dunimd Team.

use std::path::PathBuf;

use serde_json::Value;

use fx::{FxFormSchema, FxGenerator};

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("full_form.yaml")
}

fn compile_full_form() -> String {
    let content = std::fs::read_to_string(fixture_path()).unwrap();
    let tree: Value = serde_yaml::from_str(&content).unwrap();
    let schema = FxFormSchema::from_value(&tree).unwrap();
    FxGenerator::new("tests/fixtures/full_form.yaml", schema, "1")
        .build()
        .unwrap()
}

#[test]
fn test_full_form_opens_and_closes_the_form() {
    let markup = compile_full_form();
    assert!(markup.starts_with("<!-- Generated from tests/fixtures/full_form.yaml -->"));
    assert!(markup.contains("<form name=\"f1\" ng-submit=\"f1.$valid && submit();\" novalidate>"));
    assert!(markup.ends_with("  </fieldset>\n</form>"));
}

#[test]
fn test_full_form_inputs() {
    let markup = compile_full_form();

    // Bare input with derived bindings.
    assert!(markup.contains(
        "<input class=\"form-control\" type=\"text\" id=\"myinput\" \
         name=\"data.myinput\" ng-model=\"data.myinput\">"
    ));

    // Typed input with user attrs and validation attrs merged in.
    assert!(markup.contains("type=\"email\""));
    assert!(markup.contains("placeholder=\"test@example\""));
    assert!(markup.contains("myarg1=\"myvalue1\" myarg2=\"myvalue2\""));
    assert!(markup.contains("ng-minlength=\"3\""));
    assert!(markup.contains("ng-maxlength=\"3\""));
    assert!(markup.contains("for=\"myinputv\">Email</label>"));
    assert!(markup.contains("El email es obligatorio"));
    assert!(markup.contains("$error.email\">required email</span>"));
}

#[test]
fn test_full_form_affixed_input() {
    let markup = compile_full_form();
    assert!(markup.contains("<div class=\"input-group\">"));
    assert!(markup.contains("<span class=\"input-group-addon\">myprefix</span>"));
    assert!(markup.contains("<span class=\"input-group-addon\">mysuffix</span>"));
    assert!(markup.contains("ng-pattern=\"/^[a-z]$/\""));
}

#[test]
fn test_full_form_custom_dom_id() {
    let markup = compile_full_form();
    assert!(markup.contains("id=\"myidtest\""));
    assert!(markup.contains("for=\"myidtest\">myid</label>"));
    assert!(markup.contains("name=\"data.myinputmyid\""));
}

#[test]
fn test_full_form_numeric_validations() {
    let markup = compile_full_form();
    assert!(markup.contains("integer=\"\""));
    assert!(markup.contains("min=\"10\""));
    assert!(markup.contains("max=\"99\""));
    assert!(markup.contains("min=\"0\""));
    assert!(markup.contains("at least 10 required"));
}

#[test]
fn test_full_form_selects() {
    let markup = compile_full_form();

    assert!(markup.contains(
        "<select class=\"form-control\" id=\"myselect\" name=\"data.myselect\" \
         ng-model=\"data.myselect\">"
    ));
    assert!(markup.contains("<option value=\"myvalue1\">mylabel1</option>"));
    assert!(markup.contains("<option value=\"myvalue2\">mylabel2</option>"));
    assert!(markup.contains("ng-options=\"items in list\""));
    assert!(markup.contains(
        "<option ng-repeat=\"item in list\" value=\"{{ item.label }}\">{{ item.label }}</option>"
    ));
    assert!(markup.contains("<option value=\"foo\">bar</option>"));

    // The custom validity expression wires both the wrapper and the
    // error block.
    assert!(markup.contains("f1['data.myselectoptions'].$invalid || (myexpr)"));
    assert!(markup.contains("ng-show=\"myexpr\">My message</span>"));
}

#[test]
fn test_full_form_textarea_and_statics() {
    let markup = compile_full_form();
    assert!(markup.contains("<textarea class=\"form-control\" id=\"mytextarea\""));
    assert!(markup.contains("rows=\"7\""));
    assert!(markup.contains("<p>static content</p>"));
    assert!(markup.contains("form-control-static"));
    // The unwrapped static sits directly at field depth.
    assert!(markup.contains("\n  <p>static no wrapper content</p>"));
}

#[test]
fn test_full_form_datepicker_attrs() {
    let markup = compile_full_form();
    assert!(markup.contains("datepicker-popup=\"dd/MM/yyyy\""));
    assert!(markup.contains("datepicker-manual=\"\""));
    assert!(markup.contains("datepicker-options=\"datepickerOptions\""));
    assert!(markup.contains("min-date=\"minDate\""));
    assert!(markup.contains("La fecha debe corresponder a hoy, o un día posterior"));
}

#[test]
fn test_full_form_checkbox_and_radios() {
    let markup = compile_full_form();
    assert!(markup.contains(
        "<input type=\"checkbox\" id=\"checkbox\" name=\"data.checkbox\" \
         ng-model=\"data.checkbox\"> My checkbox"
    ));
    assert!(markup.contains(
        "ng-repeat=\"(value, label) in { 'foo': 'Foo option', 'bar': 'Bar option', \
         'baz': 'Baz option' }\""
    ));
    assert!(markup.contains("name=\"data.radios\""));
}

#[test]
fn test_full_form_url_field() {
    let markup = compile_full_form();
    assert!(markup.contains("type=\"url\""));
    assert!(markup.contains("$error.url\">url required</span>"));
}

#[test]
fn test_full_form_submit_variants() {
    let markup = compile_full_form();
    assert!(markup.contains(">Send button</button>"));
    assert!(markup.contains("<a href=\"#\">Cancel</a>"));
    assert!(markup.contains("<div class=\"form-actions\" foo=\"bar\">"));
    assert!(markup.contains("class=\"btn btn-primary\" baz=\"qux\">Send button</button>"));
}
