//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Fx.
//! The Fx project belongs to the Dunimd Team.
//!
//! Licensed under the Apache License, Version 2.0 (the "License");
//! You may not use this file except in compliance with the License.
//! You may obtain a copy of the License at
//!
//!     http://www.apache.org/licenses/LICENSE-2.0
//!
//! Unless required by applicable law or agreed to in writing, software
//! distributed under the License is distributed on an "AS IS" BASIS,
//! WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//! See the License for the specific language governing permissions and
//! limitations under the License.

//! # Fx Builder Registry
//!
//! A fixed table of field kinds. Each builder is a pure function from a
//! field definition and its surrounding context to a
//! [`FxRenderDescriptor`]: the template fragment to render, the data the
//! fragment needs, and whether the field opts out of the standard
//! form-group wrapper.
//!
//! Builders derive the markup bindings: the DOM id defaults to the field
//! id (overridable via the field's `id` property), and `name` /
//! `ng-model` are always the qualified object path `<obj>.<id>`.
//! User-supplied `attrs` are merged over the derived ones, so a
//! definition can override anything a builder decides.
//!
//! Like the validation registry, dispatch is an immutable match over the
//! kind name.

use serde_json::{json, Map, Value};

use crate::attrs::{merge_attrs, text_value, FxAttrMap};
use crate::errors::{FxError, Result};
use crate::schema::FxFieldSchema;

/// Signature shared by every field builder.
pub type FxBuilderFn = fn(&FxFieldSchema, &FxFieldContext) -> Result<FxRenderDescriptor>;

/// Context handed to a builder for one field.
#[derive(Clone, Debug)]
pub struct FxFieldContext {
    /// Name of the enclosing form.
    pub form_name: String,
    /// The field's id (its key in the definition document).
    pub id: String,
    /// Name of the scope object the form binds to.
    pub obj: String,
}

/// Output of one field builder.
#[derive(Clone, Debug, Default)]
pub struct FxRenderDescriptor {
    /// Template fragment for the field body; `None` renders nothing.
    pub template: Option<&'static str>,
    /// Template data; `attrs` and `containerAttrs` entries hold attribute
    /// objects until the compiler formats them.
    pub data: Map<String, Value>,
    /// Skips the form-group wrapper around the field.
    pub dont_wrap: bool,
}

/// Looks up a field builder by kind.
pub fn resolve(kind: &str) -> Option<FxBuilderFn> {
    match kind {
        "input" => Some(build_input),
        "select" => Some(build_select),
        "textarea" => Some(build_textarea),
        "static" => Some(build_static),
        "staticNoWrapper" => Some(build_static_no_wrapper),
        "checkbox" => Some(build_checkbox),
        "radio" => Some(build_radio),
        "submit" => Some(build_submit),
        _ => None,
    }
}

fn build_input(field: &FxFieldSchema, ctx: &FxFieldContext) -> Result<FxRenderDescriptor> {
    let mut attrs = FxAttrMap::new();
    attrs.insert(
        "type".to_string(),
        Value::String(field.input_type.clone().unwrap_or_else(|| "text".to_string())),
    );
    merge_attrs(&mut attrs, &bound_attrs(field, ctx));
    if let Some(placeholder) = &field.placeholder {
        attrs.insert("placeholder".to_string(), Value::String(placeholder.clone()));
    }

    let template = if field.prefix.is_some() || field.suffix.is_some() {
        "input-affix"
    } else {
        "input"
    };
    let mut descriptor = descriptor_for(template, attrs, field, false);
    if let Some(prefix) = &field.prefix {
        descriptor.data.insert("prefix".to_string(), json!(prefix));
    }
    if let Some(suffix) = &field.suffix {
        descriptor.data.insert("suffix".to_string(), json!(suffix));
    }
    Ok(descriptor)
}

fn build_select(field: &FxFieldSchema, ctx: &FxFieldContext) -> Result<FxRenderDescriptor> {
    let mut descriptor = descriptor_for("select", bound_attrs(field, ctx), field, false);

    let mut lines = Vec::new();
    if let Some(repeat) = &field.ng_repeat_options {
        lines.push(format!(
            "  <option ng-repeat=\"{}\" value=\"{}\">{}</option>",
            repeat.repeat, repeat.value, repeat.label
        ));
    }
    if let Some(options) = &field.options {
        for (value, label) in options {
            lines.push(format!(
                "  <option value=\"{}\">{}</option>",
                value,
                text_value(label)
            ));
        }
    }
    if !lines.is_empty() {
        descriptor
            .data
            .insert("options".to_string(), Value::String(lines.join("\n")));
    }
    Ok(descriptor)
}

fn build_textarea(field: &FxFieldSchema, ctx: &FxFieldContext) -> Result<FxRenderDescriptor> {
    let mut attrs = bound_attrs(field, ctx);
    if let Some(rows) = field.rows {
        attrs.insert("rows".to_string(), json!(rows));
    }
    Ok(descriptor_for("textarea", attrs, field, false))
}

fn build_static(field: &FxFieldSchema, ctx: &FxFieldContext) -> Result<FxRenderDescriptor> {
    let mut attrs = FxAttrMap::new();
    attrs.insert("id".to_string(), Value::String(dom_id(field, ctx)));
    let mut descriptor = descriptor_for("static", attrs, field, false);
    if let Some(content) = &field.content {
        descriptor.data.insert("content".to_string(), json!(content));
    }
    Ok(descriptor)
}

fn build_static_no_wrapper(
    field: &FxFieldSchema,
    _ctx: &FxFieldContext,
) -> Result<FxRenderDescriptor> {
    let mut descriptor = descriptor_for("static-no-wrapper", FxAttrMap::new(), field, true);
    if let Some(content) = &field.content {
        descriptor.data.insert("content".to_string(), json!(content));
    }
    Ok(descriptor)
}

fn build_checkbox(field: &FxFieldSchema, ctx: &FxFieldContext) -> Result<FxRenderDescriptor> {
    let mut descriptor = descriptor_for("checkbox", bound_attrs(field, ctx), field, false);
    if let Some(label) = &field.label {
        descriptor.data.insert("label".to_string(), json!(label));
    }
    Ok(descriptor)
}

fn build_radio(field: &FxFieldSchema, ctx: &FxFieldContext) -> Result<FxRenderDescriptor> {
    let options = field
        .options
        .as_ref()
        .filter(|map| !map.is_empty())
        .ok_or_else(|| FxError::schema("radio requires a non-empty 'options' mapping"))?;

    // The input element repeats per option, so no DOM id is derived.
    let mut attrs = FxAttrMap::new();
    let path = model_path(ctx);
    attrs.insert("name".to_string(), Value::String(path.clone()));
    attrs.insert("ng-model".to_string(), Value::String(path));

    let mut descriptor = descriptor_for("radio", attrs, field, false);
    let literal = options
        .iter()
        .map(|(value, label)| format!("'{}': '{}'", value, text_value(label)))
        .collect::<Vec<_>>()
        .join(", ");
    descriptor
        .data
        .insert("options".to_string(), json!(format!("{{ {} }}", literal)));
    Ok(descriptor)
}

fn build_submit(field: &FxFieldSchema, _ctx: &FxFieldContext) -> Result<FxRenderDescriptor> {
    let mut descriptor = descriptor_for("submit", FxAttrMap::new(), field, true);
    descriptor.data.insert(
        "label".to_string(),
        json!(field.label.as_deref().unwrap_or("Submit")),
    );
    if let Some(extra) = &field.additional_content {
        descriptor
            .data
            .insert("additionalContent".to_string(), json!(extra));
    }
    Ok(descriptor)
}

/// DOM id for the field, defaulting to the field id.
fn dom_id(field: &FxFieldSchema, ctx: &FxFieldContext) -> String {
    field.id.clone().unwrap_or_else(|| ctx.id.clone())
}

/// Qualified object path the field binds to.
fn model_path(ctx: &FxFieldContext) -> String {
    format!("{}.{}", ctx.obj, ctx.id)
}

/// Standard id / name / ng-model bindings.
fn bound_attrs(field: &FxFieldSchema, ctx: &FxFieldContext) -> FxAttrMap {
    let mut attrs = FxAttrMap::new();
    attrs.insert("id".to_string(), Value::String(dom_id(field, ctx)));
    let path = model_path(ctx);
    attrs.insert("name".to_string(), Value::String(path.clone()));
    attrs.insert("ng-model".to_string(), Value::String(path));
    attrs
}

/// Assembles a descriptor with user attrs merged over the derived ones.
fn descriptor_for(
    template: &'static str,
    mut attrs: FxAttrMap,
    field: &FxFieldSchema,
    dont_wrap: bool,
) -> FxRenderDescriptor {
    if let Some(extra) = &field.attrs {
        merge_attrs(&mut attrs, extra);
    }
    let mut data = Map::new();
    data.insert("attrs".to_string(), Value::Object(attrs));
    if let Some(container) = &field.container_attrs {
        data.insert(
            "containerAttrs".to_string(),
            Value::Object(container.clone()),
        );
    }
    FxRenderDescriptor {
        template: Some(template),
        data,
        dont_wrap,
    }
}
