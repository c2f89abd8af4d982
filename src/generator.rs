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

//! # Fx Form Generator
//!
//! The orchestrator of the compilation pipeline. One [`FxGenerator`]
//! compiles one form: it opens the form, walks the fields in declared
//! order, invokes the builder for each field's kind and the validation
//! rules attached to the field, merges the resulting attributes, emits
//! wrapped or unwrapped field blocks through the block emitter, closes
//! the form, and returns the assembled markup.
//!
//! Compilation is fail-fast: the first error anywhere aborts the form
//! with no partial output. Errors are returned wrapped with the
//! offending field id and the definition's source path, and the caller
//! decides how to surface them.
//!
//! A generator owns its emitter exclusively; independent forms can be
//! compiled in parallel by compiling each with its own generator.

use serde_json::{json, Map, Value};

use crate::attrs::{format_attrs, merge_attrs, text_value, FxAttrMap};
use crate::builders::{self, FxFieldContext, FxRenderDescriptor};
use crate::emitter::FxBlockEmitter;
use crate::errors::{FxError, Result};
use crate::schema::{FxFieldSchema, FxFormSchema, FxValidationEntry};
use crate::template::{FxTemplateRenderer, FxTemplateSet};
use crate::validations;

/// Compiles a form schema into markup with the built-in template set.
///
/// Convenience wrapper around [`FxGenerator`] for callers that hold a
/// schema without a source path.
pub fn compile(schema: &FxFormSchema, id: &str) -> Result<String> {
    FxGenerator::new("<schema>", schema.clone(), id).build()
}

/// Merged result of applying all of one field's validation rules.
#[derive(Clone, Debug, Default)]
pub struct FxCompiledValidation {
    /// Validation-contributed attributes, merged in declared rule order.
    pub attrs: FxAttrMap,
    /// Rendered error-display block; empty when the field declares no
    /// validations.
    pub output: String,
    /// Parenthesized custom validity expressions in declared order.
    pub custom_errors: Vec<String>,
}

/// Compiles one form definition into markup.
#[derive(Debug)]
pub struct FxGenerator {
    path: String,
    schema: FxFormSchema,
    id: String,
    renderer: Box<dyn FxTemplateRenderer>,
    emitter: FxBlockEmitter,
}

impl FxGenerator {
    /// Creates a generator for one form.
    ///
    /// `path` identifies the definition document in error reports; `id`
    /// derives the default form name `f<id>`.
    pub fn new(path: impl Into<String>, schema: FxFormSchema, id: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            schema,
            id: id.into(),
            renderer: Box::new(FxTemplateSet),
            emitter: FxBlockEmitter::new(),
        }
    }

    /// Replaces the template renderer.
    pub fn with_renderer(mut self, renderer: Box<dyn FxTemplateRenderer>) -> Self {
        self.renderer = renderer;
        self
    }

    /// Compiles the form and returns the assembled markup.
    pub fn build(mut self) -> Result<String> {
        log::debug!(
            "compiling form '{}' ({} fields) from {}",
            self.form_name(),
            self.schema.fields.len(),
            self.path
        );

        let pre = self.renderer.render(
            "pre-form",
            &json!({
                "filepath": self.path.clone(),
                "name": self.form_name(),
                "trySubmit": self.form_try_submit(),
                "submit": self.form_submit(),
                "noFieldset": self.schema.no_fieldset,
            }),
        )?;
        self.emitter.append(&pre);
        self.emitter.increase_indent();

        let fields: Vec<(String, Value)> = self
            .schema
            .fields
            .iter()
            .map(|(id, node)| (id.clone(), node.clone()))
            .collect();
        for (id, node) in fields {
            self.build_field(&id, &node)
                .map_err(|err| FxError::in_field(id.as_str(), self.path.as_str(), err))?;
        }

        self.emitter.decrease_indent()?;
        let post = self.renderer.render(
            "post-form",
            &json!({ "noFieldset": self.schema.no_fieldset }),
        )?;
        self.emitter.append(&post);

        Ok(self.emitter.render())
    }

    /// Compiles an individual field.
    fn build_field(&mut self, id: &str, node: &Value) -> Result<()> {
        let field = FxFieldSchema::from_value(node)?;
        log::debug!("building field '{}' ({})", id, field.kind);

        let builder = builders::resolve(&field.kind)
            .ok_or_else(|| FxError::unknown_kind(field.kind.clone()))?;
        let ctx = FxFieldContext {
            form_name: self.form_name(),
            id: id.to_string(),
            obj: self.form_obj(),
        };
        let mut result = builder(&field, &ctx)
            .map_err(|err| FxError::builder(field.kind.clone(), err.to_string()))?;

        // Empty attr maps if the builder omitted them.
        for key in ["attrs", "containerAttrs"] {
            if !result.data.get(key).map_or(false, Value::is_object) {
                result
                    .data
                    .insert(key.to_string(), Value::Object(FxAttrMap::new()));
            }
        }

        let valresult = self.build_validations(id, &field, &result)?;

        // Validator attrs win over builder attrs, in declared rule order.
        if !valresult.attrs.is_empty() {
            if let Some(Value::Object(attrs)) = result.data.get_mut("attrs") {
                merge_attrs(attrs, &valresult.attrs);
            }
        }

        let attr_name = attr_text(&result.data, "name");
        let attr_id = attr_text(&result.data, "id");
        let has_validations = field.validations.as_ref().map_or(false, |v| !v.is_empty());

        // Some fields require wrapping. Submit, for example, doesn't.
        if !result.dont_wrap {
            let pre = self.renderer.render(
                "pre-field",
                &json!({
                    "hasValidations": has_validations,
                    "formName": self.form_name(),
                    "name": attr_name,
                    "id": attr_id,
                    "label": field.label.clone(),
                    "custom": valresult.custom_errors.join(" || "),
                }),
            )?;
            self.emitter.append(&pre);
            self.emitter.increase_indent();
        }

        if let Some(template) = result.template {
            let mut data = result.data;
            format_attr_entry(&mut data, "containerAttrs");
            format_attr_entry(&mut data, "attrs");
            let body = self.renderer.render(template, &Value::Object(data))?;
            self.emitter.append(&body);
        }

        if !valresult.output.is_empty() {
            self.emitter.append(&valresult.output);
        }

        if !result.dont_wrap {
            self.emitter.decrease_indent()?;
            let post = self.renderer.render("post-field", &json!({}))?;
            self.emitter.append(&post);
        }

        Ok(())
    }

    /// Compiles the validations declared on one field.
    fn build_validations(
        &self,
        id: &str,
        field: &FxFieldSchema,
        result: &FxRenderDescriptor,
    ) -> Result<FxCompiledValidation> {
        let mut data = FxCompiledValidation::default();
        let entries = match field.validations.as_ref().filter(|v| !v.is_empty()) {
            Some(entries) => entries,
            None => return Ok(data),
        };

        let attr_name = attr_text(&result.data, "name");
        let attr_id = attr_text(&result.data, "id");

        let mut fragments = Vec::new();
        for raw in entries {
            let entry = FxValidationEntry::from_value(raw)?;
            let rule = validations::resolve(&entry.name)
                .ok_or_else(|| FxError::unknown_validation(entry.name.clone()))?;
            let descriptor = rule(&entry.args)?;

            if let Some(kinds) = descriptor.requires_kind {
                if !kinds.contains(&field.kind.as_str()) {
                    return Err(FxError::unsupported_kind(
                        entry.name.clone(),
                        field.kind.clone(),
                    ));
                }
            }

            for key in descriptor.attrs.keys() {
                if data.attrs.contains_key(key) {
                    log::debug!(
                        "field '{}': validation '{}' overwrites attribute '{}'",
                        id,
                        entry.name,
                        key
                    );
                }
            }
            merge_attrs(&mut data.attrs, &descriptor.attrs);

            if let Some(expr) = &descriptor.custom_error {
                data.custom_errors.push(format!("({})", expr));
            }

            fragments.push(self.renderer.render(
                "validation-error",
                &json!({
                    "id": attr_id,
                    "name": attr_name,
                    "formName": self.form_name(),
                    "error": descriptor.error.clone(),
                    "customError": descriptor.custom_error.clone(),
                    "msg": entry.message.clone(),
                }),
            )?);
        }

        let custom = data.custom_errors.join(" || ");
        let mut lines = vec![self.renderer.render(
            "pre-validation-errors",
            &json!({
                "name": attr_name,
                "formName": self.form_name(),
                "custom": custom,
            }),
        )?];
        lines.extend(fragments);
        lines.push(self.renderer.render("post-validation-errors", &json!({}))?);
        data.output = lines.join("\n");

        Ok(data)
    }

    /// Form name, defaulting to `f<id>`.
    fn form_name(&self) -> String {
        self.schema
            .name
            .clone()
            .unwrap_or_else(|| format!("f{}", self.id))
    }

    /// Name of the object receiving the form values, defaulting to `data`.
    fn form_obj(&self) -> String {
        self.schema
            .object
            .clone()
            .unwrap_or_else(|| "data".to_string())
    }

    /// Pre-submit expression, empty unless `trySubmit` is declared.
    fn form_try_submit(&self) -> String {
        self.schema
            .try_submit
            .as_ref()
            .map(|f| format!("{}(); ", f))
            .unwrap_or_default()
    }

    /// Guarded submit expression, defaulting the handler to `submit`.
    fn form_submit(&self) -> String {
        format!(
            "{}.$valid && {}();",
            self.form_name(),
            self.schema.submit.as_deref().unwrap_or("submit")
        )
    }
}

/// Text of an attribute from a descriptor's `attrs` object.
fn attr_text(data: &Map<String, Value>, key: &str) -> String {
    data.get("attrs")
        .and_then(Value::as_object)
        .and_then(|attrs| attrs.get(key))
        .map(text_value)
        .unwrap_or_default()
}

/// Replaces an attribute object in template data with its markup text.
fn format_attr_entry(data: &mut Map<String, Value>, key: &str) {
    let formatted = data
        .get(key)
        .and_then(Value::as_object)
        .map(format_attrs)
        .unwrap_or_default();
    data.insert(key.to_string(), Value::String(formatted));
}
