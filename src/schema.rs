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

//! # Fx Schema Module
//!
//! Data model for form definitions. A form definition arrives as a
//! structured tree of maps, lists and scalars ([`serde_json::Value`],
//! typically deserialized from a JSON or YAML document); this module
//! converts the tree into the typed schema the compiler consumes.
//!
//! Field nodes stay as raw values inside [`FxFormSchema`] and are
//! converted one at a time during compilation, so a conversion error can
//! be attributed to the offending field id. Validation entries are
//! normalized at this boundary into [`FxValidationEntry`]; the rest of
//! the pipeline never branches on entry arity again.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::attrs::FxAttrMap;
use crate::errors::{FxError, Result};

/// A complete form definition.
///
/// Field iteration order is the declared order of the definition document
/// and determines output order.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FxFormSchema {
    /// Form name; defaults to `f<id>` during compilation.
    pub name: Option<String>,
    /// Name of the scope object the form binds to; defaults to `data`.
    pub object: Option<String>,
    /// Function invoked before the submit expression.
    pub try_submit: Option<String>,
    /// Submit function name; defaults to `submit`.
    pub submit: Option<String>,
    /// Suppresses the fieldset wrapper inside the form element.
    #[serde(default)]
    pub no_fieldset: bool,
    /// Ordered mapping from field id to raw field node.
    #[serde(default)]
    pub fields: Map<String, Value>,
}

impl FxFormSchema {
    /// Converts a raw definition tree into a form schema.
    pub fn from_value(value: &Value) -> Result<Self> {
        serde_json::from_value(value.clone())
            .map_err(|e| FxError::schema(format!("invalid form definition: {}", e)))
    }
}

/// Options for rendering select options through `ng-repeat`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FxRepeatOptions {
    /// The `ng-repeat` expression, e.g. `item in list`.
    pub repeat: String,
    /// Value expression for the generated option.
    pub value: String,
    /// Label expression for the generated option.
    pub label: String,
}

/// A single field definition.
///
/// `kind` selects the builder; the remaining properties are optional and
/// kind-specific. Unknown properties in the definition document are
/// ignored.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FxFieldSchema {
    #[serde(default)]
    pub kind: String,
    pub label: Option<String>,
    /// Input type attribute (`text`, `email`, `number`, ...).
    #[serde(rename = "type")]
    pub input_type: Option<String>,
    pub placeholder: Option<String>,
    /// Overrides the DOM id, which otherwise defaults to the field id.
    pub id: Option<String>,
    /// Input-group addon rendered before an input.
    pub prefix: Option<String>,
    /// Input-group addon rendered after an input.
    pub suffix: Option<String>,
    pub rows: Option<u32>,
    /// Literal markup content for static kinds.
    pub content: Option<String>,
    /// Extra markup appended next to a submit button.
    pub additional_content: Option<String>,
    /// Ordered mapping from option value to option label.
    pub options: Option<FxAttrMap>,
    pub ng_repeat_options: Option<FxRepeatOptions>,
    /// User-supplied attributes, merged over the derived ones.
    pub attrs: Option<FxAttrMap>,
    /// User-supplied attributes for the surrounding container.
    pub container_attrs: Option<FxAttrMap>,
    /// Raw validation entries, normalized per entry during compilation.
    pub validations: Option<Vec<Value>>,
}

impl FxFieldSchema {
    /// Converts a raw field node into a field schema.
    pub fn from_value(value: &Value) -> Result<Self> {
        serde_json::from_value(value.clone())
            .map_err(|e| FxError::schema(format!("invalid field definition: {}", e)))
    }
}

/// A normalized validation entry.
///
/// Two literal shapes are accepted (see [`FxValidationEntry::from_value`]);
/// both normalize to a rule name, an ordered argument list and the
/// user-facing message.
#[derive(Clone, Debug, PartialEq)]
pub struct FxValidationEntry {
    pub name: String,
    pub args: Vec<Value>,
    pub message: String,
}

impl FxValidationEntry {
    /// Normalizes one raw validation entry.
    ///
    /// - *compact*: exactly two elements `[ruleSpec, message]` where
    ///   `ruleSpec` is `"name"` or `"name:arg1,arg2,..."`; the argument
    ///   list is comma-split into string args.
    /// - *expanded*: more than two elements `[name, arg1, ..., argN,
    ///   message]`; middle elements are kept as-is (not comma-split, may
    ///   be non-string).
    ///
    /// Any other arity is malformed.
    pub fn from_value(raw: &Value) -> Result<Self> {
        let items = raw
            .as_array()
            .ok_or_else(|| FxError::malformed_validation("entry must be a list"))?;

        match items.len() {
            2 => {
                let spec = items[0].as_str().ok_or_else(|| {
                    FxError::malformed_validation("rule name must be a string")
                })?;
                let message = scalar_message(&items[1])?;
                match spec.split_once(':') {
                    Some((name, arglist)) => Ok(Self {
                        name: name.to_string(),
                        args: arglist
                            .split(',')
                            .map(|arg| Value::String(arg.to_string()))
                            .collect(),
                        message,
                    }),
                    None => Ok(Self {
                        name: spec.to_string(),
                        args: Vec::new(),
                        message,
                    }),
                }
            }
            len if len > 2 => {
                let name = items[0].as_str().ok_or_else(|| {
                    FxError::malformed_validation("rule name must be a string")
                })?;
                let message = scalar_message(&items[len - 1])?;
                Ok(Self {
                    name: name.to_string(),
                    args: items[1..len - 1].to_vec(),
                    message,
                })
            }
            len => Err(FxError::malformed_validation(format!(
                "expected at least two elements, got {}",
                len
            ))),
        }
    }
}

fn scalar_message(value: &Value) -> Result<String> {
    match value {
        Value::String(text) => Ok(text.clone()),
        Value::Number(number) => Ok(number.to_string()),
        Value::Bool(flag) => Ok(flag.to_string()),
        _ => Err(FxError::malformed_validation("message must be a scalar")),
    }
}
