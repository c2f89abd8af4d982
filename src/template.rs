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

//! # Fx Template Module
//!
//! The compiler consumes templates through the [`FxTemplateRenderer`]
//! trait and ships [`FxTemplateSet`], a built-in set of embedded AngularJS
//! fragments, as the default implementation.
//!
//! Templates are plain string substitution with ERB-style delimiters:
//!
//! - `<%= key %>` inserts the value under `key` (missing keys insert
//!   nothing)
//! - `<% if key %>...<% end %>` renders its body when the value is truthy
//! - `<% unless key %>...<% end %>` renders its body when it is not
//!
//! Substituted values are never rescanned and never escaped; callers
//! supply already-safe values. The delimiters are deliberately distinct
//! from AngularJS `{{ }}` interpolation so generated Angular expressions
//! pass through untouched.

use serde_json::{Map, Value};

use crate::attrs::text_value;
use crate::errors::{FxError, Result};

/// String-substitution service turning a template name and a data
/// mapping into a markup fragment.
pub trait FxTemplateRenderer: std::fmt::Debug + Send + Sync {
    /// Renders the named template with the given data object.
    fn render(&self, name: &str, data: &Value) -> Result<String>;
}

/// The built-in template set (Bootstrap-flavored AngularJS markup).
#[derive(Clone, Copy, Debug, Default)]
pub struct FxTemplateSet;

impl FxTemplateRenderer for FxTemplateSet {
    fn render(&self, name: &str, data: &Value) -> Result<String> {
        let source = source(name).ok_or_else(|| FxError::UnknownTemplate(name.to_string()))?;
        let empty = Map::new();
        let map = data.as_object().unwrap_or(&empty);
        expand(source, name, map)
    }
}

const PRE_FORM: &str = r#"<!-- Generated from <%= filepath %> -->
<form name="<%= name %>" ng-submit="<%= trySubmit %><%= submit %>" novalidate><% unless noFieldset %>
  <fieldset><% end %>"#;

const POST_FORM: &str = r#"<% unless noFieldset %>  </fieldset>
<% end %></form>"#;

const PRE_FIELD: &str = r#"<div class="form-group"<% if hasValidations %> ng-class="{ 'has-error': <%= formName %>['<%= name %>'].$invalid<% if custom %> || <%= custom %><% end %> }"<% end %>><% if label %>
  <label class="control-label"<% if id %> for="<%= id %>"<% end %>><%= label %></label><% end %>"#;

const POST_FIELD: &str = "</div>";

const PRE_VALIDATION_ERRORS: &str = r#"<div class="validation-errors" ng-show="<%= formName %>['<%= name %>'].$invalid<% if custom %> || <%= custom %><% end %>">"#;

const VALIDATION_ERROR: &str = r#"  <span class="help-block" ng-show="<% if error %><%= formName %>['<%= name %>'].$error.<%= error %><% end %><% unless error %><%= customError %><% end %>"><%= msg %></span>"#;

const POST_VALIDATION_ERRORS: &str = "</div>";

const INPUT: &str = r#"<input class="form-control"<%= attrs %>>"#;

const INPUT_AFFIX: &str = r#"<div class="input-group"<%= containerAttrs %>><% if prefix %>
  <span class="input-group-addon"><%= prefix %></span><% end %>
  <input class="form-control"<%= attrs %>><% if suffix %>
  <span class="input-group-addon"><%= suffix %></span><% end %>
</div>"#;

const SELECT: &str = r#"<select class="form-control"<%= attrs %>><% if options %>
<%= options %><% end %>
</select>"#;

const TEXTAREA: &str = r#"<textarea class="form-control"<%= attrs %>></textarea>"#;

const STATIC: &str = r#"<div class="form-control-static"<%= attrs %>><% if content %>
  <%= content %>
<% end %></div>"#;

const STATIC_NO_WRAPPER: &str = "<%= content %>";

const CHECKBOX: &str = r#"<div class="checkbox"<%= containerAttrs %>>
  <label>
    <input type="checkbox"<%= attrs %>><% if label %> <%= label %><% end %>
  </label>
</div>"#;

const RADIO: &str = r#"<div class="radio"<%= containerAttrs %> ng-repeat="(value, label) in <%= options %>">
  <label>
    <input type="radio"<%= attrs %> value="{{ value }}"> {{ label }}
  </label>
</div>"#;

const SUBMIT: &str = r#"<div class="form-actions"<%= containerAttrs %>>
  <button type="submit" class="btn btn-primary"<%= attrs %>><%= label %></button><% if additionalContent %>
  <%= additionalContent %><% end %>
</div>"#;

fn source(name: &str) -> Option<&'static str> {
    match name {
        "pre-form" => Some(PRE_FORM),
        "post-form" => Some(POST_FORM),
        "pre-field" => Some(PRE_FIELD),
        "post-field" => Some(POST_FIELD),
        "pre-validation-errors" => Some(PRE_VALIDATION_ERRORS),
        "validation-error" => Some(VALIDATION_ERROR),
        "post-validation-errors" => Some(POST_VALIDATION_ERRORS),
        "input" => Some(INPUT),
        "input-affix" => Some(INPUT_AFFIX),
        "select" => Some(SELECT),
        "textarea" => Some(TEXTAREA),
        "static" => Some(STATIC),
        "static-no-wrapper" => Some(STATIC_NO_WRAPPER),
        "checkbox" => Some(CHECKBOX),
        "radio" => Some(RADIO),
        "submit" => Some(SUBMIT),
        _ => None,
    }
}

fn expand(source: &str, name: &str, data: &Map<String, Value>) -> Result<String> {
    let mut output = String::new();
    let mut rest = source;
    while let Some(open) = rest.find("<%") {
        output.push_str(&rest[..open]);
        rest = &rest[open..];
        let close = rest
            .find("%>")
            .ok_or_else(|| FxError::template(name, "unterminated tag"))?;
        let tag = rest[2..close].trim();
        rest = &rest[close + 2..];

        if let Some(key) = tag.strip_prefix('=') {
            if let Some(value) = data.get(key.trim()) {
                output.push_str(&text_value(value));
            }
        } else if let Some(key) = tag.strip_prefix("if ") {
            let (body, after) = section_body(rest, name)?;
            rest = after;
            if is_truthy(data.get(key.trim())) {
                output.push_str(&expand(body, name, data)?);
            }
        } else if let Some(key) = tag.strip_prefix("unless ") {
            let (body, after) = section_body(rest, name)?;
            rest = after;
            if !is_truthy(data.get(key.trim())) {
                output.push_str(&expand(body, name, data)?);
            }
        } else if tag == "end" {
            return Err(FxError::template(name, "unexpected end tag"));
        } else {
            return Err(FxError::template(name, format!("unknown tag '{}'", tag)));
        }
    }
    output.push_str(rest);
    Ok(output)
}

/// Finds the body of a section by scanning for the matching end tag,
/// skipping over nested sections.
fn section_body<'a>(rest: &'a str, name: &str) -> Result<(&'a str, &'a str)> {
    let mut depth = 0usize;
    let mut cursor = 0usize;
    loop {
        let open = rest[cursor..]
            .find("<%")
            .ok_or_else(|| FxError::template(name, "missing end tag"))?
            + cursor;
        let close = rest[open..]
            .find("%>")
            .ok_or_else(|| FxError::template(name, "unterminated tag"))?
            + open;
        let tag = rest[open + 2..close].trim();
        if tag.starts_with("if ") || tag.starts_with("unless ") {
            depth += 1;
        } else if tag == "end" {
            if depth == 0 {
                return Ok((&rest[..open], &rest[close + 2..]));
            }
            depth -= 1;
        }
        cursor = close + 2;
    }
}

fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(flag)) => *flag,
        Some(Value::String(text)) => !text.is_empty(),
        Some(Value::Number(number)) => number.as_f64() != Some(0.0),
        Some(Value::Array(items)) => !items.is_empty(),
        Some(Value::Object(map)) => !map.is_empty(),
    }
}
