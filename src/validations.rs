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

//! # Fx Validation Registry
//!
//! A fixed table of named validation rules. Each rule is a pure function
//! from its argument list to a [`FxValidationDescriptor`]: the markup
//! attributes the rule contributes, the AngularJS error flag its
//! error-display condition is keyed to, an optional custom validity
//! expression, and an optional restriction on the field kinds the rule
//! may be attached to.
//!
//! The registry is an immutable match over the rule name, so concurrent
//! lookups need no synchronization. Rules fail with
//! [`FxError::InvalidArguments`] when their arguments are malformed; the
//! `requires_kind` restriction is enforced by the orchestrator, not here.

use regex::Regex;
use serde_json::Value;

use crate::attrs::{text_value, FxAttrMap};
use crate::errors::{FxError, Result};

/// Signature shared by every validation rule.
pub type FxValidationFn = fn(&[Value]) -> Result<FxValidationDescriptor>;

/// Output of one validation rule.
#[derive(Clone, Debug, Default)]
pub struct FxValidationDescriptor {
    /// Attributes to merge onto the field element.
    pub attrs: FxAttrMap,
    /// Name of the built-in AngularJS error flag; empty for purely
    /// custom checks.
    pub error: String,
    /// Boolean expression naming a custom validity check.
    pub custom_error: Option<String>,
    /// Field kinds the rule may legally be attached to; `None` accepts
    /// every kind.
    pub requires_kind: Option<&'static [&'static str]>,
}

const INPUT_ONLY: &[&str] = &["input"];
const TEXT_KINDS: &[&str] = &["input", "textarea"];

/// Looks up a validation rule by name.
pub fn resolve(name: &str) -> Option<FxValidationFn> {
    match name {
        "required" => Some(val_required),
        "minlength" => Some(val_minlength),
        "maxlength" => Some(val_maxlength),
        "email" => Some(val_email),
        "pattern" => Some(val_pattern),
        "integer" => Some(val_integer),
        "minvalue" => Some(val_minvalue),
        "maxvalue" => Some(val_maxvalue),
        "date" => Some(val_date),
        "mindate" => Some(val_mindate),
        "url" => Some(val_url),
        "custom" => Some(val_custom),
        _ => None,
    }
}

fn val_required(_args: &[Value]) -> Result<FxValidationDescriptor> {
    Ok(FxValidationDescriptor {
        attrs: attr("required", Value::String("required".to_string())),
        error: "required".to_string(),
        ..Default::default()
    })
}

fn val_minlength(args: &[Value]) -> Result<FxValidationDescriptor> {
    let (length, arg) = integer_arg("minlength", args)?;
    if length < 0 {
        return Err(FxError::invalid_arguments(
            "minlength",
            "length must not be negative",
        ));
    }
    Ok(FxValidationDescriptor {
        attrs: attr("ng-minlength", arg.clone()),
        error: "minlength".to_string(),
        requires_kind: Some(TEXT_KINDS),
        ..Default::default()
    })
}

fn val_maxlength(args: &[Value]) -> Result<FxValidationDescriptor> {
    let (length, arg) = integer_arg("maxlength", args)?;
    if length < 0 {
        return Err(FxError::invalid_arguments(
            "maxlength",
            "length must not be negative",
        ));
    }
    Ok(FxValidationDescriptor {
        attrs: attr("ng-maxlength", arg.clone()),
        error: "maxlength".to_string(),
        requires_kind: Some(TEXT_KINDS),
        ..Default::default()
    })
}

fn val_email(_args: &[Value]) -> Result<FxValidationDescriptor> {
    Ok(FxValidationDescriptor {
        error: "email".to_string(),
        requires_kind: Some(INPUT_ONLY),
        ..Default::default()
    })
}

fn val_pattern(args: &[Value]) -> Result<FxValidationDescriptor> {
    let expr = expression_arg("pattern", args)?;
    // A /…/-delimited literal must at least compile as a regular
    // expression; scope expressions pass through unverified.
    if let Some(literal) = expr
        .strip_prefix('/')
        .and_then(|rest| rest.strip_suffix('/'))
    {
        Regex::new(literal)
            .map_err(|e| FxError::invalid_arguments("pattern", format!("invalid expression: {}", e)))?;
    }
    Ok(FxValidationDescriptor {
        attrs: attr("ng-pattern", Value::String(expr)),
        error: "pattern".to_string(),
        requires_kind: Some(TEXT_KINDS),
        ..Default::default()
    })
}

fn val_integer(_args: &[Value]) -> Result<FxValidationDescriptor> {
    Ok(FxValidationDescriptor {
        attrs: attr("integer", Value::String(String::new())),
        error: "integer".to_string(),
        requires_kind: Some(INPUT_ONLY),
        ..Default::default()
    })
}

fn val_minvalue(args: &[Value]) -> Result<FxValidationDescriptor> {
    let arg = number_arg("minvalue", args)?;
    Ok(FxValidationDescriptor {
        attrs: attr("min", arg.clone()),
        error: "min".to_string(),
        requires_kind: Some(INPUT_ONLY),
        ..Default::default()
    })
}

fn val_maxvalue(args: &[Value]) -> Result<FxValidationDescriptor> {
    let arg = number_arg("maxvalue", args)?;
    Ok(FxValidationDescriptor {
        attrs: attr("max", arg.clone()),
        error: "max".to_string(),
        requires_kind: Some(INPUT_ONLY),
        ..Default::default()
    })
}

fn val_date(_args: &[Value]) -> Result<FxValidationDescriptor> {
    Ok(FxValidationDescriptor {
        error: "date".to_string(),
        requires_kind: Some(INPUT_ONLY),
        ..Default::default()
    })
}

fn val_mindate(args: &[Value]) -> Result<FxValidationDescriptor> {
    let expr = expression_arg("mindate", args)?;
    Ok(FxValidationDescriptor {
        attrs: attr("min-date", Value::String(expr)),
        error: "mindate".to_string(),
        requires_kind: Some(INPUT_ONLY),
        ..Default::default()
    })
}

fn val_url(_args: &[Value]) -> Result<FxValidationDescriptor> {
    Ok(FxValidationDescriptor {
        error: "url".to_string(),
        requires_kind: Some(INPUT_ONLY),
        ..Default::default()
    })
}

fn val_custom(args: &[Value]) -> Result<FxValidationDescriptor> {
    if args.is_empty() {
        return Err(FxError::invalid_arguments(
            "custom",
            "expected a boolean expression",
        ));
    }
    // Compact entries comma-split their argument list; re-joining keeps
    // expressions that contain commas intact.
    let mut parts = Vec::new();
    for arg in args {
        match arg {
            Value::String(_) | Value::Number(_) | Value::Bool(_) => parts.push(text_value(arg)),
            _ => {
                return Err(FxError::invalid_arguments(
                    "custom",
                    "expression parts must be scalars",
                ))
            }
        }
    }
    Ok(FxValidationDescriptor {
        custom_error: Some(parts.join(",")),
        ..Default::default()
    })
}

fn attr(key: &str, value: Value) -> FxAttrMap {
    let mut map = FxAttrMap::new();
    map.insert(key.to_string(), value);
    map
}

fn single_arg<'a>(rule: &'static str, args: &'a [Value]) -> Result<&'a Value> {
    match args {
        [arg] => Ok(arg),
        _ => Err(FxError::invalid_arguments(
            rule,
            format!("expected exactly one argument, got {}", args.len()),
        )),
    }
}

fn integer_arg<'a>(rule: &'static str, args: &'a [Value]) -> Result<(i64, &'a Value)> {
    let arg = single_arg(rule, args)?;
    let parsed = match arg {
        Value::Number(number) => number.as_i64(),
        Value::String(text) => text.trim().parse::<i64>().ok(),
        _ => None,
    };
    match parsed {
        Some(value) => Ok((value, arg)),
        None => Err(FxError::invalid_arguments(
            rule,
            format!("expected an integer argument, got {}", arg),
        )),
    }
}

fn number_arg<'a>(rule: &'static str, args: &'a [Value]) -> Result<&'a Value> {
    let arg = single_arg(rule, args)?;
    let valid = match arg {
        Value::Number(_) => true,
        Value::String(text) => text.trim().parse::<f64>().is_ok(),
        _ => false,
    };
    if valid {
        Ok(arg)
    } else {
        Err(FxError::invalid_arguments(
            rule,
            format!("expected a numeric argument, got {}", arg),
        ))
    }
}

fn expression_arg(rule: &'static str, args: &[Value]) -> Result<String> {
    let arg = single_arg(rule, args)?;
    match arg.as_str() {
        Some(text) if !text.trim().is_empty() => Ok(text.to_string()),
        _ => Err(FxError::invalid_arguments(
            rule,
            "expected a non-empty expression",
        )),
    }
}
