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

//! Markup attribute formatting and merging.

use serde_json::{Map, Value};

/// Ordered mapping from attribute name to value.
///
/// Backed by [`serde_json::Map`] with the `preserve_order` feature, so the
/// declared order of a definition document is the order attributes appear
/// in the generated markup.
pub type FxAttrMap = Map<String, Value>;

/// Serializes an attribute mapping into a markup attribute string.
///
/// Produces `' k1="v1" k2="v2"'` with one leading space before each pair
/// and values always double-quoted, in map order. Values are substituted
/// literally, without escaping; callers supply already-safe values. An
/// empty mapping produces an empty string.
pub fn format_attrs(attrs: &FxAttrMap) -> String {
    let mut result = String::new();
    for (key, value) in attrs {
        result.push(' ');
        result.push_str(key);
        result.push_str("=\"");
        result.push_str(&text_value(value));
        result.push('"');
    }
    result
}

/// Merges `extra` onto `base`, key by key.
///
/// An existing key keeps its position and takes the new value, so later
/// contributions win without reordering the output.
pub fn merge_attrs(base: &mut FxAttrMap, extra: &FxAttrMap) {
    for (key, value) in extra {
        base.insert(key.clone(), value.clone());
    }
}

/// Renders a scalar JSON value as attribute or template text.
///
/// Strings render verbatim, numbers and booleans via their canonical
/// text, null as the empty string. Composite values fall back to their
/// JSON representation.
pub(crate) fn text_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
