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

//! # Fx Core Library
//!
//! Fx compiles declarative form definitions into AngularJS markup,
//! including the wiring for client-side validation error display. A
//! definition describes a form as an ordered set of typed fields, each
//! with optional validation rules; Fx turns it into Bootstrap-flavored
//! form markup with `ng-model` bindings, a guarded submit expression and
//! per-rule error-display blocks.
//!
//! ## Module Overview
//!
//! - **schema**: typed form / field definitions and validation-entry
//!   normalization
//! - **builders**: the field-kind registry (input, select, textarea,
//!   static, checkbox, radio, submit, ...)
//! - **validations**: the validation-rule registry (required, minlength,
//!   email, pattern, ...)
//! - **attrs**: markup attribute formatting and merging
//! - **template**: the template renderer interface and the built-in
//!   template set
//! - **emitter**: the indentation-tracking block emitter
//! - **generator**: the per-form compilation pipeline
//! - **errors**: the error taxonomy
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_json::json;
//! use fx::{compile, FxFormSchema};
//!
//! let schema = FxFormSchema::from_value(&json!({
//!     "fields": {
//!         "email": {
//!             "kind": "input",
//!             "type": "email",
//!             "validations": [
//!                 ["required", "The email is required"],
//!                 ["email", "Not a valid email"],
//!             ],
//!         },
//!         "send": { "kind": "submit", "label": "Send" },
//!     },
//! })).unwrap();
//!
//! let markup = compile(&schema, "1").unwrap();
//! assert!(markup.contains("data.email"));
//! ```
//!
//! ## Architecture
//!
//! Data flows one way: the generator reads the schema, calls the builder
//! registry per field and the validation registry per rule, merges the
//! resulting attribute maps, renders template fragments through the
//! template renderer, and assembles the output through the block
//! emitter. Builders and rules are pure functions behind immutable
//! registries; one generator owns one emitter, so independent forms can
//! be compiled in parallel without shared state.
//!
//! ## Error Handling
//!
//! All operations return `Result<T, FxError>`. Compilation is fail-fast:
//! the first error aborts the form and reaches the caller wrapped with
//! the offending field id and the definition's source path.

pub mod attrs;
pub mod builders;
pub mod emitter;
pub mod errors;
pub mod generator;
pub mod schema;
pub mod template;
pub mod validations;

pub use attrs::{format_attrs, merge_attrs, FxAttrMap};
pub use builders::{FxBuilderFn, FxFieldContext, FxRenderDescriptor};
pub use emitter::{FxBlockEmitter, FX_INDENT_UNIT};
pub use errors::{FxError, Result};
pub use generator::{compile, FxCompiledValidation, FxGenerator};
pub use schema::{FxFieldSchema, FxFormSchema, FxRepeatOptions, FxValidationEntry};
pub use template::{FxTemplateRenderer, FxTemplateSet};
pub use validations::{FxValidationDescriptor, FxValidationFn};
