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

//! # Fx Error Module
//!
//! This module defines the error types used throughout the Fx form
//! compiler for consistent error handling and reporting.
//!
//! ## Error Handling Philosophy
//!
//! Fx compiles one form per call and is strictly fail-fast: the first
//! error anywhere in the pipeline aborts the compilation of that form.
//! There is no partial output and no multi-error aggregation. Every
//! pipeline error is wrapped once with the [`FxError::Field`] variant at
//! the per-field boundary, so the error that reaches the caller always
//! carries the offending field id and the schema's source path.
//!
//! ## Error Categories
//!
//! - **Io / Serde**: filesystem and (de)serialization wrappers
//! - **Schema**: a field node that does not convert to a field definition
//! - **UnknownKind / UnknownValidation**: registry lookup misses
//! - **MalformedValidation**: a validation entry with an invalid shape
//! - **UnsupportedKind**: a validation rule applied to a field kind it
//!   does not support
//! - **InvalidArguments**: a validation rule rejected its arguments
//! - **Builder**: a failure raised inside a field builder
//! - **IndentUnderflow**: block emitter contract violation (a bug in the
//!   compiler itself, never reachable from user input)
//! - **UnknownTemplate / Template**: template renderer failures
//! - **Field**: attribution wrapper adding field id and source path

use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Convenience result type used throughout Fx.
pub type Result<T> = std::result::Result<T, FxError>;

/// Canonical error enumeration for the Fx form compiler.
#[derive(Debug, Error, Serialize, Deserialize)]
pub enum FxError {
    /// Errors originating from filesystem IO.
    #[error("io error: {0}")]
    Io(String),

    /// A field node or form definition with an incompatible shape.
    #[error("schema error: {message}")]
    Schema { message: String },

    /// The builder registry has no entry for the field kind.
    #[error("field kind not recognized: {kind}")]
    UnknownKind { kind: String },

    /// The validation registry has no entry for the rule name.
    #[error("validation not recognized: {rule}")]
    UnknownValidation { rule: String },

    /// A validation entry whose literal shape is neither compact nor
    /// expanded.
    #[error("validation does not have a correct format: {message}")]
    MalformedValidation { message: String },

    /// A validation rule applied to a field kind outside its
    /// `requires_kind` set.
    #[error("field kind '{kind}' not supported with validation '{rule}'")]
    UnsupportedKind { rule: String, kind: String },

    /// A validation rule rejected its argument list.
    #[error("invalid arguments for validation '{rule}': {message}")]
    InvalidArguments { rule: String, message: String },

    /// Any failure raised inside a field builder.
    #[error("builder for field kind '{kind}' failed: {message}")]
    Builder { kind: String, message: String },

    /// Block emitter indentation dropped below zero. Internal contract
    /// violation, not reachable from user input.
    #[error("indentation underflow in block emitter")]
    IndentUnderflow,

    /// The template renderer has no template under this name.
    #[error("template not recognized: {0}")]
    UnknownTemplate(String),

    /// A template source that does not expand (unterminated or unbalanced
    /// tags). Internal, the built-in template set is static.
    #[error("template '{name}' is malformed: {message}")]
    Template { name: String, message: String },

    /// Wrapper for serde-style serialization issues.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Catch-all variant for unexpected situations.
    #[error("internal error: {0}")]
    Internal(String),

    /// Attribution wrapper: the underlying cause plus the offending field
    /// id and the source path of the form definition.
    #[error("in key '{field}' in file '{path}': {source}")]
    Field {
        field: String,
        path: String,
        source: Box<FxError>,
    },
}

impl From<io::Error> for FxError {
    fn from(err: io::Error) -> Self {
        FxError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FxError {
    fn from(err: serde_json::Error) -> Self {
        FxError::Serde(err.to_string())
    }
}

impl FxError {
    /// Helper to construct schema errors.
    pub fn schema<T: Into<String>>(message: T) -> Self {
        FxError::Schema {
            message: message.into(),
        }
    }

    /// Helper to construct unknown-kind errors.
    pub fn unknown_kind(kind: impl Into<String>) -> Self {
        FxError::UnknownKind { kind: kind.into() }
    }

    /// Helper to construct unknown-validation errors.
    pub fn unknown_validation(rule: impl Into<String>) -> Self {
        FxError::UnknownValidation { rule: rule.into() }
    }

    /// Helper to construct malformed-validation errors.
    pub fn malformed_validation<T: Into<String>>(message: T) -> Self {
        FxError::MalformedValidation {
            message: message.into(),
        }
    }

    /// Helper to construct unsupported-kind errors.
    pub fn unsupported_kind(rule: impl Into<String>, kind: impl Into<String>) -> Self {
        FxError::UnsupportedKind {
            rule: rule.into(),
            kind: kind.into(),
        }
    }

    /// Helper to construct invalid-argument errors for validation rules.
    pub fn invalid_arguments(rule: impl Into<String>, message: impl Into<String>) -> Self {
        FxError::InvalidArguments {
            rule: rule.into(),
            message: message.into(),
        }
    }

    /// Helper to construct builder errors.
    pub fn builder(kind: impl Into<String>, message: impl Into<String>) -> Self {
        FxError::Builder {
            kind: kind.into(),
            message: message.into(),
        }
    }

    /// Helper to construct template errors.
    pub fn template(name: impl Into<String>, message: impl Into<String>) -> Self {
        FxError::Template {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Helper to construct internal errors.
    pub fn internal<T: Into<String>>(message: T) -> Self {
        FxError::Internal(message.into())
    }

    /// Wraps an error with the field id and source path it belongs to.
    pub fn in_field(field: impl Into<String>, path: impl Into<String>, source: FxError) -> Self {
        FxError::Field {
            field: field.into(),
            path: path.into(),
            source: Box::new(source),
        }
    }
}
