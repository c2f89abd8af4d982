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

//! Indentation-tracking text accumulator.
//!
//! Rendered template fragments are appended as blocks; every non-empty
//! line of a block is prefixed with the current indentation. One emitter
//! instance is owned exclusively by one form compilation and never shared
//! across forms.

use crate::errors::{FxError, Result};

/// Indentation unit prepended once per depth level.
pub const FX_INDENT_UNIT: &str = "  ";

/// Accumulates pre-rendered markup blocks at tracked indentation depth.
#[derive(Debug, Default)]
pub struct FxBlockEmitter {
    indent: usize,
    blocks: Vec<String>,
}

impl FxBlockEmitter {
    /// Creates an empty emitter at depth zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current indentation depth.
    pub fn indent(&self) -> usize {
        self.indent
    }

    /// Opens one indentation level.
    pub fn increase_indent(&mut self) {
        self.indent += 1;
    }

    /// Closes one indentation level.
    ///
    /// Fails with [`FxError::IndentUnderflow`] when the depth is already
    /// zero. Every open wrapper is matched by exactly one close, so this
    /// is unreachable from user input.
    pub fn decrease_indent(&mut self) -> Result<()> {
        self.indent = self.indent.checked_sub(1).ok_or(FxError::IndentUnderflow)?;
        Ok(())
    }

    /// Appends a block, indenting it line by line.
    ///
    /// Empty lines are left untouched so no trailing whitespace is
    /// injected.
    pub fn append(&mut self, block: &str) {
        let prefix = FX_INDENT_UNIT.repeat(self.indent);
        let lines: Vec<String> = block
            .split('\n')
            .map(|line| {
                if line.is_empty() {
                    String::new()
                } else {
                    format!("{}{}", prefix, line)
                }
            })
            .collect();
        self.blocks.push(lines.join("\n"));
    }

    /// Returns the accumulated blocks joined by a single blank line.
    pub fn render(&self) -> String {
        self.blocks.join("\n\n")
    }
}
