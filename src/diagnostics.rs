/*
 * ==========================================================================
 * TILDE - Source Text to Syntax Tree
 * ==========================================================================
 * 
 * Author:   Sam Wilcox
 * Email:    sam@pawx-lang.com
 * 
 * License:
 * This file is part of the TILDE language project.
 * 
 * TILDE is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 * 
 * You may choose either license to govern your use of this software.
 * 
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * 
 * ==========================================================================
 */

use crate::error::TildeError;
use once_cell::sync::Lazy;
use regex::Regex;

/// Same line terminators the scanner counts.
static LINE_END: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r\n|\n|\r").unwrap());

/// Renders human-friendly, compiler-style diagnostics for Tilde errors.
///
/// This printer:
/// - Formats errors with file/line/column information
/// - Displays the offending source line
/// - Highlights the exact error position using a caret (`^`)
/// - Optionally shows a helpful follow-up hint
///
/// Output is plain text. Colouring, if any, belongs to whoever prints it.
pub struct DiagnosticPrinter {
    /// Full source code of the file being parsed.
    source: String,

    /// Name of the source file (e.g. `app.tilde`), for display only.
    file_name: String,
}

impl DiagnosticPrinter {
    pub fn new(file_name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            source: source.into(),
        }
    }

    /// Builds the diagnostic text for `error`.
    ///
    /// # Output Example
    /// ```text
    /// error[E_PARSE]: Unexpected token Number. Line 2 column 3. (in Statement)
    ///   --> app.tilde:2:3
    ///    |
    ///   2 |   42
    ///    |   ^
    /// help: statements start with `if`, `{`, `let`, `const` or an identifier
    /// ```
    pub fn render(&self, error: &TildeError) -> String {
        let span = error.span();
        let src_line = LINE_END
            .split(&self.source)
            .nth(span.line.saturating_sub(1))
            .unwrap_or("");

        let mut out = format!(
            "error[{}]: {}\n  --> {}:{}:{}\n   |\n",
            error.code(),
            error,
            self.file_name,
            span.line,
            span.column
        );
        out.push_str(&format!("{:>3} | {}\n", span.line, src_line));

        // Columns are 1-based character counts; tabs are kept so the caret
        // lines up under the same indentation.
        let underline: String = src_line
            .chars()
            .take(span.column.saturating_sub(1))
            .map(|ch| if ch == '\t' { '\t' } else { ' ' })
            .collect();
        out.push_str(&format!("    | {}^\n", underline));

        if let Some(help) = error.help() {
            out.push_str(&format!("help: {}\n", help));
        }

        out
    }
}
