/*
 * ==========================================================================
 * TILDE - Source Text to Syntax Tree
 * ==========================================================================
 * 
 * File:     parser/parser.rs
 * Purpose:  Core recursive-descent parser: owns the scanner and the
 *           single token of lookahead, and exposes the public parse entry points.
 *           
 *           The grammar itself is split across sibling modules:
 *           - statements.rs  → Program / statement rules
 *           - expressions.rs → expression rules and operator precedence
 *           - helpers.rs     → eat(), lookahead checks, error construction
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

use crate::ast::{Expr, Program};
use crate::error::{ParseErrorKind, Result, Rule};
use crate::lexer::{Scanner, Token};
use log::info;

/// Deepest allowed nesting of statements and expressions combined.
pub const MAX_NESTING_DEPTH: usize = 256;

/// The Tilde recursive-descent parser.
///
/// This structure maintains:
/// - The scanner over the current source text
/// - Exactly one token of lookahead (`None` only at end of input)
/// - The current nesting depth, bounded by [`MAX_NESTING_DEPTH`]
///
/// A `Parser` is reusable: every call to [`Parser::parse`] resets both.
/// It is not meant to be shared between threads while parsing; separate
/// instances are fully independent.
#[derive(Debug, Default)]
pub struct Parser {
    pub(crate) scanner: Scanner,
    pub(crate) lookahead: Option<Token>,
    pub(crate) depth: usize,
}

/// Parses a complete Tilde program.
///
/// # Pipeline
/// ```text
/// Source → Scanner (on demand) → Parser → Program
/// ```
///
/// # Example
/// ```
/// let program = tilde::parse("let total = 2 + 3 * 4").unwrap();
/// assert_eq!(program.body.len(), 1);
/// ```
pub fn parse(source: &str) -> Result<Program> {
    Parser::new().parse(source)
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `source` into a [`Program`].
    ///
    /// Stops at the first lexical or syntax error; no partial tree is
    /// returned.
    pub fn parse(&mut self, source: &str) -> Result<Program> {
        info!("parsing {} bytes", source.len());

        self.reset(source)?;
        let program = self.program()?;

        info!("parsed {} top-level statements", program.body.len());
        Ok(program)
    }

    /// Parses `source` as a single Expression that must span the whole
    /// input.
    pub fn parse_expression(&mut self, source: &str) -> Result<Expr> {
        self.reset(source)?;
        let expression = self.expression()?;

        if let Some(token) = &self.lookahead {
            let kind = ParseErrorKind::TrailingInput { found: token.kind };
            return Err(self.error(Rule::Expression, kind));
        }

        Ok(expression)
    }

    fn reset(&mut self, source: &str) -> Result<()> {
        self.scanner.init(source);
        self.lookahead = None;
        self.depth = 0;
        self.lookahead = self.scanner.next_token()?;
        Ok(())
    }

    /// Program
    ///   : StatementList
    ///   ;
    pub(crate) fn program(&mut self) -> Result<Program> {
        Ok(Program {
            body: self.statement_list(None)?,
        })
    }
}
