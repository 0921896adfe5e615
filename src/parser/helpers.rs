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

use crate::ast::{Expr, Identifier};
use crate::error::{Found, ParseError, ParseErrorKind, Rule, TildeError};
use crate::lexer::{Token, TokenKind};
use crate::parser::parser::{Parser, MAX_NESTING_DEPTH};
use crate::span::Span;
use log::debug;

impl Parser {
    /// Subkind of the current lookahead, `None` at end of input.
    pub(crate) fn lookahead_kind(&self) -> Option<TokenKind> {
        self.lookahead.as_ref().map(|token| token.kind)
    }

    /// Checks the lookahead's subkind without consuming it.
    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.lookahead_kind() == Some(kind)
    }

    pub(crate) fn found(&self) -> Found {
        Found::from(self.lookahead_kind())
    }

    /// Position of the lookahead, or where the input ended.
    pub(crate) fn lookahead_span(&self) -> Span {
        self.lookahead
            .as_ref()
            .map_or_else(|| self.scanner.position(), |token| token.span)
    }

    /// Consumes the lookahead if it is of the `expected` subkind and
    /// returns it, pulling the next token from the scanner.
    ///
    /// Fails without consuming anything when the subkinds differ or the
    /// input has ended.
    pub(crate) fn eat(&mut self, expected: TokenKind, rule: Rule) -> Result<Token, TildeError> {
        match self.lookahead.take() {
            Some(token) if token.kind == expected => {
                self.lookahead = self.scanner.next_token()?;
                Ok(token)
            }
            other => {
                self.lookahead = other;
                let kind = ParseErrorKind::UnexpectedToken {
                    expected,
                    found: self.found(),
                };
                Err(self.error(rule, kind))
            }
        }
    }

    /// Runs `rule_fn` one nesting level deeper, failing with
    /// [`ParseErrorKind::NestingTooDeep`] once the limit is reached.
    pub(crate) fn nested<T>(
        &mut self,
        rule: Rule,
        rule_fn: impl FnOnce(&mut Self) -> Result<T, TildeError>,
    ) -> Result<T, TildeError> {
        if self.depth >= MAX_NESTING_DEPTH {
            let kind = ParseErrorKind::NestingTooDeep {
                limit: MAX_NESTING_DEPTH,
            };
            return Err(self.error(rule, kind));
        }

        self.depth += 1;
        let result = rule_fn(self);
        self.depth -= 1;
        result
    }

    /// Builds a parse error positioned at the current lookahead.
    pub(crate) fn error(&self, rule: Rule, kind: ParseErrorKind) -> TildeError {
        let err = ParseError::new(rule, kind, self.lookahead_span());
        debug!("{} failed: {}", rule, err);
        err.into()
    }

    /// Only a bare identifier may be assigned to.
    ///
    /// `bare` is false when the expression did not start with the
    /// identifier token itself, i.e. it was parenthesized.
    pub(crate) fn check_valid_assignment_target(
        &self,
        target: Expr,
        bare: bool,
    ) -> Result<Identifier, TildeError> {
        match target {
            Expr::Identifier { name } if bare => Ok(Identifier::new(name)),
            other => {
                let found = match other {
                    Expr::Identifier { .. } => "ParenthesizedExpression",
                    _ => other.node_type(),
                };
                Err(self.error(
                    Rule::AssignmentExpression,
                    ParseErrorKind::InvalidAssignmentTarget { found },
                ))
            }
        }
    }
}
