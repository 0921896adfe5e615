/*
 * ==========================================================================
 * TILDE - Source Text to Syntax Tree
 * ==========================================================================
 * 
 * File:     error.rs
 * Purpose:  Structured, fatal errors raised by the scanner and the parser.
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

use crate::lexer::token::TokenKind;
use crate::span::Span;
use std::fmt;
use thiserror::Error;

/// Convenience alias used throughout the front-end.
pub type Result<T> = std::result::Result<T, TildeError>;

/// Every failure the front-end can produce.
///
/// Both variants are fatal: parsing stops at the first one and no partial
/// tree is ever returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TildeError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl TildeError {
    /// Stable error code (E_LEX, E_PARSE).
    pub fn code(&self) -> &'static str {
        match self {
            TildeError::Lex(_) => "E_LEX",
            TildeError::Parse(_) => "E_PARSE",
        }
    }

    /// Primary source location.
    pub fn span(&self) -> Span {
        match self {
            TildeError::Lex(err) => err.span,
            TildeError::Parse(err) => err.span,
        }
    }

    /// Optional follow-up hint for diagnostics.
    pub fn help(&self) -> Option<&'static str> {
        match self {
            TildeError::Lex(err) => err.help(),
            TildeError::Parse(err) => err.help(),
        }
    }
}

/* -------------------------------------------------------------------------- */
/* LEXICAL ERRORS                                                             */
/* -------------------------------------------------------------------------- */

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    /// No grammar-table entry matches at the cursor.
    #[error("Unexpected character '{}'", .character.escape_debug())]
    UnexpectedCharacter { character: char },

    /// An integer literal does not fit in `u64`.
    #[error("Number literal {lexeme} is out of range")]
    NumberOutOfRange { lexeme: String },
}

/// Raised by the scanner when the remaining input cannot be tokenized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}. Line {} column {}.", .span.line, .span.column)]
pub struct LexError {
    pub kind: LexErrorKind,

    /// Byte offset of the offending lexeme in the source.
    pub offset: usize,

    pub span: Span,
}

impl LexError {
    /// The offending character (first character of the lexeme for
    /// out-of-range numbers).
    pub fn character(&self) -> char {
        match &self.kind {
            LexErrorKind::UnexpectedCharacter { character } => *character,
            LexErrorKind::NumberOutOfRange { lexeme } => lexeme.chars().next().unwrap_or('0'),
        }
    }

    pub fn help(&self) -> Option<&'static str> {
        match self.kind {
            LexErrorKind::UnexpectedCharacter { character } if character.is_ascii_lowercase() => {
                Some("identifiers need at least two characters from [a-z_]")
            }
            LexErrorKind::UnexpectedCharacter { .. } => None,
            LexErrorKind::NumberOutOfRange { .. } => {
                Some("number literals must fit in an unsigned 64-bit integer")
            }
        }
    }
}

/* -------------------------------------------------------------------------- */
/* PARSE ERRORS                                                               */
/* -------------------------------------------------------------------------- */

/// The grammar rule that raised a [`ParseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    Statement,
    IfStatement,
    BlockStatement,
    VariableStatement,
    VariableDeclarationList,
    VariableInitializer,
    Expression,
    AssignmentExpression,
    AdditiveExpression,
    MultiplicativeExpression,
    PrimaryExpression,
    ParenthesizedExpression,
    Literal,
    Identifier,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// What the parser actually saw where it needed something else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Found {
    Token(TokenKind),
    EndOfInput,
}

impl From<Option<TokenKind>> for Found {
    fn from(kind: Option<TokenKind>) -> Self {
        kind.map_or(Found::EndOfInput, Found::Token)
    }
}

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Found::Token(kind) => write!(f, "{}", kind),
            Found::EndOfInput => f.write_str("end of input"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("Unexpected token kind {found}, expected {expected}")]
    UnexpectedToken { expected: TokenKind, found: Found },

    #[error("Unexpected token {found}")]
    UnexpectedStatement { found: Found },

    #[error("Unexpected literal token {found}")]
    UnexpectedLiteral { found: Found },

    #[error("Expected any valid primary expression, received unexpected token {found}")]
    UnexpectedPrimary { found: Found },

    #[error("Invalid left-hand side in assignment expression: expected Identifier, got {found}")]
    InvalidAssignmentTarget { found: &'static str },

    #[error("Unexpected token {found}, expected end of input")]
    TrailingInput { found: TokenKind },

    #[error("Nesting exceeds the maximum depth of {limit}")]
    NestingTooDeep { limit: usize },
}

/// Raised by a grammar rule whose expectation was violated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}. Line {} column {}. (in {rule})", .span.line, .span.column)]
pub struct ParseError {
    /// Rule that raised the error.
    pub rule: Rule,
    pub kind: ParseErrorKind,
    /// Offending token's position, or the end of input.
    pub span: Span,
}

impl ParseError {
    pub fn new(rule: Rule, kind: ParseErrorKind, span: Span) -> Self {
        Self { rule, kind, span }
    }

    pub fn help(&self) -> Option<&'static str> {
        match self.kind {
            ParseErrorKind::UnexpectedStatement { .. } => Some(
                "statements start with `if`, `{`, `let`, `const` or an identifier",
            ),
            ParseErrorKind::InvalidAssignmentTarget { .. } => {
                Some("only a bare identifier can appear on the left of `=`")
            }
            ParseErrorKind::NestingTooDeep { .. } => {
                Some("split deeply nested blocks or parentheses into separate statements")
            }
            _ => None,
        }
    }
}
