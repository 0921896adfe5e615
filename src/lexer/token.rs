/*
 * ==========================================================================
 * TILDE - Source Text to Syntax Tree
 * ==========================================================================
 * 
 * File:     token.rs
 * Purpose:  Defines the lexical token types produced by the scanner
 *           and consumed by the recursive-descent parser.
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

use crate::span::Span;
use serde::Serialize;
use std::fmt;

/// The broad **category** of a token, as listed in the grammar table.
///
/// Categories group subkinds for humans and for the `--tokens` dump; the
/// parser itself only ever looks at the concrete [`TokenKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenCategory {
    /// Line terminators, tabs and generic whitespace.
    Whitespace,
    /// Block (`/ ... /`) and line (`# ...`) comments.
    Comment,
    Literal,
    Operator,
    /// Structural punctuation: `:`, `.`, `,`, braces and parentheses.
    Delimiter,
    Keyword,
    /// `let` / `const`.
    Declarator,
    Identifier,
}

/// The concrete **subkind** of a token.
///
/// This is the discriminator every grammar rule switches on. Its display
/// form is the name used in error messages and in the serialized AST
/// (`"Number"`, `"Let"`, `"{"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    // Discarded
    LineEnd,
    Tab,
    WhiteSpace,
    BlockComment,
    LineComment,

    // Literals
    Number,
    String,
    Char,
    BoolFalse,
    BoolTrue,

    // Operators
    Add,
    Sub,
    Multiply,
    Divide,
    Modulo,
    Power,
    Equal,
    Greater,
    Less,
    And,
    Or,
    Not,
    Assign,

    // Delimiters
    AssignType,
    Dot,
    Comma,
    #[serde(rename = "{")]
    LeftBrace,
    #[serde(rename = "}")]
    RightBrace,
    #[serde(rename = "(")]
    LeftParen,
    #[serde(rename = ")")]
    RightParen,

    // Keywords
    If,
    Else,
    ShortIf,

    // Declarators
    Let,
    Const,

    // Identifiers
    Variable,
}

impl TokenKind {
    /// The name this subkind goes by in diagnostics and serialized output.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::LineEnd => "LineEnd",
            TokenKind::Tab => "Tab",
            TokenKind::WhiteSpace => "WhiteSpace",
            TokenKind::BlockComment => "BlockComment",
            TokenKind::LineComment => "LineComment",
            TokenKind::Number => "Number",
            TokenKind::String => "String",
            TokenKind::Char => "Char",
            TokenKind::BoolFalse => "BoolFalse",
            TokenKind::BoolTrue => "BoolTrue",
            TokenKind::Add => "Add",
            TokenKind::Sub => "Sub",
            TokenKind::Multiply => "Multiply",
            TokenKind::Divide => "Divide",
            TokenKind::Modulo => "Modulo",
            TokenKind::Power => "Power",
            TokenKind::Equal => "Equal",
            TokenKind::Greater => "Greater",
            TokenKind::Less => "Less",
            TokenKind::And => "And",
            TokenKind::Or => "Or",
            TokenKind::Not => "Not",
            TokenKind::Assign => "Assign",
            TokenKind::AssignType => "AssignType",
            TokenKind::Dot => "Dot",
            TokenKind::Comma => "Comma",
            TokenKind::LeftBrace => "{",
            TokenKind::RightBrace => "}",
            TokenKind::LeftParen => "(",
            TokenKind::RightParen => ")",
            TokenKind::If => "If",
            TokenKind::Else => "Else",
            TokenKind::ShortIf => "ShortIf",
            TokenKind::Let => "Let",
            TokenKind::Const => "Const",
            TokenKind::Variable => "Variable",
        }
    }

    /// Whether a lexeme of this subkind ends the current line.
    pub fn is_line_terminator(self) -> bool {
        self == TokenKind::LineEnd
    }

    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::Number
                | TokenKind::String
                | TokenKind::Char
                | TokenKind::BoolFalse
                | TokenKind::BoolTrue
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The **formatted value** of a token.
///
/// Every grammar-table entry owns a formatter that turns the raw lexeme
/// into one of these. Entries without a formatter keep the raw text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TokenValue {
    Number(u64),
    Bool(bool),
    Text(String),
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::Number(n) => write!(f, "{}", n),
            TokenValue::Bool(b) => write!(f, "{}", b),
            TokenValue::Text(text) => f.write_str(text),
        }
    }
}

/// A single classified, positioned lexeme.
///
/// # Example Tokens
/// ```text
/// let   →  { category: Declarator, kind: Let,      raw: "let", line: 1, column: 1 }
/// total →  { category: Identifier, kind: Variable, raw: "total" }
/// 42    →  { category: Literal,    kind: Number,   value: 42 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    pub category: TokenCategory,

    pub kind: TokenKind,

    /// Output of the grammar entry's formatter.
    pub value: TokenValue,

    /// The exact source text that produced this token.
    pub raw: String,

    /// Byte offset of the first character.
    pub start: usize,

    /// Byte offset one past the last character.
    pub end: usize,

    /// Position of the first character.
    #[serde(flatten)]
    pub span: Span,
}

impl Token {
    pub fn line(&self) -> usize {
        self.span.line
    }

    pub fn column(&self) -> usize {
        self.span.column
    }
}

impl fmt::Display for Token {
    /// Tokens print as the text the user wrote.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
