/*
 * ==========================================================================
 * TILDE - Source Text to Syntax Tree
 * ==========================================================================
 * 
 * File:     spec.rs
 * Purpose:  The ordered lexical grammar table. Entries are tried top
 *           to bottom and the FIRST pattern that matches wins.
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

use crate::lexer::token::{TokenCategory, TokenKind, TokenValue};
use once_cell::sync::Lazy;
use regex::Regex;

/// Turns a raw lexeme into its typed value.
///
/// Returns `None` when the lexeme cannot be represented (an integer
/// literal that overflows `u64`); the scanner reports that as a lex error.
pub type Formatter = fn(&str) -> Option<TokenValue>;

/// One row of the lexical grammar table.
pub struct TokenSpec {
    pub category: TokenCategory,
    pub kind: TokenKind,

    /// Anchored to the start of the remaining input.
    pub pattern: Regex,

    /// Recognized but never handed to the parser.
    pub discard: bool,

    pub formatter: Formatter,
}

impl TokenSpec {
    fn new(category: TokenCategory, kind: TokenKind, pattern: &str) -> Self {
        Self {
            category,
            kind,
            // Table patterns are compile-time literals covered by tests.
            pattern: Regex::new(pattern).unwrap_or_else(|err| {
                panic!("invalid pattern for {}: {}", kind, err)
            }),
            discard: false,
            formatter: identity,
        }
    }

    fn discarded(mut self) -> Self {
        self.discard = true;
        self
    }

    fn format(mut self, formatter: Formatter) -> Self {
        self.formatter = formatter;
        self
    }

    /// Length in bytes of the prefix of `input` this entry matches, if any.
    ///
    /// Empty matches never count, so every successful scan moves the
    /// cursor forward.
    pub fn match_len(&self, input: &str) -> Option<usize> {
        self.pattern
            .find(input)
            .filter(|m| m.start() == 0 && !m.is_empty())
            .map(|m| m.end())
    }
}

fn identity(raw: &str) -> Option<TokenValue> {
    Some(TokenValue::Text(raw.to_string()))
}

fn number(raw: &str) -> Option<TokenValue> {
    raw.parse::<u64>().ok().map(TokenValue::Number)
}

/// Strips the surrounding quote characters. No escape processing.
fn unquote(raw: &str) -> Option<TokenValue> {
    let inner = raw.get(1..raw.len().saturating_sub(1)).unwrap_or("");
    Some(TokenValue::Text(inner.to_string()))
}

fn bool_false(_: &str) -> Option<TokenValue> {
    Some(TokenValue::Bool(false))
}

fn bool_true(_: &str) -> Option<TokenValue> {
    Some(TokenValue::Bool(true))
}

/// The lexical grammar of Tilde, in matching order.
///
/// Order is part of the contract:
/// - discarded trivia comes first, so the block comment (`/ ... /`) is tried
///   before `Divide`;
/// - `true` / `false` come before the identifier pattern;
/// - `Equal` (`==`) comes before `Assign` (`=`);
/// - keywords and declarators come before `Variable`.
pub static TOKEN_SPECS: Lazy<Vec<TokenSpec>> = Lazy::new(|| {
    use TokenCategory as C;
    use TokenKind as K;

    vec![
        // Trivia
        TokenSpec::new(C::Whitespace, K::LineEnd, r"^(?:\r\n|\n|\r)").discarded(),
        TokenSpec::new(C::Whitespace, K::Tab, r"^\t").discarded(),
        TokenSpec::new(C::Whitespace, K::WhiteSpace, r"^[^\S\r\n]+").discarded(),
        TokenSpec::new(C::Comment, K::BlockComment, r"^/[^/]*/").discarded(),
        TokenSpec::new(C::Comment, K::LineComment, r"^#[^\r\n]*").discarded(),
        // Literals
        TokenSpec::new(C::Literal, K::Number, r"^[0-9]+").format(number),
        TokenSpec::new(C::Literal, K::String, r#"^"[^"]*""#).format(unquote),
        TokenSpec::new(C::Literal, K::Char, r"^'[^']*'").format(unquote),
        TokenSpec::new(C::Literal, K::BoolFalse, r"^false").format(bool_false),
        TokenSpec::new(C::Literal, K::BoolTrue, r"^true").format(bool_true),
        // Operators
        TokenSpec::new(C::Operator, K::Add, r"^\+"),
        TokenSpec::new(C::Operator, K::Sub, r"^-"),
        TokenSpec::new(C::Operator, K::Multiply, r"^\*"),
        TokenSpec::new(C::Operator, K::Divide, r"^/"),
        TokenSpec::new(C::Operator, K::Modulo, r"^%"),
        TokenSpec::new(C::Operator, K::Power, r"^\^"),
        TokenSpec::new(C::Operator, K::Equal, r"^=="),
        TokenSpec::new(C::Operator, K::Greater, r"^>"),
        TokenSpec::new(C::Operator, K::Less, r"^<"),
        TokenSpec::new(C::Operator, K::And, r"^&"),
        TokenSpec::new(C::Operator, K::Or, r"^\|"),
        TokenSpec::new(C::Operator, K::Not, r"^!"),
        TokenSpec::new(C::Operator, K::Assign, r"^="),
        // Delimiters
        TokenSpec::new(C::Delimiter, K::AssignType, r"^:"),
        TokenSpec::new(C::Delimiter, K::Dot, r"^\."),
        TokenSpec::new(C::Delimiter, K::Comma, r"^,"),
        TokenSpec::new(C::Delimiter, K::LeftBrace, r"^\{"),
        TokenSpec::new(C::Delimiter, K::RightBrace, r"^\}"),
        TokenSpec::new(C::Delimiter, K::LeftParen, r"^\("),
        TokenSpec::new(C::Delimiter, K::RightParen, r"^\)"),
        // Keywords
        TokenSpec::new(C::Keyword, K::If, r"^if\b"),
        TokenSpec::new(C::Keyword, K::Else, r"^else"),
        TokenSpec::new(C::Keyword, K::ShortIf, r"^\?"),
        // Declarators
        TokenSpec::new(C::Declarator, K::Let, r"^let\b"),
        TokenSpec::new(C::Declarator, K::Const, r"^const\b"),
        // Identifiers: two or more of [a-z_]
        TokenSpec::new(C::Identifier, K::Variable, r"^[a-z_][a-z_]+"),
    ]
});
