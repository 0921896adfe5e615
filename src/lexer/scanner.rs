/*
 * ==========================================================================
 * TILDE - Source Text to Syntax Tree
 * ==========================================================================
 * 
 * File:     scanner.rs
 * Purpose:  Single-pass, on-demand scanner driven by the ordered
 *           lexical grammar table.
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

use crate::error::{LexError, LexErrorKind, Result};
use crate::lexer::spec::{TokenSpec, TOKEN_SPECS};
use crate::lexer::token::Token;
use crate::span::Span;
use log::trace;

/// Stateful cursor over a Tilde source string.
///
/// The scanner produces **one token per call**. It never builds a token
/// vector on its own; the parser pulls tokens as it needs lookahead.
///
/// # Matching
/// At every call the grammar table is walked top to bottom and the first
/// entry whose pattern matches a prefix of the remaining input wins
/// (first-match, not longest-match).
#[derive(Debug, Clone, Default)]
pub struct Scanner {
    source: String,

    /// Byte offset into `source`.
    cursor: usize,

    line: usize,
    column: usize,
}

impl Scanner {
    /// Creates a scanner positioned at the start of `source`.
    pub fn new(source: &str) -> Self {
        let mut scanner = Self::default();
        scanner.init(source);
        scanner
    }

    /// Resets the scanner onto a new source text.
    pub fn init(&mut self, source: &str) {
        self.source = source.to_string();
        self.cursor = 0;
        self.line = 1;
        self.column = 1;
    }

    /// Whether the cursor has reached the end of the source.
    pub fn is_eof(&self) -> bool {
        self.cursor >= self.source.len()
    }

    /// Position of the next character to be scanned.
    pub fn position(&self) -> Span {
        Span::new(self.line, self.column)
    }

    /// Returns the next token the parser should see.
    ///
    /// Whitespace, line ends and comments are skipped transparently.
    /// `Ok(None)` means the input is exhausted.
    pub fn next_token(&mut self) -> Result<Option<Token>> {
        while let Some((spec, token)) = self.scan()? {
            if !spec.discard {
                return Ok(Some(token));
            }
        }

        Ok(None)
    }

    /// Returns the next lexeme, **including** discarded ones.
    ///
    /// Concatenating the `raw` text of every lexeme reproduces the source.
    pub fn next_lexeme(&mut self) -> Result<Option<Token>> {
        Ok(self.scan()?.map(|(_, token)| token))
    }

    fn scan(&mut self) -> Result<Option<(&'static TokenSpec, Token)>> {
        if self.is_eof() {
            return Ok(None);
        }

        let rest = &self.source[self.cursor..];

        let Some((spec, len)) = TOKEN_SPECS
            .iter()
            .find_map(|spec| spec.match_len(rest).map(|len| (spec, len)))
        else {
            let character = rest.chars().next().unwrap_or('\0');
            let kind = LexErrorKind::UnexpectedCharacter { character };
            return Err(self.error(kind).into());
        };

        let raw = &rest[..len];

        let Some(value) = (spec.formatter)(raw) else {
            let kind = LexErrorKind::NumberOutOfRange {
                lexeme: raw.to_string(),
            };
            return Err(self.error(kind).into());
        };

        let token = Token {
            category: spec.category,
            kind: spec.kind,
            value,
            raw: raw.to_string(),
            start: self.cursor,
            end: self.cursor + len,
            span: self.position(),
        };

        if spec.kind.is_line_terminator() {
            self.line += 1;
            self.column = 1;
        } else {
            self.advance_columns(&token.raw);
        }
        self.cursor += len;

        trace!(
            "scanned {} {:?} at {}:{}",
            token.kind,
            token.raw,
            token.span.line,
            token.span.column
        );

        Ok(Some((spec, token)))
    }

    /// Moves line/column past `raw`, honouring line terminators embedded
    /// in multi-line block comments and strings.
    fn advance_columns(&mut self, raw: &str) {
        let mut chars = raw.chars().peekable();

        while let Some(ch) = chars.next() {
            match ch {
                '\r' => {
                    chars.next_if_eq(&'\n');
                    self.line += 1;
                    self.column = 1;
                }
                '\n' => {
                    self.line += 1;
                    self.column = 1;
                }
                _ => self.column += 1,
            }
        }
    }

    fn error(&self, kind: LexErrorKind) -> LexError {
        LexError {
            kind,
            offset: self.cursor,
            span: self.position(),
        }
    }
}

/// Scans `source` into the list of tokens the parser would see.
pub fn tokenize(source: &str) -> Result<Vec<Token>> {
    let mut scanner = Scanner::new(source);
    let mut tokens = Vec::new();

    while let Some(token) = scanner.next_token()? {
        tokens.push(token);
    }

    Ok(tokens)
}

/// Scans `source` into every lexeme, discarded trivia included.
pub fn lexemes(source: &str) -> Result<Vec<Token>> {
    let mut scanner = Scanner::new(source);
    let mut tokens = Vec::new();

    while let Some(token) = scanner.next_lexeme()? {
        tokens.push(token);
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TildeError;
    use crate::lexer::token::{TokenCategory, TokenKind, TokenValue};

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn empty_input_yields_no_tokens() {
        assert!(tokenize("").unwrap().is_empty());
        assert!(tokenize("  \t\r\n # only a comment").unwrap().is_empty());
    }

    #[test]
    fn first_match_wins_for_keywords() {
        assert_eq!(kinds("true"), vec![TokenKind::BoolTrue]);
        assert_eq!(kinds("false"), vec![TokenKind::BoolFalse]);
        assert_eq!(kinds("if"), vec![TokenKind::If]);
        assert_eq!(kinds("let const"), vec![TokenKind::Let, TokenKind::Const]);
    }

    #[test]
    fn keyword_boundaries() {
        assert_eq!(kinds("iffy"), vec![TokenKind::Variable]);
        assert_eq!(kinds("letter"), vec![TokenKind::Variable]);
        assert_eq!(kinds("trueish"), vec![TokenKind::BoolTrue, TokenKind::Variable]);
        assert_eq!(kinds("elsewhere"), vec![TokenKind::Else, TokenKind::Variable]);
    }

    #[test]
    fn equal_is_not_split_into_assigns() {
        assert_eq!(kinds("=="), vec![TokenKind::Equal]);
        assert_eq!(kinds("==="), vec![TokenKind::Equal, TokenKind::Assign]);
    }

    #[test]
    fn literal_values_are_formatted() {
        let tokens = tokenize(r#"42 "a b" 'c' true false"#).unwrap();
        let values: Vec<TokenValue> = tokens.into_iter().map(|t| t.value).collect();
        assert_eq!(
            values,
            vec![
                TokenValue::Number(42),
                TokenValue::Text("a b".into()),
                TokenValue::Text("c".into()),
                TokenValue::Bool(true),
                TokenValue::Bool(false),
            ]
        );
    }

    #[test]
    fn identifiers_need_two_characters() {
        assert_eq!(kinds("ab"), vec![TokenKind::Variable]);
        assert_eq!(kinds("_x"), vec![TokenKind::Variable]);

        let err = tokenize("x").unwrap_err();
        match err {
            TildeError::Lex(err) => {
                assert_eq!(err.kind, LexErrorKind::UnexpectedCharacter { character: 'x' });
                assert_eq!(err.span, Span::new(1, 1));
            }
            other => panic!("expected lex error, got {:?}", other),
        }
    }

    #[test]
    fn positions_are_first_character_of_token() {
        let tokens = tokenize("let aa = 10\n  bb").unwrap();
        let spans: Vec<(usize, usize)> = tokens.iter().map(|t| (t.line(), t.column())).collect();
        assert_eq!(spans, vec![(1, 1), (1, 5), (1, 8), (1, 10), (2, 3)]);
        assert_eq!((tokens[3].start, tokens[3].end), (9, 11));
    }

    #[test]
    fn crlf_counts_as_one_line() {
        let tokens = tokenize("aa\r\nbb\rcc").unwrap();
        let lines: Vec<usize> = tokens.iter().map(|t| t.line()).collect();
        assert_eq!(lines, vec![1, 2, 3]);
    }

    #[test]
    fn multi_line_block_comment_advances_lines() {
        let tokens = tokenize("/ one\ntwo /  aa").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].span, Span::new(2, 8));
    }

    #[test]
    fn lone_slash_is_divide() {
        assert_eq!(
            kinds("aa / bb"),
            vec![TokenKind::Variable, TokenKind::Divide, TokenKind::Variable]
        );
    }

    #[test]
    fn lexemes_are_lossless() {
        let source = "let aa = 1, bb\r\n\tif (aa) { bb = \"x\" } # done\n/ c /";
        let all = lexemes(source).unwrap();
        let rebuilt: String = all.iter().map(|t| t.raw.as_str()).collect();
        assert_eq!(rebuilt, source);
        assert!(all.iter().any(|t| t.category == TokenCategory::Comment));
    }

    #[test]
    fn unknown_character_reports_position() {
        let err = tokenize("aa\n  @").unwrap_err();
        assert_eq!(err.span(), Span::new(2, 3));
    }

    #[test]
    fn columns_count_characters_not_bytes() {
        let tokens = tokenize("\"é\" aa").unwrap();
        assert_eq!(tokens[1].column(), 5);
        assert_eq!(tokens[1].start, 5);
    }

    #[test]
    fn init_resets_state() {
        let mut scanner = Scanner::new("aa\nbb");
        while scanner.next_token().unwrap().is_some() {}
        scanner.init("cc");
        let token = scanner.next_token().unwrap().unwrap();
        assert_eq!(token.span, Span::start());
        assert_eq!(token.start, 0);
    }
}
