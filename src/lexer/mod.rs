/*
 * ==========================================================================
 * TILDE - Source Text to Syntax Tree
 * ==========================================================================
 * 
 * File:     lexer/mod.rs
 * Purpose:  Root module for the Tilde lexical analyzer.
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

/// Token categories, subkinds, values and the `Token` struct itself.
pub mod token;

/// The ordered lexical grammar table (`TOKEN_SPECS`).
pub mod spec;

/// The on-demand scanner plus `tokenize` / `lexemes` helpers.
pub mod scanner;

pub use scanner::{lexemes, tokenize, Scanner};
pub use spec::{TokenSpec, TOKEN_SPECS};
pub use token::{Token, TokenCategory, TokenKind, TokenValue};
