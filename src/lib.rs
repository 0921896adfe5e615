/*
 * ==========================================================================
 * TILDE - Source Text to Syntax Tree
 * ==========================================================================
 * 
 * File:     lib.rs
 * Purpose:  Library root: scanner, parser, AST and error types for
 *           the Tilde language.
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

//! Tilde front-end.
//!
//! Turns Tilde source text into an abstract syntax tree:
//! - [`lexer`]: ordered token table and on-demand scanner
//! - [`parser`]: recursive-descent parser with one token of lookahead
//! - [`ast`]: serializable tree nodes
//! - [`error`]: fatal lexical / syntax errors
//!
//! ```
//! use tilde::ast::{BinaryOperator, Expr, Stmt};
//!
//! let program = tilde::parse("total = 2 + 3 * 4").unwrap();
//! match &program.body[0] {
//!     Stmt::ExpressionStatement { expression: Expr::AssignmentExpression { right, .. } } => {
//!         assert!(matches!(**right, Expr::BinaryExpression { operator: BinaryOperator::Add, .. }));
//!     }
//!     other => panic!("unexpected {:?}", other),
//! }
//! ```

pub mod ast;
pub mod cli;
pub mod diagnostics;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod span;

pub use error::{LexError, ParseError, Result, TildeError};
pub use parser::{parse, Parser, MAX_NESTING_DEPTH};
pub use span::Span;
