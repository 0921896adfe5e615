/*
 * ==========================================================================
 * TILDE - Source Text to Syntax Tree
 * ==========================================================================
 * 
 * File:     parser/mod.rs
 * Purpose:  Root module for the Tilde recursive-descent parser.
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

/// Core parser orchestration:
/// - Owns the `Parser` struct (scanner + one token of lookahead)
/// - Exposes the `parse(source)` entry point
pub mod parser;

/// Statement-level parsing:
/// - if / else
/// - blocks
/// - let / const declarations
/// - expression statements
pub mod statements;

/// Expression-level parsing:
/// - assignment → additive → multiplicative → primary
pub mod expressions;

/// Shared parser helpers:
/// - eat() and lookahead checks
/// - error construction
/// - assignment target validation
pub mod helpers;

/// Re-export the public parse entry point so callers can use:
/// `crate::parser::parse(...)`
pub use parser::{parse, Parser, MAX_NESTING_DEPTH};
