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
use serde::Serialize;

/// Root of every parse: `{ "type": "Program", "body": [...] }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub struct Program {
    pub body: Vec<Stmt>,
}

/// `let` or `const`, serialized as `"Let"` / `"Const"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DeclarationKind {
    Let,
    Const,
}

/// One `name (= init)?` entry of a variable statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub struct VariableDeclarator {
    pub id: Identifier,
    pub init: Option<Expr>,
}

/// All Tilde statements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Stmt {
    /* ----------------------------- */
    /* CONTROL FLOW                  */
    /* ----------------------------- */

    IfStatement {
        test: Expr,
        consequent: Box<Stmt>,
        alternate: Option<Box<Stmt>>,
    },

    BlockStatement {
        body: Vec<Stmt>,
    },

    /* ----------------------------- */
    /* DECLARATIONS                  */
    /* ----------------------------- */

    VariableDeclaration {
        kind: DeclarationKind,
        declarations: Vec<VariableDeclarator>,
    },

    /* ----------------------------- */
    /* EXPRESSIONS                   */
    /* ----------------------------- */

    ExpressionStatement {
        expression: Expr,
    },
}
