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

use serde::Serialize;
use std::fmt;

/// An identifier reference: `{ "type": "Identifier", "name": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub struct Identifier {
    pub name: String,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BinaryOperator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Sub,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
}

impl BinaryOperator {
    pub fn as_str(self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Sub => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The only assignment operator Tilde has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum AssignOperator {
    #[default]
    #[serde(rename = "=")]
    Assign,
}

/// Literal subkind, serialized under the node's `kind` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LiteralKind {
    Number,
    String,
    Char,
    BoolTrue,
    BoolFalse,
}

/// Typed literal payload. Serializes as a bare JSON number, string or bool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LiteralValue {
    Number(u64),
    String(String),
    Bool(bool),
}

/// Every Tilde expression.
///
/// Precedence is encoded by the parser's rule layering, so the tree has
/// no grouping node: `(2+3)*4` is simply a `Multiply` whose left side is
/// an `Add`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Expr {
    AssignmentExpression {
        operator: AssignOperator,
        left: Identifier,
        right: Box<Expr>,
    },

    BinaryExpression {
        operator: BinaryOperator,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    Identifier {
        name: String,
    },

    Literal {
        kind: LiteralKind,
        value: LiteralValue,
    },
}

impl Expr {
    pub fn number(value: u64) -> Self {
        Expr::Literal {
            kind: LiteralKind::Number,
            value: LiteralValue::Number(value),
        }
    }

    pub fn char(value: impl Into<String>) -> Self {
        Expr::Literal {
            kind: LiteralKind::Char,
            value: LiteralValue::String(value.into()),
        }
    }

    pub fn boolean(value: bool) -> Self {
        Expr::Literal {
            kind: if value {
                LiteralKind::BoolTrue
            } else {
                LiteralKind::BoolFalse
            },
            value: LiteralValue::Bool(value),
        }
    }

    pub fn identifier(name: impl Into<String>) -> Self {
        Expr::Identifier { name: name.into() }
    }

    pub fn binary(operator: BinaryOperator, left: Expr, right: Expr) -> Self {
        Expr::BinaryExpression {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn assign(left: Identifier, right: Expr) -> Self {
        Expr::AssignmentExpression {
            operator: AssignOperator::Assign,
            left,
            right: Box::new(right),
        }
    }

    /// Node type name, as it appears in the `"type"` field.
    pub fn node_type(&self) -> &'static str {
        match self {
            Expr::AssignmentExpression { .. } => "AssignmentExpression",
            Expr::BinaryExpression { .. } => "BinaryExpression",
            Expr::Identifier { .. } => "Identifier",
            Expr::Literal { .. } => "Literal",
        }
    }
}

impl From<Identifier> for Expr {
    fn from(id: Identifier) -> Self {
        Expr::Identifier { name: id.name }
    }
}
