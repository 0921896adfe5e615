/*
 * ==========================================================================
 * TILDE - Source Text to Syntax Tree
 * ==========================================================================
 * 
 * File:     ast/mod.rs
 * Purpose:  Abstract syntax tree produced by the parser. Nodes own
 *           their children; the tree serializes to ESTree-flavoured JSON.
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

pub mod expr;
pub mod stmt;

pub use expr::{
    AssignOperator, BinaryOperator, Expr, Identifier, LiteralKind, LiteralValue,
};
pub use stmt::{DeclarationKind, Program, Stmt, VariableDeclarator};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn nodes_serialize_with_type_tags() {
        let program = Program {
            body: vec![Stmt::VariableDeclaration {
                kind: DeclarationKind::Const,
                declarations: vec![VariableDeclarator {
                    id: Identifier::new("total"),
                    init: Some(Expr::binary(
                        BinaryOperator::Add,
                        Expr::number(1),
                        Expr::identifier("rest"),
                    )),
                }],
            }],
        };

        let value = serde_json::to_value(&program).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "Program",
                "body": [{
                    "type": "VariableDeclaration",
                    "kind": "Const",
                    "declarations": [{
                        "type": "VariableDeclarator",
                        "id": { "type": "Identifier", "name": "total" },
                        "init": {
                            "type": "BinaryExpression",
                            "operator": "+",
                            "left": { "type": "Literal", "kind": "Number", "value": 1 },
                            "right": { "type": "Identifier", "name": "rest" }
                        }
                    }]
                }]
            })
        );
    }

    #[test]
    fn missing_children_serialize_as_null() {
        let stmt = Stmt::IfStatement {
            test: Expr::boolean(true),
            consequent: Box::new(Stmt::BlockStatement { body: vec![] }),
            alternate: None,
        };
        let value = serde_json::to_value(&stmt).unwrap();
        assert_eq!(value["alternate"], serde_json::Value::Null);
        assert_eq!(value["test"]["kind"], "BoolTrue");
        assert_eq!(value["test"]["value"], true);
    }

    #[test]
    fn assignment_serializes_operator() {
        let expr = Expr::assign(Identifier::new("aa"), Expr::char("z"));
        let value = serde_json::to_value(&expr).unwrap();
        assert_eq!(value["operator"], "=");
        assert_eq!(value["left"]["type"], "Identifier");
        assert_eq!(value["right"]["kind"], "Char");
    }
}
