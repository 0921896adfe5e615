// End-to-end parsing tests: source text in, JSON-shaped AST out.

use serde_json::{json, Value};
use tilde::ast::{DeclarationKind, Expr, Stmt};
use tilde::error::{Found, ParseErrorKind, Rule};
use tilde::lexer::TokenKind;
use tilde::{parse, Parser, Span, TildeError, MAX_NESTING_DEPTH};

fn ast(source: &str) -> Value {
    serde_json::to_value(parse(source).unwrap()).unwrap()
}

fn number(n: u64) -> Value {
    json!({ "type": "Literal", "kind": "Number", "value": n })
}

fn ident(name: &str) -> Value {
    json!({ "type": "Identifier", "name": name })
}

#[test]
fn empty_source_is_an_empty_program() {
    assert_eq!(ast(""), json!({ "type": "Program", "body": [] }));
    assert_eq!(ast("  # nothing\n/ here /\n"), json!({ "type": "Program", "body": [] }));
}

#[test]
fn precedence_in_serialized_tree() {
    let tree = ast("total = 2+3*4");
    assert_eq!(
        tree["body"][0]["expression"]["right"],
        json!({
            "type": "BinaryExpression",
            "operator": "+",
            "left": number(2),
            "right": {
                "type": "BinaryExpression",
                "operator": "*",
                "left": number(3),
                "right": number(4)
            }
        })
    );
}

#[test]
fn left_associative_subtraction() {
    let tree = ast("ab-cd-ef");
    assert_eq!(
        tree["body"][0]["expression"],
        json!({
            "type": "BinaryExpression",
            "operator": "-",
            "left": {
                "type": "BinaryExpression",
                "operator": "-",
                "left": ident("ab"),
                "right": ident("cd")
            },
            "right": ident("ef")
        })
    );
}

#[test]
fn right_associative_assignment() {
    let tree = ast("aa = bb = cc");
    assert_eq!(
        tree["body"][0]["expression"],
        json!({
            "type": "AssignmentExpression",
            "operator": "=",
            "left": ident("aa"),
            "right": {
                "type": "AssignmentExpression",
                "operator": "=",
                "left": ident("bb"),
                "right": ident("cc")
            }
        })
    );
}

#[test]
fn if_else_with_blocks() {
    let tree = ast("if (flag) { aa = 1 } else { aa = 2 }");
    let stmt = &tree["body"][0];
    assert_eq!(stmt["type"], "IfStatement");
    assert_eq!(stmt["test"], ident("flag"));
    assert_eq!(stmt["consequent"]["type"], "BlockStatement");
    assert_eq!(stmt["consequent"]["body"][0]["expression"]["right"], number(1));
    assert_eq!(stmt["alternate"]["body"][0]["expression"]["right"], number(2));
}

#[test]
fn if_without_else_has_null_alternate() {
    let tree = ast("if (true) aa = 'c'");
    let stmt = &tree["body"][0];
    assert_eq!(stmt["alternate"], Value::Null);
    assert_eq!(stmt["test"], json!({ "type": "Literal", "kind": "BoolTrue", "value": true }));
    assert_eq!(
        stmt["consequent"]["expression"]["right"],
        json!({ "type": "Literal", "kind": "Char", "value": "c" })
    );
}

#[test]
fn dangling_else_binds_to_nearest_if() {
    let program = parse("if (aa) if (bb) cc = 1 else cc = 2").unwrap();
    match &program.body[0] {
        Stmt::IfStatement {
            consequent,
            alternate: None,
            ..
        } => assert!(matches!(
            **consequent,
            Stmt::IfStatement { alternate: Some(_), .. }
        )),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn nested_and_empty_blocks() {
    let tree = ast("{ } { { aa } }");
    assert_eq!(tree["body"][0], json!({ "type": "BlockStatement", "body": [] }));
    assert_eq!(tree["body"][1]["body"][0]["body"][0]["expression"], ident("aa"));
}

#[test]
fn const_declaration_list() {
    let tree = ast("const name = \"tilde\", other, third = name");
    let stmt = &tree["body"][0];
    assert_eq!(stmt["type"], "VariableDeclaration");
    assert_eq!(stmt["kind"], "Const");
    assert_eq!(
        stmt["declarations"],
        json!([
            {
                "type": "VariableDeclarator",
                "id": ident("name"),
                "init": { "type": "Literal", "kind": "String", "value": "tilde" }
            },
            { "type": "VariableDeclarator", "id": ident("other"), "init": null },
            { "type": "VariableDeclarator", "id": ident("third"), "init": ident("name") }
        ])
    );
}

#[test]
fn initializer_may_be_an_assignment() {
    let program = parse("let aa = bb = 3").unwrap();
    match &program.body[0] {
        Stmt::VariableDeclaration { kind, declarations } => {
            assert_eq!(*kind, DeclarationKind::Let);
            assert!(matches!(
                declarations[0].init,
                Some(Expr::AssignmentExpression { .. })
            ));
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn statements_span_lines_and_comments() {
    let source = "let aa = 1 # first\n/ block\ncomment /\nbb = aa * 2\n";
    let program = parse(source).unwrap();
    assert_eq!(program.body.len(), 2);
}

#[test]
fn parsing_is_deterministic() {
    let source = "let aa = (1 + bb) * 3, cc\nif (aa) { cc = \"x\" } else cc = 'y'";
    assert_eq!(parse(source).unwrap(), parse(source).unwrap());

    let mut parser = Parser::new();
    let first = parser.parse(source).unwrap();
    let second = parser.parse(source).unwrap();
    assert_eq!(first, second);
}

#[test]
fn single_letter_identifier_is_a_lex_error() {
    match parse("let x = 1") {
        Err(TildeError::Lex(err)) => {
            assert_eq!(err.character(), 'x');
            assert_eq!(err.span, Span::new(1, 5));
            assert_eq!(err.offset, 4);
        }
        other => panic!("expected lex error, got {:?}", other),
    }
}

#[test]
fn invalid_assignment_target_inside_declaration() {
    match parse("let xx = (aa) = bb") {
        Err(TildeError::Parse(err)) => {
            assert_eq!(err.rule, Rule::AssignmentExpression);
            assert!(matches!(err.kind, ParseErrorKind::InvalidAssignmentTarget { .. }));
            assert_eq!(err.span, Span::new(1, 15));
        }
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn only_the_first_error_is_reported() {
    match parse("let = 1\nlet = 2") {
        Err(TildeError::Parse(err)) => {
            assert_eq!(err.rule, Rule::Identifier);
            assert_eq!(
                err.kind,
                ParseErrorKind::UnexpectedToken {
                    expected: TokenKind::Variable,
                    found: Found::Token(TokenKind::Assign),
                }
            );
            assert_eq!(err.span.line, 1);
        }
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn unsupported_operators_are_rejected() {
    match parse("aa = bb % cc") {
        Err(TildeError::Parse(err)) => {
            assert_eq!(err.rule, Rule::Statement);
            assert_eq!(
                err.kind,
                ParseErrorKind::UnexpectedStatement {
                    found: Found::Token(TokenKind::Modulo)
                }
            );
        }
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn literal_statement_is_rejected() {
    let err = parse("\"text\"").unwrap_err();
    assert!(err.to_string().contains("Unexpected token String"));
}

#[test]
fn if_requires_parenthesized_test() {
    match parse("if aa { }") {
        Err(TildeError::Parse(err)) => {
            assert_eq!(err.rule, Rule::ParenthesizedExpression);
            assert_eq!(
                err.kind,
                ParseErrorKind::UnexpectedToken {
                    expected: TokenKind::LeftParen,
                    found: Found::Token(TokenKind::Variable),
                }
            );
            assert_eq!(err.span, Span::new(1, 4));
        }
        other => panic!("expected parse error, got {:?}", other),
    }
}

fn nested_parens(depth: usize) -> String {
    format!("aa = {}1{}", "(".repeat(depth), ")".repeat(depth))
}

#[test]
fn moderately_nested_parens_parse() {
    let tree = ast(&nested_parens(200));
    assert_eq!(tree["body"][0]["expression"]["right"], number(1));
}

#[test]
fn deeply_nested_parens_are_an_error_not_a_crash() {
    match parse(&nested_parens(10_000)) {
        Err(TildeError::Parse(err)) => {
            assert_eq!(err.rule, Rule::AssignmentExpression);
            assert_eq!(
                err.kind,
                ParseErrorKind::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH
                }
            );
            assert_eq!(err.span.line, 1);
        }
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn deeply_nested_blocks_and_ifs_are_bounded() {
    let blocks = format!("{}{}", "{".repeat(10_000), "}".repeat(10_000));
    match parse(&blocks) {
        Err(TildeError::Parse(err)) => {
            assert_eq!(err.rule, Rule::Statement);
            assert!(matches!(err.kind, ParseErrorKind::NestingTooDeep { .. }));
        }
        other => panic!("expected parse error, got {:?}", other),
    }

    let ifs = format!("{}aa = 1", "if (aa) ".repeat(10_000));
    assert!(matches!(
        parse(&ifs),
        Err(TildeError::Parse(err)) if matches!(err.kind, ParseErrorKind::NestingTooDeep { .. })
    ));
}

#[test]
fn long_assignment_chain_is_bounded() {
    let chain = format!("{}1", "aa = ".repeat(10_000));
    assert!(matches!(
        parse(&chain),
        Err(TildeError::Parse(err)) if matches!(err.kind, ParseErrorKind::NestingTooDeep { .. })
    ));
}

#[test]
fn parser_recovers_after_nesting_error() {
    let mut parser = Parser::new();
    assert!(parser.parse(&nested_parens(10_000)).is_err());
    let program = parser.parse(&nested_parens(200)).unwrap();
    assert_eq!(program.body.len(), 1);
}
