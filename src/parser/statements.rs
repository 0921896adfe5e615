/*
 * ==========================================================================
 * TILDE - Source Text to Syntax Tree
 * ==========================================================================
 * 
 * File:     parser/statements.rs
 * Purpose:  Statement-level grammar rules: if / block / variable
 *           declarations / expression statements.
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

use crate::ast::{DeclarationKind, Expr, Stmt, VariableDeclarator};
use crate::error::{ParseErrorKind, Result, Rule};
use crate::lexer::TokenKind;
use crate::parser::parser::Parser;
use log::debug;

impl Parser {
    /// StatementList
    ///   : Statement*
    ///   ;
    ///
    /// Runs until the input ends or the lookahead is the `stop` subkind
    /// (left unconsumed for the caller).
    pub(crate) fn statement_list(&mut self, stop: Option<TokenKind>) -> Result<Vec<Stmt>> {
        let mut statements = Vec::new();

        while let Some(kind) = self.lookahead_kind() {
            if Some(kind) == stop {
                break;
            }
            statements.push(self.statement()?);
        }

        Ok(statements)
    }

    /// Statement
    ///   : IfStatement
    ///   | BlockStatement
    ///   | VariableStatement
    ///   | ExpressionStatement
    ///   ;
    ///
    /// The lookahead's subkind picks the production directly. Each
    /// statement counts as one nesting level.
    pub(crate) fn statement(&mut self) -> Result<Stmt> {
        debug!("statement at {}", self.lookahead_span());

        self.nested(Rule::Statement, |parser| match parser.lookahead_kind() {
            Some(TokenKind::If) => parser.if_statement(),
            Some(TokenKind::LeftBrace) => parser.block_statement(),
            Some(kind @ (TokenKind::Let | TokenKind::Const)) => parser.variable_statement(kind),
            Some(TokenKind::Variable) => parser.expression_statement(),
            _ => Err(parser.error(
                Rule::Statement,
                ParseErrorKind::UnexpectedStatement { found: parser.found() },
            )),
        })
    }

    /// IfStatement
    ///   : 'if' '(' Expression ')' Statement ('else' Statement)?
    ///   ;
    fn if_statement(&mut self) -> Result<Stmt> {
        self.eat(TokenKind::If, Rule::IfStatement)?;
        let test = self.parenthesized_expression()?;
        let consequent = Box::new(self.statement()?);

        let alternate = if self.check(TokenKind::Else) {
            self.eat(TokenKind::Else, Rule::IfStatement)?;
            Some(Box::new(self.statement()?))
        } else {
            None
        };

        Ok(Stmt::IfStatement {
            test,
            consequent,
            alternate,
        })
    }

    /// BlockStatement
    ///   : '{' StatementList? '}'
    ///   ;
    fn block_statement(&mut self) -> Result<Stmt> {
        self.eat(TokenKind::LeftBrace, Rule::BlockStatement)?;

        let body = if self.check(TokenKind::RightBrace) {
            Vec::new()
        } else {
            self.statement_list(Some(TokenKind::RightBrace))?
        };

        self.eat(TokenKind::RightBrace, Rule::BlockStatement)?;

        Ok(Stmt::BlockStatement { body })
    }

    /// VariableStatement
    ///   : ('let' | 'const') VariableDeclarationList
    ///   ;
    fn variable_statement(&mut self, declarator: TokenKind) -> Result<Stmt> {
        self.eat(declarator, Rule::VariableStatement)?;

        let kind = match declarator {
            TokenKind::Const => DeclarationKind::Const,
            _ => DeclarationKind::Let,
        };

        Ok(Stmt::VariableDeclaration {
            kind,
            declarations: self.variable_declaration_list()?,
        })
    }

    /// VariableDeclarationList
    ///   : VariableDeclaration (',' VariableDeclaration)*
    ///   ;
    fn variable_declaration_list(&mut self) -> Result<Vec<VariableDeclarator>> {
        let mut declarations = vec![self.variable_declaration()?];

        while self.check(TokenKind::Comma) {
            self.eat(TokenKind::Comma, Rule::VariableDeclarationList)?;
            declarations.push(self.variable_declaration()?);
        }

        Ok(declarations)
    }

    /// VariableDeclaration
    ///   : Identifier VariableInitializer?
    ///   ;
    fn variable_declaration(&mut self) -> Result<VariableDeclarator> {
        let id = self.identifier()?;

        let init = if self.check(TokenKind::Assign) {
            Some(self.variable_initializer()?)
        } else {
            None
        };

        Ok(VariableDeclarator { id, init })
    }

    /// VariableInitializer
    ///   : '=' AssignmentExpression
    ///   ;
    fn variable_initializer(&mut self) -> Result<Expr> {
        self.eat(TokenKind::Assign, Rule::VariableInitializer)?;
        self.assignment_expression()
    }

    /// ExpressionStatement
    ///   : Expression
    ///   ;
    fn expression_statement(&mut self) -> Result<Stmt> {
        Ok(Stmt::ExpressionStatement {
            expression: self.expression()?,
        })
    }
}
