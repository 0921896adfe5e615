/*
 * ==========================================================================
 * TILDE - Source Text to Syntax Tree
 * ==========================================================================
 * 
 * File:     parser/expressions.rs
 * Purpose:  Expression grammar. Precedence comes purely from rule
 *           layering, loosest to tightest:
 *           
 *             assignment → additive → multiplicative → primary
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

use crate::ast::{BinaryOperator, Expr, Identifier, LiteralKind, LiteralValue};
use crate::error::{ParseErrorKind, Result, Rule};
use crate::lexer::{TokenKind, TokenValue};
use crate::parser::parser::Parser;

/// The two left-associative binary precedence levels.
///
/// Both share [`Parser::binary_expression`]; the level only decides which
/// operators it folds and which rule builds its operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BinaryLevel {
    Additive,
    Multiplicative,
}

type Operand = fn(&mut Parser) -> Result<Expr>;

impl BinaryLevel {
    fn rule(self) -> Rule {
        match self {
            BinaryLevel::Additive => Rule::AdditiveExpression,
            BinaryLevel::Multiplicative => Rule::MultiplicativeExpression,
        }
    }

    fn operators(self) -> &'static [(TokenKind, BinaryOperator)] {
        match self {
            BinaryLevel::Additive => &[
                (TokenKind::Add, BinaryOperator::Add),
                (TokenKind::Sub, BinaryOperator::Sub),
            ],
            BinaryLevel::Multiplicative => &[
                (TokenKind::Multiply, BinaryOperator::Multiply),
                (TokenKind::Divide, BinaryOperator::Divide),
            ],
        }
    }

    /// The next-tighter rule.
    fn operand(self) -> Operand {
        match self {
            BinaryLevel::Additive => Parser::multiplicative_expression,
            BinaryLevel::Multiplicative => Parser::primary_expression,
        }
    }
}

impl Parser {
    /// Expression
    ///   : AssignmentExpression
    ///   ;
    pub(crate) fn expression(&mut self) -> Result<Expr> {
        self.assignment_expression()
    }

    /// AssignmentExpression
    ///   : AdditiveExpression
    ///   | Identifier '=' AssignmentExpression
    ///   ;
    ///
    /// Right-associative: `aa = bb = cc` is `aa = (bb = cc)`.
    ///
    /// Every entry is one nesting level, which bounds both parenthesized
    /// groups and assignment chains.
    pub(crate) fn assignment_expression(&mut self) -> Result<Expr> {
        self.nested(Rule::AssignmentExpression, |parser| {
            let bare = parser.check(TokenKind::Variable);
            let left = parser.additive_expression()?;

            if !parser.check(TokenKind::Assign) {
                return Ok(left);
            }

            let target = parser.check_valid_assignment_target(left, bare)?;
            parser.eat(TokenKind::Assign, Rule::AssignmentExpression)?;
            let right = parser.assignment_expression()?;

            Ok(Expr::assign(target, right))
        })
    }

    /// AdditiveExpression
    ///   : MultiplicativeExpression (('+' | '-') MultiplicativeExpression)*
    ///   ;
    fn additive_expression(&mut self) -> Result<Expr> {
        self.binary_expression(BinaryLevel::Additive)
    }

    /// MultiplicativeExpression
    ///   : PrimaryExpression (('*' | '/') PrimaryExpression)*
    ///   ;
    fn multiplicative_expression(&mut self) -> Result<Expr> {
        self.binary_expression(BinaryLevel::Multiplicative)
    }

    /// Shared left-associative fold: every operator found at this level
    /// wraps everything built so far as its left operand.
    fn binary_expression(&mut self, level: BinaryLevel) -> Result<Expr> {
        let operand = level.operand();
        let mut left = operand(self)?;

        while let Some((kind, operator)) = self.match_operator(level) {
            self.eat(kind, level.rule())?;
            let right = operand(self)?;
            left = Expr::binary(operator, left, right);
        }

        Ok(left)
    }

    fn match_operator(&self, level: BinaryLevel) -> Option<(TokenKind, BinaryOperator)> {
        let kind = self.lookahead_kind()?;
        level
            .operators()
            .iter()
            .copied()
            .find(|(candidate, _)| *candidate == kind)
    }

    /// PrimaryExpression
    ///   : Literal
    ///   | ParenthesizedExpression
    ///   | Identifier
    ///   ;
    fn primary_expression(&mut self) -> Result<Expr> {
        match self.lookahead_kind() {
            Some(TokenKind::LeftParen) => self.parenthesized_expression(),
            Some(kind) if kind.is_literal() => self.literal(),
            Some(TokenKind::Variable) => Ok(self.identifier()?.into()),
            _ => Err(self.error(
                Rule::PrimaryExpression,
                ParseErrorKind::UnexpectedPrimary { found: self.found() },
            )),
        }
    }

    /// ParenthesizedExpression
    ///   : '(' Expression ')'
    ///   ;
    pub(crate) fn parenthesized_expression(&mut self) -> Result<Expr> {
        self.eat(TokenKind::LeftParen, Rule::ParenthesizedExpression)?;
        let expression = self.expression()?;
        self.eat(TokenKind::RightParen, Rule::ParenthesizedExpression)?;
        Ok(expression)
    }

    /// Literal
    ///   : NUMBER | STRING | CHAR | 'true' | 'false'
    ///   ;
    fn literal(&mut self) -> Result<Expr> {
        let (token_kind, kind) = match self.lookahead_kind() {
            Some(TokenKind::Number) => (TokenKind::Number, LiteralKind::Number),
            Some(TokenKind::String) => (TokenKind::String, LiteralKind::String),
            Some(TokenKind::Char) => (TokenKind::Char, LiteralKind::Char),
            Some(TokenKind::BoolTrue) => (TokenKind::BoolTrue, LiteralKind::BoolTrue),
            Some(TokenKind::BoolFalse) => (TokenKind::BoolFalse, LiteralKind::BoolFalse),
            _ => {
                return Err(self.error(
                    Rule::Literal,
                    ParseErrorKind::UnexpectedLiteral { found: self.found() },
                ))
            }
        };

        let token = self.eat(token_kind, Rule::Literal)?;
        let value = match token.value {
            TokenValue::Number(n) => LiteralValue::Number(n),
            TokenValue::Bool(b) => LiteralValue::Bool(b),
            TokenValue::Text(text) => LiteralValue::String(text),
        };

        Ok(Expr::Literal { kind, value })
    }

    /// Identifier
    ///   : VARIABLE
    ///   ;
    pub(crate) fn identifier(&mut self) -> Result<Identifier> {
        let token = self.eat(TokenKind::Variable, Rule::Identifier)?;
        Ok(Identifier::new(token.raw))
    }
}
