//! Grammar productions.
//!
//! Each `(`-form is parsed by a method named after its head. Productions
//! enter with the cursor on the token after `(` (the head) and return with
//! the closing `)` consumed. On error they return immediately and leave
//! resynchronization to the top level.

use calc_diagnostic::{
    arity_mismatch, empty_expression, expected_case, expected_identifier, expected_rparen,
    import_unsupported, invalid_number, missing_operand, nested_head, not_a_function,
    too_few_operands, undeclared_identifier, unexpected_token, ErrorCode,
};
use calc_ir::{CompOp, MathOp, NodeId, NodeKind, Pos, Span, Symbol, TokenKind};

use crate::{ParseResult, Parser};

impl Parser<'_> {
    /// Parse a parenthesised form; the cursor is on `(`.
    pub(crate) fn parse_form(&mut self) -> ParseResult<NodeId> {
        calc_stack::ensure_sufficient_stack(|| self.parse_form_inner())
    }

    fn parse_form_inner(&mut self) -> ParseResult<NodeId> {
        let open = self.cursor.pos();
        self.cursor.advance();

        let head = self.cursor.kind();
        if let Some(op) = CompOp::from_token(head) {
            return self.parse_comp(open, op);
        }
        if let Some(op) = MathOp::from_token(head) {
            return self.parse_math(open, op);
        }

        match head {
            TokenKind::Define => self.parse_define(open),
            TokenKind::If => self.parse_if(open),
            TokenKind::Set => self.parse_set(open),
            TokenKind::Print => {
                self.cursor.advance();
                let args = self.parse_operands()?;
                let span = self.close(open)?;
                Ok(self.alloc(NodeKind::Print { args }, span))
            }
            TokenKind::Concat => {
                self.cursor.advance();
                let args = self.parse_operands()?;
                let span = self.close(open)?;
                Ok(self.alloc(NodeKind::Concat { args }, span))
            }
            TokenKind::Switch => self.parse_switch(open),
            TokenKind::Case => self.parse_case(open),
            TokenKind::Ident => self.parse_call(open),
            TokenKind::LParen => Err(self.cursor.report(nested_head(self.cursor.pos()))),
            TokenKind::RParen => Err(self.cursor.report(empty_expression(self.cursor.pos()))),
            TokenKind::Import => Err(self.cursor.report(import_unsupported(self.cursor.pos()))),
            _ => Err(self.cursor.unexpected(unexpected_token)),
        }
    }

    /// Parse an operand: a name, a literal, or a nested form.
    pub(crate) fn parse_sub(&mut self) -> ParseResult<NodeId> {
        match self.cursor.kind() {
            TokenKind::Ident => {
                let name = self.cursor.lit();
                if self.scopes.lookup(self.scope, name).is_none() {
                    return Err(self
                        .cursor
                        .report(undeclared_identifier(self.cursor.pos(), name)));
                }
                Ok(self.parse_name())
            }
            TokenKind::Number => self.parse_number(),
            TokenKind::String => Ok(self.parse_string()),
            TokenKind::LParen => self.parse_form(),
            _ => Err(self.cursor.unexpected(unexpected_token)),
        }
    }

    /// Parse operands until `)` or end of input.
    fn parse_operands(&mut self) -> ParseResult<Vec<NodeId>> {
        let mut operands = Vec::new();
        while !self.cursor.at_close() {
            operands.push(self.parse_sub()?);
        }
        Ok(operands)
    }

    /// Parse an operand that `form` cannot do without.
    fn parse_required(&mut self, form: &str, operand: &str) -> ParseResult<NodeId> {
        if self.cursor.at_close() {
            let pos = self.cursor.pos();
            return Err(self.cursor.report(missing_operand(pos, form, operand)));
        }
        self.parse_sub()
    }

    /// Identifier node for the current token, without resolving it.
    pub(crate) fn parse_name(&mut self) -> NodeId {
        let span = self.cursor.span();
        let name = self.cursor.lit().to_string();
        self.cursor.advance();
        self.alloc(NodeKind::Identifier { name }, span)
    }

    pub(crate) fn parse_number(&mut self) -> ParseResult<NodeId> {
        let span = self.cursor.span();
        let lit = self.cursor.lit();
        self.cursor.advance();
        match lit.parse::<i64>() {
            Ok(value) => Ok(self.alloc(
                NodeKind::Number {
                    lit: lit.to_string(),
                    value,
                },
                span,
            )),
            Err(_) => Err(self.cursor.report(invalid_number(span.start, lit))),
        }
    }

    pub(crate) fn parse_string(&mut self) -> NodeId {
        let span = self.cursor.span();
        let lit = self.cursor.lit().to_string();
        self.cursor.advance();
        self.alloc(NodeKind::Str { lit }, span)
    }

    /// Consume an identifier and return its text.
    fn expect_ident(&mut self, what: &str) -> ParseResult<String> {
        if !self.cursor.check(TokenKind::Ident) {
            return Err(self
                .cursor
                .unexpected(|pos, found| expected_identifier(pos, what, found)));
        }
        let name = self.cursor.lit().to_string();
        self.cursor.advance();
        Ok(name)
    }

    /// Consume `)` and return the position just past it.
    fn expect_rparen(&mut self) -> ParseResult<Pos> {
        if !self.cursor.check(TokenKind::RParen) {
            return Err(self.cursor.unexpected(expected_rparen));
        }
        let end = self.cursor.pos().advance(1);
        self.cursor.advance();
        Ok(end)
    }

    /// Consume the `)` closing a form opened at `open`.
    fn close(&mut self, open: Pos) -> ParseResult<Span> {
        let end = self.expect_rparen()?;
        Ok(Span::new(open, end))
    }

    /// `(op lhs rhs)`
    fn parse_comp(&mut self, open: Pos, op: CompOp) -> ParseResult<NodeId> {
        self.cursor.advance();
        let lhs = self.parse_required("comparison", "left operand")?;
        let rhs = self.parse_required("comparison", "right operand")?;
        let span = self.close(open)?;
        Ok(self.alloc(NodeKind::Comp { op, lhs, rhs }, span))
    }

    /// `(op a b ...)`
    fn parse_math(&mut self, open: Pos, op: MathOp) -> ParseResult<NodeId> {
        let op_pos = self.cursor.pos();
        self.cursor.advance();
        let operands = self.parse_operands()?;
        if operands.len() < 2 {
            return Err(self
                .cursor
                .report(too_few_operands(op_pos, "math expressions", 2)));
        }
        let span = self.close(open)?;
        Ok(self.alloc(NodeKind::Math { op, operands }, span))
    }

    /// `(define name body...)` or `(define (name param...) body...)`
    fn parse_define(&mut self, open: Pos) -> ParseResult<NodeId> {
        let define_pos = self.cursor.pos();
        self.cursor.advance();

        let (name, params) = if self.cursor.check(TokenKind::LParen) {
            self.cursor.advance();
            let name = self.expect_ident("function name")?;
            let mut params = Vec::new();
            while !self.cursor.at_close() {
                params.push(self.expect_ident("parameter")?);
            }
            self.expect_rparen()?;
            (name, params)
        } else {
            (self.expect_ident("function name")?, Vec::new())
        };

        // Bound before the body so the function can call itself.
        let enclosing = self.scope;
        self.scopes.insert(
            enclosing,
            name.as_str(),
            Symbol::Function {
                arity: params.len(),
            },
        );
        let scope = self.scopes.push(enclosing);
        for param in &params {
            self.scopes.insert(scope, param.as_str(), Symbol::Parameter);
        }

        self.scope = scope;
        let body = self.parse_operands();
        self.scope = enclosing;
        let body = body?;

        if body.is_empty() {
            return Err(self
                .cursor
                .report(missing_operand(define_pos, "define", "body")));
        }
        let span = self.close(open)?;
        tracing::trace!(name = %name, arity = params.len(), "define");
        Ok(self.alloc(
            NodeKind::Define {
                name,
                params,
                body,
                scope,
            },
            span,
        ))
    }

    /// `(if cond then [else])`
    fn parse_if(&mut self, open: Pos) -> ParseResult<NodeId> {
        self.cursor.advance();
        let cond = self.parse_required("if", "condition")?;
        let then_branch = self.parse_required("if", "then branch")?;
        let else_branch = if self.cursor.at_close() {
            None
        } else {
            Some(self.parse_sub()?)
        };
        let span = self.close(open)?;
        Ok(self.alloc(
            NodeKind::If {
                cond,
                then_branch,
                else_branch,
            },
            span,
        ))
    }

    /// `(set name value)`
    fn parse_set(&mut self, open: Pos) -> ParseResult<NodeId> {
        self.cursor.advance();
        let name = self.expect_ident("first argument to set")?;
        let value = self.parse_required("set", "value")?;
        self.scopes
            .insert(self.scope, name.as_str(), Symbol::Variable);
        let span = self.close(open)?;
        Ok(self.alloc(NodeKind::Set { name, value }, span))
    }

    /// `(switch [pred] (case ...)...)`
    ///
    /// The first operand is the predicate unless it is itself a `case`.
    fn parse_switch(&mut self, open: Pos) -> ParseResult<NodeId> {
        self.cursor.advance();
        let mut pred = None;
        let mut cases = Vec::new();
        while !self.cursor.at_close() {
            let id = self.parse_sub()?;
            let node = &self.arena[id];
            if matches!(node.kind, NodeKind::Case { .. }) {
                cases.push(id);
            } else if pred.is_none() && cases.is_empty() {
                pred = Some(id);
            } else {
                let pos = node.pos();
                let found = node.kind.describe();
                return Err(self.cursor.report(expected_case(pos, found)));
            }
        }
        let span = self.close(open)?;
        Ok(self.alloc(NodeKind::Switch { pred, cases }, span))
    }

    /// `(case test body...)`
    fn parse_case(&mut self, open: Pos) -> ParseResult<NodeId> {
        self.cursor.advance();
        let test = self.parse_required("case", "test")?;
        let body = self.parse_operands()?;
        let span = self.close(open)?;
        Ok(self.alloc(NodeKind::Case { test, body }, span))
    }

    /// `(name arg...)`, a call to a defined function.
    fn parse_call(&mut self, open: Pos) -> ParseResult<NodeId> {
        let callee_pos = self.cursor.pos();
        let callee = self.cursor.lit();
        let arity = match self.scopes.lookup(self.scope, callee) {
            Some(Symbol::Function { arity }) => *arity,
            Some(Symbol::Variable | Symbol::Parameter) => {
                return Err(self.cursor.report(not_a_function(
                    ErrorCode::E1006,
                    callee_pos,
                    callee,
                )));
            }
            None => {
                return Err(self
                    .cursor
                    .report(undeclared_identifier(callee_pos, callee)));
            }
        };
        self.cursor.advance();

        let args = self.parse_operands()?;
        if args.len() != arity {
            return Err(self.cursor.report(arity_mismatch(
                callee_pos,
                callee,
                arity,
                args.len(),
            )));
        }
        let span = self.close(open)?;
        Ok(self.alloc(
            NodeKind::Call {
                callee: callee.to_string(),
                args,
            },
            span,
        ))
    }
}
