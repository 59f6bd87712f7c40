//! Statement and block parsing.

use lira_lex::TokenKind;

use crate::ast::{
    Assign, AssignOp, Block, CompoundAssign, Declaration, ElifBranch, Expr, ForStmt, IfStmt,
    ReturnStmt, Segment, Stmt, TransferStmt, WhileStmt,
};
use crate::error::ParseError;
use crate::{value_type_of, Parser};

impl<'a> Parser<'a> {
    // block = "{" { statement } "}" ;
    pub(crate) fn parse_block(&mut self) -> Result<Option<Block>, ParseError> {
        if self.token.kind != TokenKind::LBrace {
            return Ok(None);
        }

        let position = self.token.position;
        self.advance()?;

        let mut statements = Vec::new();
        while let Some(statement) = self.parse_statement()? {
            statements.push(statement);
        }
        self.expect(TokenKind::RBrace, "")?;

        Ok(Some(Block {
            statements,
            position,
        }))
    }

    // statement = declaration | assignment_or_call | conditional | loop
    //           | return | currency_transfer ;
    pub(crate) fn parse_statement(&mut self) -> Result<Option<Stmt>, ParseError> {
        if let Some(statement) = self.parse_declaration()? {
            return Ok(Some(statement));
        }
        if let Some(statement) = self.parse_assignment_or_call()? {
            return Ok(Some(statement));
        }
        if let Some(statement) = self.parse_conditional()? {
            return Ok(Some(statement));
        }
        if let Some(statement) = self.parse_while_loop()? {
            return Ok(Some(statement));
        }
        if let Some(statement) = self.parse_for_loop()? {
            return Ok(Some(statement));
        }
        if let Some(statement) = self.parse_return()? {
            return Ok(Some(statement));
        }
        self.parse_transfer()
    }

    // declaration = type identifier [ "=" expression ] ";" ;
    fn parse_declaration(&mut self) -> Result<Option<Stmt>, ParseError> {
        let Some(ty) = value_type_of(&self.token.kind) else {
            return Ok(None);
        };

        let position = self.token.position;
        self.advance()?;
        let name = self.expect_identifier("")?;

        let init = if self.token.kind == TokenKind::Assign {
            self.advance()?;
            let expression = self.parse_expression()?.ok_or_else(|| {
                ParseError::new("expected an expression after '='", self.token.position)
            })?;
            Some(expression)
        } else {
            None
        };

        self.expect(TokenKind::Semicolon, "")?;

        Ok(Some(Stmt::Declaration(Declaration {
            ty,
            name,
            init,
            position,
        })))
    }

    // assignment_or_call = object_access [ ("="|"+="|"-=") expression ] ";" ;
    fn parse_assignment_or_call(&mut self) -> Result<Option<Stmt>, ParseError> {
        let position = self.token.position;
        let Some(access) = self.parse_object_access()? else {
            return Ok(None);
        };

        let statement = match assign_op(&self.token.kind) {
            Some(op) => {
                if access.ends_in_call() {
                    return Err(ParseError::new("can't assign to a function call", position));
                }
                self.advance()?;
                let value = self.parse_expression()?.ok_or_else(|| {
                    ParseError::new(
                        "expected an expression after an assignment operator",
                        self.token.position,
                    )
                })?;
                match op {
                    None => Stmt::Assign(Assign {
                        target: access,
                        value,
                        position,
                    }),
                    Some(op) => Stmt::CompoundAssign(CompoundAssign {
                        target: access,
                        op,
                        value,
                        position,
                    }),
                }
            }
            None => {
                // A bare access statement must end in a call to mean anything.
                if matches!(access.segments.last(), Some(Segment::Ident(_))) {
                    return Err(ParseError::new(
                        "expected assignment after identifier",
                        position,
                    ));
                }
                Stmt::Expression(access)
            }
        };

        self.expect(TokenKind::Semicolon, "")?;
        Ok(Some(statement))
    }

    // conditional = "if" expression block { "elif" expression block }
    //             [ "else" block ] ;
    fn parse_conditional(&mut self) -> Result<Option<Stmt>, ParseError> {
        if self.token.kind != TokenKind::If {
            return Ok(None);
        }

        let position = self.token.position;
        self.advance()?;

        let condition = self.parse_expression()?.ok_or_else(|| {
            ParseError::new("expected an expression after 'if'", self.token.position)
        })?;
        let block = self.parse_block()?.ok_or_else(|| {
            ParseError::new("expected a block in if statement", self.token.position)
        })?;

        let mut elif_branches = Vec::new();
        while self.token.kind == TokenKind::Elif {
            self.advance()?;
            let condition = self.parse_expression()?.ok_or_else(|| {
                ParseError::new("expected an expression after 'elif'", self.token.position)
            })?;
            let block = self.parse_block()?.ok_or_else(|| {
                ParseError::new("expected a block after elif statement", self.token.position)
            })?;
            elif_branches.push(ElifBranch { condition, block });
        }

        let else_block = if self.token.kind == TokenKind::Else {
            self.advance()?;
            let block = self.parse_block()?.ok_or_else(|| {
                ParseError::new("expected a block after else statement", self.token.position)
            })?;
            Some(block)
        } else {
            None
        };

        Ok(Some(Stmt::If(IfStmt {
            condition,
            block,
            elif_branches,
            else_block,
            position,
        })))
    }

    // "while" expression block
    fn parse_while_loop(&mut self) -> Result<Option<Stmt>, ParseError> {
        if self.token.kind != TokenKind::While {
            return Ok(None);
        }

        let position = self.token.position;
        self.advance()?;

        let condition = self.parse_expression()?.ok_or_else(|| {
            ParseError::new("expected expression after 'while'", self.token.position)
        })?;
        let block = self.parse_block()?.ok_or_else(|| {
            ParseError::new("expected block in while statement", self.token.position)
        })?;

        Ok(Some(Stmt::While(WhileStmt {
            condition,
            block,
            position,
        })))
    }

    // "for" identifier "in" expression block
    fn parse_for_loop(&mut self) -> Result<Option<Stmt>, ParseError> {
        if self.token.kind != TokenKind::For {
            return Ok(None);
        }

        let position = self.token.position;
        self.advance()?;

        let binding = self.expect_identifier(" while building for statement")?;
        self.expect(TokenKind::In, "")?;

        let iterable = self.parse_expression()?.ok_or_else(|| {
            ParseError::new("expected expression after 'in'", self.token.position)
        })?;
        let block = self.parse_block()?.ok_or_else(|| {
            ParseError::new("expected block in for statement", self.token.position)
        })?;

        Ok(Some(Stmt::For(ForStmt {
            binding,
            iterable,
            block,
            position,
        })))
    }

    // return = "return" [ expression ] ";" ;
    fn parse_return(&mut self) -> Result<Option<Stmt>, ParseError> {
        if self.token.kind != TokenKind::Return {
            return Ok(None);
        }

        let position = self.token.position;
        self.advance()?;

        let value = self.parse_expression()?;
        self.expect(TokenKind::Semicolon, "")?;

        Ok(Some(Stmt::Return(ReturnStmt { value, position })))
    }

    // currency_transfer = "from" expression "->" expression
    //                   [ "->" expression ] ";" ;
    fn parse_transfer(&mut self) -> Result<Option<Stmt>, ParseError> {
        if self.token.kind != TokenKind::From {
            return Ok(None);
        }

        let position = self.token.position;
        self.advance()?;

        let source = self.parse_expression()?.ok_or_else(|| {
            ParseError::new("expected an expression after 'from'", self.token.position)
        })?;
        self.expect(TokenKind::Arrow, "")?;
        let amount = self.parse_expression()?.ok_or_else(|| {
            ParseError::new("expected an expression after '->'", self.token.position)
        })?;

        let target = if self.token.kind == TokenKind::Arrow {
            self.advance()?;
            let target = self.parse_expression()?.ok_or_else(|| {
                ParseError::new("expected an expression after '->'", self.token.position)
            })?;
            Some(target)
        } else {
            None
        };

        self.expect(TokenKind::Semicolon, "")?;

        // Shape guards: with a target, both ends must be assignable; without,
        // at least one side must be.
        match &target {
            Some(target_expr) => {
                if !is_assignable(&source) || !is_assignable(target_expr) {
                    return Err(ParseError::new(
                        "wrong expression shapes in transfer, source and target \
                         must be assignable",
                        position,
                    ));
                }
            }
            None => {
                if !is_assignable(&source) && !is_assignable(&amount) {
                    return Err(ParseError::new(
                        "wrong expression shapes in transfer, expected an \
                         assignable expression on one side",
                        position,
                    ));
                }
            }
        }

        Ok(Some(Stmt::Transfer(TransferStmt {
            source,
            amount,
            target,
            position,
        })))
    }
}

/// True when an expression can be written back through (an object access).
fn is_assignable(expr: &Expr) -> bool {
    matches!(expr, Expr::Access(_))
}

/// `None` in the outer `Option` means "not an assignment operator";
/// `Some(None)` is plain `=`, `Some(Some(op))` a compound operator.
#[allow(clippy::option_option)]
fn assign_op(kind: &TokenKind) -> Option<Option<AssignOp>> {
    match kind {
        TokenKind::Assign => Some(None),
        TokenKind::PlusAssign => Some(Some(AssignOp::Add)),
        TokenKind::MinusAssign => Some(Some(AssignOp::Sub)),
        _ => None,
    }
}
