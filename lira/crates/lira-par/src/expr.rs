//! Expression parsing.
//!
//! The grammar folds left-associatively at every binary level except
//! relations, which are non-associative (at most one relation operator per
//! level). "Missing expression after OP" failures carry the operator's
//! position; everything else points at the offending token.

use lira_lex::TokenKind;

use crate::ast::{
    BinOp, BinaryExpr, CallSegment, Expr, IdentSegment, LiteralExpr, LiteralKind, ObjectAccess,
    Pair, Segment, UnOp, UnaryExpr,
};
use crate::error::ParseError;
use crate::Parser;

impl<'a> Parser<'a> {
    // expression = conjunction { "||" conjunction } ;
    pub(crate) fn parse_expression(&mut self) -> Result<Option<Expr>, ParseError> {
        let Some(mut left) = self.parse_conjunction()? else {
            return Ok(None);
        };

        while self.token.kind == TokenKind::Or {
            let position = self.token.position;
            self.advance()?;
            let right = self.parse_conjunction()?.ok_or_else(|| {
                ParseError::new("missing expression after '||'", position)
            })?;
            left = Expr::Binary(BinaryExpr {
                op: BinOp::Or,
                left: Box::new(left),
                right: Box::new(right),
                position,
            });
        }

        Ok(Some(left))
    }

    // conjunction = negation { "&&" negation } ;
    fn parse_conjunction(&mut self) -> Result<Option<Expr>, ParseError> {
        let Some(mut left) = self.parse_negation()? else {
            return Ok(None);
        };

        while self.token.kind == TokenKind::And {
            let position = self.token.position;
            self.advance()?;
            let right = self.parse_negation()?.ok_or_else(|| {
                ParseError::new("missing expression after '&&'", position)
            })?;
            left = Expr::Binary(BinaryExpr {
                op: BinOp::And,
                left: Box::new(left),
                right: Box::new(right),
                position,
            });
        }

        Ok(Some(left))
    }

    // negation = [ "!" ] relation ;
    fn parse_negation(&mut self) -> Result<Option<Expr>, ParseError> {
        if self.token.kind != TokenKind::Not {
            return self.parse_relation();
        }

        let position = self.token.position;
        self.advance()?;
        let operand = self
            .parse_relation()?
            .ok_or_else(|| ParseError::new("expected expression after '!'", position))?;

        Ok(Some(Expr::Unary(UnaryExpr {
            op: UnOp::Not,
            operand: Box::new(operand),
            position,
        })))
    }

    // relation = additive [ relation_op additive ] ;
    fn parse_relation(&mut self) -> Result<Option<Expr>, ParseError> {
        let Some(left) = self.parse_additive()? else {
            return Ok(None);
        };

        let Some(op) = relation_op(&self.token.kind) else {
            return Ok(Some(left));
        };

        let position = self.token.position;
        self.advance()?;
        let right = self.parse_additive()?.ok_or_else(|| {
            ParseError::new(
                format!("missing expression after '{}'", op.spelling()),
                position,
            )
        })?;

        Ok(Some(Expr::Binary(BinaryExpr {
            op,
            left: Box::new(left),
            right: Box::new(right),
            position,
        })))
    }

    // additive = multiplicative { ("+"|"-") multiplicative } ;
    fn parse_additive(&mut self) -> Result<Option<Expr>, ParseError> {
        let Some(mut left) = self.parse_multiplicative()? else {
            return Ok(None);
        };

        while let Some(op) = additive_op(&self.token.kind) {
            let position = self.token.position;
            self.advance()?;
            let right = self.parse_multiplicative()?.ok_or_else(|| {
                ParseError::new(
                    format!("missing expression after '{}'", op.spelling()),
                    position,
                )
            })?;
            left = Expr::Binary(BinaryExpr {
                op,
                left: Box::new(left),
                right: Box::new(right),
                position,
            });
        }

        Ok(Some(left))
    }

    // multiplicative = unary { ("*"|"/") unary } ;
    fn parse_multiplicative(&mut self) -> Result<Option<Expr>, ParseError> {
        let Some(mut left) = self.parse_unary()? else {
            return Ok(None);
        };

        while let Some(op) = multiplicative_op(&self.token.kind) {
            let position = self.token.position;
            self.advance()?;
            let right = self.parse_unary()?.ok_or_else(|| {
                ParseError::new(
                    format!("missing expression after '{}'", op.spelling()),
                    position,
                )
            })?;
            left = Expr::Binary(BinaryExpr {
                op,
                left: Box::new(left),
                right: Box::new(right),
                position,
            });
        }

        Ok(Some(left))
    }

    // unary = [ "-" ] term ;
    fn parse_unary(&mut self) -> Result<Option<Expr>, ParseError> {
        if self.token.kind != TokenKind::Minus {
            return self.parse_term();
        }

        let position = self.token.position;
        self.advance()?;
        let operand = self
            .parse_term()?
            .ok_or_else(|| ParseError::new("expected expression after '-'", position))?;

        Ok(Some(Expr::Unary(UnaryExpr {
            op: UnOp::Neg,
            operand: Box::new(operand),
            position,
        })))
    }

    // term = literal | object_access | "(" expression ")" ;
    fn parse_term(&mut self) -> Result<Option<Expr>, ParseError> {
        if let Some(literal) = self.parse_literal()? {
            return Ok(Some(literal));
        }
        if let Some(access) = self.parse_object_access()? {
            return Ok(Some(Expr::Access(access)));
        }
        self.parse_bracket_expression()
    }

    /// Literals: an int or float followed by a currency-type constant is
    /// fused into a currency literal here; the lexer keeps them separate.
    fn parse_literal(&mut self) -> Result<Option<Expr>, ParseError> {
        let position = self.token.position;

        let kind = match self.token.kind.clone() {
            TokenKind::IntConst(value) => {
                self.advance()?;
                match self.parse_currency_suffix()? {
                    Some(curtype) => LiteralKind::Currency {
                        amount: value as f64,
                        curtype,
                    },
                    None => LiteralKind::Int(value),
                }
            }
            TokenKind::FloatConst(value) => {
                self.advance()?;
                match self.parse_currency_suffix()? {
                    Some(curtype) => LiteralKind::Currency {
                        amount: value,
                        curtype,
                    },
                    None => LiteralKind::Float(value),
                }
            }
            TokenKind::StrConst(value) => {
                self.advance()?;
                LiteralKind::Str(value)
            }
            TokenKind::True => {
                self.advance()?;
                LiteralKind::Bool(true)
            }
            TokenKind::False => {
                self.advance()?;
                LiteralKind::Bool(false)
            }
            TokenKind::CurtypeConst(name) => {
                self.advance()?;
                LiteralKind::Curtype(name)
            }
            TokenKind::LBrace => {
                return self.parse_dict().map(Some);
            }
            _ => return Ok(None),
        };

        Ok(Some(Expr::Literal(LiteralExpr { kind, position })))
    }

    fn parse_currency_suffix(&mut self) -> Result<Option<String>, ParseError> {
        match self.token.kind.clone() {
            TokenKind::CurtypeConst(name) => {
                self.advance()?;
                Ok(Some(name))
            }
            _ => Ok(None),
        }
    }

    // dict = "{" [ pair { "," pair } ] "}" ;
    fn parse_dict(&mut self) -> Result<Expr, ParseError> {
        let position = self.token.position;
        self.advance()?;

        let mut pairs = Vec::new();
        if let Some(first) = self.parse_pair()? {
            pairs.push(first);

            while self.token.kind == TokenKind::Comma {
                self.advance()?;
                let pair = self.parse_pair()?.ok_or_else(|| {
                    ParseError::new("expected a pair after ','", self.token.position)
                })?;
                pairs.push(pair);
            }
        }

        // A string right after a pair means the separating comma is missing.
        if !pairs.is_empty() && matches!(self.token.kind, TokenKind::StrConst(_)) {
            return Err(ParseError::new(
                "expected a comma before another pair",
                self.token.position,
            ));
        }

        self.expect(TokenKind::RBrace, " while building dict")?;

        Ok(Expr::Literal(LiteralExpr {
            kind: LiteralKind::Dict(pairs),
            position,
        }))
    }

    // pair = string ":" expression ;
    fn parse_pair(&mut self) -> Result<Option<Pair>, ParseError> {
        let TokenKind::StrConst(name) = self.token.kind.clone() else {
            return Ok(None);
        };

        let position = self.token.position;
        self.advance()?;
        self.expect(TokenKind::Colon, "")?;

        let value = self.parse_expression()?.ok_or_else(|| {
            ParseError::new("expected an expression after ':'", self.token.position)
        })?;

        Ok(Some(Pair {
            name,
            value,
            position,
        }))
    }

    fn parse_bracket_expression(&mut self) -> Result<Option<Expr>, ParseError> {
        if self.token.kind != TokenKind::LParen {
            return Ok(None);
        }

        self.advance()?;
        let expression = self.parse_expression()?.ok_or_else(|| {
            ParseError::new("expected expression inside brackets", self.token.position)
        })?;
        self.expect(TokenKind::RParen, "")?;

        Ok(Some(expression))
    }

    // object_access = id_or_call { "." id_or_call } ;
    pub(crate) fn parse_object_access(&mut self) -> Result<Option<ObjectAccess>, ParseError> {
        let position = self.token.position;
        let Some(first) = self.parse_identifier_or_call()? else {
            return Ok(None);
        };

        let mut segments = vec![first];
        while self.token.kind == TokenKind::Dot {
            self.advance()?;
            let segment = self.parse_identifier_or_call()?.ok_or_else(|| {
                ParseError::new(
                    "expected identifier or call after '.'",
                    self.token.position,
                )
            })?;
            segments.push(segment);
        }

        Ok(Some(ObjectAccess { segments, position }))
    }

    // id_or_call = identifier [ "(" [ expression { "," expression } ] ")" ] ;
    fn parse_identifier_or_call(&mut self) -> Result<Option<Segment>, ParseError> {
        let TokenKind::Ident(name) = self.token.kind.clone() else {
            return Ok(None);
        };

        let position = self.token.position;
        self.advance()?;

        if self.token.kind != TokenKind::LParen {
            return Ok(Some(Segment::Ident(IdentSegment { name, position })));
        }

        self.advance()?;
        let args = self.parse_arguments()?;
        if !args.is_empty() && matches!(self.token.kind, TokenKind::Ident(_)) {
            return Err(ParseError::new(
                "missing a comma between arguments",
                self.token.position,
            ));
        }
        self.expect(TokenKind::RParen, "")?;

        Ok(Some(Segment::Call(CallSegment {
            name,
            args,
            position,
        })))
    }

    fn parse_arguments(&mut self) -> Result<Vec<Expr>, ParseError> {
        let mut arguments = Vec::new();
        let Some(first) = self.parse_expression()? else {
            return Ok(arguments);
        };
        arguments.push(first);

        while self.token.kind == TokenKind::Comma {
            self.advance()?;
            let argument = self.parse_expression()?.ok_or_else(|| {
                ParseError::new("expected expression after ','", self.token.position)
            })?;
            arguments.push(argument);
        }

        Ok(arguments)
    }
}

fn relation_op(kind: &TokenKind) -> Option<BinOp> {
    let op = match kind {
        TokenKind::Less => BinOp::Less,
        TokenKind::LessEqual => BinOp::LessEqual,
        TokenKind::Greater => BinOp::Greater,
        TokenKind::GreaterEqual => BinOp::GreaterEqual,
        TokenKind::Equal => BinOp::Equal,
        TokenKind::NotEqual => BinOp::NotEqual,
        _ => return None,
    };
    Some(op)
}

fn additive_op(kind: &TokenKind) -> Option<BinOp> {
    match kind {
        TokenKind::Plus => Some(BinOp::Add),
        TokenKind::Minus => Some(BinOp::Sub),
        _ => None,
    }
}

fn multiplicative_op(kind: &TokenKind) -> Option<BinOp> {
    match kind {
        TokenKind::Star => Some(BinOp::Mul),
        TokenKind::Slash => Some(BinOp::Div),
        _ => None,
    }
}
