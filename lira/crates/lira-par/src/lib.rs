//! lira-par - Parser (Syntactic Analyzer)
//!
//! ============================================================================
//! PARSING THEORY
//! ============================================================================
//!
//! Parsing is the process of analyzing a string of tokens to determine its
//! grammatical structure according to a formal grammar. The output is an
//! Abstract Syntax Tree (AST).
//!
//! FORMAL DEFINITION:
//! ------------------
//! Given:
//! - G = (N, T, P, S) where
//!   N = non-terminal symbols
//!   T = terminal symbols (tokens)
//!   P = production rules
//!   S = start symbol (program)
//!
//! Parsing is finding a derivation S ⇒* w where w is the input token
//! sequence.
//!
//! ALGORITHM: RECURSIVE DESCENT
//! ----------------------------
//! A top-down parser where each non-terminal has a corresponding function.
//! The grammar is LL(1): one token of lookahead decides every production,
//! no backtracking.
//!
//! LEFT RECURSION ELIMINATION:
//! ---------------------------
//! Problem:
//! ```text
//! expr := expr + term | term
//! ```
//! This recurses forever in recursive descent. Solution - iterate and fold
//! left-associatively:
//! ```text
//! parse_additive() {
//!     left = parse_multiplicative();
//!     while current in {+, -} {
//!         op = consume();
//!         right = parse_multiplicative();
//!         left = Binary(left, op, right);
//!     }
//!     return left;
//! }
//! ```
//! Every binary level folds this way except relations, which are
//! non-associative: at most one relation operator per level, so `a < b < c`
//! is a syntax error at the statement that contains it.
//!
//! PRODUCTION RESULTS:
//! -------------------
//! Productions return `Result<Option<T>, ParseError>`:
//! - `Ok(Some(node))` - the production matched and was built
//! - `Ok(None)`       - the production does not start here; the caller
//!                      tries the next alternative
//! - `Err(error)`     - the production was committed to and the input is
//!                      malformed; the first error aborts the parse
//!
//! ERROR MESSAGE QUALITY:
//! ----------------------
//! Every "expected X, got Y" failure carries the offending token's
//! position; every "missing expression after OP" failure carries the
//! operator's position. The parser consumes tokens on demand from a
//! [`Lexer`] and skips comment tokens transparently; a lexical failure
//! surfaces through [`ParseError`] with its own kind prefix.
//!
//! ============================================================================
//! GRAMMAR
//! ============================================================================
//!
//! Grammar (EBNF):
//!
//! ```ebnf
//! program            = { function_definition } ;
//! function_definition= function_type identifier "(" parameters ")" block ;
//! parameters         = [ parameter { "," parameter } ] ;
//! parameter          = type identifier ;
//! block              = "{" { statement } "}" ;
//! statement          = declaration | assignment_or_call | conditional
//!                    | loop | return | currency_transfer ;
//! expression         = conjunction { "||" conjunction } ;
//! conjunction        = negation { "&&" negation } ;
//! negation           = [ "!" ] relation ;
//! relation           = additive [ relation_op additive ] ;
//! additive           = multiplicative { ("+"|"-") multiplicative } ;
//! multiplicative     = unary { ("*"|"/") unary } ;
//! unary              = [ "-" ] term ;
//! term               = literal | object_access | "(" expression ")" ;
//! object_access      = id_or_call { "." id_or_call } ;
//! id_or_call         = identifier [ "(" [ expression { "," expression } ] ")" ] ;
//! ```

pub mod ast;
pub mod error;

mod expr;
mod stmt;

#[cfg(test)]
mod edge_cases;

pub use ast::*;
pub use error::ParseError;

use indexmap::IndexMap;
use lira_lex::{Lexer, Token, TokenKind};

/// The recursive-descent parser.
///
/// # Example
///
/// ```
/// use lira_lex::Lexer;
/// use lira_par::Parser;
///
/// let lexer = Lexer::new("void main() { print(1); }");
/// let program = Parser::new(lexer).unwrap().parse().unwrap();
/// assert!(program.functions.contains_key("main"));
/// ```
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    token: Token,
}

impl<'a> Parser<'a> {
    /// Creates a parser and consumes the first token.
    pub fn new(mut lexer: Lexer<'a>) -> Result<Self, ParseError> {
        let token = Self::next_filtered(&mut lexer)?;
        Ok(Self { lexer, token })
    }

    /// Parses a whole program.
    ///
    /// Function redefinitions are rejected with a reference to the prior
    /// definition's line, and the input must be exhausted once the last
    /// function definition ends.
    pub fn parse(&mut self) -> Result<Program, ParseError> {
        let mut functions: IndexMap<String, FunctionDef> = IndexMap::new();

        while let Some(def) = self.parse_function_def()? {
            if let Some(old) = functions.get(&def.name) {
                return Err(ParseError::new(
                    format!(
                        "redefinition of a function from line {}",
                        old.position.line
                    ),
                    def.position,
                ));
            }
            functions.insert(def.name.clone(), def);
        }

        if self.token.kind != TokenKind::Eof {
            return Err(ParseError::new(
                format!(
                    "expected a function definition, got {}",
                    self.token.kind.describe()
                ),
                self.token.position,
            ));
        }

        Ok(Program { functions })
    }

    // function_definition = function_type identifier "(" parameters ")" block ;
    fn parse_function_def(&mut self) -> Result<Option<FunctionDef>, ParseError> {
        let Some(return_type) = function_type_of(&self.token.kind) else {
            return Ok(None);
        };

        let position = self.token.position;
        self.advance()?;
        let name = self.expect_identifier("")?;
        self.expect(TokenKind::LParen, "")?;
        let params = self.parse_parameters()?;
        self.expect(TokenKind::RParen, "")?;

        let block = self.parse_block()?.ok_or_else(|| {
            ParseError::new("missing block of a defined function", self.token.position)
        })?;

        Ok(Some(FunctionDef {
            name,
            return_type,
            params,
            block,
            position,
        }))
    }

    // parameters = [ parameter { "," parameter } ] ;
    fn parse_parameters(&mut self) -> Result<Vec<Parameter>, ParseError> {
        let mut parameters = Vec::new();
        let Some(first) = self.parse_parameter()? else {
            return Ok(parameters);
        };
        parameters.push(first);

        while self.token.kind == TokenKind::Comma {
            self.advance()?;
            let parameter = self.parse_parameter()?.ok_or_else(|| {
                ParseError::new("expected a parameter after ','", self.token.position)
            })?;
            parameters.push(parameter);
        }

        Ok(parameters)
    }

    // parameter = type identifier ;
    fn parse_parameter(&mut self) -> Result<Option<Parameter>, ParseError> {
        let Some(ty) = value_type_of(&self.token.kind) else {
            return Ok(None);
        };

        let position = self.token.position;
        self.advance()?;
        let name = self.expect_identifier("")?;

        Ok(Some(Parameter { name, ty, position }))
    }

    /// Pulls the next non-comment token.
    fn next_filtered(lexer: &mut Lexer<'a>) -> Result<Token, ParseError> {
        loop {
            let token = lexer.next_token()?;
            if !token.kind.is_comment() {
                return Ok(token);
            }
        }
    }

    fn advance(&mut self) -> Result<(), ParseError> {
        self.token = Self::next_filtered(&mut self.lexer)?;
        Ok(())
    }

    /// Consumes the expected token or fails with "expected X, got Y".
    fn expect(&mut self, expected: TokenKind, context: &str) -> Result<(), ParseError> {
        if self.token.kind != expected {
            return Err(ParseError::new(
                format!(
                    "expected {}, got {}{}",
                    expected.describe(),
                    self.token.kind.describe(),
                    context
                ),
                self.token.position,
            ));
        }
        self.advance()
    }

    /// Consumes an identifier token and returns its spelling.
    fn expect_identifier(&mut self, context: &str) -> Result<String, ParseError> {
        match &self.token.kind {
            TokenKind::Ident(name) => {
                let name = name.clone();
                self.advance()?;
                Ok(name)
            }
            other => Err(ParseError::new(
                format!("expected an identifier, got {}{}", other.describe(), context),
                self.token.position,
            )),
        }
    }
}

/// Maps a type-keyword token to a declarable (non-void) type.
fn value_type_of(kind: &TokenKind) -> Option<ValueType> {
    let ty = match kind {
        TokenKind::Int => ValueType::Int,
        TokenKind::Float => ValueType::Float,
        TokenKind::Str => ValueType::Str,
        TokenKind::Cur => ValueType::Cur,
        TokenKind::Curtype => ValueType::Curtype,
        TokenKind::Bool => ValueType::Bool,
        TokenKind::Dict => ValueType::Dict,
        _ => return None,
    };
    Some(ty)
}

/// Maps a type-keyword token to a function return type (void included).
fn function_type_of(kind: &TokenKind) -> Option<ValueType> {
    match kind {
        TokenKind::Void => Some(ValueType::Void),
        other => value_type_of(other),
    }
}
