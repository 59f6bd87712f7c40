//! Exchange-rate table analysis.
//!
//! The rate table is a CSV-shaped text file: a comma-separated list of
//! uppercase currency identifiers followed by a comma-separated list of
//! float rates, every element (including the last of each list) followed
//! by a comma. The analyser reuses the lexer - built with an empty
//! currency set, so the names tokenize as plain identifiers - and runs
//! before the program lexer exists. This is the first phase of the
//! two-phase currency-name discovery: phase one reads the names here,
//! phase two tokenizes the program with that name set.

use rustc_hash::FxHashMap;

use crate::error::LexError;
use crate::lexer::Lexer;
use crate::token::TokenKind;

/// Reads currency names and exchange rates out of a rate-table stream.
pub struct RateAnalyser<'a> {
    lexer: Lexer<'a>,
}

impl<'a> RateAnalyser<'a> {
    /// Wraps a lexer positioned at the start of the table.
    pub fn new(lexer: Lexer<'a>) -> Self {
        Self { lexer }
    }

    /// Reads the leading identifier list and returns the currency names.
    ///
    /// Stops at the first non-identifier token. Each name must be followed
    /// by a comma.
    pub fn currency_types(mut self) -> Result<Vec<String>, LexError> {
        let mut names = Vec::new();
        loop {
            let token = self.lexer.next_token()?;
            match token.kind {
                TokenKind::Ident(name) => names.push(name),
                _ => return Ok(names),
            }
            self.expect_comma()?;
        }
    }

    /// Reads the whole table and returns the name -> rate mapping.
    ///
    /// The identifier count and the rate count must match; each rate is
    /// "units of this currency per one reference unit".
    pub fn exchange_rates(mut self) -> Result<FxHashMap<String, f64>, LexError> {
        let mut names = Vec::new();
        let mut token = self.lexer.next_token()?;

        while let TokenKind::Ident(name) = token.kind {
            names.push(name);
            self.expect_comma()?;
            token = self.lexer.next_token()?;
        }

        let mut rates = Vec::new();
        while let TokenKind::FloatConst(rate) = token.kind {
            rates.push(rate);
            self.expect_comma()?;
            token = self.lexer.next_token()?;
        }

        if names.len() != rates.len() {
            return Err(LexError::new(
                "expected same amount of currency types and exchange rates \
                 in an exchange rate csv file",
                token.position,
            ));
        }

        Ok(names.into_iter().zip(rates).collect())
    }

    fn expect_comma(&mut self) -> Result<(), LexError> {
        let token = self.lexer.next_token()?;
        if token.kind != TokenKind::Comma {
            return Err(LexError::new(
                "wrong csv file format - missing comma",
                token.position,
            ));
        }
        Ok(())
    }
}

/// Reads the currency-name list from rate-table text.
pub fn currency_types(text: &str) -> Result<Vec<String>, LexError> {
    RateAnalyser::new(Lexer::new(text)).currency_types()
}

/// Reads the name -> rate mapping from rate-table text.
pub fn exchange_rates(text: &str) -> Result<FxHashMap<String, f64>, LexError> {
    RateAnalyser::new(Lexer::new(text)).exchange_rates()
}
