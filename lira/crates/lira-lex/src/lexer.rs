//! Main lexer implementation for the lira language.
//!
//! The lexer produces one token per call to [`Lexer::next_token`]. After
//! skipping whitespace it tries, in order: end-of-file, comment, number,
//! single-or-double-char operator, strict double-char operator
//! (`&&`/`||`), identifier/keyword/currency-type, string literal. If
//! nothing matches the call fails with a "can't match any token" error at
//! the current position.
//!
//! The set of known currency names is supplied up front (discovered from
//! the exchange-rate table); an identifier whose uppercase form is a known
//! currency name is emitted as a currency-type constant.

use rustc_hash::FxHashSet;

use lira_util::SourcePosition;

use crate::cursor::{Cursor, ETX};
use crate::error::LexError;
use crate::token::{keyword_from_ident, Token, TokenKind};

/// Length limits enforced while tokenizing.
#[derive(Debug, Clone)]
pub struct LexerConfig {
    /// Maximum number of characters in an identifier.
    pub identifier_max_len: usize,
    /// Maximum number of characters in a string literal (after escapes).
    pub str_max_len: usize,
    /// Maximum number of decimal digits in an integer constant.
    pub int_max_len: usize,
    /// Maximum number of fractional digits in a float constant.
    pub float_max_len: usize,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            identifier_max_len: 80,
            str_max_len: 120,
            int_max_len: 15,
            float_max_len: 30,
        }
    }
}

/// The lexer for lira source and for exchange-rate tables.
///
/// # Example
///
/// ```
/// use lira_lex::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("int a = 42;");
/// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Int);
/// assert_eq!(
///     lexer.next_token().unwrap().kind,
///     TokenKind::Ident("a".to_string())
/// );
/// ```
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    currencies: FxHashSet<String>,
    config: LexerConfig,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer with an empty currency-name set and default limits.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            currencies: FxHashSet::default(),
            config: LexerConfig::default(),
        }
    }

    /// Sets the known currency names (uppercase).
    pub fn with_currencies(mut self, currencies: FxHashSet<String>) -> Self {
        self.currencies = currencies;
        self
    }

    /// Overrides the length limits.
    pub fn with_config(mut self, config: LexerConfig) -> Self {
        self.config = config;
        self
    }

    /// Produces the next token, or a lexical error.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();

        if let Some(token) = self.try_eof() {
            return Ok(token);
        }
        if let Some(token) = self.try_comment() {
            return Ok(token);
        }
        if let Some(token) = self.try_number()? {
            return Ok(token);
        }
        if let Some(token) = self.try_operator() {
            return Ok(token);
        }
        if let Some(token) = self.try_strict_double()? {
            return Ok(token);
        }
        if let Some(token) = self.try_identifier()? {
            return Ok(token);
        }
        if let Some(token) = self.try_string()? {
            return Ok(token);
        }

        Err(LexError::new(
            "can't match any token",
            self.cursor.position(),
        ))
    }

    fn skip_whitespace(&mut self) {
        while !self.cursor.is_at_end() && self.cursor.current_char().is_whitespace() {
            self.cursor.advance();
        }
    }

    fn try_eof(&self) -> Option<Token> {
        if self.cursor.is_at_end() {
            Some(Token::new(TokenKind::Eof, self.cursor.position()))
        } else {
            None
        }
    }

    /// A comment runs from `#` to the end of the line; the newline itself
    /// is consumed along with it.
    fn try_comment(&mut self) -> Option<Token> {
        if self.cursor.current_char() != '#' {
            return None;
        }

        let position = self.cursor.position();
        self.cursor.advance();

        let mut text = String::new();
        while self.cursor.current_char() != '\n' && self.cursor.current_char() != ETX {
            text.push(self.cursor.current_char());
            self.cursor.advance();
        }
        self.cursor.advance();

        Some(Token::new(TokenKind::Comment(text), position))
    }

    /// Numbers: a leading `0` is the integer zero on its own (any digits
    /// after it start a new token), otherwise digits accumulate into an
    /// integer bounded by `int_max_len`. A `.` turns the literal into a
    /// float with at least one, at most `float_max_len`, fractional
    /// digits. A trailing currency-type constant is a separate token; the
    /// parser fuses the two into a currency literal.
    fn try_number(&mut self) -> Result<Option<Token>, LexError> {
        let ch = self.cursor.current_char();
        if !ch.is_ascii_digit() {
            return Ok(None);
        }

        let position = self.cursor.position();
        let mut number: i64 = 0;

        if ch == '0' {
            self.cursor.advance();
        } else {
            let mut digits = 0usize;
            while self.cursor.current_char().is_ascii_digit() {
                if digits == self.config.int_max_len {
                    return Err(LexError::new(
                        format!("max int length exceeded ({})", self.config.int_max_len),
                        position,
                    ));
                }
                digits += 1;
                number = number * 10 + i64::from(self.cursor.current_char() as u8 - b'0');
                self.cursor.advance();
            }
        }

        if let Some(token) = self.try_fraction(number, position)? {
            return Ok(Some(token));
        }

        Ok(Some(Token::new(TokenKind::IntConst(number), position)))
    }

    fn try_fraction(
        &mut self,
        whole: i64,
        position: SourcePosition,
    ) -> Result<Option<Token>, LexError> {
        if self.cursor.current_char() != '.' {
            return Ok(None);
        }
        self.cursor.advance();

        if !self.cursor.current_char().is_ascii_digit() {
            return Err(LexError::new(
                "no digit after '.' in a float number",
                position,
            ));
        }

        let mut decimals = 0.0f64;
        let mut count = 0i32;
        while self.cursor.current_char().is_ascii_digit() {
            if count as usize == self.config.float_max_len {
                return Err(LexError::new(
                    format!("max float length exceeded ({})", self.config.float_max_len),
                    position,
                ));
            }
            count += 1;
            decimals = decimals * 10.0 + f64::from(self.cursor.current_char() as u8 - b'0');
            self.cursor.advance();
        }

        let value = whole as f64 + decimals / 10f64.powi(count);
        Ok(Some(Token::new(TokenKind::FloatConst(value), position)))
    }

    /// Single-char tokens, plus the operators that may extend to two
    /// characters (`+=`, `-=`, `<=`, `>=`, `==`, `!=`, `->`).
    fn try_operator(&mut self) -> Option<Token> {
        let position = self.cursor.position();

        let single = match self.cursor.current_char() {
            '*' => Some(TokenKind::Star),
            '/' => Some(TokenKind::Slash),
            ':' => Some(TokenKind::Colon),
            '(' => Some(TokenKind::LParen),
            ')' => Some(TokenKind::RParen),
            '.' => Some(TokenKind::Dot),
            ',' => Some(TokenKind::Comma),
            '{' => Some(TokenKind::LBrace),
            '}' => Some(TokenKind::RBrace),
            ';' => Some(TokenKind::Semicolon),
            _ => None,
        };
        if let Some(kind) = single {
            self.cursor.advance();
            return Some(Token::new(kind, position));
        }

        let first = self.cursor.current_char();
        let bare = match first {
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '<' => TokenKind::Less,
            '>' => TokenKind::Greater,
            '=' => TokenKind::Assign,
            '!' => TokenKind::Not,
            _ => return None,
        };
        self.cursor.advance();

        let doubled = match (first, self.cursor.current_char()) {
            ('+', '=') => Some(TokenKind::PlusAssign),
            ('-', '=') => Some(TokenKind::MinusAssign),
            ('<', '=') => Some(TokenKind::LessEqual),
            ('>', '=') => Some(TokenKind::GreaterEqual),
            ('=', '=') => Some(TokenKind::Equal),
            ('!', '=') => Some(TokenKind::NotEqual),
            ('-', '>') => Some(TokenKind::Arrow),
            _ => None,
        };
        match doubled {
            Some(kind) => {
                self.cursor.advance();
                Some(Token::new(kind, position))
            }
            None => Some(Token::new(bare, position)),
        }
    }

    /// `&&` and `||` exist only as pairs; a lone `&` or `|` is an error.
    fn try_strict_double(&mut self) -> Result<Option<Token>, LexError> {
        let first = self.cursor.current_char();
        let (twin, kind) = match first {
            '&' => ('&', TokenKind::And),
            '|' => ('|', TokenKind::Or),
            _ => return Ok(None),
        };

        let position = self.cursor.position();
        self.cursor.advance();
        if self.cursor.current_char() == twin {
            self.cursor.advance();
            Ok(Some(Token::new(kind, position)))
        } else {
            Err(LexError::new(
                format!("missing second char in '{first}{twin}'"),
                position,
            ))
        }
    }

    /// Identifiers start with a letter and continue with letters, digits
    /// and underscores, bounded by `identifier_max_len`. The spelling is
    /// checked against the keyword table first, then (case-folded to
    /// uppercase) against the known currency names.
    fn try_identifier(&mut self) -> Result<Option<Token>, LexError> {
        if !self.cursor.current_char().is_alphabetic() {
            return Ok(None);
        }

        let position = self.cursor.position();
        let mut text = String::new();

        loop {
            let ch = self.cursor.current_char();
            if !(ch.is_alphabetic() || ch.is_ascii_digit() || ch == '_') {
                break;
            }
            if text.chars().count() == self.config.identifier_max_len {
                return Err(LexError::new(
                    "too many characters in identifier",
                    position,
                ));
            }
            text.push(ch);
            self.cursor.advance();
        }

        if let Some(keyword) = keyword_from_ident(&text) {
            return Ok(Some(Token::new(keyword, position)));
        }

        let upper = text.to_uppercase();
        if self.currencies.contains(&upper) {
            return Ok(Some(Token::new(TokenKind::CurtypeConst(upper), position)));
        }

        Ok(Some(Token::new(TokenKind::Ident(text), position)))
    }

    /// String literals are double-quoted, single-line, length-bounded.
    /// `\"`, `\\`, `\n` and `\t` expand; any other escape passes through
    /// as a literal backslash plus the character.
    fn try_string(&mut self) -> Result<Option<Token>, LexError> {
        if self.cursor.current_char() != '"' {
            return Ok(None);
        }

        let position = self.cursor.position();
        self.cursor.advance();

        let mut text = String::new();
        while self.cursor.current_char() != '"' {
            match self.cursor.current_char() {
                ETX => {
                    return Err(LexError::new(
                        "can't match a token, unterminated string",
                        position,
                    ));
                }
                '\n' => {
                    return Err(LexError::new(
                        "can't match a token, multiline string",
                        position,
                    ));
                }
                _ => {}
            }

            if text.chars().count() == self.config.str_max_len {
                return Err(LexError::new("max string length exceeded", position));
            }

            let ch = self.cursor.current_char();
            if ch == '\\' {
                self.cursor.advance();
                match self.cursor.current_char() {
                    '"' => text.push('"'),
                    '\\' => text.push('\\'),
                    'n' => text.push('\n'),
                    't' => text.push('\t'),
                    other => {
                        text.push('\\');
                        text.push(other);
                    }
                }
            } else {
                text.push(ch);
            }
            self.cursor.advance();
        }

        self.cursor.advance();
        Ok(Some(Token::new(TokenKind::StrConst(text), position)))
    }
}
