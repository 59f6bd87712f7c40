//! lira-lex - Lexical Analysis (Lexer/Tokenizer)
//!
//! ============================================================================
//! LEXICAL ANALYSIS THEORY
//! ============================================================================
//!
//! Lexical analysis is the first phase of interpretation. It transforms a
//! stream of characters into a stream of tokens.
//!
//! FORMAL DEFINITION:
//! ------------------
//! Let Σ be the alphabet (set of all valid characters).
//! Let Σ* be the set of all strings over Σ.
//!
//! The lexer is a function:
//!   L: Σ* → T*
//! where T is the set of tokens.
//!
//! PROPERTIES:
//! -----------
//! - Linear time complexity: O(n) where n = input length
//! - Single-pass processing, one character of lookahead
//! - Almost context-free: the one context this lexer carries is the set of
//!   known currency names, discovered from the exchange-rate table before
//!   the program is tokenized
//!
//! LEXEME vs TOKEN:
//! ----------------
//! - Lexeme: the actual string of characters (e.g. "cur", "42", "->")
//! - Token: the abstract category + payload (e.g. Cur, IntConst(42), Arrow)
//!
//! Example:
//! ```text
//! Source:  "cur a = 10 USD;"
//!
//! Lexemes: "cur", " ", "a", " ", "=", " ", "10", " ", "USD", ";"
//! Tokens:  [Cur] [Ident("a")] [Assign] [IntConst(10)]
//!          [CurtypeConst("USD")] [Semicolon] [Eof]
//!          ↑ skipping whitespace
//! ```
//!
//! ============================================================================
//! TOKEN CATEGORIES
//! ============================================================================
//!
//! 1. KEYWORDS (Reserved Words)
//!    Type names (int float str cur curtype dict bool void), control words
//!    (if elif else while for in from return) and the boolean literals.
//!
//! 2. IDENTIFIERS
//!    Pattern: letter (letter | digit | "_")*, length-bounded.
//!
//! 3. CURRENCY-TYPE CONSTANTS
//!    An identifier whose uppercase form is a known currency name. The name
//!    set comes from the rate table, so "usd" only becomes a currency token
//!    when the table defines USD; otherwise it stays an identifier.
//!
//! 4. LITERALS
//!    - Integer: 42, 0 (a leading zero is the whole literal)
//!    - Float: 2.5, 0.25 (at least one fractional digit)
//!    - String: "hello\n" (double-quoted, single-line, escapes expand)
//!
//! 5. OPERATORS
//!    - Arithmetic: +, -, *, /
//!    - Comparison: ==, !=, <, >, <=, >=
//!    - Logical: &&, ||, ! (a lone & or | is a lexical error)
//!    - Assignment: =, +=, -=
//!    - Transfer arrow: ->
//!
//! 6. PUNCTUATORS/DELIMITERS
//!    (), {}, ., ,, ;, :
//!
//! 7. SPECIAL
//!    - Comments (# to end of line, emitted so higher layers may filter)
//!    - EOF (end-of-file marker; the cursor's ETX sentinel)
//!
//! ============================================================================
//! IMPLEMENTATION TECHNIQUE
//! ============================================================================
//!
//! Direct-coded (recursive functions): each token family has its own
//! try-function, attempted in a fixed order after whitespace is skipped:
//!
//! ```text
//! next_token():
//!   skip_whitespace()
//!   try_eof() or try_comment() or try_number()
//!     or try_operator() or try_strict_double()
//!     or try_identifier() or try_string()
//!     or error "can't match any token"
//! ```
//!
//! ERROR HANDLING:
//! ---------------
//! Fail-fast. The first lexical error aborts tokenization and surfaces as a
//! [`LexError`] carrying the offending position; there is no recovery or
//! token re-synchronisation.
//!
//! ============================================================================
//! CRATE LAYOUT
//! ============================================================================
//!
//! - [`cursor::Cursor`] - the character-level source reader with
//!   line/column tracking and an end-of-stream sentinel,
//! - [`token::Token`] / [`token::TokenKind`] - the closed token set,
//! - [`lexer::Lexer`] - the tokenizer itself, parameterised by a set of
//!   known currency names so that currency-type identifiers become
//!   distinct tokens,
//! - [`rates::RateAnalyser`] - a reuse of the lexer over a CSV-shaped
//!   exchange-rate table, run before the program lexer is built so the
//!   currency-name set is known.

pub mod cursor;
pub mod error;
pub mod lexer;
pub mod rates;
pub mod token;

#[cfg(test)]
mod edge_cases;

pub use cursor::Cursor;
pub use error::LexError;
pub use lexer::{Lexer, LexerConfig};
pub use rates::RateAnalyser;
pub use token::{Token, TokenKind};
