//! lira-util - Shared plumbing for the lira interpreter pipeline.
//!
//! ============================================================================
//! MODULE OVERVIEW
//! ============================================================================
//!
//! Every phase of the pipeline (lexer, parser, interpreter, driver) depends
//! on this crate; it depends on nothing. It holds the vocabulary types that
//! must mean the same thing everywhere:
//!
//! 1. SOURCE POSITIONS
//!    - 1-based (line, column) pairs
//!    - attached to every token, every AST node, every error
//!    - rendered as `Ln <line> Col <column>` in diagnostics
//!
//! ============================================================================
//! DESIGN PRINCIPLES
//! ============================================================================
//!
//! 1. LEAF CRATE
//!    No dependencies, no I/O, no error types of its own. Error types live
//!    with the phase that raises them (LexError in lira-lex, ParseError in
//!    lira-par, RuntimeError in lira-run); only the position they embed is
//!    defined here.
//!
//! 2. VALUE SEMANTICS
//!    Positions are small Copy values. Advancing produces a new position
//!    instead of mutating, so a position captured at the start of a token
//!    stays valid while the reader moves on:
//!
//!    ```text
//!    advance   : (l, c) -> (l, c + 1)
//!    next_line : (l, c) -> (l + 1, 1)
//!    ```
//!
//! 3. TOTAL ORDER
//!    Positions order lexicographically by (line, column). The lexer's
//!    monotonicity law - every emitted token's position is >= the previous
//!    token's - is checkable with plain `<`/`>=`.

pub mod span;

pub use span::SourcePosition;
