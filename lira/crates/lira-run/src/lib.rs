//! lira-run - Runtime and Tree-Walking Interpreter
//!
//! ============================================================================
//! TREE-WALKING EVALUATION THEORY
//! ============================================================================
//!
//! A tree-walking interpreter executes the AST directly: evaluation is a
//! recursive function over the syntax tree, with no bytecode or lowering
//! step in between.
//!
//! FORMAL DEFINITION:
//! ------------------
//! Evaluation is a judgment
//!   E ⊢ expr ⇓ value
//! where E is the environment (the scope chain of the current call frame).
//! Statements instead produce a control outcome:
//!   E ⊢ stmt ⇓ Normal | Return(value?)
//! which is how `return` unwinds blocks, loops and the call itself without
//! any interpreter-global "returning" flag.
//!
//! ENVIRONMENTS:
//! -------------
//! 1. One [`scope::Frame`] per active call, holding a stack of scope
//!    tables; entering a block pushes a scope, leaving pops it, lookup
//!    walks innermost-out.
//! 2. A separate global table maps function names to user definitions and
//!    builtins; variable lookup and function lookup never mix.
//! 3. Calls save the caller's frame, install a fresh one with the callee's
//!    expected return type, and restore on the way out.
//!
//! VALUES AND HANDLES:
//! -------------------
//! Every binding and every dictionary entry owns a [`handle::Handle`], a
//! shared mutable cell. Arguments are passed as handles, so in-place
//! writes (a currency `set_value`, a dictionary `add`, a transfer) reach
//! the caller; declarations bind fresh cells holding clones.
//!
//! CURRENCY ARITHMETIC:
//! --------------------
//! Cross-tag operations normalise through the rate table and re-denominate
//! in the left tag:
//! ```text
//! l' = l.amount / rate(l.tag)
//! r' = r.amount / rate(r.tag)
//! result = op(l', r') * rate(l.tag)   tagged l.tag
//! ```
//! Same-tag arithmetic skips normalisation; comparisons always compare the
//! normalised amounts; scalar scaling never consults the table. Every
//! numeric result is bounds-checked against the maximum signed integer
//! magnitude.
//!
//! TYPE CHECKING:
//! --------------
//! Dynamic, at value-operation sites: each operator admits a fixed set of
//! operand type pairs (the rejection matrix of the ops module) and
//! everything else is a semantic error at the operator's position. The interpreter stops at the
//! first semantic error, surfaced as a [`RuntimeError`] with the offending
//! position.
//!
//! ============================================================================
//! CRATE LAYOUT
//! ============================================================================
//!
//! - [`value::Value`] / [`handle::Handle`] - runtime values behind shared
//!   mutable cells,
//! - [`currency`] - currency values, type tags, dictionaries and entries,
//! - [`exchange::Exchange`] - the rate table with rate-aware arithmetic,
//! - [`scope::Frame`] - call frames and lexical scope chains,
//! - [`builtins::Builtin`] - `print`, `input` and the conversions,
//! - [`interp::Interpreter`] - the tree-walking evaluator.

pub mod builtins;
pub mod currency;
pub mod error;
pub mod exchange;
pub mod handle;
pub mod interp;
pub mod scope;
pub mod value;

mod ops;

#[cfg(test)]
mod edge_cases;

pub use builtins::Builtin;
pub use currency::{CurrencyDict, CurrencyType, CurrencyValue, DictEntry};
pub use error::RuntimeError;
pub use exchange::Exchange;
pub use handle::Handle;
pub use interp::Interpreter;
pub use value::Value;
