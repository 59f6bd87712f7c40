//! Call frames and lexical scopes.
//!
//! A frame owns a stack of scope tables and the expected return type of
//! the function it executes. Entering a block pushes a scope, leaving
//! pops it; lookup walks from the innermost scope outward. Function
//! definitions live in a separate global table owned by the interpreter.

use rustc_hash::FxHashMap;

use lira_par::ValueType;

use crate::handle::Handle;

/// One call frame: a scope chain plus the frame's expected return type
/// (`None` for void functions).
#[derive(Debug)]
pub struct Frame {
    scopes: Vec<FxHashMap<String, Handle>>,
    expected_return: Option<ValueType>,
}

impl Frame {
    /// A fresh frame with a single (parameter) scope.
    pub fn new(expected_return: Option<ValueType>) -> Self {
        Self {
            scopes: vec![FxHashMap::default()],
            expected_return,
        }
    }

    pub fn enter_scope(&mut self) {
        self.scopes.push(FxHashMap::default());
    }

    pub fn leave_scope(&mut self) {
        self.scopes.pop();
    }

    /// Binds `name` in the innermost scope, replacing any binding of the
    /// same name there.
    pub fn insert(&mut self, name: String, handle: Handle) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(name, handle);
        }
    }

    /// Looks `name` up, innermost scope first.
    pub fn lookup(&self, name: &str) -> Option<Handle> {
        self.scopes
            .iter()
            .rev()
            .find_map(|scope| scope.get(name).cloned())
    }

    /// True if `name` is bound in the innermost scope (the shadowing
    /// check for declarations).
    pub fn declared_in_current(&self, name: &str) -> bool {
        self.scopes
            .last()
            .map(|scope| scope.contains_key(name))
            .unwrap_or(false)
    }

    pub fn expected_return(&self) -> Option<ValueType> {
        self.expected_return
    }
}
