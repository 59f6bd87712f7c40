//! Currency values, type tags, dictionaries and dictionary entries.
//!
//! A currency value is an amount tagged with an uppercase currency name.
//! A currency dictionary maps account names to currency values, preserves
//! insertion order and shares its contents between clones - dictionary
//! contents are handle-addressable, so a dictionary passed to a function
//! or stored in a second variable refers to the same entries.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;

use crate::handle::Handle;
use crate::value::Value;

/// An uppercase currency name. Equality is by the wrapped string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CurrencyType(String);

impl CurrencyType {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An amount tagged with a currency type.
///
/// Integer amounts are widened to floating point on construction; the
/// textual form is the amount to two decimals followed by the tag.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyValue {
    pub amount: f64,
    pub curtype: CurrencyType,
}

impl CurrencyValue {
    pub fn new(amount: f64, curtype: CurrencyType) -> Self {
        Self { amount, curtype }
    }

    /// Replaces the amount, preserving the tag.
    pub fn set_value(&mut self, amount: f64) {
        self.amount = amount;
    }
}

impl fmt::Display for CurrencyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} {}", self.amount, self.curtype)
    }
}

/// An insertion-ordered mapping from account names to currency values.
///
/// Clones share the same storage: the entries live behind a reference-
/// counted cell, and each entry is itself a [`Handle`], so mutations made
/// through any clone (or through an entry handle obtained from `get` or
/// iteration) are visible everywhere.
#[derive(Debug, Clone, Default)]
pub struct CurrencyDict {
    entries: Rc<RefCell<IndexMap<String, Handle>>>,
}

impl CurrencyDict {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry; returns false (and leaves the dictionary
    /// untouched) if the name already exists.
    pub fn insert(&self, name: String, value: Handle) -> bool {
        let mut entries = self.entries.borrow_mut();
        if entries.contains_key(&name) {
            return false;
        }
        entries.insert(name, value);
        true
    }

    /// The entry handle stored under `name`, if any.
    pub fn get(&self, name: &str) -> Option<Handle> {
        self.entries.borrow().get(name).cloned()
    }

    /// A new dictionary containing only the entries whose currency type
    /// matches `curtype`. The entry handles are shared with `self`.
    pub fn filter_by_type(&self, curtype: &CurrencyType) -> CurrencyDict {
        let filtered = CurrencyDict::new();
        for (name, handle) in self.entries.borrow().iter() {
            let matches = handle.with(|value| {
                matches!(value, Value::Currency(c) if c.curtype == *curtype)
            });
            if matches {
                filtered
                    .entries
                    .borrow_mut()
                    .insert(name.clone(), handle.clone());
            }
        }
        filtered
    }

    /// A snapshot of the entries in insertion order.
    pub fn entries(&self) -> Vec<(String, Handle)> {
        self.entries
            .borrow()
            .iter()
            .map(|(name, handle)| (name.clone(), handle.clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl fmt::Display for CurrencyDict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (index, (name, handle)) in self.entries.borrow().iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "\"{}\": {}", name, handle.cloned())?;
        }
        write!(f, "}}")
    }
}

/// One dictionary entry as seen by a for loop: a readable name plus the
/// shared handle of the stored currency value.
#[derive(Debug, Clone)]
pub struct DictEntry {
    pub name: String,
    pub value: Handle,
}

impl fmt::Display for DictEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.value.cloned())
    }
}
