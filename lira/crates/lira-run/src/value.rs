//! Runtime values.

use std::fmt;

use lira_par::ValueType;

use crate::currency::{CurrencyDict, CurrencyType, CurrencyValue, DictEntry};

/// A runtime value.
///
/// `Uninit` marks a declared-but-unassigned variable: it remembers the
/// declared type so the first assignment can be checked, and any read
/// before that is a semantic error.
#[derive(Debug, Clone)]
pub enum Value {
    Int(i64),
    Float(f64),
    Str(String),
    Bool(bool),
    Curtype(CurrencyType),
    Currency(CurrencyValue),
    Dict(CurrencyDict),
    Entry(DictEntry),
    Uninit(ValueType),
}

impl Value {
    /// The language-level type of this value, if it has one. Dictionary
    /// entries exist only as loop variables and have no declarable type.
    pub fn value_type(&self) -> Option<ValueType> {
        match self {
            Value::Int(_) => Some(ValueType::Int),
            Value::Float(_) => Some(ValueType::Float),
            Value::Str(_) => Some(ValueType::Str),
            Value::Bool(_) => Some(ValueType::Bool),
            Value::Curtype(_) => Some(ValueType::Curtype),
            Value::Currency(_) => Some(ValueType::Cur),
            Value::Dict(_) => Some(ValueType::Dict),
            Value::Entry(_) => None,
            Value::Uninit(ty) => Some(*ty),
        }
    }

    /// The type name used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::Bool(_) => "bool",
            Value::Curtype(_) => "curtype",
            Value::Currency(_) => "cur",
            Value::Dict(_) => "dict",
            Value::Entry(_) => "dict entry",
            Value::Uninit(_) => "uninitialised",
        }
    }
}

/// Floats keep a trailing `.0` when integral, so an amount converted to
/// text reads as a float rather than an int.
fn fmt_float(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value.is_finite() && value.fract() == 0.0 {
        write!(f, "{value:.1}")
    } else {
        write!(f, "{value}")
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::Float(v) => fmt_float(f, *v),
            Value::Str(v) => f.write_str(v),
            Value::Bool(v) => write!(f, "{v}"),
            Value::Curtype(v) => write!(f, "{v}"),
            Value::Currency(v) => write!(f, "{v}"),
            Value::Dict(v) => write!(f, "{v}"),
            Value::Entry(v) => write!(f, "{v}"),
            Value::Uninit(ty) => write!(f, "<uninitialised {ty}>"),
        }
    }
}
