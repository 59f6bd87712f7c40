//! Built-in functions.
//!
//! Registered in the global function table before `main` runs: `print`,
//! `input`, `to_int`, `to_float`, `to_str`. Each takes one argument; a
//! call with no arguments receives a single space string. Precondition
//! violations are semantic errors at the call position.

use std::io::{BufRead, Write};

use lira_util::SourcePosition;

use crate::error::RuntimeError;
use crate::value::Value;

/// The built-in function set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Print,
    Input,
    ToInt,
    ToFloat,
    ToStr,
}

impl Builtin {
    pub const ALL: [Builtin; 5] = [
        Builtin::Print,
        Builtin::Input,
        Builtin::ToInt,
        Builtin::ToFloat,
        Builtin::ToStr,
    ];

    /// The name the function is registered under.
    pub fn name(self) -> &'static str {
        match self {
            Builtin::Print => "print",
            Builtin::Input => "input",
            Builtin::ToInt => "to_int",
            Builtin::ToFloat => "to_float",
            Builtin::ToStr => "to_str",
        }
    }

    /// Invokes the builtin against an evaluated argument.
    pub fn invoke(
        self,
        arg: &Value,
        out: &mut dyn Write,
        input: &mut dyn BufRead,
        position: SourcePosition,
    ) -> Result<Option<Value>, RuntimeError> {
        match self {
            Builtin::Print => {
                writeln!(out, "{arg}")
                    .map_err(|e| RuntimeError::new(format!("failed to write output: {e}"), position))?;
                Ok(None)
            }
            Builtin::Input => {
                write!(out, "{arg}")
                    .map_err(|e| RuntimeError::new(format!("failed to write output: {e}"), position))?;
                out.flush()
                    .map_err(|e| RuntimeError::new(format!("failed to write output: {e}"), position))?;
                let mut line = String::new();
                input
                    .read_line(&mut line)
                    .map_err(|e| RuntimeError::new(format!("failed to read input: {e}"), position))?;
                while line.ends_with('\n') || line.ends_with('\r') {
                    line.pop();
                }
                Ok(Some(Value::Str(line)))
            }
            Builtin::ToInt => to_int(arg, position).map(Some),
            Builtin::ToFloat => to_float(arg, position).map(Some),
            Builtin::ToStr => to_str(arg, position).map(Some),
        }
    }
}

/// `to_int` accepts float or string; floats truncate toward zero.
fn to_int(arg: &Value, position: SourcePosition) -> Result<Value, RuntimeError> {
    match arg {
        Value::Float(f) => {
            let truncated = f.trunc();
            if !truncated.is_finite() || truncated.abs() > i64::MAX as f64 {
                return Err(RuntimeError::new("wrong value to convert", position));
            }
            Ok(Value::Int(truncated as i64))
        }
        Value::Str(s) => s
            .trim()
            .parse::<i64>()
            .map(Value::Int)
            .map_err(|_| RuntimeError::new("wrong value to convert", position)),
        _ => Err(RuntimeError::new("can convert only float or str", position)),
    }
}

/// `to_float` accepts int or string.
fn to_float(arg: &Value, position: SourcePosition) -> Result<Value, RuntimeError> {
    match arg {
        Value::Int(i) => Ok(Value::Float(*i as f64)),
        Value::Str(s) => s
            .trim()
            .parse::<f64>()
            .map(Value::Float)
            .map_err(|_| RuntimeError::new("wrong value to convert", position)),
        _ => Err(RuntimeError::new("can convert only int or str", position)),
    }
}

/// `to_str` accepts int, float, currency or currency type.
fn to_str(arg: &Value, position: SourcePosition) -> Result<Value, RuntimeError> {
    match arg {
        Value::Int(_) | Value::Float(_) | Value::Currency(_) | Value::Curtype(_) => {
            Ok(Value::Str(arg.to_string()))
        }
        _ => Err(RuntimeError::new(
            "can convert only int, float, cur or curtype",
            position,
        )),
    }
}
