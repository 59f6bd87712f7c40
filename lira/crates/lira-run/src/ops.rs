//! Typed value operations.
//!
//! This module is the rejection matrix of the language: each operator
//! admits a fixed set of operand type pairs and everything else is a
//! semantic error at the operator's position.
//!
//! | op       | permitted (left, right)                                |
//! |----------|--------------------------------------------------------|
//! | `+`      | (int,int) (float,float) (str,str) (cur,cur)            |
//! | `-`      | (int,int) (float,float) (cur,cur)                      |
//! | `*`      | (int,{int,str,cur}) (float,{float,cur}) (str,int) (cur,{int,float}) |
//! | `/`      | (float,float) (cur,{int,float})                        |
//! | relops   | numeric (int/float mixed), cur/cur via rates; `==`/`!=` also on str, bool, curtype |
//! | `!`      | bool                                                   |
//! | unary `-`| int, float, cur                                        |

use lira_par::BinOp;
use lira_util::SourcePosition;

use crate::currency::CurrencyValue;
use crate::error::RuntimeError;
use crate::exchange::{check_magnitude, Exchange};
use crate::value::Value;

/// Applies a non-short-circuiting binary operator.
pub(crate) fn binary(
    exchange: &Exchange,
    op: BinOp,
    left: &Value,
    right: &Value,
    position: SourcePosition,
) -> Result<Value, RuntimeError> {
    match op {
        BinOp::Add => add(exchange, left, right, position),
        BinOp::Sub => sub(exchange, left, right, position),
        BinOp::Mul => mul(left, right, position),
        BinOp::Div => div(left, right, position),
        BinOp::Or | BinOp::And => logical(op, left, right, position),
        relop => compare(exchange, relop, left, right, position),
    }
}

/// Logical negation.
pub(crate) fn not(value: &Value, position: SourcePosition) -> Result<Value, RuntimeError> {
    match value {
        Value::Bool(b) => Ok(Value::Bool(!b)),
        other => Err(RuntimeError::new(
            format!("wrong operand type for '!': {}", other.type_name()),
            position,
        )),
    }
}

/// Arithmetic negation.
pub(crate) fn negate(value: &Value, position: SourcePosition) -> Result<Value, RuntimeError> {
    match value {
        Value::Int(v) => v
            .checked_neg()
            .map(Value::Int)
            .ok_or_else(|| RuntimeError::new("value size exceeded", position)),
        Value::Float(v) => Ok(Value::Float(-v)),
        Value::Currency(c) => Ok(Value::Currency(CurrencyValue::new(
            -c.amount,
            c.curtype.clone(),
        ))),
        other => Err(RuntimeError::new(
            format!("wrong operand type for unary '-': {}", other.type_name()),
            position,
        )),
    }
}

fn add(
    exchange: &Exchange,
    left: &Value,
    right: &Value,
    position: SourcePosition,
) -> Result<Value, RuntimeError> {
    match (left, right) {
        (Value::Int(l), Value::Int(r)) => l
            .checked_add(*r)
            .map(Value::Int)
            .ok_or_else(|| RuntimeError::new("value size exceeded", position)),
        (Value::Float(l), Value::Float(r)) => {
            let value = l + r;
            check_magnitude(value, position)?;
            Ok(Value::Float(value))
        }
        (Value::Str(l), Value::Str(r)) => Ok(Value::Str(format!("{l}{r}"))),
        (Value::Currency(l), Value::Currency(r)) => {
            Ok(Value::Currency(exchange.add(l, r, position)?))
        }
        _ => Err(type_error(BinOp::Add, left, right, position)),
    }
}

fn sub(
    exchange: &Exchange,
    left: &Value,
    right: &Value,
    position: SourcePosition,
) -> Result<Value, RuntimeError> {
    match (left, right) {
        (Value::Int(l), Value::Int(r)) => l
            .checked_sub(*r)
            .map(Value::Int)
            .ok_or_else(|| RuntimeError::new("value size exceeded", position)),
        (Value::Float(l), Value::Float(r)) => {
            let value = l - r;
            check_magnitude(value, position)?;
            Ok(Value::Float(value))
        }
        (Value::Currency(l), Value::Currency(r)) => {
            Ok(Value::Currency(exchange.sub(l, r, position)?))
        }
        _ => Err(type_error(BinOp::Sub, left, right, position)),
    }
}

fn mul(left: &Value, right: &Value, position: SourcePosition) -> Result<Value, RuntimeError> {
    match (left, right) {
        (Value::Int(l), Value::Int(r)) => l
            .checked_mul(*r)
            .map(Value::Int)
            .ok_or_else(|| RuntimeError::new("value size exceeded", position)),
        (Value::Float(l), Value::Float(r)) => {
            let value = l * r;
            check_magnitude(value, position)?;
            Ok(Value::Float(value))
        }
        (Value::Str(s), Value::Int(n)) | (Value::Int(n), Value::Str(s)) => {
            Ok(Value::Str(repeat_str(s, *n)))
        }
        (Value::Currency(c), Value::Int(n)) | (Value::Int(n), Value::Currency(c)) => {
            scale(c, *n as f64, position)
        }
        (Value::Currency(c), Value::Float(x)) | (Value::Float(x), Value::Currency(c)) => {
            scale(c, *x, position)
        }
        _ => Err(type_error(BinOp::Mul, left, right, position)),
    }
}

fn div(left: &Value, right: &Value, position: SourcePosition) -> Result<Value, RuntimeError> {
    match (left, right) {
        (Value::Float(l), Value::Float(r)) => {
            if *r == 0.0 {
                return Err(RuntimeError::new("division by zero", position));
            }
            let value = l / r;
            check_magnitude(value, position)?;
            Ok(Value::Float(value))
        }
        (Value::Currency(c), Value::Int(n)) => {
            if *n == 0 {
                return Err(RuntimeError::new("division by zero", position));
            }
            scale(c, 1.0 / *n as f64, position)
        }
        (Value::Currency(c), Value::Float(x)) => {
            if *x == 0.0 {
                return Err(RuntimeError::new("division by zero", position));
            }
            scale(c, 1.0 / x, position)
        }
        _ => Err(type_error(BinOp::Div, left, right, position)),
    }
}

/// Currency-by-scalar scaling never consults the rate table.
fn scale(
    currency: &CurrencyValue,
    factor: f64,
    position: SourcePosition,
) -> Result<Value, RuntimeError> {
    let amount = currency.amount * factor;
    check_magnitude(amount, position)?;
    Ok(Value::Currency(CurrencyValue::new(
        amount,
        currency.curtype.clone(),
    )))
}

fn repeat_str(s: &str, count: i64) -> String {
    if count <= 0 {
        String::new()
    } else {
        s.repeat(count as usize)
    }
}

fn compare(
    exchange: &Exchange,
    op: BinOp,
    left: &Value,
    right: &Value,
    position: SourcePosition,
) -> Result<Value, RuntimeError> {
    let result = match (left, right) {
        (Value::Currency(l), Value::Currency(r)) => {
            let l = exchange.normalised(l, position)?;
            let r = exchange.normalised(r, position)?;
            numeric_relation(op, l, r)
        }
        (Value::Int(l), Value::Int(r)) => numeric_relation(op, *l as f64, *r as f64),
        (Value::Int(l), Value::Float(r)) => numeric_relation(op, *l as f64, *r),
        (Value::Float(l), Value::Int(r)) => numeric_relation(op, *l, *r as f64),
        (Value::Float(l), Value::Float(r)) => numeric_relation(op, *l, *r),
        (Value::Str(l), Value::Str(r)) => equality_relation(op, l == r),
        (Value::Bool(l), Value::Bool(r)) => equality_relation(op, l == r),
        (Value::Curtype(l), Value::Curtype(r)) => equality_relation(op, l == r),
        _ => None,
    };

    result
        .map(Value::Bool)
        .ok_or_else(|| type_error(op, left, right, position))
}

fn numeric_relation(op: BinOp, l: f64, r: f64) -> Option<bool> {
    let result = match op {
        BinOp::Less => l < r,
        BinOp::LessEqual => l <= r,
        BinOp::Greater => l > r,
        BinOp::GreaterEqual => l >= r,
        BinOp::Equal => l == r,
        BinOp::NotEqual => l != r,
        _ => return None,
    };
    Some(result)
}

/// Strings, booleans and currency-type tags admit only `==` and `!=`.
fn equality_relation(op: BinOp, equal: bool) -> Option<bool> {
    match op {
        BinOp::Equal => Some(equal),
        BinOp::NotEqual => Some(!equal),
        _ => None,
    }
}

/// The non-short-circuiting fallback for `&&`/`||`; the interpreter's
/// lazy path is the one that normally runs.
fn logical(
    op: BinOp,
    left: &Value,
    right: &Value,
    position: SourcePosition,
) -> Result<Value, RuntimeError> {
    match (left, right) {
        (Value::Bool(l), Value::Bool(r)) => Ok(Value::Bool(match op {
            BinOp::Or => *l || *r,
            _ => *l && *r,
        })),
        _ => Err(type_error(op, left, right, position)),
    }
}

fn type_error(
    op: BinOp,
    left: &Value,
    right: &Value,
    position: SourcePosition,
) -> RuntimeError {
    RuntimeError::new(
        format!(
            "wrong operand types for '{}': {} and {}",
            op.spelling(),
            left.type_name(),
            right.type_name()
        ),
        position,
    )
}
