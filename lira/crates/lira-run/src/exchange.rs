//! Rate-aware currency arithmetic.
//!
//! Rates express "units of this currency per one reference unit". Adding
//! or subtracting values with different tags normalises both amounts to
//! the reference unit, applies the operation, and re-denominates the
//! result in the left operand's tag. Same-tag arithmetic operates on the
//! amounts directly. Comparisons always compare normalised amounts.

use rustc_hash::FxHashMap;

use lira_util::SourcePosition;

use crate::currency::{CurrencyType, CurrencyValue};
use crate::error::RuntimeError;

/// The exchange-rate table, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Exchange {
    rates: FxHashMap<String, f64>,
}

impl Exchange {
    pub fn new(rates: FxHashMap<String, f64>) -> Self {
        Self { rates }
    }

    /// Builds a table from literal pairs; mostly useful in tests.
    pub fn from_pairs(pairs: &[(&str, f64)]) -> Self {
        Self {
            rates: pairs
                .iter()
                .map(|(name, rate)| (name.to_string(), *rate))
                .collect(),
        }
    }

    fn rate(
        &self,
        curtype: &CurrencyType,
        position: SourcePosition,
    ) -> Result<f64, RuntimeError> {
        self.rates.get(curtype.as_str()).copied().ok_or_else(|| {
            RuntimeError::new(
                format!("no exchange rate for currency '{curtype}'"),
                position,
            )
        })
    }

    /// Rate-aware addition, denominated in the left tag.
    pub fn add(
        &self,
        left: &CurrencyValue,
        right: &CurrencyValue,
        position: SourcePosition,
    ) -> Result<CurrencyValue, RuntimeError> {
        self.combine(left, right, position, |a, b| a + b)
    }

    /// Rate-aware subtraction, denominated in the left tag.
    pub fn sub(
        &self,
        left: &CurrencyValue,
        right: &CurrencyValue,
        position: SourcePosition,
    ) -> Result<CurrencyValue, RuntimeError> {
        self.combine(left, right, position, |a, b| a - b)
    }

    fn combine(
        &self,
        left: &CurrencyValue,
        right: &CurrencyValue,
        position: SourcePosition,
        op: impl Fn(f64, f64) -> f64,
    ) -> Result<CurrencyValue, RuntimeError> {
        let amount = if left.curtype == right.curtype {
            op(left.amount, right.amount)
        } else {
            let left_rate = self.rate(&left.curtype, position)?;
            let right_rate = self.rate(&right.curtype, position)?;
            op(left.amount / left_rate, right.amount / right_rate) * left_rate
        };
        check_magnitude(amount, position)?;
        Ok(CurrencyValue::new(amount, left.curtype.clone()))
    }

    /// The amount expressed in the reference unit.
    pub fn normalised(
        &self,
        value: &CurrencyValue,
        position: SourcePosition,
    ) -> Result<f64, RuntimeError> {
        Ok(value.amount / self.rate(&value.curtype, position)?)
    }
}

/// Every numeric result must fit within the platform's maximum signed
/// integer magnitude.
pub(crate) fn check_magnitude(
    value: f64,
    position: SourcePosition,
) -> Result<(), RuntimeError> {
    const LIMIT: f64 = i64::MAX as f64;
    if value > LIMIT || value < -LIMIT {
        return Err(RuntimeError::new("value size exceeded", position));
    }
    Ok(())
}
