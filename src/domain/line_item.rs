use crate::error::CheckoutError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A monetary amount in a given currency.
///
/// The checkout computes these; the payment method only displays and forwards
/// them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    pub currency: String,
    pub value: Decimal,
}

impl Money {
    pub fn new(currency: impl Into<String>, value: Decimal) -> Self {
        Self {
            currency: currency.into(),
            value,
        }
    }

    /// Human readable amount, e.g. `€12.50`.
    pub fn display_value(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value < Decimal::ZERO {
            f.write_str("-")?;
        }
        let amount = self.value.abs();
        match self.currency.as_str() {
            "EUR" => write!(f, "€{:.2}", amount),
            "USD" => write!(f, "${:.2}", amount),
            "GBP" => write!(f, "£{:.2}", amount),
            code => write!(f, "{} {:.2}", code, amount),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub id: String,
    pub label: String,
    pub amount: Money,
}

impl LineItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>, amount: Money) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            amount,
        }
    }

    /// Parses a `LABEL=AMOUNT` pair, deriving the id from the label.
    pub fn parse(spec: &str, currency: &str) -> Result<Self, CheckoutError> {
        let (label, amount) = spec
            .split_once('=')
            .ok_or_else(|| CheckoutError::InvalidLineItem(spec.to_string()))?;
        let label = label.trim();
        if label.is_empty() {
            return Err(CheckoutError::InvalidLineItem(spec.to_string()));
        }
        let value: Decimal = amount
            .trim()
            .parse()
            .map_err(|_| CheckoutError::InvalidLineItem(spec.to_string()))?;
        let id = label.to_ascii_lowercase().replace(char::is_whitespace, "-");
        Ok(Self::new(id, label, Money::new(currency, value)))
    }
}
