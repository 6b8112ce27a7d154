use crate::error::PaymentError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// The tag selecting which payment method variant to construct.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethodKind {
    CreditCard,
    Stripe,
    Paypal,
}

impl PaymentMethodKind {
    pub const ALL: [PaymentMethodKind; 3] = [Self::CreditCard, Self::Stripe, Self::Paypal];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreditCard => "credit_card",
            Self::Stripe => "stripe",
            Self::Paypal => "paypal",
        }
    }
}

impl fmt::Display for PaymentMethodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethodKind {
    type Err = PaymentError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == tag)
            .ok_or_else(|| PaymentError::UnknownPaymentMethod(tag.to_string()))
    }
}

/// Free-form payment details handed to a payment method.
///
/// Only `amount` and `currency` are ever read, and only for logging. Nothing is
/// validated; any other fields are carried along in `extra`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct PaymentDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PaymentDetails {
    pub fn new(amount: impl Into<Value>, currency: impl Into<Value>) -> Self {
        Self {
            amount: Some(amount.into()),
            currency: Some(currency.into()),
            extra: Map::new(),
        }
    }

    /// Renders the amount for a log line.
    pub fn amount_label(&self) -> String {
        label(self.amount.as_ref())
    }

    /// Renders the currency for a log line.
    pub fn currency_label(&self) -> String {
        label(self.currency.as_ref())
    }
}

fn label(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "n/a".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
