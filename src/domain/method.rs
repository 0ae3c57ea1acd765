use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// The built-in payment methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "credit_card")]
    CreditCard,
    #[serde(rename = "paypal")]
    PayPal,
    #[serde(rename = "bank_transfer")]
    BankTransfer,
}

impl PaymentMethod {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::PayPal => "PayPal",
            PaymentMethod::BankTransfer => "Bank Transfer",
        }
    }

    /// Simulated settlement latency when no latency profile overrides it.
    pub fn default_latency(&self) -> Duration {
        match self {
            PaymentMethod::CreditCard => Duration::from_millis(800),
            PaymentMethod::PayPal => Duration::from_millis(1000),
            PaymentMethod::BankTransfer => Duration::from_millis(2000),
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
