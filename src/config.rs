use crate::domain::method::PaymentMethod;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Per-method simulated processing latency, in milliseconds.
///
/// Loaded from JSON; missing fields fall back to each method's default latency.
///
/// ```json
/// { "credit_card_ms": 800, "paypal_ms": 1000, "bank_transfer_ms": 2000 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatencyProfile {
    pub credit_card_ms: u64,
    pub paypal_ms: u64,
    pub bank_transfer_ms: u64,
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self {
            credit_card_ms: millis(PaymentMethod::CreditCard),
            paypal_ms: millis(PaymentMethod::PayPal),
            bank_transfer_ms: millis(PaymentMethod::BankTransfer),
        }
    }
}

fn millis(method: PaymentMethod) -> u64 {
    method.default_latency().as_millis() as u64
}

impl LatencyProfile {
    /// A profile with no latency at all.
    pub fn instant() -> Self {
        Self {
            credit_card_ms: 0,
            paypal_ms: 0,
            bank_transfer_ms: 0,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn latency(&self, method: PaymentMethod) -> Duration {
        let ms = match method {
            PaymentMethod::CreditCard => self.credit_card_ms,
            PaymentMethod::PayPal => self.paypal_ms,
            PaymentMethod::BankTransfer => self.bank_transfer_ms,
        };
        Duration::from_millis(ms)
    }
}
