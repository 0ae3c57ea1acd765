use super::amount::Amount;
use crate::error::Decline;
use serde::Serialize;

/// Record of a payment that cleared validation and simulated processing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentReceipt {
    pub method: String,
    pub amount: Amount,
    /// Display-safe reference of the credential that was charged.
    pub reference: String,
}

/// Result of a detailed payment execution: a receipt or the decline reason.
pub type PaymentOutcome = std::result::Result<PaymentReceipt, Decline>;
