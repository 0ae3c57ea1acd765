use crate::domain::amount::Amount;
use thiserror::Error;

/// Usage and driver failures.
///
/// Business-rule rejections are not represented here; they are [`Decline`]s and
/// reach callers as a `false` outcome. Only misuse of the context and I/O at the
/// driver boundary escalate as errors.
#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("Payment strategy not set. Please set a payment strategy before {operation} payment.")]
    NoStrategySet { operation: &'static str },
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Config error: {0}")]
    ConfigError(#[from] serde_json::Error),
    #[error("Request error: {0}")]
    RequestError(String),
}

pub type Result<T> = std::result::Result<T, PaymentError>;

/// Reason a strategy refused to process an amount.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decline {
    #[error("invalid amount: {amount}")]
    InvalidAmount { amount: Amount },
    #[error("amount {amount} exceeds limit {limit}")]
    LimitExceeded { amount: Amount, limit: Amount },
    #[error("amount {amount} is below the minimum of {minimum}")]
    BelowMinimum { amount: Amount, minimum: Amount },
    #[error("invalid account format")]
    InvalidFormat,
    #[error("payment processing cancelled")]
    ProcessingCancelled,
}

impl Decline {
    /// Stable machine-readable code, used in batch output.
    pub fn code(&self) -> &'static str {
        match self {
            Decline::InvalidAmount { .. } => "invalid_amount",
            Decline::LimitExceeded { .. } => "limit_exceeded",
            Decline::BelowMinimum { .. } => "below_minimum",
            Decline::InvalidFormat => "invalid_format",
            Decline::ProcessingCancelled => "processing_cancelled",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_no_strategy_message_names_operation() {
        let err = PaymentError::NoStrategySet {
            operation: "executing",
        };
        let msg = err.to_string();
        assert!(msg.contains("Payment strategy not set"));
        assert!(msg.contains("before executing payment"));
    }

    #[test]
    fn test_decline_display_uses_two_decimals() {
        let decline = Decline::LimitExceeded {
            amount: Amount::new(dec!(299.99)),
            limit: Amount::new(dec!(100)),
        };
        assert_eq!(decline.to_string(), "amount 299.99 exceeds limit 100.00");
        assert_eq!(decline.code(), "limit_exceeded");
    }

    #[test]
    fn test_decline_display_reports_sub_cent_amount() {
        let below = Decline::BelowMinimum {
            amount: Amount::new(dec!(0.999)),
            minimum: Amount::ONE,
        };
        assert_eq!(below.to_string(), "amount 0.999 is below the minimum of 1.00");

        let over = Decline::LimitExceeded {
            amount: Amount::new(dec!(300.004)),
            limit: Amount::new(dec!(300)),
        };
        assert_eq!(over.to_string(), "amount 300.004 exceeds limit 300.00");
    }
}
