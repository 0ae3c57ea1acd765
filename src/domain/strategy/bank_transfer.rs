use crate::domain::amount::Amount;
use crate::domain::masking::MaskedIdentifier;
use crate::domain::method::PaymentMethod;
use crate::domain::ports::PaymentStrategy;
use crate::error::Decline;

/// Pays by bank transfer, bounded by a daily transfer limit.
#[derive(Debug, Clone)]
pub struct BankTransferPayment {
    bank_name: String,
    account_number: MaskedIdentifier,
    routing_number: String,
    daily_limit: Amount,
}

impl BankTransferPayment {
    /// Smallest amount a transfer may carry (inclusive).
    pub const MINIMUM: Amount = Amount::ONE;

    pub fn new(
        bank_name: impl Into<String>,
        account_number: &str,
        routing_number: impl Into<String>,
        daily_limit: Amount,
    ) -> Self {
        Self {
            bank_name: bank_name.into(),
            account_number: MaskedIdentifier::new(account_number),
            routing_number: routing_number.into(),
            daily_limit,
        }
    }

    pub fn bank_name(&self) -> &str {
        &self.bank_name
    }

    pub fn account_number(&self) -> &MaskedIdentifier {
        &self.account_number
    }

    pub fn routing_number(&self) -> &str {
        &self.routing_number
    }
}

impl PaymentStrategy for BankTransferPayment {
    fn method(&self) -> PaymentMethod {
        PaymentMethod::BankTransfer
    }

    fn reference(&self) -> String {
        self.account_number.to_string()
    }

    fn check(&self, amount: Amount) -> Result<(), Decline> {
        if !amount.is_positive() {
            return Err(Decline::InvalidAmount { amount });
        }
        if amount > self.daily_limit {
            return Err(Decline::LimitExceeded {
                amount,
                limit: self.daily_limit,
            });
        }
        if amount < Self::MINIMUM {
            return Err(Decline::BelowMinimum {
                amount,
                minimum: Self::MINIMUM,
            });
        }
        Ok(())
    }
}
