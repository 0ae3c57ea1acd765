use crate::domain::amount::Amount;
use crate::domain::method::PaymentMethod;
use crate::domain::ports::PaymentStrategy;
use crate::error::Decline;

/// Pays from a PayPal account balance.
#[derive(Debug, Clone)]
pub struct PayPalPayment {
    email: String,
    balance: Amount,
}

impl PayPalPayment {
    pub fn new(email: impl Into<String>, balance: Amount) -> Self {
        Self {
            email: email.into(),
            balance,
        }
    }

    /// Minimal shape check: an `@` and a `.` somewhere in the address.
    pub fn has_valid_email(&self) -> bool {
        self.email.contains('@') && self.email.contains('.')
    }
}

impl PaymentStrategy for PayPalPayment {
    fn method(&self) -> PaymentMethod {
        PaymentMethod::PayPal
    }

    fn reference(&self) -> String {
        self.email.clone()
    }

    fn check(&self, amount: Amount) -> Result<(), Decline> {
        if !amount.is_positive() {
            return Err(Decline::InvalidAmount { amount });
        }
        if amount > self.balance {
            return Err(Decline::LimitExceeded {
                amount,
                limit: self.balance,
            });
        }
        if !self.has_valid_email() {
            return Err(Decline::InvalidFormat);
        }
        Ok(())
    }
}
