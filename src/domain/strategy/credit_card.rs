use crate::domain::amount::Amount;
use crate::domain::masking::MaskedIdentifier;
use crate::domain::method::PaymentMethod;
use crate::domain::ports::PaymentStrategy;
use crate::error::Decline;
use std::fmt;

/// Pays against a card's credit limit.
#[derive(Clone)]
pub struct CreditCardPayment {
    card_number: MaskedIdentifier,
    holder_name: String,
    expiry_date: String,
    // Held with the card details, never read back or printed.
    #[allow(dead_code)]
    cvv: String,
    credit_limit: Amount,
}

impl CreditCardPayment {
    pub fn new(
        card_number: &str,
        holder_name: impl Into<String>,
        expiry_date: impl Into<String>,
        cvv: impl Into<String>,
        credit_limit: Amount,
    ) -> Self {
        Self {
            card_number: MaskedIdentifier::new(card_number),
            holder_name: holder_name.into(),
            expiry_date: expiry_date.into(),
            cvv: cvv.into(),
            credit_limit,
        }
    }

    pub fn card_number(&self) -> &MaskedIdentifier {
        &self.card_number
    }
}

// The cvv is kept out of debug output.
impl fmt::Debug for CreditCardPayment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreditCardPayment")
            .field("card_number", &self.card_number)
            .field("holder_name", &self.holder_name)
            .field("expiry_date", &self.expiry_date)
            .field("credit_limit", &self.credit_limit)
            .finish_non_exhaustive()
    }
}

impl PaymentStrategy for CreditCardPayment {
    fn method(&self) -> PaymentMethod {
        PaymentMethod::CreditCard
    }

    fn reference(&self) -> String {
        self.card_number.to_string()
    }

    fn check(&self, amount: Amount) -> Result<(), Decline> {
        if !amount.is_positive() {
            return Err(Decline::InvalidAmount { amount });
        }
        if amount > self.credit_limit {
            return Err(Decline::LimitExceeded {
                amount,
                limit: self.credit_limit,
            });
        }
        Ok(())
    }
}
