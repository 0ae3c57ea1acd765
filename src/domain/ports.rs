use super::amount::Amount;
use super::method::PaymentMethod;
use super::outcome::PaymentReceipt;
use crate::error::Decline;
use async_trait::async_trait;

/// Contract shared by every payment method.
///
/// `check` holds the business rules. `validate` and `execute` are both derived
/// from it, so an amount that fails validation can never be executed.
#[async_trait]
pub trait PaymentStrategy: Send + Sync {
    /// Latency class used by the processing delay.
    fn method(&self) -> PaymentMethod;

    /// Human-readable label of the method.
    fn method_name(&self) -> &str {
        self.method().label()
    }

    /// Display-safe reference of the credential, used on receipts.
    fn reference(&self) -> String;

    /// Evaluates the business rules for `amount` without side effects.
    fn check(&self, amount: Amount) -> Result<(), Decline>;

    /// Reports whether `amount` could be processed.
    fn validate(&self, amount: Amount) -> bool {
        match self.check(amount) {
            Ok(()) => true,
            Err(decline) => {
                tracing::warn!(
                    method = self.method_name(),
                    %amount,
                    %decline,
                    "Payment validation failed"
                );
                false
            }
        }
    }

    /// Validates, then waits out the simulated processing delay.
    ///
    /// The delay only starts once the rules have passed. A receipt is issued
    /// only after the full delay elapsed.
    async fn authorize(
        &self,
        amount: Amount,
        delay: &dyn ProcessingDelay,
    ) -> Result<PaymentReceipt, Decline> {
        if let Err(decline) = self.check(amount) {
            tracing::warn!(method = self.method_name(), %amount, %decline, "Payment rejected");
            return Err(decline);
        }

        tracing::info!(
            method = self.method_name(),
            reference = %self.reference(),
            %amount,
            "Processing payment"
        );
        delay.wait(self.method()).await?;
        tracing::info!(method = self.method_name(), %amount, "Payment processed");

        Ok(PaymentReceipt {
            method: self.method_name().to_string(),
            amount,
            reference: self.reference(),
        })
    }

    /// Boolean form of [`PaymentStrategy::authorize`].
    async fn execute(&self, amount: Amount, delay: &dyn ProcessingDelay) -> bool {
        self.authorize(amount, delay).await.is_ok()
    }
}

/// Stand-in for network latency while a payment settles.
///
/// Implementations must be cancellable: a cancelled wait returns
/// `Decline::ProcessingCancelled` instead of completing.
#[async_trait]
pub trait ProcessingDelay: Send + Sync {
    async fn wait(&self, method: PaymentMethod) -> Result<(), Decline>;
}

pub type PaymentStrategyBox = Box<dyn PaymentStrategy>;
pub type ProcessingDelayBox = Box<dyn ProcessingDelay>;
