use crate::domain::amount::Amount;
use crate::domain::outcome::PaymentOutcome;
use crate::domain::ports::{PaymentStrategy, PaymentStrategyBox, ProcessingDelayBox};
use crate::error::{PaymentError, Result};

const NO_METHOD: &str = "None";

/// Holds the active payment strategy and delegates payments to it.
///
/// A context starts either empty or with an initial strategy. The strategy can
/// be replaced at any time but never removed. Validating or executing while no
/// strategy is set is a usage error ([`PaymentError::NoStrategySet`]), distinct
/// from a payment that is merely declined.
///
/// Mutation takes `&mut self`, so a context cannot be reconfigured while a
/// payment is in flight. Callers wanting concurrent payments use one context
/// per payment.
pub struct PaymentContext {
    strategy: Option<PaymentStrategyBox>,
    delay: ProcessingDelayBox,
}

impl PaymentContext {
    /// Creates an unconfigured context.
    ///
    /// # Arguments
    ///
    /// * `delay` - The simulated processing latency awaited by every executed payment.
    pub fn new(delay: ProcessingDelayBox) -> Self {
        Self {
            strategy: None,
            delay,
        }
    }

    /// Creates a context configured with an initial strategy.
    ///
    /// # Arguments
    ///
    /// * `strategy` - The payment method used until it is replaced.
    /// * `delay` - The simulated processing latency awaited by every executed payment.
    pub fn with_strategy(strategy: PaymentStrategyBox, delay: ProcessingDelayBox) -> Self {
        let mut context = Self::new(delay);
        context.set_strategy(strategy);
        context
    }

    /// Installs `strategy`, dropping the previous one if any.
    pub fn set_strategy(&mut self, strategy: PaymentStrategyBox) {
        tracing::debug!(
            previous = self.current_method_name(),
            next = strategy.method_name(),
            "Payment strategy set"
        );
        self.strategy = Some(strategy);
    }

    pub fn has_strategy(&self) -> bool {
        self.strategy.is_some()
    }

    /// Label of the active strategy, or `"None"` when unconfigured.
    pub fn current_method_name(&self) -> &str {
        self.strategy
            .as_deref()
            .map_or(NO_METHOD, |strategy| strategy.method_name())
    }

    /// Checks whether the active strategy would accept `amount`.
    pub fn validate_payment(&self, amount: Amount) -> Result<bool> {
        let strategy = self.active_strategy("validating")?;
        tracing::debug!(method = strategy.method_name(), %amount, "Validating payment");
        Ok(strategy.validate(amount))
    }

    /// Executes `amount` with the active strategy.
    ///
    /// Returns `Ok(false)` for any business-rule decline or a cancelled delay.
    pub async fn execute_payment(&self, amount: Amount) -> Result<bool> {
        Ok(self.process_payment(amount).await?.is_ok())
    }

    /// Like [`PaymentContext::execute_payment`], but keeps the receipt or the
    /// decline reason.
    pub async fn process_payment(&self, amount: Amount) -> Result<PaymentOutcome> {
        let strategy = self.active_strategy("executing")?;
        tracing::info!(method = strategy.method_name(), %amount, "Executing payment");
        Ok(strategy.authorize(amount, &*self.delay).await)
    }

    fn active_strategy(&self, operation: &'static str) -> Result<&dyn PaymentStrategy> {
        self.strategy
            .as_deref()
            .ok_or(PaymentError::NoStrategySet { operation })
    }
}
