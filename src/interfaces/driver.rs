use crate::application::context::PaymentContext;
use crate::domain::amount::Amount;
use crate::domain::ports::{PaymentStrategyBox, ProcessingDelayBox};
use crate::domain::strategy::{BankTransferPayment, CreditCardPayment, PayPalPayment};
use crate::error::{Decline, PaymentError, Result};
use crate::infrastructure::delay::InstantDelay;
use crate::interfaces::csv::outcome_writer::OutcomeWriter;
use crate::interfaces::csv::request_reader::RequestReader;
use rust_decimal_macros::dec;
use std::io::{Read, Write};
use tokio_util::sync::CancellationToken;

const SEPARATOR: &str = "==================================================";

/// Walks through every payment method, the limit failures and an
/// unconfigured context, printing each result to `out`.
pub async fn run_demo<W: Write>(
    out: &mut W,
    amount: Amount,
    delay: ProcessingDelayBox,
) -> Result<()> {
    writeln!(out, "=== Strategy Pattern Demo ===")?;
    writeln!(out, "Purchase Amount: ${amount}")?;

    let mut context = PaymentContext::new(delay);

    let strategies: [PaymentStrategyBox; 3] = [
        Box::new(CreditCardPayment::new(
            "1234567890123456",
            "John Doe",
            "12/25",
            "123",
            Amount::new(dec!(5000.0)),
        )),
        Box::new(PayPalPayment::new("john.doe@email.com", Amount::new(dec!(1500.0)))),
        Box::new(BankTransferPayment::new(
            "Chase Bank",
            "9876543210",
            "021000021",
            Amount::new(dec!(10000.0)),
        )),
    ];
    for strategy in strategies {
        writeln!(out, "\n{SEPARATOR}\n")?;
        demonstrate(out, &mut context, strategy, amount).await?;
    }

    writeln!(out, "\n{SEPARATOR}\n")?;
    writeln!(out, "Testing Validation Scenarios:")?;

    let failures: [(&str, PaymentStrategyBox); 3] = [
        (
            "credit card with insufficient limit",
            Box::new(CreditCardPayment::new(
                "1111222233334444",
                "Jane Smith",
                "06/26",
                "456",
                Amount::new(dec!(100.0)),
            )),
        ),
        (
            "PayPal with insufficient balance",
            Box::new(PayPalPayment::new("jane.smith@email.com", Amount::new(dec!(50.0)))),
        ),
        (
            "bank transfer with exceeded daily limit",
            Box::new(BankTransferPayment::new(
                "Local Credit Union",
                "1122334455",
                "123456789",
                Amount::new(dec!(200.0)),
            )),
        ),
    ];
    for (scenario, strategy) in failures {
        context.set_strategy(strategy);
        writeln!(out, "\nTesting {scenario}:")?;
        let success = context.execute_payment(amount).await?;
        writeln!(out, "Payment Result: {}", result_label(success))?;
    }

    writeln!(out, "\n{SEPARATOR}\n")?;
    writeln!(out, "Testing context without strategy:")?;
    let empty = PaymentContext::new(Box::new(InstantDelay));
    match empty.execute_payment(Amount::new(dec!(100.0))).await {
        Err(e @ PaymentError::NoStrategySet { .. }) => writeln!(out, "Expected error: {e}")?,
        Err(e) => return Err(e),
        Ok(success) => writeln!(out, "Payment Result: {}", result_label(success))?,
    }

    writeln!(out, "\n=== Strategy Pattern Demo Complete ===")?;
    Ok(())
}

async fn demonstrate<W: Write>(
    out: &mut W,
    context: &mut PaymentContext,
    strategy: PaymentStrategyBox,
    amount: Amount,
) -> Result<()> {
    context.set_strategy(strategy);
    writeln!(out, "Current Payment Method: {}", context.current_method_name())?;
    writeln!(out, "Strategy Set: {}", context.has_strategy())?;

    if context.validate_payment(amount)? {
        writeln!(out, "Payment validation passed")?;
        let success = context.execute_payment(amount).await?;
        writeln!(out, "Payment Result: {}", result_label(success))?;
    } else {
        writeln!(out, "Payment validation failed - payment not processed")?;
    }
    Ok(())
}

fn result_label(success: bool) -> &'static str {
    if success { "SUCCESS" } else { "FAILED" }
}

/// Totals of a batch run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub approved: usize,
    pub declined: usize,
    /// Rows that could not be turned into a payment.
    pub invalid: usize,
    /// Set when `cancel` fired before the input was exhausted.
    pub interrupted: bool,
}

/// Processes every request in `source` through `context`, writing one
/// outcome row per request to `sink`.
///
/// Unreadable rows are reported on stderr and skipped. Once `cancel` fires,
/// the in-flight payment is written as cancelled and the rest of the input is
/// left unprocessed.
pub async fn run_batch<R: Read, W: Write>(
    source: R,
    sink: W,
    context: &mut PaymentContext,
    cancel: &CancellationToken,
) -> Result<BatchSummary> {
    let mut summary = BatchSummary::default();
    let mut writer = OutcomeWriter::new(sink)?;

    for request in RequestReader::new(source).requests() {
        if cancel.is_cancelled() {
            summary.interrupted = true;
            break;
        }

        let request = match request {
            Ok(request) => request,
            Err(e) => {
                eprintln!("Error reading request: {}", e);
                summary.invalid += 1;
                continue;
            }
        };
        let strategy = match request.to_strategy() {
            Ok(strategy) => strategy,
            Err(e) => {
                eprintln!("Error reading request: {}", e);
                summary.invalid += 1;
                continue;
            }
        };

        context.set_strategy(strategy);
        let outcome = context.process_payment(request.amount).await?;
        writer.write_outcome(context.current_method_name(), request.amount, &outcome)?;

        match outcome {
            Ok(_) => summary.approved += 1,
            Err(Decline::ProcessingCancelled) => {
                summary.declined += 1;
                summary.interrupted = true;
                break;
            }
            Err(_) => summary.declined += 1,
        }
    }

    writer.flush()?;
    if summary.interrupted {
        tracing::warn!(?summary, "Batch interrupted");
    } else {
        tracing::info!(?summary, "Batch complete");
    }
    Ok(summary)
}
