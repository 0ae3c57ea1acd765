use crate::domain::amount::Amount;
use crate::domain::outcome::PaymentOutcome;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

const HEADER: [&str; 5] = ["method", "amount", "approved", "reason", "reference"];

#[derive(Debug, Serialize)]
struct OutcomeRecord<'a> {
    method: &'a str,
    amount: String,
    approved: bool,
    reason: &'a str,
    reference: &'a str,
}

/// Writes one CSV row per processed payment.
///
/// The header row is written on construction, so the output is a valid table
/// even when no payment is ever written.
pub struct OutcomeWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> OutcomeWriter<W> {
    pub fn new(sink: W) -> Result<Self> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(sink);
        writer.write_record(HEADER)?;
        Ok(Self { writer })
    }

    pub fn write_outcome(
        &mut self,
        method: &str,
        amount: Amount,
        outcome: &PaymentOutcome,
    ) -> Result<()> {
        let record = match outcome {
            Ok(receipt) => OutcomeRecord {
                method,
                amount: amount.to_string(),
                approved: true,
                reason: "",
                reference: &receipt.reference,
            },
            Err(decline) => OutcomeRecord {
                method,
                amount: amount.to_string(),
                approved: false,
                reason: decline.code(),
                reference: "",
            },
        };
        self.writer.serialize(record)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::outcome::PaymentReceipt;
    use crate::error::Decline;
    use rust_decimal_macros::dec;

    #[test]
    fn test_write_outcomes() {
        let mut buffer = Vec::new();
        {
            let mut writer = OutcomeWriter::new(&mut buffer).unwrap();
            let approved: PaymentOutcome = Ok(PaymentReceipt {
                method: "Bank Transfer".to_string(),
                amount: Amount::new(dec!(299.99)),
                reference: "****3210".to_string(),
            });
            let declined: PaymentOutcome = Err(Decline::BelowMinimum {
                amount: Amount::new(dec!(0.5)),
                minimum: Amount::ONE,
            });

            writer
                .write_outcome("Bank Transfer", Amount::new(dec!(299.99)), &approved)
                .unwrap();
            writer
                .write_outcome("Bank Transfer", Amount::new(dec!(0.5)), &declined)
                .unwrap();
            writer.flush().unwrap();
        }

        let output = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "method,amount,approved,reason,reference");
        assert_eq!(lines[1], "Bank Transfer,299.99,true,,****3210");
        assert_eq!(lines[2], "Bank Transfer,0.50,false,below_minimum,");
    }

    #[test]
    fn test_header_written_without_outcomes() {
        let mut buffer = Vec::new();
        OutcomeWriter::new(&mut buffer).unwrap().flush().unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(output, "method,amount,approved,reason,reference\n");
    }

    #[test]
    fn test_sub_cent_amount_written_in_full() {
        let mut buffer = Vec::new();
        {
            let mut writer = OutcomeWriter::new(&mut buffer).unwrap();
            let declined: PaymentOutcome = Err(Decline::LimitExceeded {
                amount: Amount::new(dec!(300.004)),
                limit: Amount::new(dec!(300)),
            });
            writer
                .write_outcome("Credit Card", Amount::new(dec!(300.004)), &declined)
                .unwrap();
            writer.flush().unwrap();
        }

        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(
            output.lines().nth(1),
            Some("Credit Card,300.004,false,limit_exceeded,")
        );
    }
}
