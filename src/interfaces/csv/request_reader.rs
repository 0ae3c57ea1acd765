use crate::domain::amount::Amount;
use crate::domain::method::PaymentMethod;
use crate::domain::ports::PaymentStrategyBox;
use crate::domain::strategy::{BankTransferPayment, CreditCardPayment, PayPalPayment};
use crate::error::{PaymentError, Result};
use serde::Deserialize;
use std::io::Read;

/// One row of a batch input file.
///
/// Columns not used by the chosen method may be left empty.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct PaymentRequest {
    pub method: PaymentMethod,
    pub amount: Amount,
    /// Card number, PayPal email or bank account number.
    pub identifier: String,
    /// Credit limit, PayPal balance or daily transfer limit.
    pub limit: Amount,
    #[serde(default)]
    pub holder: Option<String>,
    #[serde(default)]
    pub expiry: Option<String>,
    #[serde(default)]
    pub cvv: Option<String>,
    #[serde(default)]
    pub bank: Option<String>,
    #[serde(default)]
    pub routing: Option<String>,
}

impl PaymentRequest {
    /// Builds the strategy described by this request.
    pub fn to_strategy(&self) -> Result<PaymentStrategyBox> {
        let strategy: PaymentStrategyBox = match self.method {
            PaymentMethod::CreditCard => Box::new(CreditCardPayment::new(
                &self.identifier,
                required(&self.holder, "holder")?,
                required(&self.expiry, "expiry")?,
                required(&self.cvv, "cvv")?,
                self.limit,
            )),
            PaymentMethod::PayPal => Box::new(PayPalPayment::new(&self.identifier, self.limit)),
            PaymentMethod::BankTransfer => Box::new(BankTransferPayment::new(
                required(&self.bank, "bank")?,
                &self.identifier,
                required(&self.routing, "routing")?,
                self.limit,
            )),
        };
        Ok(strategy)
    }
}

fn required<'a>(field: &'a Option<String>, name: &str) -> Result<&'a str> {
    field
        .as_deref()
        .filter(|value| !value.is_empty())
        .ok_or_else(|| PaymentError::RequestError(format!("missing field `{name}`")))
}

/// Reads payment requests from a CSV source.
///
/// Whitespace is trimmed and rows may omit trailing columns.
pub struct RequestReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> RequestReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily deserializes requests, one `Result` per row.
    pub fn requests(self) -> impl Iterator<Item = Result<PaymentRequest>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(PaymentError::from))
    }
}
