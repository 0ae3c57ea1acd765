//! Built-in payment strategies.

pub mod bank_transfer;
pub mod credit_card;
pub mod paypal;

pub use bank_transfer::BankTransferPayment;
pub use credit_card::CreditCardPayment;
pub use paypal::PayPalPayment;
