//! Application layer: the payment context that mediates between callers and
//! the active payment strategy.
//!
//! `PaymentContext` owns at most one strategy and the processing delay it
//! hands to that strategy on execution.

pub mod context;
