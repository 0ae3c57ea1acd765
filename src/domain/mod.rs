//! Domain types: amounts, masking, the strategy contract and its variants.

pub mod amount;
pub mod masking;
pub mod method;
pub mod outcome;
pub mod ports;
pub mod strategy;
