#![allow(dead_code)]

use async_trait::async_trait;
use std::io::Write;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use strategy_payments::domain::method::PaymentMethod;
use strategy_payments::domain::ports::ProcessingDelay;
use strategy_payments::error::Decline;
use tempfile::NamedTempFile;

pub const REQUEST_HEADER: &str =
    "method, amount, identifier, limit, holder, expiry, cvv, bank, routing";

/// Zero-latency delay that records how often it was entered.
#[derive(Clone, Default)]
pub struct CountingDelay {
    calls: Arc<AtomicUsize>,
}

impl CountingDelay {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProcessingDelay for CountingDelay {
    async fn wait(&self, _method: PaymentMethod) -> Result<(), Decline> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

pub fn write_requests(rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{REQUEST_HEADER}").unwrap();
    for row in rows {
        writeln!(file, "{row}").unwrap();
    }
    file
}
