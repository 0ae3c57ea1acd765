use crate::config::LatencyProfile;
use crate::domain::method::PaymentMethod;
use crate::domain::ports::ProcessingDelay;
use crate::error::Decline;
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// Simulated latency backed by `tokio::time::sleep`.
///
/// The wait races against a `CancellationToken`. Cancelling the token aborts
/// any in-flight wait and every later one. The token is never reset here, so
/// whoever owns a clone of it still sees the cancellation after the payment
/// has returned `false`.
#[derive(Debug, Clone, Default)]
pub struct TokioDelay {
    profile: LatencyProfile,
    cancel: CancellationToken,
}

impl TokioDelay {
    pub fn new(profile: LatencyProfile) -> Self {
        Self::with_cancellation(profile, CancellationToken::new())
    }

    /// Creates a delay that aborts as soon as `cancel` fires.
    ///
    /// # Arguments
    ///
    /// * `profile` - The per-method latency to simulate.
    /// * `cancel` - The token shared with whoever may abort processing.
    pub fn with_cancellation(profile: LatencyProfile, cancel: CancellationToken) -> Self {
        Self { profile, cancel }
    }

    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }
}

#[async_trait]
impl ProcessingDelay for TokioDelay {
    async fn wait(&self, method: PaymentMethod) -> Result<(), Decline> {
        let duration = self.profile.latency(method);
        tracing::debug!(%method, ?duration, "Simulating payment processing");

        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => {
                tracing::warn!(%method, "Payment processing cancelled");
                Err(Decline::ProcessingCancelled)
            }
            _ = tokio::time::sleep(duration) => Ok(()),
        }
    }
}

/// Zero-latency delay for tests and `--instant` runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantDelay;

#[async_trait]
impl ProcessingDelay for InstantDelay {
    async fn wait(&self, _method: PaymentMethod) -> Result<(), Decline> {
        Ok(())
    }
}
