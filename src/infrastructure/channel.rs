use crate::domain::payment::{CheckoutEvent, PaymentDetails};
use crate::domain::ports::{EventBus, TransactionSubmitter};
use crate::error::{CheckoutError, Result};
use async_trait::async_trait;
use serde::Serialize;
use tokio::sync::mpsc;
use tracing::warn;

/// Publishes checkout events onto an unbounded channel.
///
/// The receiving half belongs to whoever orchestrates the checkout.
#[derive(Clone)]
pub struct ChannelEventBus {
    tx: mpsc::UnboundedSender<CheckoutEvent>,
}

impl ChannelEventBus {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<CheckoutEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl EventBus for ChannelEventBus {
    fn emit(&self, event: CheckoutEvent) {
        if self.tx.send(event).is_err() {
            warn!("event bus has no listener, event dropped");
        }
    }
}

/// A transaction request as received by the orchestrator.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRequest {
    pub payment_method_id: String,
    pub details: PaymentDetails,
}

/// Forwards submissions to the orchestrator over an unbounded channel.
#[derive(Clone)]
pub struct ChannelSubmitter {
    tx: mpsc::UnboundedSender<SubmissionRequest>,
}

impl ChannelSubmitter {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<SubmissionRequest>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

#[async_trait]
impl TransactionSubmitter for ChannelSubmitter {
    async fn submit(&self, payment_method_id: &str, details: PaymentDetails) -> Result<()> {
        self.tx
            .send(SubmissionRequest {
                payment_method_id: payment_method_id.to_string(),
                details,
            })
            .map_err(|_| {
                CheckoutError::SubmissionError("transaction processor is not listening".into())
            })
    }
}
