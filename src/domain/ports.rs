use super::form_status::FormStatus;
use super::line_item::LineItem;
use super::payment::{CheckoutEvent, PaymentDetails, SubmitOutcome};
use super::view::{ButtonView, FieldView, MethodLabel, SummaryView};
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Read access to what the surrounding checkout owns: the cart and the form
/// status.
pub trait CheckoutContext: Send + Sync {
    /// Returns the line items and their total.
    fn line_items(&self) -> (Vec<LineItem>, LineItem);
    fn form_status(&self) -> FormStatus;
}

pub trait EventBus: Send + Sync {
    fn emit(&self, event: CheckoutEvent);
}

/// Starts a transaction with the payment processor.
///
/// Status transitions that follow (submitting, complete, error) belong to the
/// checkout, not to the caller.
#[async_trait]
pub trait TransactionSubmitter: Send + Sync {
    async fn submit(&self, payment_method_id: &str, details: PaymentDetails) -> Result<()>;
}

/// The shape every payment method plugs into the checkout registry with.
#[async_trait]
pub trait PaymentMethod: Send + Sync {
    fn id(&self) -> &str;
    fn label(&self) -> MethodLabel;
    fn active_content(&self) -> FieldView;
    fn inactive_content(&self) -> SummaryView;
    fn submit_button(&self) -> ButtonView;
    fn aria_label(&self, translate: &dyn Fn(&str) -> String) -> String;
    /// Handles a click on the submit button.
    async fn submit(&self) -> Result<SubmitOutcome>;
}

pub type CheckoutContextRef = Arc<dyn CheckoutContext>;
pub type EventBusBox = Box<dyn EventBus>;
pub type TransactionSubmitterBox = Box<dyn TransactionSubmitter>;
pub type PaymentMethodBox = Box<dyn PaymentMethod>;
