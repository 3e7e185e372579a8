use super::line_item::LineItem;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Handle to the payment processor. Opaque to the payment method.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProcessorHandle(pub Value);

impl ProcessorHandle {
    pub fn named(name: &str) -> Self {
        Self(serde_json::json!({ "processor": name }))
    }
}

/// Processor configuration. Opaque to the payment method.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProcessorConfiguration(pub Value);

/// Payload handed to the transaction initiator on submit.
///
/// Built fresh for every submit attempt and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDetails {
    pub processor: ProcessorHandle,
    pub name: String,
    pub items: Vec<LineItem>,
    pub total: LineItem,
    pub processor_configuration: ProcessorConfiguration,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedirectTransaction {
    pub payment_method_id: String,
}

/// Events published on the checkout event bus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CheckoutEvent {
    RedirectTransactionBegin(RedirectTransaction),
}

impl CheckoutEvent {
    pub fn redirect_transaction_begin(payment_method_id: impl Into<String>) -> Self {
        CheckoutEvent::RedirectTransactionBegin(RedirectTransaction {
            payment_method_id: payment_method_id.into(),
        })
    }
}

/// What a click on the submit button led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmitOutcome {
    /// The button was disabled because the checkout was not ready.
    Disabled,
    /// Validation blocked the submission.
    Invalid,
    Submitted,
}
