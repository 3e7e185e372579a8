use super::store::PaymentMethodStore;
use super::validation::validate_and_touch;
use crate::domain::BANCONTACT_METHOD_ID;
use crate::domain::payment::{
    CheckoutEvent, PaymentDetails, ProcessorConfiguration, ProcessorHandle, SubmitOutcome,
};
use crate::domain::ports::{CheckoutContextRef, EventBusBox, PaymentMethod, TransactionSubmitterBox};
use crate::domain::view::{ButtonView, FieldView, MethodLabel, SummaryView};
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// The Bancontact payment method.
///
/// Collects the customer's name through its own store and, on submit, starts
/// a redirect transaction with the payment processor. What happens after the
/// transaction is handed off is up to the checkout.
pub struct BancontactMethod {
    store: Arc<PaymentMethodStore>,
    checkout: CheckoutContextRef,
    events: EventBusBox,
    submitter: TransactionSubmitterBox,
    processor: ProcessorHandle,
    configuration: ProcessorConfiguration,
}

impl BancontactMethod {
    /// Creates the payment method for one checkout session.
    ///
    /// # Arguments
    ///
    /// * `store` - The session's customer-name store, shared with the field.
    /// * `checkout` - Cart contents and form status.
    /// * `events` - Where the transaction-begin event is published.
    /// * `submitter` - Starts the transaction with the processor.
    /// * `processor` / `configuration` - Forwarded verbatim on submit.
    pub fn new(
        store: Arc<PaymentMethodStore>,
        checkout: CheckoutContextRef,
        events: EventBusBox,
        submitter: TransactionSubmitterBox,
        processor: ProcessorHandle,
        configuration: ProcessorConfiguration,
    ) -> Self {
        Self {
            store,
            checkout,
            events,
            submitter,
            processor,
            configuration,
        }
    }

    pub fn store(&self) -> &PaymentMethodStore {
        &self.store
    }

    fn payment_details(&self) -> PaymentDetails {
        let (items, total) = self.checkout.line_items();
        PaymentDetails {
            processor: self.processor.clone(),
            name: self.store.customer_name().value,
            items,
            total,
            processor_configuration: self.configuration.clone(),
        }
    }
}

#[async_trait]
impl PaymentMethod for BancontactMethod {
    fn id(&self) -> &str {
        BANCONTACT_METHOD_ID
    }

    fn label(&self) -> MethodLabel {
        MethodLabel::bancontact()
    }

    fn active_content(&self) -> FieldView {
        FieldView::new(&self.store.customer_name(), self.checkout.form_status())
    }

    fn inactive_content(&self) -> SummaryView {
        SummaryView::new(&self.store.customer_name())
    }

    fn submit_button(&self) -> ButtonView {
        let (_, total) = self.checkout.line_items();
        ButtonView::new(self.checkout.form_status(), &total)
    }

    fn aria_label(&self, translate: &dyn Fn(&str) -> String) -> String {
        translate("Bancontact")
    }

    async fn submit(&self) -> Result<SubmitOutcome> {
        let status = self.checkout.form_status();
        if !status.is_ready() {
            debug!(%status, "submit button is disabled");
            return Ok(SubmitOutcome::Disabled);
        }
        if !validate_and_touch(&self.store) {
            debug!("bancontact form is incomplete");
            return Ok(SubmitOutcome::Invalid);
        }

        debug!("submitting bancontact payment");
        self.events
            .emit(CheckoutEvent::redirect_transaction_begin(BANCONTACT_METHOD_ID));
        self.submitter
            .submit(BANCONTACT_METHOD_ID, self.payment_details())
            .await?;
        Ok(SubmitOutcome::Submitted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::form_status::{FormStatus, LifecycleStage};
    use crate::domain::line_item::{LineItem, Money};
    use crate::domain::ports::TransactionSubmitter;
    use crate::domain::state::change_customer_name;
    use crate::error::CheckoutError;
    use crate::infrastructure::channel::{ChannelEventBus, ChannelSubmitter};
    use crate::infrastructure::in_memory::InMemoryCheckout;
    use rust_decimal_macros::dec;

    struct RejectingSubmitter;

    #[async_trait]
    impl TransactionSubmitter for RejectingSubmitter {
        async fn submit(&self, _: &str, _: PaymentDetails) -> Result<()> {
            Err(CheckoutError::SubmissionError("declined".into()))
        }
    }

    fn checkout() -> Arc<InMemoryCheckout> {
        Arc::new(InMemoryCheckout::new(
            vec![LineItem::new(
                "plan",
                "Personal Plan",
                Money::new("EUR", dec!(48.00)),
            )],
            "EUR",
        ))
    }

    #[tokio::test]
    async fn test_valid_submit_emits_then_submits() {
        let checkout = checkout();
        checkout.set_form_status(FormStatus::Ready);
        let (bus, mut events) = ChannelEventBus::new();
        let (submitter, mut requests) = ChannelSubmitter::new();
        let method = BancontactMethod::new(
            Arc::new(PaymentMethodStore::new()),
            checkout.clone(),
            Box::new(bus),
            Box::new(submitter),
            ProcessorHandle::named("stripe"),
            ProcessorConfiguration(serde_json::json!({ "public_key": "pk_test" })),
        );
        method.store().dispatch(change_customer_name("Jan Peeters"));

        assert_eq!(method.submit().await.unwrap(), SubmitOutcome::Submitted);

        assert_eq!(
            events.try_recv().unwrap(),
            CheckoutEvent::redirect_transaction_begin("bancontact")
        );
        assert!(events.try_recv().is_err());

        let request = requests.try_recv().unwrap();
        assert_eq!(request.payment_method_id, "bancontact");
        assert_eq!(request.details.name, "Jan Peeters");
        assert_eq!(request.details.items.len(), 1);
        assert_eq!(request.details.total.amount.display_value(), "€48.00");
        assert_eq!(request.details.processor, ProcessorHandle::named("stripe"));
        assert_eq!(
            request.details.processor_configuration.0["public_key"],
            "pk_test"
        );
        assert!(requests.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_empty_name_blocks_submission() {
        let checkout = checkout();
        checkout.set_form_status(FormStatus::Ready);
        let (bus, mut events) = ChannelEventBus::new();
        let (submitter, mut requests) = ChannelSubmitter::new();
        let method = BancontactMethod::new(
            Arc::new(PaymentMethodStore::new()),
            checkout,
            Box::new(bus),
            Box::new(submitter),
            ProcessorHandle::default(),
            ProcessorConfiguration::default(),
        );

        assert_eq!(method.submit().await.unwrap(), SubmitOutcome::Invalid);
        assert!(events.try_recv().is_err());
        assert!(requests.try_recv().is_err());
        assert!(method.store().customer_name().is_touched);
        assert!(method.active_content().is_error);
    }

    #[tokio::test]
    async fn test_submit_ignored_unless_ready() {
        let checkout = checkout();
        let (bus, mut events) = ChannelEventBus::new();
        let (submitter, mut requests) = ChannelSubmitter::new();
        let method = BancontactMethod::new(
            Arc::new(PaymentMethodStore::new()),
            checkout.clone(),
            Box::new(bus),
            Box::new(submitter),
            ProcessorHandle::default(),
            ProcessorConfiguration::default(),
        );
        method.store().dispatch(change_customer_name("Jan"));

        for status in [
            FormStatus::Submitting,
            FormStatus::Other(LifecycleStage::Loading),
            FormStatus::Other(LifecycleStage::Complete),
        ] {
            checkout.set_form_status(status);
            assert_eq!(method.submit().await.unwrap(), SubmitOutcome::Disabled);
        }
        assert!(events.try_recv().is_err());
        assert!(requests.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_disabled_submit_does_not_touch_field() {
        let checkout = checkout();
        let (bus, _events) = ChannelEventBus::new();
        let (submitter, _requests) = ChannelSubmitter::new();
        let method = BancontactMethod::new(
            Arc::new(PaymentMethodStore::new()),
            checkout,
            Box::new(bus),
            Box::new(submitter),
            ProcessorHandle::default(),
            ProcessorConfiguration::default(),
        );

        assert_eq!(method.submit().await.unwrap(), SubmitOutcome::Disabled);
        assert!(!method.store().customer_name().is_touched);
    }

    #[tokio::test]
    async fn test_submitter_failure_propagates_after_event() {
        let checkout = checkout();
        checkout.set_form_status(FormStatus::Ready);
        let (bus, mut events) = ChannelEventBus::new();
        let method = BancontactMethod::new(
            Arc::new(PaymentMethodStore::new()),
            checkout,
            Box::new(bus),
            Box::new(RejectingSubmitter),
            ProcessorHandle::default(),
            ProcessorConfiguration::default(),
        );
        method.store().dispatch(change_customer_name("Jan"));

        let result = method.submit().await;
        assert!(matches!(result, Err(CheckoutError::SubmissionError(_))));
        assert!(events.try_recv().is_ok());
    }

    #[tokio::test]
    async fn test_views_follow_store_and_status() {
        let checkout = checkout();
        let (bus, _events) = ChannelEventBus::new();
        let (submitter, _requests) = ChannelSubmitter::new();
        let method = BancontactMethod::new(
            Arc::new(PaymentMethodStore::new()),
            checkout.clone(),
            Box::new(bus),
            Box::new(submitter),
            ProcessorHandle::default(),
            ProcessorConfiguration::default(),
        );

        assert_eq!(method.id(), "bancontact");
        assert_eq!(method.label().text, "Bancontact");
        assert_eq!(method.aria_label(&|s: &str| s.to_uppercase()), "BANCONTACT");
        assert_eq!(method.submit_button().label, "Please wait…");

        checkout.set_form_status(FormStatus::Ready);
        assert_eq!(method.submit_button().label, "Pay €48.00");

        method.store().dispatch(change_customer_name("Jan"));
        assert_eq!(method.inactive_content().customer_name, "Jan");
        assert_eq!(method.active_content().value, "Jan");

        checkout.set_form_status(FormStatus::Submitting);
        let button = method.submit_button();
        assert_eq!(button.label, "Processing…");
        assert!(button.is_busy);
    }
}
