use crate::domain::field::FieldValue;
use crate::domain::state::{
    Action, PaymentMethodState, change_customer_name, get_customer_name, reduce,
};
use tokio::sync::watch;
use tracing::debug;

/// State container for one Bancontact checkout session.
///
/// Each session constructs its own store and hands it to the components that
/// need it. All mutation goes through [`PaymentMethodStore::dispatch`], which
/// applies actions in the order they are issued. Subscribers are woken only
/// when an action actually changes the state.
pub struct PaymentMethodStore {
    state: watch::Sender<PaymentMethodState>,
}

impl Default for PaymentMethodStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PaymentMethodStore {
    pub fn new() -> Self {
        debug!("creating a new bancontact payment method store");
        let (state, _) = watch::channel(PaymentMethodState::default());
        Self { state }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> PaymentMethodState {
        self.state.borrow().clone()
    }

    pub fn customer_name(&self) -> FieldValue {
        get_customer_name(Some(&*self.state.borrow()))
    }

    /// Applies `action` and returns whether the state changed.
    pub fn dispatch(&self, action: Action) -> bool {
        let changed = self.state.send_if_modified(|state| {
            let next = reduce(state, &action);
            if next == *state {
                false
            } else {
                *state = next;
                true
            }
        });
        debug!(action = action.kind(), changed, "dispatched");
        changed
    }

    /// Touches the customer-name field if it is empty and reports whether it
    /// was. The check and the touch happen under one write, so a name typed
    /// concurrently is never overwritten.
    pub fn touch_customer_name_if_empty(&self) -> bool {
        let mut empty = false;
        self.state.send_if_modified(|state| {
            if !state.customer_name.value.is_empty() {
                return false;
            }
            empty = true;
            let next = reduce(state, &change_customer_name(""));
            if next == *state {
                false
            } else {
                *state = next;
                true
            }
        });
        empty
    }

    /// Receiver that is notified after every state change.
    pub fn subscribe(&self) -> watch::Receiver<PaymentMethodState> {
        self.state.subscribe()
    }
}
