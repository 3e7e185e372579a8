use super::field::FieldValue;

/// State owned by the Bancontact payment-method store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentMethodState {
    pub customer_name: FieldValue,
}

/// Actions understood by the store.
///
/// `Unrecognized` stands for actions addressed to some other store sharing the
/// same dispatcher; the reducer passes them through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    CustomerNameSet(String),
    Unrecognized(String),
}

impl Action {
    pub fn kind(&self) -> &str {
        match self {
            Action::CustomerNameSet(_) => "CUSTOMER_NAME_SET",
            Action::Unrecognized(kind) => kind,
        }
    }
}

/// Builds the action that replaces the customer name. No validation happens
/// here; that is deferred to submission.
pub fn change_customer_name(value: impl Into<String>) -> Action {
    Action::CustomerNameSet(value.into())
}

pub fn reduce(state: &PaymentMethodState, action: &Action) -> PaymentMethodState {
    match action {
        Action::CustomerNameSet(payload) => PaymentMethodState {
            customer_name: FieldValue::touched(payload.clone()),
        },
        Action::Unrecognized(_) => state.clone(),
    }
}

/// Reads the customer name, falling back to an empty untouched field when the
/// store has not been initialized.
pub fn get_customer_name(state: Option<&PaymentMethodState>) -> FieldValue {
    state
        .map(|state| state.customer_name.clone())
        .unwrap_or_default()
}
