use super::store::PaymentMethodStore;

/// Checks that the form can be submitted, touching the customer-name field
/// when it cannot.
///
/// An empty name is marked touched so the field now reports its "required"
/// error, and the check fails. Only the length is checked; a name
/// made of whitespace passes.
pub fn validate_and_touch(store: &PaymentMethodStore) -> bool {
    !store.touch_customer_name_if_empty()
}
