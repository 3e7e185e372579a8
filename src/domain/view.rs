use super::field::FieldValue;
use super::form_status::FormStatus;
use super::line_item::LineItem;
use serde::Serialize;

pub const FIELD_ID: &str = "bancontact-cardholder-name";
pub const FIELD_LABEL: &str = "Your name";
pub const FIELD_AUTOCOMPLETE: &str = "cc-name";
pub const FIELD_REQUIRED_MESSAGE: &str = "This field is required";

/// Label shown in the payment method picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodLabel {
    pub text: String,
    pub logo_class: String,
}

impl MethodLabel {
    pub fn bancontact() -> Self {
        Self {
            text: "Bancontact".to_string(),
            logo_class: "bancontact__logo payment-logos".to_string(),
        }
    }
}

/// The customer-name input while the method is active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldView {
    pub id: &'static str,
    pub label: &'static str,
    pub autocomplete: &'static str,
    pub value: String,
    pub is_error: bool,
    pub error_message: &'static str,
    pub disabled: bool,
}

impl FieldView {
    pub fn new(field: &FieldValue, status: FormStatus) -> Self {
        Self {
            id: FIELD_ID,
            label: FIELD_LABEL,
            autocomplete: FIELD_AUTOCOMPLETE,
            value: field.value.clone(),
            is_error: field.is_error(),
            error_message: FIELD_REQUIRED_MESSAGE,
            disabled: !status.is_ready(),
        }
    }
}

/// Review summary while the method is inactive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryView {
    pub customer_name: String,
}

impl SummaryView {
    pub fn new(field: &FieldValue) -> Self {
        Self {
            customer_name: field.value.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonView {
    pub label: String,
    pub is_busy: bool,
    pub disabled: bool,
}

impl ButtonView {
    pub fn new(status: FormStatus, total: &LineItem) -> Self {
        Self {
            label: button_label(status, total),
            is_busy: matches!(status, FormStatus::Submitting),
            disabled: !status.is_ready(),
        }
    }
}

pub fn button_label(status: FormStatus, total: &LineItem) -> String {
    match status {
        FormStatus::Submitting => "Processing…".to_string(),
        FormStatus::Ready => format!("Pay {}", total.amount.display_value()),
        FormStatus::Other(_) => "Please wait…".to_string(),
    }
}
