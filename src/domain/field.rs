use serde::Serialize;

/// A single form field: its raw text and whether the user has touched it.
///
/// `is_touched` only ever moves from `false` to `true` within a session, so a
/// validation error revealed by a submit attempt stays visible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldValue {
    pub value: String,
    pub is_touched: bool,
}

impl FieldValue {
    pub fn touched(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            is_touched: true,
        }
    }

    /// A touched field with no content is reported as an error.
    pub fn is_error(&self) -> bool {
        self.is_touched && self.value.is_empty()
    }
}
