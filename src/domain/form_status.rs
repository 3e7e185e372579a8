use crate::error::CheckoutError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Checkout stages the Bancontact method has no dedicated behaviour for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleStage {
    Loading,
    Validating,
    Complete,
    Error,
}

/// Lifecycle stage of the whole checkout, owned by the orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub enum FormStatus {
    Ready,
    Submitting,
    Other(LifecycleStage),
}

impl Default for FormStatus {
    fn default() -> Self {
        FormStatus::Other(LifecycleStage::Loading)
    }
}

impl FormStatus {
    pub fn is_ready(self) -> bool {
        matches!(self, FormStatus::Ready)
    }
}

impl fmt::Display for FormStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FormStatus::Ready => "ready",
            FormStatus::Submitting => "submitting",
            FormStatus::Other(LifecycleStage::Loading) => "loading",
            FormStatus::Other(LifecycleStage::Validating) => "validating",
            FormStatus::Other(LifecycleStage::Complete) => "complete",
            FormStatus::Other(LifecycleStage::Error) => "error",
        };
        f.write_str(name)
    }
}

impl FromStr for FormStatus {
    type Err = CheckoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ready" => Ok(FormStatus::Ready),
            "submitting" => Ok(FormStatus::Submitting),
            "loading" => Ok(FormStatus::Other(LifecycleStage::Loading)),
            "validating" => Ok(FormStatus::Other(LifecycleStage::Validating)),
            "complete" => Ok(FormStatus::Other(LifecycleStage::Complete)),
            "error" => Ok(FormStatus::Other(LifecycleStage::Error)),
            other => Err(CheckoutError::InvalidStatus(other.to_string())),
        }
    }
}

impl From<FormStatus> for String {
    fn from(status: FormStatus) -> Self {
        status.to_string()
    }
}
