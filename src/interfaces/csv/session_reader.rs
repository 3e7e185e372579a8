use crate::domain::form_status::FormStatus;
use crate::error::{CheckoutError, Result};
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize)]
struct SessionRecord {
    step: String,
    value: Option<String>,
}

/// One interaction in a recorded checkout session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStep {
    /// The checkout moved to a new form status.
    Status(FormStatus),
    /// The customer typed into the name field.
    Input(String),
    /// The customer clicked the submit button.
    Submit,
}

impl SessionStep {
    fn from_record(record: SessionRecord) -> Result<Self> {
        match record.step.trim() {
            "status" => record
                .value
                .ok_or_else(|| CheckoutError::InvalidStep("status step without a value".into()))?
                .parse()
                .map(SessionStep::Status),
            "input" => Ok(SessionStep::Input(record.value.unwrap_or_default())),
            "submit" => Ok(SessionStep::Submit),
            other => Err(CheckoutError::InvalidStep(other.to_string())),
        }
    }
}

/// Reads session steps from a CSV source with a `step, value` header.
///
/// Headers and the step name are trimmed; values are taken exactly as written,
/// so `input,"  Jan  "` keeps its spaces. An `input` row with an empty value
/// clears the field.
pub struct SessionReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> SessionReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::Headers)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads steps, one per row.
    pub fn steps(self) -> impl Iterator<Item = Result<SessionStep>> {
        self.reader
            .into_deserialize::<SessionRecord>()
            .map(|result| result.map_err(CheckoutError::from).and_then(SessionStep::from_record))
    }
}
