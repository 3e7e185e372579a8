use crate::domain::form_status::FormStatus;
use crate::domain::payment::{CheckoutEvent, SubmitOutcome};
use crate::domain::view::{ButtonView, FieldView};
use crate::error::Result;
use crate::infrastructure::channel::SubmissionRequest;
use serde::Serialize;
use std::io::Write;

/// One line of a session transcript.
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TranscriptEntry<'a> {
    /// An event published on the checkout event bus.
    Event { step: usize, event: &'a CheckoutEvent },
    /// A transaction handed to the processor.
    Submission {
        step: usize,
        request: &'a SubmissionRequest,
    },
    /// What the customer sees after a step.
    Snapshot {
        step: usize,
        status: FormStatus,
        field: &'a FieldView,
        button: &'a ButtonView,
        #[serde(skip_serializing_if = "Option::is_none")]
        outcome: Option<SubmitOutcome>,
    },
}

/// Writes a session transcript as JSON lines.
pub struct TranscriptWriter<W: Write> {
    writer: W,
}

impl<W: Write> TranscriptWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_entry(&mut self, entry: &TranscriptEntry<'_>) -> Result<()> {
        serde_json::to_writer(&mut self.writer, entry)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
