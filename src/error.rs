use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckoutError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Invalid form status: {0}")]
    InvalidStatus(String),
    #[error("Invalid session step: {0}")]
    InvalidStep(String),
    #[error("Invalid line item: {0}")]
    InvalidLineItem(String),
    #[error("Payment method already registered: {0}")]
    DuplicateMethod(String),
    #[error("Submission error: {0}")]
    SubmissionError(String),
}

pub type Result<T> = std::result::Result<T, CheckoutError>;
