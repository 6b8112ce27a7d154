use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum PaymentError {
    #[error("No payment system has been found named as {0}")]
    #[diagnostic(
        code(payment_methods::unknown_method),
        help("expected one of: credit_card, stripe, paypal")
    )]
    UnknownPaymentMethod(String),
    #[error("Invalid payment details: {0}")]
    #[diagnostic(code(payment_methods::invalid_details))]
    InvalidDetails(#[from] serde_json::Error),
    #[error("Payment task failed: {0}")]
    #[diagnostic(code(payment_methods::task))]
    Task(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, PaymentError>;
