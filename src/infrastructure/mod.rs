//! Concrete payment method adapters. Each one is a stub: it logs, waits a fixed
//! delay and answers with hard-coded strings.

pub mod credit_card;
pub mod paypal;
pub mod stripe;

pub use credit_card::CreditCardPayment;
pub use paypal::PaypalPayment;
pub use stripe::StripePayment;
