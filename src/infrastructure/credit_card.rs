use crate::domain::payment::{PaymentDetails, PaymentMethodKind};
use crate::domain::ports::{CreditCardMethod, PaymentMethod};
use async_trait::async_trait;
use std::time::Duration;

/// Stub credit card processor.
///
/// Holds a fixed card number and takes two seconds to "process" a payment.
#[derive(Debug, Clone, PartialEq)]
pub struct CreditCardPayment {
    credit_card_number: String,
}

impl CreditCardPayment {
    pub const CARD_NUMBER: &'static str = "41111111111111";
    pub const PROCESSING_DELAY: Duration = Duration::from_millis(2000);

    pub fn new() -> Self {
        Self {
            credit_card_number: Self::CARD_NUMBER.to_string(),
        }
    }
}

impl Default for CreditCardPayment {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PaymentMethod for CreditCardPayment {
    async fn process_payment(&self, details: &PaymentDetails) {
        tracing::info!(
            "Processing credit card payments for {} {}",
            details.currency_label(),
            details.amount_label()
        );
        tokio::time::sleep(Self::PROCESSING_DELAY).await;
        tracing::info!("Credit card payment processed successfully");
    }

    fn get_payment_details(&self, payment_id: &str) -> String {
        format!("Credit card details for ID: {payment_id}")
    }

    fn get_payment_status(&self, payment_id: &str) -> String {
        format!("Credit card payment status for ID: {payment_id} is successful")
    }

    fn identifier(&self) -> &str {
        self.credit_card_number()
    }

    fn kind(&self) -> PaymentMethodKind {
        PaymentMethodKind::CreditCard
    }

    fn processing_delay(&self) -> Duration {
        Self::PROCESSING_DELAY
    }
}

impl CreditCardMethod for CreditCardPayment {
    fn credit_card_number(&self) -> &str {
        &self.credit_card_number
    }
}
