use crate::domain::payment::{PaymentDetails, PaymentMethodKind};
use crate::domain::ports::{PaymentMethod, PaypalMethod};
use async_trait::async_trait;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct PaypalPayment {
    paypal_account: String,
}

impl PaypalPayment {
    pub const ACCOUNT: &'static str = "paypa_account_123";
    pub const PROCESSING_DELAY: Duration = Duration::from_millis(2000);

    pub fn new() -> Self {
        Self {
            paypal_account: Self::ACCOUNT.to_string(),
        }
    }
}

impl Default for PaypalPayment {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PaymentMethod for PaypalPayment {
    async fn process_payment(&self, details: &PaymentDetails) {
        tracing::info!(
            "Processing paypal payments for {} {}",
            details.currency_label(),
            details.amount_label()
        );
        tokio::time::sleep(Self::PROCESSING_DELAY).await;
        tracing::info!("Paypal payment processed successfully");
    }

    fn get_payment_details(&self, payment_id: &str) -> String {
        format!("Paypal payment details for ID: {payment_id}")
    }

    fn get_payment_status(&self, payment_id: &str) -> String {
        format!("Paypal payment status for {payment_id} is successfull")
    }

    fn identifier(&self) -> &str {
        self.paypal_account()
    }

    fn kind(&self) -> PaymentMethodKind {
        PaymentMethodKind::Paypal
    }

    fn processing_delay(&self) -> Duration {
        Self::PROCESSING_DELAY
    }
}

impl PaypalMethod for PaypalPayment {
    fn paypal_account(&self) -> &str {
        &self.paypal_account
    }
}
