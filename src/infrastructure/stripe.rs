use crate::domain::payment::{PaymentDetails, PaymentMethodKind};
use crate::domain::ports::{PaymentMethod, StripeMethod};
use async_trait::async_trait;
use std::time::Duration;

/// Stub Stripe processor. The fastest of the three at one second per payment.
#[derive(Debug, Clone, PartialEq)]
pub struct StripePayment {
    stripe_id: String,
}

impl StripePayment {
    pub const STRIPE_ID: &'static str = "stripe_123456";
    pub const PROCESSING_DELAY: Duration = Duration::from_millis(1000);

    pub fn new() -> Self {
        Self {
            stripe_id: Self::STRIPE_ID.to_string(),
        }
    }
}

impl Default for StripePayment {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PaymentMethod for StripePayment {
    async fn process_payment(&self, details: &PaymentDetails) {
        tracing::info!(
            "Processing Stripe payment for {} {}",
            details.currency_label(),
            details.amount_label()
        );
        tokio::time::sleep(Self::PROCESSING_DELAY).await;
        tracing::info!("Stripe payment processed successfully");
    }

    fn get_payment_details(&self, payment_id: &str) -> String {
        format!("Stripe payment details for ID: {payment_id}")
    }

    fn get_payment_status(&self, payment_id: &str) -> String {
        format!("Stripe payment status for ID: {payment_id} is successfull")
    }

    fn identifier(&self) -> &str {
        self.stripe_id()
    }

    fn kind(&self) -> PaymentMethodKind {
        PaymentMethodKind::Stripe
    }

    fn processing_delay(&self) -> Duration {
        Self::PROCESSING_DELAY
    }
}

impl StripeMethod for StripePayment {
    fn stripe_id(&self) -> &str {
        &self.stripe_id
    }
}
