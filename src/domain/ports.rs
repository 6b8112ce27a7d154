use super::payment::{PaymentDetails, PaymentMethodKind};
use crate::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Capabilities shared by every payment method.
#[async_trait]
pub trait PaymentMethod: Send + Sync {
    /// Runs the (simulated) payment. Never fails and never looks at `details`
    /// beyond logging it.
    async fn process_payment(&self, details: &PaymentDetails);
    fn get_payment_details(&self, payment_id: &str) -> String;
    /// The outcome word is fixed per method and does not depend on `payment_id`.
    fn get_payment_status(&self, payment_id: &str) -> String;
    /// The method-specific identifier fixed at construction.
    fn identifier(&self) -> &str;
    fn kind(&self) -> PaymentMethodKind;
    fn processing_delay(&self) -> Duration;
}

pub trait CreditCardMethod: PaymentMethod {
    fn credit_card_number(&self) -> &str;
}

pub trait StripeMethod: PaymentMethod {
    fn stripe_id(&self) -> &str;
}

pub trait PaypalMethod: PaymentMethod {
    fn paypal_account(&self) -> &str;
}

pub type PaymentMethodBox = Box<dyn PaymentMethod>;

/// Resolves a tag to a fresh payment method.
pub trait PaymentMethodFactory: Send + Sync {
    fn get_payment(&self, tag: &str) -> Result<PaymentMethodBox>;
}
