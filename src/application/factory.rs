use crate::domain::payment::PaymentMethodKind;
use crate::domain::ports::{PaymentMethodBox, PaymentMethodFactory};
use crate::error::Result;
use crate::infrastructure::{CreditCardPayment, PaypalPayment, StripePayment};

/// Factory for the built-in payment methods.
///
/// Every call builds a new instance; nothing is cached between calls.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultPaymentMethodFactory;

impl DefaultPaymentMethodFactory {
    pub fn new() -> Self {
        Self
    }

    /// Builds the payment method for an already-parsed tag.
    pub fn create(&self, kind: PaymentMethodKind) -> PaymentMethodBox {
        match kind {
            PaymentMethodKind::CreditCard => Box::new(CreditCardPayment::new()),
            PaymentMethodKind::Paypal => Box::new(PaypalPayment::new()),
            PaymentMethodKind::Stripe => Box::new(StripePayment::new()),
        }
    }
}

impl PaymentMethodFactory for DefaultPaymentMethodFactory {
    fn get_payment(&self, tag: &str) -> Result<PaymentMethodBox> {
        let kind: PaymentMethodKind = tag.parse()?;
        tracing::debug!(method = %kind, "resolved payment method");
        Ok(self.create(kind))
    }
}
