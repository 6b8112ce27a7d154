use crate::domain::payment::PaymentDetails;
use crate::domain::ports::{PaymentMethod, PaymentMethodBox, PaymentMethodFactory};
use crate::error::Result;

/// Facade bound to a single payment method for its whole lifetime.
///
/// `PaymentService` only knows the `PaymentMethodFactory` and `PaymentMethod`
/// traits, never a concrete payment method.
pub struct PaymentService {
    payment_method: PaymentMethodBox,
}

impl PaymentService {
    /// Resolves `tag` through `factory` and binds the resulting method.
    ///
    /// # Errors
    ///
    /// Returns `PaymentError::UnknownPaymentMethod` if the factory does not
    /// recognise `tag`.
    pub fn new(factory: &dyn PaymentMethodFactory, tag: &str) -> Result<Self> {
        let payment_method = factory.get_payment(tag)?;
        Ok(Self::with_method(payment_method))
    }

    /// Binds an already-built payment method.
    pub fn with_method(payment_method: PaymentMethodBox) -> Self {
        Self { payment_method }
    }

    /// The bound payment method.
    pub fn method(&self) -> &dyn PaymentMethod {
        self.payment_method.as_ref()
    }

    pub async fn process_payment(&self, details: &PaymentDetails) {
        self.payment_method.process_payment(details).await
    }

    pub fn get_payment_details(&self, payment_id: &str) -> String {
        self.payment_method.get_payment_details(payment_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::factory::DefaultPaymentMethodFactory;
    use crate::domain::payment::PaymentMethodKind;
    use async_trait::async_trait;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    /// Counts calls so forwarding can be observed.
    struct RecordingMethod {
        processed: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl PaymentMethod for RecordingMethod {
        async fn process_payment(&self, _details: &PaymentDetails) {
            self.processed.fetch_add(1, Ordering::SeqCst);
        }

        fn get_payment_details(&self, payment_id: &str) -> String {
            format!("recorded {payment_id}")
        }

        fn get_payment_status(&self, _payment_id: &str) -> String {
            "recorded".to_string()
        }

        fn identifier(&self) -> &str {
            "recording"
        }

        fn kind(&self) -> PaymentMethodKind {
            PaymentMethodKind::Stripe
        }

        fn processing_delay(&self) -> Duration {
            Duration::ZERO
        }
    }

    #[tokio::test]
    async fn test_service_forwards_to_bound_method() {
        let processed = Arc::new(AtomicUsize::new(0));
        let service = PaymentService::with_method(Box::new(RecordingMethod {
            processed: processed.clone(),
        }));

        service.process_payment(&PaymentDetails::default()).await;
        service.process_payment(&PaymentDetails::default()).await;

        assert_eq!(processed.load(Ordering::SeqCst), 2);
        assert_eq!(service.get_payment_details("abc"), "recorded abc");
        assert_eq!(service.method().identifier(), "recording");
    }

    #[test]
    fn test_service_resolves_through_factory() {
        let factory = DefaultPaymentMethodFactory::new();
        let service = PaymentService::new(&factory, "paypal").unwrap();

        assert_eq!(service.method().kind(), PaymentMethodKind::Paypal);
        assert_eq!(
            service.get_payment_details("X"),
            "Paypal payment details for ID: X"
        );
    }

    #[test]
    fn test_service_rejects_unknown_tag() {
        let factory = DefaultPaymentMethodFactory::new();
        let err = PaymentService::new(&factory, "unknown").err().unwrap();
        assert!(err.to_string().contains("unknown"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_service_process_payment_keeps_method_delay() {
        let factory = DefaultPaymentMethodFactory::new();
        let service = PaymentService::new(&factory, "credit_card").unwrap();
        let start = tokio::time::Instant::now();

        service
            .process_payment(&PaymentDetails::new(10, "USD"))
            .await;

        assert!(start.elapsed() >= service.method().processing_delay());
    }
}
