#![allow(dead_code)]

use payment_methods::application::factory::DefaultPaymentMethodFactory;
use payment_methods::application::service::PaymentService;
use payment_methods::domain::payment::{PaymentDetails, PaymentMethodKind};

pub fn sample_details() -> PaymentDetails {
    PaymentDetails::new(100, "USD")
}

/// One service per built-in payment method, in `PaymentMethodKind::ALL` order.
pub fn all_services() -> Vec<PaymentService> {
    let factory = DefaultPaymentMethodFactory::new();
    PaymentMethodKind::ALL
        .iter()
        .map(|kind| PaymentService::new(&factory, kind.as_str()).unwrap())
        .collect()
}

/// The name each method uses for itself in its detail strings.
pub fn display_name(kind: PaymentMethodKind) -> &'static str {
    match kind {
        PaymentMethodKind::CreditCard => "Credit card",
        PaymentMethodKind::Stripe => "Stripe",
        PaymentMethodKind::Paypal => "Paypal",
    }
}
