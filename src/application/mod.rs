//! Application layer wiring payment methods to callers.
//!
//! `DefaultPaymentMethodFactory` turns a tag into a payment method and
//! `PaymentService` is the facade that forwards calls to the method it was
//! built with.

pub mod factory;
pub mod service;
