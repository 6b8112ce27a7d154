//! Domain layer: the payment method tag, the details record and the port traits
//! every payment method and factory implements.

pub mod payment;
pub mod ports;
