//! Payment backend API
//!
//! Models for payment method records, endpoint constants and the fetch
//! collaborators the picker loads its options from.

pub mod client;
pub mod constants;
pub mod models;

pub use client::{FileSource, PaymentClient, PaymentMethodSource};
pub use constants::methods;
pub use models::{CustomerId, MethodId, PaymentMethodsResponse, PaymentOption};
