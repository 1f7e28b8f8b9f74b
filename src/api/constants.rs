//! API constants for the payment backend

/// Base API path
pub const API_BASE_PATH: &str = "/api";

/// API version segment
pub const API_VERSION: &str = "v1";

/// Full API path with version
pub fn api_path() -> String {
    format!("{}/{}", API_BASE_PATH, API_VERSION)
}

/// Payment methods listing endpoint
pub const PAYMENT_METHODS_ENDPOINT: &str = "payment-methods";

/// Standard headers
pub mod headers {
    pub const ACCEPT_JSON: &str = "application/json";
}

/// Known payment method ids
pub mod methods {
    use crate::api::models::MethodId;

    /// Sentinel id of the "no method" fallback
    pub const NONE: MethodId = MethodId(0);
    pub const CASH: MethodId = MethodId(1);
    pub const CHECK: MethodId = MethodId(2);
    pub const CREDIT: MethodId = MethodId(3);
    pub const DEPOSIT: MethodId = MethodId(4);
    pub const STRIPE: MethodId = MethodId(5);
    pub const SQUARE: MethodId = MethodId(6);
    pub const ACH: MethodId = MethodId(7);
}

/// Build the payment methods URL for a customer
pub fn payment_methods_endpoint(base_url: &str, customer_id: &str) -> String {
    format!(
        "{}{}/{}?customer_id={}",
        base_url.trim_end_matches('/'),
        api_path(),
        PAYMENT_METHODS_ENDPOINT,
        urlencoding::encode(customer_id)
    )
}
