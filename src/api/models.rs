//! Wire and domain models for payment methods

use serde::{Deserialize, Serialize};
use std::fmt;

use super::constants::methods;

/// Identifier of a payment method as sent by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MethodId(pub u64);

impl MethodId {
    pub fn is_credit(self) -> bool {
        self == methods::CREDIT
    }

    pub fn is_ach(self) -> bool {
        self == methods::ACH
    }

    /// Methods that can be the preferred method of a merchant addon
    pub fn is_merchant_method(self) -> bool {
        matches!(self, methods::STRIPE | methods::SQUARE | methods::ACH)
    }
}

impl fmt::Display for MethodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Customer whose payment methods are listed
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(pub String);

impl CustomerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One selectable payment method record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentOption {
    pub id: MethodId,
    pub name: String,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub is_default_merchant: bool,
}

impl PaymentOption {
    pub fn new(id: MethodId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            is_default: false,
            is_default_merchant: false,
        }
    }

    pub fn with_default(mut self, is_default: bool) -> Self {
        self.is_default = is_default;
        self
    }

    pub fn with_default_merchant(mut self, is_default_merchant: bool) -> Self {
        self.is_default_merchant = is_default_merchant;
        self
    }

    /// Placeholder used when nothing can be resolved as the default
    pub fn none() -> Self {
        Self::new(methods::NONE, "None")
    }

    /// Lowercased first character of the name, if any
    pub fn initial(&self) -> Option<char> {
        self.name.chars().next().and_then(|c| c.to_lowercase().next())
    }
}

/// Response envelope of the payment methods endpoint
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PaymentMethodsResponse {
    Envelope { data: Vec<PaymentOption> },
    Bare(Vec<PaymentOption>),
}

impl PaymentMethodsResponse {
    pub fn into_options(self) -> Vec<PaymentOption> {
        match self {
            PaymentMethodsResponse::Envelope { data } => data,
            PaymentMethodsResponse::Bare(data) => data,
        }
    }
}
