use crate::api::PaymentOption;

/// Merchant capability flags read from the addon settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AddonFlags {
    pub stripe: bool,
    pub square: bool,
}

impl AddonFlags {
    pub fn merchant_capable(&self) -> bool {
        self.stripe || self.square
    }
}

/// Resolve the option selected after a fetch
///
/// With a merchant addon enabled, the first Stripe/Square/ACH option marked
/// as the merchant default wins. Otherwise (or if none qualifies) the first
/// `is_default` option, then the first option, then [`PaymentOption::none`].
pub fn resolve_default(options: &[PaymentOption], addons: AddonFlags) -> PaymentOption {
    if addons.merchant_capable() {
        let merchant = options
            .iter()
            .find(|option| option.id.is_merchant_method() && option.is_default_merchant);
        if let Some(option) = merchant {
            return option.clone();
        }
    }

    plain_default(options)
}

fn plain_default(options: &[PaymentOption]) -> PaymentOption {
    options
        .iter()
        .find(|option| option.is_default)
        .or_else(|| options.first())
        .cloned()
        .unwrap_or_else(PaymentOption::none)
}
