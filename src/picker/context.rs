//! Shared "add payment" context
//!
//! The picker never owns the current selection. It reads it from, and
//! writes replacements to, a [`PaymentContext`] handed to it at
//! construction.

use crate::api::{CustomerId, PaymentOption};
use log::debug;
use std::sync::{Arc, Mutex};

/// Initial push after a successful fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentData {
    pub list_payment_method: Vec<PaymentOption>,
    pub payment_selected: PaymentOption,
}

/// Everything that changes when the user picks a different method
///
/// `invoice_selected` and `check_all` are only present for ACH, which
/// invalidates invoice-linked state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionChange {
    pub payment_selected: PaymentOption,
    pub value_payment: String,
    pub active_credit: bool,
    pub active_deposit: bool,
    pub invoice_selected: Option<Vec<String>>,
    pub check_all: Option<bool>,
}

/// Narrow read/write capability over the shared payment state
pub trait PaymentContext {
    fn payment_selected(&self) -> Option<PaymentOption>;

    fn customer_id(&self) -> Option<CustomerId>;

    fn update_payment_data(&self, data: PaymentData);

    fn update_number_payment(&self, change: SelectionChange);
}

/// State behind [`AddPaymentContext`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddPaymentState {
    pub customer_id: Option<CustomerId>,
    pub payment_selected: Option<PaymentOption>,
    pub list_payment_method: Vec<PaymentOption>,
    pub value_payment: String,
    pub active_credit: bool,
    pub active_deposit: bool,
    pub invoice_selected: Vec<String>,
    pub check_all: bool,
}

/// In-memory context shared between the picker and the rest of the form
#[derive(Debug, Clone, Default)]
pub struct AddPaymentContext {
    inner: Arc<Mutex<AddPaymentState>>,
}

impl AddPaymentContext {
    pub fn new(customer_id: CustomerId) -> Self {
        Self::from_state(AddPaymentState {
            customer_id: Some(customer_id),
            ..AddPaymentState::default()
        })
    }

    pub fn from_state(state: AddPaymentState) -> Self {
        Self {
            inner: Arc::new(Mutex::new(state)),
        }
    }

    pub fn set_customer_id(&self, customer_id: CustomerId) {
        self.inner.lock().unwrap().customer_id = Some(customer_id);
    }

    /// Form-side edits the picker resets on selection
    pub fn set_value_payment(&self, value: impl Into<String>) {
        self.inner.lock().unwrap().value_payment = value.into();
    }

    pub fn set_invoices(&self, invoices: Vec<String>, check_all: bool) {
        let mut inner = self.inner.lock().unwrap();
        inner.invoice_selected = invoices;
        inner.check_all = check_all;
    }

    pub fn set_credit_flags(&self, active_credit: bool, active_deposit: bool) {
        let mut inner = self.inner.lock().unwrap();
        inner.active_credit = active_credit;
        inner.active_deposit = active_deposit;
    }

    pub fn snapshot(&self) -> AddPaymentState {
        self.inner.lock().unwrap().clone()
    }
}

impl PaymentContext for AddPaymentContext {
    fn payment_selected(&self) -> Option<PaymentOption> {
        self.inner.lock().unwrap().payment_selected.clone()
    }

    fn customer_id(&self) -> Option<CustomerId> {
        self.inner.lock().unwrap().customer_id.clone()
    }

    fn update_payment_data(&self, data: PaymentData) {
        debug!(
            "Context: {} methods, selected {}",
            data.list_payment_method.len(),
            data.payment_selected.name
        );
        let mut inner = self.inner.lock().unwrap();
        inner.list_payment_method = data.list_payment_method;
        inner.payment_selected = Some(data.payment_selected);
    }

    fn update_number_payment(&self, change: SelectionChange) {
        debug!("Context: selected {}", change.payment_selected.name);
        let mut inner = self.inner.lock().unwrap();
        inner.payment_selected = Some(change.payment_selected);
        inner.value_payment = change.value_payment;
        inner.active_credit = change.active_credit;
        inner.active_deposit = change.active_deposit;
        if let Some(invoices) = change.invoice_selected {
            inner.invoice_selected = invoices;
        }
        if let Some(check_all) = change.check_all {
            inner.check_all = check_all;
        }
    }
}
