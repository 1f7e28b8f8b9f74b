use anyhow::Result;
use async_trait::async_trait;
use payment_picker::api::{methods, CustomerId, MethodId, PaymentMethodSource, PaymentOption};
use payment_picker::picker::{
    AddonFlags, ListenerRegistry, PaymentContext, PaymentData, PaymentMethodsWidget, SelectionChange,
};
use std::sync::{Arc, Mutex};

/// Context double that records every write
#[derive(Debug, Clone, Default)]
pub struct RecordingContext {
    inner: Arc<Mutex<Recorded>>,
}

#[derive(Debug, Default)]
pub struct Recorded {
    pub customer_id: Option<CustomerId>,
    pub selected: Option<PaymentOption>,
    pub data_updates: Vec<PaymentData>,
    pub selection_updates: Vec<SelectionChange>,
}

impl RecordingContext {
    pub fn new(customer: &str) -> Self {
        let context = Self::default();
        context.inner.lock().unwrap().customer_id = Some(CustomerId::new(customer));
        context
    }

    pub fn set_customer(&self, customer: &str) {
        self.inner.lock().unwrap().customer_id = Some(CustomerId::new(customer));
    }

    pub fn data_updates(&self) -> Vec<PaymentData> {
        self.inner.lock().unwrap().data_updates.clone()
    }

    pub fn selection_updates(&self) -> Vec<SelectionChange> {
        self.inner.lock().unwrap().selection_updates.clone()
    }

    pub fn selected_id(&self) -> Option<MethodId> {
        self.inner.lock().unwrap().selected.as_ref().map(|option| option.id)
    }
}

impl PaymentContext for RecordingContext {
    fn payment_selected(&self) -> Option<PaymentOption> {
        self.inner.lock().unwrap().selected.clone()
    }

    fn customer_id(&self) -> Option<CustomerId> {
        self.inner.lock().unwrap().customer_id.clone()
    }

    fn update_payment_data(&self, data: PaymentData) {
        let mut inner = self.inner.lock().unwrap();
        inner.selected = Some(data.payment_selected.clone());
        inner.data_updates.push(data);
    }

    fn update_number_payment(&self, change: SelectionChange) {
        let mut inner = self.inner.lock().unwrap();
        inner.selected = Some(change.payment_selected.clone());
        inner.selection_updates.push(change);
    }
}

/// Source returning a fixed list
pub struct StaticSource(pub Vec<PaymentOption>);

#[async_trait]
impl PaymentMethodSource for StaticSource {
    async fn fetch_payment_methods(&self, _customer_id: &CustomerId) -> Result<Vec<PaymentOption>> {
        Ok(self.0.clone())
    }
}

/// Source that always fails
pub struct FailingSource;

#[async_trait]
impl PaymentMethodSource for FailingSource {
    async fn fetch_payment_methods(&self, customer_id: &CustomerId) -> Result<Vec<PaymentOption>> {
        anyhow::bail!("backend unavailable for {}", customer_id)
    }
}

pub const CARD_A: MethodId = MethodId(10);
pub const CARD_B: MethodId = MethodId(11);

pub fn c_options() -> Vec<PaymentOption> {
    vec![
        PaymentOption::new(methods::CASH, "Cash"),
        PaymentOption::new(methods::CHECK, "Check"),
        PaymentOption::new(CARD_A, "Card A"),
        PaymentOption::new(CARD_B, "Card B"),
    ]
}

pub fn mounted_widget(
    options: Vec<PaymentOption>,
    addons: AddonFlags,
) -> (PaymentMethodsWidget<RecordingContext>, RecordingContext, ListenerRegistry) {
    let context = RecordingContext::new("cust-1");
    let registry = ListenerRegistry::new();
    let mut widget = PaymentMethodsWidget::new(context.clone(), addons, registry.clone());
    let ticket = widget.mount().expect("customer is set");
    assert!(widget.complete_fetch(&ticket, options));
    (widget, context, registry)
}
