use super::context::{PaymentContext, PaymentData};
use super::default_resolver::{resolve_default, AddonFlags};
use super::dispatcher::{self, SelectOutcome};
use super::events::{HitTarget, KeyPress, PointerEvent, Propagation};
use super::listeners::ListenerRegistry;
use super::store::{FetchTicket, OptionStore};
use super::sub_view::SubView;
use super::type_ahead::TypeAheadCycler;
use super::visibility::VisibilityController;
use crate::api::{CustomerId, MethodId, PaymentMethodSource, PaymentOption};
use anyhow::Result;
use log::debug;

/// One rendered row of the option list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionRow<'a> {
    pub option: &'a PaymentOption,
    pub is_active: bool,
}

/// Payment method dropdown
///
/// Owns the open state, the fetched options and the type-ahead cursors.
/// The selection itself lives in the context.
#[derive(Debug)]
pub struct PaymentMethodsWidget<C: PaymentContext> {
    context: C,
    addons: AddonFlags,
    store: OptionStore,
    visibility: VisibilityController,
    type_ahead: TypeAheadCycler,
    requested_for: Option<CustomerId>,
}

impl<C: PaymentContext> PaymentMethodsWidget<C> {
    pub fn new(context: C, addons: AddonFlags, listeners: ListenerRegistry) -> Self {
        Self {
            context,
            addons,
            store: OptionStore::new(),
            visibility: VisibilityController::new(listeners),
            type_ahead: TypeAheadCycler::new(),
            requested_for: None,
        }
    }

    pub fn context(&self) -> &C {
        &self.context
    }

    /// Start the first fetch
    pub fn mount(&mut self) -> Option<FetchTicket> {
        self.sync_customer()
    }

    /// Start a fetch if the context's customer differs from the last one requested
    pub fn sync_customer(&mut self) -> Option<FetchTicket> {
        let Some(customer_id) = self.context.customer_id() else {
            debug!("No customer in context, not fetching payment methods");
            return None;
        };
        if self.requested_for.as_ref() == Some(&customer_id) {
            return None;
        }

        self.requested_for = Some(customer_id.clone());
        Some(self.store.begin_fetch(customer_id))
    }

    /// Land a fetch result and push the resolved default to the context
    pub fn complete_fetch(&mut self, ticket: &FetchTicket, options: Vec<PaymentOption>) -> bool {
        if !self.store.complete(ticket, options) {
            return false;
        }

        let selected = resolve_default(self.store.options(), self.addons);
        debug!("Resolved default payment method: {}", selected.name);
        self.context.update_payment_data(PaymentData {
            list_payment_method: self.store.options().to_vec(),
            payment_selected: selected,
        });
        true
    }

    pub fn fail_fetch(&mut self, ticket: &FetchTicket, error: &anyhow::Error) {
        self.store.fail(ticket, error);
    }

    /// Fetch from `source` if needed and land the result
    ///
    /// Returns `Ok(false)` when no fetch was necessary or the result was stale.
    pub async fn load<S>(&mut self, source: &S) -> Result<bool>
    where
        S: PaymentMethodSource + ?Sized,
    {
        let Some(ticket) = self.sync_customer() else {
            return Ok(false);
        };

        match source.fetch_payment_methods(&ticket.customer_id).await {
            Ok(options) => Ok(self.complete_fetch(&ticket, options)),
            Err(error) => {
                self.fail_fetch(&ticket, &error);
                Err(error)
            }
        }
    }

    pub fn is_open(&self) -> bool {
        self.visibility.is_open()
    }

    pub fn is_loading(&self) -> bool {
        self.store.is_loading()
    }

    pub fn options(&self) -> &[PaymentOption] {
        self.store.options()
    }

    pub fn open(&mut self) {
        self.visibility.open();
    }

    pub fn close(&mut self) {
        self.visibility.close();
    }

    fn is_active(&self, id: MethodId) -> bool {
        self.context
            .payment_selected()
            .is_some_and(|selected| selected.id == id)
    }

    /// Name shown on the trigger
    pub fn selected_name(&self) -> String {
        self.context
            .payment_selected()
            .map(|selected| selected.name)
            .unwrap_or_default()
    }

    /// Options offered in the popup; credit is never listed
    pub fn visible_options(&self) -> Vec<OptionRow<'_>> {
        let selected = self.context.payment_selected().map(|selected| selected.id);
        self.store
            .options()
            .iter()
            .filter(|option| !option.id.is_credit())
            .map(|option| OptionRow {
                option,
                is_active: selected == Some(option.id),
            })
            .collect()
    }

    pub fn sub_view(&self) -> Option<SubView> {
        self.context
            .payment_selected()
            .map(|selected| SubView::for_method(selected.id))
    }

    /// Select an option and close unless `should_close` is false
    pub fn select(&mut self, option: &PaymentOption, should_close: bool) -> SelectOutcome {
        let is_active = self.is_active(option.id);
        dispatcher::select(&self.context, &mut self.visibility, option, is_active, should_close)
    }

    pub fn click_trigger(&mut self) -> Propagation {
        self.visibility.toggle();
        Propagation::Stopped
    }

    pub fn click_option(&mut self, id: MethodId) -> Propagation {
        let option = self
            .store
            .options()
            .iter()
            .find(|option| option.id == id && !option.id.is_credit())
            .cloned();

        match option {
            Some(option) => {
                self.select(&option, true);
            }
            None => debug!("Ignoring click on unknown payment method {}", id),
        }
        Propagation::Stopped
    }

    /// Global pointer-down handler, live only while open
    pub fn handle_pointer_down(&mut self, event: &PointerEvent) {
        if !self.visibility.is_open() {
            return;
        }
        if !event.target.is_inside() {
            debug!("Pointer down outside the dropdown");
            self.visibility.close();
        }
    }

    /// Global key-down handler, live only while open
    pub fn handle_key_down(&mut self, event: &KeyPress) {
        if !self.visibility.is_open() {
            return;
        }
        if event.is_escape() {
            self.visibility.close();
            return;
        }

        let Some(key) = event.typed_char() else {
            return;
        };
        let target = self.type_ahead.next(key, self.store.options()).cloned();
        if let Some(option) = target {
            self.select(&option, false);
        }
    }

    /// Route a pointer event: global listeners first, then the target
    pub fn dispatch_pointer(&mut self, event: PointerEvent) -> Propagation {
        self.handle_pointer_down(&event);

        match event.target {
            HitTarget::Trigger => self.click_trigger(),
            HitTarget::Option(id) => self.click_option(id),
            HitTarget::Popup | HitTarget::Outside => Propagation::Continue,
        }
    }

    /// Route a key event: global listeners while open, trigger activation while closed
    pub fn dispatch_key(&mut self, event: &KeyPress) -> Propagation {
        if self.visibility.is_open() {
            self.handle_key_down(event);
            return Propagation::Stopped;
        }

        if event.target == HitTarget::Trigger && event.is_activation() {
            return self.click_trigger();
        }
        Propagation::Continue
    }

    /// Tear the widget down, releasing any listeners
    pub fn unmount(self) {
        debug!("Unmounting payment methods widget");
    }
}
