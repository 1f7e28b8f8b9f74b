use super::support::{c_options, mounted_widget};
use payment_picker::api::{methods, CustomerId, PaymentOption};
use payment_picker::picker::{
    AddPaymentContext, AddonFlags, HitTarget, KeyPress, ListenerRegistry, PaymentContext,
    PaymentMethodsWidget, PointerEvent, SelectOutcome, SubView,
};

fn with_ach() -> Vec<PaymentOption> {
    let mut options = c_options();
    options.push(PaymentOption::new(methods::ACH, "ACH"));
    options
}

#[test]
fn test_reselecting_active_option_publishes_nothing() {
    let (mut widget, context, _) = mounted_widget(c_options(), AddonFlags::default());
    widget.open();

    widget.dispatch_pointer(PointerEvent::new(HitTarget::Option(methods::CASH)));

    assert!(context.selection_updates().is_empty());
    assert_eq!(context.data_updates().len(), 1);
    // No change, so the dropdown is left as it was
    assert!(widget.is_open());
}

#[test]
fn test_select_returns_unchanged_for_active() {
    let (mut widget, _, _) = mounted_widget(c_options(), AddonFlags::default());
    let cash = PaymentOption::new(methods::CASH, "Cash");
    assert_eq!(widget.select(&cash, true), SelectOutcome::Unchanged);
}

#[test]
fn test_pointer_selection_closes_and_resets_fields() {
    let (mut widget, context, _) = mounted_widget(c_options(), AddonFlags::default());
    widget.click_trigger();
    widget.click_option(methods::CHECK);

    assert!(!widget.is_open());
    let updates = context.selection_updates();
    assert_eq!(updates.len(), 1);
    let change = &updates[0];
    assert_eq!(change.payment_selected.id, methods::CHECK);
    assert_eq!(change.value_payment, "");
    assert!(!change.active_credit);
    assert!(!change.active_deposit);
    assert_eq!(change.invoice_selected, None);
    assert_eq!(change.check_all, None);
}

#[test]
fn test_ach_selection_clears_invoices_in_same_update() {
    let context = AddPaymentContext::new(CustomerId::new("cust-9"));
    let mut widget = PaymentMethodsWidget::new(context.clone(), AddonFlags::default(), ListenerRegistry::new());
    let ticket = widget.mount().unwrap();
    widget.complete_fetch(&ticket, with_ach());

    context.set_invoices(vec!["INV-1".to_string(), "INV-2".to_string()], true);
    context.set_value_payment("memo text");
    context.set_credit_flags(true, true);

    widget.open();
    widget.click_option(methods::ACH);

    let state = context.snapshot();
    assert_eq!(state.payment_selected.map(|option| option.id), Some(methods::ACH));
    assert!(state.invoice_selected.is_empty());
    assert!(!state.check_all);
    assert_eq!(state.value_payment, "");
    assert!(!state.active_credit);
    assert!(!state.active_deposit);
}

#[test]
fn test_ach_record_carries_invoice_reset() {
    let (mut widget, context, _) = mounted_widget(with_ach(), AddonFlags::default());
    widget.open();
    widget.dispatch_pointer(PointerEvent::new(HitTarget::Option(methods::ACH)));

    let updates = context.selection_updates();
    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0].invoice_selected, Some(Vec::new()));
    assert_eq!(updates[0].check_all, Some(false));
}

#[test]
fn test_sub_view_follows_selection() {
    let (mut widget, _, _) = mounted_widget(with_ach(), AddonFlags::default());
    assert!(matches!(widget.sub_view(), Some(SubView::ValueEntry { .. })));

    widget.open();
    widget.click_option(methods::ACH);
    assert_eq!(widget.sub_view(), Some(SubView::CardEntry));
    assert_eq!(widget.selected_name(), "ACH");
}

#[test]
fn test_type_ahead_can_reach_credit() {
    let options = vec![
        PaymentOption::new(methods::CASH, "Cash"),
        PaymentOption::new(methods::CREDIT, "Credit"),
    ];
    let (mut widget, context, _) = mounted_widget(options, AddonFlags::default());
    widget.open();

    widget.dispatch_key(&KeyPress::char('c'));
    widget.dispatch_key(&KeyPress::char('c'));

    assert_eq!(context.selected_id(), Some(methods::CREDIT));
    assert_eq!(widget.sub_view(), Some(SubView::Hidden));
    assert!(widget.visible_options().iter().all(|row| !row.option.id.is_credit()));
    assert_eq!(context.payment_selected().map(|option| option.name), Some("Credit".to_string()));
}
