use super::support::{c_options, mounted_widget, CARD_A, CARD_B};
use payment_picker::api::{methods, PaymentOption};
use payment_picker::picker::{AddonFlags, HitTarget, KeyPress, PointerEvent, Propagation};

#[test]
fn test_type_ahead_cycles_same_initial() {
    let (mut widget, context, _) = mounted_widget(c_options(), AddonFlags::default());
    widget.click_trigger();

    // Cash is the resolved default, so the first "c" re-selects it without an update
    let mut seen = Vec::new();
    for _ in 0..5 {
        widget.dispatch_key(&KeyPress::char('c'));
        seen.push(context.selected_id().unwrap());
    }

    assert_eq!(
        seen,
        vec![methods::CASH, methods::CHECK, CARD_A, CARD_B, methods::CASH]
    );
    assert_eq!(context.selection_updates().len(), 4);
    assert!(widget.is_open());
}

#[test]
fn test_type_ahead_without_match_changes_nothing() {
    let (mut widget, context, _) = mounted_widget(c_options(), AddonFlags::default());
    widget.open();

    widget.dispatch_key(&KeyPress::char('x'));
    assert!(context.selection_updates().is_empty());
    assert_eq!(context.selected_id(), Some(methods::CASH));
    assert!(widget.is_open());
}

#[test]
fn test_type_ahead_keeps_cycling_after_reopen() {
    let (mut widget, context, _) = mounted_widget(c_options(), AddonFlags::default());
    widget.open();
    widget.dispatch_key(&KeyPress::char('c'));
    widget.dispatch_key(&KeyPress::char('c'));
    assert_eq!(context.selected_id(), Some(methods::CHECK));

    widget.close();
    widget.open();
    widget.dispatch_key(&KeyPress::char('c'));
    assert_eq!(context.selected_id(), Some(CARD_A));
}

#[test]
fn test_escape_closes_even_inside_popup() {
    let (mut widget, _, registry) = mounted_widget(c_options(), AddonFlags::default());
    widget.open();

    let escape = KeyPress::escape().with_target(HitTarget::Popup);
    assert_eq!(widget.dispatch_key(&escape), Propagation::Stopped);
    assert!(!widget.is_open());
    assert_eq!(registry.active_count(), 0);
}

#[test]
fn test_outside_click_closes() {
    let (mut widget, context, _) = mounted_widget(c_options(), AddonFlags::default());
    widget.open();

    assert_eq!(
        widget.dispatch_pointer(PointerEvent::new(HitTarget::Outside)),
        Propagation::Continue
    );
    assert!(!widget.is_open());
    assert!(context.selection_updates().is_empty());
}

#[test]
fn test_click_inside_popup_keeps_open() {
    let (mut widget, _, _) = mounted_widget(c_options(), AddonFlags::default());
    widget.open();

    widget.dispatch_pointer(PointerEvent::new(HitTarget::Popup));
    assert!(widget.is_open());
}

#[test]
fn test_outside_click_while_closed_is_ignored() {
    let (mut widget, _, registry) = mounted_widget(c_options(), AddonFlags::default());
    widget.dispatch_pointer(PointerEvent::new(HitTarget::Outside));
    assert!(!widget.is_open());
    assert_eq!(registry.stats().attached_total, 0);
}

#[test]
fn test_open_then_double_close_is_one_listener_pair() {
    let (mut widget, _, registry) = mounted_widget(c_options(), AddonFlags::default());

    widget.open();
    widget.close();
    widget.close();

    let stats = registry.stats();
    assert_eq!(stats.active, 0);
    assert_eq!(stats.attached_total, 2);
    assert_eq!(stats.detached_total, 2);
}

#[test]
fn test_repeated_sessions_do_not_leak_listeners() {
    let (mut widget, _, registry) = mounted_widget(c_options(), AddonFlags::default());

    for _ in 0..3 {
        widget.dispatch_pointer(PointerEvent::new(HitTarget::Trigger));
        assert_eq!(registry.active_count(), 2);
        widget.dispatch_pointer(PointerEvent::new(HitTarget::Outside));
        assert_eq!(registry.active_count(), 0);
    }
    widget.dispatch_pointer(PointerEvent::new(HitTarget::Trigger));
    widget.dispatch_pointer(PointerEvent::new(HitTarget::Option(methods::CHECK)));
    assert_eq!(registry.active_count(), 0);
}

#[test]
fn test_drop_while_open_detaches_listeners() {
    let (mut widget, _, registry) = mounted_widget(c_options(), AddonFlags::default());
    widget.open();
    drop(widget);
    assert_eq!(registry.active_count(), 0);
}

#[test]
fn test_nothing_selectable_while_refetching() {
    let (mut widget, context, _) = mounted_widget(c_options(), AddonFlags::default());
    context.set_customer("cust-2");
    assert!(widget.sync_customer().is_some());
    assert!(widget.is_loading());

    widget.open();
    widget.click_option(methods::CHECK);
    widget.dispatch_key(&KeyPress::char('c'));

    assert!(context.selection_updates().is_empty());
    assert_eq!(context.selected_id(), Some(methods::CASH));
    assert!(widget.visible_options().is_empty());
    assert!(widget.is_open());
}

#[test]
fn test_other_letter_restarts_type_ahead() {
    let mut options = c_options();
    options.push(PaymentOption::new(methods::ACH, "ACH"));
    let (mut widget, context, _) = mounted_widget(options, AddonFlags::default());
    widget.open();

    for key in ['c', 'c', 'a', 'c'] {
        widget.dispatch_key(&KeyPress::char(key));
    }

    assert_eq!(context.selected_id(), Some(methods::CASH));
}
