use super::context::{PaymentContext, SelectionChange};
use super::visibility::VisibilityController;
use crate::api::PaymentOption;
use log::info;

/// Result of a selection attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Candidate was already the active option
    Unchanged,
    /// Change published to the context
    Applied(SelectionChange),
}

/// Build the record published when `candidate` becomes the selection
pub fn selection_change(candidate: &PaymentOption) -> SelectionChange {
    let ach = candidate.id.is_ach();
    SelectionChange {
        payment_selected: candidate.clone(),
        value_payment: String::new(),
        active_credit: false,
        active_deposit: false,
        invoice_selected: ach.then(Vec::new),
        check_all: ach.then_some(false),
    }
}

/// Validate and apply a selection
pub fn select<C: PaymentContext>(
    context: &C,
    visibility: &mut VisibilityController,
    candidate: &PaymentOption,
    is_already_active: bool,
    should_close: bool,
) -> SelectOutcome {
    if is_already_active {
        return SelectOutcome::Unchanged;
    }

    let change = selection_change(candidate);
    info!("Selected payment method {} ({})", candidate.name, candidate.id);
    context.update_number_payment(change.clone());

    if should_close {
        visibility.close();
    }

    SelectOutcome::Applied(change)
}
