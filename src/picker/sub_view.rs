use crate::api::{methods, MethodId};

/// Placeholder shown in the value-entry view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Memo,
    CheckNumber,
}

impl Placeholder {
    pub fn translation_key(self) -> &'static str {
        match self {
            Placeholder::Memo => "customers:memo",
            Placeholder::CheckNumber => "customers:check_number",
        }
    }
}

/// Dependent view rendered next to the picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubView {
    /// Free-text value entry
    ValueEntry { placeholder: Placeholder },
    /// Saved card / bank account entry
    CardEntry,
    /// Nothing rendered
    Hidden,
}

impl SubView {
    pub fn for_method(id: MethodId) -> Self {
        match id {
            methods::CREDIT | methods::DEPOSIT => SubView::Hidden,
            methods::CASH => SubView::ValueEntry { placeholder: Placeholder::Memo },
            methods::CHECK => SubView::ValueEntry { placeholder: Placeholder::CheckNumber },
            methods::STRIPE | methods::SQUARE | methods::ACH => SubView::CardEntry,
            _ => SubView::ValueEntry { placeholder: Placeholder::Memo },
        }
    }
}
