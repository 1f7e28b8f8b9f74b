//! Payment method picker
//!
//! Headless dropdown engine: open/close state with scoped global listeners,
//! type-ahead search, default resolution after a fetch and selection
//! dispatch to the shared payment context. Rendering lives in `tui`.

pub mod context;
pub mod default_resolver;
pub mod dispatcher;
pub mod events;
pub mod listeners;
pub mod store;
pub mod sub_view;
pub mod type_ahead;
pub mod visibility;
pub mod widget;

pub use context::{AddPaymentContext, AddPaymentState, PaymentContext, PaymentData, SelectionChange};
pub use default_resolver::{resolve_default, AddonFlags};
pub use dispatcher::{selection_change, SelectOutcome};
pub use events::{
    HitTarget, KeyPress, PointerEvent, Propagation, KEY_CODE_ENTER, KEY_CODE_ESCAPE, KEY_CODE_SPACE,
};
pub use listeners::{ListenerGuard, ListenerKind, ListenerRegistry, ListenerStats};
pub use store::{FetchTicket, OptionStore};
pub use sub_view::{Placeholder, SubView};
pub use type_ahead::TypeAheadCycler;
pub use visibility::VisibilityController;
pub use widget::{OptionRow, PaymentMethodsWidget};
