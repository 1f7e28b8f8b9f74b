use super::listeners::{ListenerGuard, ListenerRegistry};
use log::debug;

/// Open/closed state of the dropdown and the listeners bound to it
///
/// The listener pair lives inside `guard`, so it exists exactly while the
/// dropdown is open and disappears with the controller.
#[derive(Debug)]
pub struct VisibilityController {
    registry: ListenerRegistry,
    guard: Option<ListenerGuard>,
}

impl VisibilityController {
    pub fn new(registry: ListenerRegistry) -> Self {
        Self {
            registry,
            guard: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.guard.is_some()
    }

    /// Open the dropdown. Returns true if the state changed.
    pub fn open(&mut self) -> bool {
        if self.is_open() {
            return false;
        }
        debug!("Opening dropdown");
        self.guard = Some(ListenerGuard::attach(&self.registry));
        true
    }

    /// Close the dropdown. Closing a closed dropdown is a no-op.
    pub fn close(&mut self) -> bool {
        match self.guard.take() {
            Some(guard) => {
                debug!("Closing dropdown");
                drop(guard);
                true
            }
            None => false,
        }
    }

    pub fn toggle(&mut self) {
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
    }

    pub fn registry(&self) -> &ListenerRegistry {
        &self.registry
    }
}
