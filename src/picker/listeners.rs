//! Global listener registry
//!
//! Plays the role of a document-level listener table: the host runtime asks
//! it which global handlers are live before routing an event. Listeners are
//! only ever attached through a [`ListenerGuard`], which detaches them when
//! dropped, so a guard's lifetime is exactly the lifetime of its listeners.

use log::debug;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    /// Pointer down anywhere, used for outside-click dismissal
    PointerDown,
    /// Key down anywhere, used for Escape and type-ahead
    KeyDown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Shared handle to the listener table
#[derive(Debug, Clone, Default)]
pub struct ListenerRegistry {
    inner: Arc<Mutex<RegistryInner>>,
}

#[derive(Debug, Default)]
struct RegistryInner {
    next_id: u64,
    active: Vec<(ListenerId, ListenerKind)>,
    attached_total: u64,
    detached_total: u64,
}

/// Counters describing the registry's history
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerStats {
    pub active: usize,
    pub attached_total: u64,
    pub detached_total: u64,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn attach(&self, kind: ListenerKind) -> ListenerId {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        let id = ListenerId(inner.next_id);
        inner.active.push((id, kind));
        inner.attached_total += 1;
        debug!("Attached {:?} listener {:?}", kind, id);
        id
    }

    fn detach(&self, id: ListenerId) -> bool {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.active.len();
        inner.active.retain(|(active_id, _)| *active_id != id);
        let removed = inner.active.len() != before;
        if removed {
            inner.detached_total += 1;
            debug!("Detached listener {:?}", id);
        }
        removed
    }

    /// Whether any listener of this kind is currently attached
    pub fn is_listening(&self, kind: ListenerKind) -> bool {
        let inner = self.inner.lock().unwrap();
        inner.active.iter().any(|(_, k)| *k == kind)
    }

    pub fn active_count(&self) -> usize {
        self.inner.lock().unwrap().active.len()
    }

    pub fn stats(&self) -> ListenerStats {
        let inner = self.inner.lock().unwrap();
        ListenerStats {
            active: inner.active.len(),
            attached_total: inner.attached_total,
            detached_total: inner.detached_total,
        }
    }
}

/// Scoped ownership of one pointer-down + key-down listener pair
#[derive(Debug)]
pub struct ListenerGuard {
    registry: ListenerRegistry,
    pointer: ListenerId,
    key: ListenerId,
}

impl ListenerGuard {
    pub fn attach(registry: &ListenerRegistry) -> Self {
        Self {
            registry: registry.clone(),
            pointer: registry.attach(ListenerKind::PointerDown),
            key: registry.attach(ListenerKind::KeyDown),
        }
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.registry.detach(self.pointer);
        self.registry.detach(self.key);
    }
}
